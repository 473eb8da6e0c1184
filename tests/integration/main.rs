//! Integration tests for termgloss.

mod helpers;

mod border_test;
mod config_test;
mod layout_test;
mod measure_test;
mod render_test;
