//! Integration tests, built as a single test binary.

mod helpers;

mod cli_test;
mod console_test;
mod render_test;
