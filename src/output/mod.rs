//! Output formatting module
//!
//! Provides rich terminal output with colors and tables, plus JSON export.

pub mod json;
pub mod terminal;

pub use json::{print_json, to_json_output, JsonOutput};
pub use terminal::{
    create_progress_bar, create_spinner, print_batch_summary, print_batch_table, print_error,
    print_header, print_info, print_result, print_success, print_warning, BatchRow,
};
