//! Output formatting for subnet reports.
//!
//! - [`terminal`] - Terminal output with colors and the serializable report row

mod terminal;

pub use terminal::{format_field, print_report, SubnetReport};
