//! User interface module - terminal output for the command line tool.
//!
//! Everything here writes to stderr; stdout is reserved for the version.

pub mod formatter;

pub use formatter::{
    display_boundary_warnings, display_error, display_explanation, format_explanation,
    Explanation,
};
