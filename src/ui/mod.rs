//! Console output for the command-line tool.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction, display_notes,
    display_release, display_run_info, display_status, display_success, format_run_info,
};
