//! Glue between the command line and the release pipeline

pub mod orchestration;

pub use orchestration::{append_output, run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};
