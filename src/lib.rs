pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod eql;
pub mod error;
pub mod git;
pub mod notes;
pub mod publish;
pub mod release;
pub mod rules;
pub mod ui;

pub use error::{ReleaseError, Result};
