//! Analysis engine for determining version bumps from commits

pub mod bump;

pub use bump::{determine, BumpDeterminer};
