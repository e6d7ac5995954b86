//! Domain logic - pure release rules independent of git operations

pub mod commit;
pub mod severity;
pub mod tag;
pub mod version;

pub use commit::{RawCommit, StructuredCommit};
pub use severity::SeverityLevel;
pub use tag::{latest_version_tag, VersionTag};
pub use version::Version;
