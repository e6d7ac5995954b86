//! Hosted release publishing
//!
//! Once the tag is pushed, the release notes are published on the hosting
//! service through the [ReleasePublisher] trait:
//!
//! - [github::GitHubPublisher]: GitHub Releases via `octocrab`
//! - [mock::MockPublisher]: records releases in memory for testing

pub mod github;
pub mod mock;

pub use github::{GitHubPublisher, GitHubReleaseConfig};
pub use mock::MockPublisher;

use crate::error::Result;

/// A release as handed to the hosting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    /// Tag the release points at, e.g. `v1.4.0`
    pub tag: String,
    /// Display name of the release
    pub name: String,
    /// Markdown release notes
    pub body: String,
}

impl ReleaseRequest {
    /// A release named after its tag
    pub fn for_tag(tag: impl Into<String>, body: impl Into<String>) -> Self {
        let tag = tag.into();
        ReleaseRequest {
            name: tag.clone(),
            tag,
            body: body.into(),
        }
    }
}

pub trait ReleasePublisher {
    /// Create the release and return its URL
    fn create_release(&self, release: &ReleaseRequest) -> Result<String>;
}
