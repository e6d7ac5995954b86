use super::{ReleasePublisher, ReleaseRequest};
use crate::error::{ReleaseError, Result};
use std::cell::RefCell;

/// Mock publisher for testing without network access
#[derive(Default)]
pub struct MockPublisher {
    published: RefCell<Vec<ReleaseRequest>>,
    fail: bool,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every request is rejected
    pub fn failing() -> Self {
        MockPublisher {
            fail: true,
            ..Self::default()
        }
    }

    /// Releases created through [ReleasePublisher::create_release]
    pub fn published(&self) -> Vec<ReleaseRequest> {
        self.published.borrow().clone()
    }
}

impl ReleasePublisher for MockPublisher {
    fn create_release(&self, release: &ReleaseRequest) -> Result<String> {
        if self.fail {
            return Err(ReleaseError::remote("Error creating release: rejected"));
        }
        self.published.borrow_mut().push(release.clone());
        Ok(format!("https://example.invalid/releases/tag/{}", release.tag))
    }
}
