//! Git operations abstraction layer
//!
//! The release pipeline itself never touches a repository. Everything it
//! needs from git (tags, the commit log, tagging and pushing) goes through the
//! [Repository] trait:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust,no_run
//! # use semver_release::git::{Git2Repository, Repository};
//! # fn example() -> semver_release::Result<()> {
//! let repo = Git2Repository::open(".")?;
//! for commit in repo.commits_from_head()? {
//!     println!("{}: {}", commit.id, commit.summary());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::RawCommit;
use crate::error::Result;
use git2::Oid;

/// Common git operation trait for abstraction
///
/// All methods return [crate::error::Result<T>]; implementations map
/// underlying errors (like `git2::Error`) to [crate::error::ReleaseError].
pub trait Repository {
    /// Names of all tags in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commit a tag points at, peeling annotated tags.
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - The tagged commit
    /// * `Ok(None)` - If the tag doesn't exist
    /// * `Err` - If the tag can't be resolved to a commit
    fn find_tag_target(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Commit currently checked out
    fn head_oid(&self) -> Result<Oid>;

    /// History reachable from HEAD, newest first.
    ///
    /// The release pipeline stops walking at the previous release itself.
    fn commits_from_head(&self) -> Result<Vec<RawCommit>>;

    /// Create a lightweight tag at the given commit
    fn create_tag(&self, name: &str, oid: Oid) -> Result<()>;

    /// Push a single tag to a remote.
    ///
    /// With a `token`, HTTPS remotes authenticate as `x-access-token`.
    fn push_tag(&self, remote: &str, tag_name: &str, token: Option<&str>) -> Result<()>;
}
