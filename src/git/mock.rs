use crate::domain::RawCommit;
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use git2::Oid;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    /// Log order, newest first
    commits: Vec<RawCommit>,
    tags: HashMap<String, Oid>,
    head: Option<Oid>,
    created_tags: RefCell<Vec<(String, Oid)>>,
    pushed_tags: RefCell<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
            head: None,
            created_tags: RefCell::new(Vec::new()),
            pushed_tags: RefCell::new(Vec::new()),
        }
    }

    /// Record a new commit on top of the history and move HEAD to it
    pub fn commit(&mut self, oid: Oid, message: impl Into<String>) {
        self.commits
            .insert(0, RawCommit::new(oid.to_string(), message));
        self.head = Some(oid);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Tags created through [Repository::create_tag]
    pub fn created_tags(&self) -> Vec<(String, Oid)> {
        self.created_tags.borrow().clone()
    }

    /// `(remote, tag)` pairs pushed through [Repository::push_tag]
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed_tags.borrow().clone()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self.tags.keys().cloned().collect();
        tags.sort();
        Ok(tags)
    }

    fn find_tag_target(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags.get(tag_name).copied())
    }

    fn head_oid(&self) -> Result<Oid> {
        self.head.ok_or(ReleaseError::NoCommits)
    }

    fn commits_from_head(&self) -> Result<Vec<RawCommit>> {
        Ok(self.commits.clone())
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        if self.tags.contains_key(name)
            || self.created_tags.borrow().iter().any(|(n, _)| n == name)
        {
            return Err(ReleaseError::tag(format!("Tag '{}' already exists", name)));
        }
        self.created_tags.borrow_mut().push((name.to_string(), oid));
        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str, _token: Option<&str>) -> Result<()> {
        self.pushed_tags
            .borrow_mut()
            .push((remote.to_string(), tag_name.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    #[test]
    fn test_mock_repository_log_is_newest_first() {
        let mut repo = MockRepository::new();
        repo.commit(oid(1), "feat: first");
        repo.commit(oid(2), "fix: second");

        let commits = repo.commits_from_head().unwrap();
        assert_eq!(commits[0].message, "fix: second");
        assert_eq!(commits[1].id, oid(1).to_string());
        assert_eq!(repo.head_oid().unwrap(), oid(2));
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0", oid(2));

        assert_eq!(repo.find_tag_target("v1.0.0").unwrap(), Some(oid(2)));
        assert_eq!(repo.find_tag_target("v2.0.0").unwrap(), None);
        assert_eq!(repo.list_tags().unwrap(), vec!["v1.0.0"]);
    }

    #[test]
    fn test_mock_repository_records_tagging() {
        let repo = MockRepository::default();
        repo.create_tag("v0.1.0", oid(3)).unwrap();
        repo.push_tag("origin", "v0.1.0", None).unwrap();

        assert_eq!(repo.created_tags(), vec![("v0.1.0".to_string(), oid(3))]);
        assert_eq!(
            repo.pushed_tags(),
            vec![("origin".to_string(), "v0.1.0".to_string())]
        );
        assert!(repo.create_tag("v0.1.0", oid(3)).is_err());
    }

    #[test]
    fn test_empty_repository_has_no_head() {
        assert!(matches!(
            MockRepository::new().head_oid(),
            Err(ReleaseError::NoCommits)
        ));
    }
}
