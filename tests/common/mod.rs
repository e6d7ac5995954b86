#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Scratch repository whose commits get strictly increasing timestamps
pub struct ScratchRepo {
    pub dir: TempDir,
    pub repo: Repository,
    clock: i64,
}

impl ScratchRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        ScratchRepo {
            dir,
            repo,
            clock: 1_600_000_000,
        }
    }

    pub fn commit(&mut self, message: &str) -> Oid {
        self.clock += 60;
        let sig = Signature::new("Test", "test@example.com", &Time::new(self.clock, 0)).unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parent = self
            .repo
            .head()
            .ok()
            .map(|head| head.peel_to_commit().unwrap());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    pub fn annotated_tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).unwrap();
        let sig = Signature::new("Test", "test@example.com", &Time::new(self.clock, 0)).unwrap();
        self.repo.tag(name, &object, &sig, "release", false).unwrap();
    }
}
