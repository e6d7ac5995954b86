use crate::domain::RawCommit;
use crate::error::{ReleaseError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }
}

fn unborn_as_no_commits(e: git2::Error) -> ReleaseError {
    match e.code() {
        git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound => ReleaseError::NoCommits,
        _ => ReleaseError::Git(e),
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn find_tag_target(&self, tag_name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let commit = reference
                    .peel_to_commit()
                    .map_err(|e| ReleaseError::tag(format!("Cannot peel tag '{}': {}", tag_name, e)))?;

                Ok(Some(commit.id()))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(ReleaseError::tag(format!(
                "Cannot find tag '{}': {}",
                tag_name, e
            ))),
        }
    }

    fn head_oid(&self) -> Result<Oid> {
        let head = self.repo.head().map_err(unborn_as_no_commits)?;
        let commit = head.peel_to_commit()?;
        Ok(commit.id())
    }

    fn commits_from_head(&self) -> Result<Vec<RawCommit>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        revwalk.push_head().map_err(unborn_as_no_commits)?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

            commits.push(RawCommit::new(oid.to_string(), message));
        }

        debug!(count = commits.len(), "read commit log");
        Ok(commits)
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let object = self
            .repo
            .find_object(oid, None)
            .map_err(|e| ReleaseError::tag(format!("Cannot find object: {}", e)))?;

        self.repo
            .tag_lightweight(name, &object, false)
            .map_err(|e| ReleaseError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, tag_name: &str, token: Option<&str>) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| ReleaseError::remote(format!("Cannot find remote: {}", e)))?;

        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(move |_url, username_from_url, allowed_types| {
            if let Some(token) = token {
                if allowed_types.contains(git2::CredentialType::USER_PASS_PLAINTEXT) {
                    return git2::Cred::userpass_plaintext("x-access-token", token);
                }
            }
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                return git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"));
            }
            git2::Cred::default()
        });
        callbacks.push_update_reference(|refname, status| match status {
            Some(status) => Err(git2::Error::from_str(&format!(
                "Remote rejected {}: {}",
                refname, status
            ))),
            None => Ok(()),
        });

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(callbacks);

        let refspec = format!("+refs/tags/{}:refs/tags/{}", tag_name, tag_name);
        remote
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| match e.class() {
                git2::ErrorClass::Net => {
                    ReleaseError::remote(format!("Network error during push: {}", e))
                }
                _ => ReleaseError::remote(format!("Failed to push tag '{}': {}", tag_name, e)),
            })?;

        Ok(())
    }
}
