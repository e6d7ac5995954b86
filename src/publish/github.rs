use octocrab::Octocrab;
use tracing::{debug, info};

use super::{ReleasePublisher, ReleaseRequest};
use crate::error::{ReleaseError, Result};

/// Target repository and credentials for GitHub Releases
#[derive(Debug, Clone)]
pub struct GitHubReleaseConfig {
    pub owner: String,
    pub repo: String,
    pub token: String,
}

impl GitHubReleaseConfig {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, token: impl Into<String>) -> Self {
        GitHubReleaseConfig {
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
        }
    }

    /// Build from an `owner/name` slug such as `$GITHUB_REPOSITORY`
    pub fn from_slug(slug: &str, token: impl Into<String>) -> Result<Self> {
        match slug.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(owner, repo, token))
            }
            _ => Err(ReleaseError::config(format!(
                "Invalid repository '{}' - expected owner/name",
                slug
            ))),
        }
    }
}

/// Publishes releases through the GitHub REST API
pub struct GitHubPublisher {
    config: GitHubReleaseConfig,
}

impl GitHubPublisher {
    pub fn new(config: GitHubReleaseConfig) -> Self {
        GitHubPublisher { config }
    }

    pub fn config(&self) -> &GitHubReleaseConfig {
        &self.config
    }

    fn client(&self) -> Result<Octocrab> {
        Octocrab::builder()
            .personal_token(self.config.token.clone())
            .build()
            .map_err(|e| ReleaseError::remote(format!("Cannot create GitHub client: {}", e)))
    }

    async fn publish(&self, release: &ReleaseRequest) -> Result<String> {
        let client = self.client()?;
        debug!(
            owner = %self.config.owner,
            repo = %self.config.repo,
            tag = %release.tag,
            "creating GitHub release"
        );

        let created = client
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .create(&release.tag)
            .name(&release.name)
            .body(&release.body)
            .draft(false)
            .prerelease(false)
            .send()
            .await
            .map_err(|e| ReleaseError::remote(format!("Error creating release: {}", e)))?;

        info!(tag = %release.tag, url = %created.html_url, "published release");
        Ok(created.html_url.to_string())
    }
}

impl ReleasePublisher for GitHubPublisher {
    fn create_release(&self, release: &ReleaseRequest) -> Result<String> {
        // single request, so a mini runtime is enough
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(self.publish(release))
    }
}
