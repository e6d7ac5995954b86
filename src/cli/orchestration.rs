//! Main workflow orchestration logic
//!
//! Reads the previous release and the commit log from a [Repository], plans
//! the release, and tags and pushes it when asked to. Printing is left to the
//! caller so the workflow can be driven programmatically and tested against
//! [crate::git::MockRepository].

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::boundary::BoundaryWarning;
use crate::domain::{latest_version_tag, Version};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::publish::{ReleasePublisher, ReleaseRequest};
use crate::release::{plan_release, ReleaseOutcome};
use crate::rules::ReleaseRules;

/// Arguments for the release workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Tag the release and push the tag
    pub push: bool,

    /// Remote to push the tag to
    pub remote: String,

    /// Token used for HTTPS authentication when pushing
    pub token: Option<String>,

    /// Compute everything but never tag or push
    pub dry_run: bool,
}

impl Default for ReleaseWorkflowArgs {
    fn default() -> Self {
        ReleaseWorkflowArgs {
            push: false,
            remote: "origin".to_string(),
            token: None,
            dry_run: false,
        }
    }
}

/// Result of a release workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Latest version tag found before the run
    pub previous_tag: Option<String>,

    pub outcome: ReleaseOutcome,

    /// The tag that was created, if any
    pub tag: Option<String>,

    /// Whether the tag was pushed to remote
    pub pushed: bool,

    /// URL of the hosted release, if one was published
    pub release_url: Option<String>,

    pub warnings: Vec<BoundaryWarning>,
}

impl WorkflowResult {
    /// Next version, when a release is warranted
    pub fn next_version(&self) -> Option<Version> {
        self.outcome.plan().map(|plan| plan.next)
    }
}

/// Main release workflow
///
/// 1. Find the latest `vX.Y.Z` tag and the commit it points at
/// 2. Read the commit log from HEAD
/// 3. Plan the release from the commits since that tag
/// 4. Create and push the new tag when `args.push` is set
/// 5. Publish the notes as a hosted release through `publisher`, if given
pub fn run_release_workflow<R: Repository>(
    repo: &R,
    args: &ReleaseWorkflowArgs,
    rules: &ReleaseRules,
    publisher: Option<&dyn ReleasePublisher>,
) -> Result<WorkflowResult> {
    let mut warnings = Vec::new();

    let latest = latest_version_tag(repo.list_tags()?);
    let (previous, boundary) = match &latest {
        Some(tag) => {
            let target = repo.find_tag_target(&tag.name)?.ok_or_else(|| {
                ReleaseError::tag(format!("Could not read tag {}", tag.name))
            })?;
            info!(tag = %tag.name, commit = %target, "latest release");
            (Version::from(&tag.version), Some(target.to_string()))
        }
        None => {
            let assumed = Version::default();
            warnings.push(BoundaryWarning::NoVersionTag {
                assumed: assumed.to_string(),
            });
            (assumed, None)
        }
    };

    let commits = repo.commits_from_head()?;
    if commits.is_empty() {
        return Err(ReleaseError::NoCommits);
    }

    let outcome = plan_release(&commits, boundary.as_deref(), previous, rules)?;

    let selection = outcome.selection();
    warnings.extend(
        selection
            .skipped
            .iter()
            .map(|summary| BoundaryWarning::NonConventionalCommit {
                summary: summary.clone(),
            }),
    );
    if selection.ignored > 0 {
        warnings.push(BoundaryWarning::IgnoredCommits {
            count: selection.ignored,
        });
    }
    if let (ReleaseOutcome::NoNewCommits(_), Some(tag)) = (&outcome, &latest) {
        warnings.push(BoundaryWarning::NoNewCommits {
            latest_tag: tag.name.clone(),
            current_commit_hash: repo.head_oid()?.to_string(),
        });
    }

    let mut result = WorkflowResult {
        previous_tag: latest.map(|tag| tag.name),
        outcome,
        tag: None,
        pushed: false,
        release_url: None,
        warnings,
    };

    let Some(next) = result.next_version() else {
        return Ok(result);
    };
    if !args.push || args.dry_run {
        return Ok(result);
    }

    let tag = next.to_string();
    let head = repo.head_oid()?;
    repo.create_tag(&tag, head)?;
    info!(%tag, commit = %head, "created tag");

    repo.push_tag(&args.remote, &tag, args.token.as_deref())?;
    info!(%tag, remote = %args.remote, "pushed tag");

    result.tag = Some(tag.clone());
    result.pushed = true;

    if let (Some(publisher), Some(plan)) = (publisher, result.outcome.plan()) {
        let url = publisher.create_release(&ReleaseRequest::for_tag(tag, plan.notes.clone()))?;
        result.release_url = Some(url);
    }
    Ok(result)
}

/// Append `key=value` to a step-output file such as `$GITHUB_OUTPUT`
pub fn append_output(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}={}", key, value)?;
    Ok(())
}
