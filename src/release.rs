//! Pure release planning: raw commits in, next version and notes out.

use crate::analyzer::BumpDeterminer;
use crate::domain::{RawCommit, SeverityLevel, StructuredCommit, Version};
use crate::error::Result;
use crate::notes;
use crate::rules::ReleaseRules;
use tracing::{debug, warn};

/// Commits since the last release, after parsing and filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSelection {
    /// Conventional commits that take part in the release, in log order
    pub commits: Vec<StructuredCommit>,
    /// Conventional commits dropped by the ignore list
    pub ignored: usize,
    /// First lines of commits that are not conventional
    pub skipped: Vec<String>,
}

/// A release that should be cut
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub previous: Version,
    pub next: Version,
    pub severity: SeverityLevel,
    pub notes: String,
    pub selection: CommitSelection,
}

/// Result of planning a release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// No conventional commit survived filtering
    NoNewCommits(CommitSelection),
    /// Commits exist but none of them matches a rule
    NoRelease(CommitSelection),
    Release(ReleasePlan),
}

impl ReleaseOutcome {
    pub fn selection(&self) -> &CommitSelection {
        match self {
            ReleaseOutcome::NoNewCommits(selection) | ReleaseOutcome::NoRelease(selection) => {
                selection
            }
            ReleaseOutcome::Release(plan) => &plan.selection,
        }
    }

    pub fn plan(&self) -> Option<&ReleasePlan> {
        match self {
            ReleaseOutcome::Release(plan) => Some(plan),
            _ => None,
        }
    }
}

/// Parse commits up to (not including) `boundary` and drop ignored types.
///
/// `commits` must be in log order; that order is kept since the bump
/// decision depends on it.
pub fn select_commits(
    commits: &[RawCommit],
    boundary: Option<&str>,
    rules: &ReleaseRules,
) -> CommitSelection {
    let mut selection = CommitSelection::default();

    for raw in commits {
        if boundary == Some(raw.id.as_str()) {
            debug!(id = %raw.id, "reached previous release");
            break;
        }

        let Some(commit) = StructuredCommit::parse(raw.message.trim()) else {
            warn!(id = %raw.id, summary = raw.summary(), "ignoring non-standard commit");
            selection.skipped.push(raw.summary().to_string());
            continue;
        };

        if rules.ignore.matches(&commit) {
            debug!(id = %raw.id, commit_type = %commit.r#type, "commit type is ignored");
            selection.ignored += 1;
            continue;
        }

        selection.commits.push(commit);
    }

    selection
}

/// Decide whether and how to release on top of `previous`.
///
/// Only fails when `previous` cannot be bumped any further.
pub fn plan_release(
    commits: &[RawCommit],
    boundary: Option<&str>,
    previous: Version,
    rules: &ReleaseRules,
) -> Result<ReleaseOutcome> {
    let selection = select_commits(commits, boundary, rules);
    if selection.commits.is_empty() {
        return Ok(ReleaseOutcome::NoNewCommits(selection));
    }

    let severity = BumpDeterminer::new(&rules.rules).determine(&selection.commits);
    if severity == SeverityLevel::None {
        return Ok(ReleaseOutcome::NoRelease(selection));
    }

    let next = previous.bump(severity)?;
    debug!(%previous, %next, %severity, "planned release");

    Ok(ReleaseOutcome::Release(ReleasePlan {
        previous,
        next,
        severity,
        notes: notes::compose(&selection.commits, &rules.categories),
        selection,
    }))
}
