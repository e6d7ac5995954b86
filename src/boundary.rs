use std::fmt;

/// Non-fatal conditions met while looking for the previous release.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// The repository has no `vX.Y.Z` tag yet
    NoVersionTag { assumed: String },
    /// A commit message does not follow the conventional format
    NonConventionalCommit { summary: String },
    /// Conventional commits dropped by the ignore list
    IgnoredCommits { count: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
            BoundaryWarning::NoVersionTag { assumed } => {
                write!(
                    f,
                    "No SemVer tag found. Assuming {} and treating this as the first release",
                    assumed
                )
            }
            BoundaryWarning::NonConventionalCommit { summary } => {
                write!(f, "Ignoring non-standard commit: {}", summary)
            }
            BoundaryWarning::IgnoredCommits { count } => {
                write!(
                    f,
                    "{} commit(s) matched the ignore list and were excluded",
                    count
                )
            }
        }
    }
}
