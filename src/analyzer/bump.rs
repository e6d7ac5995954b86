use crate::domain::{SeverityLevel, StructuredCommit};
use crate::rules::RuleSet;
use tracing::debug;

/// Reduces a sequence of commits to the severity of the release they warrant
pub struct BumpDeterminer<'a> {
    rules: &'a RuleSet,
}

impl<'a> BumpDeterminer<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        BumpDeterminer { rules }
    }

    /// Walk commits in the given order and escalate the severity.
    ///
    /// A breaking commit takes the `bang` severity when that raises the
    /// current level and skips type matching. Otherwise the commit type is
    /// looked up from the major rules down to the patch rules, never below
    /// the current level. Stops as soon as `Major` is reached.
    pub fn determine(&self, commits: &[StructuredCommit]) -> SeverityLevel {
        let mut current = SeverityLevel::None;

        for commit in commits {
            if current == SeverityLevel::Major {
                break;
            }

            if commit.breaking {
                if let Some(bang) = self.rules.bang() {
                    if bang > current {
                        debug!(commit_type = %commit.r#type, severity = %bang, "breaking commit escalates release");
                        current = bang;
                        continue;
                    }
                }
            }

            if let Some(severity) = self.match_type(&commit.r#type, current) {
                debug!(commit_type = %commit.r#type, %severity, "commit type matched rule");
                current = severity;
            }
        }

        current
    }

    fn match_type(&self, commit_type: &str, floor: SeverityLevel) -> Option<SeverityLevel> {
        let commit_type = commit_type.to_lowercase();

        SeverityLevel::BUMPS
            .into_iter()
            .filter(|severity| *severity >= floor)
            .find(|severity| {
                self.rules
                    .names_for(*severity)
                    .any(|name| name.to_lowercase() == commit_type)
            })
    }
}

/// Shorthand for `BumpDeterminer::new(rules).determine(commits)`
pub fn determine(commits: &[StructuredCommit], rules: &RuleSet) -> SeverityLevel {
    BumpDeterminer::new(rules).determine(commits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(r#type: &str, breaking: bool) -> StructuredCommit {
        StructuredCommit {
            r#type: r#type.to_string(),
            scope: None,
            description: format!("{} change", r#type),
            body: None,
            breaking,
        }
    }

    fn rules(input: &str) -> RuleSet {
        RuleSet::parse(input).unwrap()
    }

    #[test]
    fn test_breaking_commit_reaches_major() {
        let rules = rules("fix=patch feat=minor bang=major");
        let commits = vec![
            commit("fix", false),
            commit("feat", false),
            commit("fix", true),
        ];
        assert_eq!(determine(&commits, &rules), SeverityLevel::Major);
    }

    #[test]
    fn test_no_matching_rule_means_no_release() {
        let rules = rules("fix=patch");
        let commits = vec![commit("chore", false), commit("chore", false)];
        assert_eq!(determine(&commits, &rules), SeverityLevel::None);
    }

    #[test]
    fn test_empty_commits() {
        assert_eq!(
            determine(&[], &rules("fix=patch")),
            SeverityLevel::None
        );
    }

    #[test]
    fn test_highest_type_wins() {
        let rules = rules("fix=patch feat=minor");
        let commits = vec![
            commit("feat", false),
            commit("fix", false),
            commit("fix", false),
        ];
        assert_eq!(determine(&commits, &rules), SeverityLevel::Minor);
    }

    #[test]
    fn test_type_match_is_case_insensitive() {
        let rules = rules("Feat=minor");
        assert_eq!(
            determine(&[commit("FEAT", false)], &rules),
            SeverityLevel::Minor
        );
    }

    #[test]
    fn test_breaking_without_bang_rule_uses_type() {
        let rules = rules("fix=patch");
        assert_eq!(
            determine(&[commit("fix", true)], &rules),
            SeverityLevel::Patch
        );
    }

    #[test]
    fn test_bang_skips_type_matching_when_it_escalates() {
        let rules = rules("feat=minor bang=patch");
        assert_eq!(
            determine(&[commit("feat", true)], &rules),
            SeverityLevel::Patch
        );
    }

    #[test]
    fn test_order_decides_between_bang_and_type() {
        let rules = rules("fix=patch feat=minor bang=patch");
        let commits = vec![commit("fix", false), commit("feat", true)];
        // bang no longer raises the level, so the feat rule applies
        assert_eq!(determine(&commits, &rules), SeverityLevel::Minor);
    }

    #[test]
    fn test_rules_below_current_level_are_not_consulted() {
        let rules = rules("feat=minor fix=patch");
        let commits = vec![commit("feat", false), commit("fix", false)];
        assert_eq!(determine(&commits, &rules), SeverityLevel::Minor);
    }

    #[test]
    fn test_non_breaking_type_can_be_major() {
        let rules = rules("refactor=major fix=patch");
        let commits = vec![commit("fix", false), commit("refactor", false)];
        assert_eq!(determine(&commits, &rules), SeverityLevel::Major);
    }

    #[test]
    fn test_stops_at_major() {
        let rules = rules("fix=patch bang=major");
        let commits = vec![commit("docs", true), commit("fix", false)];
        assert_eq!(
            BumpDeterminer::new(&rules).determine(&commits),
            SeverityLevel::Major
        );
    }
}
