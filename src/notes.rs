//! Release-note composition.
//!
//! Commits are grouped under the title of the category matching their type.
//! Commits without a category land in the wildcard section when one is
//! configured and are dropped otherwise.

use crate::domain::StructuredCommit;
use crate::rules::CategorySet;

/// One titled block of the release notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

/// Group commits into sections.
///
/// Sections follow the order categories were declared in, with the wildcard
/// section last. Categories without commits produce no section.
pub fn compose_sections(commits: &[StructuredCommit], categories: &CategorySet) -> Vec<Section> {
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); categories.len()];
    let mut others = Vec::new();

    for commit in commits {
        match categories.position(&commit.r#type) {
            Some(index) => buckets[index].push(format_commit(commit)),
            None if categories.wildcard().is_some() => others.push(format_verbose(commit)),
            None => {}
        }
    }

    let mut sections: Vec<Section> = categories
        .iter()
        .zip(buckets)
        .filter(|(_, lines)| !lines.is_empty())
        .map(|((_, title), lines)| Section {
            title: title.to_string(),
            lines,
        })
        .collect();

    if let Some(title) = categories.wildcard() {
        if !others.is_empty() {
            sections.push(Section {
                title: title.to_string(),
                lines: others,
            });
        }
    }

    sections
}

/// Render the release notes as markdown.
///
/// Returns an empty string when no commit falls into any section.
pub fn compose(commits: &[StructuredCommit], categories: &CategorySet) -> String {
    let mut output = Vec::new();
    for section in compose_sections(commits, categories) {
        output.push(format!("# {}", section.title));
        output.extend(section.lines);
    }
    output.join("\n")
}

fn format_commit(commit: &StructuredCommit) -> String {
    match &commit.scope {
        Some(scope) => format!("- **{}**: {}", scope, commit.description),
        None => format!("- {}", commit.description),
    }
}

fn format_verbose(commit: &StructuredCommit) -> String {
    match &commit.scope {
        Some(scope) => format!("- {}({}): {}", commit.r#type, scope, commit.description),
        None => format!("- {}: {}", commit.r#type, commit.description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(r#type: &str, scope: Option<&str>, description: &str) -> StructuredCommit {
        StructuredCommit {
            r#type: r#type.to_string(),
            scope: scope.map(str::to_string),
            description: description.to_string(),
            body: None,
            breaking: false,
        }
    }

    fn categories(input: &str) -> CategorySet {
        CategorySet::parse(input).unwrap()
    }

    #[test]
    fn test_feature_under_its_title() {
        let commits = vec![commit("feat", Some("api"), "add endpoint")];
        let notes = compose(&commits, &categories(r#"feat="New Features""#));
        assert_eq!(notes, "# New Features\n- **api**: add endpoint");
    }

    #[test]
    fn test_unmatched_without_wildcard_is_dropped() {
        let commits = vec![commit("chore", None, "bump deps")];
        assert_eq!(compose(&commits, &categories("feat=Features")), "");
    }

    #[test]
    fn test_unmatched_goes_to_wildcard_verbosely() {
        let commits = vec![
            commit("chore", None, "bump deps"),
            commit("ci", Some("gh"), "cache builds"),
        ];
        let notes = compose(&commits, &categories("feat=Features *=Other"));
        assert_eq!(
            notes,
            "# Other\n- chore: bump deps\n- ci(gh): cache builds"
        );
    }

    #[test]
    fn test_sections_follow_declaration_order_and_wildcard_is_last() {
        let commits = vec![
            commit("docs", None, "typo"),
            commit("fix", None, "crash"),
            commit("feat", None, "login"),
            commit("Fix", Some("ui"), "color"),
        ];
        let sections = compose_sections(
            &commits,
            &categories(r#"*=Misc feat=Features fix="Bug Fixes""#),
        );
        let titles: Vec<_> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Features", "Bug Fixes", "Misc"]);
        assert_eq!(sections[1].lines, vec!["- crash", "- **ui**: color"]);
    }

    #[test]
    fn test_empty_categories_produce_no_section() {
        let commits = vec![commit("fix", None, "crash")];
        let sections = compose_sections(&commits, &categories("feat=Features fix=Fixes"));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Fixes");
    }

    #[test]
    fn test_no_commits() {
        assert_eq!(compose(&[], &categories("feat=Features *=Other")), "");
    }
}
