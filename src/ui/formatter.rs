//! Pure formatting functions for UI output.
//!
//! `format_*` functions build text without side effects; `display_*`
//! functions print it with `console` styling.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::release::ReleasePlan;
use crate::rules::ReleaseRules;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summary of the settings a run will use.
///
/// Lists every rule with its severity, every category title (wildcard last)
/// and the ignored commit types.
pub fn format_run_info(rules: &ReleaseRules, push: bool) -> String {
    let mut lines = vec![
        format!("Will push changes? {}", push),
        String::new(),
        "Rules".to_string(),
        "-----".to_string(),
    ];

    for (name, severity) in rules.rules.iter() {
        lines.push(format!(
            "    '{}' commits bump {}",
            name.to_lowercase(),
            severity
        ));
    }
    if let Some(bang) = rules.rules.bang() {
        lines.push(format!("    breaking commits bump {}", bang));
    }

    lines.push(String::new());
    lines.push("When writing release notes...".to_string());
    for (key, title) in rules.categories.iter() {
        lines.push(format!(
            "    ...group all '{}' commits under '{}';",
            key.to_lowercase(),
            title
        ));
    }
    if let Some(title) = rules.categories.wildcard() {
        lines.push(format!("    ...and all other commits under '{}';", title));
    }

    if !rules.ignore.is_empty() {
        lines.push(String::new());
        lines.push("Ignore commits with the following types:".to_string());
        for commit_type in rules.ignore.iter() {
            lines.push(format!(" - {}", commit_type));
        }
    }

    lines.join("\n")
}

/// Print the run summary under a bold heading.
pub fn display_run_info(rules: &ReleaseRules, push: bool) {
    println!(
        "{} {}\n",
        style("semver-release").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}\n", format_run_info(rules, push));
}

/// Display the planned version change.
pub fn display_release(plan: &ReleasePlan) {
    println!("\n{}", style("Proposed Release:").bold());
    println!("  From: {}", style(plan.previous).red());
    println!("  To:   {} ({})", style(plan.next).green(), plan.severity);
}

/// Display the release notes, or a note that no section matched.
pub fn display_notes(notes: &str) {
    println!("\n{}", style("Release notes:").bold());
    if notes.is_empty() {
        println!("  (no commit matched a category)");
    } else {
        println!("{}", notes);
    }
}

/// Display manual push instruction for a tag.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    println!(
        "\n{} To tag and push this release, run:\n  {}",
        style("→").yellow(),
        style(format!("git tag {tag} && git push {remote} {tag}")).cyan()
    );
}
