use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use semver_release::cli::{append_output, run_release_workflow, ReleaseWorkflowArgs};
use semver_release::config;
use semver_release::git::Git2Repository;
use semver_release::publish::{GitHubPublisher, GitHubReleaseConfig, ReleasePublisher};
use semver_release::release::ReleaseOutcome;
use semver_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "semver-release",
    version,
    about = "Compute the next semantic version and release notes from conventional commits"
)]
struct Args {
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".", help = "Repository to release")]
    repo: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, env = "INPUT_RULES", help = "Commit type to bump rules, e.g. 'fix=patch feat=minor bang=major'")]
    rules: Option<String>,

    #[arg(long, env = "INPUT_CATEGORIES", help = "Release note sections, e.g. 'feat=\"New Features\" *=Other'")]
    categories: Option<String>,

    #[arg(long, env = "INPUT_IGNORE", help = "Space-separated commit types to leave out")]
    ignore: Option<String>,

    #[arg(long, help = "Create the version tag and push it")]
    push: bool,

    #[arg(long, help = "Remote to push the tag to [default: origin]")]
    remote: Option<String>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "Token for HTTPS pushes")]
    token: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "Publish a GitHub release to this owner/name repository after pushing")]
    github_repository: Option<String>,

    #[arg(long, help = "Write the release notes to this file")]
    notes_file: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Log every decision")]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    if let Some(rules) = args.rules {
        config.release.rules = rules;
    }
    if let Some(categories) = args.categories {
        config.release.categories = categories;
    }
    if let Some(ignore) = args.ignore {
        config.release.ignore = ignore;
    }
    if let Some(remote) = args.remote {
        config.behavior.remote = remote;
    }
    let push = args.push || config.behavior.push;

    let rules = config.release_rules().context("Error parsing release settings")?;
    ui::display_run_info(&rules, push && !args.dry_run);

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Could not open {}", args.repo.display()))?;

    let publisher = if push && !args.dry_run {
        match (&args.github_repository, &args.token) {
            (Some(slug), Some(token)) => Some(GitHubPublisher::new(
                GitHubReleaseConfig::from_slug(slug, token.as_str())?,
            )),
            _ => {
                warn!("GitHub repository or token not set, the release will not be published");
                None
            }
        }
    } else {
        None
    };

    let workflow_args = ReleaseWorkflowArgs {
        push,
        remote: config.behavior.remote.clone(),
        token: args.token,
        dry_run: args.dry_run,
    };
    let result = run_release_workflow(
        &repo,
        &workflow_args,
        &rules,
        publisher.as_ref().map(|p| p as &dyn ReleasePublisher),
    )?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    let plan = match &result.outcome {
        ReleaseOutcome::NoNewCommits(_) => {
            ui::display_status("No new commits to release.");
            return Ok(());
        }
        ReleaseOutcome::NoRelease(selection) => {
            ui::display_status(&format!(
                "Processed {} commit(s). No need to bump version.",
                selection.commits.len()
            ));
            return Ok(());
        }
        ReleaseOutcome::Release(plan) => plan,
    };

    ui::display_status(&format!(
        "Processing {} commit(s) since {}",
        plan.selection.commits.len(),
        result.previous_tag.as_deref().unwrap_or("the first commit")
    ));
    ui::display_release(plan);
    ui::display_notes(&plan.notes);

    if let Some(path) = &args.notes_file {
        fs::write(path, &plan.notes)
            .with_context(|| format!("Could not write notes to {}", path.display()))?;
    }
    if let Some(path) = std::env::var_os("GITHUB_OUTPUT") {
        append_output(PathBuf::from(path).as_path(), "version", &plan.next.to_string())?;
    }

    match &result.tag {
        Some(tag) if result.pushed => {
            ui::display_success(&format!(
                "Pushed tag {} to {}",
                tag, workflow_args.remote
            ));
            if let Some(url) = &result.release_url {
                ui::display_success(&format!("Published release {}", url));
            }
        }
        _ => {
            ui::display_manual_push_instruction(&plan.next.to_string(), &workflow_args.remote);
        }
    }

    println!("{}", plan.next);
    Ok(())
}
