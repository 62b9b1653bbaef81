use crate::cli::CommonArgs;
use crate::github::{CommitSource, RepoRef};
use crate::model::{Commit, ExportOutput, SCHEMA_VERSION};
use crate::util::uniq;
use chrono::Utc;

pub fn exec(common: &CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let repo = common.repo_ref()?;
    let source = CommitSource::from_args(common)?;

    let mut commits = source.fetch_with_progress(&repo, !(json || ndjson))?;
    commits.sort_by(|a, b| a.author_date.cmp(&b.author_date));

    if json {
        output_json(&commits, &repo)?;
    } else if ndjson {
        output_ndjson(&commits)?;
    } else {
        output_summary(&commits)?;
    }

    Ok(())
}

fn output_json(commits: &[Commit], repo: &RepoRef) -> anyhow::Result<()> {
    let output = ExportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: repo.to_string(),
        entries: commits.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(commits: &[Commit]) -> anyhow::Result<()> {
    for commit in commits {
        println!("{}", serde_json::to_string(commit)?);
    }
    Ok(())
}

fn output_summary(commits: &[Commit]) -> anyhow::Result<()> {
    use console::style;

    println!("{}", style("Export Summary").bold());
    println!("{}", "─".repeat(50));

    let authors = uniq(commits.iter().map(|c| c.author_name.as_str()));

    println!("Total commits: {}", style(commits.len()).cyan());
    println!("Unique authors: {}", style(authors.len()).yellow());

    if let (Some(first), Some(last)) = (commits.first(), commits.last()) {
        println!(
            "Date range: {} to {}",
            style(first.author_date.format("%Y-%m-%d")).dim(),
            style(last.author_date.format("%Y-%m-%d")).dim()
        );
    }

    println!("\nUse --json or --ndjson flags to export the raw data.");
    Ok(())
}
