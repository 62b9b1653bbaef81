use crate::cli::CommonArgs;
use crate::github::CommitSource;
use anyhow::Context;
use super::{output_json, output_ndjson, output_summary, reshape};

pub fn exec(common: &CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let repo = common.repo_ref()?;
    let source = CommitSource::from_args(common)?;

    // Keep stderr quiet when stdout is meant for another program
    let commits = source.fetch_with_progress(&repo, !(json || ndjson))?;

    let matrix = reshape(&commits).context("Failed to build commit matrix")?;

    if json {
        output_json(&matrix, &repo)?;
    } else if ndjson {
        output_ndjson(&matrix)?;
    } else {
        output_summary(&matrix, &repo)?;
    }

    Ok(())
}
