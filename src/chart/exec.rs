use crate::cli::CommonArgs;
use crate::github::CommitSource;
use crate::matrix::reshape;
use anyhow::Context;
use console::style;
use std::path::Path;

use super::{render_svg, ChartLayout, ChartOptions};

pub fn exec(common: &CommonArgs, output: &Path, grouped: bool, width: u32, height: u32) -> anyhow::Result<()> {
    let repo = common.repo_ref()?;
    let source = CommitSource::from_args(common)?;
    let commits = source.fetch_with_progress(&repo, true)?;

    let matrix = reshape(&commits).context("Failed to build commit matrix")?;
    let layout = ChartLayout::from_grouped(grouped);
    let options = ChartOptions { width, height };

    render_svg(&matrix, layout, &options, output)
        .with_context(|| format!("Failed to write chart to {}", output.display()))?;

    eprintln!(
        "{} {} chart of {} commits by {} authors to {}",
        style("Wrote").green().bold(),
        layout,
        matrix.total_commits(),
        matrix.author_count(),
        output.display()
    );
    Ok(())
}
