use crate::github::RepoRef;
use crate::model::{CommitMatrix, DayBucket, MatrixOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;
use serde::Serialize;

const LEVELS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];
const SPARK_WIDTH: usize = 60;

#[derive(Serialize)]
struct SeriesLine<'a> {
    author: &'a str,
    total: u64,
    days: &'a [DayBucket],
}

pub fn build_output(matrix: &CommitMatrix, repo: &RepoRef) -> MatrixOutput {
    MatrixOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: repo.to_string(),
        commit_count: matrix.total_commits(),
        day_count: matrix.day_count(),
        authors: matrix.author_names().into_iter().map(str::to_string).collect(),
        series: matrix.clone(),
    }
}

pub fn output_json(matrix: &CommitMatrix, repo: &RepoRef) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&build_output(matrix, repo))?);
    Ok(())
}

pub fn output_ndjson(matrix: &CommitMatrix) -> Result<()> {
    for (i, (series, author)) in matrix.series().iter().zip(matrix.author_names()).enumerate() {
        let line = SeriesLine {
            author,
            total: matrix.author_total(i),
            days: series,
        };
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

pub fn output_summary(matrix: &CommitMatrix, repo: &RepoRef) -> Result<()> {
    if matrix.author_count() == 0 {
        println!("No data to display");
        return Ok(());
    }

    let labels = matrix.axis_labels();
    println!("{}", style(format!("Daily commits for {repo}")).bold());
    println!("{}", "─".repeat(50));
    println!(
        "{} commits by {} authors over {} days",
        style(matrix.total_commits()).cyan(),
        style(matrix.author_count()).yellow(),
        style(matrix.day_count()).cyan()
    );

    let first = labels.iter().find(|l| !l.is_empty());
    let last = labels.iter().rev().find(|l| !l.is_empty());
    if let (Some(first), Some(last)) = (first, last) {
        println!("Labelled days {} .. {}", style(first).dim(), style(last).dim());
    }
    println!();

    let max = matrix.max_bucket();
    let name_width = matrix
        .author_names()
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .min(24);

    for (i, author) in matrix.author_names().into_iter().enumerate() {
        let counts: Vec<u32> = matrix.series()[i].iter().map(|b| b.y).collect();
        println!(
            "{:<width$} {:>4}  {}",
            truncate(author, name_width),
            matrix.author_total(i),
            style(sparkline(&counts, max, SPARK_WIDTH)).green(),
            width = name_width
        );
    }

    Ok(())
}

/// Compress `counts` into at most `width` glyphs, each showing the busiest day it covers.
pub fn sparkline(counts: &[u32], max: u32, width: usize) -> String {
    if counts.is_empty() || width == 0 {
        return String::new();
    }
    let chunk = counts.len().div_ceil(width);
    counts
        .chunks(chunk)
        .map(|c| {
            let peak = c.iter().copied().max().unwrap_or(0);
            if peak == 0 || max == 0 {
                " "
            } else {
                let idx = ((peak as f64 / max as f64) * (LEVELS.len() - 1) as f64).round() as usize;
                LEVELS[idx.min(LEVELS.len() - 1)]
            }
        })
        .collect()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    } else {
        s.to_string()
    }
}
