use crate::error::{Result, VizError};
use crate::model::{AuthorSeries, Commit, CommitMatrix, DayBucket};
use crate::util::{day_index, day_label, uniq};
use std::collections::HashMap;
use tracing::debug;

/// Reshape a flat commit list into a dense per-author, per-day count grid.
///
/// Day 0 is the earliest author date and the grid extends through the
/// latest one. Series follow the order in which authors first appear in
/// `commits`; when several commits land on the same day the label of the
/// last one processed is kept.
pub fn reshape(commits: &[Commit]) -> Result<CommitMatrix> {
    let earliest = commits
        .iter()
        .map(|c| c.author_date)
        .min()
        .ok_or(VizError::EmptyInput)?;
    let latest = commits
        .iter()
        .map(|c| c.author_date)
        .max()
        .ok_or(VizError::EmptyInput)?;

    let num_days = day_index(&earliest, &latest) as usize + 1;
    let authors = uniq(commits.iter().map(|c| c.author_name.as_str()));
    let rows: HashMap<&str, usize> = authors.iter().enumerate().map(|(i, a)| (*a, i)).collect();

    let mut series: Vec<AuthorSeries> = authors
        .iter()
        .map(|author| {
            let mut days: AuthorSeries = (0..num_days).map(DayBucket::empty).collect();
            days[0].user = Some((*author).to_string());
            days
        })
        .collect();

    for commit in commits {
        let day = day_index(&earliest, &commit.author_date) as usize;
        // every name is in `rows`: it was built from these same commits
        let bucket = &mut series[rows[commit.author_name.as_str()]][day];
        bucket.y += 1;
        bucket.date = Some(day_label(&commit.author_date));
    }

    debug!(
        commits = commits.len(),
        authors = series.len(),
        days = num_days,
        "reshaped commits"
    );

    Ok(CommitMatrix::from_dense(series))
}
