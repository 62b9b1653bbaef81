use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::VizError;

pub const SCHEMA_VERSION: u32 = 1;

/// A single commit as used by the reshaper: who authored it and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub author_name: String,
    pub author_date: DateTime<Utc>,
    pub message: String,
}

impl Commit {
    pub fn new(author_name: impl Into<String>, author_date: DateTime<Utc>) -> Self {
        Self {
            sha: String::new(),
            author_name: author_name.into(),
            author_date,
            message: String::new(),
        }
    }
}

/// Element of the `GET /repos/{user}/{repo}/commits` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommit {
    #[serde(default)]
    pub sha: String,
    pub commit: ApiCommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCommitDetail {
    pub author: ApiSignature,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSignature {
    pub name: String,
    pub date: DateTime<Utc>,
}

impl From<ApiCommit> for Commit {
    fn from(api: ApiCommit) -> Self {
        let title = api.commit.message.lines().next().unwrap_or("").to_string();
        Self {
            sha: api.sha,
            author_name: api.commit.author.name,
            author_date: api.commit.author.date,
            message: title,
        }
    }
}

/// One (author, day) cell of the matrix.
///
/// Field names mirror the shape chart libraries expect: `x` is the day
/// index, `y` the commit count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBucket {
    pub x: usize,
    pub y: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl DayBucket {
    pub fn empty(x: usize) -> Self {
        Self { x, y: 0, date: None, user: None }
    }
}

pub type AuthorSeries = Vec<DayBucket>;

/// Dense per-author, per-day commit counts. Every series has the same length
/// and bucket `i` of every series has `x == i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<AuthorSeries>", into = "Vec<AuthorSeries>")]
pub struct CommitMatrix {
    series: Vec<AuthorSeries>,
}

impl CommitMatrix {
    /// Build a matrix from series, rejecting ragged rows and misnumbered buckets.
    pub fn new(series: Vec<AuthorSeries>) -> Result<Self, VizError> {
        let days = series.first().map(Vec::len).unwrap_or(0);
        for (row, buckets) in series.iter().enumerate() {
            if buckets.len() != days {
                return Err(VizError::InvalidMatrix(format!(
                    "series {} has {} days, expected {}",
                    row,
                    buckets.len(),
                    days
                )));
            }
            if let Some((i, bucket)) = buckets.iter().enumerate().find(|(i, b)| b.x != *i) {
                return Err(VizError::InvalidMatrix(format!(
                    "series {} bucket {} has x = {}",
                    row, i, bucket.x
                )));
            }
        }
        Ok(Self { series })
    }

    /// Caller guarantees the dense shape; only the reshaper builds matrices this way.
    pub(crate) fn from_dense(series: Vec<AuthorSeries>) -> Self {
        Self { series }
    }

    pub fn series(&self) -> &[AuthorSeries] {
        &self.series
    }

    pub fn author_count(&self) -> usize {
        self.series.len()
    }

    pub fn day_count(&self) -> usize {
        self.series.first().map(Vec::len).unwrap_or(0)
    }

    pub fn author_names(&self) -> Vec<&str> {
        self.series
            .iter()
            .map(|s| s.first().and_then(|b| b.user.as_deref()).unwrap_or(""))
            .collect()
    }

    pub fn total_commits(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.iter())
            .map(|b| b.y as u64)
            .sum()
    }

    pub fn author_total(&self, series: usize) -> u64 {
        self.series
            .get(series)
            .map(|s| s.iter().map(|b| b.y as u64).sum())
            .unwrap_or(0)
    }

    /// Commits per day summed over all authors.
    pub fn day_totals(&self) -> Vec<u32> {
        let mut totals = vec![0u32; self.day_count()];
        for series in &self.series {
            for bucket in series {
                totals[bucket.x] += bucket.y;
            }
        }
        totals
    }

    /// Tallest stacked column.
    pub fn max_stacked(&self) -> u32 {
        self.day_totals().into_iter().max().unwrap_or(0)
    }

    /// Tallest single bucket.
    pub fn max_bucket(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.iter())
            .map(|b| b.y)
            .max()
            .unwrap_or(0)
    }

    /// Day labels taken from the first series, blank where it has none.
    pub fn axis_labels(&self) -> Vec<String> {
        match self.series.first() {
            Some(first) => first
                .iter()
                .map(|b| b.date.clone().unwrap_or_default())
                .collect(),
            None => Vec::new(),
        }
    }
}

impl TryFrom<Vec<AuthorSeries>> for CommitMatrix {
    type Error = VizError;

    fn try_from(series: Vec<AuthorSeries>) -> Result<Self, VizError> {
        Self::new(series)
    }
}

impl From<CommitMatrix> for Vec<AuthorSeries> {
    fn from(matrix: CommitMatrix) -> Self {
        matrix.series
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub commit_count: u64,
    pub day_count: usize,
    pub authors: Vec<String>,
    pub series: CommitMatrix,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub entries: Vec<Commit>,
}
