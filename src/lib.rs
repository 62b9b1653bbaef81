//! Fetch a GitHub repository's commits, reshape them into a per-author
//! daily count matrix and chart it.

pub mod chart;
pub mod cli;
pub mod error;
pub mod export;
pub mod github;
pub mod logging;
pub mod matrix;
pub mod model;
pub mod state;
pub mod tui;
pub mod util;

pub use error::{Result, VizError};
pub use matrix::reshape;
pub use model::{AuthorSeries, Commit, CommitMatrix, DayBucket};
