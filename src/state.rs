use crate::chart::ChartLayout;
use crate::error::{Result, VizError};
use crate::github::RepoRef;
use crate::matrix::reshape;
use crate::model::{Commit, CommitMatrix};
use tracing::{info, warn};

/// Everything a render needs: which repo, its matrix, the last error and the layout.
#[derive(Debug, Clone)]
pub struct AppState {
    pub repo: RepoRef,
    pub matrix: Option<CommitMatrix>,
    pub error: String,
    pub layout: ChartLayout,
}

impl AppState {
    pub fn new(repo: RepoRef) -> Self {
        Self {
            repo,
            matrix: None,
            error: String::new(),
            layout: ChartLayout::default(),
        }
    }

    /// Fold a fetch outcome into the state.
    ///
    /// A failed request keeps whatever matrix was shown before; an empty
    /// commit list clears it so the "no data" message is what remains.
    pub fn apply_fetch(&mut self, result: Result<Vec<Commit>>) {
        match result.and_then(|commits| reshape(&commits)) {
            Ok(matrix) => {
                info!(repo = %self.repo, authors = matrix.author_count(), "matrix replaced");
                self.matrix = Some(matrix);
                self.error.clear();
            }
            Err(VizError::EmptyInput) => {
                self.matrix = None;
                self.error = VizError::EmptyInput.to_string();
            }
            Err(e) => {
                warn!(repo = %self.repo, error = %e, "fetch failed");
                self.error = e.to_string();
            }
        }
    }

    pub fn set_repo(&mut self, repo: RepoRef) {
        self.repo = repo;
    }

    pub fn toggle_layout(&mut self) {
        self.layout = self.layout.toggle();
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
