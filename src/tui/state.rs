use std::time::{Duration, Instant};

use crate::state::AppState;

const STATUS_TTL: Duration = Duration::from_secs(4);

pub struct TuiState {
    pub app: AppState,
    pub show_help: bool,
    pub edit_mode: bool,
    pub edit_input: String,
    pub loading: bool,
    pub status_message: Option<(String, Instant)>,
}

impl TuiState {
    pub fn new(app: AppState) -> Self {
        Self {
            app,
            show_help: false,
            edit_mode: false,
            edit_input: String::new(),
            loading: false,
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Status text if it has not expired yet.
    pub fn current_status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < STATUS_TTL)
            .map(|(msg, _)| msg.as_str())
    }
}
