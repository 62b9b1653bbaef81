use thiserror::Error;

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("That repository does not exist")]
    RepositoryNotFound,
    #[error("Error: {0}")]
    Status(u16),
    #[error("No commit data to display")]
    EmptyInput,
    #[error("Invalid repository '{0}', expected <user>/<repo>")]
    InvalidRepo(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid commit matrix: {0}")]
    InvalidMatrix(String),
    #[error("Chart error: {0}")]
    Chart(String),
}

impl VizError {
    /// Map a non-success HTTP status onto the error shown to the user.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => VizError::RepositoryNotFound,
            other => VizError::Status(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_exact() {
        assert_eq!(
            VizError::from_status(404).to_string(),
            "That repository does not exist"
        );
    }

    #[test]
    fn other_statuses_carry_the_code() {
        assert_eq!(VizError::from_status(500).to_string(), "Error: 500");
        assert_eq!(VizError::from_status(403).to_string(), "Error: 403");
    }
}
