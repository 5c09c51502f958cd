use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwimHubError {
    #[error("Session error: {0}")]
    Session(String),
}

impl From<SwimHubError> for String {
    fn from(err: SwimHubError) -> Self {
        err.to_string()
    }
}
