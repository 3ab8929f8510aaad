use reqwest::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum DispatchError {
    Http { status: StatusCode, detail: String },
    Network(String),
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Http { status, detail } => {
                write!(f, "server returned {status}: {detail}")
            }
            DispatchError::Network(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for DispatchError {}
