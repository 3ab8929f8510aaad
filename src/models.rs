use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct ReadMessagesResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessQueryRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Detail,
}

/// Error detail as reported by the server, either a plain string or a
/// structured value. Normalized to text before it reaches the status line.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct Detail(Value);

impl Detail {
    pub fn into_text(self) -> String {
        match self.0 {
            Value::String(text) => text,
            other => other.to_string(),
        }
    }
}
