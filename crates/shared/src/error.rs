use serde::{Deserialize, Serialize};

/// Error body returned by the order services on a non-2xx response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ApiError {
    /// Parses a response body, returning `None` when it is not a JSON error object.
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str::<Self>(body)
            .ok()
            .filter(|err| err.message.is_some() || err.error.is_some())
    }

    pub fn summary(&self) -> String {
        match (&self.error, &self.message) {
            (Some(error), Some(message)) if !message.is_empty() => format!("{error}: {message}"),
            (_, Some(message)) if !message.is_empty() => message.clone(),
            (Some(error), _) => error.clone(),
            _ => "request failed".to_string(),
        }
    }
}
