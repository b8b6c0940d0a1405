use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query string of a path request
#[derive(Debug, Clone, Deserialize)]
pub struct PathRequest {
    /// Id of the start vertex
    pub source: String,
    /// Id of the end vertex
    pub target: String,
}

/// Summary of the served road network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
