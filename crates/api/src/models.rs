use serde::{Deserialize, Serialize};
use services::ShowRecord;
use utoipa::ToSchema;

/// A TV show featuring the requested actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShowResponse {
    /// The TVDB ID of the show
    #[serde(rename = "tvdbId")]
    #[schema(example = "81189")]
    pub tvdb_id: String,
}

impl From<&ShowRecord> for ShowResponse {
    fn from(record: &ShowRecord) -> Self {
        Self {
            tvdb_id: record.tvdb_id.clone(),
        }
    }
}

/// Error payload returned for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_response_uses_camel_case_id() {
        let response = ShowResponse::from(&ShowRecord::new("81189"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"tvdbId": "81189"}));
    }
}
