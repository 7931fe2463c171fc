use async_trait::async_trait;
use serde::Deserialize;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

/// Error type for catalog (TVMaze) operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog returned an error: {status} {body}")]
    Http { status: u16, body: String },
    #[error("Catalog request timed out: {0}")]
    Timeout(String),
    #[error("Catalog request failed: {0}")]
    RequestFailed(String),
    #[error("Catalog response parsing failed: {0}")]
    ParseError(String),
    #[error("Catalog request gave up after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        attempts: u32,
        last_error: Box<CatalogError>,
    },
}

impl CatalogError {
    /// Short failure class used in structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::Http { .. } => "http_error",
            CatalogError::Timeout(_) => "timeout",
            CatalogError::RequestFailed(_) => "request_error",
            CatalogError::ParseError(_) => "parse_error",
            CatalogError::RetriesExhausted { last_error, .. } => last_error.kind(),
        }
    }
}

/// One hit from `/search/people`
#[derive(Debug, Clone, Deserialize)]
pub struct PersonSearchResult {
    pub person: Person,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry from `/people/{id}/castcredits?embed=show`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastCredit {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<CreditEmbedded>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditEmbedded {
    #[serde(default)]
    pub show: Option<CatalogShow>,
}

/// Embedded show. Fields stay raw JSON so one malformed show only
/// disqualifies its own credit instead of failing the whole list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogShow {
    #[serde(rename = "type", default)]
    pub show_type: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    /// Cross-references to other catalogs, `thetvdb` among them
    #[serde(default)]
    pub externals: Option<serde_json::Value>,
}

impl CastCredit {
    pub fn show(&self) -> Option<&CatalogShow> {
        self.embedded.as_ref().and_then(|e| e.show.as_ref())
    }
}

impl CatalogShow {
    /// Show type, or `None` when absent or not a string
    pub fn show_type(&self) -> Option<&str> {
        self.show_type.as_ref()?.as_str()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_ref()?.as_str()
    }

    /// TVDB id as a string, or `None` when absent, null, empty or zero.
    /// TVMaze sends a number, but strings are accepted too.
    pub fn tvdb_id(&self) -> Option<String> {
        match self.externals.as_ref()?.get("thetvdb")? {
            serde_json::Value::Number(n) => {
                if n.as_f64() == Some(0.0) {
                    None
                } else {
                    Some(n.to_string())
                }
            }
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Trait for the two catalog lookups the resolver needs.
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
#[async_trait]
pub trait CatalogClientTrait: Send + Sync {
    /// Search people by name. An empty list means nobody matched.
    async fn search_people(&self, query: &str) -> Result<Vec<PersonSearchResult>, CatalogError>;

    /// Cast credits of a person with the show embedded in each credit
    async fn cast_credits(&self, person_id: i64) -> Result<Vec<CastCredit>, CatalogError>;
}
