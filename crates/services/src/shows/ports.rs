use async_trait::async_trait;
use std::sync::Arc;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

/// A TV show, identified only by its TVDB id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShowRecord {
    pub tvdb_id: String,
}

impl ShowRecord {
    pub fn new(tvdb_id: impl Into<String>) -> Self {
        Self {
            tvdb_id: tvdb_id.into(),
        }
    }
}

/// Immutable, shareable list of resolved shows
pub type ShowList = Arc<Vec<ShowRecord>>;

#[derive(Debug, thiserror::Error)]
pub enum ShowsError {
    #[error("Invalid actor name. Must be 1-100 characters, alphanumeric with spaces, hyphens, apostrophes, and periods only.")]
    InvalidActorName(String),
}

/// Resolves an actor name to the shows they appeared in.
///
/// Implementations never fail: upstream trouble yields an empty list.
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
#[async_trait]
pub trait ShowResolverTrait: Send + Sync {
    async fn resolve(&self, actor_name: &str) -> Vec<ShowRecord>;
}

#[cfg_attr(any(test, feature = "test-mocks"), automock)]
#[async_trait]
pub trait ShowsServiceTrait: Send + Sync {
    /// Validate the name, then resolve it through the cache
    async fn get_shows_for_actor(&self, actor_name: &str) -> Result<ShowList, ShowsError>;

    /// Resolve through the cache without validating
    async fn resolve_with_cache(&self, actor_name: &str) -> ShowList;
}
