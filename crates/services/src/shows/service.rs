use async_trait::async_trait;
use std::sync::Arc;

use super::cache::ShowCache;
use super::ports::{ShowList, ShowResolverTrait, ShowsError, ShowsServiceTrait};
use super::validation::validate_actor_name;

/// Cache-backed show resolution.
///
/// The cache key is the raw name lower-cased; hyphen normalization only
/// happens inside the resolver, so "bryan-cranston" and "bryan cranston"
/// occupy separate entries. Concurrent misses on the same key may each call
/// the resolver.
pub struct ShowsServiceImpl {
    cache: Arc<ShowCache>,
    resolver: Arc<dyn ShowResolverTrait>,
}

impl ShowsServiceImpl {
    pub fn new(cache: Arc<ShowCache>, resolver: Arc<dyn ShowResolverTrait>) -> Self {
        Self { cache, resolver }
    }

    pub fn cache_key(actor_name: &str) -> String {
        actor_name.to_lowercase()
    }
}

#[async_trait]
impl ShowsServiceTrait for ShowsServiceImpl {
    async fn get_shows_for_actor(&self, actor_name: &str) -> Result<ShowList, ShowsError> {
        if !validate_actor_name(actor_name) {
            tracing::warn!(actor = %actor_name, "Invalid actor name");
            return Err(ShowsError::InvalidActorName(actor_name.to_string()));
        }

        Ok(self.resolve_with_cache(actor_name).await)
    }

    async fn resolve_with_cache(&self, actor_name: &str) -> ShowList {
        let key = Self::cache_key(actor_name);

        if let Some(shows) = self.cache.get(&key).await {
            tracing::info!(key = %key, "Cache hit for actor");
            return shows;
        }

        tracing::info!(key = %key, "Cache miss for actor");
        let shows: ShowList = Arc::new(self.resolver.resolve(actor_name).await);
        self.cache.put(key, shows.clone()).await;

        shows
    }
}
