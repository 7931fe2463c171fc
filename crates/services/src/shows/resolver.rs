use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

use super::ports::{ShowRecord, ShowResolverTrait};
use super::validation::normalize_actor_name;
use crate::catalog::{CastCredit, CatalogClientTrait, CatalogError};

/// Show types that count as television productions
pub const ALLOWED_SHOW_TYPES: [&str; 6] = [
    "Scripted",
    "Reality",
    "Talk Show",
    "Game Show",
    "Documentary",
    "Animation",
];

/// Resolves actors through the catalog: person search, then cast credits.
pub struct CatalogShowResolver {
    client: Arc<dyn CatalogClientTrait>,
}

impl CatalogShowResolver {
    pub fn new(client: Arc<dyn CatalogClientTrait>) -> Self {
        Self { client }
    }

    async fn lookup(&self, actor_name: &str) -> Result<Vec<ShowRecord>, CatalogError> {
        let normalized = normalize_actor_name(actor_name);
        tracing::debug!(
            actor = %actor_name,
            query = %normalized,
            "Searching catalog for actor"
        );

        let people = self.client.search_people(&normalized).await?;
        let Some(first) = people.first() else {
            tracing::warn!(actor = %actor_name, "No person found for actor");
            return Ok(Vec::new());
        };

        let person_id = first.person.id;
        tracing::debug!(actor = %actor_name, person_id, "Found person");

        let credits = self.client.cast_credits(person_id).await?;
        let shows = collect_show_records(&credits);

        tracing::debug!(
            actor = %actor_name,
            credits = credits.len(),
            shows = shows.len(),
            "Resolved TV shows with TVDB ids"
        );
        Ok(shows)
    }
}

#[async_trait]
impl ShowResolverTrait for CatalogShowResolver {
    async fn resolve(&self, actor_name: &str) -> Vec<ShowRecord> {
        match self.lookup(actor_name).await {
            Ok(shows) => shows,
            Err(e) => {
                tracing::error!(
                    actor = %actor_name,
                    error_kind = e.kind(),
                    error = %e,
                    "Failed to fetch shows for actor"
                );
                Vec::new()
            }
        }
    }
}

/// Keep credits for allowed show types that carry a TVDB id, first
/// occurrence wins.
pub fn collect_show_records(credits: &[CastCredit]) -> Vec<ShowRecord> {
    let mut seen = HashSet::new();
    let mut shows = Vec::new();

    for show in credits.iter().filter_map(CastCredit::show) {
        let Some(tvdb_id) = show.tvdb_id() else {
            continue;
        };
        let allowed = show
            .show_type()
            .is_some_and(|t| ALLOWED_SHOW_TYPES.contains(&t));
        if !allowed {
            continue;
        }

        if seen.insert(tvdb_id.clone()) {
            tracing::debug!(
                show = show.name().unwrap_or_default(),
                tvdb_id = %tvdb_id,
                "Added show"
            );
            shows.push(ShowRecord::new(tvdb_id));
        }
    }

    shows
}
