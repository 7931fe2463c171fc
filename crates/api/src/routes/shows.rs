use crate::models::{ErrorResponse, ShowResponse};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::Json as ResponseJson,
};
use services::{ShowsError, ShowsServiceTrait};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ShowsAppState {
    pub shows_service: Arc<dyn ShowsServiceTrait>,
}

/// Get TV shows featuring a specific actor
///
/// Returns a list of TVDB IDs for TV shows featuring the specified actor,
/// in the shape Sonarr expects from a TVDB person list. Results are cached,
/// and when the catalog is unavailable the list is empty.
#[utoipa::path(
    get,
    path = "/shows/{actor_name}",
    tag = "Shows",
    params(
        ("actor_name" = String, Path, description = "The name of the actor to search for, e.g. `Bryan Cranston` or `bryan-cranston`")
    ),
    responses(
        (status = 200, description = "Shows featuring the actor", body = [ShowResponse]),
        (status = 400, description = "Invalid actor name", body = ErrorResponse)
    )
)]
pub async fn get_shows_by_actor(
    State(app_state): State<ShowsAppState>,
    actor_name: Result<Path<String>, PathRejection>,
) -> Result<ResponseJson<Vec<ShowResponse>>, (StatusCode, ResponseJson<ErrorResponse>)> {
    // A segment that does not decode to UTF-8 is just another invalid name
    let actor_name = match actor_name {
        Ok(Path(actor_name)) => actor_name,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected undecodable actor name");
            return Err(invalid_actor_name(String::new()));
        }
    };

    info!(actor = %actor_name, "Request received for actor");

    let shows = app_state
        .shows_service
        .get_shows_for_actor(&actor_name)
        .await
        .map_err(|e| {
            warn!(actor = %actor_name, "Rejected invalid actor name");
            match e {
                ShowsError::InvalidActorName(name) => invalid_actor_name(name),
            }
        })?;

    let response: Vec<ShowResponse> = shows.iter().map(ShowResponse::from).collect();
    info!(actor = %actor_name, count = response.len(), "Returning shows for actor");

    Ok(ResponseJson(response))
}

fn invalid_actor_name(actor_name: String) -> (StatusCode, ResponseJson<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        ResponseJson(ErrorResponse::new(
            ShowsError::InvalidActorName(actor_name).to_string(),
        )),
    )
}
