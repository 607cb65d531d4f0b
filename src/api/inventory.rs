use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use tracing::info;

use crate::{
    api::error::ApiError,
    catalog::Item,
    load::LoadRequest,
    state::AppState,
};

/// Header that asks for synthetic CPU load before the lookup.
pub const COMPUTE_HEADER: &str = "x-compute";

/// GET /inventory - The whole catalog, in catalog order
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.catalog.items().to_vec())
}

/// GET /inventory/:id - A single item
///
/// With `x-compute: true` the handler first burns `id × 1000` ms of CPU
/// on the worker running it. Any other header value, or none, skips it.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Item>, ApiError> {
    if wants_compute(&headers) {
        // Runs inline: the burn must hold this worker, not a blocking pool thread.
        state.load.apply(LoadRequest::from_id(&id));
    }

    if let Some(message) = state.faults.check(&id) {
        return Err(ApiError::InjectedFault(message.to_string()));
    }

    let item = state.catalog.find_by_id(&id)?;
    info!("Item with id {} found", id);
    Ok(Json(item.clone()))
}

fn wants_compute(headers: &HeaderMap) -> bool {
    headers
        .get(COMPUTE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "true")
        .unwrap_or(false)
}
