//! Roadmap endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use studyrec_persistence::core::DocumentStore;
use studyrec_persistence::schema::{Roadmap, RoadmapPatch};
use tracing::{debug, info};

use crate::error::RestResult;
use crate::extractors::{JsonObject, ValidatedJson};
use crate::state::AppState;

/// Handler for creating a roadmap.
///
/// # HTTP Request
///
/// `POST [base]/api/roadmap`
///
/// # Response
///
/// - `200 OK` - `{ok: true, id}`
/// - `400 Bad Request` - the payload is not a valid roadmap
pub async fn create_roadmap_handler<S>(
    State(state): State<AppState<S>>,
    ValidatedJson(roadmap): ValidatedJson<Roadmap>,
) -> RestResult<Json<Value>>
where
    S: DocumentStore + 'static,
{
    let id = state.roadmaps().create(&roadmap).await?;
    info!(id = %id, user_id = %roadmap.user_id, "Created roadmap");
    Ok(Json(json!({ "ok": true, "id": id })))
}

/// Handler for a partial roadmap update.
///
/// Each key in the body replaces the stored value.
///
/// # HTTP Request
///
/// `PATCH [base]/api/roadmap/{id}`
///
/// # Response
///
/// - `200 OK` - `{ok: true}`
/// - `400 Bad Request` - a touched field is invalid
/// - `404 Not Found` - no roadmap has this id
pub async fn update_roadmap_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    JsonObject(fields): JsonObject,
) -> RestResult<Json<Value>>
where
    S: DocumentStore + 'static,
{
    let patch = RoadmapPatch::parse(fields)?;
    debug!(id = %id, fields = patch.fields().len(), "Processing roadmap update");

    state.roadmaps().update(&id, patch).await?;
    Ok(Json(json!({ "ok": true })))
}
