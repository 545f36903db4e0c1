//! Saved item endpoint.

use axum::{Json, extract::State};
use serde_json::{Value, json};
use studyrec_persistence::core::DocumentStore;
use studyrec_persistence::schema::SavedItem;

use crate::error::RestResult;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Handler for saving a resource.
///
/// Saving a pair that is already saved succeeds without changing the
/// stored record; the response is the same either way.
///
/// # HTTP Request
///
/// `POST [base]/api/saved`
pub async fn save_item_handler<S>(
    State(state): State<AppState<S>>,
    ValidatedJson(item): ValidatedJson<SavedItem>,
) -> RestResult<Json<Value>>
where
    S: DocumentStore + 'static,
{
    state.saved().save(&item).await?;
    Ok(Json(json!({ "ok": true })))
}
