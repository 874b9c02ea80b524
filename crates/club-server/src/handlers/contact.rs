//! `POST /api/contact` — public contact form.
//!
//! Every submission is stored as a visitor, whatever its message says.

use axum::{Json, extract::State};
use club_core::{ClubStore, NewVisitor};
use serde_json::{Value, json};

use crate::{AppState, error::Error, extract::ApiJson};

pub const CONFIRMATION: &str = "Message envoyé avec succès!";

pub async fn submit<S>(
  State(state): State<AppState<S>>,
  ApiJson(body): ApiJson<NewVisitor>,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let visitor = state.store.add_visitor(body).await.map_err(Error::store)?;
  tracing::info!(id = visitor.id, "visitor recorded");
  Ok(Json(json!({ "success": true, "message": CONFIRMATION })))
}
