//! Handlers for the news feed.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/api/admin/news` | Body: `{"titre","contenu","image"?}`; prepended |
//! | `DELETE` | `/api/admin/news/{id}` | Unknown or non-numeric ids succeed as no-ops |

use axum::{
  Json,
  extract::{Path, State},
};
use club_core::{ClubStore, NewNews};
use serde_json::{Value, json};

use crate::{AppState, auth::Authenticated, error::Error, extract::ApiJson};

pub async fn create<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  ApiJson(body): ApiJson<NewNews>,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let news = state.store.add_news(body).await.map_err(Error::store)?;
  tracing::info!(id = news.id, "news published");
  Ok(Json(json!({ "success": true, "news": news })))
}

pub async fn remove<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  // A non-numeric id cannot match anything.
  if let Ok(id) = id.parse::<i64>() {
    let removed = state.store.delete_news(id).await.map_err(Error::store)?;
    tracing::info!(id, removed, "news delete");
  }
  Ok(Json(json!({ "success": true })))
}
