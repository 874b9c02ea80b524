//! `GET /api/public/data` — the unauthenticated projection.

use axum::{Json, extract::State};
use club_core::{ClubStore, PublicView};

use crate::{AppState, error::Error};

pub async fn data<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<PublicView>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let view = state.store.public_view().await.map_err(Error::store)?;
  Ok(Json(view))
}
