//! Admin views of contact-form visitors.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/admin/visitors` | JSON list, submission order |
//! | `GET`  | `/api/admin/export-visitors` | CSV download |

use axum::{
  Json,
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};
use club_core::{ClubStore, Visitor};

use crate::{AppState, auth::Authenticated, error::Error, export};

pub async fn list<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Visitor>>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let visitors = state.store.list_visitors().await.map_err(Error::store)?;
  Ok(Json(visitors))
}

pub async fn export<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
) -> Result<Response, Error>
where
  S: ClubStore + Clone + 'static,
{
  let visitors = state.store.list_visitors().await.map_err(Error::store)?;
  let csv = export::visitors_csv(&visitors);
  Ok(
    (
      [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (header::CONTENT_DISPOSITION, "attachment; filename=visiteurs.csv"),
      ],
      csv,
    )
      .into_response(),
  )
}
