//! Handlers for `/api/admin/members`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/admin/members` | Full member records |
//! | `POST` | `/api/admin/members` | Body: `{"nom","prenom","email"?,"telephone"?,"role"?}` |

use axum::{Json, extract::State};
use club_core::{ClubStore, Member, NewMember};
use serde_json::{Value, json};

use crate::{AppState, auth::Authenticated, error::Error, extract::ApiJson};

pub async fn list<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Member>>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let members = state.store.list_members().await.map_err(Error::store)?;
  Ok(Json(members))
}

pub async fn create<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  ApiJson(body): ApiJson<NewMember>,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let member = state.store.add_member(body).await.map_err(Error::store)?;
  tracing::info!(id = member.id, "member added");
  Ok(Json(json!({ "success": true, "member": member })))
}
