//! `POST /api/admin/login` — exchange the admin password for a token.

use axum::{Json, extract::State};
use club_core::ClubStore;
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use crate::{AppState, error::Error, extract::ApiJson};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginBody {
  /// `None` unless the client sent a JSON string; anything else can never
  /// match.
  #[serde(deserialize_with = "string_only")]
  pub password: Option<String>,
}

fn string_only<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
  Ok(match Value::deserialize(d)? {
    Value::String(s) => Some(s),
    _ => None,
  })
}

pub async fn login<S>(
  State(state): State<AppState<S>>,
  ApiJson(body): ApiJson<LoginBody>,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let Some(password) = body.password else {
    tracing::warn!("admin login rejected: no password string");
    return Err(Error::InvalidPassword);
  };

  state.auth.check_password(&password).inspect_err(|e| {
    if matches!(e, Error::InvalidPassword) {
      tracing::warn!("admin login rejected");
    }
  })?;

  let token = state.auth.issue_token(state.auth.token_ttl)?;
  tracing::info!("admin token issued");
  Ok(Json(json!({ "success": true, "token": token })))
}
