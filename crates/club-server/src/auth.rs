//! Admin authentication: password check, signed tokens, and the
//! [`Authenticated`] extractor.
//!
//! Tokens are compact HS256 tokens in the familiar three-part
//! `header.claims.signature` form, each part base64url-encoded without
//! padding. Any holder of a valid, unexpired token is a full admin; there are
//! no roles and tokens cannot be revoked before they expire.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64URL;
use chrono::{DateTime, TimeDelta, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use club_core::ClubStore;

use crate::{AppState, error::Error};

type HmacSha256 = Hmac<Sha256>;

/// Shortest accepted signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

const TOKEN_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Claims carried by an admin token. Times are seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
  pub admin: bool,
  pub iat:   i64,
  pub exp:   i64,
}

impl Claims {
  pub fn admin(now: DateTime<Utc>, ttl: TimeDelta) -> Self {
    Self {
      admin: true,
      iat:   now.timestamp(),
      exp:   (now + ttl).timestamp(),
    }
  }
}

/// Credentials and signing material for this server instance.
#[derive(Clone)]
pub struct AuthConfig {
  /// PHC string produced by argon2, e.g. `$argon2id$v=19$…`
  pub password_hash: String,
  pub token_secret:  Vec<u8>,
  pub token_ttl:     TimeDelta,
}

impl AuthConfig {
  /// Check `password` against the configured argon2 hash.
  pub fn check_password(&self, password: &str) -> Result<(), Error> {
    let parsed_hash = PasswordHash::new(&self.password_hash)
      .map_err(|e| Error::Internal(format!("bad admin password hash: {e}")))?;

    Argon2::default()
      .verify_password(password.as_bytes(), &parsed_hash)
      .map_err(|_| Error::InvalidPassword)
  }

  /// Issue an admin token valid for `ttl` from now.
  pub fn issue_token(&self, ttl: TimeDelta) -> Result<String, Error> {
    self.sign(&Claims::admin(Utc::now(), ttl))
  }

  /// Sign arbitrary claims into a token.
  pub fn sign(&self, claims: &Claims) -> Result<String, Error> {
    let header = B64URL.encode(TOKEN_HEADER);
    let payload = serde_json::to_vec(claims)
      .map_err(|e| Error::Internal(format!("encoding claims: {e}")))?;
    let payload = B64URL.encode(payload);

    let mut mac = self.mac()?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    let signature = B64URL.encode(mac.finalize().into_bytes());

    Ok(format!("{header}.{payload}.{signature}"))
  }

  /// Verify a token against the current time.
  pub fn verify_token(&self, token: &str) -> Result<Claims, Error> {
    self.verify_token_at(token, Utc::now())
  }

  /// Verify a token's structure, signature and expiry as of `now`. Every
  /// failure is [`Error::Forbidden`].
  pub fn verify_token_at(
    &self,
    token: &str,
    now:   DateTime<Utc>,
  ) -> Result<Claims, Error> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
      (parts.next(), parts.next(), parts.next(), parts.next())
    else {
      return Err(Error::Forbidden);
    };

    let header_json = B64URL.decode(header).map_err(|_| Error::Forbidden)?;
    if header_json != TOKEN_HEADER.as_bytes() {
      return Err(Error::Forbidden);
    }

    let signature = B64URL.decode(signature).map_err(|_| Error::Forbidden)?;
    let mut mac = self.mac()?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature).map_err(|_| Error::Forbidden)?;

    let payload = B64URL.decode(payload).map_err(|_| Error::Forbidden)?;
    let claims: Claims =
      serde_json::from_slice(&payload).map_err(|_| Error::Forbidden)?;

    if !claims.admin || claims.exp <= now.timestamp() {
      return Err(Error::Forbidden);
    }
    Ok(claims)
  }

  fn mac(&self) -> Result<HmacSha256, Error> {
    HmacSha256::new_from_slice(&self.token_secret)
      .map_err(|e| Error::Internal(format!("hmac key: {e}")))
  }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// A missing header, or one with nothing after the scheme, is
/// [`Error::Unauthorized`].
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, Error> {
  headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split_once(' '))
    .map(|(_, token)| token.trim())
    .filter(|token| !token.is_empty())
    .ok_or(Error::Unauthorized)
}

/// Verify the admin token carried in `headers`.
pub fn verify_auth(headers: &HeaderMap, config: &AuthConfig) -> Result<Claims, Error> {
  config.verify_token(bearer_token(headers)?)
}

/// Present in a handler's arguments means the request carried a valid admin
/// token. Rejection happens before the body is read.
pub struct Authenticated(pub Claims);

impl<S> FromRequestParts<AppState<S>> for Authenticated
where
  S: ClubStore + Clone + 'static,
{
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    verify_auth(&parts.headers, &state.auth).map(Authenticated)
  }
}
