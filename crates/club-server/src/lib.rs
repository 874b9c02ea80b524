//! HTTP backend for the club website.
//!
//! Exposes an axum [`Router`] backed by any [`ClubStore`]: a public contact
//! form and read API, a password login that issues admin tokens, and
//! token-protected admin routes for members, featured people and news.

pub mod auth;
pub mod error;
pub mod export;
pub mod extract;
pub mod handlers;
pub mod uploads;

pub use error::Error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  extract::DefaultBodyLimit,
  http::{HeaderValue, Method, header},
  routing::{delete, get, post, put},
};
use club_core::ClubStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use auth::AuthConfig;
use handlers::{contact, featured, login, members, news, public, visitors};
use uploads::UploadDir;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `club.toml` and `CLUB_*`
/// environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:                String,
  #[serde(default = "default_port")]
  pub port:                u16,
  #[serde(default = "default_upload_dir")]
  pub upload_dir:          PathBuf,
  #[serde(default = "default_public_dir")]
  pub public_dir:          PathBuf,
  pub token_secret:        String,
  pub admin_password_hash: String,
  #[serde(default = "default_token_ttl_hours")]
  pub token_ttl_hours:     i64,
  #[serde(default = "default_max_body_bytes")]
  pub max_body_bytes:      usize,
  /// Origins allowed by CORS. Empty disables the CORS layer.
  #[serde(default)]
  pub cors_origins:        Vec<String>,
}

impl ServerConfig {
  /// Read `file` if it exists, with `env` layered on top.
  pub fn load(file: &Path, env: config::Environment) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(file).required(false))
      .add_source(env)
      .build()?
      .try_deserialize()
  }
}

/// `CLUB_*` variables. `CLUB_CORS_ORIGINS` is a comma-separated list.
pub fn environment() -> config::Environment {
  config::Environment::with_prefix("CLUB")
    .try_parsing(true)
    .list_separator(",")
    .with_list_parse_key("cors_origins")
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }
fn default_upload_dir() -> PathBuf { PathBuf::from("uploads") }
fn default_public_dir() -> PathBuf { PathBuf::from("public") }
fn default_token_ttl_hours() -> i64 { 24 }
fn default_max_body_bytes() -> usize { 10 * 1024 * 1024 }

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ClubStore> {
  pub store:   Arc<S>,
  pub config:  Arc<ServerConfig>,
  pub auth:    Arc<AuthConfig>,
  pub uploads: Arc<UploadDir>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: the JSON API under `/api`, uploaded photos
/// under `/uploads`, and the public assets directory for everything else.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ClubStore + Clone + 'static,
{
  let api = Router::new()
    // Public
    .route("/contact",                post(contact::submit::<S>))
    .route("/admin/login",            post(login::login::<S>))
    .route("/public/data",            get(public::data::<S>))
    // Admin
    .route("/admin/visitors",         get(visitors::list::<S>))
    .route("/admin/export-visitors",  get(visitors::export::<S>))
    .route("/admin/members",          get(members::list::<S>).post(members::create::<S>))
    .route("/admin/member-of-month",  put(featured::member_of_month::<S>))
    .route("/admin/recruit-of-month", put(featured::recruit_of_month::<S>))
    .route("/admin/news",             post(news::create::<S>))
    .route("/admin/news/{id}",        delete(news::remove::<S>));

  let mut app = Router::new()
    .nest("/api", api)
    .nest_service(uploads::PUBLIC_PREFIX, ServeDir::new(state.uploads.root()))
    .fallback_service(ServeDir::new(&state.config.public_dir))
    .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
    .layer(TraceLayer::new_for_http());

  if let Some(cors) = cors_layer(&state.config.cors_origins) {
    app = app.layer(cors);
  }

  app.with_state(state)
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
  let origins: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|o| match HeaderValue::from_str(o) {
      Ok(v) => Some(v),
      Err(_) => {
        tracing::warn!(origin = %o, "ignoring invalid CORS origin");
        None
      }
    })
    .collect();
  if origins.is_empty() {
    return None;
  }

  Some(
    CorsLayer::new()
      .allow_origin(origins)
      .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
      .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
      .allow_credentials(true),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────
