//! club-server binary.
//!
//! Reads `club.toml` (or the path given with `--config`) layered under
//! `CLUB_*` environment variables, opens an in-memory store, and serves the
//! club API over HTTP.
//!
//! # Secrets
//!
//! `admin_password_hash` is an argon2 PHC string and `token_secret` signs
//! admin tokens. Both can be generated with the binary itself:
//!
//! ```
//! cargo run -p club-server --bin server -- --hash-password
//! cargo run -p club-server --bin server -- --generate-secret
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use argon2::{Argon2, PasswordHash, PasswordHasher, password_hash::SaltString};
use chrono::TimeDelta;
use clap::Parser;
use club_server::{
  AppState, ServerConfig,
  auth::{AuthConfig, MIN_SECRET_LEN},
  uploads::UploadDir,
};
use club_store_memory::MemoryStore;
use rand_core::{OsRng, RngCore};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Club website backend")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "club.toml")]
  config: PathBuf,

  /// Port to listen on, overriding the configuration.
  #[arg(short, long, env = "PORT")]
  port: Option<u16>,

  /// Print the argon2 hash for a password entered on stdin and exit.
  #[arg(long)]
  hash_password: bool,

  /// Print a random hex token secret and exit.
  #[arg(long)]
  generate_secret: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  if cli.hash_password {
    let password = read_password()?;
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| anyhow::anyhow!("argon2 error: {e}"))?
      .to_string();
    println!("{hash}");
    return Ok(());
  }

  if cli.generate_secret {
    let mut key = [0u8; MIN_SECRET_LEN];
    OsRng.fill_bytes(&mut key);
    println!("{}", hex::encode(key));
    return Ok(());
  }

  let mut server_cfg = ServerConfig::load(&cli.config, club_server::environment())
    .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
  if let Some(port) = cli.port {
    server_cfg.port = port;
  }

  anyhow::ensure!(
    server_cfg.token_secret.len() >= MIN_SECRET_LEN,
    "token_secret must be at least {MIN_SECRET_LEN} bytes"
  );
  PasswordHash::new(&server_cfg.admin_password_hash)
    .map_err(|e| anyhow::anyhow!("invalid admin_password_hash: {e}"))?;
  anyhow::ensure!(server_cfg.token_ttl_hours > 0, "token_ttl_hours must be positive");

  let uploads = UploadDir::new(&server_cfg.upload_dir);
  uploads
    .ensure_exists()
    .await
    .with_context(|| format!("failed to create {:?}", server_cfg.upload_dir))?;

  let state = AppState {
    store:   Arc::new(MemoryStore::new()),
    auth:    Arc::new(AuthConfig {
      password_hash: server_cfg.admin_password_hash.clone(),
      token_secret:  server_cfg.token_secret.clone().into_bytes(),
      token_ttl:     TimeDelta::hours(server_cfg.token_ttl_hours),
    }),
    uploads: Arc::new(uploads),
    config:  Arc::new(server_cfg.clone()),
  };

  let app = club_server::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  tracing::info!("server stopped");
  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::warn!("failed to listen for ctrl-c: {e}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
      Ok(mut signal) => {
        signal.recv().await;
      }
      Err(e) => {
        tracing::warn!("failed to listen for SIGTERM: {e}");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    () = ctrl_c => {},
    () = terminate => {},
  }
  tracing::info!("shutdown signal received");
}

/// Read a password from stdin.
fn read_password() -> anyhow::Result<String> {
  use std::io::{self, BufRead, Write};
  print!("Password: ");
  io::stdout().flush().ok();
  let mut line = String::new();
  io::stdin().lock().read_line(&mut line)?;
  Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
