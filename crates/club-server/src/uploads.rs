//! Photo uploads for the featured-person slots.
//!
//! Files land in a single flat directory under `<millis>-<name>` and are
//! served back from [`PUBLIC_PREFIX`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::Error;

/// URL prefix the upload directory is mounted under.
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Debug, Clone)]
pub struct UploadDir {
  root: PathBuf,
}

impl UploadDir {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path { &self.root }

  /// Create the directory if it does not exist yet.
  pub async fn ensure_exists(&self) -> std::io::Result<()> {
    if tokio::fs::try_exists(&self.root).await? {
      return Ok(());
    }
    tokio::fs::create_dir_all(&self.root).await?;
    tracing::info!(path = %self.root.display(), "created upload directory");
    Ok(())
  }

  /// Write `data` and return the servable path of the new file.
  pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String, Error> {
    self.save_at(Utc::now(), original_name, data).await
  }

  pub async fn save_at(
    &self,
    now:           DateTime<Utc>,
    original_name: &str,
    data:          &[u8],
  ) -> Result<String, Error> {
    let file_name = format!(
      "{}-{}",
      now.timestamp_millis(),
      sanitize_file_name(original_name)
    );
    tokio::fs::write(self.root.join(&file_name), data).await?;
    tracing::debug!(file = %file_name, bytes = data.len(), "stored upload");
    Ok(format!("{PUBLIC_PREFIX}/{file_name}"))
  }
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Only the last component survives, and anything outside `[A-Za-z0-9._-]`
/// becomes `_`.
pub fn sanitize_file_name(name: &str) -> String {
  let base = name
    .rsplit(['/', '\\'])
    .next()
    .unwrap_or_default()
    .trim_start_matches('.');

  let cleaned: String = base
    .chars()
    .map(|c| {
      if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' }
    })
    .collect();

  if cleaned.is_empty() { "photo".to_string() } else { cleaned }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("club-uploads-{}", uuid::Uuid::new_v4()))
  }

  #[test]
  fn sanitize_keeps_plain_names() {
    assert_eq!(sanitize_file_name("portrait-2026_10.jpg"), "portrait-2026_10.jpg");
  }

  #[test]
  fn sanitize_strips_directories() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name(r"C:\Users\sami\photo.png"), "photo.png");
  }

  #[test]
  fn sanitize_replaces_unsafe_characters() {
    assert_eq!(sanitize_file_name("photo été 1.jpg"), "photo__t__1.jpg");
  }

  #[test]
  fn sanitize_never_returns_empty_or_hidden() {
    assert_eq!(sanitize_file_name(""), "photo");
    assert_eq!(sanitize_file_name("dir/"), "photo");
    assert_eq!(sanitize_file_name(".."), "photo");
    assert_eq!(sanitize_file_name(".htaccess"), "htaccess");
  }

  #[tokio::test]
  async fn ensure_exists_creates_directory_once() {
    let root = temp_dir();
    let uploads = UploadDir::new(&root);
    uploads.ensure_exists().await.unwrap();
    uploads.ensure_exists().await.unwrap();
    assert!(root.is_dir());
    std::fs::remove_dir_all(root).unwrap();
  }

  #[tokio::test]
  async fn save_writes_timestamped_file() {
    let root = temp_dir();
    let uploads = UploadDir::new(&root);
    uploads.ensure_exists().await.unwrap();

    let now = Utc.timestamp_millis_opt(1_760_000_000_000).unwrap();
    let path = uploads.save_at(now, "sami.jpg", b"jpeg bytes").await.unwrap();
    assert_eq!(path, "/uploads/1760000000000-sami.jpg");

    let written = std::fs::read(root.join("1760000000000-sami.jpg")).unwrap();
    assert_eq!(written, b"jpeg bytes");
    std::fs::remove_dir_all(root).unwrap();
  }

  #[tokio::test]
  async fn save_into_missing_directory_is_an_upload_error() {
    let uploads = UploadDir::new(temp_dir());
    let result = uploads.save("a.jpg", b"x").await;
    assert!(matches!(result, Err(Error::Upload(_))));
  }
}
