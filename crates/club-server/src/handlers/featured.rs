//! `PUT /api/admin/member-of-month` and `PUT /api/admin/recruit-of-month`.
//!
//! Both take a multipart form with text fields `nom` and `prenom` and an
//! optional file field `photo`. The slot is overwritten wholesale: omitting
//! the photo clears any previous one.

use axum::{
  Json,
  extract::{Multipart, State, multipart::MultipartError},
};
use bytes::Bytes;
use club_core::{ClubStore, FeaturedSlot, NewFeatured};
use serde_json::{Value, json};

use crate::{AppState, auth::Authenticated, error::Error};

pub async fn member_of_month<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  multipart: Multipart,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  update(&state, FeaturedSlot::MemberOfMonth, multipart).await
}

pub async fn recruit_of_month<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  multipart: Multipart,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  update(&state, FeaturedSlot::RecruitOfMonth, multipart).await
}

struct Photo {
  file_name: String,
  data:      Bytes,
}

async fn update<S>(
  state:         &AppState<S>,
  slot:          FeaturedSlot,
  mut multipart: Multipart,
) -> Result<Json<Value>, Error>
where
  S: ClubStore + Clone + 'static,
{
  let mut input = NewFeatured::default();
  let mut photo = None;

  while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
    let name = field.name().map(str::to_owned);
    match name.as_deref() {
      Some("nom") => input.last_name = field.text().await.map_err(bad_multipart)?,
      Some("prenom") => input.first_name = field.text().await.map_err(bad_multipart)?,
      Some("photo") => {
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let data = field.bytes().await.map_err(bad_multipart)?;
        // Browsers send an empty, nameless part when no file was chosen.
        if !file_name.is_empty() || !data.is_empty() {
          photo = Some(Photo { file_name, data });
        }
      }
      _ => {}
    }
  }

  if let Some(Photo { file_name, data }) = photo {
    input.photo = Some(state.uploads.save(&file_name, &data).await?);
  }

  let person = state.store.set_featured(slot, input).await.map_err(Error::store)?;
  tracing::info!(%slot, photo = person.photo.is_some(), "featured slot updated");
  Ok(Json(json!({ "success": true, "data": person })))
}

fn bad_multipart(e: MultipartError) -> Error {
  Error::BadRequest(e.body_text())
}
