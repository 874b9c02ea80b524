//! Request extractors whose rejections render through [`Error`].

use axum::extract::FromRequest;

use crate::error::Error;

/// `axum::Json`, but a malformed body becomes an [`Error::BadRequest`] with
/// the usual `{"error": ...}` body instead of axum's plain-text rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);
