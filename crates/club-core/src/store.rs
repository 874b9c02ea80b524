//! The `ClubStore` trait.
//!
//! Implemented by storage backends (e.g. `club-store-memory`). The server
//! depends on this abstraction, so durability can be added behind it without
//! touching any handler.

use std::future::Future;

use crate::model::{
  FeaturedPerson, FeaturedSlot, Member, NewFeatured, NewMember, NewNews,
  NewVisitor, NewsItem, PublicView, Visitor,
};

/// Abstraction over the club's state.
///
/// Backends assign ids and timestamps. Ids are milliseconds since the Unix
/// epoch at creation and are unique within the store.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait ClubStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Visitors ──────────────────────────────────────────────────────────

  /// Record a contact-form submission.
  fn add_visitor(
    &self,
    input: NewVisitor,
  ) -> impl Future<Output = Result<Visitor, Self::Error>> + Send + '_;

  /// All visitors, in submission order.
  fn list_visitors(
    &self,
  ) -> impl Future<Output = Result<Vec<Visitor>, Self::Error>> + Send + '_;

  // ── Members ───────────────────────────────────────────────────────────

  fn add_member(
    &self,
    input: NewMember,
  ) -> impl Future<Output = Result<Member, Self::Error>> + Send + '_;

  fn list_members(
    &self,
  ) -> impl Future<Output = Result<Vec<Member>, Self::Error>> + Send + '_;

  // ── Featured slots ────────────────────────────────────────────────────

  /// Overwrite `slot` with a new person and return what was stored.
  fn set_featured(
    &self,
    slot: FeaturedSlot,
    input: NewFeatured,
  ) -> impl Future<Output = Result<FeaturedPerson, Self::Error>> + Send + '_;

  fn get_featured(
    &self,
    slot: FeaturedSlot,
  ) -> impl Future<Output = Result<Option<FeaturedPerson>, Self::Error>> + Send + '_;

  // ── News ──────────────────────────────────────────────────────────────

  /// Publish a news item at the head of the feed.
  fn add_news(
    &self,
    input: NewNews,
  ) -> impl Future<Output = Result<NewsItem, Self::Error>> + Send + '_;

  /// The news feed, newest first.
  fn list_news(
    &self,
  ) -> impl Future<Output = Result<Vec<NewsItem>, Self::Error>> + Send + '_;

  /// Remove the item with `id`. Returns whether anything was removed; an
  /// unknown id leaves the feed untouched and is not an error.
  fn delete_news(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Public projection ─────────────────────────────────────────────────

  /// Both featured slots, the news feed, and the member count, read as one
  /// consistent snapshot.
  fn public_view(
    &self,
  ) -> impl Future<Output = Result<PublicView, Self::Error>> + Send + '_;
}
