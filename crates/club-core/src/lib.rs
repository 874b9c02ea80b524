//! Core types and the storage trait for the club backend.
//!
//! This crate is deliberately free of HTTP and I/O dependencies. The server
//! and the storage backends depend on it.

pub mod model;
pub mod store;

pub use model::{
  FeaturedPerson, FeaturedSlot, Member, NewFeatured, NewMember, NewNews,
  NewVisitor, NewsItem, PublicView, Visitor,
};
pub use store::ClubStore;
