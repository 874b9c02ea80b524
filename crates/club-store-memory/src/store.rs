//! [`MemoryStore`] — the in-memory implementation of [`ClubStore`].

use std::{convert::Infallible, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;

use club_core::{
  ClubStore,
  model::{
    FeaturedPerson, FeaturedSlot, Member, NewFeatured, NewMember, NewNews,
    NewVisitor, NewsItem, PublicView, Visitor,
  },
};

use crate::clock::IdClock;

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct ClubState {
  clock:            IdClock,
  visitors:         Vec<Visitor>,
  members:          Vec<Member>,
  member_of_month:  Option<FeaturedPerson>,
  recruit_of_month: Option<FeaturedPerson>,
  /// Newest first; ordering is kept by insertion position.
  news:             Vec<NewsItem>,
}

impl ClubState {
  fn slot_mut(&mut self, slot: FeaturedSlot) -> &mut Option<FeaturedPerson> {
    match slot {
      FeaturedSlot::MemberOfMonth => &mut self.member_of_month,
      FeaturedSlot::RecruitOfMonth => &mut self.recruit_of_month,
    }
  }

  fn slot(&self, slot: FeaturedSlot) -> &Option<FeaturedPerson> {
    match slot {
      FeaturedSlot::MemberOfMonth => &self.member_of_month,
      FeaturedSlot::RecruitOfMonth => &self.recruit_of_month,
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A club store held entirely in process memory.
///
/// Cloning is cheap — clones share the same state. Every operation takes the
/// lock exactly once, so readers never observe a half-applied write.
#[derive(Clone, Default)]
pub struct MemoryStore {
  state: Arc<RwLock<ClubState>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

impl ClubStore for MemoryStore {
  type Error = Infallible;

  // ── Visitors ──────────────────────────────────────────────────────────────

  async fn add_visitor(&self, input: NewVisitor) -> Result<Visitor, Infallible> {
    let mut state = self.state.write().await;
    let (id, submitted_at) = state.clock.stamp(Utc::now());
    let visitor = Visitor {
      id,
      last_name: input.last_name,
      first_name: input.first_name,
      email: input.email,
      message: input.message,
      submitted_at,
    };
    state.visitors.push(visitor.clone());
    Ok(visitor)
  }

  async fn list_visitors(&self) -> Result<Vec<Visitor>, Infallible> {
    Ok(self.state.read().await.visitors.clone())
  }

  // ── Members ───────────────────────────────────────────────────────────────

  async fn add_member(&self, input: NewMember) -> Result<Member, Infallible> {
    let mut state = self.state.write().await;
    let (id, added_at) = state.clock.stamp(Utc::now());
    let member = Member {
      id,
      last_name: input.last_name,
      first_name: input.first_name,
      email: input.email,
      phone: input.phone,
      role: input.role,
      added_at,
    };
    state.members.push(member.clone());
    Ok(member)
  }

  async fn list_members(&self) -> Result<Vec<Member>, Infallible> {
    Ok(self.state.read().await.members.clone())
  }

  // ── Featured slots ────────────────────────────────────────────────────────

  async fn set_featured(
    &self,
    slot:  FeaturedSlot,
    input: NewFeatured,
  ) -> Result<FeaturedPerson, Infallible> {
    let mut state = self.state.write().await;
    let (_, set_at) = state.clock.stamp(Utc::now());
    let person = FeaturedPerson {
      last_name: input.last_name,
      first_name: input.first_name,
      photo: input.photo,
      set_at,
    };
    *state.slot_mut(slot) = Some(person.clone());
    Ok(person)
  }

  async fn get_featured(
    &self,
    slot: FeaturedSlot,
  ) -> Result<Option<FeaturedPerson>, Infallible> {
    Ok(self.state.read().await.slot(slot).clone())
  }

  // ── News ──────────────────────────────────────────────────────────────────

  async fn add_news(&self, input: NewNews) -> Result<NewsItem, Infallible> {
    let mut state = self.state.write().await;
    let (id, created_at) = state.clock.stamp(Utc::now());
    let item = NewsItem {
      id,
      title: input.title,
      body: input.body,
      image: input.image,
      created_at,
    };
    state.news.insert(0, item.clone());
    Ok(item)
  }

  async fn list_news(&self) -> Result<Vec<NewsItem>, Infallible> {
    Ok(self.state.read().await.news.clone())
  }

  async fn delete_news(&self, id: i64) -> Result<bool, Infallible> {
    let mut state = self.state.write().await;
    let before = state.news.len();
    state.news.retain(|n| n.id != id);
    let removed = state.news.len() != before;
    if removed {
      tracing::debug!(id, "news item removed");
    }
    Ok(removed)
  }

  // ── Public projection ─────────────────────────────────────────────────────

  async fn public_view(&self) -> Result<PublicView, Infallible> {
    let state = self.state.read().await;
    Ok(PublicView {
      member_of_month:  state.member_of_month.clone(),
      recruit_of_month: state.recruit_of_month.clone(),
      news:             state.news.clone(),
      members_count:    state.members.len(),
    })
  }
}
