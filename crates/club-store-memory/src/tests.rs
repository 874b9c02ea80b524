//! Behavioural tests for `MemoryStore`.

use club_core::{
  ClubStore,
  model::{FeaturedSlot, NewFeatured, NewMember, NewNews, NewVisitor},
};

use crate::MemoryStore;

fn visitor(message: &str) -> NewVisitor {
  NewVisitor {
    last_name:  "Ben Salah".into(),
    first_name: "Amira".into(),
    email:      "amira@example.com".into(),
    message:    message.into(),
  }
}

fn news(title: &str) -> NewNews {
  NewNews {
    title: title.into(),
    body:  format!("{title} body"),
    image: None,
  }
}

// ─── Visitors ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_visitor_appends_one_record() {
  let s = MemoryStore::new();

  let v = s.add_visitor(visitor("Bonjour")).await.unwrap();
  assert_eq!(v.message, "Bonjour");

  let all = s.list_visitors().await.unwrap();
  assert_eq!(all, vec![v]);
}

#[tokio::test]
async fn visitors_keep_submission_order_and_unique_ids() {
  let s = MemoryStore::new();
  for i in 0..20 {
    s.add_visitor(visitor(&format!("msg {i}"))).await.unwrap();
  }

  let all = s.list_visitors().await.unwrap();
  assert_eq!(all.len(), 20);
  assert_eq!(all[0].message, "msg 0");
  assert_eq!(all[19].message, "msg 19");
  assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

// ─── Members ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_member_sets_id_and_timestamp() {
  let s = MemoryStore::new();
  let m = s
    .add_member(NewMember {
      last_name: "Trabelsi".into(),
      first_name: "Youssef".into(),
      role: Some("Trésorier".into()),
      ..Default::default()
    })
    .await
    .unwrap();

  assert!(m.id >= m.added_at.timestamp_millis());
  assert_eq!(m.role.as_deref(), Some("Trésorier"));
  assert_eq!(s.list_members().await.unwrap().len(), 1);
}

// ─── Featured slots ──────────────────────────────────────────────────────────

#[tokio::test]
async fn featured_slots_start_empty() {
  let s = MemoryStore::new();
  assert!(s.get_featured(FeaturedSlot::MemberOfMonth).await.unwrap().is_none());
  assert!(s.get_featured(FeaturedSlot::RecruitOfMonth).await.unwrap().is_none());
}

#[tokio::test]
async fn set_featured_overwrites_only_its_slot() {
  let s = MemoryStore::new();
  s.set_featured(FeaturedSlot::MemberOfMonth, NewFeatured {
    last_name:  "Gharbi".into(),
    first_name: "Sami".into(),
    photo:      Some("/uploads/1-sami.jpg".into()),
  })
  .await
  .unwrap();
  s.set_featured(FeaturedSlot::MemberOfMonth, NewFeatured {
    last_name:  "Jaziri".into(),
    first_name: "Lina".into(),
    photo:      None,
  })
  .await
  .unwrap();

  let current = s
    .get_featured(FeaturedSlot::MemberOfMonth)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(current.first_name, "Lina");
  assert!(current.photo.is_none(), "previous photo must not leak through");
  assert!(s.get_featured(FeaturedSlot::RecruitOfMonth).await.unwrap().is_none());
}

// ─── News ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn news_is_newest_first() {
  let s = MemoryStore::new();
  s.add_news(news("first")).await.unwrap();
  s.add_news(news("second")).await.unwrap();
  s.add_news(news("third")).await.unwrap();

  let titles: Vec<_> = s
    .list_news()
    .await
    .unwrap()
    .into_iter()
    .map(|n| n.title)
    .collect();
  assert_eq!(titles, ["third", "second", "first"]);
}

#[tokio::test]
async fn delete_news_removes_exactly_one_and_keeps_order() {
  let s = MemoryStore::new();
  let a = s.add_news(news("a")).await.unwrap();
  let b = s.add_news(news("b")).await.unwrap();
  let c = s.add_news(news("c")).await.unwrap();

  assert!(s.delete_news(b.id).await.unwrap());

  let ids: Vec<_> = s.list_news().await.unwrap().iter().map(|n| n.id).collect();
  assert_eq!(ids, [c.id, a.id]);
}

#[tokio::test]
async fn delete_unknown_news_is_a_noop() {
  let s = MemoryStore::new();
  s.add_news(news("a")).await.unwrap();
  let before = s.list_news().await.unwrap();

  assert!(!s.delete_news(42).await.unwrap());
  assert_eq!(s.list_news().await.unwrap(), before);
}

// ─── Public projection ───────────────────────────────────────────────────────

#[tokio::test]
async fn public_view_counts_members_without_listing_them() {
  let s = MemoryStore::new();
  s.add_member(NewMember::default()).await.unwrap();
  s.add_member(NewMember::default()).await.unwrap();
  s.add_visitor(visitor("hello")).await.unwrap();
  let item = s.add_news(news("open day")).await.unwrap();

  let view = s.public_view().await.unwrap();
  assert_eq!(view.members_count, 2);
  assert_eq!(view.news, vec![item]);
  assert!(view.member_of_month.is_none());
  assert!(view.recruit_of_month.is_none());
}

#[tokio::test]
async fn clones_share_state() {
  let s = MemoryStore::new();
  let other = s.clone();
  other.add_news(news("shared")).await.unwrap();
  assert_eq!(s.list_news().await.unwrap().len(), 1);
}
