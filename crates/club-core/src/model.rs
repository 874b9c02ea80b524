//! Records held by the club store.
//!
//! Wire names follow the club site's front end (`nom`, `prenom`, `dateAjout`,
//! …), so the Rust field names are mapped with `serde(rename)`.
//!
//! Input types (`New*`) carry only what a caller may supply. Identifiers and
//! timestamps are always assigned by the store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Visitors ────────────────────────────────────────────────────────────────

/// A contact-form submission. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
  pub id:           i64,
  #[serde(rename = "nom")]
  pub last_name:    String,
  #[serde(rename = "prenom")]
  pub first_name:   String,
  pub email:        String,
  pub message:      String,
  #[serde(rename = "date")]
  pub submitted_at: DateTime<Utc>,
}

/// Contact-form body. Absent or `null` fields coerce to empty strings and
/// scalars to their text form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewVisitor {
  #[serde(rename = "nom", deserialize_with = "lenient::string")]
  pub last_name:  String,
  #[serde(rename = "prenom", deserialize_with = "lenient::string")]
  pub first_name: String,
  #[serde(deserialize_with = "lenient::string")]
  pub email:      String,
  #[serde(deserialize_with = "lenient::string")]
  pub message:    String,
}

// ─── Members ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
  pub id:         i64,
  #[serde(rename = "nom")]
  pub last_name:  String,
  #[serde(rename = "prenom")]
  pub first_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email:      Option<String>,
  #[serde(rename = "telephone", skip_serializing_if = "Option::is_none")]
  pub phone:      Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role:       Option<String>,
  #[serde(rename = "dateAjout")]
  pub added_at:   DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewMember {
  #[serde(rename = "nom", deserialize_with = "lenient::string")]
  pub last_name:  String,
  #[serde(rename = "prenom", deserialize_with = "lenient::string")]
  pub first_name: String,
  #[serde(deserialize_with = "lenient::optional_string")]
  pub email:      Option<String>,
  #[serde(rename = "telephone", deserialize_with = "lenient::optional_string")]
  pub phone:      Option<String>,
  #[serde(deserialize_with = "lenient::optional_string")]
  pub role:       Option<String>,
}

// ─── Featured people ─────────────────────────────────────────────────────────

/// The two singleton "of the month" slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeaturedSlot {
  MemberOfMonth,
  RecruitOfMonth,
}

impl FeaturedSlot {
  pub fn as_str(self) -> &'static str {
    match self {
      FeaturedSlot::MemberOfMonth => "member-of-month",
      FeaturedSlot::RecruitOfMonth => "recruit-of-month",
    }
  }
}

impl fmt::Display for FeaturedSlot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The person currently shown in a featured slot. Replaced wholesale on
/// every update; no history is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedPerson {
  #[serde(rename = "nom")]
  pub last_name:  String,
  #[serde(rename = "prenom")]
  pub first_name: String,
  /// Servable path of the uploaded photo, e.g. `/uploads/1700000000000-a.jpg`.
  pub photo:      Option<String>,
  #[serde(rename = "date")]
  pub set_at:     DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct NewFeatured {
  pub last_name:  String,
  pub first_name: String,
  pub photo:      Option<String>,
}

// ─── News ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
  pub id:         i64,
  #[serde(rename = "titre")]
  pub title:      String,
  #[serde(rename = "contenu")]
  pub body:       String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image:      Option<String>,
  #[serde(rename = "date")]
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewNews {
  #[serde(rename = "titre", deserialize_with = "lenient::string")]
  pub title: String,
  #[serde(rename = "contenu", deserialize_with = "lenient::string")]
  pub body:  String,
  #[serde(deserialize_with = "lenient::optional_string")]
  pub image: Option<String>,
}

// ─── Lenient input fields ────────────────────────────────────────────────────

/// Form fields accept any scalar: strings pass through, numbers and booleans
/// become their text form, and `null` counts as absent. Arrays and objects
/// are still rejected.
mod lenient {
  use std::fmt;

  use serde::de::{self, Deserializer, Visitor};

  struct Scalar;

  impl<'de> Visitor<'de> for Scalar {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
      Ok(Some(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
      Ok(Some(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
      Ok(Some(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> { Ok(None) }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
      d.deserialize_any(Scalar)
    }
  }

  pub(super) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    d.deserialize_any(Scalar).map(Option::unwrap_or_default)
  }

  pub(super) fn optional_string<'de, D: Deserializer<'de>>(
    d: D,
  ) -> Result<Option<String>, D::Error> {
    d.deserialize_any(Scalar)
  }
}

// ─── Public projection ───────────────────────────────────────────────────────

/// What unauthenticated visitors may see. Members are reduced to a count and
/// visitors are absent entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicView {
  pub member_of_month:  Option<FeaturedPerson>,
  pub recruit_of_month: Option<FeaturedPerson>,
  pub news:             Vec<NewsItem>,
  pub members_count:    usize,
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use serde_json::json;

  #[test]
  fn visitor_uses_front_end_field_names() {
    let visitor = Visitor {
      id:           1_700_000_000_000,
      last_name:    "Ben Salah".into(),
      first_name:   "Amira".into(),
      email:        "amira@example.com".into(),
      message:      "Bonjour".into(),
      submitted_at: Utc.with_ymd_and_hms(2026, 10, 16, 8, 30, 0).unwrap(),
    };
    let value = serde_json::to_value(&visitor).unwrap();
    assert_eq!(value["nom"], "Ben Salah");
    assert_eq!(value["prenom"], "Amira");
    assert_eq!(value["date"], "2026-10-16T08:30:00Z");
  }

  #[test]
  fn new_member_ignores_unknown_fields_and_defaults_missing_ones() {
    let input: NewMember = serde_json::from_value(json!({
      "nom": "Trabelsi",
      "isAdmin": true,
    }))
    .unwrap();
    assert_eq!(input.last_name, "Trabelsi");
    assert_eq!(input.first_name, "");
    assert!(input.email.is_none());
  }

  #[test]
  fn null_and_scalar_fields_coerce_to_text() {
    let input: NewVisitor = serde_json::from_value(json!({
      "nom": null,
      "prenom": 42,
      "email": true,
      "message": 1.5,
    }))
    .unwrap();
    assert_eq!(input.last_name, "");
    assert_eq!(input.first_name, "42");
    assert_eq!(input.email, "true");
    assert_eq!(input.message, "1.5");

    let news: NewNews = serde_json::from_value(json!({ "titre": 2026, "image": null })).unwrap();
    assert_eq!(news.title, "2026");
    assert!(news.image.is_none());

    let member: NewMember = serde_json::from_value(json!({ "telephone": 21612345678u64 })).unwrap();
    assert_eq!(member.phone.as_deref(), Some("21612345678"));
  }

  #[test]
  fn structured_values_are_still_rejected() {
    assert!(serde_json::from_value::<NewVisitor>(json!({ "nom": ["a"] })).is_err());
    assert!(serde_json::from_value::<NewNews>(json!({ "image": { "src": "x" } })).is_err());
  }

  #[test]
  fn public_view_is_camel_case() {
    let view = PublicView {
      member_of_month:  None,
      recruit_of_month: None,
      news:             vec![],
      members_count:    3,
    };
    let value = serde_json::to_value(&view).unwrap();
    assert_eq!(
      value,
      json!({
        "memberOfMonth": null,
        "recruitOfMonth": null,
        "news": [],
        "membersCount": 3,
      })
    );
  }
}
