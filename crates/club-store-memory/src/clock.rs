//! Id and timestamp assignment.

use chrono::{DateTime, SubsecRound as _, Utc};

/// Hands out millisecond ids that are strictly increasing, even when two
/// records are created within the same millisecond.
#[derive(Debug, Default)]
pub(crate) struct IdClock {
  last: i64,
}

impl IdClock {
  /// Stamp a new record created at `now`.
  pub(crate) fn stamp(&mut self, now: DateTime<Utc>) -> (i64, DateTime<Utc>) {
    let now = now.trunc_subsecs(3);
    let id = now.timestamp_millis().max(self.last + 1);
    self.last = id;
    (id, now)
  }
}
