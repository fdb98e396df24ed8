use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::EventId;

/// A half-open time range `[start, end)`.
///
/// The end instant is excluded, so a span ending at 16:00 and one starting at
/// 16:00 do not conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSpan {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Returns true if the span covers no instant (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns true if the two spans share at least one instant.
    ///
    /// `[s1, e1)` and `[s2, e2)` conflict iff `s1 < e2 && s2 < e1`, which covers
    /// containment in either direction and partial overlap at either end.
    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Linear scan: does `candidate` conflict with any of `existing`?
///
/// The entry whose id equals `exclude` is skipped, which lets an event be
/// checked against everything except its own previous value.
pub fn is_busy<'a, I>(candidate: &TimeSpan, existing: I, exclude: Option<EventId>) -> bool
where
    I: IntoIterator<Item = (EventId, &'a TimeSpan)>,
{
    existing
        .into_iter()
        .filter(|(id, _)| Some(*id) != exclude)
        .any(|(_, span)| candidate.overlaps(span))
}
