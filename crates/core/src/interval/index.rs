//! Interval indices used by stores to answer "is this span busy?".
//!
//! A store keeps one index alongside its events and updates it on every
//! insert, edit and delete. The store only ever inserts spans that passed
//! `is_busy`, so stored spans are pairwise disjoint; [`BTreeIndex`] relies on
//! that.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use super::span::{is_busy, TimeSpan};
use crate::calendar::EventId;

/// Overlap lookup over the spans of stored events.
pub trait IntervalIndex: Send + Sync {
    /// Records `span` under `id`, replacing any span previously recorded for it.
    fn insert(&mut self, id: EventId, span: TimeSpan);

    /// Forgets the span recorded for `id`, if any.
    fn remove(&mut self, id: EventId);

    /// Returns true if `candidate` overlaps a recorded span other than `exclude`'s.
    fn is_busy(&self, candidate: &TimeSpan, exclude: Option<EventId>) -> bool;

    /// Forgets every span.
    fn clear(&mut self);

    /// Number of recorded spans.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// O(n) index: scans every recorded span.
#[derive(Debug, Clone, Default)]
pub struct LinearIndex {
    spans: HashMap<EventId, TimeSpan>,
}

impl LinearIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntervalIndex for LinearIndex {
    fn insert(&mut self, id: EventId, span: TimeSpan) {
        self.spans.insert(id, span);
    }

    fn remove(&mut self, id: EventId) {
        self.spans.remove(&id);
    }

    fn is_busy(&self, candidate: &TimeSpan, exclude: Option<EventId>) -> bool {
        is_busy(
            candidate,
            self.spans.iter().map(|(id, span)| (*id, span)),
            exclude,
        )
    }

    fn clear(&mut self) {
        self.spans.clear();
    }

    fn len(&self) -> usize {
        self.spans.len()
    }
}

/// O(log n) index ordered by start time.
///
/// Because recorded spans never overlap, ordering them by start also orders
/// them by end. The only span that can reach past `candidate.start` among
/// those starting before `candidate.end` is therefore the last one.
#[derive(Debug, Clone, Default)]
pub struct BTreeIndex {
    by_start: BTreeMap<(DateTime<Utc>, EventId), DateTime<Utc>>,
    starts: HashMap<EventId, DateTime<Utc>>,
}

impl BTreeIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntervalIndex for BTreeIndex {
    fn insert(&mut self, id: EventId, span: TimeSpan) {
        self.remove(id);
        self.by_start.insert((span.start, id), span.end);
        self.starts.insert(id, span.start);
    }

    fn remove(&mut self, id: EventId) {
        if let Some(start) = self.starts.remove(&id) {
            self.by_start.remove(&(start, id));
        }
    }

    fn is_busy(&self, candidate: &TimeSpan, exclude: Option<EventId>) -> bool {
        // Keys strictly below (candidate.end, 0) start before candidate.end.
        self.by_start
            .range(..(candidate.end, EventId(0)))
            .rev()
            .find(|((_, id), _)| Some(*id) != exclude)
            .is_some_and(|(_, end)| *end > candidate.start)
    }

    fn clear(&mut self) {
        self.by_start.clear();
        self.starts.clear();
    }

    fn len(&self) -> usize {
        self.starts.len()
    }
}
