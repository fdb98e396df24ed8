//! In-memory event store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use eventcal_core::calendar::{validate_event, validate_new_event, Event, EventId, NewEvent};
use eventcal_core::interval::{IntervalIndex, LinearIndex};
use eventcal_core::storage::{EventStore, Result, StoreError};

/// Everything guarded by the store's lock.
///
/// The map, the interval index and the id counter change together, so they
/// share one lock and the overlap check always sees the state it guards.
#[derive(Debug)]
struct State<I> {
    events: HashMap<EventId, Event>,
    index: I,
    next_id: EventId,
}

impl<I: IntervalIndex> State<I> {
    fn reset(&mut self) {
        self.events.clear();
        self.index.clear();
        self.next_id = EventId::default();
    }
}

/// In-memory storage backend.
///
/// Events are keyed by id in a HashMap wrapped in `Arc<RwLock<_>>`; clones
/// share the same collection. Data is not persisted and will be lost when the
/// last clone is dropped.
#[derive(Debug)]
pub struct InMemoryEventStore<I = LinearIndex> {
    state: Arc<RwLock<State<I>>>,
}

impl<I> Clone for InMemoryEventStore<I> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for InMemoryEventStore<LinearIndex> {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventStore<LinearIndex> {
    /// Creates a new empty store backed by a linear-scan index.
    pub fn new() -> Self {
        Self::with_index()
    }
}

impl<I: IntervalIndex + Default> InMemoryEventStore<I> {
    /// Creates a new empty store backed by the index type `I`.
    pub fn with_index() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                events: HashMap::new(),
                index: I::default(),
                next_id: EventId::default(),
            })),
        }
    }
}

#[async_trait]
impl<I: IntervalIndex + 'static> EventStore for InMemoryEventStore<I> {
    async fn init(&self) -> Result<()> {
        let mut state = self.state.write().await;
        state.reset();
        Ok(())
    }

    async fn add(&self, event: NewEvent) -> Result<EventId> {
        validate_new_event(&event).map_err(|err| {
            StoreError::from_validation(err, event.start_time, event.end_time)
        })?;
        let span = event.span();

        let mut state = self.state.write().await;
        if state.index.is_busy(&span, None) {
            return Err(StoreError::DateBusy);
        }

        let id = state.next_id;
        state.next_id = id.next();
        state.index.insert(id, span);
        state.events.insert(id, event.with_id(id));
        Ok(id)
    }

    async fn get(&self, id: EventId) -> Result<Event> {
        let state = self.state.read().await;
        state
            .events
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn get_all(&self) -> Result<Vec<Event>> {
        let state = self.state.read().await;
        Ok(state.events.values().cloned().collect())
    }

    async fn edit(&self, event: Event) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.events.contains_key(&event.id) {
            return Err(StoreError::NotFound(event.id));
        }

        validate_event(&event).map_err(|err| {
            StoreError::from_validation(err, event.start_time, event.end_time)
        })?;
        let span = event.span();
        if state.index.is_busy(&span, Some(event.id)) {
            return Err(StoreError::DateBusy);
        }

        state.index.insert(event.id, span);
        state.events.insert(event.id, event);
        Ok(())
    }

    async fn del(&self, id: EventId) -> Result<()> {
        let mut state = self.state.write().await;
        if state.events.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        state.index.remove(id);
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let state = self.state.read().await;
        Ok(state.events.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use eventcal_core::interval::BTreeIndex;
    use proptest::prelude::*;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2006, 1, 2, hour, minute, 0).unwrap()
    }

    fn draft(from: (u32, u32), to: (u32, u32), title: &str) -> NewEvent {
        NewEvent::new(at(from.0, from.1), at(to.0, to.1), title)
            .with_description(format!("{title} description"))
    }

    // ==================== CRUD Tests ====================

    #[tokio::test]
    async fn test_add_and_get() {
        let store = InMemoryEventStore::new();
        let event = draft((15, 0), (16, 0), "Event 1");

        let id = store.add(event.clone()).await.unwrap();

        let retrieved = store.get(id).await.unwrap();
        assert_eq!(retrieved, event.with_id(id));
    }

    #[tokio::test]
    async fn test_ids_start_at_zero_and_increase() {
        let store = InMemoryEventStore::new();

        let first = store.add(draft((15, 0), (16, 0), "a")).await.unwrap();
        let second = store.add(draft((16, 0), (17, 0), "b")).await.unwrap();

        assert_eq!(first, EventId(0));
        assert_eq!(second, EventId(1));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = InMemoryEventStore::new();
        let result = store.get(EventId(7)).await;
        assert_eq!(result, Err(StoreError::NotFound(EventId(7))));
    }

    #[tokio::test]
    async fn test_add_overlapping_is_busy() {
        let store = InMemoryEventStore::new();
        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        let result = store.add(draft((15, 30), (16, 30), "b")).await;

        assert_eq!(result, Err(StoreError::DateBusy));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_add_invalid_interval_leaves_store_unchanged() {
        let store = InMemoryEventStore::new();
        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        let result = store.add(draft((18, 0), (17, 0), "inverted")).await;
        assert!(matches!(result, Err(StoreError::InvalidInterval { .. })));

        let result = store.add(draft((18, 0), (18, 0), "empty")).await;
        assert!(matches!(result, Err(StoreError::InvalidInterval { .. })));

        assert_eq!(store.len().await.unwrap(), 1);
        // A rejected add must not burn an id either.
        let id = store.add(draft((18, 0), (19, 0), "b")).await.unwrap();
        assert_eq!(id, EventId(1));
    }

    #[tokio::test]
    async fn test_add_empty_title_rejected() {
        let store = InMemoryEventStore::new();
        let result = store.add(draft((15, 0), (16, 0), "")).await;
        assert_eq!(result, Err(StoreError::EmptyTitle));
    }

    #[tokio::test]
    async fn test_edit_replaces_wholesale() {
        let store = InMemoryEventStore::new();
        let id = store.add(draft((15, 0), (16, 0), "Old")).await.unwrap();

        let replacement = NewEvent::new(at(9, 0), at(9, 30), "New").with_id(id);
        store.edit(replacement.clone()).await.unwrap();

        let retrieved = store.get(id).await.unwrap();
        assert_eq!(retrieved, replacement);
        assert_eq!(retrieved.description, "");
    }

    #[tokio::test]
    async fn test_edit_excludes_itself() {
        let store = InMemoryEventStore::new();
        let id = store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        // Overlaps only its own previous slot.
        let moved = draft((15, 30), (16, 30), "a").with_id(id);
        store.edit(moved).await.unwrap();

        // The old slot is free now.
        store.add(draft((15, 0), (15, 30), "b")).await.unwrap();
    }

    #[tokio::test]
    async fn test_edit_conflicting_with_other_is_busy() {
        let store = InMemoryEventStore::new();
        let first = store.add(draft((15, 0), (16, 0), "a")).await.unwrap();
        store.add(draft((16, 0), (17, 0), "b")).await.unwrap();

        let moved = draft((15, 30), (16, 30), "a").with_id(first);
        let result = store.edit(moved).await;

        assert_eq!(result, Err(StoreError::DateBusy));
        assert_eq!(store.get(first).await.unwrap().start_time, at(15, 0));
    }

    #[tokio::test]
    async fn test_edit_nonexistent() {
        let store = InMemoryEventStore::new();
        let event = draft((15, 0), (16, 0), "ghost").with_id(EventId(3));

        let result = store.edit(event).await;

        assert_eq!(result, Err(StoreError::NotFound(EventId(3))));
        assert_eq!(store.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_edit_invalid_interval_keeps_old_value() {
        let store = InMemoryEventStore::new();
        let id = store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        let inverted = draft((16, 0), (15, 0), "a").with_id(id);
        let result = store.edit(inverted).await;

        assert!(matches!(result, Err(StoreError::InvalidInterval { .. })));
        assert_eq!(store.get(id).await.unwrap().end_time, at(16, 0));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryEventStore::new();
        let id = store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        store.del(id).await.unwrap();

        assert_eq!(store.get(id).await, Err(StoreError::NotFound(id)));
        // The freed slot can be booked again.
        store.add(draft((15, 0), (16, 0), "b")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_nonexistent() {
        let store = InMemoryEventStore::new();
        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        let result = store.del(EventId(5)).await;

        assert_eq!(result, Err(StoreError::NotFound(EventId(5))));
        assert_eq!(store.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_delete_keeps_other_identities() {
        let store = InMemoryEventStore::new();
        let a = store.add(draft((15, 0), (16, 0), "a")).await.unwrap();
        let b = store.add(draft((16, 0), (17, 0), "b")).await.unwrap();
        let c = store.add(draft((18, 0), (19, 0), "c")).await.unwrap();
        let before_b = store.get(b).await.unwrap();
        let before_c = store.get(c).await.unwrap();

        store.del(a).await.unwrap();

        assert_eq!(store.get(b).await.unwrap(), before_b);
        assert_eq!(store.get(c).await.unwrap(), before_c);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = InMemoryEventStore::new();
        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();
        let last = store.add(draft((16, 0), (17, 0), "b")).await.unwrap();

        store.del(last).await.unwrap();
        let next = store.add(draft((18, 0), (19, 0), "c")).await.unwrap();

        assert_eq!(next, EventId(2));
    }

    #[tokio::test]
    async fn test_get_all_returns_snapshot() {
        let store = InMemoryEventStore::new();
        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        let mut snapshot = store.get_all().await.unwrap();
        snapshot[0].title = "mutated".to_string();
        snapshot.clear();

        let stored = store.get_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "a");
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let store = InMemoryEventStore::new();
        store.init().await.unwrap();
        assert!(store.get_all().await.unwrap().is_empty());

        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();
        store.add(draft((16, 0), (17, 0), "b")).await.unwrap();
        store.init().await.unwrap();
        store.init().await.unwrap();

        assert!(store.get_all().await.unwrap().is_empty());
        assert_eq!(
            store.add(draft((15, 0), (16, 0), "c")).await.unwrap(),
            EventId(0)
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = InMemoryEventStore::new();
        let other = store.clone();

        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();

        assert_eq!(other.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_btree_backed_store() {
        let store = InMemoryEventStore::<BTreeIndex>::with_index();
        store.add(draft((15, 0), (16, 0), "a")).await.unwrap();
        let b = store.add(draft((16, 0), (17, 0), "b")).await.unwrap();
        store.add(draft((18, 0), (19, 0), "c")).await.unwrap();

        assert_eq!(
            store.add(draft((17, 10), (18, 10), "d")).await,
            Err(StoreError::DateBusy)
        );

        store.edit(draft((17, 0), (18, 0), "b").with_id(b)).await.unwrap();
        store.add(draft((16, 0), (17, 0), "e")).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_admit_one_winner() {
        let store = InMemoryEventStore::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add(draft((15, 0), (16, 0), &format!("racer {i}")))
                        .await
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len().await.unwrap(), 1);
    }

    // ==================== Invariant Tests ====================

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64, i64),
        Edit(u64, i64, i64),
        Del(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0i64..600, -5i64..90).prop_map(|(s, l)| Op::Add(s, l)),
            (0u64..12, 0i64..600, 1i64..90).prop_map(|(id, s, l)| Op::Edit(id, s, l)),
            (0u64..12).prop_map(Op::Del),
        ]
    }

    fn minutes(m: i64) -> DateTime<Utc> {
        at(0, 0) + chrono::Duration::minutes(m)
    }

    /// Applies `ops` to `store`, checking the store invariants along the way.
    ///
    /// Returns the outcome of every operation so backends can be compared.
    async fn apply_and_check<I>(
        store: InMemoryEventStore<I>,
        ops: &[Op],
    ) -> Vec<Result<Option<EventId>>>
    where
        I: IntervalIndex + 'static,
    {
        let mut outcomes = Vec::with_capacity(ops.len());
        let mut issued = Vec::new();

        for op in ops {
            let outcome = match *op {
                Op::Add(s, l) => {
                    let event = NewEvent::new(minutes(s), minutes(s + l), "e");
                    let result = store.add(event).await;
                    if let Ok(id) = &result {
                        issued.push(*id);
                    }
                    result.map(Some)
                }
                Op::Edit(id, s, l) => {
                    let event = NewEvent::new(minutes(s), minutes(s + l), "edited")
                        .with_id(EventId(id));
                    store.edit(event).await.map(|()| None)
                }
                Op::Del(id) => {
                    let before: Vec<Event> = store.get_all().await.unwrap();
                    let result = store.del(EventId(id)).await;
                    if result.is_ok() {
                        let after = store.get_all().await.unwrap();
                        for survivor in before.iter().filter(|e| e.id != EventId(id)) {
                            assert!(after.contains(survivor));
                        }
                    }
                    result.map(|()| None)
                }
            };
            outcomes.push(outcome);
        }

        let mut sorted = issued.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), issued.len());

        let events = store.get_all().await.unwrap();
        for (i, a) in events.iter().enumerate() {
            assert!(a.start_time < a.end_time);
            for b in events.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
                assert!(!a.span().overlaps(&b.span()));
            }
        }

        outcomes
    }

    proptest! {
        #[test]
        fn invariants_hold_after_any_sequence(ops in prop::collection::vec(op_strategy(), 1..40)) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                apply_and_check(InMemoryEventStore::new(), &ops).await;
            });
        }

        #[test]
        fn btree_store_invariants_hold_after_any_sequence(
            ops in prop::collection::vec(op_strategy(), 1..40)
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            runtime.block_on(async {
                apply_and_check(InMemoryEventStore::<BTreeIndex>::with_index(), &ops).await;
            });
        }

        #[test]
        fn backends_agree_on_any_sequence(ops in prop::collection::vec(op_strategy(), 1..40)) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let (linear, btree) = runtime.block_on(async {
                let linear = apply_and_check(InMemoryEventStore::new(), &ops).await;
                let btree =
                    apply_and_check(InMemoryEventStore::<BTreeIndex>::with_index(), &ops).await;
                (linear, btree)
            });
            prop_assert_eq!(linear, btree);
        }
    }
}
