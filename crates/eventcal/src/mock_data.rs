use chrono::{DateTime, Duration, DurationRound, Utc};

use eventcal_core::calendar::NewEvent;

use crate::service::CalendarService;

/// Generates three back-to-back one-hour demo events starting at `start`.
pub fn generate_demo_events(start: DateTime<Utc>) -> Vec<NewEvent> {
    (0..3)
        .map(|i| {
            let from = start + Duration::hours(i);
            NewEvent::new(from, from + Duration::hours(1), format!("title{}", i + 1))
                .with_description(format!("description{}", i + 1))
        })
        .collect()
}

/// Seeds the calendar with demo events beginning at the next full hour.
///
/// Events that collide with something already stored are skipped.
pub async fn seed_demo_events(calendar: &CalendarService) -> usize {
    let now = Utc::now();
    let start = now
        .duration_trunc(Duration::hours(1))
        .unwrap_or(now)
        + Duration::hours(1);

    let mut added = 0;
    for event in generate_demo_events(start) {
        if calendar.add_event(event).await.is_ok() {
            added += 1;
        }
    }
    tracing::info!(count = added, "Seeded demo events");
    added
}
