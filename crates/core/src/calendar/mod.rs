mod error;
mod operations;
mod types;

pub use error::{CalendarError, EventError};
pub use operations::{sort_events_by_start, validate_event, validate_new_event, MAX_TITLE_LEN};
pub use types::{Event, EventId, NewEvent};
