//! Pure functions for mapping calendar errors to HTTP status codes.

use crate::calendar::CalendarError;

/// Maps a [`CalendarError`] to an HTTP status code.
///
/// - `InvalidInterval`, `EmptyTitle`, `TitleTooLong` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `DateBusy` -> 409 (Conflict)
/// - `NoEventsInStorage` -> 204 (No Content)
/// - `Storage` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use eventcal_core::calendar::{CalendarError, EventId};
/// use eventcal_core::storage::calendar_error_to_status_code;
///
/// assert_eq!(calendar_error_to_status_code(&CalendarError::NotFound(EventId(1))), 404);
/// assert_eq!(calendar_error_to_status_code(&CalendarError::DateBusy), 409);
/// ```
pub fn calendar_error_to_status_code(error: &CalendarError) -> u16 {
    match error {
        CalendarError::InvalidInterval => 400,
        CalendarError::EmptyTitle => 400,
        CalendarError::TitleTooLong => 400,
        CalendarError::NotFound(_) => 404,
        CalendarError::DateBusy => 409,
        CalendarError::NoEventsInStorage => 204,
        CalendarError::Storage(_) => 500,
    }
}
