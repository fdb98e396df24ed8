//! Event CRUD handlers.
//!
//! Thin adapters between HTTP and [`CalendarService`](crate::service::CalendarService):
//! decode the payload, call the service, encode the result.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use eventcal_core::calendar::{CalendarError, Event, EventId};

use crate::{
    handlers::AppError,
    models::{CreateEventRequest, UpdateEventRequest},
    state::AppState,
};

/// List all events (GET /api/events).
///
/// Responds 204 with no body when the calendar is empty.
pub async fn list_events(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.calendar.get_all_events().await {
        Ok(events) => Ok(Json(events).into_response()),
        Err(CalendarError::NoEventsInStorage) => Ok(StatusCode::NO_CONTENT.into_response()),
        Err(err) => Err(err.into()),
    }
}

/// Drop every event and restart id assignment (DELETE /api/events).
pub async fn reset_events(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.calendar.reset().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a new event (POST /api/events).
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let draft = payload.into_new_event()?;
    // Built from the accepted draft; a re-read could observe a later write.
    let id = state.calendar.add_event(draft.clone()).await?;

    Ok((StatusCode::CREATED, Json(draft.with_id(id))))
}

/// Get an event by id (GET /api/events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Event>, AppError> {
    let event = state.calendar.get_event(EventId(id)).await?;
    Ok(Json(event))
}

/// Replace an event (PUT /api/events/{id}).
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<Json<Event>, AppError> {
    let event = payload.into_event(EventId(id))?;
    state.calendar.edit_event(event.clone()).await?;
    Ok(Json(event))
}

/// Delete an event (DELETE /api/events/{id}).
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.calendar.del_event(EventId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
