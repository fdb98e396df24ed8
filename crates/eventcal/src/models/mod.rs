mod event;

pub use event::{CreateEventRequest, RequestError, UpdateEventRequest};
