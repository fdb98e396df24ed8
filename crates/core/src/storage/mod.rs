mod error;
mod http_mapping;
mod traits;

pub use error::{Result, StoreError};
pub use http_mapping::calendar_error_to_status_code;
pub use traits::EventStore;
