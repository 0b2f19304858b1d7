//! Convenient re-exports of the most commonly used types.

pub use crate::client::StoreClient;
pub use crate::error::{ApiError, Error, Result};
pub use crate::models::{NewSweet, SweetRecord, DEFAULT_STATUS_LABEL};
