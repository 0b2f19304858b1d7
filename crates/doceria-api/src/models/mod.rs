//! Data models for rows of the remote stock store.

mod sweet;

pub use sweet::{NewSweet, SweetRecord, DEFAULT_STATUS_LABEL};
