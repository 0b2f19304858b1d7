//! Stock domain core for the doceria inventory view.
//!
//! This crate holds the pure business logic behind the stock listing:
//! expiry-based status classification, client-side filtering, and
//! registration validation. All state lives in the caller-supplied item
//! list; every function here takes its full input as arguments and returns
//! a fresh result, so nothing in this crate blocks, retries, or touches
//! the remote store.
//!
//! The flow mirrors how the view uses it: the caller loads raw rows from
//! the store, [`annotate`] derives each row's [`Status`] for "now", and
//! [`filter::visible`] narrows the annotated list to what the current
//! [`filter::FilterCriteria`] accept.
//!
//! [`Status`]: status::Status

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use doceria_api_rs::models::SweetRecord;

pub mod filter;
pub mod lookup;
pub mod register;
pub mod status;

pub use filter::{visible, FilterCriteria};
pub use lookup::{find_item, LookupError};
pub use register::{validate, RegistrationError, SweetDraft};
pub use status::{classify, Status};

/// Quantity below which a batch is flagged as low stock in listings.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A stock batch annotated with its derived status.
///
/// Built from a raw store row at load time. The row's persisted status
/// column is discarded here; the status below is always recomputed from the
/// expiry date and the caller's "now".
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    /// Opaque store-assigned identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Flavor description.
    pub flavor: String,
    /// Product category, if any.
    pub category: Option<String>,
    /// Units in stock.
    pub quantity: u32,
    /// Unit price.
    pub price: f64,
    /// Date the batch was made.
    pub manufacture_date: Option<NaiveDate>,
    /// Expiry date of the batch.
    pub expiry_date: NaiveDate,
    /// Derived lifecycle status.
    pub status: Status,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Store creation timestamp, for recency ordering.
    pub created_at: Option<DateTime<Utc>>,
}

impl StockItem {
    /// Annotates one raw row with the status derived at `now`.
    pub fn from_record(record: SweetRecord, now: NaiveDateTime) -> Self {
        let status = status::classify(record.expiry_date, now);
        Self {
            id: record.id,
            name: record.name,
            flavor: record.flavor,
            category: record.category,
            quantity: record.quantity,
            price: record.price,
            manufacture_date: record.manufacture_date,
            expiry_date: record.expiry_date,
            status,
            notes: record.notes,
            created_at: record.created_at,
        }
    }

    /// Returns true if the batch quantity is below the low-stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Annotates a freshly loaded row set, preserving the store's order.
pub fn annotate(records: Vec<SweetRecord>, now: NaiveDateTime) -> Vec<StockItem> {
    records
        .into_iter()
        .map(|record| StockItem::from_record(record, now))
        .collect()
}
