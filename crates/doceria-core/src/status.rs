//! Expiry-based status classification.
//!
//! A batch's lifecycle status is never read from storage; it is a pure
//! function of the expiry date and the moment the caller looks at the stock.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Window before expiry during which a batch counts as expiring soon.
const EXPIRY_WARNING_DAYS: i64 = 7;

/// Derived lifecycle status of a stock batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// More than seven days of shelf life left.
    Available,
    /// Expires within the next seven days (inclusive).
    ExpiringSoon,
    /// The expiry date has passed.
    Expired,
}

impl Status {
    /// The label the store schema uses for this status.
    pub fn store_label(&self) -> &'static str {
        match self {
            Status::Available => "Disponível",
            Status::ExpiringSoon => "Próximo do vencimento",
            Status::Expired => "Vencido",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::Available => "Available",
            Status::ExpiringSoon => "Expiring soon",
            Status::Expired => "Expired",
        };
        write!(f, "{label}")
    }
}

/// Classifies a batch by its expiry date at the given moment.
///
/// The expiry date is taken as midnight at the start of that calendar day,
/// while `now` keeps full time-of-day precision: a batch expiring "today" is
/// already expired once the clock is past midnight, and a batch exactly
/// seven days out is expiring soon, not available.
///
/// Total over any pair of valid inputs; precedence is expired, then
/// expiring soon, then available.
pub fn classify(expiry: NaiveDate, now: NaiveDateTime) -> Status {
    let expiry_midnight = expiry.and_time(NaiveTime::MIN);

    if expiry_midnight < now {
        Status::Expired
    } else if expiry_midnight - now <= Duration::days(EXPIRY_WARNING_DAYS) {
        Status::ExpiringSoon
    } else {
        Status::Available
    }
}
