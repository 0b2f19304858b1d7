//! Common helper functions for output formatting.

use doceria_core_rs::Status;
use owo_colors::OwoColorize;

/// Truncates an ID to 6 characters for display.
pub fn truncate_id(id: &str) -> String {
    if id.len() > 6 {
        id[..6].to_string()
    } else {
        id.to_string()
    }
}

/// Truncates a string to a maximum length.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    } else {
        s.to_string()
    }
}

/// Formats a price in Brazilian currency style ("R$ 1.234,56").
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("R$ {grouped},{frac:02}")
}

/// Formats a status for display, colored by severity.
pub fn format_status(status: Status, use_colors: bool) -> String {
    let label = status.to_string();
    if use_colors {
        match status {
            Status::Expired => label.red().to_string(),
            Status::ExpiringSoon => label.yellow().to_string(),
            Status::Available => label.green().to_string(),
        }
    } else {
        label
    }
}

/// Formats a quantity, highlighting low stock.
pub fn format_quantity(quantity: u32, low_stock: bool, use_colors: bool) -> String {
    let label = quantity.to_string();
    if use_colors && low_stock {
        label.red().to_string()
    } else {
        label
    }
}
