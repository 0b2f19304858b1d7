//! Stock item output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

use doceria_core_rs::{Status, StockItem};

use crate::commands::add::AddResult;

use super::helpers::{format_price, format_quantity, format_status, truncate_id, truncate_str};

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub sweets: Vec<ItemOutput<'a>>,
    pub total: usize,
}

/// JSON output structure for a single stock item.
#[derive(Serialize)]
pub struct ItemOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub flavor: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    pub quantity: u32,
    pub low_stock: bool,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_date: Option<String>,
    pub expiry_date: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// JSON output structure for a registered sweet.
#[derive(Serialize)]
pub struct RegisteredOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub quantity: u32,
    pub price: f64,
    pub expiry_date: String,
}

impl<'a> ItemOutput<'a> {
    fn from_item(item: &'a StockItem) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            flavor: &item.flavor,
            category: item.category.as_deref(),
            quantity: item.quantity,
            low_stock: item.is_low_stock(),
            price: item.price,
            manufacture_date: item.manufacture_date.map(|d| d.to_string()),
            expiry_date: item.expiry_date.to_string(),
            status: item.status,
            notes: item.notes.as_deref(),
            created_at: item.created_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Formats stock items as JSON.
pub fn format_items_json(items: &[&StockItem]) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        total: items.len(),
        sweets: items.iter().map(|item| ItemOutput::from_item(item)).collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats stock items as a table.
pub fn format_items_table(items: &[&StockItem], use_colors: bool) -> String {
    if items.is_empty() {
        return "No sweets match the given filters.\n".to_string();
    }

    let mut output = String::new();

    // Header
    let header = format!(
        "{:<8} {:<22} {:<14} {:<14} {:>4} {:>12} {:<12} {}",
        "ID", "Name", "Flavor", "Category", "Qty", "Price", "Expiry", "Status"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    // Items
    for item in items {
        let id_prefix = truncate_id(&item.id);
        let name = truncate_str(&item.name, 22);
        let flavor = truncate_str(&item.flavor, 14);
        let category = item
            .category
            .as_deref()
            .map(|c| truncate_str(c, 14))
            .unwrap_or_default();
        let quantity = format_quantity(item.quantity, item.is_low_stock(), use_colors);
        let price = format_price(item.price);
        let expiry = item.expiry_date.to_string();
        let status = format_status(item.status, use_colors);

        let line = format!(
            "{:<8} {:<22} {:<14} {:<14} {:>4} {:>12} {:<12} {}",
            id_prefix, name, flavor, category, quantity, price, expiry, status
        );
        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Formats one item's full details as JSON (show command).
pub fn format_item_details_json(item: &StockItem) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ItemOutput::from_item(item))
}

/// Formats one item's full details as labelled lines (show command).
pub fn format_item_details_table(item: &StockItem, use_colors: bool) -> String {
    let mut output = String::new();

    let mut field = |label: &str, value: String| {
        if use_colors {
            output.push_str(&format!("{:<14} {}\n", label.dimmed().to_string(), value));
        } else {
            output.push_str(&format!("{:<14} {}\n", label, value));
        }
    };

    field("Id:", item.id.clone());
    field("Name:", item.name.clone());
    field("Flavor:", item.flavor.clone());
    if let Some(ref category) = item.category {
        field("Category:", category.clone());
    }
    field(
        "Quantity:",
        format_quantity(item.quantity, item.is_low_stock(), use_colors),
    );
    field("Price:", format_price(item.price));
    if let Some(made) = item.manufacture_date {
        field("Made:", made.to_string());
    }
    field("Expiry:", item.expiry_date.to_string());
    field("Status:", format_status(item.status, use_colors));
    if let Some(ref notes) = item.notes {
        field("Notes:", notes.clone());
    }
    if let Some(created_at) = item.created_at {
        field("Registered:", created_at.format("%Y-%m-%d %H:%M").to_string());
    }

    output
}

/// Formats a registered sweet as JSON.
pub fn format_registered(result: &AddResult) -> Result<String, serde_json::Error> {
    let output = RegisteredOutput {
        id: &result.id,
        name: &result.name,
        quantity: result.quantity,
        price: result.price,
        expiry_date: result.expiry_date.to_string(),
    };

    serde_json::to_string_pretty(&output)
}
