//! Output formatting utilities for the doce CLI.
//!
//! This module provides functions for formatting data as tables or JSON:
//!
//! - [`items`] - Stock item output formatting (list, show, add)
//! - [`helpers`] - Common formatting utilities (truncation, prices, status)

pub mod helpers;
mod items;

pub use items::{
    format_item_details_json, format_item_details_table, format_items_json, format_items_table,
    format_registered,
};
