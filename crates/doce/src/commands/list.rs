//! List command implementation.
//!
//! Loads the full stock from the remote store, derives each batch's status
//! for the current moment, and applies the user's filter criteria
//! client-side before rendering.

use doceria_api_rs::client::StoreClient;
use doceria_core_rs::{annotate, visible, FilterCriteria};

use super::{view_now, CommandContext, Result, StoreSettings};
use crate::output::{format_items_json, format_items_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Flavor substring filter.
    pub flavor: Option<String>,
    /// Category substring filter.
    pub category: Option<String>,
    /// Inclusive price cap.
    pub max_price: Option<f64>,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if the store cannot be reached or rejects the request.
pub async fn execute(ctx: &CommandContext, opts: &ListOptions, store: &StoreSettings) -> Result<()> {
    let client = StoreClient::new(&store.url, &store.api_key);
    let records = client.list_sweets().await?;

    let items = annotate(records, view_now());
    let criteria = FilterCriteria {
        flavor: opts.flavor.clone(),
        category: opts.category.clone(),
        max_price: opts.max_price,
    };
    let shown = visible(&items, &criteria);

    if ctx.json_output {
        println!("{}", format_items_json(&shown)?);
    } else if !ctx.quiet {
        print!("{}", format_items_table(&shown, ctx.use_colors));

        if ctx.verbose && !criteria.is_empty() {
            println!("\n{} of {} sweets shown", shown.len(), items.len());
        }
    }

    Ok(())
}
