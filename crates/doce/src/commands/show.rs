//! Show command implementation.
//!
//! Resolves one sweet by id, id prefix, or name against a fresh load of the
//! stock and prints its full details, including the derived status.

use doceria_api_rs::client::StoreClient;
use doceria_core_rs::{annotate, find_item};

use super::{view_now, CommandContext, Result, StoreSettings};
use crate::output::{format_item_details_json, format_item_details_table};

/// Options for the show command.
#[derive(Debug)]
pub struct ShowOptions {
    /// Sweet id, id prefix, or name.
    pub item: String,
}

/// Executes the show command.
///
/// # Errors
///
/// Returns a lookup error if the reference matches no sweet (with a fuzzy
/// suggestion when one is close) or more than one.
pub async fn execute(ctx: &CommandContext, opts: &ShowOptions, store: &StoreSettings) -> Result<()> {
    let client = StoreClient::new(&store.url, &store.api_key);
    let records = client.list_sweets().await?;
    let items = annotate(records, view_now());

    let item = find_item(&items, &opts.item)?;

    if ctx.json_output {
        println!("{}", format_item_details_json(item)?);
    } else if !ctx.quiet {
        print!("{}", format_item_details_table(item, ctx.use_colors));
    }

    Ok(())
}
