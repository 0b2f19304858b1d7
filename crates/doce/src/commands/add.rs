//! Add command implementation.
//!
//! Builds a registration draft from the CLI flags, runs it through the core
//! validator, and inserts the validated payload. A draft that fails
//! validation is rejected with the offending field names and nothing is
//! written; a failed insert likewise registers nothing.

use chrono::NaiveDate;
use doceria_api_rs::client::StoreClient;
use doceria_core_rs::{validate, SweetDraft};

use super::{CommandContext, Result, StoreSettings};
use crate::output::format_registered;
use crate::output::helpers::truncate_id;

/// Options for the add command.
#[derive(Debug, Default)]
pub struct AddOptions {
    /// Product name.
    pub name: String,
    /// Flavor description.
    pub flavor: Option<String>,
    /// Product category.
    pub category: Option<String>,
    /// Units in stock, as raw text.
    pub quantity: Option<String>,
    /// Unit price, as raw text.
    pub price: Option<String>,
    /// Manufacture date, as raw text.
    pub made: Option<String>,
    /// Expiry date, as raw text.
    pub expiry: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Result of a successful registration.
#[derive(Debug)]
pub struct AddResult {
    /// The store-assigned id of the new row.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Units registered.
    pub quantity: u32,
    /// Unit price.
    pub price: f64,
    /// Expiry date.
    pub expiry_date: NaiveDate,
}

/// Executes the add command.
///
/// # Errors
///
/// Returns a registration error naming the missing/invalid fields, or a
/// store error if the insert is rejected.
pub async fn execute(ctx: &CommandContext, opts: &AddOptions, store: &StoreSettings) -> Result<()> {
    let draft = SweetDraft {
        name: opts.name.clone(),
        flavor: opts.flavor.clone().unwrap_or_default(),
        category: opts.category.clone().unwrap_or_default(),
        quantity: opts.quantity.clone().unwrap_or_default(),
        price: opts.price.clone().unwrap_or_default(),
        manufacture_date: opts.made.clone().unwrap_or_default(),
        expiry_date: opts.expiry.clone().unwrap_or_default(),
        notes: opts.notes.clone().unwrap_or_default(),
    };

    let new = validate(&draft)?;

    let client = StoreClient::new(&store.url, &store.api_key);
    let row = client.insert_sweet(&new).await?;

    let result = AddResult {
        id: row.id,
        name: row.name,
        quantity: row.quantity,
        price: row.price,
        expiry_date: row.expiry_date,
    };

    if ctx.json_output {
        println!("{}", format_registered(&result)?);
    } else if !ctx.quiet {
        println!("Registered: {} ({})", result.name, truncate_id(&result.id));
        if ctx.verbose {
            println!("  Quantity: {}", result.quantity);
            println!("  Expiry: {}", result.expiry_date);
        }
    }

    Ok(())
}
