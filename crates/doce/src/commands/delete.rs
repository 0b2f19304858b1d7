//! Delete command implementation.
//!
//! Resolves each reference against a fresh load of the stock, asks for
//! confirmation (deletion is irreversible), and deletes row by row. A
//! failed delete changes nothing: the row stays in the store and shows up
//! again on the next listing.

use dialoguer::Confirm;
use doceria_api_rs::client::StoreClient;
use doceria_core_rs::{annotate, find_item};
use serde::Serialize;

use super::{view_now, CommandContext, CommandError, Result, StoreSettings};
use crate::output::helpers::truncate_id;

/// Options for the delete command.
#[derive(Debug)]
pub struct DeleteOptions {
    /// Sweet ids, id prefixes, or names.
    pub items: Vec<String>,
    /// Skip confirmation prompt.
    pub force: bool,
}

/// Result of deleting a single sweet.
#[derive(Debug)]
pub struct DeleteResult {
    /// The sweet id.
    pub id: String,
    /// The sweet name.
    pub name: String,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Error message if failed.
    pub error: Option<String>,
}

/// Executes the delete command.
///
/// # Errors
///
/// Returns an error if loading the stock fails, a reference cannot be
/// resolved, or every requested delete fails.
pub async fn execute(ctx: &CommandContext, opts: &DeleteOptions, store: &StoreSettings) -> Result<()> {
    let client = StoreClient::new(&store.url, &store.api_key);
    let records = client.list_sweets().await?;
    let items = annotate(records, view_now());

    // Resolve everything up front so one typo aborts before anything is
    // deleted.
    let mut targets: Vec<(String, String)> = Vec::new();
    for reference in &opts.items {
        let item = find_item(&items, reference)?;
        targets.push((item.id.clone(), item.name.clone()));
    }

    if !opts.force && !confirm_delete(&targets)? {
        if !ctx.quiet {
            eprintln!("Aborted.");
        }
        return Ok(());
    }

    let mut results: Vec<DeleteResult> = Vec::new();
    for (id, name) in &targets {
        match client.delete_sweet(id).await {
            Ok(()) => results.push(DeleteResult {
                id: id.clone(),
                name: name.clone(),
                success: true,
                error: None,
            }),
            Err(e) => results.push(DeleteResult {
                id: id.clone(),
                name: name.clone(),
                success: false,
                error: Some(e.to_string()),
            }),
        }
    }

    let success_count = results.iter().filter(|r| r.success).count();
    let error_count = results.len() - success_count;

    if ctx.json_output {
        println!("{}", format_delete_results_json(&results)?);
    } else if !ctx.quiet {
        for result in &results {
            if result.success {
                println!("Deleted: {} ({})", result.name, truncate_id(&result.id));
            } else if let Some(ref err) = result.error {
                eprintln!(
                    "Failed to delete {} ({}): {}",
                    result.name,
                    truncate_id(&result.id),
                    err
                );
            }
        }

        if ctx.verbose && results.len() > 1 {
            println!("\n{} deleted, {} failed", success_count, error_count);
        }
    }

    if error_count > 0 && success_count == 0 {
        return Err(CommandError::Config(format!(
            "Failed to delete {} sweet(s)",
            error_count
        )));
    }

    Ok(())
}

/// Prompts for confirmation, listing what is about to be removed.
fn confirm_delete(targets: &[(String, String)]) -> Result<bool> {
    for (id, name) in targets {
        eprintln!("  {} ({})", name, truncate_id(id));
    }

    let prompt = if targets.len() == 1 {
        "Delete this sweet? This cannot be undone.".to_string()
    } else {
        format!(
            "Delete these {} sweets? This cannot be undone.",
            targets.len()
        )
    };

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CommandError::Io(std::io::Error::other(e)))
}

/// Formats delete results as JSON.
fn format_delete_results_json(results: &[DeleteResult]) -> Result<String> {
    #[derive(Serialize)]
    struct DeleteOutput<'a> {
        deleted: Vec<DeletedSweetOutput<'a>>,
        failed: Vec<FailedSweetOutput<'a>>,
        total_deleted: usize,
        total_failed: usize,
    }

    #[derive(Serialize)]
    struct DeletedSweetOutput<'a> {
        id: &'a str,
        name: &'a str,
    }

    #[derive(Serialize)]
    struct FailedSweetOutput<'a> {
        id: &'a str,
        name: &'a str,
        error: Option<&'a str>,
    }

    let deleted: Vec<DeletedSweetOutput> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| DeletedSweetOutput {
            id: &r.id,
            name: &r.name,
        })
        .collect();

    let failed: Vec<FailedSweetOutput> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| FailedSweetOutput {
            id: &r.id,
            name: &r.name,
            error: r.error.as_deref(),
        })
        .collect();

    let output = DeleteOutput {
        total_deleted: deleted.len(),
        total_failed: failed.len(),
        deleted,
        failed,
    };

    serde_json::to_string_pretty(&output).map_err(CommandError::from)
}
