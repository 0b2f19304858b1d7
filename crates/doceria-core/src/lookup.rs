//! Item lookup for the presentation layer.
//!
//! Commands that act on one batch accept a full id, a unique id prefix, or
//! the product name. Misses come back with a fuzzy-matched suggestion so a
//! typo doesn't dead-end the user.

use strsim::levenshtein;
use thiserror::Error;

use crate::StockItem;

/// Minimum prefix length accepted for id lookups.
const MIN_PREFIX_LEN: usize = 4;

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Errors from resolving a user-supplied item reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No item matched; may carry a "did you mean" name.
    #[error("sweet '{query}' not found{}", suggestion_suffix(.suggestion))]
    NotFound {
        query: String,
        suggestion: Option<String>,
    },

    /// The reference matched more than one item.
    #[error("'{query}' is ambiguous, matches: {}", .candidates.join(", "))]
    Ambiguous {
        query: String,
        candidates: Vec<String>,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(". Did you mean '{name}'?"),
        None => String::new(),
    }
}

/// Resolves a user-supplied reference against the loaded stock.
///
/// Resolution order: exact id, then unique id prefix (at least
/// [`MIN_PREFIX_LEN`] characters), then case-insensitive name match. A
/// prefix or name matching several items is an error listing the candidates.
pub fn find_item<'a>(items: &'a [StockItem], query: &str) -> Result<&'a StockItem, LookupError> {
    if let Some(item) = items.iter().find(|i| i.id == query) {
        return Ok(item);
    }

    if query.len() >= MIN_PREFIX_LEN {
        let matches: Vec<&StockItem> = items.iter().filter(|i| i.id.starts_with(query)).collect();
        match matches.as_slice() {
            [item] => return Ok(*item),
            [] => {}
            many => {
                return Err(LookupError::Ambiguous {
                    query: query.to_string(),
                    candidates: many
                        .iter()
                        .map(|i| format!("{} ({})", i.name, &i.id[..MIN_PREFIX_LEN.min(i.id.len())]))
                        .collect(),
                })
            }
        }
    }

    let query_folded = query.to_lowercase();
    let by_name: Vec<&StockItem> = items
        .iter()
        .filter(|i| i.name.to_lowercase() == query_folded)
        .collect();
    match by_name.as_slice() {
        [item] => return Ok(*item),
        [] => {}
        many => {
            return Err(LookupError::Ambiguous {
                query: query.to_string(),
                candidates: many
                    .iter()
                    .map(|i| format!("{} ({})", i.name, &i.id[..MIN_PREFIX_LEN.min(i.id.len())]))
                    .collect(),
            })
        }
    }

    Err(LookupError::NotFound {
        query: query.to_string(),
        suggestion: find_similar_name(query, items.iter().map(|i| i.name.as_str())),
    })
}

/// Finds the closest name within the suggestion threshold, if any.
fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_folded = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_folded, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}
