//! Client-side filtering of the stock listing.
//!
//! Criteria are transient and caller-held; they exist only for the duration
//! of a view session and are re-evaluated against every item whenever the
//! user edits them. Matching is a logical AND of independent predicates,
//! each vacuously true when its criterion is unset.

use crate::StockItem;

/// User-supplied filter constraints for the stock listing.
///
/// Malformed numeric input must be rejected before it gets here; `max_price`
/// is already a number, never a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match on the flavor.
    pub flavor: Option<String>,
    /// Case-insensitive substring match on the category.
    pub category: Option<String>,
    /// Inclusive upper bound on the unit price.
    pub max_price: Option<f64>,
}

impl FilterCriteria {
    /// Returns true if no criterion is set; such criteria accept every item.
    pub fn is_empty(&self) -> bool {
        !self.has_flavor() && !self.has_category() && self.max_price.is_none()
    }

    /// Decides whether an item belongs in the visible subset.
    pub fn matches(&self, item: &StockItem) -> bool {
        self.price_matches(item) && self.flavor_matches(item) && self.category_matches(item)
    }

    fn price_matches(&self, item: &StockItem) -> bool {
        match self.max_price {
            Some(max) => item.price <= max,
            None => true,
        }
    }

    fn flavor_matches(&self, item: &StockItem) -> bool {
        match self.flavor.as_deref() {
            Some(wanted) if !wanted.is_empty() => contains_folded(&item.flavor, wanted),
            _ => true,
        }
    }

    fn category_matches(&self, item: &StockItem) -> bool {
        match self.category.as_deref() {
            Some(wanted) if !wanted.is_empty() => {
                // An item without a category never matches a category
                // criterion.
                item.category
                    .as_deref()
                    .is_some_and(|category| contains_folded(category, wanted))
            }
            _ => true,
        }
    }

    fn has_flavor(&self) -> bool {
        self.flavor.as_deref().is_some_and(|f| !f.is_empty())
    }

    fn has_category(&self) -> bool {
        self.category.as_deref().is_some_and(|c| !c.is_empty())
    }
}

/// Case-folded substring containment.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns the visible subset of `items` under `criteria`, preserving order.
pub fn visible<'a>(items: &'a [StockItem], criteria: &FilterCriteria) -> Vec<&'a StockItem> {
    items.iter().filter(|item| criteria.matches(item)).collect()
}
