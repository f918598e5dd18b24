//! A bill: an ordered list of line items with a derived total

use crate::item::LineItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An ordered collection of purchased items.
///
/// The grand total is always derived from the lines, so a receipt can
/// never disagree with its own items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Line items in purchase order
    pub items: Vec<LineItem>,
}

impl Receipt {
    /// Create an empty receipt
    pub fn new() -> Self {
        Receipt::default()
    }

    /// Create a receipt from existing line items
    pub fn from_items(items: Vec<LineItem>) -> Self {
        Receipt { items }
    }

    /// Append a line item to the end of the receipt
    pub fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Number of line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the receipt has no line items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line's extended price
    pub fn grand_total(&self) -> Money {
        self.items.iter().map(LineItem::extended_price).sum()
    }
}
