//! A single purchased line on a bill

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One purchased item: what it is, how many, and the price of one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name of the item
    pub name: String,
    /// Number of units purchased
    pub quantity: u32,
    /// Price of a single unit
    pub unit_price: Money,
}

impl LineItem {
    /// Create a line item
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: Money) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Total for the line: unit price times quantity
    pub fn extended_price(&self) -> Money {
        self.unit_price * self.quantity
    }
}
