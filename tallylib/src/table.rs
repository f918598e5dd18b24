//! Table-ready data structures for bill output.
//!
//! The data flow is:
//! 1. Receipt (line items + derived total)
//! 2. ReceiptTable (table-ready: headers, rows, footer)
//!
//! `ReceiptTable` can be consumed by a renderer or serialized to JSON;
//! every cell is already a string and no arithmetic is left to do.

use serde::{Deserialize, Serialize};

use crate::item::LineItem;
use crate::receipt::Receipt;

/// Column headers for a rendered bill
pub const COLUMN_HEADERS: [&str; 4] = ["Item", "Quantity", "Price per Unit", "Total Price"];

/// Label of the footer row
pub const TOTAL_LABEL: &str = "Total Bill:";

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (item name, or the footer label)
    pub label: String,
    /// Values for the remaining columns (as strings, ready for display)
    pub values: Vec<String>,
}

/// Table-ready bill data.
///
/// This is the final data structure before presentation. Renderers
/// iterate over headers/rows/footer and apply alignment - no computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptTable {
    /// Column headers: [label header, quantity, unit price, line total]
    pub headers: Vec<String>,
    /// One row per line item, in purchase order
    pub rows: Vec<TableRow>,
    /// Summary row holding the grand total
    pub footer: TableRow,
}

impl ReceiptTable {
    /// Create a ReceiptTable from a Receipt.
    pub fn from_receipt(receipt: &Receipt) -> Self {
        ReceiptTable {
            headers: build_headers(),
            rows: receipt.items.iter().map(item_row).collect(),
            footer: build_footer(receipt),
        }
    }
}

fn build_headers() -> Vec<String> {
    COLUMN_HEADERS.iter().map(|header| header.to_string()).collect()
}

/// Build a data row for one line item.
fn item_row(item: &LineItem) -> TableRow {
    TableRow {
        label: item.name.clone(),
        values: vec![
            item.quantity.to_string(),
            item.unit_price.to_string(),
            item.extended_price().to_string(),
        ],
    }
}

/// Build the footer row from the receipt's grand total.
fn build_footer(receipt: &Receipt) -> TableRow {
    TableRow {
        label: TOTAL_LABEL.to_string(),
        values: vec![receipt.grand_total().to_string()],
    }
}
