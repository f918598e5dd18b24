//! # tallylib
//!
//! Building blocks for small checkout-counter console programs: a grocery
//! bill rendered as a fixed-width table, and a prompt-driven adder that
//! reads numbers the way a terminal user types them.
//!
//! ## Overview
//!
//! Money never touches floating point here. Amounts are stored as whole
//! cents and only gain a decimal point when displayed, so line totals and
//! the grand total are exact by construction:
//!
//! - **Money**: integer-cent amounts with display-time formatting
//! - **LineItem**: name, quantity, and unit price of one purchase
//! - **Receipt**: ordered items with a derived (never cached) grand total
//! - **ReceiptTable**: presentation-ready headers/rows/footer, all strings
//! - **Scanner**: whitespace-delimited token reading over any `Read`
//! - **Addition**: two prompted numbers and their sum
//!
//! ## Features
//!
//! - **Exact arithmetic**: integer cents, saturating sums, no rounding drift
//! - **Table-ready output**: structured data for text rendering or JSON
//! - **Testable IO**: scanning and prompting are generic over reader/writer
//!
//! ## Example
//!
//! ```rust
//! use tallylib::{prompt_addends, LineItem, Money, Receipt, ReceiptTable};
//! use std::io::Cursor;
//!
//! // Build a bill and inspect its table form
//! let receipt = Receipt::from_items(vec![
//!     LineItem::new("Milk", 2, Money::from_cents(150)),
//!     LineItem::new("Bread", 1, Money::from_cents(200)),
//! ]);
//! assert_eq!(receipt.grand_total(), Money::from_cents(500));
//!
//! let table = ReceiptTable::from_receipt(&receipt);
//! assert_eq!(table.footer.values[0], "5.00");
//!
//! // Prompt for two numbers over in-memory IO
//! let mut prompts = Vec::new();
//! let addition = prompt_addends(Cursor::new("3 4"), &mut prompts).unwrap();
//! assert_eq!(addition.sum(), 7);
//! ```

pub mod error;
pub mod item;
pub mod money;
pub mod receipt;
pub mod scan;
pub mod sum;
pub mod table;

pub use error::TallyError;
pub use item::LineItem;
pub use money::Money;
pub use receipt::Receipt;
pub use scan::Scanner;
pub use sum::{prompt_addends, Addition, FIRST_PROMPT, SECOND_PROMPT};
pub use table::{ReceiptTable, TableRow, COLUMN_HEADERS, TOTAL_LABEL};

/// Result type for tallylib operations
pub type Result<T> = std::result::Result<T, TallyError>;
