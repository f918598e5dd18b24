//! Fixed-width text rendering for bill output

use console::Style;
use tallylib::{Receipt, COLUMN_HEADERS, TOTAL_LABEL};

/// Width of the item name column
const NAME_WIDTH: usize = 10;
/// Width of the quantity column
const QUANTITY_WIDTH: usize = 10;
/// Width of each money column
const PRICE_WIDTH: usize = 15;

/// Full width of one rendered line: four columns plus the separating spaces
fn table_width() -> usize {
    NAME_WIDTH + (QUANTITY_WIDTH + 1) + (PRICE_WIDTH + 1) * 2
}

/// Truncate a name to fit within max_len, adding a ".." suffix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.len() > max_len {
        format!("{}..", &name[..max_len - 2])
    } else {
        name.to_string()
    }
}

/// Render a receipt as a fixed-width table: header, separator, one line
/// per item, separator, grand total. Every line is the same width.
pub fn render_receipt(receipt: &Receipt) -> String {
    let bold = Style::new().bold();
    let separator = "-".repeat(table_width());
    let mut output = String::new();

    let header = format!(
        "{:<name_w$} {:>qty_w$} {:>price_w$} {:>price_w$}",
        COLUMN_HEADERS[0],
        COLUMN_HEADERS[1],
        COLUMN_HEADERS[2],
        COLUMN_HEADERS[3],
        name_w = NAME_WIDTH,
        qty_w = QUANTITY_WIDTH,
        price_w = PRICE_WIDTH,
    );
    output.push_str(&bold.apply_to(header).to_string());
    output.push('\n');
    output.push_str(&separator);
    output.push('\n');

    for item in &receipt.items {
        output.push_str(&format!(
            "{:<name_w$} {:>qty_w$} {:>price_w$} {:>price_w$}\n",
            truncate_name(&item.name, NAME_WIDTH),
            item.quantity,
            item.unit_price,
            item.extended_price(),
            name_w = NAME_WIDTH,
            qty_w = QUANTITY_WIDTH,
            price_w = PRICE_WIDTH,
        ));
    }

    output.push_str(&separator);
    output.push('\n');

    // The total label spans every column except the last money column
    let label_width = table_width() - PRICE_WIDTH - 1;
    let total = format!(
        "{:<label_w$} {:>price_w$}",
        TOTAL_LABEL,
        receipt.grand_total(),
        label_w = label_width,
        price_w = PRICE_WIDTH,
    );
    output.push_str(&bold.apply_to(total).to_string());
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use tallylib::{LineItem, Money};

    fn grocery_receipt() -> Receipt {
        Receipt::from_items(vec![
            LineItem::new("Milk", 2, Money::from_cents(150)),
            LineItem::new("Bread", 1, Money::from_cents(200)),
            LineItem::new("Eggs", 1, Money::from_cents(320)),
            LineItem::new("Apples", 5, Money::from_cents(80)),
            LineItem::new("Rice", 1, Money::from_cents(500)),
        ])
    }

    #[test]
    fn test_truncate_name_keeps_short_names() {
        assert_eq!(truncate_name("Milk", 10), "Milk");
        assert_eq!(truncate_name("Clementine", 10), "Clementine");
    }

    #[test]
    fn test_truncate_name_shortens_long_names() {
        assert_eq!(truncate_name("Pomegranates", 10), "Pomegran..");
    }

    #[test]
    fn test_every_line_shares_the_table_width() {
        let rendered = render_receipt(&grocery_receipt());
        for line in rendered.lines() {
            assert_eq!(strip_ansi_codes(line).len(), table_width(), "line: {line:?}");
        }
    }

    #[test]
    fn test_renders_expected_layout() {
        let rendered = render_receipt(&grocery_receipt());
        let plain = strip_ansi_codes(&rendered).to_string();
        let expected = "\
Item         Quantity  Price per Unit     Total Price
-----------------------------------------------------
Milk                2            1.50            3.00
Bread               1            2.00            2.00
Eggs                1            3.20            3.20
Apples              5            0.80            4.00
Rice                1            5.00            5.00
-----------------------------------------------------
Total Bill:                                     17.20
";
        assert_eq!(plain, expected);
    }

    #[test]
    fn test_long_name_stays_aligned() {
        let receipt = Receipt::from_items(vec![LineItem::new(
            "Pomegranates",
            3,
            Money::from_cents(250),
        )]);
        let rendered = render_receipt(&receipt);
        let plain = strip_ansi_codes(&rendered).to_string();
        let item_line = plain.lines().nth(2).unwrap();
        assert!(item_line.starts_with("Pomegran.. "));
        assert_eq!(item_line.len(), table_width());
    }

    #[test]
    fn test_empty_receipt_still_renders_frame() {
        let rendered = render_receipt(&Receipt::new());
        let plain = strip_ansi_codes(&rendered).to_string();
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].starts_with("Total Bill:"));
        assert!(lines[3].ends_with("0.00"));
    }
}
