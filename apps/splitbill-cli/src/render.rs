//! Rendering of a split bill for stdout.

use splitbill_core::{BillOutput, Money};

/// Width of the label column in text output.
const LABEL_WIDTH: usize = 12;

/// Renders the bill as a short plain-text summary.
///
/// ```text
/// 2024年3月21日 開心小館
/// Subtotal     $100.0
/// Tip          $10.0
/// Total        $110.0
///
/// Alice        $56.1
/// Bob          $53.9
/// ```
pub fn render_text(output: &BillOutput, currency_symbol: &str) -> String {
    let amount = |money: Money| format!("{}{}", currency_symbol, money);
    let mut lines = Vec::with_capacity(output.items.len() + 5);

    if output.location.trim().is_empty() {
        lines.push(output.date.clone());
    } else {
        lines.push(format!("{} {}", output.date, output.location));
    }
    lines.push(row("Subtotal", amount(output.sub_total)));
    lines.push(row("Tip", amount(output.tip)));
    lines.push(row("Total", amount(output.total_amount)));
    lines.push(String::new());

    for person in &output.items {
        lines.push(row(&person.name, amount(person.amount)));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn row(label: &str, value: String) -> String {
    format!("{:<width$} {}", label, value, width = LABEL_WIDTH)
}

/// Renders the bill as pretty-printed JSON (amounts in cents).
pub fn render_json(output: &BillOutput) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(output)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitbill_core::PersonItem;

    fn sample() -> BillOutput {
        BillOutput {
            date: "2024年3月21日".to_string(),
            location: "開心小館".to_string(),
            sub_total: Money::from_cents(10000),
            tip: Money::from_cents(1000),
            total_amount: Money::from_cents(11000),
            items: vec![
                PersonItem::new("Alice", Money::from_cents(5610)),
                PersonItem::new("Bob", Money::from_cents(5390)),
            ],
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample(), "$");
        let expected = "\
2024年3月21日 開心小館
Subtotal     $100.0
Tip          $10.0
Total        $110.0

Alice        $56.1
Bob          $53.9
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_without_location() {
        let mut output = sample();
        output.location = String::new();
        let text = render_text(&output, "NT$");
        assert!(text.starts_with("2024年3月21日\n"));
        assert!(text.contains("Alice        NT$56.1"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let json = render_json(&sample()).unwrap();
        let parsed: BillOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
