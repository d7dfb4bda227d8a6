//! Plain-text rendering of records and category totals.

use receiptwise_core::ExpenseRecord;
use receiptwise_finance::AggregateReport;

const BAR_WIDTH: usize = 30;

pub fn render_table(records: &[ExpenseRecord]) -> String {
    let amounts: Vec<String> = records.iter().map(|r| format!("{:.2}", r.amount)).collect();

    let item_w = records
        .iter()
        .map(|r| r.item_name.chars().count())
        .chain(std::iter::once("Item".len()))
        .max()
        .unwrap_or(4);
    let amount_w = amounts
        .iter()
        .map(|a| a.len())
        .chain(std::iter::once("Amount (₹)".chars().count()))
        .max()
        .unwrap_or(10);

    let mut out = format!("{:<item_w$}  {:>amount_w$}  Category\n", "Item", "Amount (₹)");
    for (r, amount) in records.iter().zip(&amounts) {
        out.push_str(&format!(
            "{:<item_w$}  {:>amount_w$}  {}\n",
            r.item_name, amount, r.category
        ));
    }
    out
}

/// Horizontal bar per category, scaled to the largest subtotal.
pub fn render_bars(report: &AggregateReport) -> String {
    let max = report.max_category_total();
    let mut out = String::new();
    for (category, sum) in &report.per_category_totals {
        let len = if max > 0.0 {
            ((sum / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let len = if *sum > 0.0 { len.max(1) } else { len };
        out.push_str(&format!(
            "{:<13} {:<BAR_WIDTH$} ₹{:.2}\n",
            category.name(),
            "█".repeat(len),
            sum
        ));
    }
    out
}
