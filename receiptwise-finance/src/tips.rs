//! Amount-aware one-line tips per category subtotal.

use receiptwise_core::Category;

use crate::report::AggregateReport;

/// Tip mentioning the spend, rounded to whole rupees.
pub fn spend_tip(category: Category, amount: f64) -> String {
    match category {
        Category::Food => format!(
            "You spent ₹{amount:.0} on dining. Tip: try a weekly dining cap; set aside 5% of monthly income for eating out."
        ),
        Category::Transport => {
            format!("Transport ₹{amount:.0}. Tip: consider monthly passes or carpooling to reduce costs.")
        }
        Category::Groceries => {
            format!("Groceries ₹{amount:.0}. Tip: compare unit prices and buy staples in bulk.")
        }
        Category::Entertainment => format!(
            "Entertainment ₹{amount:.0}. Tip: choose 1 paid subscription and cancel others you rarely use."
        ),
        _ => format!("Expense ₹{amount:.0}. Tip: log this expense category and review weekly."),
    }
}

/// One tip per category present in the report, in report order
pub fn report_tips(report: &AggregateReport) -> Vec<(Category, String)> {
    report
        .per_category_totals
        .iter()
        .map(|(c, amount)| (*c, spend_tip(*c, *amount)))
        .collect()
}
