//! Budgeting advice assembled from categorized expenses.

use receiptwise_core::advice::{NO_EXPENSES_MESSAGE, ON_TRACK_MESSAGE, OVERSPEND_WARNING};
use receiptwise_core::{AdviceTable, AdviceThresholds, ExpenseRecord};

use crate::report::AggregateReport;

/// Selects advice lines for a set of records.
pub struct Advisor<'a> {
    table: &'a AdviceTable,
    thresholds: AdviceThresholds,
}

impl<'a> Advisor<'a> {
    pub fn new(table: &'a AdviceTable, thresholds: AdviceThresholds) -> Self {
        Self { table, thresholds }
    }

    /// Markdown-ish advice text, paragraphs separated by a blank line.
    pub fn advise(&self, records: &[ExpenseRecord]) -> String {
        if records.is_empty() {
            return NO_EXPENSES_MESSAGE.to_string();
        }
        self.advise_report(&AggregateReport::from_records(records))
    }

    /// Same as [`Advisor::advise`], from an already aggregated report.
    pub fn advise_report(&self, report: &AggregateReport) -> String {
        if report.is_empty() {
            return NO_EXPENSES_MESSAGE.to_string();
        }

        let mut lines: Vec<String> = report
            .per_category_totals
            .iter()
            .map(|(category, amount)| {
                let tip = self.table.select(*category, *amount, &self.thresholds);
                format!("**{category}:** {tip}")
            })
            .collect();

        lines.push(format!(
            "💵 Your total spending this session is ₹{:.2}.",
            report.total
        ));
        if self.thresholds.is_overspending(report.total) {
            lines.push(OVERSPEND_WARNING.to_string());
        } else {
            lines.push(ON_TRACK_MESSAGE.to_string());
        }

        lines.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receiptwise_core::Category;

    fn advise(records: &[ExpenseRecord]) -> String {
        let table = AdviceTable::default();
        Advisor::new(&table, AdviceThresholds::default()).advise(records)
    }

    #[test]
    fn test_no_expenses() {
        assert_eq!(advise(&[]), "No expenses detected to analyze.");
    }

    #[test]
    fn test_food_over_limit_transport_under() {
        let table = AdviceTable::default();
        let out = advise(&[
            ExpenseRecord::new("Swiggy", 1200.0, Category::Food),
            ExpenseRecord::new("Uber", 300.0, Category::Transport),
        ]);
        assert!(out.contains(&format!("**Food:** {}", table.advice(Category::Food)[1])));
        assert!(out.contains(&format!("**Transport:** {}", table.advice(Category::Transport)[0])));
        assert!(out.contains("₹1500.00"));
        assert!(out.contains(ON_TRACK_MESSAGE));
        assert!(!out.contains(OVERSPEND_WARNING));
    }

    #[test]
    fn test_large_others_spend_warns() {
        let table = AdviceTable::default();
        let out = advise(&[ExpenseRecord::new("Unknown", 6000.0, Category::Others)]);
        assert!(out.contains(&table.advice(Category::Others)[1]));
        assert!(out.contains("50–30–20"));
        assert!(!out.contains(ON_TRACK_MESSAGE));
    }

    #[test]
    fn test_exact_limits_stay_low() {
        let table = AdviceTable::default();
        let out = advise(&[
            ExpenseRecord::new("Mall", 1000.0, Category::Shopping),
            ExpenseRecord::new("Clinic", 4000.0, Category::Health),
        ]);
        assert!(out.contains(&format!("**Shopping:** {}", table.advice(Category::Shopping)[0])));
        assert!(out.contains(&format!("**Health:** {}", table.advice(Category::Health)[1])));
        assert!(out.contains("₹5000.00"));
        assert!(out.contains(ON_TRACK_MESSAGE));
    }

    #[test]
    fn test_layout() {
        let out = advise(&[
            ExpenseRecord::new("Uber", 100.0, Category::Transport),
            ExpenseRecord::new("Zomato", 50.0, Category::Food),
            ExpenseRecord::new("Ola", 20.0, Category::Transport),
        ]);
        let paras: Vec<_> = out.split("\n\n").collect();
        assert_eq!(paras.len(), 4);
        assert!(paras[0].starts_with("**Transport:**"));
        assert!(paras[1].starts_with("**Food:**"));
        assert_eq!(paras[2], "💵 Your total spending this session is ₹170.00.");
        assert_eq!(paras[3], ON_TRACK_MESSAGE);
    }

    #[test]
    fn test_custom_thresholds() {
        let table = AdviceTable::default();
        let thresholds = AdviceThresholds {
            category_limit: 100.0,
            total_limit: 150.0,
        };
        let out = Advisor::new(&table, thresholds)
            .advise(&[ExpenseRecord::new("Paytm bill", 200.0, Category::Bills)]);
        assert!(out.contains(&table.advice(Category::Bills)[1]));
        assert!(out.contains(OVERSPEND_WARNING));
    }
}
