//! Per-category aggregation of expense records.

use receiptwise_core::{Category, ExpenseRecord};
use serde::Serialize;

/// Grand total plus category subtotals, derived from a set of records.
///
/// Categories appear in first-occurrence order; absent categories are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateReport {
    pub total: f64,
    pub per_category_totals: Vec<(Category, f64)>,
}

impl AggregateReport {
    pub fn from_records(records: &[ExpenseRecord]) -> Self {
        let mut per_category_totals: Vec<(Category, f64)> = Vec::new();
        let mut total = 0.0;

        for r in records {
            total += r.amount;
            match per_category_totals.iter_mut().find(|(c, _)| *c == r.category) {
                Some((_, sum)) => *sum += r.amount,
                None => per_category_totals.push((r.category, r.amount)),
            }
        }

        Self {
            total,
            per_category_totals,
        }
    }

    /// Subtotal for a category (0.0 when absent)
    pub fn get(&self, category: Category) -> f64 {
        self.per_category_totals
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, sum)| *sum)
            .unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.per_category_totals.is_empty()
    }

    /// Largest subtotal, used to scale bar charts
    pub fn max_category_total(&self) -> f64 {
        self.per_category_totals
            .iter()
            .map(|(_, sum)| *sum)
            .fold(0.0, f64::max)
    }
}
