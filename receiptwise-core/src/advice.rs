//! Static advice strings and the thresholds that select between them.

use serde::{Deserialize, Serialize};

use crate::Category;

pub const NO_EXPENSES_MESSAGE: &str = "No expenses detected to analyze.";
pub const OVERSPEND_WARNING: &str =
    "⚠️ You’re spending quite a bit! Try the 50–30–20 rule: 50% needs, 30% wants, 20% savings.";
pub const ON_TRACK_MESSAGE: &str = "✅ You’re doing great — keep tracking expenses regularly!";

const FOOD: &[&str] = &[
    "🍽️ Keep food spending under 15% of your total income.",
    "🍱 Plan weekly meals to avoid overspending on takeout.",
    "☕ Make coffee at home — small savings add up!",
];
const TRANSPORT: &[&str] = &[
    "🚗 Track your fuel usage and plan trips efficiently.",
    "🚌 Try carpooling or public transport to save fuel costs.",
    "🚴 Short distances? Consider walking or biking!",
];
const SHOPPING: &[&str] = &[
    "🛍️ Avoid impulse buys — wait 24 hours before purchasing.",
    "💳 Compare prices before checking out online.",
    "📦 Track your monthly shopping budget and set limits.",
];
const ENTERTAINMENT: &[&str] = &[
    "🎬 Limit subscriptions to only the services you use often.",
    "🎮 Budget for entertainment — 5–10% of income max.",
    "🎧 Free hobbies can be just as rewarding!",
];
const GROCERIES: &[&str] = &[
    "🛒 Make a weekly grocery list and stick to it.",
    "🥦 Buy in bulk for non-perishables to save money.",
    "🍎 Compare prices across stores for essentials.",
];
const HEALTH: &[&str] = &[
    "💊 Keep 10% of your income aside for medical expenses.",
    "🏥 Health is wealth — insurance saves in emergencies.",
    "🧘‍♂️ Invest in preventive care, not just medicine.",
];
const BILLS: &[&str] = &[
    "📶 Check subscriptions and cancel unused plans.",
    "📲 Review recurring payments every month.",
];
const OTHERS: &[&str] = &[
    "📘 Track unknown expenses manually to avoid leaks.",
    "💰 Every rupee counts — even small savings matter.",
];

/// Spend limits that pick the advice variant and the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceThresholds {
    /// A category total above this gets its second advice entry
    pub category_limit: f64,
    /// A grand total above this gets the budgeting-rule warning
    pub total_limit: f64,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            category_limit: 1000.0,
            total_limit: 5000.0,
        }
    }
}

impl AdviceThresholds {
    /// 0 while `amount` is within the category limit, 1 above it
    pub fn advice_index(&self, amount: f64) -> usize {
        if amount > self.category_limit { 1 } else { 0 }
    }

    pub fn is_overspending(&self, total: f64) -> bool {
        total > self.total_limit
    }
}

/// Category → ordered advice strings (at least two each).
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceTable {
    entries: Vec<Vec<String>>,
}

impl Default for AdviceTable {
    fn default() -> Self {
        let entries = Category::ALL
            .iter()
            .map(|c| {
                let lines = match c {
                    Category::Food => FOOD,
                    Category::Transport => TRANSPORT,
                    Category::Shopping => SHOPPING,
                    Category::Entertainment => ENTERTAINMENT,
                    Category::Groceries => GROCERIES,
                    Category::Health => HEALTH,
                    Category::Bills => BILLS,
                    Category::Others => OTHERS,
                };
                lines.iter().map(|s| s.to_string()).collect()
            })
            .collect();
        Self { entries }
    }
}

impl AdviceTable {
    pub fn advice(&self, category: Category) -> &[String] {
        &self.entries[category.index()]
    }

    /// Advice line for a category total under the given thresholds
    pub fn select(&self, category: Category, amount: f64, thresholds: &AdviceThresholds) -> &str {
        let lines = self.advice(category);
        let idx = thresholds.advice_index(amount).min(lines.len().saturating_sub(1));
        lines.get(idx).map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_two_entries() {
        let table = AdviceTable::default();
        for c in Category::ALL {
            assert!(table.advice(c).len() >= 2, "{c} has fewer than 2 advice lines");
        }
    }

    #[test]
    fn test_category_limit_boundary() {
        let t = AdviceThresholds::default();
        assert_eq!(t.advice_index(0.0), 0);
        assert_eq!(t.advice_index(1000.0), 0);
        assert_eq!(t.advice_index(1000.01), 1);
    }

    #[test]
    fn test_total_limit_boundary() {
        let t = AdviceThresholds::default();
        assert!(!t.is_overspending(5000.0));
        assert!(t.is_overspending(5000.01));
    }

    #[test]
    fn test_select_uses_thresholds() {
        let table = AdviceTable::default();
        let t = AdviceThresholds::default();
        assert_eq!(table.select(Category::Food, 1200.0, &t), table.advice(Category::Food)[1]);
        assert_eq!(table.select(Category::Bills, 10.0, &t), table.advice(Category::Bills)[0]);

        let strict = AdviceThresholds { category_limit: 5.0, ..t };
        assert_eq!(table.select(Category::Bills, 10.0, &strict), table.advice(Category::Bills)[1]);
    }

    #[test]
    fn test_thresholds_partial_deserialize() {
        let t: AdviceThresholds = serde_json::from_str(r#"{"total_limit": 8000.0}"#).unwrap();
        assert_eq!(t.category_limit, 1000.0);
        assert_eq!(t.total_limit, 8000.0);
    }
}
