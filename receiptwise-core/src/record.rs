//! Expense records produced from receipt text

use serde::{Deserialize, Serialize};

use crate::Category;

/// One categorized line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    /// Title-cased item description, or "Unknown"
    pub item_name: String,
    /// Non-negative amount as printed on the receipt
    pub amount: f64,
    pub category: Category,
}

impl ExpenseRecord {
    pub fn new(item_name: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            item_name: item_name.into(),
            amount,
            category,
        }
    }
}
