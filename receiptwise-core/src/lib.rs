//! receiptwise-core: categories, keyword taxonomy, classifier and advice tables

pub mod advice;
pub mod category;
pub mod classifier;
pub mod keywords;
pub mod record;

pub use advice::{AdviceTable, AdviceThresholds};
pub use category::Category;
pub use classifier::classify;
pub use keywords::KeywordTable;
pub use record::ExpenseRecord;
