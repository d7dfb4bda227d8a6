pub mod receipt_text;

pub use receipt_text::{item_name, ReceiptParser};
