//! receiptwise-ingest: turns OCR receipt text into categorized expense records.

pub mod parsers;

pub use parsers::{item_name, ReceiptParser};
