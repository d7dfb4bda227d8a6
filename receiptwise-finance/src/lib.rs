//! receiptwise-finance: aggregation, advice, spend tips, CSV export and the analysis pipeline

pub mod advisor;
pub mod csv_export;
pub mod pipeline;
pub mod report;
pub mod tips;

pub use advisor::Advisor;
pub use csv_export::{read_header, to_csv_bytes, write_csv, CSV_HEADER};
pub use pipeline::{Analysis, Analyzer};
pub use report::AggregateReport;
pub use tips::{report_tips, spend_tip};
