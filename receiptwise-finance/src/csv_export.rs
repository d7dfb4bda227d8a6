//! CSV report export.
//!
//! Layout:
//!   Item,Amount (₹),Category
//!   Zomato Order,450.00,Food

use anyhow::{Context, Result};
use receiptwise_core::ExpenseRecord;
use std::io;

pub const CSV_HEADER: [&str; 3] = ["Item", "Amount (₹)", "Category"];

/// Write records as CSV (header + one row each) to any writer.
pub fn write_csv<W: io::Write>(records: &[ExpenseRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER).context("writing CSV header")?;
    for r in records {
        let amount = format!("{:.2}", r.amount);
        wtr.write_record([r.item_name.as_str(), amount.as_str(), r.category.name()])
            .with_context(|| format!("writing CSV row for {}", r.item_name))?;
    }
    wtr.flush().context("flushing CSV")?;
    Ok(())
}

/// Records as UTF-8 CSV bytes
pub fn to_csv_bytes(records: &[ExpenseRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}

/// Column names from the first row of a CSV document.
pub fn read_header<R: io::Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let headers = rdr.headers().context("reading CSV header")?;
    Ok(headers.iter().map(|h| h.to_string()).collect())
}
