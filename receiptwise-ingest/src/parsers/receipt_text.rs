//! OCR receipt / expense-list text parser
//!
//! Expected input is loose OCR output, one item per line, amount trailing:
//!   Zomato Order        450
//!   Uber                23.5
//!   Qty 2  Notebook     120.00
//!
//! Lines without any number are OCR noise and are dropped.

use anyhow::Result;
use regex::Regex;
use receiptwise_core::{classify, ExpenseRecord, KeywordTable};
use tracing::debug;

const UNKNOWN_ITEM: &str = "Unknown";

/// Turns raw OCR text into categorized expense records.
///
/// Borrows the keyword table; build one per process and reuse it.
pub struct ReceiptParser<'a> {
    amount_re: Regex,
    line_break_re: Regex,
    keywords: &'a KeywordTable,
}

impl<'a> ReceiptParser<'a> {
    pub fn new(keywords: &'a KeywordTable) -> Result<Self> {
        Ok(Self {
            amount_re: Regex::new(r"[0-9]+(?:\.[0-9]{1,2})?")?,
            // CRLF counts once; bare CR, VT, FF, FS/GS/RS, NEL, LS and PS also end a line
            line_break_re: Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")?,
            keywords,
        })
    }

    /// Parse every line, in order. Lines with no numeric token yield nothing.
    pub fn parse(&self, text: &str) -> Vec<ExpenseRecord> {
        self.line_break_re
            .split(text)
            .enumerate()
            .filter_map(|(i, line)| {
                let record = self.parse_line(line);
                if record.is_none() && !line.trim().is_empty() {
                    debug!(line_no = i + 1, line = line.trim(), "no amount found, skipping line");
                }
                record
            })
            .collect()
    }

    /// Parse a single line. The last number on the line is the amount.
    pub fn parse_line(&self, line: &str) -> Option<ExpenseRecord> {
        let clean = line.trim();
        if clean.is_empty() {
            return None;
        }

        let last = self.amount_re.find_iter(clean).last()?;
        let amount: f64 = match last.as_str().parse() {
            Ok(a) => a,
            Err(_) => return None,
        };

        let category = classify(clean, self.keywords);
        Some(ExpenseRecord::new(item_name(clean), amount, category))
    }
}

/// Keep ASCII letters and spaces, trim, title-case; "Unknown" when nothing is left.
pub fn item_name(line: &str) -> String {
    let letters: String = line
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();
    let name = title_case(letters.trim());
    if name.is_empty() {
        UNKNOWN_ITEM.to_string()
    } else {
        name
    }
}

/// Upper-case the first letter of each run of letters, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
