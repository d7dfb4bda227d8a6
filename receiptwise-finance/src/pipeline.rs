//! End-to-end analysis: OCR text → records → report → advice.

use anyhow::Result;
use receiptwise_core::{AdviceTable, AdviceThresholds, ExpenseRecord, KeywordTable};
use receiptwise_ingest::ReceiptParser;
use serde::Serialize;
use tracing::info;

use crate::advisor::Advisor;
use crate::report::AggregateReport;

/// Outcome of analyzing one block of text
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis {
    /// No line produced a record
    NoExpenses,
    Expenses {
        records: Vec<ExpenseRecord>,
        report: AggregateReport,
        advice: String,
    },
}

impl Analysis {
    pub fn records(&self) -> &[ExpenseRecord] {
        match self {
            Analysis::NoExpenses => &[],
            Analysis::Expenses { records, .. } => records,
        }
    }
}

/// Parser + advisor wired to one set of tables.
pub struct Analyzer<'a> {
    parser: ReceiptParser<'a>,
    advisor: Advisor<'a>,
}

impl<'a> Analyzer<'a> {
    pub fn new(
        keywords: &'a KeywordTable,
        advice: &'a AdviceTable,
        thresholds: AdviceThresholds,
    ) -> Result<Self> {
        Ok(Self {
            parser: ReceiptParser::new(keywords)?,
            advisor: Advisor::new(advice, thresholds),
        })
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let records = self.parser.parse(text);
        if records.is_empty() {
            info!("no valid expenses found in input");
            return Analysis::NoExpenses;
        }

        let report = AggregateReport::from_records(&records);
        let advice = self.advisor.advise_report(&report);
        info!(
            records = records.len(),
            categories = report.per_category_totals.len(),
            total = report.total,
            "analyzed expenses"
        );

        Analysis::Expenses {
            records,
            report,
            advice,
        }
    }
}
