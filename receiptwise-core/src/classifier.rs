//! Keyword-score category classifier.

use crate::{Category, KeywordTable};

/// Classify one line of text.
///
/// Each category scores the number of its keywords found as substrings of the
/// lowercased line. Only a strictly higher score replaces the current best, so
/// ties keep the earlier category. Nothing scoring above zero → `Others`.
pub fn classify(line: &str, table: &KeywordTable) -> Category {
    let line = line.to_lowercase();
    let mut best = Category::Others;
    let mut best_score = 0usize;

    for (category, keywords) in table.iter() {
        let score = keywords.iter().filter(|k| line.contains(k.as_str())).count();
        if score > best_score {
            best_score = score;
            best = category;
        }
    }

    best
}
