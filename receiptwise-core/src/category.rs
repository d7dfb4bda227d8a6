//! Spending categories shared by the parser, classifier and reports.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed spending buckets, in the order the classifier evaluates them.
///
/// The declaration order is load-bearing: keyword ties resolve to the
/// category that appears first here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Groceries,
    Health,
    Bills,
    Others,
}

impl Category {
    /// Every category, in evaluation order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Groceries,
        Category::Health,
        Category::Bills,
        Category::Others,
    ];

    /// Display name used in tables, CSV rows and advice text
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Groceries => "Groceries",
            Category::Health => "Health",
            Category::Bills => "Bills",
            Category::Others => "Others",
        }
    }

    /// Position in [`Category::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Case-insensitive lookup by display name.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        match Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
        {
            Some(c) => Ok(*c),
            None => bail!("unknown category: {wanted:?}"),
        }
    }
}
