//! Keyword taxonomy used to infer a category from free text.

use anyhow::{bail, Result};

use crate::Category;

const FOOD: &[&str] = &[
    "zomato", "swiggy", "food", "restaurant", "hotel", "cafe", "coffee", "meal", "eatery",
];
const TRANSPORT: &[&str] = &[
    "uber", "ola", "taxi", "bus", "train", "fuel", "petrol", "diesel", "auto", "metro",
];
const SHOPPING: &[&str] = &[
    "amazon", "flipkart", "ajio", "myntra", "mall", "store", "shop", "fashion", "cloth", "purchase",
];
const ENTERTAINMENT: &[&str] = &[
    "movie", "netflix", "spotify", "pvr", "inox", "ticket", "show", "game", "entertainment",
];
const GROCERIES: &[&str] = &["grocery", "supermarket", "dmart", "mart", "bazaar"];
const HEALTH: &[&str] = &["pharmacy", "medical", "medicine", "hospital", "clinic", "doctor"];
const BILLS: &[&str] = &[
    "electricity", "bill", "wifi", "broadband", "recharge", "upi", "paytm", "google pay", "phonepe",
];

fn default_keywords(category: Category) -> &'static [&'static str] {
    match category {
        Category::Food => FOOD,
        Category::Transport => TRANSPORT,
        Category::Shopping => SHOPPING,
        Category::Entertainment => ENTERTAINMENT,
        Category::Groceries => GROCERIES,
        Category::Health => HEALTH,
        Category::Bills => BILLS,
        Category::Others => &[],
    }
}

/// Category → lowercase substrings, iterated in [`Category::ALL`] order.
///
/// Built once at startup and then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let entries = Category::ALL
            .iter()
            .map(|&c| {
                let words = default_keywords(c).iter().map(|w| w.to_string()).collect();
                (c, words)
            })
            .collect();
        Self { entries }
    }
}

impl KeywordTable {
    /// Append extra keywords to a category, after its defaults.
    ///
    /// Keywords are lowercased; blanks and duplicates are ignored.
    /// `Others` stays keyword-free so it can only be reached by fallback.
    pub fn extend<I, S>(&mut self, category: Category, keywords: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if category == Category::Others {
            bail!("the Others category cannot carry keywords");
        }
        let words = &mut self.entries[category.index()].1;
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if kw.is_empty() || words.contains(&kw) {
                continue;
            }
            words.push(kw);
        }
        Ok(())
    }

    /// Keywords for one category
    pub fn keywords(&self, category: Category) -> &[String] {
        &self.entries[category.index()].1
    }

    /// (category, keywords) pairs in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries.iter().map(|(c, words)| (*c, words.as_slice()))
    }
}
