use anyhow::{Context, Result};
use receiptwise_core::{AdviceThresholds, Category, KeywordTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{ensure_receiptwise_home, receiptwise_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thresholds: AdviceThresholds,
    pub ocr: OcrSection,
    /// Extra keywords per category name, appended after the built-in ones
    pub keywords: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSection {
    /// OCR executable (default: "tesseract")
    pub command: String,
    /// Language passed as `-l <lang>`
    pub lang: String,
    /// Extra args appended after the language (e.g. ["--psm", "6"])
    pub args: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for OcrSection {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
            lang: "eng".to_string(),
            args: Vec::new(),
            timeout_secs: 60,
        }
    }
}

impl Config {
    /// Built-in keyword table plus configured extras.
    pub fn keyword_table(&self) -> Result<KeywordTable> {
        let mut table = KeywordTable::default();
        for (name, words) in &self.keywords {
            let category: Category = name
                .parse()
                .with_context(|| format!("config [keywords] entry {name:?}"))?;
            table.extend(category, words)?;
        }
        Ok(table)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(receiptwise_home()?.join("config.toml"))
}

/// Missing config file means defaults.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = ensure_receiptwise_home()?.join("config.toml");
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.thresholds.category_limit, 1000.0);
        assert_eq!(cfg.ocr.command, "tesseract");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.thresholds.total_limit = 7500.0;
        cfg.ocr.args = vec!["--psm".to_string(), "6".to_string()];
        cfg.keywords.insert("Food".to_string(), vec!["dosa".to_string()]);

        save_config_to(&cfg, &p).unwrap();
        assert_eq!(load_config_from(&p).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(
            &p,
            "[thresholds]\ncategory_limit = 500.0\n\n[keywords]\nhealth = [\"Chemist\"]\n",
        )
        .unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.thresholds.category_limit, 500.0);
        assert_eq!(cfg.thresholds.total_limit, 5000.0);
        assert_eq!(cfg.ocr.lang, "eng");

        let table = cfg.keyword_table().unwrap();
        assert!(table.keywords(Category::Health).iter().any(|k| k == "chemist"));
    }

    #[test]
    fn test_unknown_keyword_category_rejected() {
        let mut cfg = Config::default();
        cfg.keywords.insert("Dining".to_string(), vec!["thali".to_string()]);
        assert!(cfg.keyword_table().is_err());

        let mut cfg = Config::default();
        cfg.keywords.insert("Others".to_string(), vec!["misc".to_string()]);
        assert!(cfg.keyword_table().is_err());
    }

    #[test]
    fn test_bad_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[thresholds\n").unwrap();
        assert!(load_config_from(&p).is_err());
    }
}
