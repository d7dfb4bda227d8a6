use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use receiptwise_core::AdviceTable;
use receiptwise_finance::{report_tips, write_csv, Analysis, Analyzer};
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod ocr;
mod render;
mod state;

const NO_VALID_EXPENSES: &str = "No valid expenses found. Try uploading a clearer image.";

#[derive(Parser, Debug)]
#[command(
    name = "receiptwise",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("RECEIPTWISE_BUILD_SHA"), ")"),
    about = "Categorize receipt expenses and get budgeting advice"
)]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// OCR a receipt image (or read text) and print categorized expenses + advice
    Analyze {
        /// Receipt or expense-list image
        #[arg(required_unless_present = "text", conflicts_with = "text")]
        image: Option<PathBuf>,

        /// Skip OCR and read already extracted text ("-" for stdin)
        #[arg(long)]
        text: Option<PathBuf>,

        /// Write the CSV report (default file: expense_report.csv)
        #[arg(long, num_args = 0..=1, default_missing_value = "expense_report.csv")]
        csv: Option<PathBuf>,

        /// Print records, totals and advice as JSON
        #[arg(long)]
        json: bool,

        /// Add an amount-aware tip per category
        #[arg(long)]
        tips: bool,

        /// Don't echo the OCR text
        #[arg(long)]
        quiet_ocr: bool,
    },

    /// Manage ~/.receiptwise/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    generated_at: DateTime<Local>,
    source: String,
    analysis: &'a Analysis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tips: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Analyze {
            image,
            text,
            csv,
            json,
            tips,
            quiet_ocr,
        } => {
            let cfg = config::load_config()?;
            let (source, raw) = match (image, text) {
                (_, Some(path)) => (path.display().to_string(), read_text(&path)?),
                (Some(path), None) => {
                    let raw = ocr::extract_text(&path, &cfg.ocr).await?;
                    (path.display().to_string(), raw)
                }
                (None, None) => bail!("pass an image or --text <file>"),
            };

            if !json && !quiet_ocr {
                println!("## Extracted text\n");
                println!("{}\n", raw.trim_end());
            }

            let keywords = cfg.keyword_table()?;
            let advice = AdviceTable::default();
            let analyzer = Analyzer::new(&keywords, &advice, cfg.thresholds)?;
            let analysis = analyzer.analyze(&raw);

            let tip_lines: Vec<String> = match (&analysis, tips) {
                (Analysis::Expenses { report, .. }, true) => report_tips(report)
                    .into_iter()
                    .map(|(c, tip)| format!("{c}: {tip}"))
                    .collect(),
                _ => Vec::new(),
            };

            if json {
                let out = JsonOutput {
                    generated_at: Local::now(),
                    source,
                    analysis: &analysis,
                    tips: tip_lines,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                print_analysis(&analysis, &tip_lines);
            }

            if let Some(path) = csv {
                if analysis.records().is_empty() {
                    warn!("nothing to export, skipping {}", path.display());
                } else {
                    export_csv(&analysis, &path)?;
                    if !json {
                        println!("\nCSV report written to {}", path.display());
                    }
                }
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s).context("reading stdin")?;
        return Ok(s);
    }
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn print_analysis(analysis: &Analysis, tips: &[String]) {
    match analysis {
        Analysis::NoExpenses => {
            println!("{NO_VALID_EXPENSES}");
        }
        Analysis::Expenses {
            records,
            report,
            advice,
        } => {
            println!("## Categorized expenses\n");
            print!("{}", render::render_table(records));
            println!("\n## Total expense: ₹{:.2}\n", report.total);
            print!("{}", render::render_bars(report));
            println!("\n## Personalized financial advice\n");
            println!("{advice}");
            if !tips.is_empty() {
                println!("\n## Spend tips\n");
                for tip in tips {
                    println!("- {tip}");
                }
            }
            println!("\nGenerated {}", Local::now().format("%Y-%m-%d %H:%M"));
        }
    }
}

fn export_csv(analysis: &Analysis, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv(analysis.records(), file).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = analysis.records().len(), "wrote CSV report");
    Ok(())
}
