//! CLI tool for classifying an email body
//!
//! # Usage
//!
//! ```bash
//! # Classify text given on the command line
//! classify-email --text "URGENT: verify your bank details now"
//!
//! # Classify a file, printing JSON
//! classify-email message.txt --format json
//!
//! # Classify stdin with a custom configuration
//! cat message.txt | classify-email --config classifier.toml
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mail_classifier::{Config, EmailAnalysis, EmailClassifier};
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "classify-email")]
#[command(about = "Classify an email as Safe, Spam or Harmful", long_about = None)]
struct Cli {
    /// File containing the email body (stdin when omitted)
    file: Option<PathBuf>,

    /// Email body given inline
    #[arg(short, long, conflicts_with = "file")]
    text: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
    format: Format,

    /// Log level, overrides the configuration file
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::default(),
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mail_classifier={}", level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let text = read_input(&cli)?;
    if text.trim().is_empty() {
        eprintln!("Please enter some email content to classify.");
        std::process::exit(1);
    }

    info!("Classifying {} bytes of email content", text.len());

    let classifier = EmailClassifier::from_config(&config);
    let analysis = classifier.analyze(&text);

    match cli.format {
        Format::Pretty => print_pretty(&analysis)?,
        Format::Json => {
            let mut value = serde_json::to_value(&analysis)?;
            value["status_color"] = serde_json::Value::from(analysis.label.status_color());
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn print_pretty(analysis: &EmailAnalysis) -> anyhow::Result<()> {
    println!("{}", analysis.label);
    println!("Confidence: {:.2}%", analysis.confidence * 100.0);

    println!("\nAnalysis Explanation");
    for reason in &analysis.reasons {
        println!("  ▪ {}", reason);
    }

    println!("\nNormalized Text");
    if analysis.normalized.is_degraded() {
        println!("  (lemmatization unavailable)");
    }
    println!("  {}", analysis.normalized.text());

    println!("\nDetailed Analysis");
    println!("{}", serde_json::to_string_pretty(&analysis.features)?);

    Ok(())
}
