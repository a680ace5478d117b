use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use message_lens::{AnalysisRecord, DiscussionSummary, EngineConfig, MessageAnalyzer};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "message-lens",
    about = "Score sentiment, perspective and cognitive biases in discussion messages",
    version
)]
struct Cli {
    /// File paths to analyze, one message each (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Engine config (TOML)
    #[arg(short, long, env = "MESSAGE_LENS_CONFIG")]
    config: Option<PathBuf>,

    /// Message id for a single input (default: random UUID, or the file path).
    /// Not allowed with more than one file.
    #[arg(short, long)]
    message_id: Option<String>,

    /// Summarize all inputs as one discussion with this id
    #[arg(short, long, value_name = "DISCUSSION_ID")]
    discussion: Option<String>,

    /// Print the configured bias catalog and exit
    #[arg(long)]
    biases: bool,
}

impl Cli {
    fn check(&self) -> Result<()> {
        if self.message_id.is_some() && self.files.len() > 1 {
            bail!(
                "--message-id names a single message but {} files were given",
                self.files.len()
            );
        }
        Ok(())
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    cli.check()?;

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let analyzer: MessageAnalyzer = config.build().context("Invalid engine config")?;

    if cli.biases {
        return print_json(&analyzer.bias_detector().table().definitions());
    }

    let mut inputs: Vec<(String, String)> = Vec::new();
    if cli.files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        let id = cli
            .message_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        inputs.push((id, text));
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Error reading {}", path.display()))?;
            let id = cli
                .message_id
                .clone()
                .unwrap_or_else(|| path.display().to_string());
            inputs.push((id, text));
        }
    }

    let records = inputs
        .iter()
        .map(|(id, text)| analyzer.analyze_message(id, text))
        .collect::<Result<Vec<AnalysisRecord>, _>>()?;

    match &cli.discussion {
        Some(discussion_id) => print_json(&DiscussionSummary::from_records(
            discussion_id.as_str(),
            records.len(),
            &records,
        )),
        None => {
            for record in &records {
                print_json(record)?;
            }
            Ok(())
        }
    }
}
