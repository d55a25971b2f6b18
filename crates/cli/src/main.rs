use clap::{Parser, Subcommand};

mod commands;

use commands::{AnalyzeArgs, IndicatorsArgs, ScoreArgs};
use news_alpha_core::ConfigLoader;

#[derive(Parser)]
#[command(name = "news-alpha")]
#[command(about = "Correlate financial news sentiment with daily stock returns", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true, default_value = "config/Config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score headlines, join them with daily returns, and report correlation
    Analyze(AnalyzeArgs),
    /// Print the sentiment score of individual headlines
    Score(ScoreArgs),
    /// Add technical indicators and financial metrics to a price table
    Indicators(IndicatorsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::load_from(&cli.config)?;

    match cli.command {
        Commands::Analyze(args) => commands::run_analyze(args, &config)?,
        Commands::Score(args) => commands::run_score(args)?,
        Commands::Indicators(args) => commands::run_indicators(args, &config)?,
    }

    Ok(())
}
