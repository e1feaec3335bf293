use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tickerline_core::{AppConfig, Speed};

mod commands;

#[derive(Parser)]
#[command(name = "tickerline")]
#[command(author, version, about = "A marquee scrolling effect for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to scroll (shorthand for `run --text`)
    #[arg(short = 't', long = "text")]
    text: Option<String>,

    /// Scroll speed: slow, medium or fast (used with -t)
    #[arg(short = 's', long = "speed")]
    speed: Option<Speed>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the marquee demo
    Run {
        /// Text to scroll
        #[arg(short = 't', long)]
        text: Option<String>,
        /// Scroll speed: slow, medium or fast
        #[arg(short = 's', long)]
        speed: Option<Speed>,
        /// Treat the source as block-level (full-width viewport)
        #[arg(long)]
        block: bool,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    Init,
}

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Handle commands
    match cli.command {
        Some(Commands::Run { text, speed, block }) => commands::run::run(&config, text, speed, block),
        None => commands::run::run(&config, cli.text, cli.speed, false),
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(),
            ConfigAction::Init => commands::config::init(&config),
        },
    }
}
