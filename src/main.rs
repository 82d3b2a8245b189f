//! # VedaBot — Vedic knowledge chat bot
//!
//! Usage:
//!   vedabot                         # Run the Telegram bot (needs TELEGRAM_BOT_TOKEN)
//!   vedabot chat                    # Chat with the bot in the terminal
//!   vedabot ask "What is Karma?"    # Print one answer and exit
//!   vedabot terms                   # List known terms

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vedabot_agent::Agent;
use vedabot_channels::{CliChannel, TelegramChannel};
use vedabot_core::config::{TOKEN_ENV, VedaBotConfig};
use vedabot_core::error::VedaBotError;
use vedabot_core::traits::Channel;

#[derive(Parser)]
#[command(
    name = "vedabot",
    version,
    about = "🕉️ VedaBot — answers questions about Vedic philosophy"
)]
struct Cli {
    /// Config file (default: ~/.vedabot/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the Telegram bot (default)
    Run,
    /// Chat with the bot in this terminal
    Chat,
    /// Answer a single question and exit
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List the terms in the knowledge base
    Terms,
}

fn load_config(path: Option<&str>) -> Result<VedaBotConfig> {
    let config = match path {
        Some(p) => {
            let expanded = shellexpand::tilde(p).to_string();
            VedaBotConfig::load_from(std::path::Path::new(&expanded))?
        }
        None => VedaBotConfig::load()?,
    };
    Ok(config)
}

fn print_token_help() {
    eprintln!("⚠️  ERROR: Please set your Telegram Bot Token!");
    eprintln!("You can set it as an environment variable:");
    eprintln!("export {TOKEN_ENV}='your_bot_token_here'");
    eprintln!(
        "\nOr add it to {} under [telegram] bot_token",
        VedaBotConfig::default_path().display()
    );
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Bot stopped by user");
}

async fn run_telegram(config: &VedaBotConfig) -> Result<ExitCode> {
    let token = match config.bot_token() {
        Ok(token) => token,
        Err(VedaBotError::MissingCredential(var)) => {
            tracing::error!("No bot token provided! Please set {var} environment variable.");
            print_token_help();
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    let mut channel = TelegramChannel::new(token, &config.telegram);
    tracing::info!("Starting Vedas Bot...");
    channel.connect().await?;

    let agent = Agent::from_config(config).with_bot_username(channel.bot_username());
    agent.run_until(&channel, shutdown_signal()).await?;
    channel.disconnect().await?;
    Ok(ExitCode::SUCCESS)
}

async fn run_chat(config: &VedaBotConfig) -> Result<ExitCode> {
    let mut channel = CliChannel::new();
    channel.connect().await?;

    println!(
        "🕉️ VedaBot v{} — type a question, or 'exit' to quit.\n",
        env!("CARGO_PKG_VERSION")
    );
    let agent = Agent::from_config(config);
    agent.run_until(&channel, shutdown_signal()).await?;
    channel.disconnect().await?;
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "vedabot=debug,vedabot_agent=debug,vedabot_channels=debug,vedabot_core=debug"
    } else {
        "vedabot=info,vedabot_agent=info,vedabot_channels=info,vedabot_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => run_telegram(&config).await,
        Command::Chat => run_chat(&config).await,
        Command::Ask { query } => {
            let agent = Agent::from_config(&config);
            println!("{}", agent.matcher().answer(&query.join(" ")));
            Ok(ExitCode::SUCCESS)
        }
        Command::Terms => {
            for entry in vedabot_knowledge::entries() {
                println!("{:<12} {}", entry.term, entry.summary);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
