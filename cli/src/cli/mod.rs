pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "convai-console")]
#[command(
    author,
    version,
    about = "ConvAI console - same-origin proxy for the ElevenLabs Conversational AI API"
)]
pub struct Cli {
    /// Path to config file (checked in order: local config.toml, ~/.config/convai-console/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the proxy server
    Start {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show proxy status
    Status,
}
