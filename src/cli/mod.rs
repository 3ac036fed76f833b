pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "bizadmin")]
#[command(about = "Business Admin CLI - payload validation and server probes")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Validate a JSON payload against an entity schema")]
    Validate(commands::validate::ValidateArgs),

    #[command(about = "Initial setup status")]
    Setup {
        #[command(subcommand)]
        cmd: commands::setup::SetupCommands,
    },

    #[command(about = "Session token utilities")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Validate(args) => commands::validate::handle(args, output_format),
        Commands::Setup { cmd } => commands::setup::handle(cmd, output_format).await,
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format),
    }
}
