use anyhow::Context;
use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum SetupCommands {
    #[command(about = "Ask a running server whether initial setup has completed")]
    Status {
        #[arg(long, env = "BIZADMIN_URL", default_value = "http://localhost:3000", help = "Server base URL")]
        url: String,
    },
}

pub async fn handle(cmd: SetupCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        SetupCommands::Status { url } => {
            let endpoint = format!("{}/api/auth/setup", url.trim_end_matches('/'));
            let response = reqwest::get(&endpoint)
                .await
                .with_context(|| format!("failed to reach {}", endpoint))?;

            if !response.status().is_success() {
                anyhow::bail!("{} returned {}", endpoint, response.status());
            }

            let complete: bool = response
                .json()
                .await
                .context("setup endpoint did not return a boolean")?;

            match output_format {
                OutputFormat::Json => output_success(output_format, "Setup status", Some(json!({ "setup": complete }))),
                OutputFormat::Text => {
                    println!("{}", complete);
                    Ok(())
                }
            }
        }
    }
}
