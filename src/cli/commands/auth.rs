use clap::{Subcommand, ValueEnum};
use serde_json::json;
use uuid::Uuid;

use crate::auth::{generate_jwt, Claims, Role, SessionUser};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Admin,
    User,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Mint a session token signed with the configured JWT_SECRET")]
    Token {
        #[arg(long, help = "User id (random when omitted)")]
        id: Option<Uuid>,
        #[arg(long, help = "User email")]
        email: Option<String>,
        #[arg(long, help = "Display name")]
        name: Option<String>,
        #[arg(long, value_enum, default_value = "user")]
        role: RoleArg,
    },
}

pub fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Token { id, email, name, role } => {
            let user = SessionUser {
                id: id.unwrap_or_else(Uuid::new_v4),
                name,
                email,
                image: None,
                role: role.into(),
            };
            let claims = Claims::new(&user);
            let token = generate_jwt(&claims)?;

            match output_format {
                OutputFormat::Json => output_success(
                    output_format,
                    "Token issued",
                    Some(json!({ "token": token, "user": user, "exp": claims.exp })),
                ),
                OutputFormat::Text => {
                    println!("{}", token);
                    Ok(())
                }
            }
        }
    }
}
