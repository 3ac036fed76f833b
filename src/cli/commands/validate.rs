use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::validation::{
    CategoryUpdate, NewCategory, NewProduct, NewSupplier, NewTask, ProductUpdate, ProfileUpdate, SignIn,
    SupplierUpdate, TaskUpdate, Validated, ValidationFailure,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityArg {
    Category,
    Product,
    Supplier,
    Task,
    Auth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    Create,
    Update,
    Signin,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(value_enum, help = "Entity whose schema to apply")]
    pub entity: EntityArg,

    #[arg(value_enum, help = "Operation shape (create/update, or signin/update for auth)")]
    pub operation: OperationArg,

    #[arg(long, help = "Read payload from file instead of stdin")]
    pub file: Option<PathBuf>,
}

pub fn handle(args: ValidateArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let input: Value = serde_json::from_str(&raw).context("payload is not valid JSON")?;

    match validate(args.entity, args.operation, &input)? {
        Ok(accepted) => output_success(output_format, "Payload accepted", Some(accepted)),
        Err(failure) => {
            let fields = serde_json::to_value(&failure.fields)?;
            let message = failure.form.clone().unwrap_or_else(|| "Payload rejected".to_string());
            output_error(output_format, &message, Some(&fields))?;
            anyhow::bail!("{}", failure)
        }
    }
}

/// Run the schema for (entity, operation); the outer error is for
/// combinations that have no schema.
pub fn validate(
    entity: EntityArg,
    operation: OperationArg,
    input: &Value,
) -> anyhow::Result<Result<Value, ValidationFailure>> {
    use EntityArg::*;
    use OperationArg::*;

    match (entity, operation) {
        (Category, Create) => check::<NewCategory>(input),
        (Category, Update) => check::<CategoryUpdate>(input),
        (Product, Create) => check::<NewProduct>(input),
        (Product, Update) => check::<ProductUpdate>(input),
        (Supplier, Create) => check::<NewSupplier>(input),
        (Supplier, Update) => check::<SupplierUpdate>(input),
        (Task, Create) => check::<NewTask>(input),
        (Task, Update) => check::<TaskUpdate>(input),
        (Auth, Signin) => check::<SignIn>(input),
        (Auth, Update) => check::<ProfileUpdate>(input),
        (entity, operation) => anyhow::bail!("no {:?} schema for {:?}", operation, entity),
    }
}

fn check<T: Validated + Serialize>(input: &Value) -> anyhow::Result<Result<Value, ValidationFailure>> {
    match T::validate(input) {
        Ok(typed) => Ok(Ok(serde_json::to_value(typed)?)),
        Err(failure) => Ok(Err(failure)),
    }
}
