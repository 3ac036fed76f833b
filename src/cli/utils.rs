use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(data_value) = data {
                response["data"] = data_value;
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            if let Some(data_value) = data {
                println!("{}", serde_json::to_string_pretty(&data_value)?);
            }
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: OutputFormat,
    message: &str,
    field_errors: Option<&Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(fields) = field_errors {
                response["field_errors"] = fields.clone();
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("✗ {}", message);
            if let Some(Value::Object(fields)) = field_errors {
                for (field, msg) in fields {
                    eprintln!("  {}: {}", field, msg.as_str().unwrap_or_default());
                }
            }
        }
    }
    Ok(())
}
