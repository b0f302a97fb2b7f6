//! Generic access to API operations by name

use std::time::Duration;

use rds_core::operations::{self, OperationEntry};
use rds_core::request::PreparedRequest;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::{read_input, read_json};
use crate::cli::{self, OpsCommands, WaitArgs};
use crate::connection::ConnectionManager;
use crate::error::{RdsCtlError, Result as CliResult};
use crate::output::{self, OutputFormat};

/// Look an operation up, with a hint when only the case differs
pub fn find_operation(name: &str) -> CliResult<OperationEntry> {
    if let Some(entry) = operations::find(name) {
        return Ok(entry);
    }
    let near = operations::catalog()
        .into_iter()
        .find(|entry| entry.def.name.eq_ignore_ascii_case(name));
    Err(match near {
        Some(entry) => RdsCtlError::InvalidInput {
            message: format!(
                "unknown operation '{name}'; did you mean '{}'?",
                entry.def.name
            ),
        },
        None => RdsCtlError::UnknownOperation {
            name: name.to_string(),
        },
    })
}

fn entry_json(entry: &OperationEntry) -> Value {
    json!({
        "name": entry.def.name,
        "group": entry.group,
        "method": entry.def.method,
        "path": entry.def.path,
        "request_type": entry.request_type,
        "response_type": entry.response_type,
    })
}

pub fn handle_ops_command(
    cmd: &OpsCommands,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    match cmd {
        OpsCommands::List { group } => {
            let entries: Vec<Value> = operations::catalog()
                .iter()
                .filter(|entry| group.as_deref().is_none_or(|g| entry.group == g))
                .map(|entry| {
                    json!({
                        "name": entry.def.name,
                        "group": entry.group,
                        "method": entry.def.method,
                        "path": entry.def.path,
                    })
                })
                .collect();
            if entries.is_empty()
                && let Some(group) = group
            {
                return Err(RdsCtlError::InvalidInput {
                    message: format!("no operations in group '{group}'"),
                });
            }
            let format = OutputFormat::resolve(output_format, OutputFormat::Table);
            output::print_output(entries, format, query)?;
        }
        OpsCommands::Show { name } => {
            let entry = find_operation(name)?;
            let format = OutputFormat::resolve(output_format, OutputFormat::Table);
            output::print_output(entry_json(&entry), format, query)?;
        }
    }
    Ok(())
}

fn print_prepared(
    prepared: &PreparedRequest,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    match output_format {
        cli::OutputFormat::Auto => {
            println!("{} {}", prepared.method, prepared.url);
            for (name, value) in &prepared.headers {
                println!("{}: {}", name, value);
            }
            if let Some(body) = &prepared.body {
                println!();
                println!("{}", serde_json::to_string_pretty(body)?);
            }
        }
        _ => {
            let format = OutputFormat::resolve(output_format, OutputFormat::Json);
            output::print_output(prepared, format, query)?;
        }
    }
    Ok(())
}

/// `rdsctl request`: render without sending
pub fn handle_request(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    operation: &str,
    data: Option<&str>,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let entry = find_operation(operation)?;
    let input = read_json(data)?;

    let (name, profile) = conn_mgr.resolve_profile(profile_name)?;
    debug!("Preparing {} with profile {}", entry.def.name, name);
    let endpoint = profile
        .endpoint()
        .ok_or_else(|| rds_core::CoreError::UnknownRegion(profile.region.clone()))?;

    let mut prepared = entry.prepare_json(&endpoint, &profile.project_id, input)?;
    if prepared.header("X-Language").is_none()
        && let Some(language) = &profile.language
    {
        prepared
            .headers
            .insert(0, ("X-Language".to_string(), language.value().to_string()));
    }

    print_prepared(&prepared, output_format, query)
}

/// `rdsctl call`: send and print the response
pub async fn handle_call(
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    operation: &str,
    data: Option<&str>,
    wait: &WaitArgs,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    let entry = find_operation(operation)?;
    let input = read_json(data)?;
    let client = conn_mgr.create_client(profile_name)?;

    info!("Calling {}", entry.def.name);
    let output = entry.invoke_json(&client, input).await?;
    debug!(status = output.http_status_code, "Call returned");

    let format = OutputFormat::resolve(output_format, OutputFormat::Json);
    let job_id = output
        .body
        .get("job_id")
        .and_then(Value::as_str)
        .map(str::to_string);

    match job_id {
        Some(job_id) if wait.wait => {
            super::job::wait_with_spinner(
                &client,
                &job_id,
                Duration::from_secs(wait.wait_timeout),
                Duration::from_secs(wait.wait_interval),
                output_format,
                query,
            )
            .await
        }
        Some(job_id) => {
            output::print_output(&output.body, format, query)?;
            if output_format == cli::OutputFormat::Auto {
                eprintln!("To wait for completion, run: rdsctl job wait {}", job_id);
            }
            Ok(())
        }
        None => {
            output::print_output(&output.body, format, query)?;
            Ok(())
        }
    }
}

/// `rdsctl decode`: decode JSON text and print its description
pub fn handle_decode(operation: &str, as_request: bool, data: Option<&str>) -> CliResult<()> {
    let entry = find_operation(operation)?;
    let raw = read_input(data, None)?;
    let described = if as_request {
        entry.decode_request(raw.as_bytes())?
    } else {
        entry.decode_response(raw.as_bytes())?
    };
    println!("{}", described);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_operation_suggests_case() {
        assert_eq!(find_operation("ListInstances").unwrap().def.name, "ListInstances");

        let err = find_operation("listinstances").unwrap_err();
        assert!(err.to_string().contains("did you mean 'ListInstances'"));

        let err = find_operation("LaunchRocket").unwrap_err();
        assert!(matches!(err, RdsCtlError::UnknownOperation { .. }));
    }

    #[test]
    fn test_entry_json_fields() {
        let entry = find_operation("DeleteManualBackup").unwrap();
        let value = entry_json(&entry);
        assert_eq!(value["method"], "DELETE");
        assert_eq!(value["group"], "backup");
        assert_eq!(value["response_type"], "DeleteManualBackupResponse");
    }
}
