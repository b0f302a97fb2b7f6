//! Closed-value enum catalog commands

use colored::Colorize;
use rds_model::catalog::{self, EnumEntry};
use serde_json::{Value, json};

use crate::cli::{self, EnumCommands};
use crate::connection::ConnectionManager;
use crate::error::{RdsCtlError, Result as CliResult};
use crate::output::{self, OutputFormat};

fn find_enum(name: &str) -> CliResult<EnumEntry> {
    catalog::find(name).ok_or_else(|| RdsCtlError::UnknownEnum {
        name: name.to_string(),
    })
}

/// Strictness of `enums check`: the flag, else the resolved profile's setting
fn strict_mode(conn_mgr: &ConnectionManager, profile_name: Option<&str>, flag: bool) -> bool {
    flag || conn_mgr
        .resolve_profile(profile_name)
        .map(|(_, profile)| profile.strict_enums)
        .unwrap_or(false)
}

pub fn handle_enums_command(
    cmd: &EnumCommands,
    conn_mgr: &ConnectionManager,
    profile_name: Option<&str>,
    output_format: cli::OutputFormat,
    query: Option<&str>,
) -> CliResult<()> {
    match cmd {
        EnumCommands::List => {
            let entries: Vec<Value> = catalog::enums()
                .iter()
                .map(|entry| {
                    json!({
                        "name": entry.name,
                        "kind": entry.kind,
                        "values": entry.values().len(),
                    })
                })
                .collect();
            let format = OutputFormat::resolve(output_format, OutputFormat::Table);
            output::print_output(entries, format, query)?;
        }
        EnumCommands::Show { name } => {
            let entry = find_enum(name)?;
            match output_format {
                cli::OutputFormat::Auto => {
                    println!("{} ({})", entry.name.bold(), entry.kind);
                    for value in entry.values() {
                        println!("  {}", value);
                    }
                }
                _ => {
                    let format = OutputFormat::resolve(output_format, OutputFormat::Json);
                    let data = json!({
                        "name": entry.name,
                        "kind": entry.kind,
                        "values": entry.values(),
                    });
                    output::print_output(data, format, query)?;
                }
            }
        }
        EnumCommands::Check {
            name,
            value,
            strict,
        } => {
            let entry = find_enum(name)?;
            let strict = strict_mode(conn_mgr, profile_name, *strict);
            let check = entry.check(value.as_bytes(), strict)?;
            match output_format {
                cli::OutputFormat::Auto => {
                    if check.known {
                        println!(
                            "{} {} is a registered {}",
                            "\u{2713}".green(),
                            check.value,
                            entry.name
                        );
                    } else {
                        println!(
                            "{} {} is not registered in {}; kept as an unknown value",
                            "!".yellow(),
                            check.value,
                            entry.name
                        );
                    }
                }
                _ => {
                    let format = OutputFormat::resolve(output_format, OutputFormat::Json);
                    let data = json!({
                        "enum": entry.name,
                        "value": check.value,
                        "known": check.known,
                        "strict": strict,
                    });
                    output::print_output(data, format, query)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rds_core::{Config, Profile};

    #[test]
    fn test_strict_mode_follows_profile() {
        let mut config = Config::default();
        let mut strict = Profile::new("cn-north-4", "p-1");
        strict.strict_enums = true;
        config.set_profile("strict".to_string(), strict);
        config.set_profile("lenient".to_string(), Profile::new("cn-north-4", "p-2"));

        let conn_mgr = ConnectionManager::with_config_path(config, None);
        assert!(strict_mode(&conn_mgr, Some("strict"), false));
        assert!(!strict_mode(&conn_mgr, Some("lenient"), false));
        assert!(strict_mode(&conn_mgr, Some("lenient"), true));
        assert!(!strict_mode(&conn_mgr, Some("missing"), false));
    }

    #[test]
    fn test_find_enum() {
        assert_eq!(find_enum("jobstatus").unwrap().name, "JobStatus");
        assert!(matches!(
            find_enum("Weather"),
            Err(RdsCtlError::UnknownEnum { .. })
        ));
    }
}
