//! Profile management command implementations

use std::io::{self, BufRead, Write};

use colored::Colorize;
use rds_core::Config;
use rds_core::Profile;
use rds_core::config::CredentialStore;
use rds_core::region;
use rds_model::model::common::Language;
use serde_json::json;
use tracing::{debug, trace, warn};

use crate::cli::{self, ProfileCommands};
use crate::connection::ConnectionManager;
use crate::error::{RdsCtlError, Result as CliResult};
use crate::output::{self, OutputFormat};

/// Handle profile management commands
pub fn handle_profile_command(
    profile_cmd: &ProfileCommands,
    conn_mgr: &mut ConnectionManager,
    output_format: cli::OutputFormat,
) -> CliResult<()> {
    use ProfileCommands::*;

    match profile_cmd {
        List => handle_list(conn_mgr, output_format),
        Path => handle_path(conn_mgr, output_format),
        Show { name } => handle_show(conn_mgr, name, output_format),
        Set {
            name,
            region,
            project_id,
            endpoint,
            auth_token,
            language,
            strict_enums,
            #[cfg(feature = "secure-storage")]
            use_keyring,
        } => {
            let mut profile = Profile::new(region.as_str(), project_id.as_str());
            profile.endpoint = endpoint.clone();
            profile.auth_token = auth_token.clone();
            profile.language = language.as_deref().map(Language::from_value);
            profile.strict_enums = *strict_enums;
            #[cfg(feature = "secure-storage")]
            let use_keyring = *use_keyring;
            #[cfg(not(feature = "secure-storage"))]
            let use_keyring = false;
            handle_set(conn_mgr, name, profile, use_keyring)
        }
        Remove { name, force } => handle_remove(conn_mgr, name, *force),
        Default { name } => handle_default(conn_mgr, name),
    }
}

fn config_path_display(conn_mgr: &ConnectionManager) -> Option<String> {
    conn_mgr
        .config_path
        .clone()
        .or_else(|| Config::config_path().ok())
        .map(|p| p.display().to_string())
}

/// Token as shown to the user; inline tokens are masked
fn masked_token(token: &str) -> String {
    if CredentialStore::is_keyring_reference(token) {
        return token.to_string();
    }
    let tail: String = token
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if token.chars().count() <= 8 {
        "****".to_string()
    } else {
        format!("****{tail}")
    }
}

fn profile_json(name: &str, profile: &Profile, is_default: bool) -> serde_json::Value {
    let mut obj = json!({
        "name": name,
        "region": profile.region,
        "project_id": profile.project_id,
        "endpoint": profile.endpoint(),
        "is_default": is_default,
    });
    if let Some(token) = &profile.auth_token {
        obj["auth_token"] = json!(masked_token(token));
    }
    if let Some(language) = &profile.language {
        obj["language"] = json!(language.value());
    }
    if profile.strict_enums {
        obj["strict_enums"] = json!(true);
    }
    if let Some(retry) = &profile.retry {
        obj["retry"] = json!(retry);
    }
    obj
}

fn handle_list(conn_mgr: &ConnectionManager, output_format: cli::OutputFormat) -> CliResult<()> {
    debug!("Listing all configured profiles");
    let profiles = conn_mgr.config.list_profiles();
    let default = conn_mgr.config.default_profile.as_deref();
    trace!("Found {} profiles", profiles.len());

    match output_format {
        cli::OutputFormat::Auto => {
            if profiles.is_empty() {
                println!("No profiles configured.");
                println!("Use 'rdsctl profile set' to create a profile.");
                return Ok(());
            }
            for (name, profile) in profiles {
                if default == Some(name.as_str()) {
                    println!("{} {}", name.bold().cyan(), "(default)".green());
                } else {
                    println!("{}", name.bold().cyan());
                }
                println!(
                    "    {} {}  {} {}",
                    "Region:".dimmed(),
                    profile.region,
                    "Project:".dimmed(),
                    profile.project_id
                );
                match profile.endpoint() {
                    Some(endpoint) => println!("    {} {}", "Endpoint:".dimmed(), endpoint),
                    None => println!(
                        "    {} {}",
                        "Endpoint:".dimmed(),
                        "unknown region, set --endpoint".yellow()
                    ),
                }
            }
        }
        _ => {
            let list: Vec<_> = profiles
                .iter()
                .map(|(name, profile)| profile_json(name, profile, default == Some(name.as_str())))
                .collect();
            let format = OutputFormat::resolve(output_format, OutputFormat::Json);
            let data = if format == OutputFormat::Table {
                json!(list)
            } else {
                json!({
                    "config_path": config_path_display(conn_mgr),
                    "profiles": list,
                })
            };
            output::print_output(data, format, None)?;
        }
    }

    Ok(())
}

fn handle_path(conn_mgr: &ConnectionManager, output_format: cli::OutputFormat) -> CliResult<()> {
    let config_path = config_path_display(conn_mgr).ok_or(RdsCtlError::Configuration(
        "Failed to determine config directory".to_string(),
    ))?;

    match output_format {
        cli::OutputFormat::Json | cli::OutputFormat::Yaml => {
            let format = OutputFormat::resolve(output_format, OutputFormat::Json);
            output::print_output(json!({ "config_path": config_path }), format, None)?;
        }
        _ => println!("{}", config_path),
    }
    Ok(())
}

fn handle_show(
    conn_mgr: &ConnectionManager,
    name: &str,
    output_format: cli::OutputFormat,
) -> CliResult<()> {
    let profile = conn_mgr.config.profile(name)?;
    let is_default = conn_mgr.config.default_profile.as_deref() == Some(name);
    let data = profile_json(name, profile, is_default);

    match output_format {
        cli::OutputFormat::Auto => {
            println!("{}", "Profile:".bold());
            println!("  Name: {}", name);
            println!("  Region: {}", profile.region);
            println!("  Project ID: {}", profile.project_id);
            println!(
                "  Endpoint: {}",
                profile.endpoint().unwrap_or_else(|| "-".to_string())
            );
            if let Some(token) = &profile.auth_token {
                println!("  Auth token: {}", masked_token(token));
            } else {
                println!("  Auth token: from {}", rds_core::config::AUTH_TOKEN_ENV);
            }
            if let Some(language) = &profile.language {
                println!("  Language: {}", language);
            }
            if profile.strict_enums {
                println!("  Strict enums: yes");
            }
            let retry = profile.retry_config();
            println!(
                "  Retry: {} attempts, {}ms backoff",
                retry.attempts(),
                retry.backoff_ms
            );
            if is_default {
                println!("  Default: {}", "yes".green());
            }
        }
        _ => {
            let format = OutputFormat::resolve(output_format, OutputFormat::Json);
            output::print_output(data, format, None)?;
        }
    }
    Ok(())
}

fn handle_set(
    conn_mgr: &mut ConnectionManager,
    name: &str,
    mut profile: Profile,
    use_keyring: bool,
) -> CliResult<()> {
    debug!("Setting profile: {}", name);

    if profile.endpoint.is_none() && !region::is_known_region(&profile.region) {
        return Err(RdsCtlError::InvalidInput {
            message: format!(
                "unknown region '{}'; pass --endpoint or use one of: {}",
                profile.region,
                region::REGIONS.join(", ")
            ),
        });
    }

    if use_keyring && let Some(token) = profile.auth_token.take() {
        let key = format!("{name}-auth-token");
        let reference = CredentialStore::new().store_credential(&key, &token)?;
        if !CredentialStore::is_keyring_reference(&reference) {
            warn!("Keyring unavailable, storing token in the config file");
        }
        profile.auth_token = Some(reference);
    }

    if let Some(previous) = conn_mgr.config.profiles.get(name)
        && let Some(old_token) = &previous.auth_token
        && profile.auth_token.as_ref() != Some(old_token)
        && let Err(e) = CredentialStore::new().delete_credential(old_token)
    {
        warn!("Failed to remove old keyring entry: {}", e);
    }

    let first_profile = conn_mgr.config.profiles.is_empty();
    conn_mgr.config.set_profile(name.to_string(), profile);
    if first_profile {
        conn_mgr.config.default_profile = Some(name.to_string());
    }
    conn_mgr.save_config()?;

    println!("Profile '{}' saved.", name);
    if first_profile {
        println!("Set as the default profile.");
    }
    Ok(())
}

fn confirm(prompt: &str) -> CliResult<bool> {
    print!("{prompt} (y/N): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}

fn handle_remove(conn_mgr: &mut ConnectionManager, name: &str, force: bool) -> CliResult<()> {
    debug!("Removing profile: {}", name);

    if !conn_mgr.config.profiles.contains_key(name) {
        return Err(RdsCtlError::ProfileNotFound { name: name.into() });
    }

    let is_default = conn_mgr.config.default_profile.as_deref() == Some(name);
    if is_default {
        println!("Warning: '{}' is the default profile.", name);
    }

    if !force && !confirm(&format!("Are you sure you want to remove profile '{name}'?"))? {
        println!("Profile removal cancelled.");
        return Ok(());
    }

    if let Some(profile) = conn_mgr.config.remove_profile(name)
        && let Some(token) = &profile.auth_token
        && let Err(e) = CredentialStore::new().delete_credential(token)
    {
        warn!("Failed to remove keyring entry: {}", e);
    }
    conn_mgr.save_config()?;

    if is_default {
        println!("Default profile cleared.");
    }
    println!("Profile '{}' removed successfully.", name);
    Ok(())
}

fn handle_default(conn_mgr: &mut ConnectionManager, name: &str) -> CliResult<()> {
    debug!("Setting default profile: {}", name);

    if !conn_mgr.config.profiles.contains_key(name) {
        return Err(RdsCtlError::ProfileNotFound { name: name.into() });
    }

    conn_mgr.config.default_profile = Some(name.to_string());
    conn_mgr.save_config()?;

    println!("Default profile set to '{}'.", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_token() {
        assert_eq!(masked_token("short"), "****");
        assert_eq!(masked_token("MIIZgAYJKoZIhvcNAQcCoIIZ"), "****oIIZ");
        assert_eq!(masked_token("keyring:prod-auth-token"), "keyring:prod-auth-token");
    }

    #[test]
    fn test_profile_json_hides_inline_token() {
        let mut profile = Profile::new("cn-north-4", "p-1");
        profile.auth_token = Some("MIIZgAYJKoZIhvcNAQcCoIIZ".to_string());
        let value = profile_json("prod", &profile, true);
        assert_eq!(value["auth_token"], "****oIIZ");
        assert_eq!(value["endpoint"], "https://rds.cn-north-4.myhuaweicloud.com");
        assert_eq!(value["is_default"], true);
        assert!(value.get("strict_enums").is_none());
    }
}
