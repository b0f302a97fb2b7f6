use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, shells};
use rds_core::{Config, RetryConfig};
use tracing::{debug, error, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod connection;
mod error;
mod output;

use cli::{Cli, Commands};
use connection::ConnectionManager;
use error::RdsCtlError;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let (config, config_path) = if let Some(config_file) = &cli.config_file {
        let path = std::path::PathBuf::from(config_file);
        debug!("Loading config from explicit path: {:?}", path);
        match Config::load_from_path(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => exit_with(RdsCtlError::from(e)),
        }
    } else {
        debug!("Loading config from default location");
        match Config::load() {
            Ok(config) => (config, None),
            Err(e) => exit_with(RdsCtlError::from(e)),
        }
    };

    let mut conn_mgr =
        ConnectionManager::with_config_path(config, config_path).with_retry(retry_override(&cli));

    if let Err(e) = execute_command(&cli, &mut conn_mgr).await {
        exit_with(e);
    }

    Ok(())
}

fn exit_with(err: RdsCtlError) -> ! {
    err.print_diagnostic();
    std::process::exit(1);
}

/// Retry policy from the global flags, if any overrides the profile's
fn retry_override(cli: &Cli) -> Option<RetryConfig> {
    if cli.no_retry {
        return Some(RetryConfig::disabled());
    }
    cli.retry_attempts.map(|max_attempts| RetryConfig {
        max_attempts,
        ..RetryConfig::default()
    })
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "rdsctl=warn,rds_core=warn",
            1 => "rdsctl=info,rds_core=info",
            2 => "rdsctl=debug,rds_core=debug",
            _ => "rdsctl=trace,rds_core=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

async fn execute_command(cli: &Cli, conn_mgr: &mut ConnectionManager) -> Result<(), RdsCtlError> {
    let described = format_command(&cli.command);
    trace!("Executing command: {}", described);
    info!("Command: {}", described);

    let profile = cli.profile.as_deref();
    let query = cli.query.as_deref();

    let start = std::time::Instant::now();
    let result = match &cli.command {
        Commands::Version => {
            debug!("Showing version information");
            match cli.output {
                cli::OutputFormat::Json | cli::OutputFormat::Yaml => {
                    let output_data = serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "name": env!("CARGO_PKG_NAME"),
                    });
                    let format =
                        output::OutputFormat::resolve(cli.output, output::OutputFormat::Json);
                    output::print_output(&output_data, format, None)?;
                }
                _ => {
                    println!("rdsctl {}", env!("CARGO_PKG_VERSION"));
                }
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            debug!("Generating completions for {:?}", shell);
            generate_completions(*shell);
            Ok(())
        }
        Commands::Profile(profile_cmd) => {
            commands::profile::handle_profile_command(profile_cmd, conn_mgr, cli.output)
        }
        Commands::Ops(ops_cmd) => commands::ops::handle_ops_command(ops_cmd, cli.output, query),
        Commands::Request { operation, data } => commands::ops::handle_request(
            conn_mgr,
            profile,
            operation,
            data.as_deref(),
            cli.output,
            query,
        ),
        Commands::Call {
            operation,
            data,
            wait,
        } => {
            commands::ops::handle_call(
                conn_mgr,
                profile,
                operation,
                data.as_deref(),
                wait,
                cli.output,
                query,
            )
            .await
        }
        Commands::Decode {
            operation,
            request,
            data,
        } => commands::ops::handle_decode(operation, *request, data.as_deref()),
        Commands::Enums(enum_cmd) => {
            commands::enums::handle_enums_command(enum_cmd, conn_mgr, profile, cli.output, query)
        }
        Commands::Regions => commands::region::handle_regions(cli.output, query),
        Commands::Job(job_cmd) => {
            commands::job::handle_job_command(job_cmd, conn_mgr, profile, cli.output, query).await
        }
        Commands::SlowLog(slowlog_cmd) => {
            commands::slowlog::handle_slowlog_command(
                slowlog_cmd,
                conn_mgr,
                profile,
                cli.output,
                query,
            )
            .await
        }
    };

    let duration = start.elapsed();
    match &result {
        Ok(_) => info!("Command completed successfully in {:?}", duration),
        Err(e) => error!("Command failed after {:?}: {}", duration, e),
    }

    result
}

/// Generate shell completions
fn generate_completions(shell: cli::Shell) {
    let mut cmd = cli::Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        cli::Shell::Bash => generate(shells::Bash, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Zsh => generate(shells::Zsh, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::Fish => generate(shells::Fish, &mut cmd, name, &mut std::io::stdout()),
        cli::Shell::PowerShell => {
            generate(shells::PowerShell, &mut cmd, name, &mut std::io::stdout())
        }
        cli::Shell::Elvish => generate(shells::Elvish, &mut cmd, name, &mut std::io::stdout()),
    }
}

/// Format command for human-readable logging (without sensitive data)
fn format_command(command: &Commands) -> String {
    match command {
        Commands::Version => "version".to_string(),
        Commands::Completions { shell } => format!("completions {:?}", shell),
        Commands::Profile(cmd) => {
            use cli::ProfileCommands::*;
            match cmd {
                List => "profile list".to_string(),
                Path => "profile path".to_string(),
                Show { name } => format!("profile show {}", name),
                Set { name, .. } => format!("profile set {} [credentials redacted]", name),
                Remove { name, .. } => format!("profile remove {}", name),
                Default { name } => format!("profile default {}", name),
            }
        }
        Commands::Ops(cmd) => format!("ops {:?}", cmd),
        Commands::Request { operation, .. } => format!("request {}", operation),
        Commands::Call { operation, .. } => format!("call {}", operation),
        Commands::Decode {
            operation, request, ..
        } => format!(
            "decode {} ({})",
            operation,
            if *request { "request" } else { "response" }
        ),
        Commands::Enums(cmd) => format!("enums {:?}", cmd),
        Commands::Regions => "regions".to_string(),
        Commands::Job(cmd) => format!("job {:?}", cmd),
        Commands::SlowLog(cmd) => format!("slowlog {:?}", cmd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rdsctl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn retry_flags_override_profile() {
        assert_eq!(retry_override(&parse(&["regions"])), None);
        assert_eq!(
            retry_override(&parse(&["--no-retry", "regions"])),
            Some(RetryConfig::disabled())
        );
        let retry = retry_override(&parse(&["--retry-attempts", "7", "regions"])).unwrap();
        assert_eq!(retry.max_attempts, 7);
    }

    #[test]
    fn format_command_redacts_tokens() {
        let cli = parse(&[
            "profile",
            "set",
            "prod",
            "--region",
            "cn-north-4",
            "--project-id",
            "p-1",
            "--auth-token",
            "secret-token",
        ]);
        let formatted = format_command(&cli.command);
        assert!(!formatted.contains("secret-token"));
        assert!(formatted.contains("redacted"));
    }
}
