//! CLI structure and command definitions
//!
//! Two layers:
//! 1. Generic access to every API operation by name (`ops`, `request`,
//!    `call`, `decode`)
//! 2. Workflows built on top of single calls (`job wait`, `slowlog collect`)

use clap::{Args, Parser, Subcommand};

/// Command-line client for the RDS v3 management API
#[derive(Parser, Debug)]
#[command(name = "rdsctl")]
#[command(version, about = "Command-line client for the RDS v3 management API")]
#[command(long_about = "
Command-line client for the RDS v3 management API

Every API operation is addressable by name. Requests are given as JSON in the
shape of the operation's request record:
    rdsctl call ListInstances --data '{\"limit\": 10}'
    rdsctl request DeleteManualBackup --data '{\"backup_id\": \"b-1\"}'

EXAMPLES:
    # Set up a profile
    rdsctl profile set prod --region cn-north-4 --project-id 0549b4a43100d4f32f51c01c2fe4acdb

    # Browse the operation catalog
    rdsctl ops list --group backup
    rdsctl ops show ListBackups

    # Decode a saved response body
    rdsctl decode ListInstances --data @instances.json

    # Wait for an asynchronous job
    rdsctl job wait 2b7d4fe9-3c1e-4a3c-9d0e-3f6f4a4f5a1b

For more help on a specific command, run:
    rdsctl <command> --help
")]
pub struct Cli {
    /// Profile to use for this command
    #[arg(long, short, global = true, env = "RDSCTL_PROFILE")]
    pub profile: Option<String>,

    /// Path to alternate configuration file
    #[arg(long, global = true, env = "RDSCTL_CONFIG_FILE")]
    pub config_file: Option<String>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// JMESPath query to filter JSON/YAML output
    #[arg(long, short = 'q', global = true)]
    pub query: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Send each request once, even if it is throttled
    #[arg(long, global = true)]
    pub no_retry: bool,

    /// Override the profile's retry attempts
    #[arg(long, global = true, conflicts_with = "no_retry")]
    pub retry_attempts: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table for listings, JSON for records
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Human-readable table format
    Table,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Profile management
    #[command(subcommand, visible_alias = "prof", visible_alias = "pr")]
    #[command(after_help = "EXAMPLES:
    # Create a profile using the region's default endpoint
    rdsctl profile set prod --region cn-north-4 --project-id 0549b4a43100d4f32f51c01c2fe4acdb

    # Point a profile at a private endpoint
    rdsctl profile set lab --region cn-north-4 --project-id p-1 \\
        --endpoint https://rds.internal.example.com

    # List all profiles
    rdsctl profile list

    # Set the default profile
    rdsctl profile default prod
")]
    Profile(ProfileCommands),

    /// Browse the operation catalog
    #[command(subcommand, visible_alias = "op")]
    Ops(OpsCommands),

    /// Render an operation's HTTP request without sending it
    #[command(visible_alias = "dry-run")]
    #[command(after_help = "EXAMPLES:
    rdsctl request ListInstances --data '{\"limit\": 10, \"type\": \"Ha\"}'
    rdsctl request DeleteDatabase --data @delete.json
")]
    Request {
        /// Operation name, e.g. ListInstances
        operation: String,

        /// Request record as JSON (string, @file or - for stdin)
        #[arg(long, short)]
        data: Option<String>,
    },

    /// Send an operation and print its response
    #[command(after_help = "EXAMPLES:
    rdsctl call ListInstances --data '{\"limit\": 10}'
    rdsctl call EnlargeVolume --data @enlarge.json --wait
")]
    Call {
        /// Operation name, e.g. ListInstances
        operation: String,

        /// Request record as JSON (string, @file or - for stdin)
        #[arg(long, short)]
        data: Option<String>,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Decode a JSON response (or request) and print its description
    Decode {
        /// Operation name, e.g. ListInstances
        operation: String,

        /// Decode as the operation's request record instead of its response
        #[arg(long)]
        request: bool,

        /// JSON text (string, @file or - for stdin); defaults to stdin
        #[arg(long, short)]
        data: Option<String>,
    },

    /// Closed-value enums and their registered literals
    #[command(subcommand)]
    Enums(EnumCommands),

    /// List known regions and their default endpoints
    Regions,

    /// Asynchronous job tracking
    #[command(subcommand)]
    Job(JobCommands),

    /// Slow query logs
    #[command(subcommand, name = "slowlog")]
    SlowLog(SlowLogCommands),

    /// Version information
    #[command(visible_alias = "ver", visible_alias = "v")]
    Version,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Friendly Interactive Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell", alias = "power-shell")]
    PowerShell,
    /// Elvish
    Elvish,
}

/// Arguments for waiting on the job a call starts
#[derive(Args, Debug, Clone)]
pub struct WaitArgs {
    /// Wait for the job in the response to finish
    #[arg(long)]
    pub wait: bool,

    /// Maximum time to wait in seconds
    #[arg(long, default_value = "1800", requires = "wait")]
    pub wait_timeout: u64,

    /// Polling interval in seconds
    #[arg(long, default_value = "10", requires = "wait")]
    pub wait_interval: u64,
}

/// Profile management commands
#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// List all configured profiles
    #[command(visible_alias = "ls", visible_alias = "l")]
    List,

    /// Show the path to the configuration file
    Path,

    /// Show details of a specific profile
    #[command(visible_alias = "sh", visible_alias = "get")]
    Show {
        /// Profile name to show
        name: String,
    },

    /// Set or create a profile
    #[command(visible_alias = "add", visible_alias = "create")]
    Set {
        /// Profile name
        name: String,

        /// Region id, e.g. cn-north-4
        #[arg(long)]
        region: String,

        /// Project id used in request paths
        #[arg(long)]
        project_id: String,

        /// Endpoint overriding the region default
        #[arg(long)]
        endpoint: Option<String>,

        /// IAM token (RDSCTL_AUTH_TOKEN is used when omitted)
        #[arg(long)]
        auth_token: Option<String>,

        /// Default X-Language header, e.g. en-us
        #[arg(long)]
        language: Option<String>,

        /// Reject enum values that are not registered
        #[arg(long)]
        strict_enums: bool,

        /// Store the token in the OS keyring instead of the config file
        #[cfg(feature = "secure-storage")]
        #[arg(long, requires = "auth_token")]
        use_keyring: bool,
    },

    /// Remove a profile
    #[command(visible_alias = "rm", visible_alias = "del", visible_alias = "delete")]
    Remove {
        /// Profile name to remove
        name: String,

        /// Do not ask for confirmation
        #[arg(long, short)]
        force: bool,
    },

    /// Set the default profile
    #[command(visible_alias = "def")]
    Default {
        /// Profile name to use by default
        name: String,
    },
}

/// Operation catalog commands
#[derive(Subcommand, Debug)]
pub enum OpsCommands {
    /// List operations
    #[command(visible_alias = "ls")]
    List {
        /// Only operations of this group, e.g. backup
        #[arg(long, short)]
        group: Option<String>,
    },

    /// Show method, path and types of an operation
    Show {
        /// Operation name
        name: String,
    },
}

/// Enum catalog commands
#[derive(Subcommand, Debug)]
pub enum EnumCommands {
    /// List closed-value enums
    #[command(visible_alias = "ls")]
    List,

    /// Show the registered literals of an enum
    Show {
        /// Enum type name, case-insensitive
        name: String,
    },

    /// Decode a raw value against an enum
    #[command(after_help = "EXAMPLES:
    rdsctl enums check InstanceStatus ACTIVE
    rdsctl enums check MonitorInterval 3 --strict
")]
    Check {
        /// Enum type name, case-insensitive
        name: String,

        /// Raw value, quoted or not
        value: String,

        /// Fail on unregistered values (defaults to the profile's strict_enums)
        #[arg(long)]
        strict: bool,
    },
}

/// Job commands
#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// Show a job once
    Get {
        /// Job id
        job_id: String,
    },

    /// Poll a job until it finishes
    Wait {
        /// Job id
        job_id: String,

        /// Maximum time to wait in seconds
        #[arg(long, default_value = "1800")]
        timeout: u64,

        /// Polling interval in seconds
        #[arg(long, default_value = "10")]
        interval: u64,
    },
}

/// Slow log commands
#[derive(Subcommand, Debug)]
pub enum SlowLogCommands {
    /// Fetch every slow query of an instance in a time window
    #[command(after_help = "EXAMPLES:
    rdsctl slowlog collect 5c8e7a1f09b54f5fa9d3a0f4e3f0e1c2in01 \\
        --start 2024-03-01T08:00:00+0800 --end 2024-03-01T09:00:00+0800
")]
    Collect {
        /// Instance id
        instance_id: String,

        /// Window start, e.g. 2024-03-01T08:00:00+0800
        #[arg(long)]
        start: String,

        /// Window end; defaults to now
        #[arg(long)]
        end: Option<String>,

        /// Records per page (1-100)
        #[arg(long, default_value = "100")]
        page_size: i32,
    },
}
