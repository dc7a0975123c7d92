// Command-line options

use crate::config::AppConfig;
use crate::error::{RdsTopError, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "rds-top")]
#[command(
    version = crate::version::VERSION,
    about = "Show the latest RDS Enhanced Monitoring sample like the Linux top command",
    after_help = "EXAMPLES:
    rds-top my-db
    rds-top --start-time=$(date -d '13 days ago' +%s) my-db
    rds-top --sort-by-mem my-db | grep -v 'idle$'"
)]
struct Cli {
    /// Start time in seconds since the Unix epoch (default: most recent sample)
    #[arg(long, value_name = "EPOCH_SECONDS", allow_negative_numbers = true)]
    start_time: Option<i64>,

    /// Sort processes by memory instead of CPU
    #[arg(long)]
    sort_by_mem: bool,

    /// AWS region (default: from the AWS environment)
    #[arg(long)]
    region: Option<String>,

    /// AWS shared config profile
    #[arg(long)]
    profile: Option<String>,

    /// Optional TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// RDS DB instance identifier
    instance_id: String,
}

/// Validated run configuration. Created once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub start_time: Option<i64>,
    pub sort_by_mem: bool,
    pub instance_id: String,
    pub region: Option<String>,
    pub profile: Option<String>,
    pub config: Option<PathBuf>,
}

impl Options {
    /// Parse an argument vector (program name first).
    ///
    /// `--help` and `--version` print and exit 0 here; every other parse
    /// failure is returned as [`RdsTopError::Usage`] carrying the clap
    /// message and the usage line.
    pub fn parse_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                e.exit()
            }
            Err(e) => return Err(RdsTopError::Usage(e.render().to_string())),
        };

        if cli.instance_id.trim().is_empty() {
            return Err(usage_error("instance identifier must be non-empty"));
        }

        Ok(Self {
            start_time: cli.start_time,
            sort_by_mem: cli.sort_by_mem,
            instance_id: cli.instance_id,
            region: cli.region,
            profile: cli.profile,
            config: cli.config,
        })
    }

    /// Fill unset options from the config file. Flags win; `--sort-by-mem`
    /// can only switch memory sorting on.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        if self.region.is_none() {
            self.region = config.aws.region.clone();
        }
        if self.profile.is_none() {
            self.profile = config.aws.profile.clone();
        }
        self.sort_by_mem |= config.report.sort_by_mem;
        self
    }

    /// Start-time lower bound in epoch seconds. `0` and negative values mean
    /// "most recent sample".
    pub fn effective_start_time(&self) -> Option<i64> {
        self.start_time.filter(|t| *t > 0)
    }
}

fn usage_error(message: &str) -> RdsTopError {
    let usage = Cli::command().render_usage();
    RdsTopError::Usage(format!(
        "error: {}\n\n{}\n\nFor more information, try '--help'.",
        message, usage
    ))
}
