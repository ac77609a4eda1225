//! fsstatus - report what is deployed on an embedded root filesystem.
//!
//! Queries the UHD toolkit version, the Mender artifact, the filesystem
//! build identifier and the opkg status database of the live system or of
//! a mounted image (`--root`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fsstatus::commands::{self, query::Query};
use fsstatus::config::Config;
use fsstatus::{logging, FsRoot};

#[derive(Parser)]
#[command(name = "fsstatus")]
#[command(about = "Report toolkit version, deployed artifact and package status of a root filesystem")]
#[command(
    after_help = "EXAMPLES:\n  fsstatus report                    Status of the running system\n  fsstatus --root /mnt/img report    Inspect a mounted image\n  fsstatus report --json             Machine-readable output"
)]
struct Cli {
    /// Filesystem root to inspect (default: FSSTATUS_ROOT or /)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log level, e.g. warn, info, debug (default: FSSTATUS_LOG or warn)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the UHD toolkit version (runs usr/bin/uhd_config_info)
    UhdVersion,

    /// Show the deployed Mender artifact name
    Artifact {
        /// Parse etc/mender/artifact_info instead of asking the mender client
        #[arg(long)]
        manual: bool,
    },

    /// Show the filesystem build identifier (etc/version)
    FsVersion,

    /// Show when the opkg status database was last modified (UTC)
    OpkgDate {
        /// Print only the date
        #[arg(long)]
        date_only: bool,
    },

    /// Show the SHA-256 of the opkg status database
    OpkgChecksum,

    /// Run all queries and print a combined report
    Report {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Parse etc/mender/artifact_info instead of asking the mender client
        #[arg(long)]
        manual: bool,
        /// Print only the date of the opkg status database
        #[arg(long)]
        date_only: bool,
    },

    /// Show current configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::load();

    logging::init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level))?;

    let root = match &cli.root {
        Some(path) => FsRoot::from_path(path),
        None => config.root.clone(),
    };

    match cli.command {
        Commands::UhdVersion => commands::cmd_query(&root, Query::UhdVersion, &config)?,
        Commands::Artifact { manual } => {
            commands::cmd_query(&root, Query::Artifact { manual }, &config)?
        }
        Commands::FsVersion => commands::cmd_query(&root, Query::FsVersion, &config)?,
        Commands::OpkgDate { date_only } => {
            commands::cmd_query(&root, Query::OpkgDate { date_only }, &config)?
        }
        Commands::OpkgChecksum => commands::cmd_query(&root, Query::OpkgChecksum, &config)?,
        Commands::Report {
            json,
            manual,
            date_only,
        } => commands::cmd_report(&root, json, manual, date_only, &config)?,
        Commands::Config => commands::cmd_show(&root, &config)?,
    }

    Ok(())
}
