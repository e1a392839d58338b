use crate::error::{StampError, StampResult};

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "stamp",
    about = "Reports the version and git commit this binary was built from",
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Opts {
    /// Print debug logs based on log level (off, error, warn, info, debug, trace)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,

    /// Print the version and exit (same output as the `version` command)
    #[arg(long = "version", action = ArgAction::SetTrue)]
    pub version_flag: bool,

    #[command(subcommand)]
    pub command: Option<Subcmd>,
}

#[derive(Subcommand, Debug)]
pub enum Subcmd {
    /// Displays version information
    Version(VersionArgs),
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Accepted for compatibility and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Cmd {
    Version,
}

impl Cmd {
    /// Key the command is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Version => "version",
        }
    }
}

pub fn determine_cmd(opts: Opts) -> StampResult<Cmd> {
    if opts.version_flag {
        return Ok(Cmd::Version);
    }

    match opts.command {
        Some(Subcmd::Version(args)) => {
            if !args.ignored.is_empty() {
                log::debug!("ignoring extra version arguments: {:?}", args.ignored);
            }
            Ok(Cmd::Version)
        }
        None => Err(StampError::usage(
            "No command provided. Use `stamp version` or --version",
        )),
    }
}
