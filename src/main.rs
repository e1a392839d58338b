use clap::Parser;
use stamp::build_info::BuildInfo;
use stamp::cli::{Opts, determine_cmd};
use stamp::commands::registry;
use stamp::error::StampResult;
use stamp::log::{RealEnv, init_logging, log_cfg_from_env};
use std::io;
use std::process::ExitCode;

fn run_stamp() -> StampResult<ExitCode> {
    let opts = Opts::parse();
    init_logging(&log_cfg_from_env(&RealEnv, opts.log_level.as_deref()))?;

    let registry = registry(BuildInfo::current());
    let cmd = determine_cmd(opts)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    registry.dispatch(cmd.name(), &mut out)
}

fn main() -> ExitCode {
    match run_stamp() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("stamp: {}", e.msg);
            ExitCode::from(e.code)
        }
    }
}
