use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::{env, io::Write, path::PathBuf, sync::Mutex};

use crate::error::{StampError, StampResult};

pub const LOG_LEVEL_ENV: &str = "STAMP_LOG_LEVEL";
pub const LOG_PATH_ENV: &str = "STAMP_LOG_PATH";
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

/// Abstraction over environment access (so tests can mock it).
pub trait Env {
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

pub struct RealEnv;
impl Env for RealEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

/// Where log records go and which ones are kept.
#[derive(Debug, PartialEq, Eq)]
pub struct LogCfg {
    pub level: LevelFilter,
    /// `None` means stderr.
    pub path: Option<PathBuf>,
}

/// Resolve the logging config. An explicit `level_override` (from the
/// command line) beats the environment; unparsable levels fall back to
/// [`DEFAULT_LEVEL`].
pub fn log_cfg_from_env<E: Env>(e: &E, level_override: Option<&str>) -> LogCfg {
    let level = level_override
        .map(str::to_string)
        .or_else(|| e.var(LOG_LEVEL_ENV).ok())
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or(DEFAULT_LEVEL);

    let path = e
        .var(LOG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);

    LogCfg { level, path }
}

pub struct WriterLogger {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl WriterLogger {
    pub fn new(sink: Box<dyn Write + Send>, level: LevelFilter) -> Self {
        Self {
            level,
            sink: Mutex::new(sink),
        }
    }

    pub fn from_cfg(cfg: &LogCfg) -> StampResult<Self> {
        let sink: Box<dyn Write + Send> = match &cfg.path {
            Some(path) => Box::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        StampError::failure(format!(
                            "Failed to open log file {}: {e}",
                            path.display()
                        ))
                    })?,
            ),
            None => Box::new(std::io::stderr()),
        };
        Ok(Self::new(sink, cfg.level))
    }
}

impl Log for WriterLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = Utc::now();
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let _ = writeln!(
            &mut *sink,
            "[{}][{:>5}] {}: {}",
            now.to_rfc3339(),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.flush();
        }
    }
}

pub fn init_logging(cfg: &LogCfg) -> StampResult<()> {
    let logger = WriterLogger::from_cfg(cfg)?;

    log::set_max_level(cfg.level);
    log::set_boxed_logger(Box::new(logger))
        .map_err(|e| StampError::failure(format!("Failed to create logger: {e}")))
}
