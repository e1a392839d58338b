use std::collections::BTreeMap;
use std::io::Write;
use std::process::ExitCode;

use crate::build_info::BuildInfo;
use crate::error::{StampError, StampResult};

pub mod version;

/// A runnable command. Implementors know nothing about argument parsing.
pub trait Handler {
    fn exec(&self, out: &mut dyn Write) -> StampResult<ExitCode>;
}

/// Name to handler table the CLI dispatches through.
#[derive(Default)]
pub struct Registry {
    handlers: BTreeMap<&'static str, Box<dyn Handler>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registering an existing name replaces the previous handler.
    pub fn register(&mut self, name: &'static str, handler: Box<dyn Handler>) {
        if self.handlers.insert(name, handler).is_some() {
            log::warn!("command {name} registered twice, keeping the latest");
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.keys().copied().collect()
    }

    pub fn dispatch(&self, name: &str, out: &mut dyn Write) -> StampResult<ExitCode> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| StampError::usage(format!("unknown command: {name}")))?;
        log::debug!("dispatching {name}");
        handler.exec(out)
    }
}

/// Registry with every built-in command.
pub fn registry(info: BuildInfo) -> Registry {
    let mut registry = Registry::new();
    registry.register("version", Box::new(version::Version::new(info)));
    registry
}
