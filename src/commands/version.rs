use std::io::Write;
use std::process::ExitCode;

use log::debug;

use crate::build_info::BuildInfo;
use crate::commands::Handler;
use crate::error::StampResult;

pub struct Version {
    info: BuildInfo,
}

impl Version {
    pub fn new(info: BuildInfo) -> Self {
        Self { info }
    }

    pub fn render(&self) -> String {
        format!(
            "Version: {}\nGit commit: {}\n",
            self.info.version(),
            self.info.commit()
        )
    }
}

impl Handler for Version {
    fn exec(&self, out: &mut dyn Write) -> StampResult<ExitCode> {
        debug!(
            "reporting version={} commit={:?}",
            self.info.version(),
            self.info.commit()
        );

        // Single write so concurrent reports never split a line pair.
        out.write_all(self.render().as_bytes())?;
        out.flush()?;

        Ok(ExitCode::SUCCESS)
    }
}
