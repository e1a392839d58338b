use std::{fmt, io};

pub type StampResult<T> = Result<T, StampError>;

/// Exit code for runtime failures such as a closed stdout.
pub const EXIT_FAILURE: u8 = 1;
/// Exit code for command line misuse.
pub const EXIT_USAGE: u8 = 2;

/// Error carrying the message `main` prints and the exit code it returns.
#[derive(Debug)]
pub struct StampError {
    pub msg: String,
    pub code: u8,
}

impl StampError {
    pub fn new<M: Into<String>>(msg: M, code: u8) -> Self {
        Self {
            msg: msg.into(),
            code,
        }
    }

    pub fn failure<M: Into<String>>(msg: M) -> Self {
        Self::new(msg, EXIT_FAILURE)
    }

    pub fn usage<M: Into<String>>(msg: M) -> Self {
        Self::new(msg, EXIT_USAGE)
    }

    pub fn is_usage(&self) -> bool {
        self.code == EXIT_USAGE
    }
}

impl fmt::Display for StampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.msg, self.code)
    }
}

impl std::error::Error for StampError {}

impl From<io::Error> for StampError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe => Self::failure(format!("output closed: {err}")),
            _ => Self::failure(format!("IO error: {err}")),
        }
    }
}
