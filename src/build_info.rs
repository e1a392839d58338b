/// Version identity of the running binary.
///
/// Both fields are fixed at construction. `build.rs` injects the values for
/// [`BuildInfo::current`]; anything else constructs one explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    commit: String,
}

pub const DEFAULT_VERSION: &str = "development";
pub const DEFAULT_COMMIT: &str = "";

impl BuildInfo {
    pub fn new<V: Into<String>, C: Into<String>>(version: V, commit: C) -> Self {
        Self {
            version: version.into(),
            commit: commit.into(),
        }
    }

    /// Values baked in at compile time.
    pub fn current() -> Self {
        Self::new(
            option_env!("STAMP_VERSION").unwrap_or(DEFAULT_VERSION),
            option_env!("STAMP_GIT_COMMIT").unwrap_or(DEFAULT_COMMIT),
        )
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION, DEFAULT_COMMIT)
    }
}
