//! Layered loading of calorie options
//!
//! Options are assembled hierarchically, later sources overriding earlier:
//! 1. TOML documents (inline strings or files, in the order added)
//! 2. Environment variables (prefix: CALORIE__, e.g. CALORIE__WEIGHT_LBS=180)
//!
//! The merged values go through [`CalorieOptions::try_from`], so unknown
//! enumeration strings and bad biometric values come back as
//! [`CalorieError::InvalidInput`].

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::errors::CalorieError;
use crate::types::{CalorieOptions, CalorieOptionsRecord};

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "CALORIE";

enum Source {
    Toml(String),
    File(PathBuf),
}

/// Builder for [`CalorieOptions`] drawn from TOML and the environment
pub struct OptionsLoader {
    sources: Vec<Source>,
    env_prefix: String,
}

impl Default for OptionsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsLoader {
    /// Loader with no TOML sources that reads `CALORIE__*` variables
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Add an inline TOML document
    pub fn with_toml_str(mut self, toml: &str) -> Self {
        self.sources.push(Source::Toml(toml.to_string()));
        self
    }

    /// Add a TOML file; a missing file is skipped
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.sources.push(Source::File(path.as_ref().to_path_buf()));
        self
    }

    /// Read overrides from environment variables with this prefix instead
    /// of [`DEFAULT_ENV_PREFIX`]
    ///
    /// The separator is `__`, e.g. `MYAPP__GOAL_DELTA=-1`.
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    /// Merge all sources and convert them to validated options
    pub fn load(self) -> Result<CalorieOptions, CalorieError> {
        let mut builder = Config::builder();

        for source in self.sources {
            builder = match source {
                Source::Toml(text) => builder.add_source(File::from_str(&text, FileFormat::Toml)),
                Source::File(path) => builder.add_source(
                    File::from(path)
                        .format(FileFormat::Toml)
                        .required(false),
                ),
            };
        }

        // Environment always overrides the TOML layers
        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let record: CalorieOptionsRecord = builder.build()?.try_deserialize()?;
        debug!(?record, "Loaded calorie options");

        CalorieOptions::try_from(record)
    }
}
