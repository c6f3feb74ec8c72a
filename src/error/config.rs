use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The game channel settings file could not be read from disk.
    #[error("Failed to read game channel settings from {path}: {source}")]
    ReadSettings {
        /// Path of the settings file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The game channel settings file is not valid TOML for the settings schema.
    #[error("Failed to parse game channel settings from {path}: {source}")]
    ParseSettings {
        /// Path of the settings file
        path: PathBuf,
        /// The underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// A category override names a community missing from the `[communities]` table.
    #[error("Category override for prefix '{prefix}' references unknown community '{community}'")]
    UnknownCommunity {
        /// Game name prefix of the offending override
        prefix: String,
        /// The community name that could not be resolved
        community: String,
    },
}
