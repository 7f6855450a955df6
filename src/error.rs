//! Error types for engine configuration and taxonomy parsing.
//!
//! Detection and resolution never fail; these errors only surface at the
//! boundary where configuration is loaded or names are parsed strictly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring the engine.
#[derive(Debug, Error)]
pub enum AntinomyError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`EngineConfig`](crate::EngineConfig).
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The antinomy threshold lies outside `[0, 1]`.
    #[error("antinomy threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    /// A strategy name did not match any [`ResolutionStrategy`](crate::ResolutionStrategy).
    #[error("unknown resolution strategy: {0}")]
    UnknownStrategy(String),

    /// A domain name did not match any [`AntinomyDomain`](crate::AntinomyDomain).
    #[error("unknown antinomy domain: {0}")]
    UnknownDomain(String),

    /// A type name did not match any [`AntinomyType`](crate::AntinomyType).
    #[error("unknown antinomy type: {0}")]
    UnknownType(String),
}

/// Result type for configuration operations.
pub type AntinomyResult<T> = Result<T, AntinomyError>;
