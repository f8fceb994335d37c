//! Error types for profile-lens.
//!
//! Extraction itself never fails: an unresolvable field is reported as an
//! absent value with provenance. Errors only come from configuration and
//! from reading input.

/// Error type for configuration and input operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The origin used to resolve relative links is not an absolute http(s) URL.
    #[error("invalid origin URL: {0}")]
    InvalidOrigin(String),

    /// Reading the HTML input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for fallible profile-lens operations.
pub type Result<T> = std::result::Result<T, Error>;
