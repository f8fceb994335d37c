//! Configuration options for profile and engagement extraction.
//!
//! The `Options` struct carries everything an extraction depends on besides
//! the document itself, which keeps every call a pure function of
//! `(document, options)`.

use chrono::{DateTime, Utc};
use url::Url;

use crate::error::{Error, Result};
use crate::url_utils;

/// Origin used to resolve relative profile and company links when the
/// caller does not provide one.
pub const DEFAULT_ORIGIN: &str = "https://www.linkedin.com";

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use profile_lens::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     reactor_limit: Some(25),
///     include_paths: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Base URL relative `href`/`src` values are resolved against.
    ///
    /// When `None`, engagement rows whose anchor is relative cannot be
    /// resolved and are discarded, and relative company URLs stay relative.
    ///
    /// Default: `Some(https://www.linkedin.com/)`
    pub origin: Option<Url>,

    /// Maximum number of reactor profiles returned (after deduplication).
    ///
    /// Default: `None` (unlimited)
    pub reactor_limit: Option<usize>,

    /// Maximum number of commenter profiles returned (after deduplication).
    ///
    /// Default: `None` (unlimited)
    pub comment_limit: Option<usize>,

    /// Record a structural locator (`FieldMatch::path`) for every match.
    ///
    /// Paths are diagnostics only; turning them off saves the ancestor walk.
    ///
    /// Default: `true`
    pub include_paths: bool,

    /// Timestamp stamped into `AnalysisResult::metadata.generated_at`.
    ///
    /// Pin this to make whole results comparable across runs.
    ///
    /// Default: `None` (current time)
    pub generated_at: Option<DateTime<Utc>>,
}

impl Options {
    /// Builds default options with a caller-supplied origin.
    ///
    /// The origin must be an absolute http(s) URL with a host.
    ///
    /// ```rust
    /// use profile_lens::Options;
    ///
    /// let options = Options::with_origin("https://example.com")?;
    /// assert_eq!(options.origin.as_ref().map(url::Url::as_str), Some("https://example.com/"));
    /// assert!(Options::with_origin("/relative").is_err());
    /// # Ok::<(), profile_lens::Error>(())
    /// ```
    pub fn with_origin(origin: &str) -> Result<Self> {
        let (is_abs, parsed) = url_utils::is_absolute_url(origin);
        match parsed {
            Some(url) if is_abs => Ok(Self {
                origin: Some(url),
                ..Self::default()
            }),
            _ => Err(Error::InvalidOrigin(origin.trim().to_string())),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            origin: Url::parse(DEFAULT_ORIGIN).ok(),
            reactor_limit: None,
            comment_limit: None,
            include_paths: true,
            generated_at: None,
        }
    }
}
