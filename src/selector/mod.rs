//! Selector tier tables and the matcher that evaluates them.
//!
//! Each field is resolved from a fixed, ordered table of tiers. A tier groups
//! selectors written for one markup generation; tiers run from the current
//! markup through legacy and generic structure to a universal fallback.
//!
//! ## Module Structure
//!
//! - `matcher` - Tier scan with provenance and confidence
//! - `profile` - Top card, about section and contact block tables
//! - `experience` - Experience and education row and field tables
//! - `engagement` - Reactor and commenter row and field tables

pub mod engagement;
pub mod experience;
pub mod matcher;
pub mod profile;

pub use matcher::{match_attribute, match_text, match_text_with, Matcher};

/// One markup generation's selectors for a field, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tier {
    /// Tier label reported in provenance ("current", "legacy", ...).
    pub name: &'static str,

    /// Selectors tried in order.
    pub selectors: &'static [&'static str],
}

impl Tier {
    /// Build a tier (usable in `static` tables).
    #[must_use]
    pub const fn new(name: &'static str, selectors: &'static [&'static str]) -> Self {
        Self { name, selectors }
    }
}

/// Confidence of a match at `(tier_index, selector_index)`.
///
/// `round(clamp(1 - tier * 0.25 - selector * 0.05, 0.1, 0.99), 2)`: ordinal,
/// non-increasing in both indices, not a probability.
///
/// ```
/// use profile_lens::selector::confidence;
///
/// assert_eq!(confidence(0, 0), 0.99);
/// assert_eq!(confidence(1, 2), 0.65);
/// assert_eq!(confidence(9, 9), 0.1);
/// ```
#[must_use]
pub fn confidence(tier_index: usize, selector_index: usize) -> f64 {
    let raw = 1.0 - tier_index as f64 * 0.25 - selector_index as f64 * 0.05;
    (raw.clamp(0.1, 0.99) * 100.0).round() / 100.0
}

/// Flatten a tier table into its selectors, in scan order.
#[must_use]
pub fn all_selectors(tiers: &[Tier]) -> Vec<&'static str> {
    tiers
        .iter()
        .flat_map(|tier| tier.selectors.iter().copied())
        .collect()
}
