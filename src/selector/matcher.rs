//! Tier scan with provenance.
//!
//! Tiers are tried in order, selectors in order. For each selector the first
//! matching descendant is read (text or attribute) and cleaned; the first
//! non-empty value wins. Every attempted selector is recorded, so a miss
//! still explains itself.

use tracing::trace;
use url::Url;

use super::{confidence, Tier};
use crate::dom::{node_path, Queryable};
use crate::normalize::{clean_attribute, clean_text};
use crate::options::Options;
use crate::result::{FieldMatch, NO_SELECTOR_MATCHED};
use crate::url_utils::resolve_or_keep;

/// Matcher settings shared by every scan in one extraction.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Record a structural path for matched nodes.
    pub include_paths: bool,

    /// Base for resolving `href`/`src` attribute matches.
    pub origin: Option<Url>,

    /// Added to reported tier indices when a scan continues an earlier one.
    pub tier_offset: usize,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            include_paths: true,
            origin: None,
            tier_offset: 0,
        }
    }
}

impl Matcher {
    /// Matcher configured from extraction options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            include_paths: options.include_paths,
            origin: options.origin.clone(),
            tier_offset: 0,
        }
    }

    /// Copy of this matcher whose tiers are reported `offset` places later.
    ///
    /// Used when a field chains a second table after a first one (text
    /// tiers after attribute tiers, say), so confidence keeps decreasing
    /// across the chain.
    #[must_use]
    pub fn continuing(&self, offset: usize) -> Self {
        Self {
            tier_offset: self.tier_offset + offset,
            ..self.clone()
        }
    }

    /// Resolve `field` from element text, cleaned with [`clean_text`].
    pub fn text<Q>(&self, root: &Q, field: &str, tiers: &[Tier]) -> FieldMatch
    where
        Q: Queryable + ?Sized,
    {
        self.scan(root, field, tiers, None, clean_text)
    }

    /// Resolve `field` from element text with a field-specific cleaner.
    pub fn text_with<Q, F>(&self, root: &Q, field: &str, tiers: &[Tier], clean: F) -> FieldMatch
    where
        Q: Queryable + ?Sized,
        F: Fn(&str) -> Option<String>,
    {
        self.scan(root, field, tiers, None, clean)
    }

    /// Resolve `field` from an attribute.
    ///
    /// `href` and `src` values are resolved against the origin when one is
    /// set; a link that cannot be resolved is kept as written.
    pub fn attribute<Q>(&self, root: &Q, field: &str, tiers: &[Tier], attribute: &str) -> FieldMatch
    where
        Q: Queryable + ?Sized,
    {
        if matches!(attribute, "href" | "src") {
            let origin = self.origin.as_ref();
            self.scan(root, field, tiers, Some(attribute), |raw| {
                resolve_or_keep(raw, origin)
            })
        } else {
            self.scan(root, field, tiers, Some(attribute), clean_attribute)
        }
    }

    /// Resolve `field` from an attribute with a field-specific cleaner.
    pub fn attribute_with<Q, F>(
        &self,
        root: &Q,
        field: &str,
        tiers: &[Tier],
        attribute: &str,
        clean: F,
    ) -> FieldMatch
    where
        Q: Queryable + ?Sized,
        F: Fn(&str) -> Option<String>,
    {
        self.scan(root, field, tiers, Some(attribute), clean)
    }

    fn scan<Q, F>(
        &self,
        root: &Q,
        field: &str,
        tiers: &[Tier],
        attribute: Option<&str>,
        clean: F,
    ) -> FieldMatch
    where
        Q: Queryable + ?Sized,
        F: Fn(&str) -> Option<String>,
    {
        let mut result = FieldMatch::new(field);

        for (tier_pos, tier) in tiers.iter().enumerate() {
            for (selector_index, selector) in tier.selectors.iter().enumerate() {
                result.tried_selectors.push((*selector).to_string());

                let Some(found) = root.query_first(selector) else {
                    continue;
                };

                let raw = match attribute {
                    Some(name) => match found.attr(name) {
                        Some(value) => value.to_string(),
                        None => continue,
                    },
                    None => found.text().to_string(),
                };

                let Some(value) = clean(&raw) else {
                    if !raw.trim().is_empty() {
                        result
                            .notes
                            .push(format!("Rejected value from selector '{selector}'"));
                    }
                    continue;
                };

                let tier_index = tier_pos + self.tier_offset;
                if tier_index > 0 || selector_index > 0 {
                    result.notes.push(format!(
                        "Matched fallback tier '{}' (#{tier_index}) with selector #{selector_index} '{selector}'",
                        tier.name
                    ));
                }

                trace!(field, selector, tier = tier.name, "field matched");

                result.value = Some(value);
                result.matched_selector = Some((*selector).to_string());
                result.tier = Some(tier.name.to_string());
                result.tier_index = Some(tier_index);
                result.selector_index = Some(selector_index);
                result.attribute = attribute.map(str::to_string);
                result.confidence = Some(confidence(tier_index, selector_index));
                if self.include_paths {
                    result.path = node_path(&found);
                }
                return result;
            }
        }

        trace!(field, tried = result.tried_selectors.len(), "no selector matched");
        result.notes.push(NO_SELECTOR_MATCHED.to_string());
        result
    }
}

/// Resolve `field` from element text with default settings.
///
/// # Example
///
/// ```rust
/// use profile_lens::dom;
/// use profile_lens::selector::{match_text, Tier};
///
/// static NAME: &[Tier] = &[
///     Tier::new("current", &["h1.text-heading-xlarge"]),
///     Tier::new("fallback", &["h1"]),
/// ];
///
/// let doc = dom::parse("<main><h1> Jane  Doe </h1></main>");
/// let m = match_text(&doc, "fullName", NAME);
/// assert_eq!(m.value(), Some("Jane Doe"));
/// assert_eq!(m.tier_index, Some(1));
/// assert_eq!(m.tried_selectors, vec!["h1.text-heading-xlarge", "h1"]);
/// ```
pub fn match_text<Q>(root: &Q, field: &str, tiers: &[Tier]) -> FieldMatch
where
    Q: Queryable + ?Sized,
{
    Matcher::default().text(root, field, tiers)
}

/// Resolve `field` from element text with a custom cleaner and default settings.
pub fn match_text_with<Q, F>(root: &Q, field: &str, tiers: &[Tier], clean: F) -> FieldMatch
where
    Q: Queryable + ?Sized,
    F: Fn(&str) -> Option<String>,
{
    Matcher::default().text_with(root, field, tiers, clean)
}

/// Resolve `field` from an attribute with default settings (no origin).
pub fn match_attribute<Q>(root: &Q, field: &str, tiers: &[Tier], attribute: &str) -> FieldMatch
where
    Q: Queryable + ?Sized,
{
    Matcher::default().attribute(root, field, tiers, attribute)
}
