//! # profile-lens
//!
//! Structured extraction of professional profiles and post engagement from
//! saved LinkedIn-style HTML.
//!
//! The markup behind these pages changes class names and nesting without
//! notice. Every field is therefore resolved through ordered tiers of CSS
//! selectors (current markup, legacy markup, generic structure, universal
//! fallback), and every result records which selector matched, what else
//! was tried and how confident the match is.
//!
//! ## Quick Start
//!
//! ```rust
//! use profile_lens::{analyze_html_with_options, Options};
//!
//! let html = r#"<html><body><main>
//!   <h1 class="text-heading-xlarge">Sarah Johnson</h1>
//!   <section><div id="experience"></div><div><ul>
//!     <li class="artdeco-list__item">
//!       <h3>Product Manager</h3>
//!       <a href="/company/tech-corp/">Tech Corp</a>
//!       <span class="date-range">2020 - Present</span>
//!     </li>
//!   </ul></div></section>
//! </main></body></html>"#;
//!
//! let result = analyze_html_with_options(html, &Options::default());
//! assert_eq!(result.profile.current_company.as_deref(), Some("Tech Corp"));
//!
//! let company = result.field("currentCompany").unwrap();
//! println!("{} via {:?} ({:?})", company.field, company.matched_selector, company.confidence);
//! ```
//!
//! ## Features
//!
//! - **Profile extraction**: name, headline, location, photo, about, contact
//!   block, connection and follower counts
//! - **Experience and education**: row segmentation with grouped positions
//!   and misclassified-education filtering
//! - **Current position**: experience section first, top card as fallback
//! - **Engagement**: reactors and commenters, deduplicated by profile URL
//! - **Provenance**: every field reports selector, tier and confidence

mod error;
mod options;
mod patterns;
mod result;

/// DOM query capability over documents, selections and scope unions.
pub mod dom;

/// Selector tier tables and the tier matcher.
pub mod selector;

/// Field, list and engagement extractors.
pub mod extractor;

/// Text and value normalization.
pub mod normalize;

/// URL resolution and profile URL normalization.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Overlaying extractions of the same profile.
pub mod merge;

/// Whole-document analysis.
pub mod analysis;

// Public API - re-exports
pub use analysis::{analyze_bytes, analyze_document, analyze_html, analyze_html_with_options};
pub use dom::{Queryable, ScopeUnion};
pub use error::{Error, Result};
pub use extractor::EngagementKind;
pub use options::{Options, DEFAULT_ORIGIN};
pub use result::{
    AnalysisMetadata, AnalysisResult, EducationEntry, Engagement, EngagementProfile,
    ExperienceEntry, ExperienceInsight, FieldMatch, ProfileExtraction,
};

/// Extracts the flat profile record under `root`.
///
/// # Example
///
/// ```rust
/// use profile_lens::{dom, extract_profile_details, Options};
///
/// let doc = dom::parse(r#"<h1 class="text-heading-xlarge">Jane Doe</h1>
///     <div class="text-body-medium break-words">Founder at Acme</div>"#);
/// let profile = extract_profile_details(&doc, &Options::default());
/// assert_eq!(profile.full_name.as_deref(), Some("Jane Doe"));
/// assert_eq!(profile.current_company.as_deref(), Some("Acme"));
/// assert_eq!(profile.current_title.as_deref(), Some("Founder"));
/// ```
pub fn extract_profile_details<Q>(root: &Q, options: &Options) -> ProfileExtraction
where
    Q: Queryable,
{
    extractor::profile_report(root, options).profile
}

/// Extracts the people who reacted to a post, capped by `options.reactor_limit`.
///
/// # Example
///
/// ```rust
/// use profile_lens::{dom, extract_reactors, Options};
///
/// let doc = dom::parse(r#"<ul>
///   <li class="social-details-reactors-tab-body-list-item">
///     <a href="/in/jane-doe/">Jane Doe</a><img class="reactions-icon" alt="like">
///   </li>
///   <li class="social-details-reactors-tab-body-list-item">
///     <a href="/in/jane-doe/?trk=1">Jane Doe</a>
///   </li>
/// </ul>"#);
/// let reactors = extract_reactors(&doc, &Options::default());
/// assert_eq!(reactors.len(), 1);
/// assert_eq!(reactors[0].reaction_label(), Some("like"));
/// ```
pub fn extract_reactors<Q>(root: &Q, options: &Options) -> Vec<EngagementProfile>
where
    Q: Queryable + ?Sized,
{
    extractor::extract_engagements(root, EngagementKind::Reactor, options)
}

/// Extracts the people who commented on a post, capped by `options.comment_limit`.
///
/// Comment rows without a resolvable author name are skipped.
pub fn extract_comments<Q>(root: &Q, options: &Options) -> Vec<EngagementProfile>
where
    Q: Queryable + ?Sized,
{
    extractor::extract_engagements(root, EngagementKind::Commenter, options)
}
