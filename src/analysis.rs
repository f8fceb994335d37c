//! One-document analysis: profile, provenance, engagement and warnings.

use chrono::Utc;
use dom_query::Document;
use tracing::debug;

use crate::dom::{self, document_title};
use crate::encoding::decode_html;
use crate::extractor::{extract_engagements, profile_report, EngagementKind};
use crate::options::Options;
use crate::result::{AnalysisMetadata, AnalysisResult};

/// Analyze an already parsed document.
///
/// `metadata.html_length` is the length of the serialized document.
#[must_use]
pub fn analyze_document(doc: &Document, options: &Options) -> AnalysisResult {
    analyze(doc, doc.html().len(), options)
}

/// Analyze an HTML string with default options.
///
/// ```rust
/// use profile_lens::analyze_html;
///
/// let result = analyze_html(r#"<h1 class="text-heading-xlarge">Sarah Johnson</h1>"#);
/// assert_eq!(result.profile.full_name.as_deref(), Some("Sarah Johnson"));
/// assert!(result.metadata.warnings.iter().any(|w| w == "No experience entries detected"));
/// ```
#[must_use]
pub fn analyze_html(html: &str) -> AnalysisResult {
    analyze_html_with_options(html, &Options::default())
}

/// Analyze an HTML string.
#[must_use]
pub fn analyze_html_with_options(html: &str, options: &Options) -> AnalysisResult {
    let doc = dom::parse(html);
    analyze(&doc, html.len(), options)
}

/// Analyze raw HTML bytes, detecting the character encoding first.
///
/// `metadata.html_length` is the byte length of the input.
#[must_use]
pub fn analyze_bytes(html: &[u8], options: &Options) -> AnalysisResult {
    let text = decode_html(html);
    let doc = dom::parse(&text);
    analyze(&doc, html.len(), options)
}

fn analyze(doc: &Document, html_length: usize, options: &Options) -> AnalysisResult {
    debug!(html_length, "analyzing document");

    let report = profile_report(doc, options);
    let reactors = extract_engagements(doc, EngagementKind::Reactor, options);
    let commenters = extract_engagements(doc, EngagementKind::Commenter, options);

    for warning in &report.warnings {
        debug!(warning = warning.as_str(), "analysis warning");
    }

    AnalysisResult {
        document_title: document_title(doc),
        fields: report.fields,
        experiences: report.experiences,
        current_experience_index: report.current_experience_index,
        profile: report.profile,
        reactors,
        commenters,
        metadata: AnalysisMetadata {
            html_length,
            generated_at: options.generated_at.unwrap_or_else(Utc::now),
            warnings: report.warnings,
        },
    }
}
