//! Result types for profile and engagement extraction.
//!
//! Everything here serializes with camelCase keys, which is the shape the
//! browser-side consumers of the JSON output expect. Absent values are
//! `None` or empty, never placeholder strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance record for one resolved (or unresolved) field.
///
/// Invariants:
/// - `value` is present exactly when `matched_selector` is present.
/// - `matched_selector`, when present, is the last entry of `tried_selectors`.
/// - `tier_index`/`selector_index` point at `matched_selector` in the tier
///   table that was scanned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    /// Field name, e.g. `fullName`.
    pub field: String,

    /// Cleaned value, `None` when nothing matched.
    pub value: Option<String>,

    /// Selector that produced `value`.
    pub matched_selector: Option<String>,

    /// Every selector attempted, in order, up to and including the match.
    pub tried_selectors: Vec<String>,

    /// Name of the tier holding `matched_selector`.
    pub tier: Option<String>,

    /// Position of that tier in the table.
    pub tier_index: Option<usize>,

    /// Position of the selector inside its tier.
    pub selector_index: Option<usize>,

    /// Structural locator of the matched node (diagnostics only).
    pub path: Option<String>,

    /// Attribute the value was read from, for attribute matches.
    pub attribute: Option<String>,

    /// Match confidence in `[0.1, 0.99]`; absent when nothing matched.
    pub confidence: Option<f64>,

    /// Free-text explanation of fallbacks, rejections and derivations.
    pub notes: Vec<String>,
}

impl FieldMatch {
    /// An empty record for `field`: no value, nothing tried yet.
    #[must_use]
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            value: None,
            matched_selector: None,
            tried_selectors: Vec::new(),
            tier: None,
            tier_index: None,
            selector_index: None,
            path: None,
            attribute: None,
            confidence: None,
            notes: Vec::new(),
        }
    }

    /// True when a value was resolved.
    #[inline]
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the resolved value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Use this record when it matched, otherwise `fallback`.
    ///
    /// The selectors this record tried are kept at the front of the
    /// fallback's `tried_selectors` so the full attempt history survives.
    #[must_use]
    pub fn or_else(self, fallback: impl FnOnce() -> FieldMatch) -> FieldMatch {
        if self.is_matched() {
            return self;
        }
        let mut next = fallback();
        let mut tried = self.tried_selectors;
        tried.append(&mut next.tried_selectors);
        next.tried_selectors = tried;

        let mut notes: Vec<String> = self
            .notes
            .into_iter()
            .filter(|n| n != NO_SELECTOR_MATCHED)
            .collect();
        notes.append(&mut next.notes);
        next.notes = notes;
        next
    }

    /// Same record under another field name with an extra note.
    #[must_use]
    pub fn renamed(&self, field: &str, note: impl Into<String>) -> FieldMatch {
        let mut out = self.clone();
        out.field = field.to_string();
        out.notes.push(note.into());
        out
    }

    /// Drop the value (and its match coordinates) after a later validation
    /// step rejects it. The attempt history is kept.
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.value = None;
        self.matched_selector = None;
        self.tier = None;
        self.tier_index = None;
        self.selector_index = None;
        self.path = None;
        self.confidence = None;
        self.notes.push(reason.into());
    }
}

/// Note recorded when every selector of every tier came up empty.
pub const NO_SELECTOR_MATCHED: &str = "No selector matched";

/// One position from the experience section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    /// Job title.
    pub title: Option<String>,

    /// Company display name.
    pub company: Option<String>,

    /// Company page URL, resolved against the origin when possible.
    pub company_url: Option<String>,

    /// Location of the position.
    pub location: Option<String>,

    /// Start of the date range as displayed ("Jan 2020").
    pub start_date: Option<String>,

    /// End of the date range; `None` when ongoing.
    pub end_date: Option<String>,

    /// Date range text as displayed.
    pub date_range_text: Option<String>,

    /// Free-text role description.
    pub description: Option<String>,

    /// True when the range is ongoing.
    pub is_current: bool,
}

/// One record from the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: Option<String>,
    pub school_url: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub date_range_text: Option<String>,
}

/// Flat profile record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileExtraction {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub profile_image_url: Option<String>,

    /// Canonical profile URL (`<link rel="canonical">` or `og:url`).
    pub profile_url: Option<String>,

    /// "About" section text.
    pub about: Option<String>,

    pub current_title: Option<String>,
    pub current_company: Option<String>,
    pub current_company_url: Option<String>,

    /// Start date of the experience entry the current position came from.
    pub current_company_started_at: Option<String>,

    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,

    pub email: Option<String>,
    pub phone_numbers: Vec<String>,
    pub birthday: Option<String>,

    /// Personal websites from the contact section.
    pub websites: Vec<String>,

    pub connections_text: Option<String>,
    pub connection_count: Option<u64>,
    pub followers_text: Option<String>,
    pub follower_count: Option<u64>,
}

/// How a person showed up on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Engagement {
    /// Reacted to the post.
    #[serde(rename = "reaction")]
    Reaction {
        /// Normalized reaction name ("like", "celebrate", ...).
        #[serde(rename = "reactionLabel")]
        reaction_label: Option<String>,
    },

    /// Commented on the post.
    #[serde(rename = "comment")]
    Comment {
        /// Comment body text.
        #[serde(rename = "commentText")]
        comment_text: Option<String>,
    },
}

/// A person who engaged with a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementProfile {
    /// Absolute profile URL; unique within one extraction after normalization.
    pub profile_url: String,

    /// Display name; always present for commenters.
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,

    /// Reaction or comment details.
    #[serde(flatten)]
    pub engagement: Engagement,
}

impl EngagementProfile {
    /// Reaction label, for reactor records.
    #[must_use]
    pub fn reaction_label(&self) -> Option<&str> {
        match &self.engagement {
            Engagement::Reaction { reaction_label } => reaction_label.as_deref(),
            Engagement::Comment { .. } => None,
        }
    }

    /// Comment text, for commenter records.
    #[must_use]
    pub fn comment_text(&self) -> Option<&str> {
        match &self.engagement {
            Engagement::Comment { comment_text } => comment_text.as_deref(),
            Engagement::Reaction { .. } => None,
        }
    }
}

/// An experience entry together with the provenance of each of its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceInsight {
    /// Position of the entry in `ProfileExtraction::experiences`.
    pub index: usize,

    pub entry: ExperienceEntry,

    /// One record per entry field (title, company, companyUrl, dateRange,
    /// location, description).
    pub fields: Vec<FieldMatch>,
}

/// Diagnostic information about one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    /// Length in bytes of the analyzed HTML.
    pub html_length: usize,

    /// When the analysis ran, or the pinned timestamp from the options.
    pub generated_at: DateTime<Utc>,

    /// Non-fatal failure notes.
    pub warnings: Vec<String>,
}

/// Full diagnostic report for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub document_title: Option<String>,

    /// Provenance for the top-level profile fields, in a fixed order.
    pub fields: Vec<FieldMatch>,

    pub experiences: Vec<ExperienceInsight>,

    /// Index into `experiences` of the entry chosen as current.
    pub current_experience_index: Option<usize>,

    /// The flat profile record built from the same matches.
    pub profile: ProfileExtraction,

    pub reactors: Vec<EngagementProfile>,
    pub commenters: Vec<EngagementProfile>,

    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// Provenance record for a top-level field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldMatch> {
        self.fields.iter().find(|f| f.field == name)
    }
}
