//! Profile assembly: runs every profile extractor over one root and builds
//! the flat record, the provenance list and the warnings.

use tracing::debug;

use super::current::resolve_current;
use super::experience::{extract_education, extract_experiences};
use super::fields::{resolve_contact, resolve_top_card};
use crate::dom::Queryable;
use crate::normalize::parse_count_from_summary;
use crate::options::Options;
use crate::result::{ExperienceInsight, FieldMatch, ProfileExtraction};
use crate::selector::Matcher;

/// Warning when the name could not be found anywhere.
pub const WARN_NO_FULL_NAME: &str = "Full name selector did not match";

/// Warning when no experience row survived.
pub const WARN_NO_EXPERIENCE: &str = "No experience entries detected";

/// Warning when no experience entry could be chosen as current.
pub const WARN_NO_CURRENT: &str = "Unable to determine current experience";

/// Warning when entries exist but none has an ongoing date range.
pub const WARN_NO_ONGOING: &str = "No experience entry is ongoing; using the first entry";

/// A profile with everything needed to explain it.
#[derive(Debug, Clone)]
pub struct ProfileReport {
    pub profile: ProfileExtraction,

    /// Provenance for the top-level fields, in a fixed order.
    pub fields: Vec<FieldMatch>,

    pub experiences: Vec<ExperienceInsight>,
    pub current_experience_index: Option<usize>,
    pub warnings: Vec<String>,
}

/// Extract a full profile under `root`.
pub fn profile_report<Q>(root: &Q, options: &Options) -> ProfileReport
where
    Q: Queryable,
{
    let matcher = Matcher::from_options(options);

    let top = resolve_top_card(root, &matcher);
    let contact = resolve_contact(root, &matcher);
    let experiences = extract_experiences(root, &matcher);
    let education = extract_education(root, &matcher);
    let current = resolve_current(&experiences, &top);

    let current_title = if current.title.is_matched() || !top.headline.is_matched() {
        current.title
    } else {
        current
            .title
            .or_else(|| top.headline.renamed("currentTitle", "Fell back to headline"))
    };

    let mut warnings = Vec::new();
    if !top.full_name.is_matched() {
        warnings.push(WARN_NO_FULL_NAME.to_string());
    }
    if experiences.is_empty() {
        warnings.push(WARN_NO_EXPERIENCE.to_string());
    }
    match current.index {
        None => warnings.push(WARN_NO_CURRENT.to_string()),
        Some(_) if !experiences.iter().any(|e| e.entry.is_current) => {
            warnings.push(WARN_NO_ONGOING.to_string());
        }
        Some(_) => {}
    }

    let connections_text = top.connections.value.clone();
    let followers_text = top.followers.value.clone();

    let profile = ProfileExtraction {
        full_name: top.full_name.value.clone(),
        headline: top.headline.value.clone(),
        location: top.location.value.clone(),
        profile_image_url: top.profile_image.value.clone(),
        profile_url: top.profile_url.value.clone(),
        about: top.about.value.clone(),
        current_title: current_title.value.clone(),
        current_company: current.company.value.clone(),
        current_company_url: current.company_url.value.clone(),
        current_company_started_at: current.started_at,
        experiences: experiences.iter().map(|e| e.entry.clone()).collect(),
        education,
        email: contact.email.value.clone(),
        phone_numbers: contact.phone_numbers,
        birthday: contact.birthday.value.clone(),
        websites: contact.websites,
        connection_count: connections_text.as_deref().and_then(parse_count_from_summary),
        connections_text,
        follower_count: followers_text.as_deref().and_then(parse_count_from_summary),
        followers_text,
    };

    let fields = vec![
        top.full_name,
        top.headline,
        top.location,
        top.profile_image,
        top.profile_url,
        top.about,
        current_title,
        current.company,
        current.company_url,
        contact.email,
        contact.phone,
        contact.birthday,
        top.connections,
        top.followers,
    ];

    debug!(
        experiences = experiences.len(),
        warnings = warnings.len(),
        "profile assembled"
    );

    ProfileReport {
        profile,
        fields,
        experiences,
        current_experience_index: current.index,
        warnings,
    }
}
