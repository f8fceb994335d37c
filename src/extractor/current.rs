//! Current-position inference.
//!
//! Phase one reads the experience section: the first entry with an ongoing
//! date range is current, else the first entry. Phase two fills whatever is
//! still missing from the top card, refusing a top-card value that merely
//! repeats the headline or the other resolved field.

use tracing::debug;

use super::fields::TopCard;
use crate::normalize::{clean_company_name, clean_text};
use crate::patterns::HEADLINE_AT;
use crate::result::{ExperienceInsight, FieldMatch};

/// Outcome of current-position inference.
#[derive(Debug, Clone)]
pub struct CurrentPosition {
    /// Index of the experience entry taken as current.
    pub index: Option<usize>,

    pub title: FieldMatch,
    pub company: FieldMatch,
    pub company_url: FieldMatch,

    /// Start date of the current entry, when the company came from it.
    pub started_at: Option<String>,
}

/// Pick the current experience entry: first ongoing entry, else the first one.
#[must_use]
pub fn current_index(experiences: &[ExperienceInsight]) -> Option<usize> {
    experiences
        .iter()
        .position(|e| e.entry.is_current)
        .or_else(|| (!experiences.is_empty()).then_some(0))
}

/// Resolve current title, company and company URL.
#[must_use]
pub fn resolve_current(experiences: &[ExperienceInsight], top: &TopCard) -> CurrentPosition {
    let index = current_index(experiences);

    let (mut title, mut company, mut company_url, mut started_at) = match index {
        Some(i) => {
            let insight = &experiences[i];
            let note = format!("Taken from experience entry #{i}");
            (
                insight_field(insight, "title", "currentTitle", &note),
                insight_field(insight, "company", "currentCompany", &note),
                insight_field(insight, "companyUrl", "currentCompanyUrl", &note),
                insight.entry.start_date.clone(),
            )
        }
        None => (
            FieldMatch::new("currentTitle"),
            FieldMatch::new("currentCompany"),
            FieldMatch::new("currentCompanyUrl"),
            None,
        ),
    };

    let headline = top.headline.value();
    let split = headline.and_then(split_headline);

    if !company.is_matched() {
        started_at = None;
        let mut candidate = top
            .company
            .renamed("currentCompany", "Experience section gave no company; using top card");
        if let Some((_, split_company)) = &split {
            candidate = candidate.or_else(|| headline_part(top, "currentCompany", split_company));
        }
        if let Some(value) = candidate.value.clone() {
            if same_text(Some(value.as_str()), headline) {
                candidate.reject("Rejected top-card company equal to the headline");
            } else if same_text(Some(value.as_str()), title.value()) {
                candidate.reject("Rejected top-card company equal to the current title");
            }
        }
        company = company.or_else(|| candidate);

        if !company_url.is_matched() {
            let mut url = top
                .company_url
                .renamed("currentCompanyUrl", "Using top-card company link");
            if !company.is_matched() && url.is_matched() {
                url.reject("Rejected top-card company link without a current company");
            }
            company_url = company_url.or_else(|| url);
        }
    }

    if !title.is_matched() {
        let mut candidate = top
            .title
            .renamed("currentTitle", "Experience section gave no title; using top card");
        if let Some((split_title, _)) = &split {
            candidate = candidate.or_else(|| headline_part(top, "currentTitle", split_title));
        }
        if let Some(value) = candidate.value.clone() {
            if same_text(Some(value.as_str()), company.value()) {
                candidate.reject("Rejected top-card title equal to the current company");
            } else if same_text(Some(value.as_str()), headline) {
                candidate.reject("Rejected top-card title equal to the headline");
            }
        }
        title = title.or_else(|| candidate);
    }

    debug!(
        index = ?index,
        title = title.is_matched(),
        company = company.is_matched(),
        "current position resolved"
    );

    CurrentPosition {
        index,
        title,
        company,
        company_url,
        started_at,
    }
}

/// Split a "Title at Company" headline on its last " at ".
///
/// ```
/// use profile_lens::extractor::current::split_headline;
///
/// assert_eq!(
///     split_headline("VP Sales at Acme"),
///     Some(("VP Sales".to_string(), "Acme".to_string()))
/// );
/// assert_eq!(split_headline("Builder of things"), None);
/// ```
#[must_use]
pub fn split_headline(headline: &str) -> Option<(String, String)> {
    let caps = HEADLINE_AT.captures(headline)?;
    let title = clean_text(caps.get(1)?.as_str())?;
    // Headlines often continue after the company: "CTO at Acme | Speaker"
    let company_raw = caps.get(2)?.as_str();
    let company_raw = company_raw.split(['|', '•']).next().unwrap_or_default();
    let company = clean_company_name(company_raw)?;
    Some((title, company))
}

fn insight_field(insight: &ExperienceInsight, from: &str, to: &str, note: &str) -> FieldMatch {
    insight
        .fields
        .iter()
        .find(|f| f.field == from)
        .map_or_else(|| FieldMatch::new(to), |f| f.renamed(to, note))
}

fn headline_part(top: &TopCard, field: &str, value: &str) -> FieldMatch {
    let mut m = top
        .headline
        .renamed(field, "Split from a \"Title at Company\" headline");
    m.value = Some(value.to_string());
    m
}

fn same_text(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.trim().eq_ignore_ascii_case(b.trim()),
        _ => false,
    }
}
