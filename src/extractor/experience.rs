//! Experience and education entries.

use tracing::debug;

use super::segment::{education_rows, experience_rows, ExperienceRow};
use crate::dom::{is_within, FilteredScope, Queryable, Selection};
use crate::normalize::{
    clean_company_name, clean_date_range_text, clean_location_text, mentions_present,
    parse_date_range_parts,
};
use crate::patterns::DATE_SHAPE;
use crate::result::{EducationEntry, ExperienceEntry, ExperienceInsight, FieldMatch};
use crate::selector::experience::{
    COMPANY_LINK, COMPANY_TEXT, DATE_RANGE, DEGREE, DESCRIPTION, EDUCATION_DATES, FIELD_OF_STUDY,
    LOCATION, SCHOOL, SCHOOL_LINK, TITLE,
};
use crate::selector::Matcher;

/// Every retained experience entry under `root`, with field provenance.
pub fn extract_experiences<Q>(root: &Q, matcher: &Matcher) -> Vec<ExperienceInsight>
where
    Q: Queryable + ?Sized,
{
    let mut out = Vec::new();
    for (row_index, row) in experience_rows(root).iter().enumerate() {
        let (entry, fields) = resolve_row(row, matcher);
        if !is_retained(&entry) {
            debug!(row = row_index, "dropping empty experience row");
            continue;
        }
        out.push(ExperienceInsight {
            index: out.len(),
            entry,
            fields,
        });
    }
    debug!(entries = out.len(), "experience entries");
    out
}

/// An entry is kept when any of title, company, date range or description is present.
#[must_use]
pub fn is_retained(entry: &ExperienceEntry) -> bool {
    entry.title.is_some()
        || entry.company.is_some()
        || entry.date_range_text.is_some()
        || entry.description.is_some()
}

fn resolve_row(row: &ExperienceRow, matcher: &Matcher) -> (ExperienceEntry, Vec<FieldMatch>) {
    let node = &row.node;

    let title = matcher.text(node, "title", TITLE);
    let date_range = matcher.text_with(node, "dateRange", DATE_RANGE, clean_date_range_text);

    let (company, company_url) = match &row.group {
        Some(group) => {
            let (company, url) = group_company(group, matcher);
            (
                company.or_else(|| row_company(node, &title, matcher)),
                url.or_else(|| matcher.attribute(node, "companyUrl", COMPANY_LINK, "href")),
            )
        }
        None => (
            row_company(node, &title, matcher),
            matcher.attribute(node, "companyUrl", COMPANY_LINK, "href"),
        ),
    };

    let location = matcher.text_with(node, "location", LOCATION, |raw| {
        clean_location_text(raw).filter(|l| !DATE_SHAPE.is_match(l))
    });
    let description = matcher.text(node, "description", DESCRIPTION);

    let date_text = date_range.value.clone();
    let (start_date, end_date) = date_text
        .as_deref()
        .map(parse_date_range_parts)
        .unwrap_or_default();
    let is_current = date_text
        .as_deref()
        .is_some_and(|raw| end_date.is_none() || mentions_present(raw));

    let entry = ExperienceEntry {
        title: title.value.clone(),
        company: company.value.clone(),
        company_url: company_url.value.clone(),
        location: location.value.clone(),
        start_date,
        end_date,
        date_range_text: date_text,
        description: description.value.clone(),
        is_current,
    };

    let fields = vec![title, company, company_url, date_range, location, description];
    (entry, fields)
}

/// Company of an ungrouped row: link text first (a link also yields the
/// URL), then the styled company line.
///
/// An element holding the title node is the whole-row wrapper anchor, not a
/// company name. A value equal to the title or shaped like a date is
/// rejected too.
fn row_company(node: &Selection, title: &FieldMatch, matcher: &Matcher) -> FieldMatch {
    let title_node = title
        .matched_selector
        .as_deref()
        .and_then(|selector| node.query_first(selector));
    let outside_title = FilteredScope::new(node.clone(), |found: &Selection| {
        title_node.as_ref().is_none_or(|t| !is_within(t, found))
    });

    let title_text = title.value();
    let not_title = |raw: &str| {
        clean_company_name(raw).filter(|c| {
            !title_text.is_some_and(|t| c.eq_ignore_ascii_case(t)) && !DATE_SHAPE.is_match(c)
        })
    };
    matcher
        .text_with(&outside_title, "company", COMPANY_LINK, not_title)
        .or_else(|| {
            matcher
                .continuing(COMPANY_LINK.len())
                .text_with(&outside_title, "company", COMPANY_TEXT, not_title)
        })
}

/// Company name and link from a grouped-position header.
///
/// The header's bold line is the company name.
fn group_company(group: &Selection, matcher: &Matcher) -> (FieldMatch, FieldMatch) {
    let mut company = matcher.text_with(group, "company", TITLE, clean_company_name);
    let mut url = matcher.attribute(group, "companyUrl", COMPANY_LINK, "href");
    if company.is_matched() {
        company.notes.push("Taken from grouped position header".to_string());
    }
    if url.is_matched() {
        url.notes.push("Taken from grouped position header".to_string());
    }
    (company, url)
}

/// Every retained education entry under `root`.
pub fn extract_education<Q>(root: &Q, matcher: &Matcher) -> Vec<EducationEntry>
where
    Q: Queryable + ?Sized,
{
    let entries: Vec<EducationEntry> = education_rows(root)
        .iter()
        .map(|row| resolve_education(row, matcher))
        .filter(|e| e.school.is_some() || e.degree.is_some() || e.field_of_study.is_some())
        .collect();
    debug!(entries = entries.len(), "education entries");
    entries
}

fn resolve_education(row: &Selection, matcher: &Matcher) -> EducationEntry {
    let school = matcher.text(row, "school", SCHOOL).value;
    let school_url = matcher.attribute(row, "schoolUrl", SCHOOL_LINK, "href").value;
    let mut degree = matcher.text(row, "degree", DEGREE).value;
    let mut field_of_study = matcher.text(row, "fieldOfStudy", FIELD_OF_STUDY).value;

    // Current markup renders "Degree, Field" on one line
    if field_of_study.is_none() {
        if let Some((d, f)) = degree.as_deref().and_then(|d| d.split_once(", ")) {
            let (d, f) = (d.trim().to_string(), f.trim().to_string());
            degree = Some(d).filter(|s| !s.is_empty());
            field_of_study = Some(f).filter(|s| !s.is_empty());
        }
    }

    let date_range_text = matcher
        .text_with(row, "dateRange", EDUCATION_DATES, clean_date_range_text)
        .value;
    let (start_date, end_date) = date_range_text
        .as_deref()
        .map(parse_date_range_parts)
        .unwrap_or_default();

    EducationEntry {
        school,
        school_url,
        degree,
        field_of_study,
        start_date,
        end_date,
        date_range_text,
    }
}
