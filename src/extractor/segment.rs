//! Repeated-item segmentation.
//!
//! Lists (experience, education, reactors, commenters) are located by a set
//! of structural row selectors whose matches are unioned. One node matched by
//! several selectors is one row.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::dom::{is_descendant_of, node_id, Queryable, Selection};
use crate::normalize::clean_date_range_text;
use crate::patterns::{EDUCATION_KEYWORDS, EMPLOYMENT_KEYWORDS};
use crate::selector::experience::{DATE_RANGE, EDUCATION_ROWS, EXPERIENCE_ROWS};
use crate::selector::Matcher;

/// An experience row, with the grouped-position header it sits under.
///
/// A company with several consecutive roles renders as one header row
/// ("Acme · 5 yrs") holding a nested list of role rows.
#[derive(Debug, Clone)]
pub struct ExperienceRow<'r> {
    /// The role row itself.
    pub node: Selection<'r>,

    /// Header row of the enclosing group, if any.
    pub group: Option<Selection<'r>>,
}

/// Union the matches of every row selector, deduplicated by node, in document order.
#[must_use]
pub fn collect_rows<'r, Q>(root: &'r Q, selectors: &[&str]) -> Vec<Selection<'r>>
where
    Q: Queryable + ?Sized,
{
    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    let mut matched_selectors = Vec::new();

    for selector in selectors {
        let found = root.query_all(selector);
        if found.is_empty() {
            continue;
        }
        matched_selectors.push(*selector);
        for row in found {
            if let Some(id) = node_id(&row) {
                if seen.insert(id) {
                    rows.push(row);
                }
            }
        }
    }

    if matched_selectors.len() > 1 {
        // A selector list matches in document order; use it to interleave
        let order: HashMap<_, usize> = root
            .query_all(&matched_selectors.join(", "))
            .iter()
            .enumerate()
            .filter_map(|(pos, row)| node_id(row).map(|id| (id, pos)))
            .collect();
        rows.sort_by_key(|row| node_id(row).and_then(|id| order.get(&id).copied()).unwrap_or(usize::MAX));
    }

    rows
}

/// Rows that are not nested inside another row of the same list.
#[must_use]
pub fn outermost<'r>(rows: &[Selection<'r>]) -> Vec<Selection<'r>> {
    rows.iter()
        .filter(|row| !rows.iter().any(|other| is_descendant_of(row, other)))
        .cloned()
        .collect()
}

/// Experience rows with grouped headers resolved and education rows filtered out.
///
/// A row that contains nested rows with their own date range is a group
/// header: its nested rows are returned (each pointing at the header) and
/// the header itself is not. Nested rows without a date range are parts of
/// their parent (description, skills) and are dropped.
#[must_use]
pub fn experience_rows<'r, Q>(root: &'r Q) -> Vec<ExperienceRow<'r>>
where
    Q: Queryable + ?Sized,
{
    let rows = collect_rows(root, EXPERIENCE_ROWS);
    let probe = Matcher {
        include_paths: false,
        ..Matcher::default()
    };
    let dated: Vec<bool> = rows
        .iter()
        .map(|row| {
            probe
                .text_with(row, "dateRange", DATE_RANGE, clean_date_range_text)
                .is_matched()
        })
        .collect();

    let mut out = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let ancestor = rows
            .iter()
            .enumerate()
            .filter(|(j, other)| *j != i && is_descendant_of(row, other))
            .map(|(j, _)| j)
            .last();

        let is_header = rows
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && dated[j] && is_descendant_of(other, row));
        if is_header {
            debug!(row = i, "grouped position header");
            continue;
        }

        let group = match ancestor {
            Some(j) if dated[i] => Some(rows[j].clone()),
            Some(_) => {
                debug!(row = i, "nested row without dates belongs to its parent");
                continue;
            }
            None => None,
        };

        let subject = group.as_ref().unwrap_or(row);
        if is_misclassified_education(subject) {
            debug!(row = i, "dropping education row found in experience list");
            continue;
        }

        out.push(ExperienceRow {
            node: row.clone(),
            group,
        });
    }

    debug!(found = rows.len(), kept = out.len(), "experience rows");
    out
}

/// Education rows, outermost only (nested lists carry activities and notes).
#[must_use]
pub fn education_rows<'r, Q>(root: &'r Q) -> Vec<Selection<'r>>
where
    Q: Queryable + ?Sized,
{
    let rows = outermost(&collect_rows(root, EDUCATION_ROWS));
    debug!(kept = rows.len(), "education rows");
    rows
}

/// True for a row that reads as an education record and shows no sign of
/// employment (company link, duration or employment-type words).
#[must_use]
pub fn is_misclassified_education(row: &Selection) -> bool {
    let text = row.text();
    let educational =
        row.query_first("a[href*='/school/']").is_some() || EDUCATION_KEYWORDS.is_match(&text);
    if !educational {
        return false;
    }
    let employment =
        row.query_first("a[href*='/company/']").is_some() || EMPLOYMENT_KEYWORDS.is_match(&text);
    !employment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{parse, text_content};

    #[test]
    fn test_collect_rows_dedupes_and_keeps_document_order() {
        let doc = parse(
            r#"<ul>
                <li class="a">1</li>
                <li class="a b">2</li>
                <li class="b">3</li>
            </ul>"#,
        );
        let rows = collect_rows(&doc, &["li.b", "li.a"]);
        let texts: Vec<String> = rows.iter().map(|r| text_content(r).to_string()).collect();
        assert_eq!(texts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_collect_rows_skips_invalid_selector() {
        let doc = parse(r#"<ul><li class="a">1</li></ul>"#);
        let rows = collect_rows(&doc, &["li[[", "li.a"]);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_outermost() {
        let doc = parse(r#"<ul><li id="o"><ul><li id="i">x</li></ul></li><li id="s">y</li></ul>"#);
        let rows = collect_rows(&doc, &["li"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(outermost(&rows).len(), 2);
    }

    #[test]
    fn test_misclassified_education() {
        let doc = parse(
            r#"
            <li id="edu"><a href="/school/mit/">MIT</a><span>Bachelor of Science, 2010 - 2014</span></li>
            <li id="job"><a href="/company/acme/">Acme</a><span>Engineer at university spinout</span></li>
            <li id="teach"><span>Lecturer, State University</span><span>Jan 2019 - Present · 5 yrs</span></li>
            "#,
        );
        assert!(is_misclassified_education(&doc.select("#edu")));
        assert!(!is_misclassified_education(&doc.select("#job")));
        assert!(!is_misclassified_education(&doc.select("#teach")));
    }

    #[test]
    fn test_experience_rows_group_header_yields_roles() {
        let doc = parse(
            r#"<section>
              <div id="experience"></div>
              <div><ul>
                <li class="artdeco-list__item" id="group">
                  <a href="/company/acme/"><div class="t-bold"><span aria-hidden="true">Acme</span></div></a>
                  <span class="t-14 t-normal"><span aria-hidden="true">Full-time · 5 yrs</span></span>
                  <ul>
                    <li class="pvs-list__paged-list-item" id="r1">
                      <div class="t-bold"><span aria-hidden="true">Director</span></div>
                      <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Jan 2022 - Present · 2 yrs</span></span>
                    </li>
                    <li class="pvs-list__paged-list-item" id="r2">
                      <div class="t-bold"><span aria-hidden="true">Manager</span></div>
                      <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Jan 2019 - Dec 2021 · 3 yrs</span></span>
                    </li>
                  </ul>
                </li>
                <li class="artdeco-list__item" id="solo">
                  <div class="t-bold"><span aria-hidden="true">Analyst</span></div>
                  <span class="t-14 t-normal t-black--light"><span aria-hidden="true">2015 - 2018 · 3 yrs</span></span>
                  <ul><li class="pvs-list__paged-list-item"><div class="inline-show-more-text"><span aria-hidden="true">Built models</span></div></li></ul>
                </li>
              </ul></div>
            </section>"#,
        );

        let rows = experience_rows(&doc);
        let ids: Vec<String> = rows
            .iter()
            .filter_map(|r| r.node.attr("id").map(|s| s.to_string()))
            .collect();
        assert_eq!(ids, vec!["r1", "r2", "solo"]);
        assert!(rows[0].group.is_some());
        assert!(rows[2].group.is_none());
    }
}
