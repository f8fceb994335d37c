//! Text and value normalization.
//!
//! Every value the matcher returns passes through one of these cleaners. A
//! cleaner returns `None` for anything that is empty after cleanup or fails
//! validation, which is how "unusable" and "missing" collapse into the single
//! absence outcome the extractors report.

use std::collections::HashSet;

use crate::patterns::{
    CONNECTIONS_WORD, COUNT_PREFIX, DASHES, DATE_SHAPE, DEGREE_BADGE_SUFFIX,
    DEGREE_CONNECTION_SUFFIX, DOT_TRAILER, EMAIL_SHAPE, FOLLOWERS_WORD, LOCATION_REJECT,
    NAME_METADATA_SEPARATOR, PARENTHETICAL, PHONE_TYPE_ANNOTATION, PRESENT_MARKER, PRESENT_WORD,
    PROFILE_CHROME, REACTED_WITH, REACTION_PHRASE, WHITESPACE_RUN,
};

/// Collapse whitespace runs to one space and trim.
#[must_use]
pub fn collapse_whitespace(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Strip scraping artifacts and collapse whitespace.
///
/// Removes "View <X>'s profile" chrome and trailing degree-connection badges.
///
/// ```
/// use profile_lens::normalize::clean_text;
///
/// assert_eq!(
///     clean_text("  Jane Doe\n View Jane Doe’s profile • 2nd degree connection"),
///     Some("Jane Doe".to_string())
/// );
/// assert_eq!(clean_text(" \n\t "), None);
/// ```
#[must_use]
pub fn clean_text(raw: &str) -> Option<String> {
    let text = collapse_whitespace(raw);
    if text.is_empty() {
        return None;
    }

    let text = PROFILE_CHROME.replace_all(&text, " ");
    let text = DEGREE_CONNECTION_SUFFIX.replace(&text, "");
    let text = DEGREE_BADGE_SUFFIX.replace(&text, "");

    non_empty(collapse_whitespace(&text))
}

/// Clean a location, rejecting relationship badges and headline echoes.
///
/// The same DOM node is sometimes picked up as both headline and location,
/// so a value equal to the resolved headline is not a location.
#[must_use]
pub fn clean_location(raw: &str, headline: Option<&str>) -> Option<String> {
    let text = clean_text(raw)?;

    if LOCATION_REJECT.is_match(&text) {
        return None;
    }
    if headline.is_some_and(|h| h.trim().eq_ignore_ascii_case(&text)) {
        return None;
    }

    Some(text)
}

/// Cleaner for locations when no headline is known yet.
#[must_use]
pub fn clean_location_text(raw: &str) -> Option<String> {
    clean_location(raw, None)
}

/// Validate an email address, stripping a `mailto:` scheme and query.
///
/// ```
/// use profile_lens::normalize::clean_email;
///
/// assert_eq!(clean_email("mailto:jane@example.com?subject=Hi"), Some("jane@example.com".to_string()));
/// assert_eq!(clean_email("Email me"), None);
/// ```
#[must_use]
pub fn clean_email(raw: &str) -> Option<String> {
    let text = collapse_whitespace(raw);
    let without_scheme = match text.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("mailto:") => &text[7..],
        _ => text.as_str(),
    };
    let address = without_scheme
        .split('?')
        .next()
        .unwrap_or_default()
        .trim();

    if EMAIL_SHAPE.is_match(address) {
        Some(address.to_string())
    } else {
        None
    }
}

/// Phone number from a `tel:` href (the remainder after the scheme).
#[must_use]
pub fn phone_from_href(href: &str) -> Option<String> {
    let href = href.trim();
    let rest = match href.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("tel:") => &href[4..],
        _ => return None,
    };
    clean_phone(&rest.replace("%20", " "))
}

/// Clean a phone number taken from visible text.
///
/// Drops a trailing "(Mobile)"-style annotation; requires at least one digit.
#[must_use]
pub fn clean_phone(raw: &str) -> Option<String> {
    let text = collapse_whitespace(raw);
    let text = PHONE_TYPE_ANNOTATION.replace(&text, "");
    let text = text.trim();

    if text.chars().any(|c| c.is_ascii_digit()) {
        Some(text.to_string())
    } else {
        None
    }
}

/// Deduplicate phone numbers on their normalized text, keeping first-seen order.
#[must_use]
pub fn dedupe_phones<I>(phones: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    phones
        .into_iter()
        .filter_map(|p| clean_phone(&p))
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// True for an ongoing-range end marker ("Present", "current", "now").
#[must_use]
pub fn is_present_marker(raw: &str) -> bool {
    PRESENT_MARKER.is_match(raw.trim())
}

/// True when raw date-range text names an ongoing range.
#[must_use]
pub fn mentions_present(raw: &str) -> bool {
    PRESENT_WORD.is_match(raw)
}

/// Split free-text date range into `(start, end)`.
///
/// Parenthetical and `·`-joined durations are removed, dash variants are
/// unified, and the text is split once. An ongoing end ("Present") comes
/// back as `None`.
///
/// ```
/// use profile_lens::normalize::parse_date_range_parts;
///
/// assert_eq!(
///     parse_date_range_parts("Jan 2021 - Present · 3 yrs"),
///     (Some("Jan 2021".to_string()), None)
/// );
/// assert_eq!(
///     parse_date_range_parts("2014 – 2018 (4 yrs)"),
///     (Some("2014".to_string()), Some("2018".to_string()))
/// );
/// ```
#[must_use]
pub fn parse_date_range_parts(raw: &str) -> (Option<String>, Option<String>) {
    let text = collapse_whitespace(raw);
    let text = PARENTHETICAL.replace_all(&text, " ");
    let text = DOT_TRAILER.replace(&text, "");
    let text = DASHES.replace_all(&text, "-");

    // A spaced separator is preferred so hyphenated tokens stay intact
    let (start_raw, end_raw) = match text.split_once(" - ") {
        Some((s, e)) => (s, Some(e)),
        None => match text.split_once('-') {
            Some((s, e)) => (s, Some(e)),
            None => (&*text, None),
        },
    };

    let start = clean_text(start_raw);
    let end = end_raw
        .and_then(clean_text)
        .filter(|e| !is_present_marker(e));

    (start, end)
}

/// Parse a count from summary text: "1.2K followers" → 1200, "500+ connections" → 500.
///
/// ```
/// use profile_lens::normalize::parse_count_from_summary;
///
/// assert_eq!(parse_count_from_summary("1.2K followers"), Some(1200));
/// assert_eq!(parse_count_from_summary("500+ connections"), Some(500));
/// assert_eq!(parse_count_from_summary("followers"), None);
/// ```
#[must_use]
pub fn parse_count_from_summary(raw: &str) -> Option<u64> {
    let stripped: String = raw.chars().filter(|c| *c != '+' && *c != ',').collect();
    let caps = COUNT_PREFIX.captures(&stripped)?;

    let number: f64 = caps.get(1)?.as_str().parse().ok()?;
    let scale = match caps.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        Some(suffix) if suffix == "k" => 1_000.0,
        Some(suffix) if suffix == "m" => 1_000_000.0,
        Some(suffix) if suffix == "b" => 1_000_000_000.0,
        _ => 1.0,
    };

    let value = (number * scale).round();
    if value.is_finite() && value >= 0.0 {
        Some(value as u64)
    } else {
        None
    }
}

/// Company display text without a `·`-joined employment type.
///
/// ```
/// use profile_lens::normalize::clean_company_name;
///
/// assert_eq!(clean_company_name("Acme · Self-employed"), Some("Acme".to_string()));
/// ```
#[must_use]
pub fn clean_company_name(raw: &str) -> Option<String> {
    let text = clean_text(raw)?;
    let name = text.split('·').next().unwrap_or_default().trim();
    non_empty(name.to_string())
}

/// Person name: artifact stripping plus truncation at the first `·`, `|` or `•`.
///
/// ```
/// use profile_lens::normalize::clean_person_name;
///
/// assert_eq!(clean_person_name("Jane Doe · 2nd Founder"), Some("Jane Doe".to_string()));
/// assert_eq!(clean_person_name("Jane Doe | Speaker"), Some("Jane Doe".to_string()));
/// ```
#[must_use]
pub fn clean_person_name(raw: &str) -> Option<String> {
    let text = clean_text(raw)?;
    let name = match NAME_METADATA_SEPARATOR.find(&text) {
        Some(m) => text[..m.start()].trim(),
        None => text.trim(),
    };
    non_empty(name.to_string())
}

/// Date-range text: cleaned text that contains a year or "Present".
#[must_use]
pub fn clean_date_range_text(raw: &str) -> Option<String> {
    clean_text(raw).filter(|t| DATE_SHAPE.is_match(t))
}

/// Cleaned text that mentions connections.
#[must_use]
pub fn clean_connections_text(raw: &str) -> Option<String> {
    clean_text(raw).filter(|t| CONNECTIONS_WORD.is_match(t))
}

/// Cleaned text that mentions followers.
#[must_use]
pub fn clean_followers_text(raw: &str) -> Option<String> {
    clean_text(raw).filter(|t| FOLLOWERS_WORD.is_match(t))
}

/// Reaction display label from alt text, icon type or screen-reader text.
///
/// ```
/// use profile_lens::normalize::normalize_reaction_label;
///
/// assert_eq!(normalize_reaction_label("PRAISE"), Some("celebrate".to_string()));
/// assert_eq!(normalize_reaction_label("Jane reacted with Love"), Some("love".to_string()));
/// assert_eq!(normalize_reaction_label("Hope Love reacted with Celebrate"), Some("celebrate".to_string()));
/// assert_eq!(normalize_reaction_label("icon"), None);
/// ```
#[must_use]
pub fn normalize_reaction_label(raw: &str) -> Option<String> {
    // Names come before "reacted with" and may themselves be reaction words
    let tail = REACTED_WITH.find(raw).map_or(raw, |m| &raw[m.end()..]);
    let caps = REACTION_PHRASE.captures(tail)?;
    let word = caps.get(1)?.as_str().to_ascii_lowercase();
    let label = match word.as_str() {
        "praise" => "celebrate",
        "appreciation" => "support",
        "empathy" => "love",
        "interest" => "insightful",
        "entertainment" => "funny",
        "maybe" => "curious",
        other => other,
    };
    Some(label.to_string())
}

/// Attribute values (URLs, alt text) only need trimming and whitespace collapse.
#[must_use]
pub fn clean_attribute(raw: &str) -> Option<String> {
    non_empty(collapse_whitespace(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_chrome_and_badges() {
        assert_eq!(
            clean_text("Jane Doe View Jane Doe’s profile"),
            Some("Jane Doe".to_string())
        );
        assert_eq!(
            clean_text("Jane   Doe\n\n 3rd+ degree connection · Follow"),
            Some("Jane Doe".to_string())
        );
        assert_eq!(clean_text("Jane Doe • 1st"), Some("Jane Doe".to_string()));
        assert_eq!(clean_text("View profile"), None);
        assert_eq!(clean_text(""), None);
    }

    #[test]
    fn test_clean_text_keeps_ordinary_text() {
        assert_eq!(
            clean_text("Director of Product Reviews"),
            Some("Director of Product Reviews".to_string())
        );
    }

    #[test]
    fn test_clean_location_rejects_badges() {
        assert_eq!(clean_location("500+ connections", None), None);
        assert_eq!(clean_location("2nd degree", None), None);
        assert_eq!(clean_location("1,024 followers", None), None);
        assert_eq!(
            clean_location(" Berlin, Germany ", None),
            Some("Berlin, Germany".to_string())
        );
    }

    #[test]
    fn test_clean_location_rejects_headline_echo() {
        assert_eq!(
            clean_location("Product Manager at Tech Corp", Some("Product Manager at Tech Corp")),
            None
        );
        assert_eq!(
            clean_location("Austin, Texas", Some("Product Manager")),
            Some("Austin, Texas".to_string())
        );
    }

    #[test]
    fn test_clean_email() {
        assert_eq!(clean_email(" MAILTO:jane@example.com "), Some("jane@example.com".to_string()));
        assert_eq!(clean_email("jane@example"), None);
        assert_eq!(clean_email("@example.com"), None);
        assert_eq!(clean_email(""), None);
    }

    #[test]
    fn test_phone_from_href_and_text() {
        assert_eq!(phone_from_href("tel:+1%20555%200100"), Some("+1 555 0100".to_string()));
        assert_eq!(phone_from_href("TEL:5550100"), Some("5550100".to_string()));
        assert_eq!(phone_from_href("/in/jane"), None);
        assert_eq!(clean_phone("+44 20 7946 0958 (Mobile)"), Some("+44 20 7946 0958".to_string()));
        assert_eq!(clean_phone("Phone"), None);
    }

    #[test]
    fn test_dedupe_phones_keeps_first_order() {
        let phones = dedupe_phones(vec![
            "555 0100".to_string(),
            " 555  0100 ".to_string(),
            "555 0199 (Work)".to_string(),
            "555 0199".to_string(),
        ]);
        assert_eq!(phones, vec!["555 0100".to_string(), "555 0199".to_string()]);
    }

    #[test]
    fn test_parse_date_range_present_with_duration() {
        assert_eq!(
            parse_date_range_parts("Jan 2021 - Present · 3 yrs"),
            (Some("Jan 2021".to_string()), None)
        );
        assert_eq!(
            parse_date_range_parts("Mar 2019 – present (2 yrs 1 mo)"),
            (Some("Mar 2019".to_string()), None)
        );
    }

    #[test]
    fn test_parse_date_range_closed() {
        assert_eq!(
            parse_date_range_parts("Feb 2015 — Dec 2018 · 3 yrs 11 mos"),
            (Some("Feb 2015".to_string()), Some("Dec 2018".to_string()))
        );
        assert_eq!(
            parse_date_range_parts("2010-2014"),
            (Some("2010".to_string()), Some("2014".to_string()))
        );
    }

    #[test]
    fn test_parse_date_range_degenerate() {
        assert_eq!(parse_date_range_parts("2019"), (Some("2019".to_string()), None));
        assert_eq!(parse_date_range_parts(""), (None, None));
        assert_eq!(parse_date_range_parts("(3 yrs)"), (None, None));
    }

    #[test]
    fn test_present_detection() {
        assert!(is_present_marker(" Present "));
        assert!(is_present_marker("now"));
        assert!(!is_present_marker("Dec 2018"));
        assert!(mentions_present("Jan 2020 - PRESENT"));
        assert!(!mentions_present("Jan 2020 - Dec 2021"));
    }

    #[test]
    fn test_parse_count_from_summary() {
        assert_eq!(parse_count_from_summary("1.2K followers"), Some(1200));
        assert_eq!(parse_count_from_summary("1.5m"), Some(1_500_000));
        assert_eq!(parse_count_from_summary("2B"), Some(2_000_000_000));
        assert_eq!(parse_count_from_summary("12,345 followers"), Some(12_345));
        assert_eq!(parse_count_from_summary("500+ connections"), Some(500));
        assert_eq!(parse_count_from_summary("connections"), None);
        assert_eq!(parse_count_from_summary("12 months"), Some(12));
    }

    #[test]
    fn test_clean_company_name() {
        assert_eq!(clean_company_name("Acme · Full-time"), Some("Acme".to_string()));
        assert_eq!(clean_company_name("Tech Corp"), Some("Tech Corp".to_string()));
        assert_eq!(clean_company_name("· Full-time"), None);
    }

    #[test]
    fn test_clean_person_name() {
        assert_eq!(clean_person_name("Jane Doe • Founder"), Some("Jane Doe".to_string()));
        assert_eq!(
            clean_person_name("Jane Doe View Jane Doe’s profile"),
            Some("Jane Doe".to_string())
        );
        assert_eq!(clean_person_name("| Founder"), None);
    }

    #[test]
    fn test_shape_filtered_cleaners() {
        assert_eq!(
            clean_date_range_text(" Jan 2020 - Present "),
            Some("Jan 2020 - Present".to_string())
        );
        assert_eq!(clean_date_range_text("Berlin, Germany"), None);
        assert_eq!(
            clean_connections_text("500+  connections"),
            Some("500+ connections".to_string())
        );
        assert_eq!(clean_connections_text("2,301 followers"), None);
        assert_eq!(
            clean_followers_text("2,301 followers"),
            Some("2,301 followers".to_string())
        );
    }

    #[test]
    fn test_normalize_reaction_label() {
        assert_eq!(normalize_reaction_label("like"), Some("like".to_string()));
        assert_eq!(normalize_reaction_label("APPRECIATION"), Some("support".to_string()));
        assert_eq!(normalize_reaction_label("EMPATHY"), Some("love".to_string()));
        assert_eq!(normalize_reaction_label("INTEREST"), Some("insightful".to_string()));
        assert_eq!(normalize_reaction_label("ENTERTAINMENT"), Some("funny".to_string()));
        assert_eq!(normalize_reaction_label(""), None);
    }

    #[test]
    fn test_reaction_after_reacted_with_wins_over_name() {
        assert_eq!(
            normalize_reaction_label("Hope Love reacted with Celebrate"),
            Some("celebrate".to_string())
        );
        assert_eq!(
            normalize_reaction_label("Joy Funny reacted with Support"),
            Some("support".to_string())
        );
        assert_eq!(normalize_reaction_label("Hope Love reacted with"), None);
    }

    #[test]
    fn test_clean_attribute() {
        assert_eq!(
            clean_attribute("  https://media.example/photo.jpg "),
            Some("https://media.example/photo.jpg".to_string())
        );
        assert_eq!(clean_attribute("   "), None);
    }
}
