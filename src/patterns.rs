//! Compiled regex patterns for normalization and row classification.
//!
//! All patterns are compiled once on first use with `LazyLock`. They are
//! immutable, so extraction stays safe to call from many threads at once.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Scraping Artifacts
// =============================================================================

/// Accessibility chrome glued onto names: "View Jane Doe’s profile",
/// "View profile", "View Jane Doe's verified profile".
pub static PROFILE_CHROME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bview\s+(?:[^\s'’][^'’]*?['’]s?\s+)?(?:full\s+|verified\s+)?profile\b")
        .expect("PROFILE_CHROME regex")
});

/// Trailing relationship badge: "2nd degree connection", "• 3rd+ degree connection · Follow".
pub static DEGREE_CONNECTION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[•·]?\s*\b(?:1st|2nd|3rd\+?)\s+degree\s+connection.*$")
        .expect("DEGREE_CONNECTION_SUFFIX regex")
});

/// Bare trailing degree badge without the word "connection": "Jane Doe • 2nd".
pub static DEGREE_BADGE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*[•·]\s*(?:1st|2nd|3rd\+?)\s*$").expect("DEGREE_BADGE_SUFFIX regex")
});

/// Runs of whitespace (including non-breaking spaces).
pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\x{00A0}\x{200B}]+").expect("WHITESPACE_RUN regex")
});

/// Relationship badges mis-scraped as locations.
pub static LOCATION_REJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)connection|degree|follower").expect("LOCATION_REJECT regex")
});

// =============================================================================
// Contact Details
// =============================================================================

/// Conservative `local@domain.tld` shape.
pub static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("EMAIL_SHAPE regex")
});

/// Phone type annotation rendered next to the number: "(Mobile)", "(Work)".
pub static PHONE_TYPE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*\((?:mobile|work|home|other|phone)\)\s*$")
        .expect("PHONE_TYPE_ANNOTATION regex")
});

// =============================================================================
// Dates and Counts
// =============================================================================

/// Parenthetical duration annotation: "(3 yrs 2 mos)".
pub static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\)").expect("PARENTHETICAL regex")
});

/// Middle-dot trailer carrying a duration: "· 3 yrs".
pub static DOT_TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*·.*$").expect("DOT_TRAILER regex")
});

/// En dash, em dash and the other dash code points used as range separators.
pub static DASHES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{2010}-\x{2015}\x{2212}]").expect("DASHES regex")
});

/// An ongoing-range end marker.
pub static PRESENT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:present|current|now)$").expect("PRESENT_MARKER regex")
});

/// "present" anywhere in a raw date-range text.
pub static PRESENT_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bpresent\b").expect("PRESENT_WORD regex")
});

/// Text that looks like a date or date range: a four-digit year or an ongoing marker.
pub static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:19|20)\d{2}\b|\bpresent\b").expect("DATE_SHAPE regex")
});

/// Connection-count summary: "500+ connections".
pub static CONNECTIONS_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bconnections?\b").expect("CONNECTIONS_WORD regex")
});

/// Follower-count summary: "1,204 followers".
pub static FOLLOWERS_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bfollowers?\b").expect("FOLLOWERS_WORD regex")
});

/// Leading count with optional magnitude suffix: "1.2k", "500", "3M".
/// The suffix must end a word so "12 months" stays 12.
pub static COUNT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:([kmb])\b)?").expect("COUNT_PREFIX regex")
});

// =============================================================================
// Row Classification
// =============================================================================

/// Words that mark a row as an education record.
pub static EDUCATION_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:university|universidad|universit[éàa]|college|school|institute|academy|polytechnic|bachelor(?:'s)?|master(?:'s)?|b\.?sc|m\.?sc|b\.?a|m\.?a|mba|ph\.?d|doctorate|degree|diploma|graduate)\b",
    )
    .expect("EDUCATION_KEYWORDS regex")
});

/// Words that only appear in employment rows: durations and employment types.
pub static EMPLOYMENT_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:present|\d+\s*yrs?|\d+\s*mos?|yrs|mos|full[- ]time|part[- ]time|self[- ]employed|freelance|internship|contract)\b",
    )
    .expect("EMPLOYMENT_KEYWORDS regex")
});

// =============================================================================
// Names and Headlines
// =============================================================================

/// Separators that introduce trailing metadata after a person's name.
pub static NAME_METADATA_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[·|•]").expect("NAME_METADATA_SEPARATOR regex")
});

/// "Title at Company" headline; the greedy title splits on the last " at ".
pub static HEADLINE_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+)\s+(?:at|@)\s+(.+)$").expect("HEADLINE_AT regex")
});

/// Reaction type named in icon alt text, icon type attributes or screen-reader
/// text: "Jane Doe reacted with Celebrate", "PRAISE". Internal type names
/// (praise, appreciation, empathy, interest, entertainment, maybe) are matched
/// too and mapped to display names by the normalizer.
pub static REACTION_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(like|celebrate|support|love|insightful|funny|curious|praise|appreciation|empathy|interest|entertainment|maybe)\b",
    )
    .expect("REACTION_PHRASE regex")
});

/// "reacted with" in screen-reader text; the reaction follows it.
pub static REACTED_WITH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\breacted\s+with\b").expect("REACTED_WITH regex"));
