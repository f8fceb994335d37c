//! Top-card and contact-block field extraction.

use tracing::debug;

use crate::dom::{Queryable, ScopeUnion, Selection};
use crate::extractor::segment::collect_rows;
use crate::normalize::{
    clean_company_name, clean_connections_text, clean_email, clean_followers_text, clean_location,
    clean_phone, dedupe_phones, phone_from_href,
};
use crate::result::FieldMatch;
use crate::selector::profile::{
    ABOUT, BIRTHDAY, CANONICAL_LINK, CONNECTIONS, CONTACT_CONTAINERS, EMAIL, EMAIL_LINK, FOLLOWERS,
    FULL_NAME, HEADLINE, LOCATION, OG_URL, PHONE, PROFILE_IMAGE, TOP_CARD_COMPANY,
    TOP_CARD_COMPANY_LINK, TOP_CARD_TITLE, WEBSITES,
};
use crate::selector::{all_selectors, Matcher};
use crate::url_utils::{resolve_or_keep, resolve_url};

/// Everything read from the profile header.
#[derive(Debug, Clone)]
pub struct TopCard {
    pub full_name: FieldMatch,
    pub headline: FieldMatch,
    pub location: FieldMatch,
    pub profile_image: FieldMatch,
    pub profile_url: FieldMatch,
    pub about: FieldMatch,

    /// Dedicated current-title node, when the layout has one.
    pub title: FieldMatch,

    /// Current employer shown next to the name.
    pub company: FieldMatch,
    pub company_url: FieldMatch,

    pub connections: FieldMatch,
    pub followers: FieldMatch,
}

/// Resolve the header fields.
pub fn resolve_top_card<Q>(root: &Q, matcher: &Matcher) -> TopCard
where
    Q: Queryable + ?Sized,
{
    let full_name = matcher.text(root, "fullName", FULL_NAME);
    let headline = matcher.text(root, "headline", HEADLINE);

    let headline_text = headline.value();
    let location = matcher.text_with(root, "location", LOCATION, |raw| {
        clean_location(raw, headline_text)
    });

    let profile_image = matcher.attribute(root, "profileImageUrl", PROFILE_IMAGE, "src");

    let origin = matcher.origin.as_ref();
    let profile_url = matcher
        .attribute(root, "profileUrl", CANONICAL_LINK, "href")
        .or_else(|| {
            matcher
                .continuing(CANONICAL_LINK.len())
                .attribute_with(root, "profileUrl", OG_URL, "content", |raw| {
                    resolve_or_keep(raw, origin)
                })
        });

    let about = matcher.text(root, "about", ABOUT);
    let title = matcher.text(root, "topCardTitle", TOP_CARD_TITLE);
    let company = matcher.text_with(root, "topCardCompany", TOP_CARD_COMPANY, clean_company_name);
    let company_url = matcher.attribute(root, "topCardCompanyUrl", TOP_CARD_COMPANY_LINK, "href");

    let connections = matcher.text_with(root, "connections", CONNECTIONS, clean_connections_text);
    let followers = matcher.text_with(root, "followers", FOLLOWERS, clean_followers_text);

    debug!(
        full_name = full_name.is_matched(),
        headline = headline.is_matched(),
        company = company.is_matched(),
        "top card resolved"
    );

    TopCard {
        full_name,
        headline,
        location,
        profile_image,
        profile_url,
        about,
        title,
        company,
        company_url,
        connections,
        followers,
    }
}

/// Contact block fields.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub email: FieldMatch,

    /// Provenance of the first phone number.
    pub phone: FieldMatch,
    pub phone_numbers: Vec<String>,

    pub birthday: FieldMatch,
    pub websites: Vec<String>,
}

/// Resolve contact details from the contact-info containers, then `root`.
///
/// Each field is taken from the first scope that yields it; phone numbers
/// and websites are collected across all scopes.
pub fn resolve_contact<Q>(root: &Q, matcher: &Matcher) -> ContactInfo
where
    Q: Queryable,
{
    let containers = collect_rows(root, CONTACT_CONTAINERS);
    let mut scopes: Vec<&dyn Queryable> = containers
        .iter()
        .map(|c| c as &dyn Queryable)
        .collect();
    scopes.push(root);
    debug!(containers = containers.len(), "contact scopes");

    let email = first_scope(&scopes, "email", |scope| {
        matcher
            .text_with(scope, "email", EMAIL, clean_email)
            .or_else(|| {
                matcher
                    .continuing(EMAIL.len())
                    .attribute_with(scope, "email", EMAIL_LINK, "href", clean_email)
            })
    });
    let phone = first_scope(&scopes, "phoneNumbers", |scope| {
        matcher.text_with(scope, "phoneNumbers", PHONE, clean_phone)
    });
    let birthday = first_scope(&scopes, "birthday", |scope| {
        matcher.text(scope, "birthday", BIRTHDAY)
    });

    let union = ScopeUnion::new(scopes);
    let phone_numbers = collect_phones(&union);
    let websites = collect_websites(&union, matcher);

    ContactInfo {
        email,
        phone,
        phone_numbers,
        birthday,
        websites,
    }
}

fn first_scope<F>(scopes: &[&dyn Queryable], field: &str, resolve: F) -> FieldMatch
where
    F: Fn(&dyn Queryable) -> FieldMatch,
{
    let containers = scopes.len().saturating_sub(1);
    let mut acc = FieldMatch::new(field);

    for (i, scope) in scopes.iter().enumerate() {
        let found = resolve(*scope);
        acc = if i == 0 { found } else { acc.or_else(|| found) };
        if acc.is_matched() {
            if i < containers {
                acc.notes.push(format!("Found in contact container #{i}"));
            }
            return acc;
        }
    }
    acc
}

fn collect_phones(union: &ScopeUnion<'_>) -> Vec<String> {
    let mut raw = Vec::new();
    for selector in all_selectors(PHONE) {
        for node in union.query_all(selector) {
            if let Some(phone) = phone_of(&node) {
                raw.push(phone);
            }
        }
    }
    dedupe_phones(raw)
}

fn phone_of(node: &Selection) -> Option<String> {
    if let Some(href) = node.attr("href") {
        if let Some(phone) = phone_from_href(&href) {
            return Some(phone);
        }
    }
    clean_phone(&node.text())
}

fn collect_websites(union: &ScopeUnion<'_>, matcher: &Matcher) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for selector in WEBSITES {
        for node in union.query_all(selector) {
            let Some(href) = node.attr("href") else { continue };
            if let Some(url) = resolve_url(&href, matcher.origin.as_ref()) {
                if !out.contains(&url) {
                    out.push(url);
                }
            }
        }
    }
    out
}
