//! Experience and education selectors.
//!
//! Row selectors locate list items; field tiers are evaluated inside one row.
//! Current markup renders every line of a row as a `span[aria-hidden]` with
//! a visually hidden duplicate next to it, so field selectors target the
//! `aria-hidden` copy.

use super::Tier;

// ============================================================
// EXPERIENCE ROWS
// ============================================================

/// Structural row selectors; matches of all of them are unioned.
pub static EXPERIENCE_ROWS: &[&str] = &[
    // Current profile page: anchor div, then header, then the list
    "#experience ~ div ul > li.artdeco-list__item",
    "#experience ~ div li.pvs-list__paged-list-item",
    // Legacy layout
    "section#experience-section li.pv-entity__position-group-pager",
    "section#experience-section li.pv-profile-section__list-item",
    "section#experience-section ul > li",
    // Public profile
    "section.experience li.experience-item",
    "section[data-section='experience'] li.profile-section-card",
    "ul.experience__list > li",
];

/// Job title inside a row.
pub static TITLE: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.t-bold span[aria-hidden='true']",
            "span.mr1.t-bold span[aria-hidden='true']",
            "div.display-flex.t-bold span",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "h3.t-16.t-black.t-bold",
            "div.pv-entity__summary-info h3",
            "h3.pv-entity__summary-info-v2",
        ],
    ),
    Tier::new(
        "public",
        &["h3.experience-item__title", "h3.profile-section-card__title"],
    ),
    Tier::new("generic", &["[data-field='experience_title']", "h3"]),
];

/// Organization link in a row (text and `href`).
pub static COMPANY_LINK: &[Tier] = &[Tier::new(
    "link",
    &[
        "a[data-field='experience_company_logo'][href*='/company/']",
        "a[href*='/company/']",
        "a[href*='/school/']",
    ],
)];

/// Styled company text when no usable link text exists.
pub static COMPANY_TEXT: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "span.t-14.t-normal:not(.t-black--light) span[aria-hidden='true']",
            "span.t-14.t-normal span[aria-hidden='true']",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "p.pv-entity__secondary-title",
            "span.pv-entity__secondary-title",
            "h4.t-16.t-black.t-normal span:not(.visually-hidden)",
        ],
    ),
    Tier::new(
        "public",
        &["h4.experience-item__subtitle", "h4.profile-section-card__subtitle"],
    ),
    Tier::new("generic", &["[data-field='experience_company']", "h4"]),
];

/// Displayed date range.
pub static DATE_RANGE: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "span.t-14.t-normal.t-black--light span[aria-hidden='true']",
            "span.pvs-entity__caption-wrapper",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "h4.pv-entity__date-range span:not(.visually-hidden)",
            "span.pv-entity__date-range",
        ],
    ),
    Tier::new(
        "public",
        &["span.date-range", "p.experience-item__meta-item"],
    ),
    Tier::new("generic", &["time", "[class*='date']"]),
];

/// Position location; the second caption line in current markup.
pub static LOCATION: &[Tier] = &[
    Tier::new(
        "current",
        &["span.t-14.t-normal.t-black--light ~ span.t-14.t-normal.t-black--light span[aria-hidden='true']"],
    ),
    Tier::new(
        "legacy",
        &[
            "h4.pv-entity__location span:not(.visually-hidden)",
            "span.pv-entity__location",
        ],
    ),
    Tier::new(
        "public",
        &["p.experience-item__location", "p.experience-item__meta-item--location"],
    ),
];

/// Role description.
pub static DESCRIPTION: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.inline-show-more-text span[aria-hidden='true']",
            "div.pvs-list__outer-container div.t-14.t-normal.t-black span[aria-hidden='true']",
        ],
    ),
    Tier::new(
        "legacy",
        &["div.pv-entity__extra-details p", "p.pv-entity__description"],
    ),
    Tier::new(
        "public",
        &["p.show-more-less-text__text--less", "div.experience-item__description"],
    ),
];

// ============================================================
// EDUCATION ROWS
// ============================================================

/// Structural row selectors for the education list.
pub static EDUCATION_ROWS: &[&str] = &[
    "#education ~ div ul > li.artdeco-list__item",
    "#education ~ div li.pvs-list__paged-list-item",
    "section#education-section li.pv-education-entity",
    "section#education-section ul > li",
    "section.education li.education__list-item",
    "ul.education__list > li",
];

/// School name.
pub static SCHOOL: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.t-bold span[aria-hidden='true']",
            "div.display-flex.t-bold span",
        ],
    ),
    Tier::new(
        "legacy",
        &["h3.pv-entity__school-name", "div.pv-entity__degree-info h3"],
    ),
    Tier::new("public", &["h3.education__item--school-name", "h3.profile-section-card__title"]),
    Tier::new("generic", &["a[href*='/school/']", "h3"]),
];

/// School page link (`href`).
pub static SCHOOL_LINK: &[Tier] = &[Tier::new(
    "link",
    &["a[href*='/school/']", "a[href*='/company/']"],
)];

/// Degree name; current markup joins degree and field with ", ".
pub static DEGREE: &[Tier] = &[
    Tier::new(
        "current",
        &["span.t-14.t-normal:not(.t-black--light) span[aria-hidden='true']"],
    ),
    Tier::new(
        "legacy",
        &[
            "p.pv-entity__degree-name span.pv-entity__comma-item",
            "p.pv-entity__secondary-title.pv-entity__degree-name span:not(.visually-hidden)",
        ],
    ),
    Tier::new(
        "public",
        &["span.education__item--degree-name", "h4.profile-section-card__subtitle span:first-child"],
    ),
];

/// Field of study, when rendered separately.
pub static FIELD_OF_STUDY: &[Tier] = &[
    Tier::new(
        "legacy",
        &[
            "p.pv-entity__fos span.pv-entity__comma-item",
            "p.pv-entity__secondary-title.pv-entity__fos span:not(.visually-hidden)",
        ],
    ),
    Tier::new(
        "public",
        &["span.education__item--degree-info", "h4.profile-section-card__subtitle span:last-child"],
    ),
];

/// Education date range.
pub static EDUCATION_DATES: &[Tier] = &[
    Tier::new(
        "current",
        &["span.t-14.t-normal.t-black--light span[aria-hidden='true']"],
    ),
    Tier::new(
        "legacy",
        &["p.pv-entity__dates span:not(.visually-hidden)", "p.pv-entity__dates time"],
    ),
    Tier::new("public", &["span.date-range", "p.education__item--duration"]),
];
