//! Profile page selector tables: top card, about section, contact block.
//!
//! Tier order is always current markup, then legacy markup (the pre-2022
//! `pv-top-card` layout and the logged-out public profile), then generic
//! structure, then a universal fallback where one is safe.

use super::Tier;

// ============================================================
// TOP CARD
// ============================================================

/// Member name.
pub static FULL_NAME: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "h1.text-heading-xlarge",
            "h1.inline.t-24",
            "div.ph5 h1",
            "section.artdeco-card h1",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "li.inline.t-24.t-black.t-normal.break-words",
            "h1.pv-top-card-section__name",
            ".pv-top-card-v2-section__info h1",
            "h1.top-card-layout__title",
        ],
    ),
    Tier::new(
        "generic",
        &[
            "[data-anonymize='person-name']",
            "main section h1",
        ],
    ),
    Tier::new("fallback", &["h1"]),
];

/// One-line professional headline under the name.
pub static HEADLINE: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.text-body-medium.break-words",
            "div.ph5 div.text-body-medium",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "h2.pv-top-card-section__headline",
            "h2.mt1.t-18.t-black.t-normal",
            "h2.top-card-layout__headline",
        ],
    ),
    Tier::new("generic", &["[data-anonymize='headline']", "main section h1 + div"]),
];

/// Member location in the top card.
pub static LOCATION: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.ph5 span.text-body-small.inline.t-black--light.break-words",
            "span.text-body-small.inline.t-black--light.break-words",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "li.t-16.t-black.t-normal.inline-block",
            "h3.pv-top-card-section__location",
            "div.top-card__subline-item",
            "span.top-card__subline-item",
        ],
    ),
    Tier::new("generic", &["[data-anonymize='location']"]),
];

/// Profile photo (`src`).
pub static PROFILE_IMAGE: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "img.pv-top-card-profile-picture__image--show",
            "img.pv-top-card-profile-picture__image",
            "button.pv-top-card-profile-picture img",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "img.pv-top-card-section__photo",
            "img.profile-photo-edit__preview",
            "img.top-card__profile-image",
        ],
    ),
    Tier::new(
        "generic",
        &[
            "img[data-anonymize='headshot-photo']",
            "img[class*='profile-picture']",
            "img[class*='profile-photo']",
        ],
    ),
];

/// Current employer button on the right of the top card.
pub static TOP_CARD_COMPANY: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "button[aria-label^='Current company'] div.inline-show-more-text",
            "button[aria-label^='Current company'] span",
            "ul.pv-text-details__right-panel li:first-child span.pv-text-details__right-panel-item-text",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "a[data-control-name='position_see_more'] span.pv-top-card--experience-list-item",
            "li.pv-top-card--experience-list-item",
            "a.top-card-link[data-section='currentPositionsDetails'] span.top-card-link__description",
        ],
    ),
];

/// Link behind the current employer in the top card (`href`).
pub static TOP_CARD_COMPANY_LINK: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "ul.pv-text-details__right-panel a[href*='/company/']",
            "div.ph5 a[href*='/company/']",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "a[data-control-name='position_see_more'][href*='/company/']",
            "a.top-card-link[data-section='currentPositionsDetails']",
        ],
    ),
];

/// Dedicated current-title node in the top card (older and public layouts).
pub static TOP_CARD_TITLE: &[Tier] = &[Tier::new(
    "legacy",
    &[
        "div.pv-top-card--experience-list-item-title",
        "span.top-card__position",
        "[data-field='current_title']",
    ],
)];

/// Connection summary ("500+ connections").
pub static CONNECTIONS: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "a[href*='/mynetwork/invite-connect/connections/'] span.t-black--light",
            "ul.pv-top-card--list-bullet li.text-body-small span.t-black--light",
            "li.text-body-small span.t-black--light",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "span.pv-top-card--list-bullet",
            "ul.pv-top-card--list-bullet li span.t-16",
            "span.top-card__subline-item--bullet",
        ],
    ),
    Tier::new("generic", &["[class*='connections']"]),
];

/// Follower summary ("1,204 followers").
pub static FOLLOWERS: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "ul.pv-top-card--list-bullet li.text-body-small:first-child span.t-black--light",
            "li.text-body-small span.t-black--light",
            "p.pvs-header__optional-link span[aria-hidden='true']",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "li.pv-recent-activity-section__follower-count",
            "span.top-card__subline-item--followers",
        ],
    ),
    Tier::new("generic", &["[class*='followers']"]),
];

// ============================================================
// ABOUT SECTION AND CANONICAL URL
// ============================================================

/// Summary text of the "About" section.
pub static ABOUT: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "#about ~ div.display-flex div.inline-show-more-text span[aria-hidden='true']",
            "#about ~ div.display-flex span[aria-hidden='true']",
        ],
    ),
    Tier::new(
        "legacy",
        &[
            "p.pv-about__summary-text",
            "section.pv-about-section p",
            "section.summary div.core-section-container__content p",
        ],
    ),
    Tier::new("generic", &["[data-section='summary'] p"]),
];

/// Canonical profile URL (`href` / `content`).
pub static CANONICAL_LINK: &[Tier] = &[Tier::new("head", &["link[rel='canonical']"])];

/// Open Graph URL, used when no canonical link is present.
pub static OG_URL: &[Tier] = &[Tier::new(
    "head",
    &["meta[property='og:url']", "meta[name='og:url']"],
)];

// ============================================================
// CONTACT BLOCK
// ============================================================

/// Containers of the contact-info overlay; searched before the caller's root.
pub static CONTACT_CONTAINERS: &[&str] = &[
    "section.pv-contact-info",
    "div.pv-contact-info",
    "div[aria-labelledby='pv-contact-info'] div.artdeco-modal__content",
    "div.artdeco-modal__content section.pv-profile-section",
];

/// Email address text.
pub static EMAIL: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "section.ci-email a[href^='mailto:']",
            "section.pv-contact-info__contact-type.ci-email a",
        ],
    ),
    Tier::new(
        "generic",
        &["a[href^='mailto:']", "[data-field='email']"],
    ),
];

/// Email from a `mailto:` link target when the link text is not an address.
pub static EMAIL_LINK: &[Tier] = &[Tier::new("link", &["a[href^='mailto:']"])];

/// Phone numbers; every match of every selector is collected.
pub static PHONE: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "section.ci-phone li span.t-14.t-black.t-normal",
            "section.pv-contact-info__contact-type.ci-phone li span",
        ],
    ),
    Tier::new("generic", &["a[href^='tel:']", "[data-field='phone']"]),
];

/// Birthday text.
pub static BIRTHDAY: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "section.ci-birthday span.t-14.t-black.t-normal",
            "section.pv-contact-info__contact-type.ci-birthday div span",
            "section.ci-birthday span",
        ],
    ),
    Tier::new("generic", &["[data-field='birthday']"]),
];

/// Website links (`href`); every match is collected.
pub static WEBSITES: &[&str] = &[
    "section.ci-websites a[href]",
    "section.pv-contact-info__contact-type.ci-websites a[href]",
];
