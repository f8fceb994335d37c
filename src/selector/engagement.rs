//! Reactor and commenter selectors.
//!
//! Reactor rows come from the reactions modal; commenter rows from the
//! comment list under a post. Replies are comment rows nested inside their
//! parent comment.

use super::Tier;

// ============================================================
// REACTORS
// ============================================================

/// Rows of the reactions list.
pub static REACTOR_ROWS: &[&str] = &[
    "div.social-details-reactors-tab-body li.social-details-reactors-tab-body-list-item",
    "li.social-details-reactors-tab-body-list-item",
    "div.social-details-reactors-modal li.artdeco-list__item",
    "ul.social-details-reactors-tab-body-list > li",
    "[data-test-reactions-list] li",
];

/// Profile link candidates inside a reactor row; the first anchor found wins.
pub static REACTOR_ANCHORS: &[&str] = &[
    "a.link-without-hover-state[href]",
    "a[data-test-app-aware-link][href]",
    "a[href*='/in/']",
    "a[href]",
];

/// Reactor display name.
pub static REACTOR_NAME: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.artdeco-entity-lockup__title span[aria-hidden='true']",
            "span.artdeco-entity-lockup__title span[aria-hidden='true']",
            "div.artdeco-entity-lockup__title",
        ],
    ),
    Tier::new("legacy", &["span.reactor-name", "[data-anonymize='person-name']"]),
];

/// Reactor headline.
pub static REACTOR_HEADLINE: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.artdeco-entity-lockup__caption",
            "div.artdeco-entity-lockup__subtitle",
        ],
    ),
    Tier::new("legacy", &["span.reactor-headline", "[data-anonymize='headline']"]),
];

/// Location line of a lockup, when rendered.
pub static ENGAGEMENT_LOCATION: &[Tier] = &[Tier::new(
    "current",
    &[
        "div.artdeco-entity-lockup__metadata",
        "[data-anonymize='location']",
    ],
)];

/// Reaction icon type attribute (`data-test-reactions-icon-type`).
pub static REACTION_ICON_TYPE: &[Tier] = &[Tier::new(
    "icon-type",
    &["[data-test-reactions-icon-type]"],
)];

/// Reaction icon image (`alt`).
pub static REACTION_ICON_ALT: &[Tier] = &[Tier::new(
    "icon-alt",
    &[
        "img.reactions-icon",
        "img.social-details-reactors-tab-body__reaction-icon",
        "img[alt]",
    ],
)];

/// Reaction icon accessible label (`aria-label`).
pub static REACTION_ICON_LABEL: &[Tier] = &[Tier::new(
    "icon-label",
    &["[aria-label*='reacted']", "li-icon[aria-label]"],
)];

/// Reaction named in text.
pub static REACTION_TEXT: &[Tier] = &[Tier::new(
    "text",
    &["span.reaction-type", "span.visually-hidden"],
)];

// ============================================================
// COMMENTERS
// ============================================================

/// Comment rows, replies included.
pub static COMMENT_ROWS: &[&str] = &[
    "article.comments-comment-entity",
    "article.comments-comment-item",
    "div.comments-comments-list article",
    "[data-id^='urn:li:comment']",
];

/// Profile link candidates inside a comment row; the first anchor found wins.
pub static COMMENT_ANCHORS: &[&str] = &[
    "a.comments-comment-meta__description-container[href]",
    "a.comments-post-meta__actor-link[href]",
    "a.comments-comment-meta__image-link[href]",
    "a.comments-comment-item__image-link[href]",
    "a[href*='/in/']",
    "a[href]",
];

/// Commenter display name.
pub static COMMENTER_NAME: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "span.comments-comment-meta__description-title",
            "span.comments-post-meta__name-text span[aria-hidden='true']",
            "span.comments-post-meta__name-text",
        ],
    ),
    Tier::new(
        "legacy",
        &["h3.comments-comment-item__post-meta span", "[data-anonymize='person-name']"],
    ),
];

/// Commenter headline.
pub static COMMENTER_HEADLINE: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "div.comments-comment-meta__description-subtitle",
            "span.comments-post-meta__headline",
        ],
    ),
    Tier::new("legacy", &["div.comments-comment-item__post-meta span.t-12"]),
];

/// Comment body.
pub static COMMENT_BODY: &[Tier] = &[
    Tier::new(
        "current",
        &[
            "span.comments-comment-item__main-content",
            "div.comments-comment-item__main-content",
            "div.comments-comment-item-content-body span[dir='ltr']",
        ],
    ),
    Tier::new(
        "legacy",
        &["div.update-components-text span[dir='ltr']", "[data-test-comment-body]"],
    ),
];
