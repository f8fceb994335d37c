//! Reactor and commenter extraction.
//!
//! Each row must carry a profile link that resolves to an absolute URL; the
//! normalized URL is the identity used for deduplication. Every lookup stays
//! inside its own row: a reply nested in a comment is a row of its own.

use std::collections::HashSet;

use tracing::debug;

use super::segment::collect_rows;
use crate::dom::{is_descendant_of, is_within, FilteredScope, Queryable, Selection};
use crate::normalize::{clean_location_text, clean_person_name, normalize_reaction_label};
use crate::options::Options;
use crate::result::{Engagement, EngagementProfile};
use crate::selector::engagement::{
    COMMENTER_HEADLINE, COMMENTER_NAME, COMMENT_ANCHORS, COMMENT_BODY, COMMENT_ROWS,
    ENGAGEMENT_LOCATION, REACTION_ICON_ALT, REACTION_ICON_LABEL, REACTION_ICON_TYPE,
    REACTION_TEXT, REACTOR_ANCHORS, REACTOR_HEADLINE, REACTOR_NAME, REACTOR_ROWS,
};
use crate::selector::{Matcher, Tier};
use crate::url_utils::{normalize_profile_url, resolve_url};

/// Which engagement list to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementKind {
    /// People who reacted; a name is optional.
    Reactor,
    /// People who commented; rows without a name are dropped.
    Commenter,
}

struct KindTables {
    rows: &'static [&'static str],
    anchors: &'static [&'static str],
    name: &'static [Tier],
    headline: &'static [Tier],
}

impl EngagementKind {
    fn tables(self) -> KindTables {
        match self {
            Self::Reactor => KindTables {
                rows: REACTOR_ROWS,
                anchors: REACTOR_ANCHORS,
                name: REACTOR_NAME,
                headline: REACTOR_HEADLINE,
            },
            Self::Commenter => KindTables {
                rows: COMMENT_ROWS,
                anchors: COMMENT_ANCHORS,
                name: COMMENTER_NAME,
                headline: COMMENTER_HEADLINE,
            },
        }
    }

    fn limit(self, options: &Options) -> Option<usize> {
        match self {
            Self::Reactor => options.reactor_limit,
            Self::Commenter => options.comment_limit,
        }
    }
}

/// Extract engagement profiles of one kind, deduplicated by profile URL.
///
/// The per-kind limit from `options` caps the result after deduplication.
pub fn extract_engagements<Q>(root: &Q, kind: EngagementKind, options: &Options) -> Vec<EngagementProfile>
where
    Q: Queryable + ?Sized,
{
    let tables = kind.tables();
    let limit = kind.limit(options);
    let matcher = Matcher {
        include_paths: false,
        ..Matcher::from_options(options)
    };

    let rows = collect_rows(root, tables.rows);
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for row in &rows {
        if limit.is_some_and(|max| out.len() >= max) {
            break;
        }

        let nested: Vec<&Selection> = rows.iter().filter(|other| is_descendant_of(other, row)).collect();
        let own = FilteredScope::new(row.clone(), |found: &Selection| {
            !nested.iter().any(|inner| is_within(found, inner))
        });

        let Some(anchor) = profile_anchor(&own, tables.anchors) else {
            debug!(?kind, "row without profile link");
            continue;
        };
        let href = anchor.attr("href").map(|h| h.to_string()).unwrap_or_default();
        let Some(url) = resolve_url(&href, matcher.origin.as_ref()) else {
            debug!(?kind, %href, "unresolvable profile link");
            continue;
        };
        let profile_url = normalize_profile_url(&url);
        if seen.contains(&profile_url) {
            continue;
        }

        let name = matcher
            .text_with(&own, "name", tables.name, clean_person_name)
            .value
            .or_else(|| clean_person_name(&anchor.text()));
        if kind == EngagementKind::Commenter && name.is_none() {
            debug!(%profile_url, "commenter without a name");
            continue;
        }

        let headline = matcher.text(&own, "headline", tables.headline).value;
        let location = matcher
            .text_with(&own, "location", ENGAGEMENT_LOCATION, clean_location_text)
            .value;

        let engagement = match kind {
            EngagementKind::Reactor => Engagement::Reaction {
                reaction_label: reaction_label(&own, &matcher),
            },
            EngagementKind::Commenter => Engagement::Comment {
                comment_text: matcher.text(&own, "commentText", COMMENT_BODY).value,
            },
        };

        seen.insert(profile_url.clone());
        out.push(EngagementProfile {
            profile_url,
            full_name: name,
            headline,
            location,
            engagement,
        });
    }

    debug!(?kind, rows = rows.len(), profiles = out.len(), "engagement extracted");
    out
}

/// First anchor with a non-empty `href`, trying selectors in order.
fn profile_anchor<'r, Q>(row: &'r Q, anchors: &[&str]) -> Option<Selection<'r>>
where
    Q: Queryable + ?Sized,
{
    anchors.iter().find_map(|selector| {
        row.query_first(selector)
            .filter(|a| a.attr("href").is_some_and(|h| !h.trim().is_empty()))
    })
}

/// Reaction label from the icon type, icon alt text, accessible label or text.
fn reaction_label<Q>(row: &Q, matcher: &Matcher) -> Option<String>
where
    Q: Queryable + ?Sized,
{
    let field = "reactionLabel";
    matcher
        .attribute_with(row, field, REACTION_ICON_TYPE, "data-test-reactions-icon-type", normalize_reaction_label)
        .or_else(|| {
            matcher
                .continuing(1)
                .attribute_with(row, field, REACTION_ICON_ALT, "alt", normalize_reaction_label)
        })
        .or_else(|| {
            matcher
                .continuing(2)
                .attribute_with(row, field, REACTION_ICON_LABEL, "aria-label", normalize_reaction_label)
        })
        .or_else(|| {
            matcher
                .continuing(3)
                .text_with(row, field, REACTION_TEXT, normalize_reaction_label)
        })
        .value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse;

    fn reactor_row(href: &str, name: &str, reaction: &str) -> String {
        format!(
            r#"<li class="social-details-reactors-tab-body-list-item">
                 <a class="link-without-hover-state" href="{href}">
                   <div class="artdeco-entity-lockup__title"><span aria-hidden="true">{name}</span></div>
                   <div class="artdeco-entity-lockup__caption">Founder at Somewhere</div>
                 </a>
                 <img class="reactions-icon" alt="{reaction}">
               </li>"#
        )
    }

    fn reactors_page(rows: &[String]) -> String {
        format!(
            r#"<div class="social-details-reactors-tab-body"><ul>{}</ul></div>"#,
            rows.concat()
        )
    }

    #[test]
    fn test_reactors_basic() {
        let html = reactors_page(&[reactor_row("/in/jane-doe/?miniProfileUrn=1", "Jane Doe", "celebrate")]);
        let doc = parse(&html);
        let reactors = extract_engagements(&doc, EngagementKind::Reactor, &Options::default());

        assert_eq!(reactors.len(), 1);
        let r = &reactors[0];
        assert_eq!(r.profile_url, "https://www.linkedin.com/in/jane-doe");
        assert_eq!(r.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(r.headline.as_deref(), Some("Founder at Somewhere"));
        assert_eq!(r.reaction_label(), Some("celebrate"));
    }

    #[test]
    fn test_reactors_dedupe_by_normalized_url() {
        let html = reactors_page(&[
            reactor_row("/in/jane-doe/", "Jane Doe", "like"),
            reactor_row("https://www.linkedin.com/in/jane-doe?trk=x", "Jane D.", "love"),
            reactor_row("/in/john-roe/", "John Roe", "like"),
        ]);
        let doc = parse(&html);
        let reactors = extract_engagements(&doc, EngagementKind::Reactor, &Options::default());

        assert_eq!(reactors.len(), 2);
        assert_eq!(reactors[0].full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(reactors[0].reaction_label(), Some("like"));
    }

    #[test]
    fn test_reactor_limit_applies_after_dedup() {
        let html = reactors_page(&[
            reactor_row("/in/a/", "A", "like"),
            reactor_row("/in/a/", "A", "like"),
            reactor_row("/in/b/", "B", "like"),
            reactor_row("/in/c/", "C", "like"),
        ]);
        let doc = parse(&html);
        let options = Options {
            reactor_limit: Some(2),
            ..Options::default()
        };
        let reactors = extract_engagements(&doc, EngagementKind::Reactor, &options);
        let urls: Vec<&str> = reactors.iter().map(|r| r.profile_url.as_str()).collect();
        assert_eq!(urls, vec!["https://www.linkedin.com/in/a", "https://www.linkedin.com/in/b"]);
    }

    #[test]
    fn test_row_without_link_is_discarded() {
        let html = r#"<ul><li class="social-details-reactors-tab-body-list-item">
            <div class="artdeco-entity-lockup__title">Ghost</div></li></ul>"#;
        let doc = parse(html);
        assert!(extract_engagements(&doc, EngagementKind::Reactor, &Options::default()).is_empty());
    }

    #[test]
    fn test_unresolvable_link_without_origin() {
        let html = reactors_page(&[reactor_row("/in/jane/", "Jane", "like")]);
        let doc = parse(&html);
        let options = Options {
            origin: None,
            ..Options::default()
        };
        assert!(extract_engagements(&doc, EngagementKind::Reactor, &options).is_empty());
    }

    #[test]
    fn test_name_falls_back_to_anchor_text() {
        let html = r#"<ul><li class="social-details-reactors-tab-body-list-item">
            <a href="/in/sam/">Sam Lee View Sam Lee’s profile</a></li></ul>"#;
        let doc = parse(html);
        let reactors = extract_engagements(&doc, EngagementKind::Reactor, &Options::default());
        assert_eq!(reactors[0].full_name.as_deref(), Some("Sam Lee"));
        assert_eq!(reactors[0].reaction_label(), None);
    }

    #[test]
    fn test_comment_rows() {
        let html = r#"<div class="comments-comments-list">
            <article class="comments-comment-entity">
              <a class="comments-comment-meta__description-container" href="/in/ana/">
                <span class="comments-comment-meta__description-title">Ana Silva</span>
                <div class="comments-comment-meta__description-subtitle">Data Scientist</div>
              </a>
              <span class="comments-comment-item__main-content">Great write-up!</span>
              <article class="comments-comment-entity">
                <a class="comments-comment-meta__description-container" href="/in/bo/">
                  <span class="comments-comment-meta__description-title">Bo Chen</span>
                </a>
                <span class="comments-comment-item__main-content">Agreed.</span>
              </article>
            </article>
            <article class="comments-comment-entity">
              <a class="comments-comment-meta__image-link" href="/in/nameless/"><img alt=""></a>
              <span class="comments-comment-item__main-content">No name here</span>
            </article>
          </div>"#;
        let doc = parse(html);
        let comments = extract_engagements(&doc, EngagementKind::Commenter, &Options::default());

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].full_name.as_deref(), Some("Ana Silva"));
        assert_eq!(comments[0].headline.as_deref(), Some("Data Scientist"));
        assert_eq!(comments[0].comment_text(), Some("Great write-up!"));
        assert_eq!(comments[1].full_name.as_deref(), Some("Bo Chen"));
        assert_eq!(comments[1].comment_text(), Some("Agreed."));
    }

    #[test]
    fn test_reply_is_not_credited_to_parent_row() {
        let html = r#"<div class="comments-comments-list">
            <article class="comments-comment-entity">
              <a class="comments-comment-meta__image-link" href="/in/parent/"><img alt=""></a>
              <span class="comments-comment-meta__description-title">Parent Author</span>
              <span class="comments-comment-item__main-content">Parent text</span>
              <article class="comments-comment-entity">
                <a class="comments-comment-meta__description-container" href="/in/reply/">
                  <span class="comments-comment-meta__description-title">Reply Author</span>
                  <div class="comments-comment-meta__description-subtitle">Designer</div>
                </a>
                <span class="comments-comment-item__main-content">Reply text</span>
              </article>
            </article>
          </div>"#;
        let doc = parse(html);
        let comments = extract_engagements(&doc, EngagementKind::Commenter, &Options::default());

        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].profile_url, "https://www.linkedin.com/in/parent");
        assert_eq!(comments[0].full_name.as_deref(), Some("Parent Author"));
        assert_eq!(comments[0].headline, None);
        assert_eq!(comments[0].comment_text(), Some("Parent text"));
        assert_eq!(comments[1].profile_url, "https://www.linkedin.com/in/reply");
        assert_eq!(comments[1].full_name.as_deref(), Some("Reply Author"));
        assert_eq!(comments[1].headline.as_deref(), Some("Designer"));
        assert_eq!(comments[1].comment_text(), Some("Reply text"));
    }
}
