//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` plus the [`Queryable`] capability: the one
//! interface the matcher and extractors need from "something that can be
//! searched", whether that is a whole document, an element subtree, or a
//! union of several subtrees.

use std::collections::HashSet;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

pub use tendril::StrTendril;

// === Query Capability ===

/// A searchable scope: a document, an element subtree, or a union of them.
///
/// Matches are returned in document order. An invalid selector expression
/// yields no matches rather than an error, so one bad entry in a tier table
/// never aborts the scan.
pub trait Queryable {
    /// First descendant matching `selector`, if any.
    fn query_first(&self, selector: &str) -> Option<Selection<'_>>;

    /// Every descendant matching `selector`, one single-node selection each.
    fn query_all(&self, selector: &str) -> Vec<Selection<'_>>;
}

impl Queryable for Document {
    fn query_first(&self, selector: &str) -> Option<Selection<'_>> {
        self.try_select(selector).map(|found| found.first())
    }

    fn query_all(&self, selector: &str) -> Vec<Selection<'_>> {
        self.try_select(selector)
            .map(|found| split_nodes(&found))
            .unwrap_or_default()
    }
}

impl Queryable for Selection<'_> {
    fn query_first(&self, selector: &str) -> Option<Selection<'_>> {
        self.try_select(selector).map(|found| found.first())
    }

    fn query_all(&self, selector: &str) -> Vec<Selection<'_>> {
        self.try_select(selector)
            .map(|found| split_nodes(&found))
            .unwrap_or_default()
    }
}

/// Several scopes searched as one, in order.
///
/// `query_first` returns the first match of the first scope that has one;
/// `query_all` concatenates matches, skipping nodes already seen in an
/// earlier scope.
///
/// Contact details are the motivating case: a contact link may open a modal
/// rendered elsewhere in the page, so each modal container and the caller's
/// root are searched together.
pub struct ScopeUnion<'q> {
    scopes: Vec<&'q dyn Queryable>,
}

impl<'q> ScopeUnion<'q> {
    /// Builds a union from scopes in priority order.
    #[must_use]
    pub fn new(scopes: Vec<&'q dyn Queryable>) -> Self {
        Self { scopes }
    }

    /// Number of scopes in the union.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// True when the union holds no scope.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Queryable for ScopeUnion<'_> {
    fn query_first(&self, selector: &str) -> Option<Selection<'_>> {
        self.scopes
            .iter()
            .find_map(|scope| scope.query_first(selector))
    }

    fn query_all(&self, selector: &str) -> Vec<Selection<'_>> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for scope in &self.scopes {
            for found in scope.query_all(selector) {
                if let Some(id) = node_id(&found) {
                    if seen.insert(id) {
                        out.push(found);
                    }
                }
            }
        }
        out
    }
}

/// An element subtree with some of its matches filtered out.
///
/// Used to keep a row's lookups inside the row itself: a comment row holds
/// its replies, which are rows of their own, and a legacy experience row may
/// wrap its title in the company link.
pub struct FilteredScope<'a, F> {
    root: Selection<'a>,
    keep: F,
}

impl<'a, F> FilteredScope<'a, F>
where
    F: Fn(&Selection) -> bool,
{
    /// Search `root`, returning only matches for which `keep` holds.
    #[must_use]
    pub fn new(root: Selection<'a>, keep: F) -> Self {
        Self { root, keep }
    }
}

impl<F> Queryable for FilteredScope<'_, F>
where
    F: Fn(&Selection) -> bool,
{
    fn query_first(&self, selector: &str) -> Option<Selection<'_>> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<Selection<'_>> {
        self.root
            .query_all(selector)
            .into_iter()
            .filter(|found| (self.keep)(found))
            .collect()
    }
}

/// Split a multi-node selection into one selection per node, in document order.
#[must_use]
pub fn split_nodes<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

// === Node Identity ===

/// Identity of the first node in a selection.
#[inline]
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

/// True if `inner` is a strict descendant of `outer`.
#[must_use]
pub fn is_descendant_of(inner: &Selection, outer: &Selection) -> bool {
    let Some(outer_id) = node_id(outer) else {
        return false;
    };
    let Some(node) = inner.nodes().first() else {
        return false;
    };

    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ancestor.id == outer_id {
            return true;
        }
        current = ancestor.parent();
    }
    false
}

/// True if `inner` is `outer` itself or one of its descendants.
#[must_use]
pub fn is_within(inner: &Selection, outer: &Selection) -> bool {
    node_id(inner).is_some_and(|id| node_id(outer) == Some(id)) || is_descendant_of(inner, outer)
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Diagnostics ===

/// Build a structural locator such as `main > section.pv-top-card > h1:nth-child(2)`.
///
/// Each step is the tag, its first class (if any) and, when the element has
/// element siblings, its 1-based position among them. The chain stops below
/// `html`. Diagnostics only: class names are obfuscated and change between
/// markup revisions, so paths are never fed back into matching.
#[must_use]
pub fn node_path(sel: &Selection) -> Option<String> {
    let mut current = sel.nodes().first().copied();
    let mut steps = Vec::new();

    while let Some(node) = current {
        if !node.is_element() {
            break;
        }
        let Some(tag) = node.node_name() else { break };
        if &*tag == "html" {
            break;
        }

        let mut step = tag.to_string();
        if let Some(class) = node.attr("class") {
            if let Some(first) = class.split_whitespace().next() {
                step.push('.');
                step.push_str(first);
            }
        }
        if let Some(position) = element_position(&node) {
            step.push_str(&format!(":nth-child({position})"));
        }
        steps.push(step);

        current = node.parent();
    }

    if steps.is_empty() {
        return None;
    }
    steps.reverse();
    Some(steps.join(" > "))
}

/// 1-based position among element siblings, or `None` for an only child.
fn element_position(node: &NodeRef) -> Option<usize> {
    let mut before = 0;
    let mut sibling = node.prev_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            before += 1;
        }
        sibling = s.prev_sibling();
    }

    let mut after = 0;
    let mut sibling = node.next_sibling();
    while let Some(s) = sibling {
        if s.is_element() {
            after += 1;
        }
        sibling = s.next_sibling();
    }

    if before == 0 && after == 0 {
        None
    } else {
        Some(before + 1)
    }
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Text of the document `<title>`, trimmed; `None` when missing or blank.
#[must_use]
pub fn document_title(doc: &Document) -> Option<String> {
    let title = doc.query_first("title")?;
    let text = text_content(&title);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_query_first_and_all() {
        let doc = parse(r#"<ul><li class="row">1</li><li class="row">2</li></ul>"#);

        let first = doc.query_first("li.row").unwrap();
        assert_eq!(text_content(&first), "1".into());

        let all = doc.query_all("li.row");
        assert_eq!(all.len(), 2);
        assert_eq!(text_content(&all[1]), "2".into());
    }

    #[test]
    fn test_selection_scope_is_limited_to_subtree() {
        let doc = parse(r#"
            <div id="a"><span>inside</span></div>
            <div id="b"><span>outside</span></div>
        "#);
        let scope = doc.select("#a");

        let all = scope.query_all("span");
        assert_eq!(all.len(), 1);
        assert_eq!(text_content(&all[0]), "inside".into());
    }

    #[test]
    fn test_invalid_selector_yields_nothing() {
        let doc = parse("<div><p>text</p></div>");
        assert!(doc.query_first("p[[").is_none());
        assert!(doc.query_all("::::").is_empty());
    }

    #[test]
    fn test_no_match_returns_none() {
        let doc = parse("<div><p>text</p></div>");
        assert!(doc.query_first("h1").is_none());
        assert!(doc.query_all("h1").is_empty());
    }

    #[test]
    fn test_scope_union_prefers_earlier_scope() {
        let doc = parse(r#"
            <section id="main"><a class="email">main@example.com</a></section>
            <div id="modal"><a class="email">modal@example.com</a><a class="phone">555</a></div>
        "#);
        let main = doc.select("#main");
        let modal = doc.select("#modal");
        let scopes: Vec<&dyn Queryable> = vec![&main, &modal];
        let union = ScopeUnion::new(scopes);

        let email = union.query_first("a.email").unwrap();
        assert_eq!(text_content(&email), "main@example.com".into());

        let phone = union.query_first("a.phone").unwrap();
        assert_eq!(text_content(&phone), "555".into());
    }

    #[test]
    fn test_scope_union_dedupes_overlapping_scopes() {
        let doc = parse(r#"<div id="outer"><div id="inner"><a>1</a></div><a>2</a></div>"#);
        let outer = doc.select("#outer");
        let inner = doc.select("#inner");
        let scopes: Vec<&dyn Queryable> = vec![&outer, &inner];
        let union = ScopeUnion::new(scopes);

        assert_eq!(union.len(), 2);
        assert_eq!(union.query_all("a").len(), 2);
    }

    #[test]
    fn test_scope_union_mixes_document_and_subtree() {
        let doc = parse(r#"<div id="x"><b>in</b></div><b>out</b>"#);
        let x = doc.select("#x");
        let scopes: Vec<&dyn Queryable> = vec![&x, &doc];
        let union = ScopeUnion::new(scopes);

        assert_eq!(union.len(), 2);
        assert!(!union.is_empty());
        assert_eq!(text_content(&union.query_first("b").unwrap()), "in".into());
        assert_eq!(union.query_all("b").len(), 2);
    }

    #[test]
    fn test_is_descendant_of() {
        let doc = parse(r#"<ul><li id="outer"><ul><li id="inner">x</li></ul></li></ul>"#);
        let outer = doc.select("#outer");
        let inner = doc.select("#inner");

        assert!(is_descendant_of(&inner, &outer));
        assert!(!is_descendant_of(&outer, &inner));
        assert!(!is_descendant_of(&outer, &outer));

        assert!(is_within(&outer, &outer));
        assert!(is_within(&inner, &outer));
        assert!(!is_within(&outer, &inner));
    }

    #[test]
    fn test_filtered_scope_skips_nested_rows() {
        let doc = parse(r#"
            <article id="parent">
              <a class="meta" href="/in/parent/">Parent</a>
              <article id="reply"><a class="meta" href="/in/reply/">Reply</a></article>
              <a class="meta" href="/in/parent-again/">Parent again</a>
            </article>"#);
        let parent = doc.select("#parent");
        let reply = doc.select("#reply");
        let own = FilteredScope::new(parent.clone(), |found: &Selection| !is_within(found, &reply));

        let links = own.query_all("a.meta");
        assert_eq!(links.len(), 2);
        assert_eq!(text_content(&links[1]), "Parent again".into());
        assert!(own.query_first("article").is_none());
        assert_eq!(parent.query_all("a.meta").len(), 3);
    }

    #[test]
    fn test_node_path() {
        let doc = parse(r#"<html><body><main><section class="top-card x"><p>a</p><h1>Name</h1></section></main></body></html>"#);
        let h1 = doc.select("h1");

        let path = node_path(&h1).unwrap();
        // The parser always adds <head>, so <body> is the second child of <html>
        assert_eq!(path, "body:nth-child(2) > main > section.top-card > h1:nth-child(2)");
    }

    #[test]
    fn test_document_title() {
        let doc = parse("<html><head><title>  Jane Doe | Profile </title></head></html>");
        assert_eq!(document_title(&doc), Some("Jane Doe | Profile".to_string()));

        let doc = parse("<html><head><title> </title></head></html>");
        assert_eq!(document_title(&doc), None);
    }
}
