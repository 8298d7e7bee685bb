//! Selection utilities: query elements by CSS selector, scoped to a context
//! node, plus the `matches`/`closest` primitives the delegation predicates
//! are built from.

use cssparser::{Parser, ParserInput};
use selectors::context::{MatchingContext, SelectorCaches};
use selectors::matching::{
    matches_selector, MatchingForInvalidation, MatchingMode, NeedsSelectorFlags,
};
use selectors::parser::{ParseRelative, SelectorList};

use super::arena::{Dom, NodeId};
use super::element_ref::{ElementRef, PageSelectors};
use crate::error::{Error, Result};

/// A compiled, possibly comma-separated selector group.
#[derive(Debug, Clone)]
pub struct Selector {
    selectors: Vec<selectors::parser::Selector<PageSelectors>>,
}

impl Selector {
    /// Compile a selector group such as `.card, .work-card, .flip-card`.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser_input = ParserInput::new(input);
        let mut parser = Parser::new(&mut parser_input);
        let list = SelectorList::parse(&PageSelectors, &mut parser, ParseRelative::No)
            .map_err(|_| Error::Selector(input.to_string()))?;
        Ok(Self {
            selectors: list.slice().to_vec(),
        })
    }

    fn matches(&self, element: ElementRef<'_>) -> bool {
        let mut caches = SelectorCaches::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut caches,
            selectors::context::QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            MatchingForInvalidation::No,
        );
        self.selectors
            .iter()
            .any(|s| matches_selector(s, 0, None, &element, &mut context))
    }
}

impl Dom {
    /// First element under `scope` matching the selector, in document order.
    /// The scope node itself is not a candidate.
    pub fn select_first(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .find(|&id| self.is_element(id) && selector.matches(ElementRef::new(self, id)))
    }

    /// All elements under `scope` matching the selector, in document order.
    pub fn select_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|&id| self.is_element(id) && selector.matches(ElementRef::new(self, id)))
            .collect()
    }

    /// Whether the node is an element matching the selector.
    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        self.is_element(node) && selector.matches(ElementRef::new(self, node))
    }

    /// Nearest element, starting at `node` and walking up, that matches the
    /// selector. Mirrors `Element.closest`.
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        if self.matches(node, selector) {
            return Some(node);
        }
        self.ancestors(node).find(|&a| self.matches(a, selector))
    }
}

/// Escape a fragment string for use as a CSS identifier, the guard behind
/// the anchor controller's defensive selector lookup. Returns `None` when
/// the string cannot be serialized as an identifier.
pub fn escape_identifier(raw: &str) -> Option<String> {
    let mut escaped = String::with_capacity(raw.len());
    cssparser::serialize_identifier(raw, &mut escaped).ok()?;
    Some(escaped)
}

#[cfg(test)]
mod tests {
    use super::super::tree_sink::parse_html;
    use super::*;

    #[test]
    fn test_tag_and_class_selectors() {
        let dom = parse_html(r#"<div class="wrap"><p class="intro note">Hi</p></div>"#);
        let root = dom.document();

        let p = dom.select_first(root, &Selector::parse("p").unwrap()).unwrap();
        assert_eq!(dom.element_name(p).unwrap().as_ref(), "p");

        assert!(dom.matches(p, &Selector::parse(".intro").unwrap()));
        assert!(dom.matches(p, &Selector::parse("p.note").unwrap()));
        assert!(!dom.matches(p, &Selector::parse(".missing").unwrap()));
    }

    #[test]
    fn test_selector_group() {
        let dom = parse_html(
            r#"<div class="card">a</div><div class="work-card">b</div><div class="plain">c</div>"#,
        );
        let sel = Selector::parse(".card, .work-card").unwrap();
        let found = dom.select_all(dom.document(), &sel);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_scoped_selection() {
        let dom = parse_html(
            r#"<aside id="sidebar"><ul class="sidebar-menu"><li><a href="/a">A</a></li></ul></aside>
               <a href="/outside">O</a>"#,
        );
        let sidebar = dom.node_by_id("sidebar").unwrap();
        let links = dom.select_all(sidebar, &Selector::parse(".sidebar-menu a").unwrap());
        assert_eq!(links.len(), 1);
        assert_eq!(dom.attr(links[0], "href"), Some("/a"));
    }

    #[test]
    fn test_attribute_prefix_selector() {
        let dom = parse_html(r##"<a href="#top">T</a><a href="/page">P</a><a>N</a>"##);
        let sel = Selector::parse(r##"a[href^="#"]"##).unwrap();
        let found = dom.select_all(dom.document(), &sel);
        assert_eq!(found.len(), 1);
        assert_eq!(dom.attr(found[0], "href"), Some("#top"));
    }

    #[test]
    fn test_closest() {
        let dom = parse_html(
            r#"<div class="flip-card"><div class="flip-card__inner">
                 <button class="flip-card__btn"><span id="icon">+</span></button>
               </div></div>"#,
        );
        let icon = dom.node_by_id("icon").unwrap();
        let btn_sel = Selector::parse(".flip-card__btn").unwrap();
        let card_sel = Selector::parse(".flip-card").unwrap();

        let btn = dom.closest(icon, &btn_sel).unwrap();
        assert_eq!(dom.element_name(btn).unwrap().as_ref(), "button");
        assert!(dom.closest(btn, &card_sel).is_some());
        assert!(dom.closest(icon, &Selector::parse(".absent").unwrap()).is_none());
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(Selector::parse("][").is_err());
        assert!(Selector::parse("#").is_err());
    }

    #[test]
    fn test_escape_identifier() {
        assert_eq!(escape_identifier("plain").as_deref(), Some("plain"));
        let escaped = escape_identifier("weird:id").unwrap();
        assert!(Selector::parse(&format!("#{escaped}")).is_ok());
    }
}
