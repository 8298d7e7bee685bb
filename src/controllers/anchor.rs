//! Smooth scrolling for same-page anchor links.
//!
//! Clicks on `a[href^="#"]` are intercepted when the fragment resolves to
//! an element; the default jump is replaced with a smooth scroll request.
//! A bare `#` and an unresolvable fragment keep their default behavior.

use log::debug;

use crate::dom::{escape_identifier, Dom, NodeId, Selector};
use crate::effects::{Effect, ScrollAlignment, ScrollBehavior};
use crate::error::Result;
use crate::events::EventKind;
use crate::page::Page;

const ANCHOR_LINKS: &str = r##"a[href^="#"]"##;

/// Resolve a fragment to its target element.
///
/// Identifier lookup first; on a miss, a defensive selector lookup with the
/// fragment escaped as a CSS identifier. If the fragment cannot be used as
/// a selector the miss is accepted.
pub fn resolve_fragment(dom: &Dom, fragment: &str) -> Option<NodeId> {
    if let Some(target) = dom.node_by_id(fragment) {
        return Some(target);
    }
    let escaped = escape_identifier(fragment)?;
    let selector = Selector::parse(&format!("#{escaped}")).ok()?;
    dom.select_first(dom.document(), &selector)
}

/// Attach the click interceptor to every same-page anchor link.
pub fn install(page: &mut Page) -> Result<()> {
    let selector = Selector::parse(ANCHOR_LINKS)?;
    let links = page.dom().select_all(page.document(), &selector);
    debug!("anchor scroll: intercepting {} link(s)", links.len());

    for link in links {
        page.add_listener(link, EventKind::Click, move |state, ctx| {
            let Some(href) = state.dom.attr(link, "href").map(str::to_owned) else {
                return;
            };
            let Some(fragment) = href.strip_prefix('#') else {
                return;
            };
            if fragment.is_empty() {
                return;
            }
            let Some(target) = resolve_fragment(&state.dom, fragment) else {
                return;
            };
            ctx.prevent_default();
            state.push_effect(Effect::ScrollIntoView {
                target,
                behavior: ScrollBehavior::Smooth,
                align: ScrollAlignment::Start,
            });
        });
    }
    Ok(())
}
