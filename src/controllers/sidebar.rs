//! Collapsible side panel: a bistable state machine over a trigger button
//! and a panel container.
//!
//! The panel closes on panel-link activation, on Escape (returning focus to
//! the trigger), and on pointer activation outside both elements. Every
//! transition writes all four markers (panel class, trigger class, trigger
//! `aria-expanded`, panel `aria-hidden`) through one render function, so
//! they can never disagree.

use log::debug;

use crate::bindings::Bindings;
use crate::dom::{Dom, NodeId, Selector};
use crate::error::Result;
use crate::events::{EventKind, Key};
use crate::page::Page;

/// Panel state, re-derived from the DOM on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Closed,
    Open,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Closed => SidebarState::Open,
            SidebarState::Open => SidebarState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == SidebarState::Open
    }
}

/// Read the current state from the panel's `open` class.
pub fn state_of(dom: &Dom, panel: NodeId) -> SidebarState {
    if dom.has_class(panel, "open") {
        SidebarState::Open
    } else {
        SidebarState::Closed
    }
}

/// Render a state onto the panel and trigger: the four markers change
/// together or not at all.
pub fn apply(dom: &mut Dom, panel: NodeId, trigger: NodeId, state: SidebarState) {
    let open = state.is_open();
    dom.set_class(panel, "open", open);
    dom.set_class(trigger, "active", open);
    dom.set_attr(trigger, "aria-expanded", if open { "true" } else { "false" });
    dom.set_attr(panel, "aria-hidden", if open { "false" } else { "true" });
}

/// Whether a pointer activation at `target` landed outside both the panel
/// and the trigger.
pub fn is_outside(dom: &Dom, panel: NodeId, trigger: NodeId, target: NodeId) -> bool {
    !dom.contains(panel, target) && !dom.contains(trigger, target)
}

/// Wire the sidebar. With the trigger or the panel absent the controller
/// is inert: no listeners, no errors.
pub fn install(page: &mut Page, bindings: &Bindings) -> Result<()> {
    let trigger_sel = Selector::parse(&bindings.menu_toggle)?;
    let panel_sel = Selector::parse(&bindings.sidebar)?;
    let links_sel = Selector::parse(&bindings.sidebar_links)?;

    let root = page.document();
    let (Some(trigger), Some(panel)) = (
        page.dom().select_first(root, &trigger_sel),
        page.dom().select_first(root, &panel_sel),
    ) else {
        debug!("sidebar: trigger or panel absent, controller inert");
        return Ok(());
    };

    // Toggle on the trigger.
    page.add_listener(trigger, EventKind::Click, move |state, _| {
        let next = state_of(&state.dom, panel).toggled();
        apply(&mut state.dom, panel, trigger, next);
    });

    // Close when a panel link is activated.
    for link in page.dom().select_all(panel, &links_sel) {
        page.add_listener(link, EventKind::Click, move |state, _| {
            apply(&mut state.dom, panel, trigger, SidebarState::Closed);
        });
    }

    // Close on Escape and hand focus back to the trigger.
    page.add_listener(root, EventKind::KeyDown, move |state, ctx| {
        if ctx.key != Some(Key::Escape) {
            return;
        }
        if !state_of(&state.dom, panel).is_open() {
            return;
        }
        apply(&mut state.dom, panel, trigger, SidebarState::Closed);
        state.focus(trigger, false);
    });

    // Close on pointer activation outside panel and trigger.
    page.add_listener(root, EventKind::Click, move |state, ctx| {
        if !state_of(&state.dom, panel).is_open() {
            return;
        }
        if is_outside(&state.dom, panel, trigger, ctx.target) {
            apply(&mut state.dom, panel, trigger, SidebarState::Closed);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(SidebarState::Closed.toggled(), SidebarState::Open);
        assert_eq!(SidebarState::Closed.toggled().toggled(), SidebarState::Closed);
    }

    #[test]
    fn test_apply_keeps_markers_consistent() {
        let mut dom = parse_html(
            r#"<button id="menu-toggle">m</button><aside id="sidebar">s</aside>"#,
        );
        let trigger = dom.node_by_id("menu-toggle").unwrap();
        let panel = dom.node_by_id("sidebar").unwrap();

        apply(&mut dom, panel, trigger, SidebarState::Open);
        assert!(dom.has_class(panel, "open"));
        assert!(dom.has_class(trigger, "active"));
        assert_eq!(dom.attr(trigger, "aria-expanded"), Some("true"));
        assert_eq!(dom.attr(panel, "aria-hidden"), Some("false"));

        apply(&mut dom, panel, trigger, SidebarState::Closed);
        assert!(!dom.has_class(panel, "open"));
        assert!(!dom.has_class(trigger, "active"));
        assert_eq!(dom.attr(trigger, "aria-expanded"), Some("false"));
        assert_eq!(dom.attr(panel, "aria-hidden"), Some("true"));
    }

    #[test]
    fn test_is_outside_predicate() {
        let dom = parse_html(
            r#"<button id="menu-toggle"><span id="burger">≡</span></button>
               <aside id="sidebar"><a id="inside" href="/a">a</a></aside>
               <main id="elsewhere">content</main>"#,
        );
        let trigger = dom.node_by_id("menu-toggle").unwrap();
        let panel = dom.node_by_id("sidebar").unwrap();

        let burger = dom.node_by_id("burger").unwrap();
        let inside = dom.node_by_id("inside").unwrap();
        let elsewhere = dom.node_by_id("elsewhere").unwrap();

        assert!(!is_outside(&dom, panel, trigger, burger));
        assert!(!is_outside(&dom, panel, trigger, inside));
        assert!(is_outside(&dom, panel, trigger, elsewhere));
    }
}
