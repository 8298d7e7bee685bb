//! Flip-card disclosure: each card turns between its front and back face,
//! and only its dedicated control may turn it.
//!
//! Activation is delegated at the document level and resolved through
//! `closest`, so controls anywhere inside a card work without per-card
//! listeners. Keyboard activation is honored only while the control itself
//! holds focus; a guard on each inner container swallows Enter/Space
//! bubbling from card content so nothing else can reach a toggling
//! listener. There is no hover path anywhere.

use log::debug;

use crate::bindings::Bindings;
use crate::dom::{Dom, NodeId, Selector};
use crate::error::Result;
use crate::events::{EventCtx, EventKind};
use crate::page::{Page, PageState};

/// Which face of a card is showing, re-derived from the inner container's
/// `is-flipped` class on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

impl Face {
    pub fn toggled(self) -> Self {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }
}

/// Read the current face from the inner container.
pub fn face_of(dom: &Dom, inner: NodeId) -> Face {
    if dom.has_class(inner, "is-flipped") {
        Face::Back
    } else {
        Face::Front
    }
}

/// Render a face onto the inner container.
pub fn apply(dom: &mut Dom, inner: NodeId, face: Face) {
    dom.set_class(inner, "is-flipped", face == Face::Back);
}

#[derive(Clone)]
struct FlipSelectors {
    button: Selector,
    card: Selector,
    inner: Selector,
    back: Selector,
    back_content: Selector,
}

/// Toggle the card owning `button`. Shared by the pointer and keyboard
/// activation paths.
fn activate(state: &mut PageState, ctx: &mut EventCtx, button: NodeId, sels: &FlipSelectors) {
    let Some(card) = state.dom.closest(button, &sels.card) else {
        return;
    };
    let Some(inner) = state.dom.select_first(card, &sels.inner) else {
        return;
    };

    ctx.prevent_default();

    let face = face_of(&state.dom, inner).toggled();
    apply(&mut state.dom, inner, face);

    // Keep a stray Space on the still-focused control from re-toggling.
    state.blur(button);

    if face == Face::Back {
        let content = state
            .dom
            .select_first(inner, &sels.back_content)
            .or_else(|| state.dom.select_first(inner, &sels.back));
        if let Some(content) = content {
            state.dom.set_attr(content, "tabindex", "-1");
            state.focus(content, true);
        }
    }
}

/// Wire the flip cards.
pub fn install(page: &mut Page, bindings: &Bindings) -> Result<()> {
    let sels = FlipSelectors {
        button: Selector::parse(&bindings.flip_button)?,
        card: Selector::parse(&bindings.flip_card)?,
        inner: Selector::parse(&bindings.flip_inner)?,
        back: Selector::parse(&bindings.flip_back)?,
        back_content: Selector::parse(&format!(
            "{} {}",
            bindings.flip_back, bindings.flip_back_content
        ))?,
    };
    let root = page.document();

    // Pointer activation, delegated: only clicks landing on or inside the
    // disclosure control count.
    let click_sels = sels.clone();
    page.add_listener(root, EventKind::Click, move |state, ctx| {
        let Some(button) = state.dom.closest(ctx.target, &click_sels.button) else {
            return;
        };
        activate(state, ctx, button, &click_sels);
    });

    // Keyboard activation, only while the control itself holds focus.
    let key_sels = sels.clone();
    page.add_listener(root, EventKind::KeyDown, move |state, ctx| {
        let Some(key) = ctx.key else {
            return;
        };
        if !key.is_activation() {
            return;
        }
        let Some(focused) = state.focused() else {
            return;
        };
        if !state.dom.matches(focused, &key_sels.button) {
            return;
        }
        activate(state, ctx, focused, &key_sels);
    });

    // Guard: Enter/Space bubbling from inside a card's inner container
    // stop here, so only the control's own activation is honored.
    let inners = page.dom().select_all(root, &sels.inner);
    debug!("flip cards: guarding {} inner container(s)", inners.len());
    for inner in inners {
        page.add_listener(inner, EventKind::KeyDown, |_, ctx| {
            if ctx.key.is_some_and(|k| k.is_activation()) {
                ctx.stop_propagation();
            }
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_face_roundtrip() {
        assert_eq!(Face::Front.toggled(), Face::Back);
        assert_eq!(Face::Front.toggled().toggled(), Face::Front);
    }

    #[test]
    fn test_face_tracks_class() {
        let mut dom = parse_html(r#"<div id="inner" class="flip-card__inner">x</div>"#);
        let inner = dom.node_by_id("inner").unwrap();

        assert_eq!(face_of(&dom, inner), Face::Front);
        apply(&mut dom, inner, Face::Back);
        assert_eq!(face_of(&dom, inner), Face::Back);
        assert!(dom.has_class(inner, "is-flipped"));
        apply(&mut dom, inner, Face::Front);
        assert_eq!(face_of(&dom, inner), Face::Front);
    }
}
