//! Effects the controllers request from the platform.
//!
//! Scroll and focus transitions are animated by the embedding host; the
//! engine only records the request and never awaits completion. The host
//! drains the queue with [`Page::take_effects`](crate::Page::take_effects).

use crate::dom::NodeId;

/// Scroll animation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

/// Vertical alignment of the scroll target within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAlignment {
    Start,
    Center,
    End,
    Nearest,
}

/// A requested, fire-and-forget platform action.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Bring an element into view.
    ScrollIntoView {
        target: NodeId,
        behavior: ScrollBehavior,
        align: ScrollAlignment,
    },
    /// Default in-page navigation to a fragment (unintercepted anchor click).
    FragmentJump { fragment: String },
    /// Default navigation away from the page (unintercepted link click).
    Navigate { href: String },
    /// Move input focus to an element. `prevent_scroll` mirrors
    /// `focus({ preventScroll: true })`: the move must not jump the page.
    Focus { target: NodeId, prevent_scroll: bool },
}
