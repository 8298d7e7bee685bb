//! # pagewire
//!
//! A headless page-interaction engine: the client-side behavior of a static
//! page (smooth anchor scrolling, active-nav highlighting, reveal-on-scroll,
//! an accessible collapsible sidebar, and button-only flip cards) modeled as
//! small, idempotent state machines over a parsed HTML document.
//!
//! ## Features
//!
//! - Arena DOM built by html5ever, with CSS selector queries scoped to any
//!   context node
//! - Event dispatch with browser bubbling, `prevent_default` and
//!   `stop_propagation` semantics, and platform default actions
//! - Controllers that keep visual classes and ARIA markers in lockstep and
//!   tolerate absent elements (progressive enhancement)
//! - Platform animations (smooth scroll, focus moves) surfaced as
//!   fire-and-forget [`Effect`] requests for the embedding host
//!
//! ## Quick Start
//!
//! ```
//! use pagewire::{wire, Key, Page, Selector};
//!
//! let html = r##"
//!     <nav><a href="/index.html">Home</a><a href="/about.html">About</a></nav>
//!     <button id="menu-toggle">Menu</button>
//!     <aside id="sidebar">
//!         <ul class="sidebar-menu"><li><a href="/about.html">About</a></li></ul>
//!     </aside>
//! "##;
//! let mut page = Page::load(html, "https://example.com/").unwrap();
//! wire(&mut page).unwrap();
//!
//! // The link resolving to the current path is marked as current.
//! let home = page
//!     .dom()
//!     .select_first(page.document(), &Selector::parse("nav a").unwrap())
//!     .unwrap();
//! assert_eq!(page.dom().attr(home, "aria-current"), Some("page"));
//!
//! // The trigger toggles the sidebar; Escape closes it again.
//! let toggle = page.dom().node_by_id("menu-toggle").unwrap();
//! let sidebar = page.dom().node_by_id("sidebar").unwrap();
//! page.click(toggle);
//! assert!(page.dom().has_class(sidebar, "open"));
//! page.key_down(Key::Escape);
//! assert!(!page.dom().has_class(sidebar, "open"));
//! assert_eq!(page.focused(), Some(toggle));
//! ```
//!
//! The engine is headless: the host feeds it synthetic input
//! ([`Page::click`], [`Page::key_down`], [`Page::intersect`]) and drains the
//! requested [`Effect`]s. State lives in the document itself, so every
//! handler re-derives it fresh and the last request always wins.

pub mod bindings;
pub mod controllers;
pub mod dom;
pub mod effects;
pub mod error;
pub mod events;
pub mod observe;
pub mod page;

pub use bindings::Bindings;
pub use controllers::{wire, wire_with};
pub use dom::{Dom, NodeId, Selector};
pub use effects::{Effect, ScrollAlignment, ScrollBehavior};
pub use error::{Error, Result};
pub use events::{Dispatch, EventCtx, EventKind, Key};
pub use observe::{Rect, Watch, WatchConfig};
pub use page::{Page, PageState};
