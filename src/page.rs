//! The page engine: owns the document, the focus state, the listener
//! registry, the intersection watchers, and the pending effect queue.
//!
//! Dispatch is single-threaded and synchronous. An event bubbles from its
//! target through the ancestor chain to the document root; listeners run in
//! registration order at each hop. After dispatch the engine applies the
//! platform default action unless some listener prevented it.

use std::collections::HashSet;

use log::trace;
use url::Url;

use crate::dom::{parse_html, Dom, NodeId};
use crate::effects::Effect;
use crate::error::Result;
use crate::events::{Dispatch, EventCtx, EventKind, Key};
use crate::observe::{has_entered, Rect, Watch, WatchConfig};

/// Mutable page state handed to listeners and watch callbacks.
///
/// This is everything a handler may touch: the DOM, the document location,
/// the focused element, and the effect queue. The listener registry itself
/// is deliberately not reachable from here, so a running handler cannot
/// observe or reorder its peers.
pub struct PageState {
    pub dom: Dom,
    location: Url,
    focused: Option<NodeId>,
    effects: Vec<Effect>,
}

impl PageState {
    /// The document location the page was loaded with.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// The element currently holding input focus, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move input focus to an element, recording the focus effect for the
    /// host. `prevent_scroll` asks the platform not to scroll the target
    /// into view.
    pub fn focus(&mut self, target: NodeId, prevent_scroll: bool) {
        self.focused = Some(target);
        self.effects.push(Effect::Focus {
            target,
            prevent_scroll,
        });
    }

    /// Drop input focus from an element if it currently holds it.
    pub fn blur(&mut self, target: NodeId) {
        if self.focused == Some(target) {
            self.focused = None;
        }
    }

    /// Queue an effect for the host to perform.
    pub fn push_effect(&mut self, effect: Effect) {
        self.effects.push(effect);
    }
}

type ListenerFn = Box<dyn FnMut(&mut PageState, &mut EventCtx)>;
type WatchFn = Box<dyn FnMut(&mut PageState, NodeId) -> Watch>;

struct Listener {
    target: NodeId,
    kind: EventKind,
    callback: ListenerFn,
}

struct Watcher {
    config: WatchConfig,
    targets: HashSet<NodeId>,
    callback: WatchFn,
}

/// A loaded page: parsed document plus the interaction runtime.
pub struct Page {
    state: PageState,
    listeners: Vec<Listener>,
    watchers: Vec<Watcher>,
}

impl Page {
    /// Parse `html` and place the document at `location`.
    pub fn load(html: &str, location: &str) -> Result<Self> {
        let location = Url::parse(location)?;
        Ok(Self {
            state: PageState {
                dom: parse_html(html),
                location,
                focused: None,
                effects: Vec::new(),
            },
            listeners: Vec::new(),
            watchers: Vec::new(),
        })
    }

    pub fn dom(&self) -> &Dom {
        &self.state.dom
    }

    pub fn dom_mut(&mut self) -> &mut Dom {
        &mut self.state.dom
    }

    pub fn location(&self) -> &Url {
        &self.state.location
    }

    /// The document root node; listeners registered here see every bubbled
    /// event.
    pub fn document(&self) -> NodeId {
        self.state.dom.document()
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.state.focused
    }

    /// Host-initiated focus move (e.g. the user tabbing to a control).
    /// Unlike [`PageState::focus`] this records no effect; it is input, not
    /// output.
    pub fn focus(&mut self, target: NodeId) {
        self.state.focused = Some(target);
    }

    /// Drain the queued effects in request order.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.state.effects)
    }

    /// Register a listener on a node for an event kind. Registration is
    /// session-lifetime; there is no removal.
    pub fn add_listener(
        &mut self,
        target: NodeId,
        kind: EventKind,
        callback: impl FnMut(&mut PageState, &mut EventCtx) + 'static,
    ) {
        self.listeners.push(Listener {
            target,
            kind,
            callback: Box::new(callback),
        });
    }

    /// Start watching elements for viewport entry. The callback decides per
    /// element whether to keep the subscription ([`Watch::Keep`]) or close
    /// it for good ([`Watch::Done`]).
    pub fn observe(
        &mut self,
        targets: Vec<NodeId>,
        config: WatchConfig,
        callback: impl FnMut(&mut PageState, NodeId) -> Watch + 'static,
    ) {
        self.watchers.push(Watcher {
            config,
            targets: targets.into_iter().collect(),
            callback: Box::new(callback),
        });
    }

    /// Number of elements currently under observation, across all watchers.
    pub fn observed_count(&self) -> usize {
        self.watchers.iter().map(|w| w.targets.len()).sum()
    }

    /// Dispatch a pointer activation on `target`.
    pub fn click(&mut self, target: NodeId) -> Dispatch {
        let mut ctx = EventCtx::click(target);
        self.bubble(&mut ctx);

        let default_prevented = ctx.default_prevented();
        if !default_prevented {
            self.click_default(target);
        }
        Dispatch { default_prevented }
    }

    /// Dispatch a key press. The event targets the focused element, or the
    /// document body when nothing holds focus.
    pub fn key_down(&mut self, key: Key) -> Dispatch {
        let target = self
            .state
            .focused
            .or_else(|| self.state.dom.find_by_tag("body"))
            .unwrap_or(self.state.dom.document());
        let mut ctx = EventCtx::key_down(target, key);
        self.bubble(&mut ctx);

        let default_prevented = ctx.default_prevented();
        if !default_prevented {
            self.key_default(key);
        }
        Dispatch { default_prevented }
    }

    /// Report element placements against a viewport. Each watcher fires for
    /// the observed elements that have entered its region; subscriptions
    /// closed by the callback are dropped before the next report.
    pub fn intersect(&mut self, viewport: Rect, placements: &[(NodeId, Rect)]) {
        let mut watchers = std::mem::take(&mut self.watchers);
        for watcher in watchers.iter_mut() {
            for &(node, rect) in placements {
                if !watcher.targets.contains(&node) {
                    continue;
                }
                if !has_entered(watcher.config, viewport, rect) {
                    continue;
                }
                if (watcher.callback)(&mut self.state, node) == Watch::Done {
                    watcher.targets.remove(&node);
                }
            }
        }
        watchers.retain(|w| !w.targets.is_empty());
        let added = std::mem::replace(&mut self.watchers, watchers);
        self.watchers.extend(added);
    }

    /// Run listeners along the bubble path: target first, then each
    /// ancestor up to and including the document root.
    fn bubble(&mut self, ctx: &mut EventCtx) {
        let mut path = vec![ctx.target];
        path.extend(self.state.dom.ancestors(ctx.target));
        let kind = ctx.kind;

        let mut listeners = std::mem::take(&mut self.listeners);
        'bubbling: for &hop in &path {
            for listener in listeners
                .iter_mut()
                .filter(|l| l.kind == kind && l.target == hop)
            {
                (listener.callback)(&mut self.state, ctx);
            }
            if ctx.propagation_stopped() {
                break 'bubbling;
            }
        }
        // A listener may have registered more listeners; keep both sets.
        let added = std::mem::replace(&mut self.listeners, listeners);
        self.listeners.extend(added);
    }

    /// Platform default for an unprevented click: follow the enclosing
    /// link, as a fragment jump or a navigation.
    fn click_default(&mut self, target: NodeId) {
        let Some(link) = self.enclosing_link(target) else {
            return;
        };
        let Some(href) = self.state.dom.attr(link, "href").map(str::to_owned) else {
            return;
        };
        trace!("default action: following link {href}");
        if let Some(fragment) = href.strip_prefix('#') {
            self.state.effects.push(Effect::FragmentJump {
                fragment: fragment.to_string(),
            });
        } else {
            self.state.effects.push(Effect::Navigate { href });
        }
    }

    /// Platform default for an unprevented key press: Enter or Space on a
    /// focused activatable control synthesizes a click on it.
    fn key_default(&mut self, key: Key) {
        if !key.is_activation() {
            return;
        }
        let Some(focused) = self.state.focused else {
            return;
        };
        if self.activates_on(focused, key) {
            trace!("default action: synthetic click on focused control");
            self.click(focused);
        }
    }

    /// Whether a key press on this focused element synthesizes a click.
    /// Buttons activate on Enter and Space; links only on Enter.
    fn activates_on(&self, node: NodeId, key: Key) -> bool {
        let Some(name) = self.state.dom.element_name(node) else {
            return false;
        };
        match name.as_ref() {
            "button" => key.is_activation(),
            "a" => key == Key::Enter && self.state.dom.attr(node, "href").is_some(),
            _ => false,
        }
    }

    fn enclosing_link(&self, node: NodeId) -> Option<NodeId> {
        let is_link = |id: NodeId| {
            self.state.dom.element_name(id).is_some_and(|n| n.as_ref() == "a")
                && self.state.dom.attr(id, "href").is_some()
        };
        if is_link(node) {
            return Some(node);
        }
        self.state.dom.ancestors(node).find(|&a| is_link(a))
    }
}
