//! Synthetic input events and the dispatch context handed to listeners.

use crate::dom::NodeId;

/// Input key, reduced to the keys the controllers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    /// Any other key; never triggers an activation.
    Other,
}

impl Key {
    /// Whether this key activates a focused control (Enter or Space).
    pub fn is_activation(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Kind of event a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    KeyDown,
}

/// Mutable per-dispatch context. Listeners read the event and may suppress
/// the platform default action or stop the bubble.
#[derive(Debug)]
pub struct EventCtx {
    pub kind: EventKind,
    /// Node the event originated at; events bubble from here to the
    /// document root.
    pub target: NodeId,
    /// Key for `KeyDown` events, `None` for clicks.
    pub key: Option<Key>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl EventCtx {
    pub(crate) fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
            key: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub(crate) fn key_down(target: NodeId, key: Key) -> Self {
        Self {
            kind: EventKind::KeyDown,
            target,
            key: Some(key),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Suppress the platform default action for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop the event from bubbling past the current node. Listeners on the
    /// same node still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy)]
pub struct Dispatch {
    /// Whether some listener called `prevent_default`.
    pub default_prevented: bool,
}
