//! The interaction controllers and the wiring entry points.
//!
//! Each controller attaches its listeners once at wiring time and
//! thereafter reacts only to dispatched events. State lives in DOM
//! attributes and classes; handlers re-derive it on every event, which
//! keeps them idempotent under duplicate or out-of-order input.

pub mod anchor;
pub mod flip;
pub mod nav;
pub mod reveal;
pub mod sidebar;

use crate::bindings::Bindings;
use crate::error::Result;
use crate::page::Page;

/// Wire all five controllers with the default element bindings.
pub fn wire(page: &mut Page) -> Result<()> {
    wire_with(page, &Bindings::default())
}

/// Wire all five controllers with custom element bindings. A controller
/// whose elements are absent stays inert; this only fails when a binding
/// selector itself cannot be compiled.
pub fn wire_with(page: &mut Page, bindings: &Bindings) -> Result<()> {
    anchor::install(page)?;
    nav::install(page, bindings)?;
    reveal::install(page, bindings)?;
    sidebar::install(page, bindings)?;
    flip::install(page, bindings)?;
    Ok(())
}
