//! Reveal-on-scroll: content elements fade in the first time they enter
//! the viewport, then leave the observed set for good.

use log::debug;

use crate::bindings::Bindings;
use crate::dom::{Dom, NodeId, Selector};
use crate::error::Result;
use crate::observe::{Watch, WatchConfig};
use crate::page::Page;

fn hide(dom: &mut Dom, target: NodeId) {
    dom.set_style_property(target, "opacity", "0");
    dom.set_style_property(target, "transform", "translateY(16px)");
    dom.set_style_property(
        target,
        "transition",
        "opacity .5s ease-out, transform .5s ease-out",
    );
}

fn show(dom: &mut Dom, target: NodeId) {
    dom.set_style_property(target, "opacity", "1");
    dom.set_style_property(target, "transform", "translateY(0)");
}

/// Hide the candidates and start the one-shot viewport watcher. With no
/// candidates in the document, no watcher is allocated.
pub fn install(page: &mut Page, bindings: &Bindings) -> Result<()> {
    let selector = Selector::parse(&bindings.reveal_targets)?;
    let targets = page.dom().select_all(page.document(), &selector);
    if targets.is_empty() {
        return Ok(());
    }
    debug!("reveal: observing {} element(s)", targets.len());

    for &target in &targets {
        hide(page.dom_mut(), target);
    }

    page.observe(targets, WatchConfig::default(), |state, target| {
        show(&mut state.dom, target);
        Watch::Done
    });
    Ok(())
}
