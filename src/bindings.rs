//! Element-binding configuration.
//!
//! Controllers find their elements through these selectors. The defaults
//! mirror the class/ID contract of the page this layer ships with; embed a
//! different document by overriding the relevant fields.

/// Selector contract between the controllers and the document.
#[derive(Debug, Clone)]
pub struct Bindings {
    /// The sidebar trigger control.
    pub menu_toggle: String,
    /// The collapsible panel container.
    pub sidebar: String,
    /// Links inside the panel, scoped to it.
    pub sidebar_links: String,
    /// The navigation link collection for the active-link highlighter.
    pub nav_links: String,
    /// Elements revealed on first viewport entry.
    pub reveal_targets: String,
    /// Flip card root.
    pub flip_card: String,
    /// Inner flip container carrying the flipped state.
    pub flip_inner: String,
    /// The dedicated disclosure control; the only way to flip a card.
    pub flip_button: String,
    /// Back face of a card.
    pub flip_back: String,
    /// Content region on the back face that receives focus after a flip.
    pub flip_back_content: String,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            menu_toggle: "#menu-toggle".into(),
            sidebar: "#sidebar".into(),
            sidebar_links: ".sidebar-menu a".into(),
            nav_links: "nav a[href]".into(),
            reveal_targets: ".card, .work-card, .flip-card".into(),
            flip_card: ".flip-card".into(),
            flip_inner: ".flip-card__inner".into(),
            flip_button: ".flip-card__btn".into(),
            flip_back: ".flip-card__back".into(),
            flip_back_content: ".flip-card__content".into(),
        }
    }
}
