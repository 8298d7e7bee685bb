//! Sidebar controller behavior: toggle semantics, the three forced-close
//! paths, and the consistency of the four mirrored markers.

use pagewire::{wire, Effect, Key, Page};

const PAGE: &str = r#"
    <button id="menu-toggle" aria-expanded="false">Menu</button>
    <aside id="sidebar" aria-hidden="true">
        <ul class="sidebar-menu">
            <li id="panel-item">plain text</li>
            <li><a id="panel-link" href="/about.html">About</a></li>
        </ul>
    </aside>
    <main><p id="paragraph">content</p></main>
"#;

fn loaded() -> Page {
    let mut page = Page::load(PAGE, "https://example.com/gallery.html").unwrap();
    wire(&mut page).unwrap();
    page
}

fn assert_open(page: &Page, open: bool) {
    let dom = page.dom();
    let toggle = dom.node_by_id("menu-toggle").unwrap();
    let sidebar = dom.node_by_id("sidebar").unwrap();

    assert_eq!(dom.has_class(sidebar, "open"), open);
    assert_eq!(dom.has_class(toggle, "active"), open);
    assert_eq!(
        dom.attr(toggle, "aria-expanded"),
        Some(if open { "true" } else { "false" })
    );
    assert_eq!(
        dom.attr(sidebar, "aria-hidden"),
        Some(if open { "false" } else { "true" })
    );
}

#[test]
fn test_trigger_toggles_open_and_closed() {
    let mut page = loaded();
    let toggle = page.dom().node_by_id("menu-toggle").unwrap();

    assert_open(&page, false);
    page.click(toggle);
    assert_open(&page, true);
    page.click(toggle);
    assert_open(&page, false);
}

#[test]
fn test_double_dispatch_is_toggle_not_stuck_open() {
    let mut page = loaded();
    let toggle = page.dom().node_by_id("menu-toggle").unwrap();

    // The same activation delivered twice must land back on closed.
    page.click(toggle);
    page.click(toggle);
    assert_open(&page, false);
}

#[test]
fn test_escape_closes_and_returns_focus_to_trigger() {
    let mut page = loaded();
    let toggle = page.dom().node_by_id("menu-toggle").unwrap();

    page.click(toggle);
    assert_open(&page, true);
    page.take_effects();

    page.key_down(Key::Escape);
    assert_open(&page, false);
    assert_eq!(page.focused(), Some(toggle));
    assert_eq!(
        page.take_effects(),
        vec![Effect::Focus {
            target: toggle,
            prevent_scroll: false
        }]
    );
}

#[test]
fn test_escape_while_closed_does_nothing() {
    let mut page = loaded();

    page.key_down(Key::Escape);
    assert_open(&page, false);
    assert_eq!(page.focused(), None);
    assert!(page.take_effects().is_empty());
}

#[test]
fn test_panel_link_activation_closes() {
    let mut page = loaded();
    let toggle = page.dom().node_by_id("menu-toggle").unwrap();
    let link = page.dom().node_by_id("panel-link").unwrap();

    page.click(toggle);
    page.take_effects();

    page.click(link);
    assert_open(&page, false);
    // The link's default navigation is left alone.
    assert_eq!(
        page.take_effects(),
        vec![Effect::Navigate {
            href: "/about.html".into()
        }]
    );
}

#[test]
fn test_outside_click_closes_inside_click_does_not() {
    let mut page = loaded();
    let toggle = page.dom().node_by_id("menu-toggle").unwrap();
    let inside = page.dom().node_by_id("panel-item").unwrap();
    let outside = page.dom().node_by_id("paragraph").unwrap();

    page.click(toggle);
    page.click(inside);
    assert_open(&page, true);

    page.click(outside);
    assert_open(&page, false);
}

#[test]
fn test_absent_panel_leaves_controller_inert() {
    let mut page = Page::load(
        r#"<button id="menu-toggle">Menu</button><p id="paragraph">x</p>"#,
        "https://example.com/",
    )
    .unwrap();
    wire(&mut page).unwrap();

    let toggle = page.dom().node_by_id("menu-toggle").unwrap();
    page.click(toggle);
    page.key_down(Key::Escape);

    assert!(!page.dom().has_class(toggle, "active"));
    assert_eq!(page.dom().attr(toggle, "aria-expanded"), None);
}
