//! Anchor scroll controller behavior: smooth scroll when the target
//! exists, untouched defaults otherwise.

use pagewire::{wire, Effect, Page, ScrollAlignment, ScrollBehavior};

const PAGE: &str = r##"
    <nav>
        <a id="to-about" href="#about">About</a>
        <a id="bare" href="#">Top</a>
        <a id="to-missing" href="#nowhere">Missing</a>
    </nav>
    <section id="about">About section</section>
"##;

fn loaded() -> Page {
    let mut page = Page::load(PAGE, "https://example.com/gallery.html").unwrap();
    wire(&mut page).unwrap();
    page
}

#[test]
fn test_existing_target_scrolls_smoothly() {
    let mut page = loaded();
    let link = page.dom().node_by_id("to-about").unwrap();
    let section = page.dom().node_by_id("about").unwrap();

    let outcome = page.click(link);
    assert!(outcome.default_prevented);
    assert_eq!(
        page.take_effects(),
        vec![Effect::ScrollIntoView {
            target: section,
            behavior: ScrollBehavior::Smooth,
            align: ScrollAlignment::Start,
        }]
    );
}

#[test]
fn test_bare_fragment_keeps_default_and_never_scrolls() {
    let mut page = loaded();
    let link = page.dom().node_by_id("bare").unwrap();

    let outcome = page.click(link);
    assert!(!outcome.default_prevented);
    let effects = page.take_effects();
    assert!(effects
        .iter()
        .all(|e| !matches!(e, Effect::ScrollIntoView { .. })));
    assert_eq!(effects, vec![Effect::FragmentJump { fragment: "".into() }]);
}

#[test]
fn test_missing_target_keeps_default() {
    let mut page = loaded();
    let link = page.dom().node_by_id("to-missing").unwrap();

    let outcome = page.click(link);
    assert!(!outcome.default_prevented);
    assert_eq!(
        page.take_effects(),
        vec![Effect::FragmentJump {
            fragment: "nowhere".into()
        }]
    );
}

#[test]
fn test_unusual_fragment_does_not_panic() {
    let mut page = Page::load(
        r##"<a id="odd" href="#a]b[c">odd</a>"##,
        "https://example.com/gallery.html",
    )
    .unwrap();
    wire(&mut page).unwrap();

    let link = page.dom().node_by_id("odd").unwrap();
    let outcome = page.click(link);
    assert!(!outcome.default_prevented);
}

#[test]
fn test_fragment_target_with_odd_id_still_resolves() {
    // The identifier itself contains selector metacharacters; identifier
    // lookup must still find it.
    let mut page = Page::load(
        r##"<a id="odd" href="#a:b">odd</a><div id="a:b">target</div>"##,
        "https://example.com/gallery.html",
    )
    .unwrap();
    wire(&mut page).unwrap();

    let link = page.dom().node_by_id("odd").unwrap();
    let outcome = page.click(link);
    assert!(outcome.default_prevented);
}
