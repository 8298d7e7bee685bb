//! Active-link highlighter behavior: exact normalized-path equality, root
//! equivalence with the default document, and silent skips for anything
//! unresolvable.

use pagewire::{wire, Page, Selector};

fn marked(page: &Page) -> Vec<String> {
    let sel = Selector::parse("nav a").unwrap();
    page.dom()
        .select_all(page.document(), &sel)
        .into_iter()
        .filter(|&l| page.dom().attr(l, "aria-current") == Some("page"))
        .map(|l| page.dom().attr(l, "href").unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_exact_path_match_is_marked() {
    let html = r#"
        <nav>
            <a href="/">Home</a>
            <a href="/about.html">About</a>
            <a href="https://example.com/about.html">About absolute</a>
            <a href="https://other.example/about.html">Elsewhere</a>
            <a href="mailto:hi@example.com">Mail</a>
        </nav>
    "#;
    let mut page = Page::load(html, "https://example.com/about.html").unwrap();
    wire(&mut page).unwrap();

    assert_eq!(
        marked(&page),
        vec![
            "/about.html".to_string(),
            "https://example.com/about.html".to_string()
        ]
    );
}

#[test]
fn test_root_equals_default_document() {
    let html = r#"<nav><a href="/">Home</a><a href="/about.html">About</a></nav>"#;
    let mut page = Page::load(html, "https://example.com/index.html").unwrap();
    wire(&mut page).unwrap();

    assert_eq!(marked(&page), vec!["/".to_string()]);
}

#[test]
fn test_trailing_slash_is_stripped() {
    let html = r#"<nav><a href="/docs/">Docs</a></nav>"#;
    let mut page = Page::load(html, "https://example.com/docs").unwrap();
    wire(&mut page).unwrap();

    assert_eq!(marked(&page), vec!["/docs/".to_string()]);
}

#[test]
fn test_duplicate_paths_are_all_marked() {
    let html = r#"
        <nav>
            <a href="/about.html">About</a>
            <a href="/about.html">About again</a>
        </nav>
    "#;
    let mut page = Page::load(html, "https://example.com/about.html").unwrap();
    wire(&mut page).unwrap();

    assert_eq!(marked(&page).len(), 2);
}

#[test]
fn test_marked_link_gets_visual_emphasis() {
    let html = r#"<nav><a href="/about.html">About</a></nav>"#;
    let mut page = Page::load(html, "https://example.com/about.html").unwrap();
    wire(&mut page).unwrap();

    let sel = Selector::parse("nav a").unwrap();
    let link = page.dom().select_first(page.document(), &sel).unwrap();
    assert_eq!(
        page.dom().style_property(link, "color").as_deref(),
        Some("var(--primary)")
    );
    assert_eq!(
        page.dom().style_property(link, "font-weight").as_deref(),
        Some("bold")
    );
}

#[test]
fn test_no_nav_links_is_fine() {
    let mut page = Page::load("<main>nothing here</main>", "https://example.com/").unwrap();
    wire(&mut page).unwrap();
    assert!(marked(&page).is_empty());
}
