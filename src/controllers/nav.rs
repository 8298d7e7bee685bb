//! Active navigation link highlighting.
//!
//! Runs once at wiring: the navigation link whose resolved path equals the
//! current document path gets visual emphasis plus `aria-current="page"`.
//! Unresolvable and cross-origin references are skipped per link.

use log::debug;
use url::Url;

use crate::bindings::Bindings;
use crate::dom::Selector;
use crate::error::Result;
use crate::page::Page;

/// Path every empty normalized path collapses to.
pub const DEFAULT_DOCUMENT: &str = "/index.html";

/// Normalize a URL path for equality comparison: strip one trailing slash,
/// and treat the empty path as the site's default document. `/` and
/// `/index.html` compare equal.
pub fn normalize_path(path: &str) -> String {
    let stripped = path.strip_suffix('/').unwrap_or(path);
    if stripped.is_empty() {
        DEFAULT_DOCUMENT.to_string()
    } else {
        stripped.to_string()
    }
}

/// Mark navigation links matching the current document path.
pub fn install(page: &mut Page, bindings: &Bindings) -> Result<()> {
    let selector = Selector::parse(&bindings.nav_links)?;

    let current = normalize_path(page.location().path());
    let origin = page.location().origin();
    // An opaque origin cannot serve as a resolution base; every link is
    // then unresolvable and the highlighter stays inert.
    let Ok(base) = Url::parse(&origin.ascii_serialization()) else {
        return Ok(());
    };

    let links = page.dom().select_all(page.document(), &selector);
    let mut matched = 0usize;
    for link in links {
        let Some(href) = page.dom().attr(link, "href").map(str::to_owned) else {
            continue;
        };
        let Ok(resolved) = base.join(&href) else {
            continue;
        };
        if resolved.origin() != origin {
            continue;
        }
        if normalize_path(resolved.path()) == current {
            let dom = page.dom_mut();
            dom.set_style_property(link, "color", "var(--primary)");
            dom.set_style_property(link, "font-weight", "bold");
            dom.set_attr(link, "aria-current", "page");
            matched += 1;
        }
    }
    debug!("nav highlight: {matched} link(s) marked current for {current}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_normalize_strips_one_trailing_slash() {
        assert_eq!(normalize_path("/about.html"), "/about.html");
        assert_eq!(normalize_path("/docs/"), "/docs");
        assert_eq!(normalize_path("/"), DEFAULT_DOCUMENT);
        assert_eq!(normalize_path(""), DEFAULT_DOCUMENT);
    }

    proptest! {
        #[test]
        fn prop_normalize_is_identity_without_trailing_slash(
            path in "/[a-z0-9./-]{0,30}[a-z0-9]"
        ) {
            prop_assert_eq!(normalize_path(&path), path);
        }

        #[test]
        fn prop_normalize_never_empty(path in "[a-z0-9./-]{0,32}") {
            prop_assert!(!normalize_path(&path).is_empty());
        }
    }
}
