// src/core/html.rs
// Text helpers over parsed HTML. Selectors come from `scraper`.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        css: s!(css),
        reason: e.to_string(),
    })
}

pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// Text nodes trimmed and concatenated without separator.
/// `<a> Donald  J. Trump </a>` → `"Donald  J. Trump"`.
pub fn text_compact(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

/// Text nodes trimmed, blank ones dropped, joined by newlines.
/// Keeps paragraph structure of document bodies.
pub fn text_lines(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(html: &str) -> Html {
        Html::parse_fragment(html)
    }

    #[test]
    fn compact_strips_each_node() {
        let doc = frag("<p>  The <b>President</b> said </p>");
        let p = first(&doc, &selector("p").unwrap()).unwrap();
        assert_eq!(text_compact(p), "ThePresidentsaid");
    }

    #[test]
    fn lines_keep_structure() {
        let doc = frag("<div><p>Sec. 1.</p>\n  <p> Purpose. </p><p>  </p></div>");
        let div = first(&doc, &selector("div").unwrap()).unwrap();
        assert_eq!(text_lines(div), "Sec. 1.\nPurpose.");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(selector("div[["), Err(ScrapeError::Selector { .. })));
    }
}
