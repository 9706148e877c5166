//! HTML rendering for parsed verses.
//!
//! Output mirrors the markup of API-fetched passages: one flat paragraph,
//! one `data-vid` span per verse, and the verse number in its own `v` span.

use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_quoted_attribute};

use super::Verse;
use crate::constants::html::{PARAGRAPH_CLASS, VERSE_ID_ATTR, VERSE_NUMBER_CLASS};
use crate::types::VerseId;

/// Render verses as a single `<p>` fragment.
///
/// Verse text is escaped (`&`, `<`, `>`, `"`, `'`) before it is embedded.
pub fn render_verses(verses: &[Verse], book_abbreviation: &str, chapter: u32) -> String {
    let mut html = format!(r#"<p class="{PARAGRAPH_CLASS}">"#);
    for verse in verses {
        let vid = VerseId::new(book_abbreviation, chapter, verse.number);
        // Writing to a String cannot fail.
        let _ = write!(
            html,
            r#"<span {VERSE_ID_ATTR}="{}"><span class="{VERSE_NUMBER_CLASS}">{}</span> {} </span>"#,
            encode_double_quoted_attribute(&vid.to_string()),
            verse.number,
            encode_quoted_attribute(&verse.text),
        );
    }
    html.push_str("</p>");
    html
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_render_single_verse() {
        let html = render_verses(&[Verse::new(16, "For God so loved the world")], "John", 3);
        assert_eq!(
            html,
            r#"<p class="p"><span data-vid="John.3.16"><span class="v">16</span> For God so loved the world </span></p>"#
        );
    }

    #[test]
    fn test_render_is_one_flat_paragraph() {
        let verses = [Verse::new(1, "a"), Verse::new(2, "b"), Verse::new(3, "c")];
        let html = render_verses(&verses, "Phl", 2);
        assert_eq!(html.matches("<p ").count(), 1);
        assert_eq!(html.matches("data-vid=").count(), 3);
        assert!(html.contains(r#"data-vid="Phl.2.3""#));
    }

    #[test]
    fn test_render_escapes_text() {
        let html = render_verses(&[Verse::new(1, r#"<b>"Tom" & 'Jerry'</b>"#)], "Gen", 1);
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("&quot;Tom&quot;"));
        assert!(html.contains("&amp;"));
        assert!(!html.contains("'Jerry'"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_verses(&[], "Gen", 1), r#"<p class="p"></p>"#);
    }
}
