//! Verse segmentation.
//!
//! Pasted passages carry their verse numbers inline: `1 So if there is any
//! encouragement 2 complete my joy`. Any run of digits followed by whitespace
//! starts a new verse. That also catches numerals inside a verse ("in 3 days"),
//! which splits the verse there; stored passages depend on this exact
//! behavior, so it stays.

use std::sync::LazyLock;

use regex::Regex;

use super::Verse;

/// Inline verse marker: digits followed by whitespace.
#[allow(clippy::expect_used)]
static RE_VERSE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s+").expect("valid regex: RE_VERSE_MARKER")
});

/// A verse marker located in the body: its number and the byte range it spans.
struct Marker {
    number: u32,
    start: usize,
    end: usize,
}

/// Split `body` into numbered verses.
///
/// Text before the first marker is dropped, as are verses whose text is
/// empty once trimmed. When the body has no marker at all it becomes a
/// single verse numbered `fallback_verse`.
pub(crate) fn segment_verses(body: &str, fallback_verse: u32) -> Vec<Verse> {
    let markers: Vec<Marker> = RE_VERSE_MARKER
        .captures_iter(body)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            // Numbers past u32 are left in the surrounding verse's text.
            let number = caps.get(1)?.as_str().parse().ok()?;
            Some(Marker {
                number,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();

    if markers.is_empty() {
        tracing::debug!("No verse markers found, using verse {fallback_verse} for the whole body");
        let text = body.trim();
        if text.is_empty() {
            return Vec::new();
        }
        return vec![Verse::new(fallback_verse, text)];
    }

    markers
        .iter()
        .enumerate()
        .filter_map(|(i, marker)| {
            let text_end = markers.get(i + 1).map_or(body.len(), |next| next.start);
            let text = body[marker.end..text_end].trim();
            if text.is_empty() {
                tracing::trace!("Dropping empty verse {}", marker.number);
                return None;
            }
            Some(Verse::new(marker.number, text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn numbers(verses: &[Verse]) -> Vec<u32> {
        verses.iter().map(|v| v.number).collect()
    }

    #[test]
    fn test_segments_inline_numbers() {
        let verses = segment_verses("1 So if there is any encouragement 2 complete my joy", 1);
        assert_eq!(
            verses,
            vec![
                Verse::new(1, "So if there is any encouragement"),
                Verse::new(2, "complete my joy"),
            ]
        );
    }

    #[test]
    fn test_fallback_to_start_verse() {
        let verses = segment_verses("For God so loved the world", 16);
        assert_eq!(verses, vec![Verse::new(16, "For God so loved the world")]);
    }

    #[test]
    fn test_trailing_number_without_whitespace_is_text() {
        let verses = segment_verses("16", 16);
        assert_eq!(verses, vec![Verse::new(16, "16")]);
    }

    #[test]
    fn test_empty_verses_are_dropped() {
        let verses = segment_verses("1 2 complete my joy", 1);
        assert_eq!(verses, vec![Verse::new(2, "complete my joy")]);
    }

    #[test]
    fn test_text_before_first_marker_is_dropped() {
        let verses = segment_verses("Heading 1 In the beginning", 1);
        assert_eq!(verses, vec![Verse::new(1, "In the beginning")]);
    }

    #[test]
    fn test_numbers_kept_verbatim() {
        let verses = segment_verses("5 five 3 three 9 nine", 1);
        assert_eq!(numbers(&verses), vec![5, 3, 9]);
    }

    #[test]
    fn test_in_verse_numeral_splits_verse() {
        let verses = segment_verses("1 he rose in 3 days", 1);
        assert_eq!(numbers(&verses), vec![1, 3]);
        assert_eq!(verses[0].text, "he rose in");
        assert_eq!(verses[1].text, "days");
    }

    #[test]
    fn test_ordinal_does_not_split_verse() {
        let verses = segment_verses("1 in the 3rd year", 1);
        assert_eq!(verses, vec![Verse::new(1, "in the 3rd year")]);
    }

    #[test]
    fn test_multiline_body() {
        let verses = segment_verses("1 first line\n2 second\tline\n", 1);
        assert_eq!(verses, vec![Verse::new(1, "first line"), Verse::new(2, "second\tline")]);
    }

    #[test]
    fn test_oversized_number_stays_in_text() {
        let verses = segment_verses("1 count 99999999999 stars", 1);
        assert_eq!(verses, vec![Verse::new(1, "count 99999999999 stars")]);
    }

    #[test]
    fn test_whitespace_body_yields_nothing() {
        assert!(segment_verses("   ", 1).is_empty());
    }
}
