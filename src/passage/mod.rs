//! Parsing of Scripture passages pasted from external Bible software.
//!
//! Input looks like `[Phl 2:1-11 ESV] 1 So if there is any encouragement 2 ...`:
//! a bracketed reference header followed by inline-numbered verse text. The
//! result carries the reference fields, the verses, and an HTML rendering
//! that the passage UI treats the same way as an API-fetched passage.

mod header;
pub mod html;
pub mod validate;
mod verses;

use serde::{Deserialize, Serialize};

use crate::bible::resolve_book_name;
use crate::constants::CUSTOM_BIBLE_PREFIX;
use crate::error::ParseFailure;

pub use validate::{check_passage_match, validate_passage_match, ExpectedPassage, MatchOutcome, PassageMismatch};

/// A single verse with its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse number as written in the pasted text.
    pub number: u32,
    /// Verse text, trimmed.
    pub text: String,
}

impl Verse {
    /// Create a verse.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// A pasted passage after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBiblePassage {
    /// Book abbreviation exactly as typed in the header.
    pub book_abbreviation: String,
    /// Canonical book name, if the abbreviation is known.
    pub book_name: Option<String>,
    /// First chapter of the range.
    pub start_chapter: u32,
    /// First verse of the range.
    pub start_verse: u32,
    /// Last chapter of the range.
    pub end_chapter: u32,
    /// Last verse of the range.
    pub end_verse: u32,
    /// Translation label from the header, e.g. `ESV`.
    pub version_name: String,
    /// Verses in input order. Never empty.
    pub verses: Vec<Verse>,
    /// Rendered HTML fragment.
    pub html_content: String,
    /// Trimmed original input.
    pub raw_text: String,
}

impl ParsedBiblePassage {
    /// Format for display (e.g., "Philippians 2:1-11 ESV").
    pub fn reference(&self) -> String {
        let book = self.book_name.as_deref().unwrap_or(&self.book_abbreviation);
        if self.start_chapter != self.end_chapter {
            format!(
                "{} {}:{}-{}:{} {}",
                book, self.start_chapter, self.start_verse, self.end_chapter, self.end_verse, self.version_name
            )
        } else if self.start_verse != self.end_verse {
            format!(
                "{} {}:{}-{} {}",
                book, self.start_chapter, self.start_verse, self.end_verse, self.version_name
            )
        } else {
            format!("{} {}:{} {}", book, self.start_chapter, self.start_verse, self.version_name)
        }
    }

    /// Selector id the UI uses for this pasted translation (`custom:ESV`).
    pub fn custom_bible_id(&self) -> String {
        format!("{CUSTOM_BIBLE_PREFIX}{}", self.version_name)
    }

    /// The first `limit` verses as `N text` lines, plus a closing
    /// "...and K more verses" line when some were left out.
    pub fn preview(&self, limit: usize) -> Vec<String> {
        let mut lines: Vec<String> = self
            .verses
            .iter()
            .take(limit)
            .map(|v| format!("{} {}", v.number, v.text))
            .collect();
        let remaining = self.verses.len().saturating_sub(limit);
        if remaining > 0 {
            lines.push(format!("...and {remaining} more verses"));
        }
        lines
    }
}

/// Parse pasted passage text, reporting why it was rejected.
pub fn try_parse_custom_bible_text(raw_text: &str) -> Result<ParsedBiblePassage, ParseFailure> {
    let trimmed = raw_text.trim();

    let (inner, rest) = header::extract_header(trimmed).ok_or(ParseFailure::MissingHeader)?;
    let reference = header::parse_header(inner)
        .ok_or_else(|| ParseFailure::UnrecognizedHeader(inner.trim().to_string()))?;
    tracing::debug!(
        "Parsed header {:?}: {}:{}-{}:{} {}",
        reference.book_abbreviation,
        reference.start_chapter,
        reference.start_verse,
        reference.end_chapter,
        reference.end_verse,
        reference.version_name
    );

    let body = rest.trim();
    if body.is_empty() {
        return Err(ParseFailure::EmptyBody);
    }

    let verses = verses::segment_verses(body, reference.start_verse);
    if verses.is_empty() {
        return Err(ParseFailure::NoVerses);
    }
    for verse in &verses {
        tracing::trace!("Verse {}: {} chars", verse.number, verse.text.len());
    }

    let book_name = resolve_book_name(&reference.book_abbreviation).map(str::to_string);
    let html_content = html::render_verses(&verses, &reference.book_abbreviation, reference.start_chapter);

    Ok(ParsedBiblePassage {
        book_abbreviation: reference.book_abbreviation,
        book_name,
        start_chapter: reference.start_chapter,
        start_verse: reference.start_verse,
        end_chapter: reference.end_chapter,
        end_verse: reference.end_verse,
        version_name: reference.version_name,
        verses,
        html_content,
        raw_text: trimmed.to_string(),
    })
}

/// Parse pasted passage text.
///
/// Returns `None` when the header is missing or malformed, or when no verse
/// text follows it.
pub fn parse_custom_bible_text(raw_text: &str) -> Option<ParsedBiblePassage> {
    try_parse_custom_bible_text(raw_text)
        .map_err(|failure| tracing::debug!("Rejected pasted passage: {failure}"))
        .ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_parse_failures() {
        assert_eq!(try_parse_custom_bible_text("just some text"), Err(ParseFailure::MissingHeader));
        assert_eq!(
            try_parse_custom_bible_text("[John three NIV] 16 For God"),
            Err(ParseFailure::UnrecognizedHeader("John three NIV".into()))
        );
        assert_eq!(try_parse_custom_bible_text("  [John 3:16 NIV]   "), Err(ParseFailure::EmptyBody));
    }

    #[test]
    fn test_raw_text_is_trimmed_input() {
        let p = parse_custom_bible_text("\n  [John 3:16 NIV] 16 For God so loved the world \n").unwrap();
        assert_eq!(p.raw_text, "[John 3:16 NIV] 16 For God so loved the world");
    }

    #[test]
    fn test_html_uses_start_chapter() {
        let p = parse_custom_bible_text("[Gen 1:31-2:1 KJV] 31 very good 1 Thus the heavens").unwrap();
        assert!(p.html_content.contains(r#"data-vid="Gen.1.31""#));
        assert!(p.html_content.contains(r#"data-vid="Gen.1.1""#));
    }

    #[test]
    fn test_reference_display() {
        let range = parse_custom_bible_text("[Phl 2:1-11 ESV] 1 So if").unwrap();
        assert_eq!(range.reference(), "Philippians 2:1-11 ESV");

        let single = parse_custom_bible_text("[John 3:16 NIV] 16 For God").unwrap();
        assert_eq!(single.reference(), "John 3:16 NIV");

        let cross = parse_custom_bible_text("[Gen 1:1-2:3 KJV] 1 In the beginning").unwrap();
        assert_eq!(cross.reference(), "Genesis 1:1-2:3 KJV");

        let unknown = parse_custom_bible_text("[Xyz 1:1 ESV] 1 text").unwrap();
        assert_eq!(unknown.reference(), "Xyz 1:1 ESV");
    }

    #[test]
    fn test_custom_bible_id() {
        let p = parse_custom_bible_text("[John 3:16 NIV] 16 For God").unwrap();
        assert_eq!(p.custom_bible_id(), "custom:NIV");
    }

    #[test]
    fn test_preview_truncates() {
        let p = parse_custom_bible_text("[Ps 23:1-6 ESV] 1 a 2 b 3 c 4 d 5 e 6 f").unwrap();
        let preview = p.preview(5);
        assert_eq!(preview.len(), 6);
        assert_eq!(preview[0], "1 a");
        assert_eq!(preview[5], "...and 1 more verses");

        assert_eq!(p.preview(10).len(), 6);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let p = parse_custom_bible_text("[Xyz 1:1 ESV] 1 text").unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["bookAbbreviation"], "Xyz");
        assert!(json["bookName"].is_null());
        assert_eq!(json["versionName"], "ESV");
        assert_eq!(json["verses"][0]["number"], 1);
        assert!(json["htmlContent"].as_str().unwrap().starts_with("<p"));
    }
}
