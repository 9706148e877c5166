//! Core type definitions.
//!
//! Newtype wrappers for the identifiers that cross the boundary between the
//! parser and the passage UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dot-separated verse identifier, e.g. `Phl.2.1`.
///
/// Rendered on every verse span so pasted passages and API-fetched passages
/// share one click-to-observe convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseId {
    /// Book abbreviation as it appears in the source.
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Verse number.
    pub verse: u32,
}

impl VerseId {
    /// Create a new verse identifier.
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for VerseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.book, self.chapter, self.verse)
    }
}

/// Error returned when a string is not a `book.chapter.verse` identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid verse identifier: {0:?}")]
pub struct InvalidVerseId(pub String);

impl FromStr for VerseId {
    type Err = InvalidVerseId;

    // Book ids from other sources may contain dots, so split from the right.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidVerseId(s.to_string());
        let mut parts = s.rsplitn(3, '.');
        let verse = parts.next().and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
        let chapter = parts.next().and_then(|c| c.parse().ok()).ok_or_else(invalid)?;
        let book = parts.next().filter(|b| !b.is_empty()).ok_or_else(invalid)?;
        Ok(Self::new(book, chapter, verse))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_verse_id_display() {
        assert_eq!(VerseId::new("Phl", 2, 11).to_string(), "Phl.2.11");
        assert_eq!(VerseId::new("2 Sam", 7, 12).to_string(), "2 Sam.7.12");
    }

    #[test]
    fn test_verse_id_parse() {
        let id: VerseId = "GEN.1.1".parse().unwrap();
        assert_eq!(id, VerseId::new("GEN", 1, 1));

        let dotted: VerseId = "x.GEN.3.16".parse().unwrap();
        assert_eq!(dotted.book, "x.GEN");
        assert_eq!(dotted.verse, 16);
    }

    #[test]
    fn test_verse_id_parse_rejects_malformed() {
        assert!("GEN.1".parse::<VerseId>().is_err());
        assert!(".1.1".parse::<VerseId>().is_err());
        assert!("GEN.one.1".parse::<VerseId>().is_err());
        assert!("GEN.1.x".parse::<VerseId>().is_err());
    }
}
