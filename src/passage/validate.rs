//! Matching a pasted passage against the assignment it was pasted for.
//!
//! The check is advisory. Only book and start chapter are compared; a paste
//! may cover more verses than the assignment asked for.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ParsedBiblePassage;
use crate::bible::resolve_book_name;

/// The passage an assignment expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedPassage {
    /// Book abbreviation as stored on the assignment.
    pub book_abbreviation: String,
    /// First chapter.
    pub start_chapter: u32,
    /// First verse.
    pub start_verse: u32,
    /// Last chapter.
    pub end_chapter: u32,
    /// Last verse.
    pub end_verse: u32,
}

impl ExpectedPassage {
    /// Create an expected passage reference.
    pub fn new(
        book_abbreviation: impl Into<String>,
        start_chapter: u32,
        start_verse: u32,
        end_chapter: u32,
        end_verse: u32,
    ) -> Self {
        Self {
            book_abbreviation: book_abbreviation.into(),
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
        }
    }
}

/// Why a pasted passage does not match the expected one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassageMismatch {
    /// Both abbreviations resolve, to different books.
    #[error("Book mismatch: pasted {pasted}, expected {expected}")]
    Book {
        /// Book named by the pasted header.
        pasted: &'static str,
        /// Book the assignment expects.
        expected: &'static str,
    },

    /// Start chapters differ.
    #[error("Chapter mismatch: pasted chapter {pasted}, expected {expected}")]
    Chapter {
        /// Start chapter of the pasted passage.
        pasted: u32,
        /// Start chapter the assignment expects.
        expected: u32,
    },
}

/// Valid/invalid result with a message when invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Whether the passage matches.
    pub valid: bool,
    /// Human-readable reason when `valid` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MatchOutcome {
    /// A matching outcome.
    pub const fn valid() -> Self {
        Self { valid: true, message: None }
    }

    /// A mismatching outcome carrying the reason.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

impl From<Result<(), PassageMismatch>> for MatchOutcome {
    fn from(result: Result<(), PassageMismatch>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(mismatch) => Self::invalid(mismatch.to_string()),
        }
    }
}

/// Compare book and start chapter of `parsed` against `expected`.
///
/// The book check is skipped when either abbreviation is unknown.
pub fn check_passage_match(
    parsed: &ParsedBiblePassage,
    expected: &ExpectedPassage,
) -> Result<(), PassageMismatch> {
    let pasted_book = resolve_book_name(&parsed.book_abbreviation);
    let expected_book = resolve_book_name(&expected.book_abbreviation);

    if let (Some(pasted), Some(expected)) = (pasted_book, expected_book) {
        if pasted != expected {
            return Err(PassageMismatch::Book { pasted, expected });
        }
    } else {
        tracing::debug!(
            "Skipping book check for {:?} vs {:?}",
            parsed.book_abbreviation,
            expected.book_abbreviation
        );
    }

    if parsed.start_chapter != expected.start_chapter {
        return Err(PassageMismatch::Chapter {
            pasted: parsed.start_chapter,
            expected: expected.start_chapter,
        });
    }

    Ok(())
}

/// Validate a parsed passage against the expected assignment passage.
pub fn validate_passage_match(parsed: &ParsedBiblePassage, expected: &ExpectedPassage) -> MatchOutcome {
    check_passage_match(parsed, expected).into()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::passage::parse_custom_bible_text;

    fn genesis_one() -> ParsedBiblePassage {
        parse_custom_bible_text("[Gen 1:1-5 KJV] 1 In the beginning 2 And the earth").unwrap()
    }

    #[test]
    fn test_matching_passage_is_valid() {
        let outcome = validate_passage_match(&genesis_one(), &ExpectedPassage::new("Genesis", 1, 1, 1, 31));
        assert_eq!(outcome, MatchOutcome::valid());
    }

    #[test]
    fn test_chapter_mismatch() {
        let outcome = validate_passage_match(&genesis_one(), &ExpectedPassage::new("Gen", 2, 1, 2, 3));
        assert!(!outcome.valid);
        assert_eq!(
            outcome.message.as_deref(),
            Some("Chapter mismatch: pasted chapter 1, expected 2")
        );
    }

    #[test]
    fn test_book_mismatch_names_both_books() {
        let err = check_passage_match(&genesis_one(), &ExpectedPassage::new("Exod", 1, 1, 1, 5)).unwrap_err();
        assert_eq!(
            err,
            PassageMismatch::Book {
                pasted: "Genesis",
                expected: "Exodus"
            }
        );
        assert_eq!(err.to_string(), "Book mismatch: pasted Genesis, expected Exodus");
    }

    #[test]
    fn test_book_check_is_checked_before_chapter() {
        let err = check_passage_match(&genesis_one(), &ExpectedPassage::new("Exod", 3, 1, 3, 5)).unwrap_err();
        assert!(matches!(err, PassageMismatch::Book { .. }));
    }

    #[test]
    fn test_unknown_book_skips_book_check() {
        let parsed = parse_custom_bible_text("[Xyz 1:1 ESV] 1 text").unwrap();
        assert!(validate_passage_match(&parsed, &ExpectedPassage::new("Gen", 1, 1, 1, 1)).valid);
        assert!(validate_passage_match(&genesis_one(), &ExpectedPassage::new("Abc", 1, 1, 1, 1)).valid);
    }

    #[test]
    fn test_abbreviation_variants_compare_equal() {
        let parsed = parse_custom_bible_text("[1 Cor 13:4-7 ESV] 4 Love is patient").unwrap();
        assert!(validate_passage_match(&parsed, &ExpectedPassage::new("1CO", 13, 4, 13, 7)).valid);
    }

    #[test]
    fn test_verse_range_is_not_enforced() {
        let outcome = validate_passage_match(&genesis_one(), &ExpectedPassage::new("Gen", 1, 20, 1, 25));
        assert!(outcome.valid);
    }

    #[test]
    fn test_outcome_json_omits_empty_message() {
        let json = serde_json::to_string(&MatchOutcome::valid()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
    }
}
