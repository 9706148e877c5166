//! `passage_parser` - parser for Scripture passages pasted from external Bible software.
//!
//! Turns text such as `[Phl 2:1-11 ESV] 1 So if there is any encouragement 2 ...`
//! into a structured passage record with a verse-tagged HTML rendering.

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod passage;
pub mod types;

pub use bible::resolve_book_name;
pub use error::{Error, ParseFailure, Result};
pub use passage::{
    parse_custom_bible_text, try_parse_custom_bible_text, validate_passage_match, ExpectedPassage, MatchOutcome,
    ParsedBiblePassage, Verse,
};
pub use types::VerseId;
