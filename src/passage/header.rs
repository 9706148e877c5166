//! Reference header extraction and grammar.
//!
//! A pasted passage opens with a bracketed reference such as
//! `[Phl 2:1-11 ESV]`. The interior is matched against three shapes in a
//! fixed order; the first full match wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Leading `[...]` run at the very start of the input.
#[allow(clippy::expect_used)]
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\]]+)\]").expect("valid regex: RE_HEADER")
});

/// `Gen 1:1-2:3 KJV`
#[allow(clippy::expect_used)]
static RE_CROSS_CHAPTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<book>[0-9]?\s*\w+)\s+(?P<sc>[0-9]+):(?P<sv>[0-9]+)-(?P<ec>[0-9]+):(?P<ev>[0-9]+)\s+(?P<version>\w+)$",
    )
    .expect("valid regex: RE_CROSS_CHAPTER")
});

/// `Phl 2:1-11 ESV`
#[allow(clippy::expect_used)]
static RE_SAME_CHAPTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<book>[0-9]?\s*\w+)\s+(?P<sc>[0-9]+):(?P<sv>[0-9]+)-(?P<ev>[0-9]+)\s+(?P<version>\w+)$",
    )
    .expect("valid regex: RE_SAME_CHAPTER")
});

/// `John 3:16 NIV`
#[allow(clippy::expect_used)]
static RE_SINGLE_VERSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<book>[0-9]?\s*\w+)\s+(?P<sc>[0-9]+):(?P<sv>[0-9]+)\s+(?P<version>\w+)$")
        .expect("valid regex: RE_SINGLE_VERSE")
});

/// Header shapes in match priority order.
fn header_patterns() -> [&'static Regex; 3] {
    [&*RE_CROSS_CHAPTER, &*RE_SAME_CHAPTER, &*RE_SINGLE_VERSE]
}

/// Fields read from a reference header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub book_abbreviation: String,
    pub start_chapter: u32,
    pub start_verse: u32,
    pub end_chapter: u32,
    pub end_verse: u32,
    pub version_name: String,
}

/// Split the input into the header interior and everything after the
/// closing bracket. The header must be the first thing in `text`.
pub(crate) fn extract_header(text: &str) -> Option<(&str, &str)> {
    let caps = RE_HEADER.captures(text)?;
    let whole = caps.get(0)?;
    let inner = caps.get(1)?.as_str();
    Some((inner, &text[whole.end()..]))
}

/// Match a header interior (brackets already stripped) against the
/// supported reference shapes.
pub(crate) fn parse_header(inner: &str) -> Option<Header> {
    let inner = inner.trim();
    let caps = header_patterns()
        .into_iter()
        .find_map(|re| re.captures(inner))?;
    header_from_captures(&caps)
}

fn header_from_captures(caps: &Captures<'_>) -> Option<Header> {
    let start_chapter = number(caps, "sc")?;
    let start_verse = number(caps, "sv")?;
    let end_chapter = match caps.name("ec") {
        Some(_) => number(caps, "ec")?,
        None => start_chapter,
    };
    let end_verse = match caps.name("ev") {
        Some(_) => number(caps, "ev")?,
        None => start_verse,
    };

    Some(Header {
        book_abbreviation: caps.name("book")?.as_str().trim().to_string(),
        start_chapter,
        start_verse,
        end_chapter,
        end_verse,
        version_name: caps.name("version")?.as_str().to_string(),
    })
}

/// Numeric capture group; `None` when absent or too large for `u32`.
fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name)?.as_str().parse().ok()
}
