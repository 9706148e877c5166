//! Crate constants.
//!
//! Centralizes user-facing help text and default values.

/// Help text shown when a paste cannot be parsed.
pub mod format_help {
    /// Message shown to the user after a rejected paste.
    pub const PARSE_FAILURE: &str =
        "Could not parse the text. Expected format: [Book Chapter:Verse-Verse Version] 1 text 2 text...";

    /// One example per supported header shape.
    pub const SUPPORTED_FORMATS: &[&str] = &[
        "[Phl 2:1-11 ESV] 1 text 2 text...",
        "[John 3:16 NIV] 16 For God so loved...",
        "[Gen 1:1-2:3 KJV] 1 In the beginning...",
    ];
}

/// HTML conventions shared with the API-fetched passage renderer.
pub mod html {
    /// Class of the wrapper paragraph.
    pub const PARAGRAPH_CLASS: &str = "p";

    /// Class of the verse-number span.
    pub const VERSE_NUMBER_CLASS: &str = "v";

    /// Attribute carrying the verse identifier.
    pub const VERSE_ID_ATTR: &str = "data-vid";
}

/// Prefix of the selector id for a pasted translation.
pub const CUSTOM_BIBLE_PREFIX: &str = "custom:";

/// Defaults for the command-line front end.
pub mod cli {
    /// Verses listed in the preview before truncating.
    pub const DEFAULT_PREVIEW_VERSES: usize = 5;

    /// Log filter used when neither `RUST_LOG` nor `PASSAGE_LOG` is set.
    pub const DEFAULT_LOG_FILTER: &str = "warn";
}
