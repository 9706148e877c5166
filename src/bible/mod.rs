//! Book abbreviation lookup.
//!
//! Maps the abbreviation typed in a pasted header (`Phl`, `1Cor`, `2 Sam`) to
//! the canonical English book name. The alias table is the only thing the
//! passage matcher relies on to decide whether two abbreviations name the
//! same book, so every alias is listed explicitly.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Canonical names of the 66 books, in canonical order.
pub const CANONICAL_BOOKS: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

lazy_static! {
    /// Normalized abbreviation -> canonical book name.
    static ref BOOK_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Old Testament
        m.insert("gen", "Genesis");
        m.insert("ge", "Genesis");
        m.insert("gn", "Genesis");
        m.insert("genesis", "Genesis");
        m.insert("exod", "Exodus");
        m.insert("exo", "Exodus");
        m.insert("ex", "Exodus");
        m.insert("exodus", "Exodus");
        m.insert("lev", "Leviticus");
        m.insert("le", "Leviticus");
        m.insert("lv", "Leviticus");
        m.insert("leviticus", "Leviticus");
        m.insert("num", "Numbers");
        m.insert("nu", "Numbers");
        m.insert("nm", "Numbers");
        m.insert("numbers", "Numbers");
        m.insert("deut", "Deuteronomy");
        m.insert("deu", "Deuteronomy");
        m.insert("dt", "Deuteronomy");
        m.insert("deuteronomy", "Deuteronomy");
        m.insert("josh", "Joshua");
        m.insert("jos", "Joshua");
        m.insert("jsh", "Joshua");
        m.insert("joshua", "Joshua");
        m.insert("judg", "Judges");
        m.insert("jdg", "Judges");
        m.insert("jg", "Judges");
        m.insert("judges", "Judges");
        m.insert("ruth", "Ruth");
        m.insert("rth", "Ruth");
        m.insert("ru", "Ruth");
        m.insert("1sam", "1 Samuel");
        m.insert("1sa", "1 Samuel");
        m.insert("1sm", "1 Samuel");
        m.insert("1samuel", "1 Samuel");
        m.insert("2sam", "2 Samuel");
        m.insert("2sa", "2 Samuel");
        m.insert("2sm", "2 Samuel");
        m.insert("2samuel", "2 Samuel");
        m.insert("1kgs", "1 Kings");
        m.insert("1ki", "1 Kings");
        m.insert("1kg", "1 Kings");
        m.insert("1kings", "1 Kings");
        m.insert("2kgs", "2 Kings");
        m.insert("2ki", "2 Kings");
        m.insert("2kg", "2 Kings");
        m.insert("2kings", "2 Kings");
        m.insert("1chr", "1 Chronicles");
        m.insert("1ch", "1 Chronicles");
        m.insert("1chronicles", "1 Chronicles");
        m.insert("2chr", "2 Chronicles");
        m.insert("2ch", "2 Chronicles");
        m.insert("2chronicles", "2 Chronicles");
        m.insert("ezra", "Ezra");
        m.insert("ezr", "Ezra");
        m.insert("neh", "Nehemiah");
        m.insert("ne", "Nehemiah");
        m.insert("nehemiah", "Nehemiah");
        m.insert("esth", "Esther");
        m.insert("est", "Esther");
        m.insert("es", "Esther");
        m.insert("esther", "Esther");
        m.insert("job", "Job");
        m.insert("jb", "Job");
        m.insert("ps", "Psalms");
        m.insert("psa", "Psalms");
        m.insert("psm", "Psalms");
        m.insert("pss", "Psalms");
        m.insert("psalm", "Psalms");
        m.insert("psalms", "Psalms");
        m.insert("prov", "Proverbs");
        m.insert("pro", "Proverbs");
        m.insert("pr", "Proverbs");
        m.insert("proverbs", "Proverbs");
        m.insert("eccl", "Ecclesiastes");
        m.insert("ecc", "Ecclesiastes");
        m.insert("ec", "Ecclesiastes");
        m.insert("ecclesiastes", "Ecclesiastes");
        m.insert("song", "Song of Solomon");
        m.insert("sos", "Song of Solomon");
        m.insert("ss", "Song of Solomon");
        m.insert("isa", "Isaiah");
        m.insert("is", "Isaiah");
        m.insert("isaiah", "Isaiah");
        m.insert("jer", "Jeremiah");
        m.insert("je", "Jeremiah");
        m.insert("jeremiah", "Jeremiah");
        m.insert("lam", "Lamentations");
        m.insert("la", "Lamentations");
        m.insert("lamentations", "Lamentations");
        m.insert("ezek", "Ezekiel");
        m.insert("eze", "Ezekiel");
        m.insert("ezk", "Ezekiel");
        m.insert("ezekiel", "Ezekiel");
        m.insert("dan", "Daniel");
        m.insert("da", "Daniel");
        m.insert("dn", "Daniel");
        m.insert("daniel", "Daniel");
        m.insert("hos", "Hosea");
        m.insert("ho", "Hosea");
        m.insert("hosea", "Hosea");
        m.insert("joel", "Joel");
        m.insert("jl", "Joel");
        m.insert("amos", "Amos");
        m.insert("am", "Amos");
        m.insert("obad", "Obadiah");
        m.insert("ob", "Obadiah");
        m.insert("obadiah", "Obadiah");
        m.insert("jonah", "Jonah");
        m.insert("jon", "Jonah");
        m.insert("mic", "Micah");
        m.insert("mi", "Micah");
        m.insert("micah", "Micah");
        m.insert("nah", "Nahum");
        m.insert("na", "Nahum");
        m.insert("nahum", "Nahum");
        m.insert("hab", "Habakkuk");
        m.insert("hb", "Habakkuk");
        m.insert("habakkuk", "Habakkuk");
        m.insert("zeph", "Zephaniah");
        m.insert("zep", "Zephaniah");
        m.insert("zephaniah", "Zephaniah");
        m.insert("hag", "Haggai");
        m.insert("hg", "Haggai");
        m.insert("haggai", "Haggai");
        m.insert("zech", "Zechariah");
        m.insert("zec", "Zechariah");
        m.insert("zechariah", "Zechariah");
        m.insert("mal", "Malachi");
        m.insert("ml", "Malachi");
        m.insert("malachi", "Malachi");
        // New Testament
        m.insert("matt", "Matthew");
        m.insert("mat", "Matthew");
        m.insert("mt", "Matthew");
        m.insert("matthew", "Matthew");
        m.insert("mark", "Mark");
        m.insert("mrk", "Mark");
        m.insert("mk", "Mark");
        m.insert("luke", "Luke");
        m.insert("luk", "Luke");
        m.insert("lk", "Luke");
        m.insert("john", "John");
        m.insert("joh", "John");
        m.insert("jn", "John");
        m.insert("acts", "Acts");
        m.insert("act", "Acts");
        m.insert("ac", "Acts");
        m.insert("rom", "Romans");
        m.insert("ro", "Romans");
        m.insert("rm", "Romans");
        m.insert("romans", "Romans");
        m.insert("1cor", "1 Corinthians");
        m.insert("1co", "1 Corinthians");
        m.insert("1corinthians", "1 Corinthians");
        m.insert("2cor", "2 Corinthians");
        m.insert("2co", "2 Corinthians");
        m.insert("2corinthians", "2 Corinthians");
        m.insert("gal", "Galatians");
        m.insert("ga", "Galatians");
        m.insert("galatians", "Galatians");
        m.insert("eph", "Ephesians");
        m.insert("ep", "Ephesians");
        m.insert("ephesians", "Ephesians");
        m.insert("phil", "Philippians");
        m.insert("php", "Philippians");
        m.insert("phl", "Philippians");
        m.insert("philippians", "Philippians");
        m.insert("col", "Colossians");
        m.insert("co", "Colossians");
        m.insert("colossians", "Colossians");
        m.insert("1thess", "1 Thessalonians");
        m.insert("1th", "1 Thessalonians");
        m.insert("1thes", "1 Thessalonians");
        m.insert("1thessalonians", "1 Thessalonians");
        m.insert("2thess", "2 Thessalonians");
        m.insert("2th", "2 Thessalonians");
        m.insert("2thes", "2 Thessalonians");
        m.insert("2thessalonians", "2 Thessalonians");
        m.insert("1tim", "1 Timothy");
        m.insert("1ti", "1 Timothy");
        m.insert("1timothy", "1 Timothy");
        m.insert("2tim", "2 Timothy");
        m.insert("2ti", "2 Timothy");
        m.insert("2timothy", "2 Timothy");
        m.insert("titus", "Titus");
        m.insert("tit", "Titus");
        m.insert("phlm", "Philemon");
        m.insert("phm", "Philemon");
        m.insert("philem", "Philemon");
        m.insert("philemon", "Philemon");
        m.insert("heb", "Hebrews");
        m.insert("he", "Hebrews");
        m.insert("hebrews", "Hebrews");
        m.insert("james", "James");
        m.insert("jas", "James");
        m.insert("jm", "James");
        m.insert("1pet", "1 Peter");
        m.insert("1pe", "1 Peter");
        m.insert("1pt", "1 Peter");
        m.insert("1peter", "1 Peter");
        m.insert("2pet", "2 Peter");
        m.insert("2pe", "2 Peter");
        m.insert("2pt", "2 Peter");
        m.insert("2peter", "2 Peter");
        m.insert("1john", "1 John");
        m.insert("1jn", "1 John");
        m.insert("1jo", "1 John");
        m.insert("2john", "2 John");
        m.insert("2jn", "2 John");
        m.insert("2jo", "2 John");
        m.insert("3john", "3 John");
        m.insert("3jn", "3 John");
        m.insert("3jo", "3 John");
        m.insert("jude", "Jude");
        m.insert("jud", "Jude");
        m.insert("rev", "Revelation");
        m.insert("re", "Revelation");
        m.insert("revelation", "Revelation");
        m.insert("revelations", "Revelation");
        m
    };
}

/// Lower-case an abbreviation and drop all whitespace, so `"1 Cor"`,
/// `"1cor"` and `"1 COR"` compare equal.
pub fn normalize_abbreviation(abbreviation: &str) -> String {
    abbreviation
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve an abbreviation to its canonical book name.
///
/// Returns `None` for anything not in the table; an unknown book is not an
/// error for callers.
pub fn resolve_book_name(abbreviation: &str) -> Option<&'static str> {
    let normalized = normalize_abbreviation(abbreviation);
    let name = BOOK_ALIASES.get(normalized.as_str()).copied();
    if name.is_none() {
        tracing::debug!("Unrecognized book abbreviation: {abbreviation:?}");
    }
    name
}
