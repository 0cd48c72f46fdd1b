// ==========================================
// Cell-text classification helpers
// ==========================================
// Shared by header detection and content-based column scoring.
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

static ARABIC_OR_LATIN_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{0600}-\u{06FF}a-zA-Z]").unwrap());

/// Removes the formatting separators tolerated inside numeric cells.
pub fn strip_separators(text: &str) -> String {
    text.replace(' ', "").replace('-', "")
}

/// True when the text consists solely of digits once spaces and dashes
/// are removed. Blank text is not numeric.
pub fn is_numeric_only(text: &str) -> bool {
    NUMERIC_ONLY.is_match(&strip_separators(text))
}

/// True when the text contains at least one Arabic or Latin letter.
pub fn has_arabic_or_latin_letter(text: &str) -> bool {
    ARABIC_OR_LATIN_LETTER.is_match(text)
}
