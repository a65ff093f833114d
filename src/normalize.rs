// 🧹 Normalization - shared by classifier, checksum, and shells
// Strips separators so every component sees the same digit string

/// Characters accepted as visual separators inside a card number.
pub const SEPARATORS: [char; 2] = [' ', '-'];

/// Remove space and hyphen separators.
///
/// Nothing else is touched: letters or other punctuation survive so that
/// callers can reject them with [`is_digit_string`].
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// True when `s` is non-empty and made only of ASCII decimal digits.
pub fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Mask a number for logs and reports: only the last four digits stay visible.
///
/// Works on the normalized form; short inputs are fully masked.
pub fn mask_number(raw: &str) -> String {
    let digits = normalize(raw);
    let len = digits.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }

    let visible: String = digits.chars().skip(len - 4).collect();
    format!("{}{}", "*".repeat(len - 4), visible)
}

// ============================================================================
// TESTS
// ============================================================================
