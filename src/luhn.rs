// 🔢 Luhn mod-10 checksum

use crate::normalize::is_digit_string;

/// Luhn-weighted digit sum, kept reduced mod 10; `double_first` says whether
/// the rightmost digit of `digits` sits in a doubled position.
fn weighted_sum(digits: &str, double_first: bool) -> u32 {
    let mut sum = 0;
    let mut double = double_first;

    for b in digits.bytes().rev() {
        let mut digit = u32::from(b - b'0');
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum = (sum + digit) % 10;
        double = !double;
    }

    sum
}

/// Validate a normalized digit string with the Luhn algorithm.
///
/// Empty or non-numeric input is simply invalid.
pub fn luhn_valid(digits: &str) -> bool {
    if !is_digit_string(digits) {
        return false;
    }
    weighted_sum(digits, false) % 10 == 0
}

/// Check digit that makes `payload` followed by it Luhn-valid.
pub fn luhn_check_digit(payload: &str) -> Option<u8> {
    if !is_digit_string(payload) {
        return None;
    }
    // Once the check digit is appended, the payload's last digit is doubled
    let sum = weighted_sum(payload, true);
    Some(((10 - sum) % 10) as u8)
}

// ============================================================================
// TESTS
// ============================================================================
