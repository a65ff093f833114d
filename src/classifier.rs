// 🔎 Network Classifier
// Maps a card number to its issuing network using the static rule table

use crate::network::CardNetwork;
use crate::normalize::{is_digit_string, mask_number, normalize};
use crate::rules::first_match;

/// Classify a raw card number (separators allowed).
///
/// Empty or non-numeric input is Unknown, never an error.
pub fn classify_card(raw: &str) -> CardNetwork {
    classify_normalized(&normalize(raw))
}

/// Classify a number that has already been through [`normalize`].
pub fn classify_normalized(digits: &str) -> CardNetwork {
    if !is_digit_string(digits) {
        tracing::trace!("rejecting non-numeric input of length {}", digits.len());
        return CardNetwork::Unknown;
    }

    match first_match(digits) {
        Some(rule) => {
            tracing::debug!(rule = rule.id, number = %mask_number(digits), "network rule matched");
            rule.network
        }
        None => {
            tracing::debug!(number = %mask_number(digits), "no network rule matched");
            CardNetwork::Unknown
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::network_rules;
    use proptest::prelude::*;

    #[test]
    fn test_classify_visa_lengths() {
        assert_eq!(classify_card("4222222222222"), CardNetwork::Visa);
        assert_eq!(classify_card("4111111111111111"), CardNetwork::Visa);
        assert_eq!(classify_card("4111111111111111003"), CardNetwork::Visa);
        // 14 and 15 digits are not Visa lengths
        assert_eq!(classify_card("41111111111111"), CardNetwork::Unknown);
        assert_eq!(classify_card("411111111111111"), CardNetwork::Unknown);
    }

    #[test]
    fn test_classify_mastercard_ranges() {
        assert_eq!(classify_card("5100000000000000"), CardNetwork::Mastercard);
        assert_eq!(classify_card("5500000000000004"), CardNetwork::Mastercard);
        assert_eq!(classify_card("2221000000000009"), CardNetwork::Mastercard);
        assert_eq!(classify_card("2720990000000000"), CardNetwork::Mastercard);
        assert_eq!(classify_card("5600000000000000"), CardNetwork::Unknown);
        assert_eq!(classify_card("2800000000000000"), CardNetwork::Unknown);
    }

    #[test]
    fn test_classify_every_network() {
        let cases = [
            ("378282246310005", CardNetwork::AmericanExpress),
            ("340000000000009", CardNetwork::AmericanExpress),
            ("30569309025904", CardNetwork::DinersClub),
            ("36000000000008", CardNetwork::DinersClub),
            ("38000000000006", CardNetwork::DinersClub),
            ("6011000990139424", CardNetwork::Discover),
            ("201400000000009", CardNetwork::EnRoute),
            ("214900000000000", CardNetwork::EnRoute),
            ("3530111333300000", CardNetwork::JCB),
            ("869900000000000", CardNetwork::Voyage),
            ("6062825624254001", CardNetwork::HiperCard),
            ("5078601870000127", CardNetwork::Aura),
        ];

        for (number, expected) in cases {
            assert_eq!(classify_card(number), expected, "number {}", number);
        }
    }

    #[test]
    fn test_classify_with_separators() {
        assert_eq!(classify_card("6011 0009 9013 9424"), CardNetwork::Discover);
        assert_eq!(classify_card("3782-822463-10005"), CardNetwork::AmericanExpress);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify_card("1234567890123456"), CardNetwork::Unknown);
        assert_eq!(classify_card(""), CardNetwork::Unknown);
        assert_eq!(classify_card("   "), CardNetwork::Unknown);
        assert_eq!(classify_card("abcd"), CardNetwork::Unknown);
        assert_eq!(classify_card("4111x11111111111"), CardNetwork::Unknown);
    }

    #[test]
    fn test_classify_normalized_rejects_separators() {
        assert_eq!(classify_normalized("6011 0009 9013 9424"), CardNetwork::Unknown);
        assert_eq!(classify_normalized("6011000990139424"), CardNetwork::Discover);
    }

    #[test]
    fn test_classification_ignores_checksum() {
        // Bad Luhn digit still classifies
        assert_eq!(classify_card("4111111111111112"), CardNetwork::Visa);
    }

    /// Builds a number for `rule` from its first prefix and first length
    fn sample_for(rule: &crate::rules::NetworkRule, fill: char) -> String {
        let prefix = rule.prefixes[0].start;
        let len = rule.lengths[0];
        let mut number = prefix.to_string();
        while number.len() < len {
            number.push(fill);
        }
        number
    }

    #[test]
    fn test_each_rule_samples_classify_to_their_network() {
        for rule in network_rules() {
            for fill in ['0', '7', '9'] {
                assert_eq!(classify_card(&sample_for(rule, fill)), rule.network, "rule {}", rule.id);
            }
        }
    }

    proptest! {
        #[test]
        fn test_mastercard_range_property(
            head in prop_oneof![51u32..=55, 22u32..=27],
            tail in "[0-9]{14}",
        ) {
            let number = format!("{}{}", head, tail);
            prop_assert_eq!(classify_card(&number), CardNetwork::Mastercard);
        }

        #[test]
        fn test_leading_one_is_never_recognized(tail in "[0-9]{0,20}") {
            let number = format!("1{}", tail);
            prop_assert_eq!(classify_card(&number), CardNetwork::Unknown);
        }

        #[test]
        fn test_classify_is_separator_insensitive(digits in "[0-9]{12,19}") {
            let spaced: String = digits
                .chars()
                .enumerate()
                .flat_map(|(i, c)| if i > 0 && i % 4 == 0 { vec![' ', c] } else { vec![c] })
                .collect();
            prop_assert_eq!(classify_card(&spaced), classify_card(&digits));
        }
    }
}
