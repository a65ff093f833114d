// 💳 Card Network - closed set of issuing networks

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// NETWORK CATEGORY
// ============================================================================

/// Issuing network inferred from the number format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    AmericanExpress,
    DinersClub,
    Discover,
    EnRoute,
    JCB,
    Voyage,
    HiperCard,
    Aura,
    /// No rule matched, or the input was not a digit string
    #[default]
    Unknown,
}

impl CardNetwork {
    /// Every recognizable network, in rule-table order (Unknown excluded)
    pub const RECOGNIZED: [CardNetwork; 10] = [
        CardNetwork::Visa,
        CardNetwork::Mastercard,
        CardNetwork::AmericanExpress,
        CardNetwork::DinersClub,
        CardNetwork::Discover,
        CardNetwork::EnRoute,
        CardNetwork::JCB,
        CardNetwork::Voyage,
        CardNetwork::HiperCard,
        CardNetwork::Aura,
    ];

    /// Human-readable name for display
    pub fn name(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::AmericanExpress => "American Express",
            CardNetwork::DinersClub => "Diners Club",
            CardNetwork::Discover => "Discover",
            CardNetwork::EnRoute => "enRoute",
            CardNetwork::JCB => "JCB",
            CardNetwork::Voyage => "Voyage",
            CardNetwork::HiperCard => "Hipercard",
            CardNetwork::Aura => "Aura",
            CardNetwork::Unknown => "Unknown",
        }
    }

    /// Short code for reports and URLs
    pub fn code(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "visa",
            CardNetwork::Mastercard => "mastercard",
            CardNetwork::AmericanExpress => "amex",
            CardNetwork::DinersClub => "diners",
            CardNetwork::Discover => "discover",
            CardNetwork::EnRoute => "enroute",
            CardNetwork::JCB => "jcb",
            CardNetwork::Voyage => "voyage",
            CardNetwork::HiperCard => "hipercard",
            CardNetwork::Aura => "aura",
            CardNetwork::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != CardNetwork::Unknown
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_network_names() {
        assert_eq!(CardNetwork::Visa.name(), "Visa");
        assert_eq!(CardNetwork::AmericanExpress.name(), "American Express");
        assert_eq!(CardNetwork::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_network_codes_are_unique() {
        let mut codes: HashSet<&str> = CardNetwork::RECOGNIZED.iter().map(|n| n.code()).collect();
        codes.insert(CardNetwork::Unknown.code());
        assert_eq!(codes.len(), 11);
    }

    #[test]
    fn test_recognized_excludes_unknown() {
        assert!(CardNetwork::RECOGNIZED.iter().all(|n| n.is_known()));
        assert!(!CardNetwork::Unknown.is_known());
        assert_eq!(CardNetwork::default(), CardNetwork::Unknown);
    }

    #[test]
    fn test_network_serializes_as_variant_name() {
        let json = serde_json::to_string(&CardNetwork::AmericanExpress).unwrap();
        assert_eq!(json, "\"AmericanExpress\"");

        let back: CardNetwork = serde_json::from_str("\"JCB\"").unwrap();
        assert_eq!(back, CardNetwork::JCB);
    }
}
