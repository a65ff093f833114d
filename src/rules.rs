// 🏷️ Network Rules - Rules as Data
// Prefix + length patterns for every recognized card network

use crate::luhn::luhn_check_digit;
use crate::network::CardNetwork;
use serde::Serialize;

// ============================================================================
// PREFIX RANGE
// ============================================================================

/// Inclusive range of leading digits, e.g. `51`..=`55`.
///
/// Both bounds have the same width, so comparing the number's leading
/// slice as a string is the same as comparing it numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixRange {
    pub start: &'static str,
    pub end: &'static str,
}

impl PrefixRange {
    /// Range covering a single prefix
    pub const fn single(prefix: &'static str) -> Self {
        PrefixRange { start: prefix, end: prefix }
    }

    /// Range covering `start..=end`
    pub const fn span(start: &'static str, end: &'static str) -> Self {
        PrefixRange { start, end }
    }

    /// Number of leading digits this range inspects
    pub fn width(&self) -> usize {
        self.start.len()
    }

    /// Check whether the digit string starts inside this range
    pub fn matches(&self, digits: &str) -> bool {
        let width = self.width();
        match digits.get(..width) {
            Some(head) => head >= self.start && head <= self.end,
            None => false,
        }
    }
}

impl std::fmt::Display for PrefixRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NetworkRule {
    /// Rule ID for tracking in logs
    pub id: &'static str,

    /// Network assigned when the rule matches
    pub network: CardNetwork,

    /// Accepted leading digits (any one must match)
    pub prefixes: &'static [PrefixRange],

    /// Accepted total lengths, after normalization
    pub lengths: &'static [usize],
}

impl NetworkRule {
    /// Check if a normalized digit string satisfies both prefix and length
    pub fn matches(&self, digits: &str) -> bool {
        self.lengths.contains(&digits.len()) && self.prefixes.iter().any(|p| p.matches(digits))
    }

    /// One-line description, e.g. "prefixes 34, 37; lengths 15"
    pub fn describe(&self) -> String {
        let prefixes: Vec<String> = self.prefixes.iter().map(|p| p.to_string()).collect();
        let lengths: Vec<String> = self.lengths.iter().map(|l| l.to_string()).collect();
        format!("prefixes {}; lengths {}", prefixes.join(", "), lengths.join(", "))
    }

    /// Luhn-valid example: first prefix, zero padding to the first length,
    /// then the check digit
    pub fn sample(&self) -> String {
        let length = self.lengths.first().copied().unwrap_or(0);
        let mut payload = self.prefixes.first().map(|p| p.start).unwrap_or("").to_string();
        while payload.len() + 1 < length {
            payload.push('0');
        }
        let check = luhn_check_digit(&payload).unwrap_or(0);
        format!("{}{}", payload, check)
    }
}

// ============================================================================
// RULE TABLE
// ============================================================================

/// Every rule, in matching order. First match wins.
pub static NETWORK_RULES: &[NetworkRule] = &[
    NetworkRule {
        id: "visa",
        network: CardNetwork::Visa,
        prefixes: &[PrefixRange::single("4")],
        lengths: &[13, 16, 19],
    },
    NetworkRule {
        id: "mastercard",
        network: CardNetwork::Mastercard,
        prefixes: &[PrefixRange::span("51", "55"), PrefixRange::span("22", "27")],
        lengths: &[16],
    },
    NetworkRule {
        id: "amex",
        network: CardNetwork::AmericanExpress,
        prefixes: &[PrefixRange::single("34"), PrefixRange::single("37")],
        lengths: &[15],
    },
    NetworkRule {
        id: "diners",
        network: CardNetwork::DinersClub,
        prefixes: &[
            PrefixRange::span("300", "305"),
            PrefixRange::single("36"),
            PrefixRange::single("38"),
        ],
        lengths: &[14],
    },
    NetworkRule {
        id: "discover",
        network: CardNetwork::Discover,
        prefixes: &[PrefixRange::single("6011")],
        lengths: &[16],
    },
    NetworkRule {
        id: "enroute",
        network: CardNetwork::EnRoute,
        prefixes: &[PrefixRange::single("2014"), PrefixRange::single("2149")],
        lengths: &[15],
    },
    NetworkRule {
        id: "jcb",
        network: CardNetwork::JCB,
        prefixes: &[PrefixRange::single("35")],
        lengths: &[16],
    },
    NetworkRule {
        id: "voyage",
        network: CardNetwork::Voyage,
        prefixes: &[PrefixRange::single("8699")],
        lengths: &[15],
    },
    NetworkRule {
        id: "hipercard",
        network: CardNetwork::HiperCard,
        prefixes: &[PrefixRange::single("6062")],
        lengths: &[16],
    },
    NetworkRule {
        id: "aura",
        network: CardNetwork::Aura,
        prefixes: &[PrefixRange::single("50")],
        lengths: &[16],
    },
];

/// The ordered rule table
pub fn network_rules() -> &'static [NetworkRule] {
    NETWORK_RULES
}

/// Find the first rule matching an already-normalized digit string
pub fn first_match(digits: &str) -> Option<&'static NetworkRule> {
    NETWORK_RULES.iter().find(|rule| rule.matches(digits))
}

/// Rule for a given network, if it has one
pub fn rule_for(network: CardNetwork) -> Option<&'static NetworkRule> {
    NETWORK_RULES.iter().find(|rule| rule.network == network)
}

// ============================================================================
// TESTS
// ============================================================================
