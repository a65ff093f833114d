// ✅ Card Validator - classify, then checksum
// Composes the network classifier with the Luhn check

use crate::classifier::classify_normalized;
use crate::luhn::luhn_valid;
use crate::network::CardNetwork;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub network: CardNetwork,
}

/// Why a number passed or failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Recognized network, checksum passed
    Valid,
    /// Recognized network, checksum failed
    BadChecksum,
    /// No network rule matched (checksum never evaluated)
    UnknownNetwork,
}

impl ValidationResult {
    pub fn unknown() -> Self {
        ValidationResult {
            valid: false,
            network: CardNetwork::Unknown,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.network.is_known()
    }

    pub fn outcome(&self) -> Outcome {
        match (self.network.is_known(), self.valid) {
            (false, _) => Outcome::UnknownNetwork,
            (true, true) => Outcome::Valid,
            (true, false) => Outcome::BadChecksum,
        }
    }

    /// Line shown to a person at the console
    pub fn message(&self) -> String {
        if self.valid {
            format!("Card valid. Network: {}", self.network)
        } else {
            format!("Card invalid or unknown network: {}", self.network)
        }
    }
}

impl From<ValidationResult> for (bool, CardNetwork) {
    fn from(result: ValidationResult) -> Self {
        (result.valid, result.network)
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate a raw card number: network first, then Luhn.
pub fn validate_card(raw: &str) -> ValidationResult {
    validate_card_with(raw, luhn_valid)
}

/// Same as [`validate_card`] with the checksum supplied by the caller.
///
/// `checksum` receives the normalized digits and is only called when the
/// number belongs to a recognized network.
pub fn validate_card_with<F>(raw: &str, checksum: F) -> ValidationResult
where
    F: FnOnce(&str) -> bool,
{
    let digits = normalize(raw);

    let network = classify_normalized(&digits);
    if network == CardNetwork::Unknown {
        tracing::debug!("unknown network, skipping checksum");
        return ValidationResult::unknown();
    }

    let valid = checksum(&digits);
    tracing::debug!(network = network.code(), valid, "card validated");

    ValidationResult { valid, network }
}

// ============================================================================
// TESTS
// ============================================================================
