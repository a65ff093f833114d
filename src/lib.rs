// Card Validator - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod normalize;
pub mod network;
pub mod rules;
pub mod classifier;
pub mod luhn;
pub mod validator;
pub mod config;
pub mod shell;
pub mod batch;

// Re-export commonly used types
pub use normalize::{normalize, is_digit_string, mask_number};
pub use network::CardNetwork;
pub use rules::{NetworkRule, PrefixRange, NETWORK_RULES, network_rules, first_match, rule_for};
pub use classifier::{classify_card, classify_normalized};
pub use luhn::{luhn_valid, luhn_check_digit};
pub use validator::{ValidationResult, Outcome, validate_card, validate_card_with};
pub use config::{AppConfig, ShellConfig, ServerConfig, LoggingConfig, ConfigError};
pub use batch::{BatchReport, BatchRecord, BatchSummary, ReportFormat, validate_file, validate_reader};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Logs go to stderr so they never mix
/// with results printed on stdout.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests, embedding apps)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
