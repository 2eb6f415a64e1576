//! Shared constants for the Packer calculator.

/// Multiplier over the summed pack sizes above which a target quantity is
/// pre-clamped with whole packs of the largest size.
pub const DEFAULT_HEADROOM_MULTIPLIER: i64 = 50;

/// Default tracing filter when neither `PACKER_LOG` nor config sets one.
pub const DEFAULT_LOG_FILTER: &str = "packer=info";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "PACKER_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "packer.toml";

/// Default catalog seeds: (id, quantity).
pub const DEFAULT_PACKAGES: [(&str, u32); 5] = [
    ("P_1", 250),
    ("P_2", 500),
    ("P_3", 1000),
    ("P_4", 2000),
    ("P_5", 5000),
];
