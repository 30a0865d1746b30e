use std::sync::OnceLock;

use crate::models::ECLevel;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Score the eight mask candidates on the rayon pool.
pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static PARALLEL_MIN_VERSION: OnceLock<u8> = OnceLock::new();

/// Smallest version whose mask scoring is worth fanning out.
pub(crate) fn parallel_min_version() -> u8 {
    *PARALLEL_MIN_VERSION
        .get_or_init(|| parse_env_usize("QR_PARALLEL_MIN_VERSION", 7).clamp(1, 40) as u8)
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// Level used when the caller does not pick one.
pub fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| {
        std::env::var("QR_DEFAULT_ECC")
            .ok()
            .and_then(|v| v.parse::<ECLevel>().ok())
            .unwrap_or(ECLevel::H)
    })
}
