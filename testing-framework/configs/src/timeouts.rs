use std::{env, time::Duration};

/// Warm-up before the first readiness attempt; appliance networking takes
/// at least a minute to come up after stack creation.
pub const WARMUP_SECS: u64 = 60;
pub const POLL_INTERVAL_SECS: u64 = 10;
pub const MAX_ATTEMPTS: u32 = 50;
pub const STACK_CREATE_TIMEOUT_SECS: u64 = 900;
pub const STACK_POLL_INTERVAL_SECS: u64 = 10;

fn env_duration(key: &str, default: u64) -> Duration {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

pub fn warmup() -> Duration {
    env_duration("VE_TESTS_WARMUP_SECS", WARMUP_SECS)
}

pub fn poll_interval() -> Duration {
    env_duration("VE_TESTS_POLL_INTERVAL_SECS", POLL_INTERVAL_SECS)
}

pub fn max_attempts() -> u32 {
    env_u32("VE_TESTS_MAX_ATTEMPTS", MAX_ATTEMPTS)
}

pub fn stack_create_timeout() -> Duration {
    env_duration("VE_TESTS_STACK_CREATE_TIMEOUT_SECS", STACK_CREATE_TIMEOUT_SECS)
}

pub fn stack_poll_interval() -> Duration {
    env_duration("VE_TESTS_STACK_POLL_INTERVAL_SECS", STACK_POLL_INTERVAL_SECS)
}
