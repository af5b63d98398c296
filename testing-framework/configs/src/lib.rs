use std::{ops::Mul as _, sync::LazyLock, time::Duration};

use appliance_testing_env as tf_env;

pub mod constants;
pub mod expectations;
pub mod scenario;
pub mod symbols;
pub mod timeouts;

static IS_SLOW_TEST_ENV: LazyLock<bool> = LazyLock::new(tf_env::slow_test_env);

const SLOW_ENV_TIMEOUT_MULTIPLIER: u32 = 2;

/// In slow test environments like shared CI runners, use 2x timeout.
#[must_use]
pub fn adjust_timeout(d: Duration) -> Duration {
    if *IS_SLOW_TEST_ENV {
        d.mul(SLOW_ENV_TIMEOUT_MULTIPLIER)
    } else {
        d
    }
}
