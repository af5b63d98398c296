use std::time::Duration;

use appliance_testing_config::{adjust_timeout, expectations::ExpectedTopology, timeouts};
use async_trait::async_trait;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::{
    DynError,
    appliance::{ApplianceClient, Credentials, NetworkTopology},
};

#[derive(Debug, Error)]
pub enum ReadinessError {
    #[error("too many attempts ({attempts}) made to contact {probe}; giving up")]
    AttemptsExhausted { attempts: u32, probe: String },
}

/// Polling budget for a readiness wait. Passed explicitly so callers can
/// shrink it in tests and stretch it in slow labs.
#[derive(Clone, Copy, Debug)]
pub struct RetryBudget {
    pub warmup: Duration,
    pub interval: Duration,
    pub max_attempts: u32,
}

impl RetryBudget {
    /// Process-wide defaults, scaled for slow environments.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            warmup: adjust_timeout(timeouts::warmup()),
            interval: adjust_timeout(timeouts::poll_interval()),
            max_attempts: timeouts::max_attempts(),
        }
    }
}

#[async_trait]
pub trait ReadinessProbe: Sync {
    type Ready: Send;

    /// One all-or-nothing attempt. Any error is treated as transient.
    async fn attempt(&self) -> Result<Self::Ready, DynError>;

    /// Label used in log lines and exhaustion messages.
    fn describe(&self) -> String;

    /// Block until an attempt fully succeeds or the budget runs out.
    async fn wait(&self, budget: RetryBudget) -> Result<Self::Ready, ReadinessError> {
        info!(
            probe = %self.describe(),
            warmup_secs = budget.warmup.as_secs(),
            interval_secs = budget.interval.as_secs(),
            max_attempts = budget.max_attempts,
            "waiting for readiness"
        );
        sleep(budget.warmup).await;

        for attempt in 1..=budget.max_attempts {
            sleep(budget.interval).await;
            match self.attempt().await {
                Ok(ready) => {
                    info!(probe = %self.describe(), attempt, "readiness reached");
                    return Ok(ready);
                }
                // Anything can go wrong while the appliance boots; the
                // attempt budget is the sole termination bound.
                Err(error) => {
                    debug!(probe = %self.describe(), attempt, %error, "attempt failed");
                }
            }
        }

        Err(ReadinessError::AttemptsExhausted {
            attempts: budget.max_attempts,
            probe: self.describe(),
        })
    }
}

/// Probe that requires a licensed appliance reporting the expected
/// interface/self-IP/VLAN counts, all within a single attempt.
pub struct ApplianceReadiness {
    address: String,
    credentials: Credentials,
    expected_version: String,
    expected: ExpectedTopology,
}

#[derive(Debug, Error)]
enum ProbeIssue {
    #[error("licensed version {actual} != expected {expected}")]
    Version { expected: String, actual: String },
    #[error("{component} count {actual} != expected {expected}")]
    Count {
        component: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl ApplianceReadiness {
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        credentials: Credentials,
        expected_version: impl Into<String>,
        expected: ExpectedTopology,
    ) -> Self {
        Self {
            address: address.into(),
            credentials,
            expected_version: expected_version.into(),
            expected,
        }
    }

    fn check_counts(&self, topology: &NetworkTopology) -> Result<(), ProbeIssue> {
        check_count("interface", self.expected.interfaces().len(), topology.interfaces.len())?;
        check_count("self-IP", self.expected.self_ips().len(), topology.self_ips.len())?;
        check_count("vlan", self.expected.vlans().len(), topology.vlans.len())?;
        Ok(())
    }
}

fn check_count(component: &'static str, expected: usize, actual: usize) -> Result<(), ProbeIssue> {
    if actual == expected {
        Ok(())
    } else {
        Err(ProbeIssue::Count {
            component,
            expected,
            actual,
        })
    }
}

#[async_trait]
impl ReadinessProbe for ApplianceReadiness {
    type Ready = ApplianceClient;

    async fn attempt(&self) -> Result<ApplianceClient, DynError> {
        let client = ApplianceClient::open(&self.address, self.credentials.clone()).await?;
        let registration = client.license_registration().await?;
        if registration.licensed_version != self.expected_version {
            return Err(Box::new(ProbeIssue::Version {
                expected: self.expected_version.clone(),
                actual: registration.licensed_version,
            }));
        }
        let topology = client.network_topology().await?;
        self.check_counts(&topology)?;
        Ok(client)
    }

    fn describe(&self) -> String {
        format!("appliance at {}", self.address)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    struct FlakyProbe {
        failures_before_success: u32,
        calls: AtomicU32,
    }

    impl FlakyProbe {
        fn new(failures_before_success: u32) -> Self {
            Self {
                failures_before_success,
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReadinessProbe for FlakyProbe {
        type Ready = u32;

        async fn attempt(&self) -> Result<u32, DynError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if call > self.failures_before_success {
                Ok(call)
            } else {
                Err(format!("boom #{call}").into())
            }
        }

        fn describe(&self) -> String {
            "flaky probe".to_owned()
        }
    }

    fn tight_budget(max_attempts: u32) -> RetryBudget {
        RetryBudget {
            warmup: Duration::ZERO,
            interval: Duration::from_millis(1),
            max_attempts,
        }
    }

    #[tokio::test]
    async fn returns_on_first_successful_attempt() {
        let probe = FlakyProbe::new(0);
        let ready = probe.wait(tight_budget(5)).await.unwrap();
        assert_eq!(ready, 1);
        assert_eq!(probe.calls(), 1);
    }

    #[tokio::test]
    async fn absorbs_transient_failures_until_success() {
        let probe = FlakyProbe::new(3);
        let ready = probe.wait(tight_budget(10)).await.unwrap();
        assert_eq!(ready, 4);
        assert_eq!(probe.calls(), 4);
    }

    #[tokio::test]
    async fn exhausts_after_exactly_max_attempts() {
        let probe = FlakyProbe::new(u32::MAX);
        let err = probe.wait(tight_budget(5)).await.unwrap_err();
        assert!(matches!(
            err,
            ReadinessError::AttemptsExhausted { attempts: 5, .. }
        ));
        assert_eq!(probe.calls(), 5);
    }
}
