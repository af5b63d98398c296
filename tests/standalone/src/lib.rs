//! Shared harness for the standalone functional drivers.

use anyhow::Context as _;
use appliance_testing_config::symbols::Symbols;
use appliance_testing_core::{deployer::StackDeployer, orchestration::StackClient};
use appliance_testing_env as tf_env;

pub struct Harness {
    pub deployer: StackDeployer,
}

impl Harness {
    /// Build from the environment. `None` when no orchestration endpoint
    /// is configured; the driver should skip in that case.
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let Some(endpoint) = tf_env::orchestration_endpoint() else {
            return Ok(None);
        };
        let symbols =
            Symbols::from_env().context("functional drivers need appliance credentials")?;
        let mut stacks = StackClient::from_endpoint(&endpoint)?;
        if let Some(token) = tf_env::orchestration_token() {
            stacks = stacks.with_token(token);
        }
        Ok(Some(Self {
            deployer: StackDeployer::new(stacks, symbols),
        }))
    }
}
