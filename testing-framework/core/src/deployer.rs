use std::path::PathBuf;

use appliance_testing_config::{
    adjust_timeout,
    constants::{self, ADMIN_USERNAME},
    expectations::ExpectedTopology,
    scenario::DeploymentScenario,
    symbols::Symbols,
    timeouts,
};
use appliance_testing_env as tf_env;
use thiserror::Error;
use tracing::info;

use crate::{
    appliance::{ApplianceClient, Credentials},
    orchestration::{Stack, StackClient, StackClientError, TemplateError, TemplateSource},
    readiness::{ApplianceReadiness, ReadinessError, ReadinessProbe as _, RetryBudget},
    verify::{TopologyError, verify_net_components},
};

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Stack(#[from] StackClientError),
    #[error("stack {stack} exposes no floating_ip output")]
    MissingFloatingIp { stack: String },
    #[error(transparent)]
    Readiness(#[from] ReadinessError),
}

/// Deploys standalone appliance scenarios through the stack API and
/// waits for the appliance behind each one to become ready.
pub struct StackDeployer {
    stacks: StackClient,
    symbols: Symbols,
    templates_root: PathBuf,
}

impl StackDeployer {
    #[must_use]
    pub fn new(stacks: StackClient, symbols: Symbols) -> Self {
        Self {
            stacks,
            symbols,
            templates_root: constants::templates_dir(),
        }
    }

    #[must_use]
    pub fn with_templates_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.templates_root = root.into();
        self
    }

    /// Provision one scenario: create the stack, wait for it to complete,
    /// extract the floating IP, then wait for the appliance to report a
    /// licensed, fully networked state.
    pub async fn deploy(
        &self,
        scenario: &DeploymentScenario,
    ) -> Result<DeployedAppliance, DeployError> {
        let template = TemplateSource::from_file(scenario.template_path(&self.templates_root))?;
        let parameters = scenario.parameters(&self.symbols);
        let name = scenario.stack_name();

        let created = self.stacks.create_stack(&name, &template, &parameters).await?;
        let stack = self
            .stacks
            .wait_for_create_complete(
                &created.id,
                adjust_timeout(timeouts::stack_create_timeout()),
                timeouts::stack_poll_interval(),
            )
            .await?;

        let floating_ip = stack
            .floating_ip()
            .ok_or_else(|| DeployError::MissingFloatingIp {
                stack: name.clone(),
            })?;
        info!(stack = %name, floating_ip = %floating_ip, "stack created, waiting for appliance");

        let expected = ExpectedTopology::for_interface_count(scenario.interface_count());
        let probe = ApplianceReadiness::new(
            floating_ip.clone(),
            Credentials::new(ADMIN_USERNAME, self.symbols.admin_password.clone()),
            scenario.version(),
            expected.clone(),
        );
        let appliance = probe.wait(RetryBudget::standard()).await?;

        Ok(DeployedAppliance {
            stack,
            floating_ip,
            appliance,
            expected,
        })
    }

    /// Delete a deployed stack, unless stacks are kept for inspection.
    pub async fn cleanup(&self, deployed: &DeployedAppliance) -> Result<(), StackClientError> {
        if tf_env::keep_stacks() {
            info!(stack = %deployed.stack.stack_name, "keeping stack for inspection");
            return Ok(());
        }
        self.stacks.delete_stack(&deployed.stack.id).await
    }
}

/// A provisioned, licensed, reachable appliance.
pub struct DeployedAppliance {
    stack: Stack,
    floating_ip: String,
    appliance: ApplianceClient,
    expected: ExpectedTopology,
}

impl DeployedAppliance {
    #[must_use]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    #[must_use]
    pub fn floating_ip(&self) -> &str {
        &self.floating_ip
    }

    #[must_use]
    pub fn appliance(&self) -> &ApplianceClient {
        &self.appliance
    }

    /// Assert the live interface/self-IP/VLAN names match the scenario.
    pub async fn verify_topology(&self) -> Result<(), TopologyError> {
        verify_net_components(&self.appliance, &self.expected).await
    }
}
