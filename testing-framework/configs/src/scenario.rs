use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{constants::ImageRef, symbols::Symbols};

const DEFAULT_MGMT_NETWORK: &str = "mgmt_net";
const DEFAULT_EXTERNAL_NETWORK: &str = "external_network";
const DEFAULT_SSH_KEY_NAME: &str = "testlab";

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("standalone scenarios need at least 2 interfaces (got {count})")]
    InterfaceCount { count: usize },
    #[error("{count}-nic scenario needs {expected} data network name(s), got {got}")]
    DataNetworks {
        count: usize,
        expected: usize,
        got: usize,
    },
}

/// One deployable (image, interface count) combination together with its
/// orchestration parameters.
#[derive(Clone, Debug)]
pub struct DeploymentScenario {
    image: ImageRef,
    interface_count: usize,
    mgmt_network: String,
    external_network: String,
    data_networks: Vec<String>,
    flavor: Option<String>,
    ssh_key_name: String,
}

impl DeploymentScenario {
    /// Standalone scenario with default lab network names (`mgmt_net`,
    /// `external_network`, `data{n}_net`).
    pub fn standalone(image: ImageRef, interface_count: usize) -> Result<Self, ScenarioError> {
        if interface_count < 2 {
            return Err(ScenarioError::InterfaceCount {
                count: interface_count,
            });
        }

        Ok(Self {
            image,
            interface_count,
            mgmt_network: DEFAULT_MGMT_NETWORK.to_owned(),
            external_network: DEFAULT_EXTERNAL_NETWORK.to_owned(),
            data_networks: (1..interface_count).map(|n| format!("data{n}_net")).collect(),
            flavor: None,
            ssh_key_name: DEFAULT_SSH_KEY_NAME.to_owned(),
        })
    }

    #[must_use]
    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }

    #[must_use]
    pub fn with_ssh_key(mut self, key_name: impl Into<String>) -> Self {
        self.ssh_key_name = key_name.into();
        self
    }

    #[must_use]
    pub fn with_networks(
        mut self,
        mgmt_network: impl Into<String>,
        external_network: impl Into<String>,
    ) -> Self {
        self.mgmt_network = mgmt_network.into();
        self.external_network = external_network.into();
        self
    }

    /// Override the data network names; one per data-plane interface.
    pub fn with_data_networks(mut self, networks: Vec<String>) -> Result<Self, ScenarioError> {
        let expected = self.interface_count - 1;
        if networks.len() != expected {
            return Err(ScenarioError::DataNetworks {
                count: self.interface_count,
                expected,
                got: networks.len(),
            });
        }
        self.data_networks = networks;
        Ok(self)
    }

    #[must_use]
    pub const fn image(&self) -> ImageRef {
        self.image
    }

    #[must_use]
    pub const fn version(&self) -> &'static str {
        self.image.version
    }

    #[must_use]
    pub const fn interface_count(&self) -> usize {
        self.interface_count
    }

    /// Fixed stack name per scenario class; distinct names keep scenarios
    /// from treading on each other's stacks.
    #[must_use]
    pub fn stack_name(&self) -> String {
        format!("func_test_standalone_{}_nic", self.interface_count)
    }

    #[must_use]
    pub fn template_file(&self) -> String {
        format!("ve_standalone_{}_nic.yaml", self.interface_count)
    }

    #[must_use]
    pub fn template_path(&self, templates_root: &Path) -> PathBuf {
        templates_root.join("standalone").join(self.template_file())
    }

    /// Full parameter map submitted with the stack, secrets included.
    #[must_use]
    pub fn parameters(&self, symbols: &Symbols) -> BTreeMap<String, String> {
        let mut parameters = BTreeMap::new();
        parameters.insert("ve_image".to_owned(), self.image.image.to_owned());
        parameters.insert("mgmt_network".to_owned(), self.mgmt_network.clone());
        parameters.insert("external_network".to_owned(), self.external_network.clone());
        for (idx, network) in self.data_networks.iter().enumerate() {
            parameters.insert(format!("network_{}", idx + 1), network.clone());
        }
        if let Some(flavor) = &self.flavor {
            parameters.insert("ve_flavor".to_owned(), flavor.clone());
        }
        parameters.insert("ve_os_ssh_key".to_owned(), self.ssh_key_name.clone());
        parameters.insert("admin_password".to_owned(), symbols.admin_password.clone());
        parameters.insert("root_password".to_owned(), symbols.root_password.clone());
        parameters.insert("license".to_owned(), symbols.license.clone());
        parameters
    }
}
