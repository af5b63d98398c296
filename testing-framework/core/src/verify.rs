use std::fmt;

use appliance_testing_config::expectations::ExpectedTopology;
use thiserror::Error;
use tracing::info;

use crate::appliance::{ApplianceClient, ApplianceError, NetworkTopology};

/// One collection whose live names differ from the expected set. Both
/// sides are sorted before comparison; retrieval order is not guaranteed.
#[derive(Debug)]
pub struct ComponentMismatch {
    pub component: &'static str,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl fmt::Display for ComponentMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {:?}, got {:?}",
            self.component, self.expected, self.actual
        )
    }
}

#[derive(Debug, Error)]
#[error("network topology mismatch: {summary}")]
pub struct TopologyMismatch {
    summary: String,
    mismatches: Vec<ComponentMismatch>,
}

impl TopologyMismatch {
    fn new(mismatches: Vec<ComponentMismatch>) -> Self {
        let summary = mismatches
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            summary,
            mismatches,
        }
    }

    #[must_use]
    pub fn mismatches(&self) -> &[ComponentMismatch] {
        &self.mismatches
    }
}

#[derive(Debug, Error)]
pub enum TopologyError {
    #[error(transparent)]
    Fetch(#[from] ApplianceError),
    #[error(transparent)]
    Mismatch(#[from] TopologyMismatch),
}

/// Compare live collections against the expected name sets. All
/// mismatching components are reported in one error.
pub fn verify_topology(
    topology: &NetworkTopology,
    expected: &ExpectedTopology,
) -> Result<(), TopologyMismatch> {
    let mut mismatches = Vec::new();
    compare(
        "interfaces",
        expected.interfaces(),
        topology.interface_names(),
        &mut mismatches,
    );
    compare(
        "self-IPs",
        expected.self_ips(),
        topology.self_ip_names(),
        &mut mismatches,
    );
    compare("vlans", expected.vlans(), topology.vlan_names(), &mut mismatches);

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(TopologyMismatch::new(mismatches))
    }
}

/// Fetch the live collections and assert they match the expected set.
pub async fn verify_net_components(
    client: &ApplianceClient,
    expected: &ExpectedTopology,
) -> Result<(), TopologyError> {
    let topology = client.network_topology().await?;
    verify_topology(&topology, expected)?;
    info!(
        interfaces = expected.interfaces().len(),
        self_ips = expected.self_ips().len(),
        vlans = expected.vlans().len(),
        "network topology verified"
    );
    Ok(())
}

fn compare(
    component: &'static str,
    expected: &[String],
    actual: Vec<String>,
    out: &mut Vec<ComponentMismatch>,
) {
    let mut expected = expected.to_vec();
    expected.sort();
    let mut actual = actual;
    actual.sort();
    if expected != actual {
        out.push(ComponentMismatch {
            component,
            expected,
            actual,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appliance::NamedObject;

    fn named(names: &[&str]) -> Vec<NamedObject> {
        names
            .iter()
            .map(|name| NamedObject {
                name: (*name).to_owned(),
                full_path: None,
            })
            .collect()
    }

    #[test]
    fn accepts_matching_topology_in_any_order() {
        let expected = ExpectedTopology::for_interface_count(3);
        let topology = NetworkTopology {
            interfaces: named(&["mgmt", "1.2", "1.1"]),
            self_ips: named(&["selfip.network-1.2", "selfip.network-1.1"]),
            vlans: named(&["network-1.1", "network-1.2"]),
        };

        verify_topology(&topology, &expected).unwrap();
    }

    #[test]
    fn reports_every_mismatching_component() {
        let expected = ExpectedTopology::for_interface_count(2);
        let topology = NetworkTopology {
            interfaces: named(&["1.1", "mgmt"]),
            self_ips: named(&[]),
            vlans: named(&["network-9.9"]),
        };

        let err = verify_topology(&topology, &expected).unwrap_err();
        let components: Vec<_> = err
            .mismatches()
            .iter()
            .map(|mismatch| mismatch.component)
            .collect();
        assert_eq!(components, ["self-IPs", "vlans"]);
    }

    #[test]
    fn rejects_extra_objects_with_matching_counts() {
        let expected = ExpectedTopology::for_interface_count(2);
        let topology = NetworkTopology {
            interfaces: named(&["1.1", "mgmt"]),
            self_ips: named(&["selfip.network-2.1"]),
            vlans: named(&["network-1.1"]),
        };

        let err = verify_topology(&topology, &expected).unwrap_err();
        assert_eq!(err.mismatches().len(), 1);
        assert_eq!(err.mismatches()[0].component, "self-IPs");
        assert_eq!(err.mismatches()[0].actual, ["selfip.network-2.1"]);
    }
}
