use crate::constants::MGMT_INTERFACE;

/// Expected network object names for an appliance with a given number of
/// interfaces. One interface is management-only, so data-plane names run
/// `1.1` through `1.{count-1}`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpectedTopology {
    interface_count: usize,
    interfaces: Vec<String>,
    self_ips: Vec<String>,
    vlans: Vec<String>,
}

impl ExpectedTopology {
    #[must_use]
    pub fn for_interface_count(interface_count: usize) -> Self {
        let mut interfaces: Vec<String> =
            (1..interface_count).map(|n| format!("1.{n}")).collect();
        interfaces.push(MGMT_INTERFACE.to_owned());

        let self_ips = (1..interface_count)
            .map(|n| format!("selfip.network-1.{n}"))
            .collect();
        let vlans = (1..interface_count)
            .map(|n| format!("network-1.{n}"))
            .collect();

        Self {
            interface_count,
            interfaces,
            self_ips,
            vlans,
        }
    }

    #[must_use]
    pub const fn interface_count(&self) -> usize {
        self.interface_count
    }

    #[must_use]
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    #[must_use]
    pub fn self_ips(&self) -> &[String] {
        &self.self_ips
    }

    #[must_use]
    pub fn vlans(&self) -> &[String] {
        &self.vlans
    }
}
