//! REST paths on the appliance management API.

pub const SYS_VERSION: &str = "/mgmt/tm/sys/version";
pub const LICENSING_REGISTRATION: &str = "/mgmt/shared/licensing/registration";
pub const NET_INTERFACES: &str = "/mgmt/tm/net/interface";
pub const NET_SELF_IPS: &str = "/mgmt/tm/net/self";
pub const NET_VLANS: &str = "/mgmt/tm/net/vlan";
