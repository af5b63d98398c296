use serde::Deserialize;

/// Licensing registration record reported by the appliance.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRegistration {
    pub licensed_version: String,
    #[serde(default)]
    pub registration_key: Option<String>,
}

/// Named object in an appliance collection.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct NamedObject {
    pub name: String,
    #[serde(default, rename = "fullPath")]
    pub full_path: Option<String>,
}

/// Collection envelope; `items` is absent when the collection is empty.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Collection {
    #[serde(default)]
    pub(crate) items: Vec<NamedObject>,
}

/// Live interface/self-IP/VLAN collections fetched in one pass.
#[derive(Clone, Debug)]
pub struct NetworkTopology {
    pub interfaces: Vec<NamedObject>,
    pub self_ips: Vec<NamedObject>,
    pub vlans: Vec<NamedObject>,
}

impl NetworkTopology {
    #[must_use]
    pub fn interface_names(&self) -> Vec<String> {
        names(&self.interfaces)
    }

    #[must_use]
    pub fn self_ip_names(&self) -> Vec<String> {
        names(&self.self_ips)
    }

    #[must_use]
    pub fn vlan_names(&self) -> Vec<String> {
        names(&self.vlans)
    }
}

fn names(objects: &[NamedObject]) -> Vec<String> {
    objects.iter().map(|object| object.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn license_registration_uses_camel_case() {
        let registration: LicenseRegistration = serde_json::from_value(json!({
            "licensedVersion": "11.6.0",
            "registrationKey": "XXXXX-XXXXX",
        }))
        .unwrap();

        assert_eq!(registration.licensed_version, "11.6.0");
        assert_eq!(registration.registration_key.as_deref(), Some("XXXXX-XXXXX"));
    }

    #[test]
    fn collection_items_default_to_empty() {
        let collection: Collection = serde_json::from_value(json!({
            "kind": "tm:net:vlan:vlancollectionstate",
        }))
        .unwrap();

        assert!(collection.items.is_empty());
    }

    #[test]
    fn collection_items_carry_names() {
        let collection: Collection = serde_json::from_value(json!({
            "items": [
                { "name": "network-1.1", "fullPath": "/Common/network-1.1" },
                { "name": "network-1.2" },
            ],
        }))
        .unwrap();

        let names: Vec<_> = collection.items.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["network-1.1", "network-1.2"]);
    }
}
