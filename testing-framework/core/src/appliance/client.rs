use futures::try_join;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::{
    model::{Collection, LicenseRegistration, NamedObject, NetworkTopology},
    paths,
};

#[derive(Debug, Error)]
pub enum ApplianceError {
    #[error("invalid management address {address}: {message}")]
    Address { address: String, message: String },
    #[error("failed to join url {base} with path {path}: {message}")]
    JoinUrl {
        base: Url,
        path: &'static str,
        message: String,
    },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Credentials for the appliance management API.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Authenticated session against one appliance's management REST API.
#[derive(Clone)]
pub struct ApplianceClient {
    base_url: Url,
    credentials: Credentials,
    client: Client,
}

impl ApplianceClient {
    /// Open a session and validate it with a probe request. Unreachable or
    /// unauthorized appliances are errors; during boot both are expected
    /// and absorbed by the readiness waiter.
    pub async fn open(address: &str, credentials: Credentials) -> Result<Self, ApplianceError> {
        let base_url =
            Url::parse(&format!("https://{address}")).map_err(|source| ApplianceError::Address {
                address: address.to_owned(),
                message: source.to_string(),
            })?;
        // Lab appliances serve the management API with self-signed certs.
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;

        let session = Self {
            base_url,
            credentials,
            client,
        };
        session.get_json::<Value>(paths::SYS_VERSION).await?;
        debug!(address, "management session established");
        Ok(session)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn license_registration(&self) -> Result<LicenseRegistration, ApplianceError> {
        self.get_json(paths::LICENSING_REGISTRATION).await
    }

    pub async fn interfaces(&self) -> Result<Vec<NamedObject>, ApplianceError> {
        Ok(self.get_json::<Collection>(paths::NET_INTERFACES).await?.items)
    }

    pub async fn self_ips(&self) -> Result<Vec<NamedObject>, ApplianceError> {
        Ok(self.get_json::<Collection>(paths::NET_SELF_IPS).await?.items)
    }

    pub async fn vlans(&self) -> Result<Vec<NamedObject>, ApplianceError> {
        Ok(self.get_json::<Collection>(paths::NET_VLANS).await?.items)
    }

    /// Fetch the three network collections concurrently.
    pub async fn network_topology(&self) -> Result<NetworkTopology, ApplianceError> {
        let (interfaces, self_ips, vlans) =
            try_join!(self.interfaces(), self.self_ips(), self.vlans())?;
        Ok(NetworkTopology {
            interfaces,
            self_ips,
            vlans,
        })
    }

    async fn get_json<T>(&self, path: &'static str) -> Result<T, ApplianceError>
    where
        T: DeserializeOwned,
    {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApplianceError::JoinUrl {
                base: self.base_url.clone(),
                path,
                message: source.to_string(),
            })?;
        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
