use std::{collections::BTreeMap, time::Duration};

use reqwest::{Client, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

use super::{CreatedStack, Stack, TemplateSource};

#[derive(Debug, Error)]
pub enum StackClientError {
    #[error("invalid orchestration endpoint {endpoint}: {message}")]
    Endpoint { endpoint: String, message: String },
    #[error("failed to join url {base} with path {path}: {message}")]
    JoinUrl {
        base: Url,
        path: String,
        message: String,
    },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("stack {name} failed to create: {status} ({reason})")]
    CreateFailed {
        name: String,
        status: String,
        reason: String,
    },
    #[error("timed out after {timeout:?} waiting for stack {name} to reach CREATE_COMPLETE (last status {status})")]
    CreateTimeout {
        name: String,
        status: String,
        timeout: Duration,
    },
}

#[derive(Serialize)]
struct CreateStackRequest<'a> {
    stack_name: &'a str,
    template: &'a str,
    parameters: &'a BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct CreatedStackEnvelope {
    stack: CreatedStack,
}

#[derive(Deserialize)]
struct StackEnvelope {
    stack: Stack,
}

/// Thin async client for the orchestration service's stack API.
#[derive(Clone, Debug)]
pub struct StackClient {
    endpoint: Url,
    token: Option<String>,
    client: Client,
}

impl StackClient {
    #[must_use]
    pub fn new(mut endpoint: Url) -> Self {
        // Url::join drops the last path segment unless the base ends in '/'.
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }
        Self {
            endpoint,
            token: None,
            client: Client::new(),
        }
    }

    /// Construct from an endpoint string such as
    /// `http://orchestrator.lab:8004/v1/tenant`.
    pub fn from_endpoint(endpoint: &str) -> Result<Self, StackClientError> {
        let url = Url::parse(endpoint).map_err(|source| StackClientError::Endpoint {
            endpoint: endpoint.to_owned(),
            message: source.to_string(),
        })?;
        Ok(Self::new(url))
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Request stack creation from a template with named parameters.
    pub async fn create_stack(
        &self,
        name: &str,
        template: &TemplateSource,
        parameters: &BTreeMap<String, String>,
    ) -> Result<CreatedStack, StackClientError> {
        info!(
            stack = name,
            template = %template.path().display(),
            "creating stack"
        );
        let url = self.join("stacks")?;
        let body = CreateStackRequest {
            stack_name: name,
            template: template.raw(),
            parameters,
        };
        let envelope: CreatedStackEnvelope = self
            .decorate(self.client.post(url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.stack)
    }

    /// Fetch a stack by id, refreshing its status and outputs.
    pub async fn stack(&self, id: &str) -> Result<Stack, StackClientError> {
        let url = self.join(&format!("stacks/{id}"))?;
        let envelope: StackEnvelope = self
            .decorate(self.client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.stack)
    }

    pub async fn delete_stack(&self, id: &str) -> Result<(), StackClientError> {
        info!(stack_id = id, "deleting stack");
        let url = self.join(&format!("stacks/{id}"))?;
        self.decorate(self.client.delete(url))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Poll a stack until it reaches `CREATE_COMPLETE`. Any `*_FAILED`
    /// status is terminal.
    pub async fn wait_for_create_complete(
        &self,
        id: &str,
        timeout: Duration,
        interval: Duration,
    ) -> Result<Stack, StackClientError> {
        let mut elapsed = Duration::ZERO;
        loop {
            let stack = self.stack(id).await?;
            if stack.is_create_complete() {
                info!(stack = %stack.stack_name, "stack create complete");
                return Ok(stack);
            }
            if stack.is_failed() {
                return Err(StackClientError::CreateFailed {
                    name: stack.stack_name,
                    status: stack.stack_status,
                    reason: stack.stack_status_reason.unwrap_or_default(),
                });
            }
            if elapsed >= timeout {
                return Err(StackClientError::CreateTimeout {
                    name: stack.stack_name,
                    status: stack.stack_status,
                    timeout,
                });
            }
            debug!(
                stack = %stack.stack_name,
                status = %stack.stack_status,
                elapsed_secs = elapsed.as_secs(),
                "stack not ready yet"
            );
            sleep(interval).await;
            elapsed += interval;
        }
    }

    fn join(&self, path: &str) -> Result<Url, StackClientError> {
        self.endpoint
            .join(path.trim_start_matches('/'))
            .map_err(|source| StackClientError::JoinUrl {
                base: self.endpoint.clone(),
                path: path.to_owned(),
                message: source.to_string(),
            })
    }

    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("X-Auth-Token", token),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_join_keeps_full_path() {
        let client = StackClient::from_endpoint("http://orchestrator.lab:8004/v1/tenant").unwrap();
        let url = client.join("stacks/abc123").unwrap();
        assert_eq!(url.as_str(), "http://orchestrator.lab:8004/v1/tenant/stacks/abc123");
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let err = StackClient::from_endpoint("not a url").unwrap_err();
        assert!(matches!(err, StackClientError::Endpoint { .. }));
    }
}
