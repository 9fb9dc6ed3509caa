//! Firebase Remote Config client for the bridge.
//!
//! Fetches the current Remote Config template of a project and reshapes it
//! into the activation result delivered over the method channel. The
//! template is read-only here: one GET per call, no retries, no caching.

pub mod models;

use std::collections::HashMap;
use std::path::Path;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde_json::Value;
use yup_oauth2::ServiceAccountKey;

use crate::core::middleware::AuthMiddleware;
use crate::core::parse_error_response;
use crate::credentials::{self, CredentialError};
use crate::remote_config::models::{
    ActivatedParameter, ActivationResult, ConfigContent, ParameterSource, RemoteConfigDocument,
};

const REMOTE_CONFIG_V1_API: &str =
    "https://firebaseremoteconfig.googleapis.com/v1/projects/{project_id}/remoteConfig";

/// Errors that can occur while fetching or activating remote config.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bootstrap failed; no request was (or will be) made for this call.
    #[error("remote config service unavailable: {0}")]
    ServiceUnavailable(#[from] CredentialError),
    /// The remote call failed, in transport or with an API error.
    #[error("failed to fetch remote config: {reason}")]
    FetchFailed { reason: String },
    /// The fetched document could not be turned into an activation result.
    #[error("{reason}")]
    ActivationFailed { reason: &'static str },
    /// A parameter's default value is not a string.
    #[error("parameter {parameter:?} carries a non-string default value")]
    ValueType { parameter: String },
}

/// Client for the Remote Config read surface of one project.
#[derive(Debug)]
pub struct RemoteConfigClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl RemoteConfigClient {
    /// Builds a client for `project_id`, authorized by `key`.
    ///
    /// No network I/O happens until a request is issued.
    pub fn new(key: ServiceAccountKey, project_id: &str) -> Self {
        let client = ClientBuilder::new(Client::new())
            .with(AuthMiddleware::new(key))
            .build();
        let base_url = REMOTE_CONFIG_V1_API.replace("{project_id}", project_id);

        Self { client, base_url }
    }

    /// Builds a client from the service account file at `path`.
    ///
    /// The file is read fresh on every call to this constructor.
    pub fn from_credentials_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let account = credentials::load(path)?;
        Ok(Self::new(account.key, &account.project_id))
    }

    /// Creates a client with a custom client and base URL.
    /// Internal use only, primarily for testing.
    #[allow(dead_code)]
    pub(crate) fn new_with_client(client: ClientWithMiddleware, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetches the current Remote Config template.
    ///
    /// One GET per call; any failure is terminal for the call.
    pub async fn get_document(&self) -> Result<RemoteConfigDocument, Error> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Error::FetchFailed {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let reason = parse_error_response(response, "remote config request failed").await;
            return Err(Error::FetchFailed { reason });
        }

        response.json().await.map_err(|e| Error::FetchFailed {
            reason: e.to_string(),
        })
    }

    /// Fetches the template and reshapes it into an [`ActivationResult`].
    ///
    /// Every parameter of the fetched document appears in the result tagged
    /// with the `"remote"` source; a parameter whose default value is not a
    /// string fails the whole activation, so the caller never sees a
    /// partial parameter map.
    pub async fn activate(&self) -> Result<ActivationResult, Error> {
        let document = self.get_document().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to call the remote config API");
            Error::ActivationFailed {
                reason: "Failed to call remote config API",
            }
        })?;

        build_activation(&document)
    }
}

/// Runs a document through its canonical JSON form into per-parameter
/// activation entries.
fn build_activation(document: &RemoteConfigDocument) -> Result<ActivationResult, Error> {
    let raw = serde_json::to_value(document).map_err(|e| {
        tracing::warn!(error = %e, "remote config document did not serialize");
        Error::ActivationFailed {
            reason: "Failed to parse config json",
        }
    })?;
    let content: ConfigContent = serde_json::from_value(raw).map_err(|e| {
        tracing::warn!(error = %e, "remote config document did not match the expected shape");
        Error::ActivationFailed {
            reason: "Failed to unmarshal config json",
        }
    })?;

    let mut parameters = HashMap::with_capacity(content.parameters.len());
    for (name, parameter) in content.parameters {
        let Value::String(value) = parameter.default_value.value else {
            return Err(Error::ValueType { parameter: name });
        };
        parameters.insert(
            name,
            ActivatedParameter {
                source: ParameterSource::Remote,
                value: value.into_bytes(),
            },
        );
    }

    Ok(ActivationResult { parameters })
}

#[cfg(test)]
mod tests;
