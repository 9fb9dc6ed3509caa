use std::collections::HashMap;

use serde_json::Value;

/// Remote Config template as returned by the REST API.
///
/// Only `parameters` feeds the activation transform; `conditions` and
/// `version` are carried so the full response deserializes without loss.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfigDocument {
    #[serde(default)]
    pub parameters: HashMap<String, RemoteConfigParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RemoteConfigCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfigParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<RemoteConfigParameterValue>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub conditional_values: HashMap<String, RemoteConfigParameterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A parameter value slot. The declared type is open on the wire: the API
/// may carry any JSON scalar here, even though string is the only shape
/// the activation transform accepts.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct RemoteConfigParameterValue {
    pub value: Value,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfigCondition {
    pub name: String,
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_color: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub version_number: String,
    pub update_time: String,
    pub update_origin: String,
    pub update_type: String,
}

/// Structural shape the activation transform reparses the document into:
/// parameter name -> defaultValue -> value.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ConfigContent {
    #[serde(default)]
    pub(crate) parameters: HashMap<String, ContentParameter>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContentParameter {
    #[serde(default)]
    pub(crate) default_value: ContentValue,
}

#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct ContentValue {
    #[serde(default)]
    pub(crate) value: Value,
}

/// Source tag recorded on every activated parameter. The bridge only ever
/// serves values fetched from the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterSource {
    Remote,
}

/// Reply payload of a successful activation.
#[derive(Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct ActivationResult {
    pub parameters: HashMap<String, ActivatedParameter>,
}

/// A single activated parameter as delivered to the host: the source tag
/// plus the raw bytes of the default value.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActivatedParameter {
    pub source: ParameterSource,
    pub value: Vec<u8>,
}
