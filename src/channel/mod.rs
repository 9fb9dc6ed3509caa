//! Method-call surface of the bridge.
//!
//! The host application owns the transport: its adapter decodes an incoming
//! call, hands `(method, arguments)` to [`RemoteConfigPlugin::handle`] and
//! encodes the returned [`Reply`] — or the error's [`MethodError::code`] —
//! back onto the channel named [`CHANNEL_NAME`].
//!
//! Only `RemoteConfig#activate` does real work; `instance` and `fetch`
//! answer with fixed records and the defaults/settings methods are
//! unimplemented.

pub mod models;

use std::collections::HashMap;
use std::path::PathBuf;

use futures::future::BoxFuture;
use serde_json::Value;

use crate::channel::models::{FetchInfo, InstanceInfo, Reply};
use crate::credentials::SERVICE_ACCOUNT_FILE;
use crate::remote_config::{self, RemoteConfigClient};

/// Name of the method channel the host binds this plugin to.
pub const CHANNEL_NAME: &str = "plugins.flutter.io/firebase_remote_config";

pub const INSTANCE_METHOD: &str = "RemoteConfig#instance";
pub const SET_CONFIG_SETTINGS_METHOD: &str = "RemoteConfig#setConfigSettings";
pub const FETCH_METHOD: &str = "RemoteConfig#fetch";
pub const ACTIVATE_METHOD: &str = "RemoteConfig#activate";
pub const SET_DEFAULTS_METHOD: &str = "RemoteConfig#setDefaults";

#[derive(Debug, thiserror::Error)]
pub enum MethodError {
    #[error("Unimplemented")]
    Unimplemented { method: &'static str },
    #[error("no handler registered for method {method:?}")]
    UnknownMethod { method: String },
    #[error(transparent)]
    RemoteConfig(#[from] remote_config::Error),
}

impl MethodError {
    /// Stable machine-readable code for the host's error reply.
    pub fn code(&self) -> &'static str {
        match self {
            MethodError::Unimplemented { .. } => "unimplemented",
            MethodError::UnknownMethod { .. } => "unknown-method",
            MethodError::RemoteConfig(e) => match e {
                remote_config::Error::ServiceUnavailable(_) => "unavailable",
                remote_config::Error::FetchFailed { .. } => "fetch-failed",
                remote_config::Error::ActivationFailed { .. } => "activation-failed",
                remote_config::Error::ValueType { .. } => "value-type",
            },
        }
    }
}

type Handler = Box<dyn Fn(Value) -> BoxFuture<'static, Result<Reply, MethodError>> + Send + Sync>;

/// The Remote Config bridge plugin: a table from method name to handler,
/// built once and consulted for every incoming call.
pub struct RemoteConfigPlugin {
    handlers: HashMap<&'static str, Handler>,
}

impl RemoteConfigPlugin {
    /// Builds the plugin with the well-known credential file location.
    pub fn new() -> Self {
        Self::with_credentials_file(SERVICE_ACCOUNT_FILE)
    }

    /// Builds the plugin reading service account credentials from `path`
    /// on every activation call.
    pub fn with_credentials_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let mut handlers: HashMap<&'static str, Handler> = HashMap::new();
        handlers.insert(INSTANCE_METHOD, Box::new(|_| Box::pin(handle_instance())));
        handlers.insert(FETCH_METHOD, Box::new(|_| Box::pin(handle_fetch())));
        handlers.insert(
            SET_CONFIG_SETTINGS_METHOD,
            Box::new(|_| Box::pin(handle_unimplemented(SET_CONFIG_SETTINGS_METHOD))),
        );
        handlers.insert(
            SET_DEFAULTS_METHOD,
            Box::new(|_| Box::pin(handle_unimplemented(SET_DEFAULTS_METHOD))),
        );
        handlers.insert(
            ACTIVATE_METHOD,
            Box::new(move |_| Box::pin(handle_activate(path.clone()))),
        );

        Self { handlers }
    }

    /// Dispatches one method call and returns its reply.
    ///
    /// The root cause of a failure is logged here; the host is expected to
    /// surface only the error code and message to the caller.
    pub async fn handle(&self, method: &str, arguments: Value) -> Result<Reply, MethodError> {
        let handler = self
            .handlers
            .get(method)
            .ok_or_else(|| MethodError::UnknownMethod {
                method: method.to_string(),
            })?;

        match handler(arguments).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                tracing::warn!(method, code = e.code(), error = %e, "method call failed");
                Err(e)
            }
        }
    }

    /// Method names the plugin answers; the host adapter registers each of
    /// these on the channel.
    pub fn methods(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }
}

impl Default for RemoteConfigPlugin {
    fn default() -> Self {
        Self::new()
    }
}

async fn handle_instance() -> Result<Reply, MethodError> {
    Ok(Reply::Instance(InstanceInfo::stub()))
}

async fn handle_fetch() -> Result<Reply, MethodError> {
    Ok(Reply::Fetch(FetchInfo::stub()))
}

async fn handle_unimplemented(method: &'static str) -> Result<Reply, MethodError> {
    Err(MethodError::Unimplemented { method })
}

/// Bootstraps a fresh client from the credential file and runs the
/// activation transform. Nothing is shared between calls.
async fn handle_activate(path: PathBuf) -> Result<Reply, MethodError> {
    let client = RemoteConfigClient::from_credentials_file(&path)?;
    let result = client.activate().await?;
    Ok(Reply::Activate(result))
}
