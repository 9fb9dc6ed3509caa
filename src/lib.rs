//! Bridge plugin exposing Firebase Remote Config to a desktop application
//! host over a method-call channel.
//!
//! The host owns the transport and the codec. Its adapter binds the channel
//! named [`CHANNEL_NAME`], decodes each incoming call and hands it to
//! [`RemoteConfigPlugin::handle`]; the returned [`Reply`] (or the failed
//! call's [`MethodError::code`]) is encoded back onto the channel.
//!
//! Activation authorizes against the Remote Config API with the service
//! account file `fb_service_account.json` in the host's working directory,
//! read fresh on every call.
//!
//! ```no_run
//! use firebase_remote_config_bridge::{RemoteConfigPlugin, ACTIVATE_METHOD};
//!
//! # async fn run() {
//! let plugin = RemoteConfigPlugin::new();
//! match plugin.handle(ACTIVATE_METHOD, serde_json::Value::Null).await {
//!     Ok(_reply) => { /* encode the reply onto the channel */ }
//!     Err(e) => eprintln!("activation failed ({}): {e}", e.code()),
//! }
//! # }
//! ```

pub mod channel;
pub mod core;
pub mod credentials;
pub mod remote_config;

pub use channel::models::Reply;
pub use channel::{
    MethodError, RemoteConfigPlugin, ACTIVATE_METHOD, CHANNEL_NAME, FETCH_METHOD, INSTANCE_METHOD,
    SET_CONFIG_SETTINGS_METHOD, SET_DEFAULTS_METHOD,
};
