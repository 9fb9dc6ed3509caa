use std::collections::HashMap;

pub use crate::remote_config::models::{ActivatedParameter, ActivationResult, ParameterSource};

/// Millisecond timestamp reported by the stub handlers.
const STUB_LAST_FETCH_TIME_MS: i64 = 1_596_960_491_970;

/// Reply to a method call. One variant per method with a result shape, so
/// a handler cannot produce another method's payload. The wire encoding is
/// the bare record, as the host codec expects.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Reply {
    Instance(InstanceInfo),
    Fetch(FetchInfo),
    Activate(ActivationResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    Success,
}

/// Payload of `RemoteConfig#instance`. Every field is a canned constant.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub last_fetch_time: i64,
    pub last_fetch_status: FetchStatus,
    pub in_debug_mode: bool,
    pub parameters: HashMap<String, SourceOnlyParameter>,
}

/// Payload of `RemoteConfig#fetch`. Canned constants as well; the bridge
/// never tracks real fetch times.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchInfo {
    pub last_fetch_time: i64,
    pub last_fetch_status: FetchStatus,
}

/// Stub parameter entry carrying only its source tag.
#[derive(Debug, PartialEq, Eq, serde::Serialize)]
pub struct SourceOnlyParameter {
    pub source: ParameterSource,
}

impl InstanceInfo {
    /// Canned instance record, independent of any remote or local state.
    pub fn stub() -> Self {
        let mut parameters = HashMap::new();
        parameters.insert(
            "remote".to_string(),
            SourceOnlyParameter {
                source: ParameterSource::Remote,
            },
        );

        Self {
            last_fetch_time: STUB_LAST_FETCH_TIME_MS,
            last_fetch_status: FetchStatus::Success,
            in_debug_mode: true,
            parameters,
        }
    }
}

impl FetchInfo {
    /// Canned fetch record, independent of any remote or local state.
    pub fn stub() -> Self {
        Self {
            last_fetch_time: STUB_LAST_FETCH_TIME_MS,
            last_fetch_status: FetchStatus::Success,
        }
    }
}
