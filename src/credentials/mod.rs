use std::path::Path;

use thiserror::Error;
use yup_oauth2::ServiceAccountKey;

#[cfg(test)]
mod tests;

/// Well-known location of the service account file, relative to the host
/// process working directory.
pub const SERVICE_ACCOUNT_FILE: &str = "fb_service_account.json";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("failed to read service account file: {0}")]
    Read(#[from] std::io::Error),
    #[error("service account file is not a valid service account key: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("service account key is missing the project_id field")]
    ProjectIdMissing,
}

/// A parsed service account: the OAuth2 key plus the project it belongs to.
#[derive(Debug)]
pub struct ServiceAccount {
    pub key: ServiceAccountKey,
    pub project_id: String,
}

/// Reads and parses the service account file at `path`.
///
/// The file is read on every call; nothing is cached between calls. The
/// `project_id` field is required: Remote Config resources live under it.
pub fn load(path: impl AsRef<Path>) -> Result<ServiceAccount, CredentialError> {
    let data = std::fs::read(path)?;
    let key: ServiceAccountKey = serde_json::from_slice(&data)?;
    let project_id = key
        .project_id
        .clone()
        .ok_or(CredentialError::ProjectIdMissing)?;

    Ok(ServiceAccount { key, project_id })
}
