pub mod middleware;

use serde::Deserialize;

/// Error envelope returned by Google APIs on non-success responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetails {
    pub code: u16,
    pub message: String,
    pub status: Option<String>,
}

impl ApiErrorResponse {
    pub fn display_message(&self) -> String {
        format!("{} (code: {})", self.error.message, self.error.code)
    }
}

/// Decodes a non-success response body through the Google error envelope,
/// falling back to the HTTP status when the body is not the envelope.
pub async fn parse_error_response(response: reqwest::Response, default_msg: &str) -> String {
    let status = response.status();
    match response.json::<ApiErrorResponse>().await {
        Ok(envelope) => envelope.display_message(),
        Err(_) => format!("{default_msg}: {status}"),
    }
}
