use http::Extensions;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use reqwest::{header, Request, Response};
use reqwest_middleware::{Middleware, Next};
use tokio::sync::OnceCell;
use yup_oauth2::authenticator::Authenticator;
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};

/// Read scope of the Remote Config REST API.
const REMOTE_CONFIG_SCOPE: &str = "https://www.googleapis.com/auth/firebase.remoteconfig";

// The type returned by ServiceAccountAuthenticator::builder(...).build().await
// with the default hyper-rustls connector stack.
type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Injects an OAuth2 bearer token, minted from the service account key via
/// the JWT flow, into every outgoing request.
pub struct AuthMiddleware {
    key: ServiceAccountKey,
    authenticator: OnceCell<AuthType>,
}

impl AuthMiddleware {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self {
            key,
            authenticator: OnceCell::new(),
        }
    }

    async fn get_token(&self) -> Result<String, anyhow::Error> {
        let auth = self
            .authenticator
            .get_or_try_init(|| async {
                ServiceAccountAuthenticator::builder(self.key.clone())
                    .build()
                    .await
            })
            .await?;

        let token = auth.token(&[REMOTE_CONFIG_SCOPE]).await?;

        Ok(token
            .token()
            .ok_or_else(|| anyhow::anyhow!("authenticator returned an empty token"))?
            .to_string())
    }
}

#[async_trait::async_trait]
impl Middleware for AuthMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let token = self.get_token().await.map_err(|e| {
            reqwest_middleware::Error::Middleware(anyhow::anyhow!("failed to get auth token: {e}"))
        })?;

        let value = header::HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            reqwest_middleware::Error::Middleware(anyhow::anyhow!("invalid bearer token: {e}"))
        })?;
        req.headers_mut().insert(header::AUTHORIZATION, value);

        next.run(req, extensions).await
    }
}
