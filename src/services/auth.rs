//! Bearer-token authentication against the backend's token endpoint.

use serde::Deserialize;
use tracing::info;

use crate::error::ClientResult;

use super::api_client::ApiClient;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST /auth/token?username&password`; the returned bearer token is
    /// stored on the shared client and attached to subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<()> {
        let query = [
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ];
        let token: TokenResponse = self.api.post_empty_json("/auth/token", &query).await?;
        match token.access_token {
            Some(t) if !t.is_empty() => {
                self.api.set_token(Some(t));
                info!(username = username, "Authenticated");
                Ok(())
            }
            _ => Err(crate::error::ClientError::Unauthorized(
                "No token received".to_string(),
            )),
        }
    }

    pub fn logout(&self) {
        self.api.set_token(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.has_token()
    }
}
