//! HTTP client for the external identity provider.

use serde::Deserialize;

use crate::config::RemoteConfig;

use super::{AuthError, Session};

/// Identity provider client. Construction fails when the provider is
/// not configured; callers then stay in guest/offline mode.
pub struct IdentityClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    #[serde(rename = "localId")]
    local_id: String,
    #[serde(rename = "idToken")]
    id_token: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityClient {
    pub fn from_config(config: &RemoteConfig) -> Result<Self, AuthError> {
        if !config.is_configured() {
            return Err(AuthError::NotConfigured);
        }
        // is_configured guarantees both fields
        let server_url = config.server_url.clone().ok_or(AuthError::NotConfigured)?;
        let api_key = config.api_key.clone().ok_or(AuthError::NotConfigured)?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: server_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Anonymous sign-in: an account with no email.
    pub async fn sign_in_anonymously(&self) -> Result<Session, AuthError> {
        let response = self
            .request("accounts:signUp", serde_json::json!({ "returnSecureToken": true }))
            .await?;
        Ok(Session::signed_in(response.local_id, None, response.id_token))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .request(
                "accounts:signInWithPassword",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        Ok(Session::signed_in(
            response.local_id,
            response.email,
            response.id_token,
        ))
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .request(
                "accounts:signUp",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        Ok(Session::signed_in(
            response.local_id,
            response.email,
            response.id_token,
        ))
    }

    /// Asks the provider to send a password-reset email.
    pub async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let url = self.endpoint("accounts:sendOobCode");
        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({
                "requestType": "PASSWORD_RESET",
                "email": email,
            }))
            .send()
            .await
            .map_err(|e| AuthError::Http(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(provider_error(response).await)
        }
    }

    async fn request(
        &self,
        operation: &str,
        body: serde_json::Value,
    ) -> Result<SignInResponse, AuthError> {
        let url = self.endpoint(operation);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AuthError::Http(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| AuthError::Http(e.to_string()))
        } else {
            Err(provider_error(response).await)
        }
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/v1/{}?key={}", self.base_url, operation, self.api_key)
    }
}

/// Maps a provider error response to an `AuthError::Provider`. The
/// provider signals error codes in the `error.message` field, sometimes
/// with a trailing explanation after a colon.
async fn provider_error(response: reqwest::Response) -> AuthError {
    let status = response.status().as_u16();
    match response.json::<ErrorResponse>().await {
        Ok(parsed) => {
            let raw = parsed.error.message;
            let (code, message) = match raw.split_once(':') {
                Some((code, rest)) => (code.trim().to_string(), rest.trim().to_string()),
                None => (raw.clone(), raw),
            };
            AuthError::Provider { code, message }
        }
        Err(_) => AuthError::Http(format!("identity provider returned status {status}")),
    }
}
