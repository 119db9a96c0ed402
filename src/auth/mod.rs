//! Identity: sessions, the provider client, and error-code mapping.

mod client;
mod session;

pub use client::IdentityClient;
pub use session::{Session, SessionStore};

/// Errors from the identity layer.
#[derive(Debug)]
pub enum AuthError {
    /// Remote provider not configured; the app runs in guest mode
    NotConfigured,
    /// Transport failure
    Http(String),
    /// The provider rejected the request with a coded error
    Provider { code: String, message: String },
    /// Local session/config problem
    Config(String),
    /// I/O error on the session file
    Io(std::io::Error),
}

impl AuthError {
    /// The fixed table of user-facing messages, keyed by provider error
    /// code, with a generic pass-through for anything unrecognized.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::NotConfigured => {
                "Running in offline mode. Configure remote.server_url and remote.api_key to sign in.".to_string()
            }
            AuthError::Http(e) => format!("Connection error: {e}"),
            AuthError::Provider { code, message } => match code.as_str() {
                "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => {
                    "No account found with that email.".to_string()
                }
                "INVALID_PASSWORD" | "WRONG_PASSWORD" => {
                    "Incorrect password. Try again.".to_string()
                }
                "EMAIL_EXISTS" => "An account with that email already exists.".to_string(),
                "WEAK_PASSWORD" => "Password should be at least 6 characters.".to_string(),
                "OPERATION_NOT_ALLOWED" => "That sign-in method is disabled.".to_string(),
                "INVALID_API_KEY" => "The configured API key is invalid.".to_string(),
                "INVALID_CONFIG" => "Remote provider configuration is invalid.".to_string(),
                _ => format!("Error: {message} [{code}]"),
            },
            AuthError::Config(e) => format!("Config error: {e}"),
            AuthError::Io(e) => format!("I/O error: {e}"),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(code: &str) -> AuthError {
        AuthError::Provider {
            code: code.to_string(),
            message: "detail".to_string(),
        }
    }

    #[test]
    fn test_known_codes_map_to_fixed_messages() {
        assert_eq!(
            provider("EMAIL_NOT_FOUND").user_message(),
            "No account found with that email."
        );
        assert_eq!(
            provider("WEAK_PASSWORD").user_message(),
            "Password should be at least 6 characters."
        );
        assert_eq!(
            provider("OPERATION_NOT_ALLOWED").user_message(),
            "That sign-in method is disabled."
        );
    }

    #[test]
    fn test_unknown_code_falls_through_with_code_suffix() {
        assert_eq!(
            provider("QUOTA_EXCEEDED").user_message(),
            "Error: detail [QUOTA_EXCEEDED]"
        );
    }
}
