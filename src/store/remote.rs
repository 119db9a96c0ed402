//! Remote document store client.
//!
//! The provider holds one JSON document per user at a fixed path:
//! `artifacts/{app_id}/users/{uid}/profile/data`.

use crate::models::UserData;

use super::StoreError;

/// Builds the document path for a user's progress document.
pub fn document_path(app_id: &str, uid: &str) -> String {
    format!("artifacts/{app_id}/users/{uid}/profile/data")
}

/// Read/write access to a single remote JSON document. Implemented over
/// HTTP in production and by an in-memory double in tests.
pub trait DocumentStore {
    fn read(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<UserData>, StoreError>> + Send;

    fn write(
        &self,
        path: &str,
        data: &UserData,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}

/// HTTP implementation against the configured provider.
pub struct HttpDocumentStore {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpDocumentStore {
    pub fn new(server_url: &str, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: server_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl DocumentStore for HttpDocumentStore {
    async fn read(&self, path: &str) -> Result<Option<UserData>, StoreError> {
        let response = self
            .client
            .get(self.url_for(path))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await
            .map_err(StoreError::Http)?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }

        let data = response.json().await.map_err(StoreError::Http)?;
        Ok(Some(data))
    }

    async fn write(&self, path: &str, data: &UserData) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.url_for(path))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(data)
            .send()
            .await
            .map_err(StoreError::Http)?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_scheme() {
        assert_eq!(
            document_path("daybrief", "user-123"),
            "artifacts/daybrief/users/user-123/profile/data"
        );
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let store = HttpDocumentStore::new("https://sync.example.com/", "tok");
        assert_eq!(
            store.url_for("artifacts/daybrief/users/u/profile/data"),
            "https://sync.example.com/artifacts/daybrief/users/u/profile/data"
        );
    }
}
