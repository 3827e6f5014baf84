//! HTTP transport for the shop API.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Low-level HTTP client all endpoint groups go through.
///
/// Cheap to clone; the inner reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// # Panics
    /// Panics if the TLS backend cannot initialize, which is fatal at
    /// startup anyway.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Drop the authentication token (logout).
    pub fn without_token(mut self) -> Self {
        self.token = None;
        self
    }

    /// Get the current token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let request = self.authorize(self.client.get(&url));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let request = self.authorize(self.client.get(&url).query(query));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "POST");
        let request = self.authorize(self.client.post(&url).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "POST");
        let request = self.authorize(self.client.post(&url));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with a JSON body.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let request = self.authorize(self.client.put(&url).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let request = self.authorize(self.client.delete(&url));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Map the HTTP response into a typed result.
    ///
    /// Error bodies carry the envelope too, so the server's `message` is
    /// lifted out of the JSON when present rather than dumping raw text at
    /// the operator.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = extract_message(&text);
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
                _ => Err(ClientError::Server(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

/// Best-effort pull of the envelope `message` from an error body.
fn extract_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_tolerates_slashes() {
        let config = ClientConfig::new("http://localhost:5000/api/");
        let client = ApiClient::new(&config);
        assert_eq!(
            client.url("/customers/abc"),
            "http://localhost:5000/api/customers/abc"
        );
        assert_eq!(client.url("sales"), "http://localhost:5000/api/sales");
    }

    #[test]
    fn test_token_lifecycle() {
        let config = ClientConfig::new("http://localhost:5000/api");
        let client = ApiClient::new(&config).with_token("jwt");
        assert_eq!(client.token(), Some("jwt"));
        assert_eq!(client.auth_header().as_deref(), Some("Bearer jwt"));

        let client = client.without_token();
        assert!(client.token().is_none());
        assert!(client.auth_header().is_none());
    }

    #[test]
    fn test_extract_message_from_error_body() {
        assert_eq!(
            extract_message(r#"{"success":false,"message":"Customer not found"}"#),
            "Customer not found"
        );
        assert_eq!(extract_message("plain text error"), "plain text error");
    }
}
