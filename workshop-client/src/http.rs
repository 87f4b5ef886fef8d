//! HTTP client - network calls to the workshop backend

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::ErrorBody;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client trait
///
/// Paths are relative to the configured API base (`"bookings"`,
/// `"work-order/42/status"`). Every request carries the bearer token once
/// one has been set.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
    fn set_token(&mut self, token: Option<String>);
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("API base URL is empty".into()));
        }
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, method: &str, path: &str, req: RequestBuilder) -> ClientResult<T> {
        tracing::debug!(method, path, "Sending request");
        let response = self.authorize(req).send().await.inspect_err(|e| {
            tracing::warn!(method, path, error = %e, "Request failed");
        })?;
        self.handle_response(method, path, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            // Prefer the structured { message } / { error } body
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.display_text())
                .unwrap_or_default();
            tracing::warn!(method, path, status = status.as_u16(), message = %message, "Request rejected");
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
                StatusCode::FORBIDDEN => ClientError::Forbidden(message),
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(message),
                _ => ClientError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.client.get(self.url(path));
        self.send("GET", path, req).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<T> {
        let req = self.client.get(self.url(path)).query(query);
        self.send("GET", path, req).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let req = self.client.post(self.url(path)).json(body);
        self.send("POST", path, req).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.client.post(self.url(path));
        self.send("POST", path, req).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let req = self.client.put(self.url(path)).json(body);
        self.send("PUT", path, req).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.client.delete(self.url(path));
        self.send("DELETE", path, req).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:8080/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/bookings"), "http://localhost:8080/api/bookings");
        assert_eq!(client.url("work-order/1"), "http://localhost:8080/api/work-order/1");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(matches!(
            NetworkHttpClient::new(&ClientConfig::new("  ")),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_token_header() {
        let mut client = NetworkHttpClient::new(&ClientConfig::new("http://localhost")).unwrap();
        assert!(client.auth_header().is_none());
        client.set_token(Some("t0k".into()));
        assert_eq!(client.auth_header().as_deref(), Some("Bearer t0k"));
    }
}
