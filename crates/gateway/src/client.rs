//! Shared HTTP client: base URL, bearer token, JSON and multipart
//! helpers, server-message extraction.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Source of the bearer token attached to every request.
///
/// The identity-provider client owns token lifecycle (refresh,
/// expiry); gated screens never run without a session, so a `None`
/// here only happens in tests or during teardown — the request is
/// then sent unauthenticated and the backend rejects it.
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, for tests and tooling.
#[derive(Debug, Clone)]
pub struct StaticToken(pub Option<String>);

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Shared backbone of all gateways.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.tokens.bearer_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let resp = self.authed(self.http.get(self.url(path))).send().await?;
        Ok(Self::check(resp).await?.json::<T>().await?)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let resp = self
            .authed(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json::<T>().await?)
    }

    /// POST with an empty JSON object body, discarding the response
    /// body (role assignment, status toggles).
    pub async fn post_unit(&self, path: &str) -> Result<(), GatewayError> {
        let resp = self
            .authed(self.http.post(self.url(path)).json(&serde_json::json!({})))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let resp = self
            .authed(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json::<T>().await?)
    }

    /// PUT discarding the response body.
    pub async fn put_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), GatewayError> {
        let resp = self
            .authed(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let resp = self.authed(self.http.delete(self.url(path))).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Multipart upload of a single `file` part, as the image
    /// endpoints expect.
    pub async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<T, GatewayError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let resp = self
            .authed(self.http.post(self.url(path)).multipart(form))
            .send()
            .await?;
        Ok(Self::check(resp).await?.json::<T>().await?)
    }

    /// Map non-success statuses to [`GatewayError::Server`], pulling
    /// the `message` field out of a JSON body when there is one.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty() && !trimmed.starts_with('<')).then(|| trimmed.to_string())
            });
        tracing::warn!(status = status.as_u16(), "gateway call failed");
        Err(GatewayError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn server_message_is_extracted_from_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/api/pieces")
            .with_status(409)
            .with_body(r#"{"message":"Code barre déjà utilisé"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url(), Arc::new(StaticToken(None)));
        let err = client
            .get_json::<Vec<serde_json::Value>>("/api/pieces")
            .await
            .unwrap_err();
        assert_eq!(err.user_message("Erreur"), "Code barre déjà utilisé");
    }

    #[tokio::test]
    async fn plain_text_bodies_are_surfaced_too() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("DELETE", "/api/pieces/123")
            .with_status(400)
            .with_body("pièce introuvable")
            .create_async()
            .await;

        let client = ApiClient::new(server.url(), Arc::new(StaticToken(None)));
        let err = client.delete("/api/pieces/123").await.unwrap_err();
        assert_eq!(err.user_message("Erreur"), "pièce introuvable");
    }

    #[tokio::test]
    async fn bearer_token_is_attached_when_present() {
        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/api/categories")
            .match_header("authorization", "Bearer tok-123")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = ApiClient::new(
            server.url(),
            Arc::new(StaticToken(Some("tok-123".to_string()))),
        );
        let cats: Vec<serde_json::Value> = client.get_json("/api/categories").await.unwrap();
        assert!(cats.is_empty());
        m.assert_async().await;
    }
}
