//! Shared HTTP wrapper for the backend REST API.
//!
//! One reqwest client for the whole session; every request goes through the
//! same bearer-token attach and status-to-error mapping so call sites only
//! deal with [`ClientError`].

use anyhow::{Context, Result};
use parking_lot::RwLock;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

use crate::error::{ClientError, ClientResult, ErrorResponse};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = base_url, "API client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(token) = self.token.read().as_deref() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send and map non-success statuses to [`ClientError`], pulling the
    /// backend's message out of the body when one is present.
    async fn execute(&self, req: RequestBuilder) -> ClientResult<Response> {
        let response = req.send().await.map_err(|e| {
            error!(error = %e, "Backend request failed");
            ClientError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body
                .message
                .or(body.code)
                .unwrap_or_else(|| format!("Backend error: {status}")),
            Err(_) => format!("Backend error: {status}"),
        };
        debug!(status = %status, message = %message, "Backend returned an error");
        Err(ClientError::from_status(status, message))
    }

    async fn decode<R: DeserializeOwned>(response: Response) -> ClientResult<R> {
        response
            .json::<R>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ClientResult<R> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    /// GET with explicit query pairs; repeated keys are allowed, which the
    /// checklist endpoint relies on.
    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<R> {
        let response = self
            .execute(self.request(Method::GET, path).query(query))
            .await?;
        Self::decode(response).await
    }

    /// Binary body, used for the PDF endpoints.
    pub async fn get_bytes(&self, path: &str) -> ClientResult<Vec<u8>> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    pub async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ClientResult<R> {
        let response = self
            .execute(self.request(Method::POST, path).json(body))
            .await?;
        Self::decode(response).await
    }

    /// POST where the response body is irrelevant or empty.
    pub async fn post_unit<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ClientResult<()> {
        self.execute(self.request(Method::POST, path).json(body))
            .await?;
        Ok(())
    }

    /// Bodyless POST, with optional query pairs.
    pub async fn post_empty(&self, path: &str, query: &[(String, String)]) -> ClientResult<()> {
        self.execute(self.request(Method::POST, path).query(query))
            .await?;
        Ok(())
    }

    pub async fn post_empty_json<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<R> {
        let response = self
            .execute(self.request(Method::POST, path).query(query))
            .await?;
        Self::decode(response).await
    }

    pub async fn put<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ClientResult<R> {
        let response = self
            .execute(self.request(Method::PUT, path).json(body))
            .await?;
        Self::decode(response).await
    }

    pub async fn put_unit<T: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &T,
    ) -> ClientResult<()> {
        self.execute(self.request(Method::PUT, path).query(query).json(body))
            .await?;
        Ok(())
    }

    pub async fn patch_unit<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ClientResult<()> {
        self.execute(self.request(Method::PATCH, path).json(body))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.execute(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    /// Single-file multipart upload; no retry, the caller surfaces failures.
    pub async fn upload(
        &self,
        path: &str,
        field: &str,
        file_name: &str,
        bytes: Vec<u8>,
        mime: &str,
    ) -> ClientResult<()> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|e| ClientError::BadRequest(format!("Invalid mime type: {e}")))?;
        let form = Form::new().part(field.to_string(), part);
        self.execute(self.request(Method::POST, path).multipart(form))
            .await?;
        Ok(())
    }
}
