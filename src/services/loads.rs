//! Loads endpoints: CRUD, status, updates feed, dashboard summary, customs.

use serde::Serialize;
use serde_json::json;

use crate::domain::{CustomsInfo, Load, LoadPayload, LoadStatus, LoadSummary, LoadUpdate, StatusResponse};
use crate::error::ClientResult;

use super::api_client::ApiClient;

#[derive(Clone)]
pub struct LoadsService {
    api: ApiClient,
}

#[derive(Serialize)]
struct StatusBody {
    status: LoadStatus,
}

impl LoadsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ClientResult<Vec<Load>> {
        self.api.get("/loads").await
    }

    pub async fn get(&self, id: i64) -> ClientResult<Load> {
        self.api.get(&format!("/loads/{id}")).await
    }

    pub async fn create(&self, payload: &LoadPayload) -> ClientResult<Load> {
        self.api.post("/loads", payload).await
    }

    pub async fn update(&self, id: i64, payload: &LoadPayload) -> ClientResult<Load> {
        self.api.put(&format!("/loads/{id}"), payload).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.api.delete(&format!("/loads/{id}")).await
    }

    /// Display id the next created load will get.
    pub async fn next_id(&self) -> ClientResult<i64> {
        self.api.get("/loads/next-id").await
    }

    /// Current status only; polled while a load is open in the editor.
    pub async fn status(&self, id: i64) -> ClientResult<LoadStatus> {
        let body: StatusResponse = self.api.get(&format!("/loads/{id}/status")).await?;
        Ok(LoadStatus::normalize(body.status.as_deref().unwrap_or("")))
    }

    pub async fn set_status(&self, id: i64, status: LoadStatus) -> ClientResult<()> {
        self.api
            .patch_unit(&format!("/loads/{id}/status"), &StatusBody { status })
            .await
    }

    pub async fn updates(&self, id: i64) -> ClientResult<Vec<LoadUpdate>> {
        self.api.get(&format!("/loads/{id}/updates")).await
    }

    pub async fn post_update(&self, id: i64, message: &str) -> ClientResult<()> {
        self.api
            .post_unit(&format!("/loads/{id}/updates"), &json!({ "message": message }))
            .await
    }

    /// Per-status counts for the dashboard tiles.
    pub async fn summary(&self) -> ClientResult<LoadSummary> {
        self.api.get("/loads/loads/summary").await
    }

    pub async fn search_by_status(&self, status: LoadStatus) -> ClientResult<Vec<Load>> {
        let query = [("status".to_string(), status.label().to_string())];
        self.api.get_with_query("/loads/search", &query).await
    }

    pub async fn customs(&self, id: i64) -> ClientResult<CustomsInfo> {
        self.api.get(&format!("/loads/{id}/customs")).await
    }

    pub async fn set_customs(&self, id: i64, customs: &CustomsInfo) -> ClientResult<()> {
        self.api
            .put_unit(&format!("/loads/{id}/customs"), &[], customs)
            .await
    }
}
