//! Checklist read path: assemble the filter query from the form, fetch the
//! applicable reminder tasks, and track per-load completion locally.
//!
//! The backend controller expects every parameter present on every call, so
//! unset filters are sent as empty string / zero rather than omitted.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::{Checklist, TaskItem};
use crate::error::ClientResult;
use crate::form::LoadForm;

use super::api_client::ApiClient;

/// Filter set derived from the load editor's current route, equipment, type
/// and client selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistQuery {
    pub origin: String,
    pub destination: String,
    pub types: Vec<String>,
    pub equipment_ids: Vec<i64>,
    pub origin_province: String,
    pub destination_province: String,
    pub client_id: Option<i64>,
}

impl ChecklistQuery {
    pub fn from_form(form: &LoadForm) -> Self {
        Self {
            origin: form.shipper_country.to_uppercase(),
            destination: form.consignee_country.to_uppercase(),
            types: form
                .shipment_type
                .map(|t| vec![t.label().to_string()])
                .unwrap_or_default(),
            equipment_ids: form.equipment_ids.clone(),
            origin_province: form.shipper_province.clone(),
            destination_province: form.consignee_province.clone(),
            client_id: form.client_id,
        }
    }

    /// The four core filters must all be present before a fetch is useful.
    pub fn is_actionable(&self) -> bool {
        !self.origin.is_empty()
            && !self.destination.is_empty()
            && !self.types.is_empty()
            && !self.equipment_ids.is_empty()
    }

    /// Query pairs with multi-values repeated and the always-present
    /// parameters sent even when empty ("" / 0).
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("origin".to_string(), self.origin.clone()),
            ("destination".to_string(), self.destination.clone()),
        ];
        for t in &self.types {
            pairs.push(("type".to_string(), t.clone()));
        }
        for id in &self.equipment_ids {
            pairs.push(("equipmentIds".to_string(), id.to_string()));
        }
        pairs.push(("originProvince".to_string(), self.origin_province.clone()));
        pairs.push(("destinationProvince".to_string(), self.destination_province.clone()));
        pairs.push(("clientIds".to_string(), self.client_id.unwrap_or(0).to_string()));
        pairs
    }
}

/// Count-completed-per-load persistence. Only the count is stored, never the
/// task content, mirroring what the screens keep in local storage.
pub struct ProgressStore {
    path: PathBuf,
    counts: Mutex<HashMap<String, usize>>,
}

impl ProgressStore {
    pub fn open(path: PathBuf) -> Self {
        let counts = fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        Self {
            path,
            counts: Mutex::new(counts),
        }
    }

    pub fn completed(&self, load_key: &str) -> usize {
        self.counts.lock().get(load_key).copied().unwrap_or(0)
    }

    pub fn set_completed(&self, load_key: &str, count: usize) {
        let mut counts = self.counts.lock();
        counts.insert(load_key.to_string(), count);
        if let Ok(body) = serde_json::to_string(&*counts) {
            if let Err(e) = fs::write(&self.path, body) {
                warn!(path = %self.path.display(), error = %e, "Failed to persist checklist progress");
            }
        }
    }

    /// Clamp a stored count when the task list shrank since last visit.
    pub fn clamp(&self, load_key: &str, total: usize) -> usize {
        let current = self.completed(load_key);
        if current > total {
            self.set_completed(load_key, total);
            total
        } else {
            current
        }
    }
}

pub struct ChecklistService {
    api: ApiClient,
    store: ProgressStore,
}

impl ChecklistService {
    pub fn new(api: ApiClient, store: ProgressStore) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    /// Fetch applicable tasks; a non-actionable query means there is nothing
    /// to show and no request is made.
    pub async fn tasks(&self, query: &ChecklistQuery) -> ClientResult<Vec<TaskItem>> {
        if !query.is_actionable() {
            debug!("Checklist filters incomplete; skipping fetch");
            return Ok(Vec::new());
        }
        self.api
            .get_with_query("/api/admin/checklists/load", &query.to_query_pairs())
            .await
    }

    /// The visible window: a fixed-size slice that advances as tasks are
    /// marked done.
    pub fn visible<'a>(tasks: &'a [TaskItem], completed: usize, window: usize) -> &'a [TaskItem] {
        let start = completed.min(tasks.len());
        let end = (completed + window).min(tasks.len());
        &tasks[start..end]
    }

    /// Mark the next task done. "Request Quote" additionally fires the
    /// send-quote side effect; its failure is logged, not fatal, and the
    /// progress still advances.
    pub async fn complete_task(&self, load_key: &str, item: &TaskItem, total: usize) -> usize {
        if item.is_quote_request() {
            if let Some(id) = item.checklist_id {
                if let Err(e) = self
                    .api
                    .post_empty(&format!("/api/admin/checklists/{id}/send-quote"), &[])
                    .await
                {
                    warn!(checklist_id = id, error = %e, "Failed to send quote request");
                }
            }
        }
        let next = (self.store.completed(load_key) + 1).min(total);
        self.store.set_completed(load_key, next);
        next
    }

    // ------------------------------------------------------------------
    // Admin (checklist builder)
    // ------------------------------------------------------------------

    pub async fn list_checklists(&self) -> ClientResult<Vec<Checklist>> {
        self.api.get("/api/admin/checklists").await
    }

    pub async fn get_checklist(&self, id: i64) -> ClientResult<Checklist> {
        self.api.get(&format!("/api/admin/checklists/{id}")).await
    }

    pub async fn create_checklist(&self, checklist: &Checklist) -> ClientResult<Checklist> {
        self.api.post("/api/admin/checklists", checklist).await
    }

    pub async fn delete_checklist(&self, id: i64) -> ClientResult<()> {
        self.api.delete(&format!("/api/admin/checklists/{id}")).await
    }

    /// Convenience for the task screens: free-text tasks attached to a load.
    pub async fn add_task(&self, checklist_id: i64, task: &str) -> ClientResult<()> {
        self.api
            .post_unit(
                &format!("/api/admin/checklists/{checklist_id}"),
                &json!({ "task": task }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipmentType;
    use pretty_assertions::assert_eq;

    fn form_with_filters() -> LoadForm {
        let mut form = LoadForm::new();
        form.set_shipper_country("Canada");
        form.shipper_province = "Quebec".into();
        form.set_consignee_country("usa");
        form.shipment_type = Some(ShipmentType::Ltl);
        form.set_equipment_ids([4, 7]);
        form
    }

    #[test]
    fn query_uppercases_countries_and_repeats_multi_values() {
        let query = ChecklistQuery::from_form(&form_with_filters());
        assert!(query.is_actionable());
        let pairs = query.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("origin".to_string(), "CANADA".to_string()),
                ("destination".to_string(), "USA".to_string()),
                ("type".to_string(), "LTL".to_string()),
                ("equipmentIds".to_string(), "4".to_string()),
                ("equipmentIds".to_string(), "7".to_string()),
                ("originProvince".to_string(), "Quebec".to_string()),
                ("destinationProvince".to_string(), "".to_string()),
                ("clientIds".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn absent_filters_still_emit_every_expected_key() {
        let query = ChecklistQuery::default();
        let pairs = query.to_query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["origin", "destination", "originProvince", "destinationProvince", "clientIds"]
        );
        assert!(!query.is_actionable());
    }

    #[test]
    fn visible_window_advances_with_completion() {
        let tasks: Vec<TaskItem> = (0..5)
            .map(|i| TaskItem { checklist_id: None, task: format!("t{i}") })
            .collect();
        assert_eq!(ChecklistService::visible(&tasks, 0, 2).len(), 2);
        let w = ChecklistService::visible(&tasks, 4, 2);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].task, "t4");
        assert_eq!(ChecklistService::visible(&tasks, 9, 2).len(), 0);
    }

    #[test]
    fn progress_store_round_trips_and_clamps() {
        let dir = std::env::temp_dir().join(format!("loaddesk-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("progress.json");

        let store = ProgressStore::open(path.clone());
        assert_eq!(store.completed("42"), 0);
        store.set_completed("42", 3);
        assert_eq!(store.completed("42"), 3);

        // reload from disk
        let reloaded = ProgressStore::open(path);
        assert_eq!(reloaded.completed("42"), 3);
        assert_eq!(reloaded.clamp("42", 2), 2);
        assert_eq!(reloaded.completed("42"), 2);
    }
}
