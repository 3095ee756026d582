//! Accounting overview and invoice status updates.

use crate::domain::{InvoiceOverviewFilter, InvoiceOverviewRow};
use crate::error::ClientResult;

use super::api_client::ApiClient;

#[derive(Clone)]
pub struct InvoicesService {
    api: ApiClient,
}

impl InvoicesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn overview(&self, filter: &InvoiceOverviewFilter) -> ClientResult<Vec<InvoiceOverviewRow>> {
        let query: Vec<(String, String)> = filter
            .to_query_pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        self.api.get_with_query("/api/invoices/overview", &query).await
    }

    pub async fn set_status(
        &self,
        invoice_id: i64,
        status: &str,
        role: &str,
        note: Option<&str>,
    ) -> ClientResult<()> {
        let mut query = vec![
            ("status".to_string(), status.to_string()),
            ("role".to_string(), role.to_string()),
        ];
        if let Some(note) = note {
            query.push(("note".to_string(), note.to_string()));
        }
        self.api
            .put_unit(&format!("/api/invoices/{invoice_id}/status"), &query, &())
            .await
    }
}
