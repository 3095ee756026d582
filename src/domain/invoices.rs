use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Row in the accounting overview (`/api/invoices/overview`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceOverviewRow {
    pub id: Option<i64>,
    pub load_id: Option<i64>,
    pub client_name: Option<String>,
    pub carrier_name: Option<String>,
    pub amount: Option<f64>,
    pub status: Option<String>,
    pub issued_at: Option<NaiveDate>,
    pub due_at: Option<NaiveDate>,
    pub note: Option<String>,
}

/// Filters for the overview query; empty filters are simply omitted.
#[derive(Debug, Clone, Default)]
pub struct InvoiceOverviewFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
}

impl InvoiceOverviewFilter {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(d) = self.start_date {
            pairs.push(("startDate", d.to_string()));
        }
        if let Some(d) = self.end_date {
            pairs.push(("endDate", d.to_string()));
        }
        if let Some(s) = &self.status {
            if !s.is_empty() {
                pairs.push(("status", s.clone()));
            }
        }
        pairs
    }
}
