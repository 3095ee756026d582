use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customs::CustomsInfo;
use super::parties::{Carrier, Client, Equipment, Party};

/// Canonical load lifecycle states.
///
/// The backend has accumulated legacy spellings and case variants over time;
/// everything read off the wire goes through [`LoadStatus::normalize`] before
/// it is displayed or compared.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoadStatus {
    Quoting,
    Confirmed,
    PickedUp,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
    Lost,
}

impl Default for LoadStatus {
    fn default() -> Self {
        Self::Quoting
    }
}

impl LoadStatus {
    pub const ALL: [LoadStatus; 7] = [
        Self::Quoting,
        Self::Confirmed,
        Self::PickedUp,
        Self::InTransit,
        Self::Delivered,
        Self::Cancelled,
        Self::Lost,
    ];

    /// Display label, which is also the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quoting => "Quoting",
            Self::Confirmed => "Confirmed",
            Self::PickedUp => "PickedUp",
            Self::InTransit => "In Transit",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Lost => "Lost",
        }
    }

    /// Total normalization: any known alias (case-insensitive, including the
    /// US "canceled" spelling) maps to its canonical state, everything else
    /// falls back to `Quoting`.
    pub fn normalize(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "quoting" => Self::Quoting,
            "confirmed" => Self::Confirmed,
            "pickedup" | "picked up" => Self::PickedUp,
            "in transit" | "intransit" => Self::InTransit,
            "delivered" => Self::Delivered,
            "cancelled" | "canceled" => Self::Cancelled,
            "lost" => Self::Lost,
            _ => Self::Quoting,
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment-responsibility classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodType {
    Collect,
    Cod,
    Prepaid,
}

impl Default for CodType {
    fn default() -> Self {
        Self::Collect
    }
}

/// Less-than-truckload vs full-truckload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipmentType {
    Ltl,
    Ftl,
}

impl ShipmentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ltl => "LTL",
            Self::Ftl => "FTL",
        }
    }
}

/// Load record as the backend returns it.
///
/// Party sub-objects come back nested (`pickUp`, `delivery`, `carrier`,
/// `client`); the flat freight fields here are the legacy derived ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Load {
    pub id: Option<i64>,
    pub status: Option<String>,
    pub tracking_number: Option<String>,
    pub purchase_order: Option<String>,

    pub pick_up: Option<Party>,
    pub delivery: Option<Party>,
    pub carrier: Option<Carrier>,
    pub client: Option<Client>,
    pub client_id: Option<i64>,
    pub equipements: Option<Vec<Equipment>>,

    #[serde(rename = "type")]
    pub shipment_type: Option<String>,
    pub load_type: Option<String>,
    pub dimensions: Option<String>,
    pub quantity: Option<String>,
    pub weight: Option<String>,

    pub pickup_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub shipping_hours: Option<String>,
    pub receiving_hours: Option<String>,
    pub start_shipping_hours: Option<String>,
    pub end_shipping_hours: Option<String>,
    pub start_receiving_hours: Option<String>,
    pub end_receiving_hours: Option<String>,

    pub price: Option<f64>,
    pub cost: Option<f64>,
    pub price_additional_charges: Option<f64>,
    pub cost_additional_charges: Option<f64>,
    pub total_price: Option<f64>,
    pub total_cost: Option<f64>,
    pub profit: Option<f64>,
    pub profit_pourcentage: Option<String>,

    pub appointment: Option<String>,
    pub cod_type: Option<String>,
    pub additional_information: Option<String>,
    pub additional_shipper: Option<String>,

    // Server-generated, read-only in the editor
    pub pickup_number: Option<String>,
    pub dropoff_number: Option<String>,

    pub customs: Option<CustomsInfo>,
}

/// Carrier reference as submitted with a load: id plus the rating captured
/// at delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarrierRef {
    pub id: Option<i64>,
    pub rating: f64,
}

/// Submit DTO for create/update.
///
/// Numbers are coerced before they land here; `dimensions`/`weight`/
/// `quantity` are outputs of freight aggregation when freight items exist.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub status: LoadStatus,
    pub tracking_number: String,
    pub purchase_order: String,

    pub client_id: Option<i64>,
    pub pick_up_id: Option<i64>,
    pub delivery_id: Option<i64>,
    pub equipement_ids: Vec<i64>,

    #[serde(rename = "type")]
    pub shipment_type: Option<ShipmentType>,
    pub load_type: String,
    pub dimensions: String,
    pub quantity: String,
    pub weight: String,

    pub pickup_date: Option<String>,
    pub delivery_date: Option<String>,
    pub shipping_hours: String,
    pub receiving_hours: String,
    pub start_shipping_hours: String,
    pub end_shipping_hours: String,
    pub start_receiving_hours: String,
    pub end_receiving_hours: String,

    pub price: f64,
    pub cost: f64,
    pub price_additional_charges: f64,
    pub cost_additional_charges: f64,
    pub total_price: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub profit_pourcentage: String,

    pub appointment: String,
    pub cod_type: CodType,
    pub additional_information: String,
    pub additional_shipper: String,

    pub carrier: CarrierRef,
}

/// Per-status counts for the dashboard.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadSummary {
    pub total: i64,
    pub quoting: i64,
    pub confirmed: i64,
    pub picked_up: i64,
    pub in_transit: i64,
    pub delivered: i64,
    pub cancelled: i64,
    pub lost: i64,
}

/// One entry in a load's updates feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadUpdate {
    pub id: Option<i64>,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for `GET /loads/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_maps_known_aliases_to_canonical() {
        for input in ["DELIVERED", "delivered", "Delivered", " delivered "] {
            assert_eq!(LoadStatus::normalize(input), LoadStatus::Delivered);
        }
        assert_eq!(LoadStatus::normalize("CANCELED"), LoadStatus::Cancelled);
        assert_eq!(LoadStatus::normalize("cancelled"), LoadStatus::Cancelled);
        assert_eq!(LoadStatus::normalize("in transit"), LoadStatus::InTransit);
        assert_eq!(LoadStatus::normalize("PickedUp"), LoadStatus::PickedUp);
    }

    #[test]
    fn normalize_defaults_unknown_to_quoting() {
        assert_eq!(LoadStatus::normalize(""), LoadStatus::Quoting);
        assert_eq!(LoadStatus::normalize("On Hold"), LoadStatus::Quoting);
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in LoadStatus::ALL {
            assert_eq!(LoadStatus::normalize(s.label()), s);
        }
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&LoadStatus::InTransit).unwrap();
        assert_eq!(json, "\"In Transit\"");
    }

    #[test]
    fn cod_type_uses_uppercase_wire_values() {
        assert_eq!(serde_json::to_string(&CodType::Collect).unwrap(), "\"COLLECT\"");
        let parsed: CodType = serde_json::from_str("\"PREPAID\"").unwrap();
        assert_eq!(parsed, CodType::Prepaid);
    }
}
