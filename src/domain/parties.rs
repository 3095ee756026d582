use serde::{Deserialize, Serialize};

/// Pickup- or delivery-side company (shipper / consignee).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub id: Option<i64>,
    pub company_name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
}

/// Billing client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    pub id: Option<i64>,
    pub company_name: Option<String>,
    pub contact: Option<String>,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub accounting_email: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
}

/// Trucking company moving the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Carrier {
    pub id: Option<i64>,
    pub company_name: Option<String>,
    pub dispatcher: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub company_number: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Equipment {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Suggestion pair fed to the autocomplete pickers.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: i64,
    pub label: String,
}

impl Party {
    pub fn suggestion(&self) -> Option<Suggestion> {
        Some(Suggestion {
            id: self.id?,
            label: self.company_name.clone().unwrap_or_default(),
        })
    }
}

impl Client {
    pub fn suggestion(&self) -> Option<Suggestion> {
        Some(Suggestion {
            id: self.id?,
            label: self.company_name.clone().unwrap_or_default(),
        })
    }
}

impl Carrier {
    pub fn suggestion(&self) -> Option<Suggestion> {
        Some(Suggestion {
            id: self.id?,
            label: self.company_name.clone().unwrap_or_default(),
        })
    }
}
