use serde::{Deserialize, Serialize};

/// Whether an additional charge raises revenue or expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChargeKind {
    Price,
    Cost,
}

impl ChargeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Cost => "cost",
        }
    }
}

/// A named extra fee layered onto a load's base price or base cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdditionalCharge {
    pub name: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: ChargeKind,
}

impl AdditionalCharge {
    pub fn blank(kind: ChargeKind) -> Self {
        Self {
            name: String::new(),
            amount: 0.0,
            kind,
        }
    }

    /// A row is blank when it carries neither a name nor an amount.
    pub fn is_blank(&self) -> bool {
        self.amount == 0.0 && self.name.trim().is_empty()
    }
}
