//! Additional-charges editor: a side-loaded list of named charge/amount
//! pairs scoped to price or cost, fetched and persisted independently of the
//! main form, then folded back into the form's aggregate charge field.
//!
//! The persistence contract is a single replace call:
//! `PUT /loads/{id}/additional-charges?type={kind}` with the full cleaned
//! list for that kind.

use tracing::warn;

use crate::domain::{AdditionalCharge, ChargeKind};
use crate::error::ClientResult;
use crate::form::LoadForm;

use super::api_client::ApiClient;

/// Which column of a charge row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeField {
    Name,
    Amount,
}

/// Outcome of a save: the cleaned rows and their sum, which becomes the
/// form's aggregate field.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedCharges {
    pub rows: Vec<AdditionalCharge>,
    pub total: f64,
}

pub struct ChargesEditor {
    api: ApiClient,
    load_id: Option<i64>,
    kind: ChargeKind,
    pub rows: Vec<AdditionalCharge>,
}

fn charges_path(load_id: i64) -> String {
    format!("/loads/{load_id}/additional-charges")
}

fn kind_query(kind: ChargeKind) -> Vec<(String, String)> {
    vec![("type".to_string(), kind.as_str().to_string())]
}

impl ChargesEditor {
    /// Open the editor for one charge kind, fetching existing rows for a
    /// saved load. An unsaved load starts with an empty list.
    pub async fn open(api: ApiClient, load_id: Option<i64>, kind: ChargeKind) -> ClientResult<Self> {
        let rows = match load_id {
            Some(id) => {
                let fetched: Vec<AdditionalCharge> = api
                    .get_with_query(&charges_path(id), &kind_query(kind))
                    .await?;
                fetched.into_iter().filter(|c| !c.is_blank()).collect()
            }
            None => Vec::new(),
        };
        Ok(Self {
            api,
            load_id,
            kind,
            rows,
        })
    }

    pub fn kind(&self) -> ChargeKind {
        self.kind
    }

    /// Mutate one row locally. Amounts parse as floating point, defaulting
    /// to 0 on failure; the row's kind is forced to the editor's kind.
    pub fn edit(&mut self, index: usize, field: ChargeField, value: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            return;
        };
        match field {
            ChargeField::Name => row.name = value.to_string(),
            ChargeField::Amount => row.amount = value.trim().parse().unwrap_or(0.0),
        }
        row.kind = self.kind;
    }

    pub fn add_line(&mut self) {
        self.rows.push(AdditionalCharge::blank(self.kind));
    }

    pub fn remove_line(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Trim names and drop rows that carry neither a name nor an amount.
    pub fn sanitize(rows: &[AdditionalCharge]) -> Vec<AdditionalCharge> {
        rows.iter()
            .map(|c| AdditionalCharge {
                name: c.name.trim().to_string(),
                ..c.clone()
            })
            .filter(|c| !c.is_blank())
            .collect()
    }

    /// Persist the cleaned list (replace semantics) and report the rows and
    /// sum. A 401 propagates as `Unauthorized` so the caller can show the
    /// session-expired message; any failure leaves local rows untouched.
    pub async fn save(&mut self) -> ClientResult<SavedCharges> {
        let cleaned = Self::sanitize(&self.rows);

        if let Some(id) = self.load_id {
            self.api
                .put_unit(&charges_path(id), &kind_query(self.kind), &cleaned)
                .await?;
        }

        let total = cleaned.iter().map(|c| c.amount).sum();
        self.rows = cleaned.clone();
        Ok(SavedCharges { rows: cleaned, total })
    }

    /// Optimistically empty the list. The server-side clear is best effort:
    /// a failure is logged and the aggregate is still zeroed.
    pub async fn clear_all(&mut self) -> SavedCharges {
        self.rows.clear();
        if let Some(id) = self.load_id {
            let empty: Vec<AdditionalCharge> = Vec::new();
            if let Err(e) = self
                .api
                .put_unit(&charges_path(id), &kind_query(self.kind), &empty)
                .await
            {
                warn!(load_id = id, error = %e, "Failed to clear charges on server");
            }
        }
        SavedCharges {
            rows: Vec::new(),
            total: 0.0,
        }
    }

    /// Write a save/clear outcome into the form's aggregate field.
    pub fn apply_to_form(&self, saved: &SavedCharges, form: &mut LoadForm) {
        let total = saved.total.to_string();
        match self.kind {
            ChargeKind::Price => form.set_price_additional_charges(total),
            ChargeKind::Cost => form.set_cost_additional_charges(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn editor(kind: ChargeKind) -> ChargesEditor {
        ChargesEditor {
            api: ApiClient::new("http://localhost:0", 1).unwrap(),
            load_id: None,
            kind,
            rows: Vec::new(),
        }
    }

    #[test]
    fn sanitize_drops_blank_rows_and_trims_names() {
        let rows = vec![
            AdditionalCharge { name: "".into(), amount: 0.0, kind: ChargeKind::Price },
            AdditionalCharge { name: "  Fuel ".into(), amount: 25.0, kind: ChargeKind::Price },
            AdditionalCharge { name: "   ".into(), amount: 0.0, kind: ChargeKind::Price },
        ];
        let cleaned = ChargesEditor::sanitize(&rows);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].name, "Fuel");
        assert_eq!(cleaned[0].amount, 25.0);
    }

    #[test]
    fn named_zero_amount_rows_survive_sanitize() {
        let rows = vec![AdditionalCharge {
            name: "Waived fee".into(),
            amount: 0.0,
            kind: ChargeKind::Cost,
        }];
        assert_eq!(ChargesEditor::sanitize(&rows).len(), 1);
    }

    #[tokio::test]
    async fn save_on_unsaved_load_sums_locally() {
        let mut ed = editor(ChargeKind::Price);
        ed.add_line();
        ed.edit(0, ChargeField::Name, "Fuel");
        ed.edit(0, ChargeField::Amount, "25");
        ed.add_line(); // stays blank, dropped on save
        let saved = ed.save().await.unwrap();
        assert_eq!(saved.total, 25.0);
        assert_eq!(saved.rows.len(), 1);
        assert_eq!(ed.rows.len(), 1);
    }

    #[test]
    fn edit_parses_amounts_defaulting_to_zero() {
        let mut ed = editor(ChargeKind::Cost);
        ed.add_line();
        ed.edit(0, ChargeField::Amount, "12.5");
        assert_eq!(ed.rows[0].amount, 12.5);
        ed.edit(0, ChargeField::Amount, "not a number");
        assert_eq!(ed.rows[0].amount, 0.0);
        assert_eq!(ed.rows[0].kind, ChargeKind::Cost);
        // out-of-range edits are ignored
        ed.edit(5, ChargeField::Name, "ghost");
        assert_eq!(ed.rows.len(), 1);
    }

    #[test]
    fn remove_line_drops_immediately() {
        let mut ed = editor(ChargeKind::Price);
        ed.add_line();
        ed.add_line();
        ed.edit(1, ChargeField::Name, "keep");
        ed.remove_line(0);
        assert_eq!(ed.rows.len(), 1);
        assert_eq!(ed.rows[0].name, "keep");
    }

    #[test]
    fn aggregate_lands_in_the_matching_form_field() {
        let ed = editor(ChargeKind::Price);
        let mut form = LoadForm::new();
        form.set_price("100");
        ed.apply_to_form(
            &SavedCharges { rows: vec![], total: 25.0 },
            &mut form,
        );
        assert_eq!(form.price_additional_charges, "25");
        assert_eq!(form.total_price, "125.00");
    }
}
