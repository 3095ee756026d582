//! The load-editor form: one aggregate value with many independently
//! addressable fields, several denormalized party snapshots, and derived
//! sub-values that are recomputed after every mutation.

use chrono::NaiveDate;

use crate::domain::{Carrier, Client, CodType, CustomsInfo, Load, LoadStatus, Party, ShipmentType};

use super::freight::FreightItem;
use super::totals::FinancialTotals;

/// Provinces/states selectable for a given country. Unknown countries have
/// no province list, and a province is only meaningful relative to its
/// country.
pub fn provinces_for(country: &str) -> &'static [&'static str] {
    match country.to_uppercase().as_str() {
        "CANADA" => &[
            "Ontario",
            "Quebec",
            "British Columbia",
            "Alberta",
            "Manitoba",
            "New Brunswick",
            "Newfoundland and Labrador",
            "Nova Scotia",
            "Prince Edward Island",
            "Saskatchewan",
        ],
        "USA" => &[
            "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
            "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
            "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
            "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada",
            "New Hampshire", "New Jersey", "New Mexico", "New York", "North Carolina",
            "North Dakota", "Ohio", "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island",
            "South Carolina", "South Dakota", "Tennessee", "Texas", "Utah", "Vermont", "Virginia",
            "Washington", "West Virginia", "Wisconsin", "Wyoming",
        ],
        _ => &[],
    }
}

/// Ephemeral client-side state for a single load edit session.
///
/// Created empty for a new load or hydrated from a backend record; mutated
/// only through user input and API hydration; discarded on navigation away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadForm {
    // Identity
    pub id: Option<i64>,
    pub status: LoadStatus,
    pub tracking_number: String,
    pub purchase_order: String,

    // Client snapshot
    pub client_id: Option<i64>,
    pub client_company_name: String,
    pub client_contact: String,
    pub client_phone_number: String,
    pub client_email: String,
    pub client_accounting_email: String,
    pub client_address: String,
    pub client_postal_code: String,
    pub client_province: String,
    pub client_country: String,

    // Shipper snapshot
    pub shipper_id: Option<i64>,
    pub shipper_company_name: String,
    pub shipper_contact: String,
    pub shipper_email: String,
    pub shipper_phone_number: String,
    pub shipper_address: String,
    pub shipper_city: String,
    pub shipper_postal_code: String,
    pub shipper_province: String,
    pub shipper_country: String,

    // Consignee snapshot
    pub consignee_id: Option<i64>,
    pub consignee_company_name: String,
    pub consignee_contact: String,
    pub consignee_phone_number: String,
    pub consignee_address: String,
    pub consignee_city: String,
    pub consignee_postal_code: String,
    pub consignee_province: String,
    pub consignee_country: String,

    // Carrier snapshot
    pub carrier_id: Option<i64>,
    pub carrier_company_name: String,
    pub carrier_dispatcher: String,
    pub carrier_email: String,
    pub carrier_address: String,
    pub carrier_company_number: String,

    // Equipment multi-select (no duplicates, insertion order)
    pub equipment_ids: Vec<i64>,

    // Load meta
    pub shipment_type: Option<ShipmentType>,
    pub load_type: String,
    /// Legacy flat fields; derived from `freight_items` at submit time.
    pub dimensions: String,
    pub quantity: String,
    pub weight: String,

    // Dates / times
    pub pickup_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub shipping_hours: String,
    pub receiving_hours: String,
    pub start_shipping_hours: String,
    pub end_shipping_hours: String,
    pub start_receiving_hours: String,
    pub end_receiving_hours: String,

    // Money: base inputs as entered, derived fields always recomputed
    pub price: String,
    pub cost: String,
    pub price_additional_charges: String,
    pub cost_additional_charges: String,
    pub total_price: String,
    pub total_cost: String,
    pub profit: String,
    pub profit_pourcentage: String,

    // Other
    pub appointment: String,
    pub cod_type: CodType,
    pub additional_information: String,
    pub additional_shipper: String,
    /// Carrier rating captured at delivery, 0-5.
    pub rating: f64,

    // Server-generated, read-only here
    pub pickup_number: String,
    pub dropoff_number: String,

    pub freight_items: Vec<FreightItem>,
    pub customs: CustomsInfo,
}

fn opt_str(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

impl LoadForm {
    pub fn new() -> Self {
        let mut form = Self {
            price: "0".into(),
            cost: "0".into(),
            price_additional_charges: "0".into(),
            cost_additional_charges: "0".into(),
            total_price: "0".into(),
            total_cost: "0".into(),
            profit: "0".into(),
            profit_pourcentage: "0".into(),
            ..Self::default()
        };
        form.recompute_totals();
        form
    }

    // ------------------------------------------------------------------
    // Derived totals
    // ------------------------------------------------------------------

    /// Recompute the four derived financial fields from their inputs.
    ///
    /// Idempotent: returns false and writes nothing when the formatted
    /// outputs already match, so callers reacting to changes don't thrash.
    pub fn recompute_totals(&mut self) -> bool {
        let t = FinancialTotals::from_strings(
            &self.price,
            &self.cost,
            &self.price_additional_charges,
            &self.cost_additional_charges,
        );
        let next = (
            format!("{:.2}", t.total_price),
            format!("{:.2}", t.total_cost),
            format!("{:.2}", t.profit),
            format!("{:.2}", t.profit_pourcentage),
        );
        let changed = next.0 != self.total_price
            || next.1 != self.total_cost
            || next.2 != self.profit
            || next.3 != self.profit_pourcentage;
        if changed {
            (self.total_price, self.total_cost, self.profit, self.profit_pourcentage) = next;
        }
        changed
    }

    pub fn set_price(&mut self, value: impl Into<String>) {
        self.price = value.into();
        self.recompute_totals();
    }

    pub fn set_cost(&mut self, value: impl Into<String>) {
        self.cost = value.into();
        self.recompute_totals();
    }

    pub fn set_price_additional_charges(&mut self, value: impl Into<String>) {
        self.price_additional_charges = value.into();
        self.recompute_totals();
    }

    pub fn set_cost_additional_charges(&mut self, value: impl Into<String>) {
        self.cost_additional_charges = value.into();
        self.recompute_totals();
    }

    // ------------------------------------------------------------------
    // Equipment
    // ------------------------------------------------------------------

    /// Replace the equipment membership exactly, deduplicating while keeping
    /// first-occurrence order.
    pub fn set_equipment_ids(&mut self, ids: impl IntoIterator<Item = i64>) {
        let mut seen = Vec::new();
        for id in ids {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        self.equipment_ids = seen;
    }

    // ------------------------------------------------------------------
    // Country / province dependency
    // ------------------------------------------------------------------

    pub fn set_shipper_country(&mut self, country: impl Into<String>) {
        let country = country.into();
        if country != self.shipper_country {
            self.shipper_province.clear();
        }
        self.shipper_country = country;
    }

    pub fn set_consignee_country(&mut self, country: impl Into<String>) {
        let country = country.into();
        if country != self.consignee_country {
            self.consignee_province.clear();
        }
        self.consignee_country = country;
    }

    pub fn set_client_country(&mut self, country: impl Into<String>) {
        let country = country.into();
        if country != self.client_country {
            self.client_province.clear();
        }
        self.client_country = country;
    }

    // ------------------------------------------------------------------
    // Party hydration / clearing
    // ------------------------------------------------------------------

    pub fn apply_shipper(&mut self, p: &Party) {
        self.shipper_id = p.id;
        self.shipper_company_name = opt_str(&p.company_name);
        self.shipper_contact = opt_str(&p.contact);
        self.shipper_email = opt_str(&p.email);
        self.shipper_phone_number = opt_str(&p.phone_number);
        self.shipper_address = opt_str(&p.address);
        self.shipper_city = opt_str(&p.city);
        self.shipper_postal_code = opt_str(&p.postal_code);
        self.shipper_province = opt_str(&p.province);
        self.shipper_country = opt_str(&p.country);
    }

    /// Clearing the picker text resets every dependent field, not just the
    /// name.
    pub fn clear_shipper(&mut self) {
        self.apply_shipper(&Party::default());
    }

    pub fn apply_consignee(&mut self, p: &Party) {
        self.consignee_id = p.id;
        self.consignee_company_name = opt_str(&p.company_name);
        self.consignee_contact = opt_str(&p.contact);
        self.consignee_phone_number = opt_str(&p.phone_number);
        self.consignee_address = opt_str(&p.address);
        self.consignee_city = opt_str(&p.city);
        self.consignee_postal_code = opt_str(&p.postal_code);
        self.consignee_province = opt_str(&p.province);
        self.consignee_country = opt_str(&p.country);
    }

    pub fn clear_consignee(&mut self) {
        self.apply_consignee(&Party::default());
    }

    pub fn apply_carrier(&mut self, c: &Carrier) {
        self.carrier_id = c.id;
        self.carrier_company_name = opt_str(&c.company_name);
        self.carrier_dispatcher = opt_str(&c.dispatcher);
        self.carrier_email = opt_str(&c.email);
        self.carrier_address = opt_str(&c.address);
        self.carrier_company_number = opt_str(&c.company_number);
    }

    pub fn clear_carrier(&mut self) {
        self.apply_carrier(&Carrier::default());
    }

    pub fn apply_client(&mut self, c: &Client) {
        self.client_id = c.id;
        self.client_company_name = opt_str(&c.company_name);
        self.client_contact = opt_str(&c.contact);
        self.client_phone_number = opt_str(&c.contact_number);
        self.client_email = opt_str(&c.email);
        self.client_accounting_email = opt_str(&c.accounting_email);
        self.client_address = opt_str(&c.address);
        self.client_postal_code = opt_str(&c.postal_code);
        self.client_province = opt_str(&c.province).trim().to_string();
        self.client_country = opt_str(&c.country);
    }

    pub fn clear_client(&mut self) {
        self.apply_client(&Client::default());
    }

    // ------------------------------------------------------------------
    // Hydration from a backend record
    // ------------------------------------------------------------------

    /// Map a fetched load into a fresh form, normalizing status and
    /// recomputing totals. Missing optionals become empty fields.
    pub fn from_load(load: &Load) -> Self {
        let mut form = Self::new();
        form.id = load.id;
        form.status = LoadStatus::normalize(load.status.as_deref().unwrap_or(""));
        form.tracking_number = opt_str(&load.tracking_number);
        form.purchase_order = opt_str(&load.purchase_order);

        if let Some(p) = &load.pick_up {
            form.apply_shipper(p);
        }
        if let Some(p) = &load.delivery {
            form.apply_consignee(p);
        }
        if let Some(c) = &load.carrier {
            form.apply_carrier(c);
            form.rating = c.rating.unwrap_or(0.0);
        }
        if let Some(c) = &load.client {
            form.apply_client(c);
        } else {
            form.client_id = load.client_id;
        }

        if let Some(eqs) = &load.equipements {
            form.set_equipment_ids(eqs.iter().map(|e| e.id));
        }

        form.shipment_type = match load.shipment_type.as_deref() {
            Some("LTL") => Some(ShipmentType::Ltl),
            Some("FTL") => Some(ShipmentType::Ftl),
            _ => None,
        };
        form.load_type = opt_str(&load.load_type);
        form.dimensions = opt_str(&load.dimensions);
        form.quantity = opt_str(&load.quantity);
        form.weight = opt_str(&load.weight);

        form.pickup_date = load.pickup_date.map(|d| d.date_naive());
        form.delivery_date = load.delivery_date.map(|d| d.date_naive());
        form.shipping_hours = opt_str(&load.shipping_hours);
        form.receiving_hours = opt_str(&load.receiving_hours);
        form.start_shipping_hours = opt_str(&load.start_shipping_hours);
        form.end_shipping_hours = opt_str(&load.end_shipping_hours);
        form.start_receiving_hours = opt_str(&load.start_receiving_hours);
        form.end_receiving_hours = opt_str(&load.end_receiving_hours);

        form.price = load.price.map(|v| v.to_string()).unwrap_or_else(|| "0".into());
        form.cost = load.cost.map(|v| v.to_string()).unwrap_or_else(|| "0".into());
        form.price_additional_charges = load
            .price_additional_charges
            .map(|v| v.to_string())
            .unwrap_or_else(|| "0".into());
        form.cost_additional_charges = load
            .cost_additional_charges
            .map(|v| v.to_string())
            .unwrap_or_else(|| "0".into());

        form.appointment = opt_str(&load.appointment);
        form.cod_type = match load.cod_type.as_deref() {
            Some("COD") => CodType::Cod,
            Some("PREPAID") => CodType::Prepaid,
            _ => CodType::Collect,
        };
        form.additional_information = opt_str(&load.additional_information);
        form.additional_shipper = opt_str(&load.additional_shipper);

        form.pickup_number = opt_str(&load.pickup_number);
        form.dropoff_number = opt_str(&load.dropoff_number);
        form.customs = load.customs.clone().unwrap_or_default();

        form.recompute_totals();
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recompute_is_idempotent_and_write_skipped() {
        let mut form = LoadForm::new();
        form.set_price("1000");
        form.set_price_additional_charges("150");
        form.set_cost("700");
        form.set_cost_additional_charges("50");
        assert_eq!(form.total_price, "1150.00");
        assert_eq!(form.total_cost, "750.00");
        assert_eq!(form.profit, "400.00");
        assert_eq!(form.profit_pourcentage, "34.78");
        // unchanged inputs => no further state change
        assert!(!form.recompute_totals());
    }

    #[test]
    fn new_load_scenario_without_freight() {
        let mut form = LoadForm::new();
        form.set_price("500");
        form.set_cost("300");
        assert_eq!(form.total_price, "500.00");
        assert_eq!(form.total_cost, "300.00");
        assert_eq!(form.profit, "200.00");
        assert_eq!(form.profit_pourcentage, "40.00");
    }

    #[test]
    fn changing_country_clears_dependent_province() {
        let mut form = LoadForm::new();
        form.set_shipper_country("CANADA");
        form.shipper_province = "Quebec".into();
        form.set_shipper_country("USA");
        assert_eq!(form.shipper_province, "");
        assert_eq!(form.shipper_country, "USA");
        // same country leaves province alone
        form.shipper_province = "Texas".into();
        form.set_shipper_country("USA");
        assert_eq!(form.shipper_province, "Texas");
    }

    #[test]
    fn clearing_a_picker_resets_every_dependent_field() {
        let mut form = LoadForm::new();
        form.apply_shipper(&Party {
            id: Some(7),
            company_name: Some("Acme Freight".into()),
            contact: Some("Jo".into()),
            email: Some("jo@acme.test".into()),
            phone_number: Some("555-0100".into()),
            address: Some("1 Dock Rd".into()),
            city: Some("Laval".into()),
            postal_code: Some("H7A 1A1".into()),
            province: Some("Quebec".into()),
            country: Some("CANADA".into()),
        });
        assert_eq!(form.shipper_id, Some(7));
        form.clear_shipper();
        assert_eq!(form.shipper_id, None);
        assert_eq!(form.shipper_company_name, "");
        assert_eq!(form.shipper_contact, "");
        assert_eq!(form.shipper_email, "");
        assert_eq!(form.shipper_phone_number, "");
        assert_eq!(form.shipper_address, "");
        assert_eq!(form.shipper_city, "");
        assert_eq!(form.shipper_postal_code, "");
        assert_eq!(form.shipper_province, "");
        assert_eq!(form.shipper_country, "");
    }

    #[test]
    fn equipment_ids_deduplicate_preserving_order() {
        let mut form = LoadForm::new();
        form.set_equipment_ids([3, 1, 3, 2, 1]);
        assert_eq!(form.equipment_ids, vec![3, 1, 2]);
    }

    #[test]
    fn provinces_depend_on_country() {
        assert!(provinces_for("CANADA").contains(&"Quebec"));
        assert!(provinces_for("usa").contains(&"Texas"));
        assert!(provinces_for("MEXICO").is_empty());
    }

    #[test]
    fn hydration_normalizes_status_and_recomputes() {
        let load = Load {
            id: Some(42),
            status: Some("DELIVERED".into()),
            price: Some(1000.0),
            cost: Some(700.0),
            price_additional_charges: Some(150.0),
            cost_additional_charges: Some(50.0),
            ..Load::default()
        };
        let form = LoadForm::from_load(&load);
        assert_eq!(form.id, Some(42));
        assert_eq!(form.status, LoadStatus::Delivered);
        assert_eq!(form.total_price, "1150.00");
        assert_eq!(form.profit_pourcentage, "34.78");
    }
}
