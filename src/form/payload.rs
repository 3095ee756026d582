//! Form-to-payload conversion for submit.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{CarrierRef, LoadPayload};

use super::freight::{aggregate_freight, fmt_num};
use super::state::LoadForm;
use super::totals::coerce;

fn to_iso(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.and_time(NaiveTime::MIN).and_utc().to_rfc3339())
}

impl LoadForm {
    /// Serialize the form for `POST /loads` / `PUT /loads/{id}`.
    ///
    /// Money fields are coerced (invalid -> 0) and the legacy flat freight
    /// fields are overwritten with the freight aggregation, so they are
    /// write-only outputs here: empty/zero when there are no line items.
    pub fn to_payload(&self) -> LoadPayload {
        let totals = aggregate_freight(&self.freight_items);

        LoadPayload {
            id: self.id,
            status: self.status,
            tracking_number: self.tracking_number.clone(),
            purchase_order: self.purchase_order.clone(),

            client_id: self.client_id,
            pick_up_id: self.shipper_id,
            delivery_id: self.consignee_id,
            equipement_ids: self.equipment_ids.clone(),

            shipment_type: self.shipment_type,
            load_type: self.load_type.clone(),
            dimensions: totals.dimensions,
            quantity: fmt_num(totals.total_quantity),
            weight: fmt_num(totals.total_weight_lb),

            pickup_date: to_iso(self.pickup_date),
            delivery_date: to_iso(self.delivery_date),
            shipping_hours: self.shipping_hours.clone(),
            receiving_hours: self.receiving_hours.clone(),
            start_shipping_hours: self.start_shipping_hours.clone(),
            end_shipping_hours: self.end_shipping_hours.clone(),
            start_receiving_hours: self.start_receiving_hours.clone(),
            end_receiving_hours: self.end_receiving_hours.clone(),

            price: coerce(&self.price),
            cost: coerce(&self.cost),
            price_additional_charges: coerce(&self.price_additional_charges),
            cost_additional_charges: coerce(&self.cost_additional_charges),
            total_price: coerce(&self.total_price),
            total_cost: coerce(&self.total_cost),
            profit: coerce(&self.profit),
            profit_pourcentage: self.profit_pourcentage.clone(),

            appointment: self.appointment.clone(),
            cod_type: self.cod_type,
            additional_information: self.additional_information.clone(),
            additional_shipper: self.additional_shipper.clone(),

            carrier: CarrierRef {
                id: self.carrier_id,
                rating: self.rating,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LoadStatus;
    use crate::form::freight::{DimUnit, FreightItem, WeightUnit};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_freight_list_yields_empty_and_zero_flat_fields() {
        let mut form = LoadForm::new();
        form.set_price("500");
        form.set_cost("300");
        let payload = form.to_payload();
        assert_eq!(payload.dimensions, "");
        assert_eq!(payload.quantity, "0");
        assert_eq!(payload.weight, "0");
        assert_eq!(payload.equipement_ids, Vec::<i64>::new());
        assert_eq!(payload.total_price, 500.0);
        assert_eq!(payload.total_cost, 300.0);
        assert_eq!(payload.profit, 200.0);
        assert_eq!(payload.profit_pourcentage, "40.00");
    }

    #[test]
    fn freight_items_override_flat_fields() {
        let mut form = LoadForm::new();
        form.dimensions = "hand-typed".into();
        form.freight_items.push(FreightItem {
            kind: "Pallet".into(),
            length: "48".into(),
            width: "40".into(),
            height: "60".into(),
            dim_unit: DimUnit::In,
            weight_per_unit: "50".into(),
            weight_unit: WeightUnit::Kg,
            quantity: "2".into(),
            ..FreightItem::new()
        });
        let payload = form.to_payload();
        assert_eq!(payload.dimensions, "2\u{d7} 48\u{d7}40\u{d7}60in (Pallet)");
        assert_eq!(payload.weight, "220.46");
        assert_eq!(payload.quantity, "2");
    }

    #[test]
    fn party_ids_map_to_backend_names() {
        let mut form = LoadForm::new();
        form.shipper_id = Some(11);
        form.consignee_id = Some(22);
        form.client_id = Some(33);
        form.carrier_id = Some(44);
        form.rating = 4.0;
        form.status = LoadStatus::Confirmed;
        let payload = form.to_payload();
        assert_eq!(payload.pick_up_id, Some(11));
        assert_eq!(payload.delivery_id, Some(22));
        assert_eq!(payload.client_id, Some(33));
        assert_eq!(payload.carrier.id, Some(44));
        assert_eq!(payload.carrier.rating, 4.0);
        assert_eq!(payload.status, LoadStatus::Confirmed);
    }

    #[test]
    fn dates_serialize_to_utc_midnight() {
        let mut form = LoadForm::new();
        form.pickup_date = NaiveDate::from_ymd_opt(2025, 3, 14);
        let payload = form.to_payload();
        assert_eq!(payload.pickup_date.as_deref(), Some("2025-03-14T00:00:00+00:00"));
        assert_eq!(payload.delivery_date, None);
    }
}
