//! Freight line aggregation.
//!
//! Folds the editor's freight line items into shipment-level weight
//! (normalized to pounds), total quantity, and a human-readable dimensions
//! summary that overwrites the legacy flat fields at submit time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::totals::coerce;

const KG_TO_LB: f64 = 2.20462;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DimUnit {
    In,
    Cm,
}

impl Default for DimUnit {
    fn default() -> Self {
        Self::In
    }
}

impl DimUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Cm => "cm",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Lb,
    Kg,
}

impl Default for WeightUnit {
    fn default() -> Self {
        Self::Lb
    }
}

/// One freight line. Lines have no identity outside the form; the generated
/// key only keeps list edits stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreightItem {
    pub id: Uuid,
    /// Commodity label, e.g. Pallet / Piece.
    pub kind: String,
    pub length: String,
    pub width: String,
    pub height: String,
    pub dim_unit: DimUnit,
    pub weight_per_unit: String,
    pub weight_unit: WeightUnit,
    pub quantity: String,
}

impl FreightItem {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: String::new(),
            length: String::new(),
            width: String::new(),
            height: String::new(),
            dim_unit: DimUnit::In,
            weight_per_unit: String::new(),
            weight_unit: WeightUnit::Lb,
            quantity: String::new(),
        }
    }
}

impl Default for FreightItem {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreightTotals {
    pub total_quantity: f64,
    /// Rounded to 2 decimals.
    pub total_weight_lb: f64,
    /// `"{qty}× {L}×{W}×{H}{unit} ({kind})"` fragments joined with "; ".
    pub dimensions: String,
}

/// Render a float the way the form displays quantities: no trailing ".0".
pub fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Fold freight lines into shipment totals.
///
/// Incomplete lines still contribute their (possibly zero) weight and
/// quantity but are skipped for the dimensions string; non-numeric inputs
/// count as zero.
pub fn aggregate_freight(items: &[FreightItem]) -> FreightTotals {
    let mut total_qty = 0.0;
    let mut total_weight_lb = 0.0;
    let mut parts: Vec<String> = Vec::new();

    for it in items {
        let qty = coerce(&it.quantity);
        let per_unit = coerce(&it.weight_per_unit);
        let lb = match it.weight_unit {
            WeightUnit::Kg => per_unit * KG_TO_LB,
            WeightUnit::Lb => per_unit,
        };

        total_qty += qty;
        total_weight_lb += lb * qty;

        if qty != 0.0 && !it.length.is_empty() && !it.width.is_empty() && !it.height.is_empty() {
            let label = if it.kind.is_empty() { "Item" } else { it.kind.as_str() };
            parts.push(format!(
                "{}\u{d7} {}\u{d7}{}\u{d7}{}{} ({})",
                fmt_num(qty),
                it.length,
                it.width,
                it.height,
                it.dim_unit.as_str(),
                label
            ));
        }
    }

    FreightTotals {
        total_quantity: total_qty,
        total_weight_lb: (total_weight_lb * 100.0).round() / 100.0,
        dimensions: parts.join("; "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pallet() -> FreightItem {
        FreightItem {
            kind: "Pallet".into(),
            length: "48".into(),
            width: "40".into(),
            height: "60".into(),
            dim_unit: DimUnit::In,
            weight_per_unit: "50".into(),
            weight_unit: WeightUnit::Kg,
            quantity: "2".into(),
            ..FreightItem::new()
        }
    }

    #[test]
    fn kg_lines_convert_to_pounds() {
        let totals = aggregate_freight(&[pallet()]);
        assert_eq!(totals.total_quantity, 2.0);
        assert_eq!(totals.total_weight_lb, 220.46);
        assert_eq!(totals.dimensions, "2\u{d7} 48\u{d7}40\u{d7}60in (Pallet)");
    }

    #[test]
    fn incomplete_lines_skip_dimensions_but_keep_weight() {
        let mut no_dims = pallet();
        no_dims.height = String::new();
        no_dims.weight_unit = WeightUnit::Lb;
        let totals = aggregate_freight(&[no_dims]);
        assert_eq!(totals.total_quantity, 2.0);
        assert_eq!(totals.total_weight_lb, 100.0);
        assert_eq!(totals.dimensions, "");
    }

    #[test]
    fn non_numeric_inputs_count_as_zero() {
        let mut bad = pallet();
        bad.quantity = "two".into();
        let totals = aggregate_freight(&[bad]);
        assert_eq!(totals.total_quantity, 0.0);
        assert_eq!(totals.total_weight_lb, 0.0);
        // zero quantity also drops the fragment
        assert_eq!(totals.dimensions, "");
    }

    #[test]
    fn empty_list_is_all_zero() {
        let totals = aggregate_freight(&[]);
        assert_eq!(totals, FreightTotals::default());
    }

    #[test]
    fn multiple_lines_join_fragments() {
        let mut piece = pallet();
        piece.kind = String::new();
        piece.quantity = "1".into();
        piece.dim_unit = DimUnit::Cm;
        piece.length = "30".into();
        piece.width = "30".into();
        piece.height = "30".into();
        let totals = aggregate_freight(&[pallet(), piece]);
        assert_eq!(
            totals.dimensions,
            "2\u{d7} 48\u{d7}40\u{d7}60in (Pallet); 1\u{d7} 30\u{d7}30\u{d7}30cm (Item)"
        );
        assert_eq!(totals.total_quantity, 3.0);
    }
}
