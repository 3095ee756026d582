//! Load-editor form state and the pure calculators that keep it consistent.
//!
//! The form is one explicit struct ([`state::LoadForm`]), the single source
//! of truth for an edit session. Derived values (financial totals, freight
//! aggregates) are recomputed by pure functions after every mutation instead
//! of being independently mutable caches.

pub mod freight;
pub mod picker;
pub mod state;
pub mod totals;

mod payload;

pub use freight::{aggregate_freight, DimUnit, FreightItem, FreightTotals, WeightUnit};
pub use picker::{filter_suggestions, resolve_picker, PickerOutcome};
pub use state::LoadForm;
pub use totals::FinancialTotals;
