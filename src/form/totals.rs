//! Derived financial totals.
//!
//! The four derived fields are a pure function of the four base inputs and
//! must hold after every mutation:
//!   totalPrice = price + priceAdditionalCharges
//!   totalCost  = cost + costAdditionalCharges
//!   profit     = totalPrice - totalCost
//!   profitPourcentage = profit / totalPrice * 100 (0 when totalPrice is 0)

/// Coerce a user- or server-supplied numeric string; invalid or empty is 0.
pub fn coerce(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialTotals {
    pub total_price: f64,
    pub total_cost: f64,
    pub profit: f64,
    pub profit_pourcentage: f64,
}

impl FinancialTotals {
    pub fn compute(price: f64, cost: f64, price_additional: f64, cost_additional: f64) -> Self {
        let total_price = price + price_additional;
        let total_cost = cost + cost_additional;
        let profit = total_price - total_cost;
        let profit_pourcentage = if total_price == 0.0 {
            0.0
        } else {
            profit / total_price * 100.0
        };
        Self {
            total_price,
            total_cost,
            profit,
            profit_pourcentage,
        }
    }

    pub fn from_strings(price: &str, cost: &str, price_additional: &str, cost_additional: &str) -> Self {
        Self::compute(
            coerce(price),
            coerce(cost),
            coerce(price_additional),
            coerce(cost_additional),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn totals_hold_for_the_reference_example() {
        let t = FinancialTotals::compute(1000.0, 700.0, 150.0, 50.0);
        assert_eq!(t.total_price, 1150.0);
        assert_eq!(t.total_cost, 750.0);
        assert_eq!(t.profit, 400.0);
        assert!((t.profit_pourcentage - 34.782608695652172).abs() < 1e-9);
    }

    #[test]
    fn zero_total_price_yields_zero_percentage() {
        let t = FinancialTotals::compute(0.0, 300.0, 0.0, 0.0);
        assert_eq!(t.profit, -300.0);
        assert_eq!(t.profit_pourcentage, 0.0);
    }

    #[test]
    fn invalid_inputs_coerce_to_zero() {
        assert_eq!(coerce(""), 0.0);
        assert_eq!(coerce("abc"), 0.0);
        assert_eq!(coerce(" 12.5 "), 12.5);
        let t = FinancialTotals::from_strings("500", "", "oops", "0");
        assert_eq!(t.total_price, 500.0);
        assert_eq!(t.total_cost, 0.0);
    }
}
