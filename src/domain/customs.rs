use serde::{Deserialize, Serialize};

/// Cross-border customs details for a CANADA<->USA load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomsInfo {
    pub broker_company: String,
    pub broker_email: String,
    pub broker_phone: String,
    /// PAPS number for US-bound loads, PARS for Canada-bound.
    pub paps_pars: String,
    pub entry_number: String,
    /// Set by the server after a customs-invoice upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_url: Option<String>,
}

fn is_ca_or_us(c: &str) -> bool {
    c == "CANADA" || c == "USA"
}

/// True only when origin and destination are both CANADA/USA and differ.
pub fn is_cross_border(origin_country: &str, destination_country: &str) -> bool {
    let o = origin_country.to_uppercase();
    let d = destination_country.to_uppercase();
    !o.is_empty() && !d.is_empty() && o != d && is_ca_or_us(&o) && is_ca_or_us(&d)
}

/// Direction label relative to the destination's import side, or "" when the
/// lane is not cross-border.
pub fn customs_direction(origin_country: &str, destination_country: &str) -> &'static str {
    if !is_cross_border(origin_country, destination_country) {
        return "";
    }
    if destination_country.to_uppercase() == "USA" {
        "US Import (CAN \u{2192} USA)"
    } else {
        "Canada Import (USA \u{2192} CAN)"
    }
}

/// Which clearance number applies: PAPS US-bound, PARS Canada-bound.
pub fn paps_pars_label(origin_country: &str, destination_country: &str) -> &'static str {
    if !is_cross_border(origin_country, destination_country) {
        return "PAPS / PARS";
    }
    if destination_country.to_uppercase() == "USA" {
        "PAPS"
    } else {
        "PARS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cross_border_requires_two_distinct_na_countries() {
        assert!(is_cross_border("CANADA", "USA"));
        assert!(is_cross_border("usa", "canada"));
        assert!(!is_cross_border("CANADA", "CANADA"));
        assert!(!is_cross_border("CANADA", ""));
        assert!(!is_cross_border("CANADA", "MEXICO"));
    }

    #[test]
    fn labels_follow_destination_country() {
        assert_eq!(paps_pars_label("CANADA", "USA"), "PAPS");
        assert_eq!(paps_pars_label("USA", "CANADA"), "PARS");
        assert_eq!(paps_pars_label("USA", "USA"), "PAPS / PARS");
        assert_eq!(customs_direction("USA", "CANADA"), "Canada Import (USA \u{2192} CAN)");
    }
}
