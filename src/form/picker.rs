//! Autocomplete-with-create resolution for the entity pickers.
//!
//! The widget state is just typed text plus the known suggestion list; what
//! the form does next is decided here so every picker (shipper, consignee,
//! carrier, client) behaves the same way.

use crate::domain::Suggestion;

/// What a picker's current text means for the form.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerOutcome {
    /// Exact (case-insensitive) label match: hydrate the party block.
    Match(i64),
    /// Non-empty text with no exact match: offer inline creation.
    CreateCandidate(String),
    /// Empty text: reset every dependent field for the party.
    Cleared,
}

/// Case-insensitive substring filter over the suggestion labels.
pub fn filter_suggestions<'a>(suggestions: &'a [Suggestion], text: &str) -> Vec<&'a Suggestion> {
    let needle = text.to_lowercase();
    suggestions
        .iter()
        .filter(|s| s.label.to_lowercase().contains(&needle))
        .collect()
}

pub fn resolve_picker(suggestions: &[Suggestion], text: &str) -> PickerOutcome {
    if text.is_empty() {
        return PickerOutcome::Cleared;
    }
    let needle = text.to_lowercase();
    if let Some(hit) = suggestions.iter().find(|s| s.label.to_lowercase() == needle) {
        return PickerOutcome::Match(hit.id);
    }
    PickerOutcome::CreateCandidate(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn suggestions() -> Vec<Suggestion> {
        vec![
            Suggestion { id: 1, label: "Acme Freight".into() },
            Suggestion { id: 2, label: "Borealis Carriers".into() },
            Suggestion { id: 3, label: "acme logistics".into() },
        ]
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let all = suggestions();
        let hits = filter_suggestions(&all, "ACME");
        let ids: Vec<i64> = hits.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filter_suggestions(&all, "").len(), 3);
    }

    #[test]
    fn exact_match_wins_over_create() {
        let all = suggestions();
        assert_eq!(resolve_picker(&all, "acme freight"), PickerOutcome::Match(1));
        assert_eq!(
            resolve_picker(&all, "Acme"),
            PickerOutcome::CreateCandidate("Acme".into())
        );
    }

    #[test]
    fn empty_text_clears() {
        assert_eq!(resolve_picker(&suggestions(), ""), PickerOutcome::Cleared);
    }
}
