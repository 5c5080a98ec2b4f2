//! Uncommitted preference query.

use core_types::{Bound, ChoiceField, FlagField, Preferences, Range, RangeField};

/// Collects preference edits until the user submits or clears the form.
///
/// Editing one end of a range replaces the whole range with a range that
/// only has that end set, so a previously entered sibling bound is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceCollector {
    preferences: Preferences,
}

impl PreferenceCollector {
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Set one bound of a range field, discarding the other bound.
    pub fn set_range_bound(&mut self, field: RangeField, bound: Bound, value: f64) {
        *self.preferences.range_slot_mut(field) = Some(Range::only(bound, value));
    }

    /// Set one bound of a range field from the raw text of its input box.
    pub fn set_range_input(&mut self, field: RangeField, bound: Bound, raw: &str) {
        self.set_range_bound(field, bound, parse_range_input(raw));
    }

    /// Set a dropdown field. The value is kept verbatim, including the
    /// empty "no choice" option.
    pub fn set_choice(&mut self, field: ChoiceField, value: impl Into<String>) {
        *self.preferences.choice_slot_mut(field) = Some(value.into());
    }

    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        *self.preferences.flag_slot_mut(field) = Some(value);
    }

    /// Drop every criterion.
    pub fn clear(&mut self) {
        self.preferences = Preferences::default();
    }

    /// Snapshot of the query as it will be sent.
    pub fn submission(&self) -> Preferences {
        self.preferences.clone()
    }
}

/// Coerce a range input box like a JS `Number(...)`: blank text is 0 and
/// anything unparsable is NaN.
pub fn parse_range_input(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse().unwrap_or(f64::NAN)
}
