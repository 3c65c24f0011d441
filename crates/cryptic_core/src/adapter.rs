//! Thin adapters between form fields and the pure helpers.
//!
//! A page wires these to its events: the "enumerate" link runs
//! [`EnumerateAction`] on the contest-word field, focus leaving the
//! submission field runs [`WarningAction`].

use crate::enumeration::enumerate;
use crate::warning::EnumerationWarning;

/// A text input.
pub trait Field {
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);
}

/// In-memory [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Field for TextField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// Replaces a field's clue with its enumerated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerateAction;

impl EnumerateAction {
    pub fn apply<F: Field + ?Sized>(&self, field: &mut F) {
        let enumerated = enumerate(&field.value());
        field.set_value(enumerated);
    }
}

/// Decides whether a submission field needs the enumeration warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarningAction;

impl WarningAction {
    pub fn apply<F: Field + ?Sized>(&self, field: &F) -> EnumerationWarning {
        EnumerationWarning::for_submission(&field.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_action_writes_back() {
        let mut field = TextField::new("ice cream");
        EnumerateAction.apply(&mut field);
        assert_eq!(field.value(), "ICE CREAM (3, 5)");

        EnumerateAction.apply(&mut field);
        assert_eq!(field.value(), "ICE CREAM (3, 5)");
    }

    #[test]
    fn test_enumerate_action_on_empty_field() {
        let mut field = TextField::default();
        EnumerateAction.apply(&mut field);
        assert_eq!(field.value(), " ()");
    }

    #[test]
    fn test_warning_action() {
        let field = TextField::new("Frozen dessert");
        assert!(WarningAction.apply(&field).is_shown());

        let field = TextField::new("Frozen dessert (3, 5)");
        assert_eq!(WarningAction.apply(&field), EnumerationWarning::Hidden);
    }

    #[test]
    fn test_warning_after_enumerate() {
        let mut field = TextField::new("Frozen dessert");
        EnumerateAction.apply(&mut field);
        assert_eq!(WarningAction.apply(&field), EnumerationWarning::Hidden);
    }
}
