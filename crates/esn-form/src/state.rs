//! Form field state for the contact form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Project type options offered by the contact form.
pub const PROJECT_TYPES: [&str; 6] = [
    "New IoT System",
    "Existing System Upgrade",
    "Consulting & Planning",
    "Maintenance & Support",
    "Proof of Concept",
    "Other",
];

/// Industry options offered by the contact form.
pub const INDUSTRIES: [&str; 7] = [
    "Industrial Monitoring",
    "Smart Agriculture",
    "Smart Buildings",
    "Environmental Monitoring",
    "Healthcare & Wellness",
    "Asset Tracking",
    "Other",
];

/// The six contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Company,
    Project,
    Industry,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Project,
        Field::Industry,
        Field::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Project => "project",
            Field::Industry => "industry",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current value of every form field. All six keys are always present;
/// an absent selection is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub company: String,
    pub project: String,
    pub industry: String,
    pub message: String,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Project => &self.project,
            Field::Industry => &self.industry,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Project => &mut self.project,
            Field::Industry => &mut self.industry,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Reset every field to empty, as after a completed send.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.value(*field).is_empty())
    }
}

/// One human-readable message per invalid field; absence means the
/// field is untouched or valid.
pub type ValidationErrors = BTreeMap<Field, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_value_round_trip() {
        let mut form = FormState::default();
        form.set(Field::Name, "Jane");
        form.set(Field::Industry, "Smart Agriculture");
        assert_eq!(form.value(Field::Name), "Jane");
        assert_eq!(form.value(Field::Industry), "Smart Agriculture");
        assert_eq!(form.value(Field::Message), "");
    }

    #[test]
    fn test_clear_empties_every_field() {
        let mut form = FormState::default();
        for field in Field::ALL {
            form.set(field, "x");
        }
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_option_lists_end_in_other() {
        assert_eq!(PROJECT_TYPES.last(), Some(&"Other"));
        assert_eq!(INDUSTRIES.last(), Some(&"Other"));
    }
}
