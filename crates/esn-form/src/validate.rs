//! Validation rules for the contact form.
//!
//! [`validate`] checks the whole form in one pass and yields either the
//! normalized [`Inquiry`] record or the full set of per-field errors,
//! never both. Every violating field is collected, with one message per
//! field: the first rule it broke.

use crate::state::{Field, FormState, ValidationErrors};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;
pub const COMPANY_MAX_LEN: usize = 100;
pub const MESSAGE_MIN_LEN: usize = 10;
pub const MESSAGE_MAX_LEN: usize = 2000;

static NAME_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\s'-]+$").unwrap());
static EMAIL_SYNTAX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static COMPANY_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}\s&.,'-]+$").unwrap());

/// A validated, normalized project inquiry. Empty optional fields are
/// normalized to `None` before the rules run, so an empty company never
/// trips the character-class rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub project: Option<String>,
    pub industry: Option<String>,
    pub message: String,
}

impl Inquiry {
    /// Every populated field value, for post-validation content checks.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            self.company.as_deref(),
            self.project.as_deref(),
            self.industry.as_deref(),
            Some(self.message.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

/// Check every field of `form` against its rules. Lengths are counted
/// in Unicode scalar values.
pub fn validate(form: &FormState) -> Result<Inquiry, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if form.name.is_empty() {
        errors.insert(Field::Name, "Name is required".to_string());
    } else if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&form.name.chars().count()) {
        errors.insert(
            Field::Name,
            format!("Name must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"),
        );
    } else if !NAME_CHARS.is_match(&form.name) {
        errors.insert(
            Field::Name,
            "Name can only contain letters, spaces, hyphens, and apostrophes".to_string(),
        );
    }

    if form.email.is_empty() {
        errors.insert(Field::Email, "Email is required".to_string());
    } else if !EMAIL_SYNTAX.is_match(&form.email) {
        errors.insert(Field::Email, "Enter a valid email address".to_string());
    } else if form.email.chars().count() > EMAIL_MAX_LEN {
        errors.insert(
            Field::Email,
            format!("Email must be {EMAIL_MAX_LEN} characters or fewer"),
        );
    }

    if !form.company.is_empty() {
        if form.company.chars().count() > COMPANY_MAX_LEN {
            errors.insert(
                Field::Company,
                format!("Company must be {COMPANY_MAX_LEN} characters or fewer"),
            );
        } else if !COMPANY_CHARS.is_match(&form.company) {
            errors.insert(
                Field::Company,
                "Company contains unsupported characters".to_string(),
            );
        }
    }

    if form.message.is_empty() {
        errors.insert(Field::Message, "Project description is required".to_string());
    } else if !(MESSAGE_MIN_LEN..=MESSAGE_MAX_LEN).contains(&form.message.chars().count()) {
        errors.insert(
            Field::Message,
            format!(
                "Project description must be between {MESSAGE_MIN_LEN} and {MESSAGE_MAX_LEN} characters"
            ),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let optional = |value: &str| {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };

    Ok(Inquiry {
        name: form.name.clone(),
        email: form.email.clone(),
        company: optional(&form.company),
        project: optional(&form.project),
        industry: optional(&form.industry),
        message: form.message.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: String::new(),
            project: "New IoT System".into(),
            industry: "Smart Agriculture".into(),
            message: "We need 15 sensor nodes covering a 2km field.".into(),
        }
    }

    #[test]
    fn test_valid_form_normalizes_optionals() {
        let inquiry = validate(&filled_form()).unwrap();
        assert_eq!(inquiry.name, "Jane Doe");
        assert_eq!(inquiry.company, None);
        assert_eq!(inquiry.project.as_deref(), Some("New IoT System"));
        assert_eq!(inquiry.industry.as_deref(), Some("Smart Agriculture"));
    }

    #[test]
    fn test_all_violations_collected_at_once() {
        let form = FormState {
            name: "J".into(),
            email: "not-an-email".into(),
            message: "short".into(),
            ..FormState::default()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key(&Field::Name));
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Message));
        assert!(!errors.contains_key(&Field::Company));
        assert!(!errors.contains_key(&Field::Project));
        assert!(!errors.contains_key(&Field::Industry));
    }

    #[test]
    fn test_name_rules_apply_in_order() {
        let mut form = filled_form();
        form.name = String::new();
        assert_eq!(
            validate(&form).unwrap_err()[&Field::Name],
            "Name is required"
        );

        form.name = "J".into();
        assert!(validate(&form).unwrap_err()[&Field::Name].contains("between"));

        form.name = "J".repeat(51);
        assert!(validate(&form).unwrap_err()[&Field::Name].contains("between"));

        form.name = "J4ne".into();
        assert!(validate(&form).unwrap_err()[&Field::Name].contains("letters"));

        form.name = "Mary-Jane O'Neil".into();
        assert!(validate(&form).is_ok());

        form.name = "Žofia Müllerová".into();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_email_syntax_and_length() {
        let mut form = filled_form();
        form.email = "jane at example.com".into();
        assert!(errors_key(&form, Field::Email).contains("valid email"));

        form.email = format!("{}@example.com", "a".repeat(95));
        assert!(errors_key(&form, Field::Email).contains("100"));

        form.email = "jane.doe+iot@mesh.example.co".into();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_company_rules_only_when_present() {
        let mut form = filled_form();
        form.company = String::new();
        assert!(validate(&form).is_ok());

        form.company = "Acme Farms & Sons, Inc.".into();
        assert!(validate(&form).is_ok());

        form.company = "Müller GmbH".into();
        assert!(validate(&form).is_ok());

        form.company = "Acme™".into();
        assert!(errors_key(&form, Field::Company).contains("unsupported"));

        form.company = "A".repeat(101);
        assert!(errors_key(&form, Field::Company).contains("100"));
    }

    #[test]
    fn test_message_length_bounds() {
        let mut form = filled_form();
        form.message = "too short".into();
        assert!(errors_key(&form, Field::Message).contains("between"));

        form.message = "x".repeat(2001);
        assert!(errors_key(&form, Field::Message).contains("between"));

        form.message = "x".repeat(10);
        assert!(validate(&form).is_ok());

        form.message = "x".repeat(2000);
        assert!(validate(&form).is_ok());
    }

    fn errors_key(form: &FormState, field: Field) -> String {
        validate(form).unwrap_err().remove(&field).expect("field error")
    }
}
