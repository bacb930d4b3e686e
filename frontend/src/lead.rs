//! Lead capture: validation of the contact form and the hand-off point for
//! a real intake integration.

use log::{info, warn};
use thiserror::Error;

use crate::config::LEAD_ACKNOWLEDGEMENT;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email address is not valid")]
    InvalidEmail,

    /// The sink could not accept the lead.
    #[error("lead could not be delivered: {0}")]
    Delivery(String),
}

/// A validated contact-form submission. Fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    pub description: String,
}

impl Lead {
    pub fn from_form(name: &str, email: &str, description: &str) -> Result<Lead, LeadError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        let description = required("description", description)?;
        if !is_email_shaped(email) {
            return Err(LeadError::InvalidEmail);
        }
        Ok(Lead {
            name: name.to_string(),
            email: email.to_string(),
            description: description.to_string(),
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, LeadError> {
    let value = value.trim();
    if value.is_empty() {
        Err(LeadError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// The WHATWG "valid e-mail address" rule that `type="email"` inputs enforce.
/// Single-label domains such as `jane@acme` are accepted.
pub fn is_email_shaped(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(is_local_char)
        && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

/// Where a validated lead goes after the visitor submits the form.
pub trait LeadSink {
    /// Returns `LeadError::Delivery` when the lead could not be handed on;
    /// the form then keeps its fields so the visitor can retry.
    fn submit_lead(&self, lead: &Lead) -> Result<(), LeadError>;
}

/// Accepts every lead and transmits nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AcknowledgeOnly;

impl LeadSink for AcknowledgeOnly {
    fn submit_lead(&self, lead: &Lead) -> Result<(), LeadError> {
        info!(
            "Lead acknowledged (name {} chars, description {} chars), not transmitted",
            lead.name.chars().count(),
            lead.description.chars().count()
        );
        Ok(())
    }
}

/// Validates the raw form fields and hands the lead to `sink`.
pub fn submit(
    sink: &impl LeadSink,
    name: &str,
    email: &str,
    description: &str,
) -> Result<Lead, LeadError> {
    let lead = Lead::from_form(name, email, description)?;
    sink.submit_lead(&lead)?;
    Ok(lead)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Description,
}

/// Contents and outcome line of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub description: String,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl FormState {
    /// Typing into any field hides the acknowledgement of the previous lead.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Description => self.description = value,
        }
        self.success = None;
    }

    /// On success the fields are cleared and the acknowledgement is set.
    /// On failure the fields are kept and only the error line is set.
    pub fn submit(&mut self, sink: &impl LeadSink) -> Result<Lead, LeadError> {
        match submit(sink, &self.name, &self.email, &self.description) {
            Ok(lead) => {
                self.name.clear();
                self.email.clear();
                self.description.clear();
                self.error = None;
                self.success = Some(LEAD_ACKNOWLEDGEMENT.to_string());
                Ok(lead)
            }
            Err(err) => {
                warn!("Lead not submitted: {}", err);
                self.success = None;
                self.error = Some(match &err {
                    LeadError::Delivery(_) => {
                        "We couldn't send your request right now. Please try again.".to_string()
                    }
                    _ => format!("Please check the form: {}.", err),
                });
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        received: RefCell<Vec<Lead>>,
        fail: bool,
    }

    impl LeadSink for RecordingSink {
        fn submit_lead(&self, lead: &Lead) -> Result<(), LeadError> {
            if self.fail {
                return Err(LeadError::Delivery("crm offline".to_string()));
            }
            self.received.borrow_mut().push(lead.clone());
            Ok(())
        }
    }

    #[test]
    fn complete_form_reaches_the_sink_trimmed() {
        let sink = RecordingSink::default();
        let lead = submit(&sink, "  Jane Doe ", "jane@acme.io", "Invoice triage\n").unwrap();
        assert_eq!(lead.name, "Jane Doe");
        assert_eq!(lead.description, "Invoice triage");
        assert_eq!(sink.received.borrow().as_slice(), &[lead]);
    }

    #[test]
    fn empty_fields_never_reach_the_sink() {
        let sink = RecordingSink::default();
        assert_eq!(
            submit(&sink, "", "jane@acme.io", "ops"),
            Err(LeadError::MissingField("name"))
        );
        assert_eq!(
            submit(&sink, "Jane", "   ", "ops"),
            Err(LeadError::MissingField("email"))
        );
        assert_eq!(
            submit(&sink, "Jane", "jane@acme.io", " \n\t"),
            Err(LeadError::MissingField("description"))
        );
        assert!(sink.received.borrow().is_empty());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in [
            "jane",
            "jane@",
            "@acme.io",
            "jane@acme.",
            "ja ne@acme.io",
            "a@b@c.io",
            "jane@.io",
            "jane@-acme.io",
            "jane@acme_co.io",
        ] {
            assert!(!is_email_shaped(email), "{email} should be rejected");
            assert_eq!(
                Lead::from_form("Jane", email, "ops"),
                Err(LeadError::InvalidEmail),
                "{email}"
            );
        }
        assert!(is_email_shaped("jane.doe+leads@mail.acme.io"));
    }

    #[test]
    fn single_label_domain_is_accepted_like_the_browser() {
        assert!(is_email_shaped("jane@acme"));
        assert!(submit(&AcknowledgeOnly, "Jane", "jane@acme", "ops").is_ok());
    }

    fn filled_form() -> FormState {
        let mut form = FormState::default();
        form.edit(Field::Name, "Jane".to_string());
        form.edit(Field::Email, "jane@acme.io".to_string());
        form.edit(Field::Description, "Invoice triage".to_string());
        form
    }

    #[test]
    fn valid_submit_clears_fields_and_acknowledges() {
        let sink = RecordingSink::default();
        let mut form = filled_form();

        assert!(form.submit(&sink).is_ok());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.description, "");
        assert_eq!(form.success.as_deref(), Some(LEAD_ACKNOWLEDGEMENT));
        assert_eq!(form.error, None);
        assert_eq!(sink.received.borrow().len(), 1);
    }

    #[test]
    fn empty_field_keeps_input_and_skips_acknowledgement() {
        let sink = RecordingSink::default();
        let mut form = filled_form();
        form.edit(Field::Description, "  ".to_string());

        assert_eq!(form.submit(&sink), Err(LeadError::MissingField("description")));
        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "jane@acme.io");
        assert_eq!(form.success, None);
        assert!(form.error.is_some());
        assert!(sink.received.borrow().is_empty());
    }

    #[test]
    fn failing_sink_keeps_input_and_skips_acknowledgement() {
        let sink = RecordingSink { fail: true, ..Default::default() };
        let mut form = filled_form();

        assert!(matches!(form.submit(&sink), Err(LeadError::Delivery(_))));
        assert_eq!(form, FormState { success: None, error: form.error.clone(), ..filled_form() });
        assert!(form.error.as_deref().unwrap().contains("try again"));
    }

    #[test]
    fn editing_after_acknowledgement_hides_it() {
        let mut form = filled_form();
        form.submit(&AcknowledgeOnly).unwrap();
        assert!(form.success.is_some());

        form.edit(Field::Name, "J".to_string());
        assert_eq!(form.success, None);
        assert_eq!(form.name, "J");
    }

    #[test]
    fn sink_failure_is_reported() {
        let sink = RecordingSink { fail: true, ..Default::default() };
        let result = submit(&sink, "Jane", "jane@acme.io", "ops");
        assert!(matches!(result, Err(LeadError::Delivery(_))));
    }

    #[test]
    fn stub_sink_always_accepts() {
        let lead = Lead::from_form("Jane", "jane@acme.io", "ops").unwrap();
        assert_eq!(AcknowledgeOnly.submit_lead(&lead), Ok(()));
    }
}
