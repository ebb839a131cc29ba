//! Contact form: validation, submission status, pluggable submitter.
//!
//! Nothing is persisted. The default submitter accepts every message; the
//! browser wraps it with a short delay so the form shows its sending state.

use futures::future::{self, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::ContactConfig;

/// Errors surfaced to the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),

    #[error("message is too long ({len} characters, limit {max})")]
    MessageTooLong { len: usize, max: usize },

    #[error("could not send message: {0}")]
    Submit(String),
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

/// A validated, trimmed message ready to hand to a submitter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Acknowledgement from a submitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub recipient: String,
}

/// Where the form is in its send cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// How long a finished outcome stays on screen. `None` while idle or
    /// submitting.
    pub fn reset_after(&self, config: &ContactConfig) -> Option<Duration> {
        match self {
            Self::Sent | Self::Failed(_) => Some(Duration::from_millis(config.status_reset_ms)),
            Self::Idle | Self::Submitting => None,
        }
    }

    /// Drop a finished outcome back to `Idle`. An in-flight submission is
    /// left alone. Returns `true` when the status changed.
    pub fn expire(&mut self) -> bool {
        match self {
            Self::Sent | Self::Failed(_) => {
                *self = Self::Idle;
                true
            }
            Self::Idle | Self::Submitting => false,
        }
    }
}

impl ContactForm {
    pub fn validate(&self, config: &ContactConfig) -> Result<ContactMessage, ContactError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let message = required("message", &self.message)?;

        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail(email.to_string()));
        }

        let len = message.chars().count();
        if len > config.max_message_len {
            return Err(ContactError::MessageTooLong {
                len,
                max: config.max_message_len,
            });
        }

        let subject = self.subject.trim();
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: message.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ContactError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ContactError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Delivers a validated message somewhere.
pub trait ContactSubmitter {
    fn submit<'a>(
        &'a self,
        message: &'a ContactMessage,
    ) -> LocalBoxFuture<'a, Result<SubmitReceipt, ContactError>>;
}

/// Stand-in submitter: reports success for every message.
#[derive(Clone, Debug)]
pub struct SimulatedSubmitter {
    recipient: String,
}

impl SimulatedSubmitter {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit<'a>(
        &'a self,
        message: &'a ContactMessage,
    ) -> LocalBoxFuture<'a, Result<SubmitReceipt, ContactError>> {
        tracing::info!(from = %message.email, "simulated contact submission");
        Box::pin(future::ready(Ok(SubmitReceipt {
            recipient: self.recipient.clone(),
        })))
    }
}

/// Validate, submit, and reset the form on success.
///
/// Returns the status the form should display afterwards.
pub async fn send<S: ContactSubmitter + ?Sized>(
    form: &mut ContactForm,
    config: &ContactConfig,
    submitter: &S,
) -> SubmissionStatus {
    let message = match form.validate(config) {
        Ok(message) => message,
        Err(e) => return SubmissionStatus::Failed(e.to_string()),
    };
    match submitter.submit(&message).await {
        Ok(receipt) => {
            tracing::debug!(recipient = %receipt.recipient, "contact message sent");
            form.clear();
            SubmissionStatus::Sent
        }
        Err(e) => {
            tracing::warn!("contact submission failed: {e}");
            SubmissionStatus::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn form() -> ContactForm {
        ContactForm {
            name: "  Ada Lovelace ".into(),
            email: "ada@example.com".into(),
            subject: "   ".into(),
            message: "Hello there".into(),
        }
    }

    struct Refusing;

    impl ContactSubmitter for Refusing {
        fn submit<'a>(
            &'a self,
            _message: &'a ContactMessage,
        ) -> LocalBoxFuture<'a, Result<SubmitReceipt, ContactError>> {
            Box::pin(future::ready(Err(ContactError::Submit("offline".into()))))
        }
    }

    #[test]
    fn validate_trims_and_drops_blank_subject() {
        let message = form().validate(&ContactConfig::default()).unwrap();
        assert_eq!(
            message,
            ContactMessage {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                subject: None,
                message: "Hello there".into(),
            }
        );
    }

    #[test]
    fn validate_requires_fields() {
        let mut f = form();
        f.name = " ".into();
        assert_eq!(
            f.validate(&ContactConfig::default()),
            Err(ContactError::MissingField("name"))
        );

        let mut f = form();
        f.message.clear();
        assert_eq!(
            f.validate(&ContactConfig::default()),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn validate_rejects_bad_emails() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.com", "a b@c.com", "ada@.com", "ada@example."] {
            let mut f = form();
            f.email = bad.into();
            assert!(
                matches!(f.validate(&ContactConfig::default()), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn validate_caps_message_length() {
        let config = ContactConfig {
            max_message_len: 5,
            ..ContactConfig::default()
        };
        let mut f = form();
        f.message = "ąęśćż!".into();
        assert_eq!(
            f.validate(&config),
            Err(ContactError::MessageTooLong { len: 6, max: 5 })
        );
    }

    #[test]
    fn simulated_submit_always_succeeds_and_clears_form() {
        let mut f = form();
        let status = block_on(send(
            &mut f,
            &ContactConfig::default(),
            &SimulatedSubmitter::new("me@example.com"),
        ));
        assert_eq!(status, SubmissionStatus::Sent);
        assert_eq!(f, ContactForm::default());
    }

    #[test]
    fn failed_submit_keeps_form() {
        let mut f = form();
        let status = block_on(send(&mut f, &ContactConfig::default(), &Refusing));
        assert_eq!(
            status,
            SubmissionStatus::Failed("could not send message: offline".into())
        );
        assert_eq!(f.email, "ada@example.com");
    }

    #[test]
    fn finished_status_resets_to_idle_after_configured_delay() {
        let config = ContactConfig::default();
        let mut f = form();
        let mut status = block_on(send(&mut f, &config, &SimulatedSubmitter::new("me@example.com")));
        assert_eq!(status.reset_after(&config), Some(Duration::from_millis(3000)));
        assert!(status.expire());
        assert_eq!(status, SubmissionStatus::Idle);

        let mut failed = SubmissionStatus::Failed("offline".into());
        assert_eq!(failed.reset_after(&config), Some(Duration::from_millis(3000)));
        assert!(failed.expire());
        assert_eq!(failed, SubmissionStatus::Idle);
    }

    #[test]
    fn busy_and_idle_statuses_do_not_expire() {
        let config = ContactConfig::default();
        let mut busy = SubmissionStatus::Submitting;
        assert_eq!(busy.reset_after(&config), None);
        assert!(!busy.expire());
        assert_eq!(busy, SubmissionStatus::Submitting);

        let mut idle = SubmissionStatus::Idle;
        assert_eq!(idle.reset_after(&config), None);
        assert!(!idle.expire());
    }

    #[test]
    fn invalid_form_is_not_submitted() {
        let mut f = form();
        f.email = "nope".into();
        let status = block_on(send(&mut f, &ContactConfig::default(), &Refusing));
        assert!(matches!(status, SubmissionStatus::Failed(msg) if msg.contains("valid email")));
    }
}
