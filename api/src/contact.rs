use std::{collections::BTreeMap, fmt, sync::LazyLock};

use gloo_timers::future::TimeoutFuture;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

// structs and types

pub const DEFAULT_MIN_MESSAGE_LEN: usize = 10;
pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;
pub const DEFAULT_STATUS_RESET_MS: u32 = 5000;

// anything@anything.anything, with no whitespace and exactly one @
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn all() -> [FormField; 4] {
        [
            FormField::Name,
            FormField::Email,
            FormField::Subject,
            FormField::Message,
        ]
    }

    // html name and id of the input
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your name",
            FormField::Email => "Your email",
            FormField::Subject => "Subject",
            FormField::Message => "Your message",
        }
    }

    // the input type attribute; the message is rendered as a textarea instead
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Email => "email",
            _ => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        self == FormField::Message
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::all().iter().all(|f| self.get(*f).is_empty())
    }

    // every field is required; the email has to look like an address and the
    // message has a minimum length once surrounding whitespace is dropped
    pub fn validate(&self, min_message_len: usize) -> FormErrors {
        let mut errors = FormErrors::default();

        for field in FormField::all() {
            if self.get(field).trim().is_empty() {
                errors.insert(field, FieldError::Required(field));
            }
        }

        // note that the format check runs on the raw value, so stray
        // whitespace around an address is rejected rather than trimmed
        if !errors.contains(FormField::Email) && !is_valid_email(&self.email) {
            errors.insert(FormField::Email, FieldError::InvalidEmail);
        }

        if !errors.contains(FormField::Message)
            && self.message.trim().chars().count() < min_message_len
        {
            errors.insert(FormField::Message, FieldError::TooShort(min_message_len));
        }

        errors
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required(FormField),
    InvalidEmail,
    TooShort(usize),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldError::TooShort(min) => write!(f, "Message must be at least {min} characters"),
        }
    }
}

// the derived validity map for the form
//
// absence of a field means it is currently valid (or hasn't been checked)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: BTreeMap<FormField, FieldError>,
}

impl FormErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: FormField, error: FieldError) {
        self.errors.insert(field, error);
    }

    // editing a field clears only that field's error
    pub fn clear(&mut self, field: FormField) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

// contact form state machine
//
// Idle --submit(valid)--> Submitting --ok--> Success --reset--> Idle
//                                    --err-> Error   --reset--> Idle
//
// an invalid submit leaves the status alone (the errors are shown instead),
// and anything arriving while a submission is in flight is ignored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitEvent {
    Submit { valid: bool },
    Completed { ok: bool },
    ResetElapsed,
}

impl SubmitStatus {
    pub fn next(self, event: SubmitEvent) -> SubmitStatus {
        match (self, event) {
            (SubmitStatus::Submitting, SubmitEvent::Completed { ok: true }) => SubmitStatus::Success,
            (SubmitStatus::Submitting, SubmitEvent::Completed { ok: false }) => SubmitStatus::Error,
            (SubmitStatus::Submitting, _) => SubmitStatus::Submitting,

            (_, SubmitEvent::Submit { valid: true }) => SubmitStatus::Submitting,
            (status, SubmitEvent::Submit { valid: false }) => status,

            (SubmitStatus::Success | SubmitStatus::Error, SubmitEvent::ResetElapsed) => {
                SubmitStatus::Idle
            }
            (status, _) => status,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitStatus::Submitting
    }

    pub fn button_label(self) -> &'static str {
        match self {
            SubmitStatus::Submitting => "Sending...",
            _ => "Send Message",
        }
    }

    pub fn banner(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Success => {
                Some("Your message has been sent successfully! I'll get back to you soon.")
            }
            SubmitStatus::Error => {
                Some("There was an error sending your message. Please try again later.")
            }
            _ => None,
        }
    }
}

// messages

// send the contents of the contact form
//
// there is no backend for this site, so the "request" is a fixed delay with
// no i/o behind it.  the Result is kept so the form has somewhere to put an
// error if a real transport is ever wired in
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendMessageReq {
    pub message: ContactForm,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendMessageResp {}

pub async fn send_message(req: &SendMessageReq, delay_ms: u32) -> anyhow::Result<SendMessageResp> {
    debug!(
        subject = req.message.subject.as_str(),
        delay_ms, "simulating contact form submission"
    );

    TimeoutFuture::new(delay_ms).await;

    Ok(SendMessageResp {})
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "I'd like to talk about a project.".to_owned(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = filled().validate(DEFAULT_MIN_MESSAGE_LEN);
        assert!(errors.is_valid());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_empty_form_requires_every_field() {
        let errors = ContactForm::default().validate(DEFAULT_MIN_MESSAGE_LEN);
        assert_eq!(errors.len(), 4);
        for field in FormField::all() {
            assert_eq!(errors.get(field), Some(FieldError::Required(field)));
        }
        assert_eq!(
            errors.get(FormField::Name).unwrap().to_string(),
            "Name is required"
        );
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.subject = "   \t".to_owned();
        let errors = form.validate(DEFAULT_MIN_MESSAGE_LEN);
        assert_eq!(
            errors.get(FormField::Subject),
            Some(FieldError::Required(FormField::Subject))
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email(" a@b.c"));

        let mut form = filled();
        form.email = "not-an-address".to_owned();
        let errors = form.validate(DEFAULT_MIN_MESSAGE_LEN);
        assert_eq!(errors.get(FormField::Email), Some(FieldError::InvalidEmail));
        assert_eq!(
            FieldError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_message_minimum_length_uses_trimmed_text() {
        let mut form = filled();
        form.message = "  long enough   ".to_owned();
        assert!(form.validate(DEFAULT_MIN_MESSAGE_LEN).is_valid());

        form.message = "  short   ".to_owned();
        let errors = form.validate(DEFAULT_MIN_MESSAGE_LEN);
        assert_eq!(errors.get(FormField::Message), Some(FieldError::TooShort(10)));
        assert_eq!(
            errors.get(FormField::Message).unwrap().to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_required_takes_precedence_over_format() {
        let mut form = filled();
        form.email = String::new();
        form.message = String::new();
        let errors = form.validate(DEFAULT_MIN_MESSAGE_LEN);
        assert_eq!(
            errors.get(FormField::Email),
            Some(FieldError::Required(FormField::Email))
        );
        assert_eq!(
            errors.get(FormField::Message),
            Some(FieldError::Required(FormField::Message))
        );
    }

    #[test]
    fn test_clearing_one_error_keeps_the_rest() {
        let mut errors = ContactForm::default().validate(DEFAULT_MIN_MESSAGE_LEN);
        assert!(errors.clear(FormField::Name).is_some());
        assert!(errors.clear(FormField::Name).is_none());
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(FormField::Email));
    }

    #[test]
    fn test_form_set_get_clear() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());
        form.set(FormField::Subject, "Hi".to_owned());
        assert_eq!(form.get(FormField::Subject), "Hi");
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }

    #[test]
    fn test_successful_submission_cycle() {
        let status = SubmitStatus::Idle.next(SubmitEvent::Submit { valid: true });
        assert_eq!(status, SubmitStatus::Submitting);
        assert_eq!(status.button_label(), "Sending...");

        let status = status.next(SubmitEvent::Completed { ok: true });
        assert_eq!(status, SubmitStatus::Success);
        assert!(status.banner().is_some());

        assert_eq!(status.next(SubmitEvent::ResetElapsed), SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_submit_keeps_status() {
        assert_eq!(
            SubmitStatus::Idle.next(SubmitEvent::Submit { valid: false }),
            SubmitStatus::Idle
        );
        assert_eq!(
            SubmitStatus::Success.next(SubmitEvent::Submit { valid: false }),
            SubmitStatus::Success
        );
    }

    #[test]
    fn test_error_branch_resets_to_idle() {
        let status = SubmitStatus::Submitting.next(SubmitEvent::Completed { ok: false });
        assert_eq!(status, SubmitStatus::Error);
        assert_eq!(status.next(SubmitEvent::ResetElapsed), SubmitStatus::Idle);
    }

    #[test]
    fn test_in_flight_submission_ignores_other_events() {
        let status = SubmitStatus::Submitting;
        assert_eq!(status.next(SubmitEvent::ResetElapsed), SubmitStatus::Submitting);
        assert_eq!(
            status.next(SubmitEvent::Submit { valid: true }),
            SubmitStatus::Submitting
        );
        assert_eq!(
            SubmitStatus::Idle.next(SubmitEvent::Completed { ok: true }),
            SubmitStatus::Idle
        );
        assert_eq!(SubmitStatus::Idle.next(SubmitEvent::ResetElapsed), SubmitStatus::Idle);
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(FormField::Email.input_type(), "email");
        assert!(FormField::Message.is_multiline());
        assert!(!FormField::Name.is_multiline());
        assert_eq!(FormField::Message.placeholder(), "Your message");
    }
}
