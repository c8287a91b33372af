//! Contact form: field state, validation, payload and submission.
//!
//! The submitter builds the complete template payload up front (including the
//! `from_name`/`reply_to` aliases the email template expects) and hands it to
//! an [`EmailDispatch`] collaborator. Only one submission can be in flight.

use crate::config::EmailJsConfig;
use crate::dispatch::{DispatchError, DispatchRequest, EmailDispatch, TemplateParams};
use crate::i18n::Language;
use crate::toast::Toast;
use chrono::{Local, NaiveDateTime};
use regex::Regex;
use serde::Serialize;
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, error, info};

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Map a form input name to its field.
    pub fn from_name(name: &str) -> Option<ContactField> {
        match name {
            "name" => Some(ContactField::Name),
            "email" => Some(ContactField::Email),
            "subject" => Some(ContactField::Subject),
            "message" => Some(ContactField::Message),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a submission was blocked before reaching the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field '{0}' is empty")]
    MissingField(ContactField),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r##"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"##,
        )
        .expect("Invalid email regex")
    })
}

/// In-progress form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Every field required; email must look like an address.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in ContactField::ALL {
            if self.get(field).is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        let email = self.email.trim();
        if !email_regex().is_match(email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Format a submission time as shown in the delivered email.
pub fn format_timestamp(sent_at: NaiveDateTime) -> String {
    sent_at.format(TIMESTAMP_FORMAT).to_string()
}

/// A validated form plus the derived fields, alive for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub time: String,
}

impl ContactSubmission {
    pub fn new(form: &ContactForm, sent_at: NaiveDateTime) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.trim().to_string(),
            subject: form.subject.clone(),
            message: form.message.clone(),
            time: format_timestamp(sent_at),
        }
    }

    /// Template parameters, including the `from_name`/`reply_to` aliases.
    pub fn template_params(&self) -> TemplateParams {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
            ("time", &self.time),
            ("from_name", &self.name),
            ("reply_to", &self.email),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
    }
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Sent,
    Failed(DispatchError),
    Invalid(FormError),
    /// Another submission was still in flight; nothing was sent
    InProgress,
}

impl SubmitOutcome {
    /// Notification to raise for this outcome, if any.
    pub fn toast(&self, language: Language) -> Option<Toast> {
        match self {
            SubmitOutcome::Sent => Some(Toast::message_sent(language)),
            SubmitOutcome::Failed(_) => Some(Toast::message_failed(language)),
            SubmitOutcome::Invalid(_) | SubmitOutcome::InProgress => None,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

/// Clears the submitting flag when the submission ends, however it ends.
struct SubmittingGuard<'a>(&'a Cell<bool>);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Contact form state and its submission flow.
///
/// Single-threaded: state lives in `Cell`/`RefCell` so that the form stays
/// editable through `&self` while a submission is awaiting the dispatcher.
pub struct ContactSubmitter<D> {
    form: RefCell<ContactForm>,
    submitting: Cell<bool>,
    emailjs: Option<EmailJsConfig>,
    dispatcher: D,
}

impl<D: EmailDispatch> ContactSubmitter<D> {
    pub fn new(emailjs: EmailJsConfig, dispatcher: D) -> Self {
        Self::with_credentials(Some(emailjs), dispatcher)
    }

    /// A submitter whose sends fail with `DispatchError::NotConfigured`.
    pub fn without_credentials(dispatcher: D) -> Self {
        Self::with_credentials(None, dispatcher)
    }

    pub fn with_credentials(emailjs: Option<EmailJsConfig>, dispatcher: D) -> Self {
        Self {
            form: RefCell::new(ContactForm::default()),
            submitting: Cell::new(false),
            emailjs,
            dispatcher,
        }
    }

    /// Whether sends can reach the email service at all.
    pub fn is_configured(&self) -> bool {
        self.emailjs.is_some()
    }

    pub fn update(&self, field: ContactField, value: impl Into<String>) {
        self.form.borrow_mut().set(field, value);
    }

    pub fn form(&self) -> Ref<'_, ContactForm> {
        self.form.borrow()
    }

    /// Whether the send control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Submit the current form stamped with the local time.
    pub async fn submit(&self) -> SubmitOutcome {
        self.submit_at(Local::now().naive_local()).await
    }

    /// Submit the current form stamped with `sent_at`.
    ///
    /// On success the form is cleared; on failure it is left intact.
    pub async fn submit_at(&self, sent_at: NaiveDateTime) -> SubmitOutcome {
        let Some(_guard) = SubmittingGuard::acquire(&self.submitting) else {
            debug!("Contact submission already in progress, ignoring");
            return SubmitOutcome::InProgress;
        };

        let submission = {
            let form = self.form.borrow();
            if let Err(err) = form.validate() {
                debug!("Contact form blocked: {}", err);
                return SubmitOutcome::Invalid(err);
            }
            ContactSubmission::new(&form, sent_at)
        };

        let Some(emailjs) = &self.emailjs else {
            let err = DispatchError::NotConfigured;
            error!("Failed to send contact message: {}", err);
            return SubmitOutcome::Failed(err);
        };

        info!("Sending contact message from {}", submission.email);
        let request = DispatchRequest::new(emailjs, submission.template_params());

        match self.dispatcher.send(&request).await {
            Ok(()) => {
                info!("Contact message sent");
                self.form.borrow_mut().clear();
                SubmitOutcome::Sent
            }
            Err(err) => {
                error!("Failed to send contact message: {}", err);
                SubmitOutcome::Failed(err)
            }
        }
    }
}
