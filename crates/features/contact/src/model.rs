//! Contact form payloads and the outbound message derived from them.

use crate::error::{ContactError, MISSING_FIELDS};
use folio_derive::api_model;
use folio_domain::config::MailConfig;
use folio_domain::constants::SUBJECT_PREFIX;
use serde_json::{Map, Value};
use std::borrow::Cow;

#[api_model(deny_unknown_fields = false)]
/// Contact form fields as posted by the browser.
#[derive(Default, Clone)]
pub struct ContactForm {
    /// Sender's name
    pub name: Option<String>,
    /// Sender's email, used as the reply-to address
    pub email: Option<String>,
    /// Message body
    pub message: Option<String>,
}

impl ContactForm {
    /// Decodes a JSON request body.
    ///
    /// An empty body or a JSON value that is not an object carries no fields;
    /// fields holding non-string values count as absent.
    ///
    /// # Errors
    /// Returns the parser error when the body is not valid JSON.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Self {
                name: text_field(&fields, "name"),
                email: text_field(&fields, "email"),
                message: text_field(&fields, "message"),
            }),
            _ => Ok(Self::default()),
        }
    }

    /// Names of the fields that are missing or empty.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [("name", &self.name), ("email", &self.email), ("message", &self.message)]
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            .map(|(field, _)| field)
            .collect()
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// A validated contact form entry: every field present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Validates the three fields.
    ///
    /// The email is kept opaque: any non-empty text is accepted.
    ///
    /// # Errors
    /// Returns [`ContactError::Validation`] if any field is empty.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ContactError> {
        Self::try_from(ContactForm {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ContactError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let missing = form.missing_fields();

        match (form.name, form.email, form.message) {
            (Some(name), Some(email), Some(message)) if missing.is_empty() => {
                Ok(Self { name, email, message })
            },
            _ => Err(ContactError::Validation {
                message: MISSING_FIELDS.into(),
                context: Some(format!("missing {}", missing.join(", ")).into()),
            }),
        }
    }
}

/// Operational addresses of the site owner's mail account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailIdentity {
    pub sender: Option<String>,
    pub recipient: Option<String>,
}

impl MailIdentity {
    #[must_use]
    pub fn from_config(config: &MailConfig) -> Self {
        Self {
            sender: config.user.clone().filter(|user| !user.is_empty()),
            recipient: config.recipient().map(str::to_owned),
        }
    }
}

/// The email handed to the mailer for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub from: Option<String>,
    pub to: Option<String>,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutboundMessage {
    /// Derives the outbound email from a submission and the owner's identity.
    #[must_use]
    pub fn compose(submission: &ContactSubmission, identity: &MailIdentity) -> Self {
        Self {
            from: identity.sender.clone(),
            to: identity.recipient.clone(),
            reply_to: submission.email.clone(),
            subject: format!("{SUBJECT_PREFIX}: {}", submission.name),
            text: render_text(submission),
            html: render_html(submission),
        }
    }
}

fn render_text(submission: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}\n",
        submission.name, submission.email, submission.message
    )
}

fn render_html(submission: &ContactSubmission) -> String {
    format!(
        "<p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        escape_html(&submission.name),
        escape_html(&submission.email),
        line_breaks(&escape_html(&submission.message)),
    )
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

fn line_breaks(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "<br>")
}
