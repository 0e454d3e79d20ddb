//! Mail delivery behind the [`Mailer`] trait, with an SMTP implementation on
//! top of [lettre](https://lettre.rs).

use crate::model::OutboundMessage;
use async_trait::async_trait;
use folio_domain::config::{MailConfig, SmtpSecurity};
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::borrow::Cow;
use std::fmt::{self, Debug};
use tracing::debug;

#[folio_derive::folio_error]
pub enum MailError {
    #[error("Invalid mail address{}: {source}", format_context(.context))]
    Address { source: lettre::address::AddressError, context: Option<Cow<'static, str>> },

    #[error("Failed to build message{}: {source}", format_context(.context))]
    Message { source: lettre::error::Error, context: Option<Cow<'static, str>> },

    #[error("SMTP error{}: {source}", format_context(.context))]
    Transport { source: lettre::transport::smtp::Error, context: Option<Cow<'static, str>> },

    /// Sender or recipient address missing from the mail configuration.
    #[error("Mail identity not configured{}: {message}", format_context(.context))]
    MissingIdentity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal mail error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Delivers one outbound message. Implementations never retry.
#[async_trait]
pub trait Mailer: Debug + Send + Sync {
    /// Sends the message, returning once the remote side accepted or refused it.
    ///
    /// # Errors
    /// Any failure to build or deliver the message.
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}

/// SMTP mailer authenticated as the site owner.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpMailer {
    /// Builds the transport from configuration.
    ///
    /// No connection is opened here; missing credentials surface when a
    /// message is sent.
    ///
    /// # Errors
    /// Returns [`MailError::Transport`] if TLS parameters for `host` cannot be built.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let mut builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .context("Configuring TLS relay")?,
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .context("Configuring STARTTLS relay")?
            },
            SmtpSecurity::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
        };

        if let Some(port) = config.port {
            builder = builder.port(port);
        }

        if let (true, Some(user), Some(password)) =
            (config.has_credentials(), &config.user, &config.password)
        {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        Ok(Self { transport: builder.build(), host: config.host.clone() })
    }
}

impl Debug for SmtpMailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpMailer").field("host", &self.host).finish_non_exhaustive()
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let email = build_email(message)?;
        let response = self.transport.send(email).await.context("Sending contact message")?;
        debug!(host = %self.host, code = %response.code(), "SMTP server accepted message");
        Ok(())
    }
}

/// Converts an [`OutboundMessage`] into a multipart (plain + HTML) email.
///
/// # Errors
/// Missing identities, unparsable addresses, or an invalid message.
pub fn build_email(message: &OutboundMessage) -> Result<Message, MailError> {
    let from = mailbox(message.from.as_deref(), "sender")?;
    let to = mailbox(message.to.as_deref(), "recipient")?;
    let reply_to = message.reply_to.parse::<Mailbox>().context("reply-to")?;

    Message::builder()
        .from(from)
        .to(to)
        .reply_to(reply_to)
        .subject(message.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(message.text.clone(), message.html.clone()))
        .context("Assembling contact message")
}

fn mailbox(address: Option<&str>, role: &'static str) -> Result<Mailbox, MailError> {
    let address = address.filter(|a| !a.is_empty()).ok_or_else(|| MailError::MissingIdentity {
        message: Cow::Owned(format!("{role} address is not set (EMAIL_USER)")),
        context: None,
    })?;
    address.parse::<Mailbox>().context(role)
}
