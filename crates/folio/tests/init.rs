use async_trait::async_trait;
use folio::contact::{Contact, MailError, Mailer, OutboundMessage};
use folio::domain::config::{ApiConfig, SmtpSecurity};
use folio::features;
use std::sync::Arc;

#[derive(Debug)]
struct NullMailer;

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, _message: &OutboundMessage) -> Result<(), MailError> {
        Ok(())
    }
}

#[test]
fn contact_is_always_enabled() {
    assert!(features::is_enabled("contact"));
    assert!(!features::is_enabled("billing"));
}

#[test]
fn init_registers_contact_slice() {
    let mut config = ApiConfig::default();
    config.mail.host = "localhost".to_owned();
    config.mail.security = SmtpSecurity::None;

    let slices = folio::init(&config).expect("slices");
    assert_eq!(slices.len(), 1);
    assert!(slices[0].downcast_ref::<Contact>().is_some());
}

#[test]
fn injected_mailer_is_used() {
    let mut config = ApiConfig::default();
    config.mail.user = Some("owner@example.com".to_owned());

    let slices = folio::init_with_mailer(&config, Arc::new(NullMailer));
    let contact = slices[0].downcast_ref::<Contact>().expect("contact slice");

    assert_eq!(contact.identity.sender.as_deref(), Some("owner@example.com"));
    assert!(!contact.credentials);
    assert!(format!("{:?}", contact.mailer).contains("NullMailer"));
}
