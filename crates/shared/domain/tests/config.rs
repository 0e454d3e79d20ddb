use folio_domain::config::{ApiConfig, MailConfig, ServerConfig, SmtpSecurity};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.ssl.is_none());

    let mail = MailConfig::default();
    assert_eq!(mail.host, "smtp.gmail.com");
    assert_eq!(mail.security, SmtpSecurity::Tls);
    assert!(mail.port.is_none());
    assert!(!mail.has_credentials());
    assert!(mail.recipient().is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "mail": { "security": "starttls", "port": 587, "user": "me@example.com", "password": "app-pass" },
        "site": { "static_dir": "/srv/folio/dist" },
        "log": { "filter": "folio=debug", "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.mail.security, SmtpSecurity::StartTls);
    assert_eq!(cfg.mail.port, Some(587));
    assert!(cfg.mail.has_credentials());
    assert_eq!(cfg.site.static_dir, Some(std::path::PathBuf::from("/srv/folio/dist")));
    assert_eq!(cfg.log.filter.as_deref(), Some("folio=debug"));
    assert!(cfg.log.json);
    assert!(cfg.log.directory.is_none());
}

#[test]
fn recipient_falls_back_to_sender() {
    let mut mail = MailConfig { user: Some("me@example.com".to_owned()), ..MailConfig::default() };
    assert_eq!(mail.recipient(), Some("me@example.com"));

    mail.recipient = Some("inbox@example.com".to_owned());
    assert_eq!(mail.recipient(), Some("inbox@example.com"));

    mail.recipient = Some(String::new());
    assert_eq!(mail.recipient(), Some("me@example.com"));
}

#[test]
fn empty_password_is_not_a_credential() {
    let mail = MailConfig {
        user: Some("me@example.com".to_owned()),
        password: Some(String::new()),
        ..MailConfig::default()
    };
    assert!(!mail.has_credentials());
}

#[test]
fn debug_output_redacts_password() {
    let mail = MailConfig {
        user: Some("me@example.com".to_owned()),
        password: Some("hunter2".to_owned()),
        ..MailConfig::default()
    };
    let rendered = format!("{mail:?}");
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn config_mutation_does_not_leak_into_clones() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9999;

    assert_eq!(original.server.port, 3000);
    assert_eq!(changed.server.port, 9999);
}
