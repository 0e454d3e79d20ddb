use folio_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_reports_existing_subscriber() {
    let _logger = Logger::builder()
        .name("folio-first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("folio-second")
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "{err}");
}
