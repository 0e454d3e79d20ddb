use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Payload error{}: {message}", format_context(.context))]
    Payload { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("disk"));
    io.context("reading fixture")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading fixture): disk");

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let payload: Result<(), DemoError> =
        Err(DemoError::Payload { message: "bad".into(), context: None });
    let payload = payload.context("decoding").unwrap_err();
    assert_eq!(payload.to_string(), "Payload error (decoding): bad");
}
