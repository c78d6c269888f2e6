use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum TransmissionError {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("Relay transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The relay answered with a non-success status.
    #[error("Relay rejected payload{}: HTTP {status}", format_context(.context))]
    Rejected { status: u16, context: Option<Cow<'static, str>> },

    #[error("Internal transmission error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
