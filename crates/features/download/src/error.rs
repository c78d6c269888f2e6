use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum DownloadError {
    /// The platform refused to start the file download.
    #[error("Resume delivery failed{}: {message}", format_context(.context))]
    Delivery { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal download error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
