use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum LoggerError {
    #[error("Cannot prepare log directory{}: {source}", format_context(.context))]
    Directory { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Cannot open rolling log file{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// Another subscriber owns the process already.
    #[error("Logging already installed{}: {source}", format_context(.context))]
    AlreadyInstalled {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Bad log setting{}: {message}", format_context(.context))]
    Setting { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
