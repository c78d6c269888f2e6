use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum ParseError {
    #[error("Number error{}: {source}", format_context(.context))]
    InvalidNumber { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, ParseError> {
    let value = raw.parse::<u32>().context("Reading packet id")?;
    Ok(value)
}

fn main() {
    let err = parse("x").unwrap_err();
    assert_eq!(err.kind(), "invalid_number");
    assert!(err.to_string().starts_with("Number error (Reading packet id): "));
    assert_eq!(parse("42").unwrap(), 42);
}
