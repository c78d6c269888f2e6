//! Loading and validation of the static content record.

use folio_domain::content::PortfolioContent;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::OnceLock;

const EMBEDDED: &str = include_str!("../content/portfolio.toml");

#[folio_derive::folio_error]
pub enum ContentError {
    #[error("Content parse error{}: {source}", format_context(.context))]
    Parse { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid content{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Parses and validates a content record from TOML.
///
/// # Errors
/// Returns [`ContentError::Parse`] for malformed TOML or unknown fields and
/// [`ContentError::Invalid`] when the record breaks an invariant.
pub fn parse(raw: &str) -> Result<PortfolioContent, ContentError> {
    let content: PortfolioContent = toml::from_str(raw).context("Parsing portfolio content")?;
    validate(&content)?;
    Ok(content)
}

/// The content record compiled into the binary, parsed on first access.
///
/// # Errors
/// Returns the parse or validation error of the embedded document.
pub fn embedded() -> Result<&'static PortfolioContent, ContentError> {
    static CONTENT: OnceLock<Result<PortfolioContent, String>> = OnceLock::new();

    CONTENT
        .get_or_init(|| {
            parse(EMBEDDED)
                .inspect(|c| {
                    tracing::debug!(
                        experience = c.experience.len(),
                        skills = c.skills.len(),
                        certifications = c.certifications.len(),
                        "Embedded content loaded"
                    );
                })
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|message| ContentError::Invalid {
            message: message.clone().into(),
            context: Some("Embedded portfolio.toml".into()),
        })
}

fn validate(content: &PortfolioContent) -> Result<(), ContentError> {
    if content.name.trim().is_empty() {
        return Err(invalid("name must not be empty"));
    }

    let mut ids = HashSet::new();
    for entry in &content.experience {
        if !ids.insert(entry.id.as_str()) {
            return Err(invalid(format!("duplicate experience id '{}'", entry.id)));
        }
        if entry.description.is_empty() {
            return Err(invalid(format!("experience '{}' has no description", entry.id)));
        }
    }

    ids.clear();
    for cert in &content.certifications {
        if !ids.insert(cert.id.as_str()) {
            return Err(invalid(format!("duplicate certification id '{}'", cert.id)));
        }
    }

    Ok(())
}

fn invalid(message: impl Into<Cow<'static, str>>) -> ContentError {
    ContentError::Invalid { message: message.into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        name = "Ada"
        title = "Engineer"
        summary = "Builds things."
        experience = []
        skills = []
        certifications = []

        [hero]
        eyebrow = "Eyebrow"
        tagline = "Tagline"

        [profile]
        headline = "Headline"
        biography = "Bio"

        [contact]
        email = "ada@example.com"
        phone = "+00 0000"
        location = "London"
    "#;

    #[test]
    fn minimal_document_parses() {
        let content = parse(MINIMAL).expect("minimal content");
        assert_eq!(content.name, "Ada");
        assert!(content.contact.linkedin.is_none());
        assert!(content.profile.metrics.is_empty());
    }

    #[test]
    fn duplicate_certification_ids_are_rejected() {
        let raw = format!(
            "{MINIMAL}\n[[certifications]]\nid = \"c1\"\nname = \"A\"\nissuer = \"X\"\n\
             [[certifications]]\nid = \"c1\"\nname = \"B\"\nissuer = \"Y\"\n"
        );
        let raw = raw.replace("certifications = []", "");
        let err = parse(&raw).unwrap_err();
        assert_eq!(err.kind(), "invalid");
        assert!(err.to_string().contains("duplicate certification id 'c1'"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let raw = MINIMAL.replace("name = \"Ada\"", "name = \"  \"");
        assert!(matches!(parse(&raw), Err(ContentError::Invalid { .. })));
    }

    #[test]
    fn unknown_fields_fail_to_parse() {
        let raw = MINIMAL.replace("title = \"Engineer\"", "title = \"Engineer\"\nmotto = \"x\"");
        assert_eq!(parse(&raw).unwrap_err().kind(), "parse");
    }
}
