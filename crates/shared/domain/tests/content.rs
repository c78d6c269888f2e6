use folio_domain::constants::{CONTACT, SECTIONS};
use folio_domain::content::{Certification, SkillCategory};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn skill_category_uses_lowercase_names() {
    assert_eq!(SkillCategory::Core.to_string(), "core");
    assert_eq!(SkillCategory::from_str("tool").ok(), Some(SkillCategory::Tool));
    assert_eq!(serde_json::to_value(SkillCategory::Tech).unwrap(), json!("tech"));
    assert_eq!(SkillCategory::iter().count(), 3);
}

#[test]
fn certification_year_is_optional() {
    let cert: Certification = serde_json::from_value(json!({
        "id": "c1",
        "name": "SentinelOne Core",
        "issuer": "SentinelOne"
    }))
    .expect("certification deserialize");

    assert_eq!(cert.year, None);
}

#[test]
fn sections_end_with_contact() {
    assert_eq!(SECTIONS.len(), 5);
    assert_eq!(SECTIONS.last().map(|(id, _, _)| *id), Some(CONTACT));
}
