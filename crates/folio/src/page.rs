use folio_domain::constants::SECTIONS;

/// Title rendered above the section with the given anchor.
#[must_use]
pub fn section_title(anchor: &str) -> Option<&'static str> {
    SECTIONS.iter().find(|(id, ..)| *id == anchor).map(|&(.., title)| title)
}

/// Footer line for the given year.
#[must_use]
pub fn copyright(name: &str, year: i32) -> String {
    format!("\u{a9} {year} {name}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_anchors() {
        assert_eq!(section_title("about"), Some("Executive Profile"));
        assert_eq!(section_title("contact"), Some("Connect"));
        assert_eq!(section_title("blog"), None);
    }

    #[test]
    fn copyright_line() {
        assert_eq!(copyright("Ada", 2026), "\u{a9} 2026 Ada. All rights reserved.");
    }
}
