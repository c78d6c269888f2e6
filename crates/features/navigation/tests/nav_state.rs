use folio_domain::config::NavigationConfig;
use folio_domain::constants::SECTIONS;
use folio_navigation::{NAV_LINKS, NavState};
use pretty_assertions::assert_eq;

#[test]
fn bar_turns_solid_strictly_past_threshold() {
    let mut nav = NavState::default();

    assert!(!nav.observe_scroll(50.0));
    assert!(!nav.scrolled());
    assert!(nav.observe_scroll(50.5));
    assert!(nav.scrolled());
    assert_eq!(nav.bar_class(), "nav nav--solid");
}

#[test]
fn repeated_offsets_report_no_change() {
    let mut nav = NavState::default();
    assert!(nav.observe_scroll(400.0));
    assert!(!nav.observe_scroll(800.0));
    assert!(nav.observe_scroll(0.0));
    assert_eq!(nav.bar_class(), "nav nav--clear");
}

#[test]
fn custom_threshold_is_respected() {
    let mut nav = NavState::new(&NavigationConfig { scroll_threshold: 120.0 });
    nav.observe_scroll(100.0);
    assert!(!nav.scrolled());
}

#[test]
fn menu_toggles_and_closes_on_selection() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open());
    nav.close_menu();
    assert!(!nav.menu_open());
    nav.close_menu();
    assert!(!nav.menu_open());
}

#[test]
fn links_follow_section_order() {
    let hrefs: Vec<String> = NAV_LINKS.iter().map(|l| l.href()).collect();
    assert_eq!(
        hrefs,
        vec!["#about", "#experience", "#skills", "#certifications", "#contact"]
    );
}

#[test]
fn would_flip_does_not_mutate() {
    let nav = NavState::default();
    assert!(nav.would_flip(60.0));
    assert!(!nav.scrolled());
}

#[test]
fn link_labels_match_section_table() {
    let labels: Vec<&str> = NAV_LINKS.iter().map(|l| l.label).collect();
    let expected: Vec<&str> = SECTIONS.iter().map(|&(_, label, _)| label).collect();
    assert_eq!(labels, expected);
}
