use super::*;

fn sections() -> Vec<String> {
    ["home", "about", "resume", "contact", "imprint"].iter().map(ToString::to_string).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_shows_only_initial_section() {
    let nav = NavState::new(sections(), "home").unwrap();
    assert_eq!(nav.active(), "home");
    assert_eq!(nav.visible(), vec!["home"]);
}

#[test]
fn new_rejects_empty_section_list() {
    let err = NavState::new(Vec::new(), "home").unwrap_err();
    assert!(matches!(err, SiteError::NoSections));
}

#[test]
fn new_rejects_unknown_initial_section() {
    let err = NavState::new(sections(), "blog").unwrap_err();
    assert!(matches!(err, SiteError::UnknownSection(ref id) if id == "blog"));
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_every_section_leaves_exactly_that_one_visible() {
    let mut nav = NavState::new(sections(), "home").unwrap();
    for target in sections() {
        nav.navigate(&target).unwrap();
        assert_eq!(nav.visible(), vec![target.as_str()]);
        assert!(nav.is_visible(&target));
    }
}

#[test]
fn navigate_to_current_section_is_stable() {
    let mut nav = NavState::new(sections(), "about").unwrap();
    nav.navigate("about").unwrap();
    assert_eq!(nav.visible(), vec!["about"]);
}

#[test]
fn navigate_unknown_keeps_previous_section() {
    let mut nav = NavState::new(sections(), "home").unwrap();
    nav.navigate("resume").unwrap();
    assert!(nav.navigate("missing").is_err());
    assert_eq!(nav.active(), "resume");
}

// =============================================================
// section_from_href
// =============================================================

#[test]
fn href_hash_is_stripped() {
    assert_eq!(section_from_href("#contact"), Some("contact"));
}

#[test]
fn href_without_hash_is_used_as_is() {
    assert_eq!(section_from_href("about"), Some("about"));
}

#[test]
fn href_bare_hash_has_no_target() {
    assert_eq!(section_from_href("#"), None);
    assert_eq!(section_from_href(""), None);
}
