use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_stock_markup() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.nav.link_selector, ".nav-link");
    assert_eq!(cfg.nav.section_selector, ".page-section");
    assert_eq!(cfg.nav.default_section, "home");
    assert_eq!(cfg.sidebar.container_id, "sidebar");
    assert_eq!(cfg.sidebar.toggle_id, "hamburger");
    assert_eq!(cfg.sidebar.open_class, "active");
    assert_eq!(cfg.theme.toggle_id, "toggle-mode");
    assert_eq!(cfg.theme.dark_class, "dark");
    assert_eq!(cfg.theme.storage_key, "darkmode");
    assert_eq!(cfg.greeting_id, "greeting");
    assert_eq!(cfg.resume.list_id, "resume-list");
    assert_eq!(cfg.contact.success_id, "contact-success");
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_blank_is_default() {
    assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_overrides_nested_subset() {
    let cfg = SiteConfig::from_json(r#"{"nav": {"default_section": "about"}, "theme": {"storage_key": "theme"}}"#)
        .unwrap();
    assert_eq!(cfg.nav.default_section, "about");
    assert_eq!(cfg.nav.link_selector, ".nav-link");
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.theme.dark_class, "dark");
    assert_eq!(cfg.contact, ContactConfig::default());
}

#[test]
fn from_json_overrides_top_level_greeting() {
    let cfg = SiteConfig::from_json(r#"{"greeting_id": "hello"}"#).unwrap();
    assert_eq!(cfg.greeting_id, "hello");
}

#[test]
fn from_json_malformed_is_config_error() {
    let err = SiteConfig::from_json(r#"{"nav": "#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn from_json_wrong_type_is_config_error() {
    let err = SiteConfig::from_json(r#"{"nav": {"default_section": 3}}"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}
