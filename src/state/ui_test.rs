use super::*;
use crate::state::contact::Phase;
use crate::state::theme::Theme;
use crate::util::storage::MemoryStore;

fn sections() -> Vec<String> {
    ["home", "about", "resume", "contact"].iter().map(ToString::to_string).collect()
}

fn started(store: &mut MemoryStore) -> (UiState, Vec<Patch>) {
    UiState::start(sections(), &SiteConfig::default(), 9, FilterCriteria::default(), false, store).unwrap()
}

fn fields(name: &str, email: &str, message: &str) -> ContactFields {
    ContactFields { name: name.into(), email: email.into(), message: message.into() }
}

// =============================================================
// start
// =============================================================

#[test]
fn start_renders_home_theme_greeting_and_resume() {
    let mut store = MemoryStore::new();
    let (state, patches) = started(&mut store);
    assert_eq!(patches.len(), 4);
    assert_eq!(patches[0], Patch::ShowSection("home".into()));
    assert_eq!(patches[1], Patch::Theme(Theme::Light.into()));
    assert_eq!(patches[2], Patch::Greeting("Good morning!"));
    assert!(matches!(&patches[3], Patch::ResumeList(items) if items.len() == RESUME.len()));
    assert_eq!(state.nav.active(), "home");
    assert!(!state.sidebar.open);
    assert_eq!(state.contact.phase(), Phase::Editing);
}

#[test]
fn start_restores_dark_theme_from_store() {
    let mut store = MemoryStore::with("darkmode", "1");
    let (state, patches) = started(&mut store);
    assert_eq!(state.theme.theme(), Theme::Dark);
    assert!(patches.contains(&Patch::Theme(Theme::Dark.into())));
}

#[test]
fn start_uses_greeting_for_hour() {
    let mut store = MemoryStore::new();
    let (state, _) =
        UiState::start(sections(), &SiteConfig::default(), 19, FilterCriteria::default(), false, &mut store).unwrap();
    assert_eq!(state.greeting, "Good evening!");
}

#[test]
fn start_fails_fast_without_default_section() {
    let mut store = MemoryStore::new();
    let only_about = vec!["about".to_string()];
    let err = UiState::start(only_about, &SiteConfig::default(), 9, FilterCriteria::default(), false, &mut store)
        .unwrap_err();
    assert!(matches!(err, SiteError::UnknownSection(ref id) if id == "home"));
}

#[test]
fn start_honours_configured_default_section() {
    let mut store = MemoryStore::new();
    let config = SiteConfig::from_json(r#"{"nav": {"default_section": "about"}}"#).unwrap();
    let (state, patches) =
        UiState::start(sections(), &config, 9, FilterCriteria::default(), false, &mut store).unwrap();
    assert_eq!(state.nav.active(), "about");
    assert_eq!(patches[0], Patch::ShowSection("about".into()));
}

// =============================================================
// handle
// =============================================================

#[test]
fn navigate_emits_show_section() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    let patches = state.handle(UiEvent::Navigate("contact".into()), &mut store).unwrap();
    assert_eq!(patches, vec![Patch::ShowSection("contact".into())]);
    assert_eq!(state.nav.visible(), vec!["contact"]);
}

#[test]
fn navigate_unknown_section_is_an_error() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    assert!(state.handle(UiEvent::Navigate("blog".into()), &mut store).is_err());
    assert_eq!(state.nav.active(), "home");
}

#[test]
fn sidebar_toggle_alternates() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    assert_eq!(state.handle(UiEvent::ToggleSidebar, &mut store).unwrap(), vec![Patch::Sidebar { open: true }]);
    assert_eq!(state.handle(UiEvent::ToggleSidebar, &mut store).unwrap(), vec![Patch::Sidebar { open: false }]);
}

#[test]
fn sidebar_shipped_open_closes_on_first_toggle() {
    let mut store = MemoryStore::new();
    let (mut state, _) =
        UiState::start(sections(), &SiteConfig::default(), 9, FilterCriteria::default(), true, &mut store).unwrap();
    assert!(state.sidebar.open);
    assert_eq!(state.handle(UiEvent::ToggleSidebar, &mut store).unwrap(), vec![Patch::Sidebar { open: false }]);
    assert!(!state.sidebar.open);
}

#[test]
fn theme_toggle_persists_and_patches() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    let patches = state.handle(UiEvent::ToggleTheme, &mut store).unwrap();
    assert_eq!(patches, vec![Patch::Theme(Theme::Dark.into())]);
    assert_eq!(store.get("darkmode").as_deref(), Some("1"));
}

#[test]
fn filter_replaces_resume_list() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    let criteria = FilterCriteria::from_controls(true, false, "2020", "2022");
    let patches = state.handle(UiEvent::FilterResume(criteria), &mut store).unwrap();
    assert_eq!(state.resume.len(), 5);
    assert_eq!(patches, vec![Patch::ResumeList(state.resume.clone())]);
}

#[test]
fn contact_input_patches_errors() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    let patches = state.handle(UiEvent::ContactInput(fields("Jo", "jo", "")), &mut store).unwrap();
    assert_eq!(
        patches,
        vec![Patch::ContactErrors(FieldErrors { name: "", email: "Invalid email", message: "Required" })]
    );
}

#[test]
fn contact_submit_invalid_keeps_form() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    let patches = state.handle(UiEvent::ContactSubmit(fields("", "x@y.z", "hi")), &mut store).unwrap();
    assert_eq!(patches, vec![Patch::ContactErrors(FieldErrors { name: "Required", email: "", message: "" })]);
    assert_eq!(state.contact.phase(), Phase::Editing);
    assert!(!state.contact.last().valid);
}

#[test]
fn contact_submit_valid_swaps_once() {
    let mut store = MemoryStore::new();
    let (mut state, _) = started(&mut store);
    let valid = fields("Jo", "jo@example.com", "Hello");
    let patches = state.handle(UiEvent::ContactSubmit(valid.clone()), &mut store).unwrap();
    assert_eq!(patches, vec![Patch::ContactErrors(FieldErrors::default()), Patch::ContactSubmitted]);
    assert!(state.handle(UiEvent::ContactSubmit(valid), &mut store).unwrap().is_empty());
}
