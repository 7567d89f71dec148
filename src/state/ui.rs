//! Whole-page UI state and the event dispatcher.
//!
//! DESIGN
//! ======
//! The browser shell owns one [`UiState`]. Every DOM event becomes a
//! [`UiEvent`]; [`UiState::handle`] updates the feature state and returns the
//! [`Patch`]es the shell must render. Features never read each other's state.

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::contact::{ContactFields, ContactForm, FieldErrors, SubmitOutcome};
use crate::state::nav::NavState;
use crate::state::resume::{FilterCriteria, RESUME, render_labels};
use crate::state::sidebar::SidebarState;
use crate::state::theme::{ThemeEffects, ThemeState};
use crate::util::greeting::greeting_for;
use crate::util::storage::PreferenceStore;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// User interactions forwarded by the browser shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A navigation link targeting a section id was clicked.
    Navigate(String),
    ToggleSidebar,
    ToggleTheme,
    /// Apply button or a filter control changed.
    FilterResume(FilterCriteria),
    /// Keystroke in any contact field.
    ContactInput(ContactFields),
    ContactSubmit(ContactFields),
}

/// Document changes produced by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Hide every section except this one.
    ShowSection(String),
    Sidebar { open: bool },
    Theme(ThemeEffects),
    Greeting(&'static str),
    /// Replace the resume list with these item labels.
    ResumeList(Vec<String>),
    ContactErrors(FieldErrors),
    /// Hide the form and show the success message.
    ContactSubmitted,
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub nav: NavState,
    pub sidebar: SidebarState,
    pub theme: ThemeState,
    pub greeting: &'static str,
    pub resume: Vec<String>,
    pub contact: ContactForm,
}

impl UiState {
    /// Initial state plus the patches for the first render: default section,
    /// restored theme, greeting and the resume list for the markup's default
    /// filter values. `sidebar_open` is whatever the markup ships with, so the
    /// first toggle always flips the visible state.
    pub fn start(
        sections: Vec<String>,
        config: &SiteConfig,
        hour: u32,
        criteria: FilterCriteria,
        sidebar_open: bool,
        store: &mut dyn PreferenceStore,
    ) -> Result<(Self, Vec<Patch>), SiteError> {
        let nav = NavState::new(sections, &config.nav.default_section)?;
        let mut theme = ThemeState::new(config.theme.storage_key.clone());
        let theme_effects = theme.restore(store);
        let greeting = greeting_for(hour);
        let resume = render_labels(RESUME, &criteria);

        let patches = vec![
            Patch::ShowSection(nav.active().to_owned()),
            Patch::Theme(theme_effects),
            Patch::Greeting(greeting),
            Patch::ResumeList(resume.clone()),
        ];
        let state = Self {
            nav,
            sidebar: SidebarState { open: sidebar_open },
            theme,
            greeting,
            resume,
            contact: ContactForm::default(),
        };
        log::debug!("ui: started on section {}", state.nav.active());
        Ok((state, patches))
    }

    pub fn handle(&mut self, event: UiEvent, store: &mut dyn PreferenceStore) -> Result<Vec<Patch>, SiteError> {
        let patches = match event {
            UiEvent::Navigate(target) => {
                self.nav.navigate(&target)?;
                vec![Patch::ShowSection(target)]
            }
            UiEvent::ToggleSidebar => vec![Patch::Sidebar { open: self.sidebar.toggle() }],
            UiEvent::ToggleTheme => vec![Patch::Theme(self.theme.toggle(store))],
            UiEvent::FilterResume(criteria) => {
                self.resume = render_labels(RESUME, &criteria);
                log::debug!("resume: {} of {} records visible", self.resume.len(), RESUME.len());
                vec![Patch::ResumeList(self.resume.clone())]
            }
            UiEvent::ContactInput(fields) => vec![Patch::ContactErrors(self.contact.input(&fields).errors)],
            UiEvent::ContactSubmit(fields) => match self.contact.submit(&fields) {
                SubmitOutcome::Rejected(validation) => vec![Patch::ContactErrors(validation.errors)],
                SubmitOutcome::Submitted => {
                    vec![Patch::ContactErrors(FieldErrors::default()), Patch::ContactSubmitted]
                }
                SubmitOutcome::AlreadySubmitted => Vec::new(),
            },
        };
        Ok(patches)
    }
}
