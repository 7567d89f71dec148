//! Single-section navigation.
//!
//! Exactly one section is visible after construction and after every
//! successful [`NavState::navigate`].

use crate::error::SiteError;

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    sections: Vec<String>,
    active: usize,
}

impl NavState {
    /// Build from the section ids found in the page, showing `initial`.
    pub fn new(sections: Vec<String>, initial: &str) -> Result<Self, SiteError> {
        if sections.is_empty() {
            return Err(SiteError::NoSections);
        }
        let active = position(&sections, initial)?;
        Ok(Self { sections, active })
    }

    /// Show `target` and hide every other section. An unknown target leaves
    /// the current section visible.
    pub fn navigate(&mut self, target: &str) -> Result<(), SiteError> {
        self.active = position(&self.sections, target)?;
        log::debug!("nav: showing {target}");
        Ok(())
    }

    pub fn active(&self) -> &str {
        &self.sections[self.active]
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.active() == id
    }

    /// Visible sections in document order. Always a single element.
    pub fn visible(&self) -> Vec<&str> {
        self.sections.iter().map(String::as_str).filter(|id| self.is_visible(id)).collect()
    }
}

fn position(sections: &[String], id: &str) -> Result<usize, SiteError> {
    sections
        .iter()
        .position(|s| s == id)
        .ok_or_else(|| SiteError::UnknownSection(id.to_owned()))
}

/// Section id addressed by a link href such as `#about`.
pub fn section_from_href(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href);
    if id.is_empty() { None } else { Some(id) }
}
