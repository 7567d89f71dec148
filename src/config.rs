//! Markup contract the site script binds to.
//!
//! Defaults match the stock page. A page can override any subset by embedding
//! `<script type="application/json" id="site-config">{...}</script>`; missing
//! keys keep their defaults.

use serde::Deserialize;

use crate::consts;
use crate::error::SiteError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub sidebar: SidebarConfig,
    pub theme: ThemeConfig,
    pub greeting_id: String,
    pub resume: ResumeConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub link_selector: String,
    pub section_selector: String,
    pub default_section: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub container_id: String,
    pub toggle_id: String,
    pub open_class: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub dark_class: String,
    pub storage_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub professional_id: String,
    pub education_id: String,
    pub from_id: String,
    pub to_id: String,
    pub apply_id: String,
    pub list_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub name_id: String,
    pub email_id: String,
    pub message_id: String,
    pub name_error_id: String,
    pub email_error_id: String,
    pub message_error_id: String,
    pub success_id: String,
}

impl SiteConfig {
    /// Parse an override block. Empty or whitespace-only input yields defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav: NavConfig::default(),
            sidebar: SidebarConfig::default(),
            theme: ThemeConfig::default(),
            greeting_id: consts::GREETING_ID.into(),
            resume: ResumeConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            link_selector: consts::NAV_LINK_SELECTOR.into(),
            section_selector: consts::SECTION_SELECTOR.into(),
            default_section: consts::DEFAULT_SECTION.into(),
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            container_id: consts::SIDEBAR_ID.into(),
            toggle_id: consts::SIDEBAR_TOGGLE_ID.into(),
            open_class: consts::SIDEBAR_OPEN_CLASS.into(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: consts::THEME_TOGGLE_ID.into(),
            dark_class: consts::DARK_CLASS.into(),
            storage_key: consts::THEME_STORAGE_KEY.into(),
        }
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            professional_id: consts::FILTER_PROFESSIONAL_ID.into(),
            education_id: consts::FILTER_EDUCATION_ID.into(),
            from_id: consts::FILTER_FROM_ID.into(),
            to_id: consts::FILTER_TO_ID.into(),
            apply_id: consts::FILTER_APPLY_ID.into(),
            list_id: consts::RESUME_LIST_ID.into(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: consts::CONTACT_FORM_ID.into(),
            name_id: consts::CONTACT_NAME_ID.into(),
            email_id: consts::CONTACT_EMAIL_ID.into(),
            message_id: consts::CONTACT_MESSAGE_ID.into(),
            name_error_id: consts::ERROR_NAME_ID.into(),
            email_error_id: consts::ERROR_EMAIL_ID.into(),
            message_error_id: consts::ERROR_MESSAGE_ID.into(),
            success_id: consts::CONTACT_SUCCESS_ID.into(),
        }
    }
}
