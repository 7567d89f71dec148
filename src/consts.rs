//! Default markup contract, literals and user-facing strings.

// ── Navigation ──────────────────────────────────────────────────

/// Selector for links that switch the visible section.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Selector for the mutually exclusive content sections.
pub const SECTION_SELECTOR: &str = ".page-section";

/// Section shown when the page starts.
pub const DEFAULT_SECTION: &str = "home";

// ── Sidebar ─────────────────────────────────────────────────────

pub const SIDEBAR_ID: &str = "sidebar";
pub const SIDEBAR_TOGGLE_ID: &str = "hamburger";

/// Class present on the sidebar while it is open.
pub const SIDEBAR_OPEN_CLASS: &str = "active";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "toggle-mode";

/// Class present on `<body>` while the dark theme is applied.
pub const DARK_CLASS: &str = "dark";

/// `localStorage` key holding the theme flag.
pub const THEME_STORAGE_KEY: &str = "darkmode";

pub const STORED_DARK: &str = "1";
pub const STORED_LIGHT: &str = "0";

/// Toggle icon while dark: offers the way back to light.
pub const ICON_DARK: &str = "\u{2600}\u{fe0f}";

/// Toggle icon while light.
pub const ICON_LIGHT: &str = "\u{1f319}";

// ── Greeting ────────────────────────────────────────────────────

pub const GREETING_ID: &str = "greeting";

pub const GREETING_MORNING: &str = "Good morning!";
pub const GREETING_AFTERNOON: &str = "Good afternoon!";
pub const GREETING_EVENING: &str = "Good evening!";

/// First hour that greets with "afternoon".
pub const AFTERNOON_FROM_HOUR: u32 = 12;

/// First hour that greets with "evening".
pub const EVENING_FROM_HOUR: u32 = 18;

// ── Resume ──────────────────────────────────────────────────────

pub const FILTER_PROFESSIONAL_ID: &str = "filter-professional";
pub const FILTER_EDUCATION_ID: &str = "filter-education";
pub const FILTER_FROM_ID: &str = "filter-from";
pub const FILTER_TO_ID: &str = "filter-to";
pub const FILTER_APPLY_ID: &str = "apply-filter";
pub const RESUME_LIST_ID: &str = "resume-list";

// ── Contact ─────────────────────────────────────────────────────

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const ERROR_NAME_ID: &str = "error-name";
pub const ERROR_EMAIL_ID: &str = "error-email";
pub const ERROR_MESSAGE_ID: &str = "error-message";
pub const CONTACT_SUCCESS_ID: &str = "contact-success";

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";

// ── Config ──────────────────────────────────────────────────────

/// Optional inline JSON block overriding [`crate::config::SiteConfig`] defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";
