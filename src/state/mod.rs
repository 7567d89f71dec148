//! Feature state machines.
//!
//! DESIGN
//! ======
//! Each feature owns a small value type with pure transitions. Nothing here
//! touches the document; [`ui::UiState`] turns events into [`ui::Patch`]es
//! and the browser shell renders them.

pub mod contact;
pub mod nav;
pub mod resume;
pub mod sidebar;
pub mod theme;
pub mod ui;
