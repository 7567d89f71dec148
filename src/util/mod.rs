//! Utility helpers shared across the state machines and the browser shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, persisted
//! preferences) from feature logic so the state machines stay testable.

pub mod greeting;
pub mod storage;
