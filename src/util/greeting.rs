//! Time-of-day greeting.
//!
//! Computed once at startup from the local clock and never refreshed, so a
//! page left open across a boundary keeps its original greeting.

use crate::consts::{AFTERNOON_FROM_HOUR, EVENING_FROM_HOUR, GREETING_AFTERNOON, GREETING_EVENING, GREETING_MORNING};

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

/// Greeting for a local hour in `0..=23`.
pub fn greeting_for(hour: u32) -> &'static str {
    if hour < AFTERNOON_FROM_HOUR {
        GREETING_MORNING
    } else if hour < EVENING_FROM_HOUR {
        GREETING_AFTERNOON
    } else {
        GREETING_EVENING
    }
}

/// Current local hour from the browser clock.
#[cfg(feature = "hydrate")]
pub fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}
