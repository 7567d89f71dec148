//! Mobile sidebar open/closed flag.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
}

impl SidebarState {
    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }
}
