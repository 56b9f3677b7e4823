use log::info;

/// One-way latch recording that the candidate navigated away from the
/// session tab. Visibility transitions can only set the flag; clearing it
/// takes an explicit user acknowledgement.
#[derive(Debug, Clone, Default)]
pub struct VisibilityMonitor {
    left_tab: bool,
}

impl VisibilityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page-visibility transition. Returns true when a hidden
    /// transition newly latches the flag, so callers can emit a warning
    /// exactly once per latch.
    pub fn record_visibility(&mut self, hidden: bool) -> bool {
        if hidden && !self.left_tab {
            self.left_tab = true;
            info!("session tab hidden; integrity flag latched");
            return true;
        }
        false
    }

    pub fn left_tab_at_least_once(&self) -> bool {
        self.left_tab
    }

    /// Clear the displayable flag after the candidate acknowledges the
    /// warning. A later hidden transition latches again.
    pub fn dismiss(&mut self) {
        self.left_tab = false;
    }
}
