//! Scanner configuration.

/// Columns a tab advances by default.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// Tunables copied into the scanner at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Columns a `\t` advances the cursor by.
    pub tab_width: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width;
        self
    }
}
