//! Panel configuration

use serde::Deserialize;

/// Number of user rows shown per directory page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Tunables for the workstation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Rows per page. Zero is treated as one.
    pub page_size: usize,
}

impl PanelConfig {
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
