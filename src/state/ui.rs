//! UI interaction state

use crate::chart::ChartVariant;

/// Page shown in the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    Chart(ChartVariant),
    Gallery,
}

impl Default for ActivePage {
    fn default() -> Self {
        ActivePage::Chart(ChartVariant::default())
    }
}

/// UI state: current page and status-bar messages
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently shown page
    pub active_page: ActivePage,

    /// Error message to display in UI (toast/status bar)
    pub error_message: Option<String>,

    /// Informational status line, e.g. "Loading..."
    pub status: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant of the visible chart, if a chart page is shown
    pub fn active_variant(&self) -> Option<ChartVariant> {
        match self.active_page {
            ActivePage::Chart(variant) => Some(variant),
            ActivePage::Gallery => None,
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the current error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Check if there's an error to display
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.has_error());
        ui.set_error("File error: not found");
        assert!(ui.has_error());
        ui.clear_error();
        assert!(!ui.has_error());
    }

    #[test]
    fn test_active_variant() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_variant(), Some(ChartVariant::Revenue));
        ui.active_page = ActivePage::Gallery;
        assert_eq!(ui.active_variant(), None);
    }
}
