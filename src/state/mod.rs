//! Application state management
//!
//! The application state is split into focused pieces: display options
//! (`ViewState`), status and page (`UiState`) and one `ChartSession` per
//! chart variant. Sessions are explicit values owned here, never globals.

mod selection;
mod session;
mod ui;
mod view;
mod visibility;

pub use selection::SelectionSet;
pub use session::{ChartEvent, ChartSession};
pub use ui::{ActivePage, UiState};
pub use view::{ViewState, ViewTransform};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::chart::{ChartFrame, ChartVariant};
use crate::data::Dataset;

/// Main application state container
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset; None until the first load completes
    pub dataset: Option<Arc<Dataset>>,

    /// Chart sessions, created lazily per variant
    pub sessions: HashMap<ChartVariant, ChartSession>,

    /// View and visualization state
    pub view: ViewState,

    /// UI interaction state
    pub ui: UiState,

    /// Currently loaded file path
    pub current_file: Option<PathBuf>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if data is loaded
    pub fn has_data(&self) -> bool {
        self.dataset.is_some()
    }

    /// Replace the dataset; every chart is set up again from scratch
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.current_file = dataset.source().map(|p| p.to_path_buf());
        self.sessions.clear();
        self.dataset = Some(dataset);
        self.ui.clear_error();
    }

    /// Drop the dataset and every chart built on it
    pub fn clear_data(&mut self) {
        self.dataset = None;
        self.sessions.clear();
        self.current_file = None;
    }

    /// Session for `variant`, set up with `frame` the first time it is requested
    pub fn session_or_setup(
        &mut self,
        variant: ChartVariant,
        frame: ChartFrame,
    ) -> Option<&mut ChartSession> {
        let dataset = self.dataset.as_ref()?;
        Some(
            self.sessions
                .entry(variant)
                .or_insert_with(|| ChartSession::new(variant, Arc::clone(dataset), frame)),
        )
    }

    pub fn session_mut(&mut self, variant: ChartVariant) -> Option<&mut ChartSession> {
        self.sessions.get_mut(&variant)
    }

    /// Number of films in the loaded dataset
    pub fn row_count(&self) -> usize {
        self.dataset.as_ref().map(|d| d.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Film;
    use crate::scale::ColorBucketId;

    fn dataset() -> Arc<Dataset> {
        Arc::new(
            [Film::new("Moana", "Animation", "Ron Clements", 107.0, 248.75, 76.0)]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn test_no_session_before_load() {
        let mut state = AppState::new();
        assert!(!state.has_data());
        assert!(state
            .session_or_setup(ChartVariant::Revenue, ChartFrame::new(800.0, 750.0))
            .is_none());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut state = AppState::new();
        state.set_dataset(dataset());
        let frame = ChartFrame::new(800.0, 750.0);

        state
            .session_or_setup(ChartVariant::Revenue, frame)
            .unwrap()
            .dispatch(ChartEvent::ToggleBucket(ColorBucketId(7)));
        let classic = state.session_or_setup(ChartVariant::Classic, frame).unwrap();
        assert!(classic.selection().is_empty());

        // frame is captured once; later sizes are ignored
        let revenue = state
            .session_or_setup(ChartVariant::Revenue, ChartFrame::new(1200.0, 900.0))
            .unwrap();
        assert_eq!(revenue.frame().width, 800.0);
        assert!(revenue.selection().contains(ColorBucketId(7)));
    }

    #[test]
    fn test_reload_discards_sessions() {
        let mut state = AppState::new();
        state.set_dataset(dataset());
        state.session_or_setup(ChartVariant::Revenue, ChartFrame::new(800.0, 750.0));
        assert_eq!(state.sessions.len(), 1);

        state.set_dataset(dataset());
        assert!(state.sessions.is_empty());
        assert_eq!(state.row_count(), 1);

        state.clear_data();
        assert!(!state.has_data());
    }
}
