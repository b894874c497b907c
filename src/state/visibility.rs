use super::selection::SelectionSet;
use crate::scale::ColorBucketId;

/// Whether a point is drawn and takes part in hover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityState {
    Normal,
    Hidden,
}

impl VisibilityState {
    pub fn is_visible(self) -> bool {
        matches!(self, VisibilityState::Normal)
    }

    /// Fill opacity for rendering
    pub fn opacity(self) -> f32 {
        match self {
            VisibilityState::Normal => 1.0,
            VisibilityState::Hidden => 0.0,
        }
    }
}

/// Visibility of a point whose colour bucket is `bucket`
///
/// With nothing pinned every point is Normal. Otherwise only points in a
/// pinned bucket are; points without a bucket are Hidden.
pub fn resolve(bucket: Option<ColorBucketId>, selection: &SelectionSet) -> VisibilityState {
    if selection.is_empty() {
        return VisibilityState::Normal;
    }
    match bucket {
        Some(b) if selection.contains(b) => VisibilityState::Normal,
        _ => VisibilityState::Hidden,
    }
}
