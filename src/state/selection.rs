use std::collections::BTreeSet;

use crate::scale::ColorBucketId;

/// Colour buckets pinned through the legend
///
/// An empty set means "no filter": every point is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    pinned: BTreeSet<ColorBucketId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this set with `bucket` added or removed
    pub fn toggled(&self, bucket: ColorBucketId) -> Self {
        let mut next = self.clone();
        next.toggle(bucket);
        next
    }

    /// Add or remove `bucket`; returns whether it is now pinned
    pub fn toggle(&mut self, bucket: ColorBucketId) -> bool {
        if self.pinned.remove(&bucket) {
            false
        } else {
            self.pinned.insert(bucket);
            true
        }
    }

    pub fn contains(&self, bucket: ColorBucketId) -> bool {
        self.pinned.contains(&bucket)
    }

    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pinned.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ColorBucketId> + '_ {
        self.pinned.iter().copied()
    }
}

impl FromIterator<ColorBucketId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ColorBucketId>>(iter: I) -> Self {
        Self {
            pinned: iter.into_iter().collect(),
        }
    }
}
