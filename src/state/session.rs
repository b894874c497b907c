//! One live chart: dataset, scales and the interactive state layered on top
//!
//! All interaction goes through [`ChartSession::dispatch`]. Each event touches
//! exactly one piece of state, so selection and zoom compose in any order.

use std::sync::Arc;

use super::selection::SelectionSet;
use super::view::ViewTransform;
use super::visibility::{VisibilityState, resolve};
use crate::chart::{
    AxisModel, ChartFrame, ChartScales, ChartVariant, ColorLegend, Pos, SizeLegend, Tooltip,
    TooltipContent,
};
use crate::data::Dataset;
use crate::scale::{ColorBucketId, ContinuousScale, Rgb};

/// Fill for points whose rating has no bucket
pub const MISSING_FILL: Rgb = Rgb::new(128, 128, 128);

/// User input, already translated to frame coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartEvent {
    /// Legend swatch clicked
    ToggleBucket(ColorBucketId),
    /// Zoom the x axis by `factor` around `anchor_x`
    ZoomAt { anchor_x: f64, factor: f64 },
    /// Drag the x axis by `dx` pixels
    Pan { dx: f64 },
    ResetView,
    /// Pointer moved to `pos`
    Hover(Pos),
    /// Pointer left the chart
    Leave,
}

/// Everything needed to draw one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointVisual {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Rgb,
    pub bucket: Option<ColorBucketId>,
    pub visibility: VisibilityState,
}

impl PointVisual {
    /// Has a drawable position
    pub fn is_placed(&self) -> bool {
        self.cx.is_finite() && self.cy.is_finite() && self.radius.is_finite() && self.radius > 0.0
    }

    /// Drawn and reacting to hover
    pub fn is_interactive(&self) -> bool {
        self.visibility.is_visible() && self.is_placed()
    }

    fn contains(&self, pos: Pos) -> bool {
        let dx = pos.x - self.cx;
        let dy = pos.y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// An explicit chart context; several may exist at once
#[derive(Debug, Clone)]
pub struct ChartSession {
    variant: ChartVariant,
    dataset: Arc<Dataset>,
    frame: ChartFrame,
    scales: ChartScales,
    /// Colour bucket per film, computed once at setup
    buckets: Vec<Option<ColorBucketId>>,
    selection: SelectionSet,
    transform: ViewTransform,
    hovered: Option<usize>,
}

impl ChartSession {
    pub fn new(variant: ChartVariant, dataset: Arc<Dataset>, frame: ChartFrame) -> Self {
        profiling::scope!("chart_session_setup");

        let scales = ChartScales::setup(variant, &frame, &dataset);
        let buckets = dataset
            .films()
            .iter()
            .map(|f| scales.fill.bucket_of(f.avg_rating))
            .collect();

        log::debug!(
            "set up {:?} chart for {} films in {}x{} frame",
            variant,
            dataset.len(),
            frame.width,
            frame.height
        );

        Self {
            variant,
            dataset,
            frame,
            scales,
            buckets,
            selection: SelectionSet::new(),
            transform: ViewTransform::identity(),
            hovered: None,
        }
    }

    pub fn variant(&self) -> ChartVariant {
        self.variant
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Every bucket that at least one film falls into
    pub fn buckets_present(&self) -> SelectionSet {
        self.buckets.iter().flatten().copied().collect()
    }

    pub fn bucket_of(&self, index: usize) -> Option<ColorBucketId> {
        self.buckets.get(index).copied().flatten()
    }

    /// Apply one event
    pub fn dispatch(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::ToggleBucket(bucket) => {
                self.selection = self.selection.toggled(bucket);
                let pinned = self.selection.contains(bucket);
                log::debug!(
                    "{} bucket {} ({} pinned)",
                    if pinned { "pinned" } else { "unpinned" },
                    bucket.index(),
                    self.selection.len()
                );
            }
            ChartEvent::ZoomAt { anchor_x, factor } => self.transform.zoom_at(anchor_x, factor),
            ChartEvent::Pan { dx } => self.transform.pan(dx),
            ChartEvent::ResetView => self.transform.reset(),
            ChartEvent::Hover(pos) => self.hovered = self.hit_test(pos),
            ChartEvent::Leave => self.hovered = None,
        }
    }

    /// The x scale as currently displayed
    pub fn current_x(&self) -> ContinuousScale {
        self.scales.x.rescaled(&self.transform)
    }

    pub fn visibility(&self, index: usize) -> VisibilityState {
        resolve(self.bucket_of(index), &self.selection)
    }

    /// Visual state of one film under the current selection and transform
    pub fn point_visual(&self, index: usize) -> Option<PointVisual> {
        let film = self.dataset.get(index)?;
        let bucket = self.bucket_of(index);
        let fill = bucket
            .and_then(|b| self.scales.fill.output(b))
            .copied()
            .unwrap_or(MISSING_FILL);

        Some(PointVisual {
            index,
            cx: self.transform.apply_x(self.scales.x.map(film.revenue_millions)),
            cy: self.scales.y.map(&film.genre).unwrap_or(f64::NAN),
            radius: self.scales.radius.map(film.runtime_minutes),
            fill,
            bucket,
            visibility: resolve(bucket, &self.selection),
        })
    }

    /// All points in draw order
    pub fn point_visuals(&self) -> impl Iterator<Item = PointVisual> + '_ {
        (0..self.len()).filter_map(|i| self.point_visual(i))
    }

    /// Topmost interactive point under `pos`
    pub fn hit_test(&self, pos: Pos) -> Option<usize> {
        (0..self.len())
            .rev()
            .filter_map(|i| self.point_visual(i))
            .find(|p| p.is_interactive() && p.contains(pos))
            .map(|p| p.index)
    }

    /// Tooltip for the hovered point, if it is still interactive
    pub fn tooltip(&self) -> Option<Tooltip> {
        let index = self.hovered?;
        let visual = self.point_visual(index).filter(PointVisual::is_interactive)?;
        let film = self.dataset.get(index)?;
        Some(Tooltip::place(
            TooltipContent::for_film(film),
            visual.cx,
            visual.cy,
            self.frame.height,
            visual.fill,
        ))
    }

    pub fn axes(&self) -> AxisModel {
        AxisModel::build(self.variant, &self.current_x(), &self.scales.y)
    }

    pub fn color_legend(&self) -> ColorLegend {
        ColorLegend::build(self.variant, &self.frame, &self.scales.fill)
    }

    pub fn size_legend(&self) -> SizeLegend {
        SizeLegend::build(self.variant, &self.frame, &self.scales.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Film;

    fn films(ratings: &[f64]) -> Arc<Dataset> {
        let genres = ["Drama", "Action", "Horror", "Comedy"];
        Arc::new(
            ratings
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    Film::new(
                        format!("Film {i}"),
                        genres[i % genres.len()],
                        "Someone",
                        90.0 + i as f64,
                        10.0 * (i + 1) as f64,
                        *r,
                    )
                })
                .collect(),
        )
    }

    fn session(ratings: &[f64]) -> ChartSession {
        ChartSession::new(
            ChartVariant::Revenue,
            films(ratings),
            ChartFrame::new(800.0, 750.0),
        )
    }

    fn visibilities(s: &ChartSession) -> Vec<VisibilityState> {
        (0..s.len()).map(|i| s.visibility(i)).collect()
    }

    const RATINGS: [f64; 8] = [5.0, 15.0, 32.0, 48.0, 61.0, 77.0, 88.0, 99.0];

    #[test]
    fn test_empty_selection_all_normal() {
        let s = session(&RATINGS);
        assert!(visibilities(&s).iter().all(|v| *v == VisibilityState::Normal));
    }

    #[test]
    fn test_full_selection_all_normal() {
        let mut s = session(&RATINGS);
        for b in s.buckets_present().iter() {
            s.dispatch(ChartEvent::ToggleBucket(b));
        }
        assert!(!s.selection().is_empty());
        assert!(visibilities(&s).iter().all(|v| *v == VisibilityState::Normal));
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut s = session(&RATINGS);
        s.dispatch(ChartEvent::ToggleBucket(ColorBucketId(3)));
        let before = s.selection().clone();

        s.dispatch(ChartEvent::ToggleBucket(ColorBucketId(6)));
        s.dispatch(ChartEvent::ToggleBucket(ColorBucketId(6)));
        assert_eq!(s.selection(), &before);
    }

    #[test]
    fn test_partition_matches_selected_buckets() {
        let mut s = session(&RATINGS);
        let pinned = [ColorBucketId(1), ColorBucketId(7)];
        for b in pinned {
            s.dispatch(ChartEvent::ToggleBucket(b));
        }

        for i in 0..s.len() {
            let in_selection = s.bucket_of(i).is_some_and(|b| pinned.contains(&b));
            let expected = if in_selection {
                VisibilityState::Normal
            } else {
                VisibilityState::Hidden
            };
            assert_eq!(s.visibility(i), expected, "film {i}");
        }
        // 15 and 77 fall in buckets 1 and 7
        assert_eq!(s.visibility(1), VisibilityState::Normal);
        assert_eq!(s.visibility(5), VisibilityState::Normal);
    }

    #[test]
    fn test_visibility_independent_of_transform() {
        let mut s = session(&RATINGS);
        s.dispatch(ChartEvent::ToggleBucket(ColorBucketId(4)));
        let at_identity: Vec<_> = s.point_visuals().collect();

        s.dispatch(ChartEvent::ZoomAt {
            anchor_x: 300.0,
            factor: 6.0,
        });
        s.dispatch(ChartEvent::Pan { dx: -120.0 });
        let zoomed: Vec<_> = s.point_visuals().collect();

        for (a, b) in at_identity.iter().zip(&zoomed) {
            assert_eq!(a.visibility, b.visibility);
            assert_eq!(a.cy, b.cy);
            assert_eq!(a.fill, b.fill);
        }
        assert!(at_identity.iter().zip(&zoomed).any(|(a, b)| a.cx != b.cx));
    }

    #[test]
    fn test_three_bucket_scenario() {
        let dataset = films(&[10.0, 50.0, 90.0]);
        let mut s = ChartSession::new(
            ChartVariant::Revenue,
            dataset,
            ChartFrame::new(800.0, 750.0),
        );
        // three-colour quantile over [0, 100]
        s.scales.fill = crate::scale::ScaleQuantile::new(
            [0.0, 100.0],
            vec![Rgb::BLACK, MISSING_FILL, Rgb::WHITE],
        );
        s.buckets = s
            .dataset
            .ratings()
            .map(|r| s.scales.fill.bucket_of(r))
            .collect();
        assert_eq!(
            s.buckets,
            vec![
                Some(ColorBucketId(0)),
                Some(ColorBucketId(1)),
                Some(ColorBucketId(2))
            ]
        );

        let a = ColorBucketId(0);
        s.dispatch(ChartEvent::ToggleBucket(a));
        assert_eq!(
            visibilities(&s),
            vec![
                VisibilityState::Normal,
                VisibilityState::Hidden,
                VisibilityState::Hidden
            ]
        );

        s.dispatch(ChartEvent::ToggleBucket(a));
        assert!(s.selection().is_empty());
        assert_eq!(visibilities(&s), vec![VisibilityState::Normal; 3]);
    }

    #[test]
    fn test_zoom_and_toggle_commute() {
        let zoom = ChartEvent::ZoomAt {
            anchor_x: 420.0,
            factor: 2.5,
        };
        let toggle = ChartEvent::ToggleBucket(ColorBucketId(8));

        let mut a = session(&RATINGS);
        a.dispatch(zoom);
        a.dispatch(toggle);

        let mut b = session(&RATINGS);
        b.dispatch(toggle);
        b.dispatch(zoom);

        assert_eq!(a.selection(), b.selection());
        assert_eq!(a.transform(), b.transform());
        assert_eq!(
            a.point_visuals().collect::<Vec<_>>(),
            b.point_visuals().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reset_keeps_selection() {
        let mut s = session(&RATINGS);
        s.dispatch(ChartEvent::ToggleBucket(ColorBucketId(2)));
        s.dispatch(ChartEvent::ZoomAt {
            anchor_x: 200.0,
            factor: 3.0,
        });
        s.dispatch(ChartEvent::ResetView);
        assert!(s.transform().is_identity());
        assert!(s.selection().contains(ColorBucketId(2)));
    }

    #[test]
    fn test_missing_rating_has_no_bucket() {
        let mut s = session(&[f64::NAN, 50.0]);
        assert_eq!(s.bucket_of(0), None);
        let p = s.point_visual(0).unwrap();
        assert_eq!(p.fill, MISSING_FILL);
        assert_eq!(p.visibility, VisibilityState::Normal);

        s.dispatch(ChartEvent::ToggleBucket(s.bucket_of(1).unwrap()));
        assert_eq!(s.visibility(0), VisibilityState::Hidden);
    }

    #[test]
    fn test_unplaceable_points_are_not_interactive() {
        let dataset = Arc::new(
            [
                Film::new("No revenue", "Drama", "", 100.0, f64::NAN, 50.0),
                Film::new("Odd genre", "Western", "", 100.0, 50.0, 50.0),
                Film::new("Zero revenue", "Drama", "", 100.0, 0.0, 50.0),
            ]
            .into_iter()
            .collect::<Dataset>(),
        );
        let s = ChartSession::new(ChartVariant::Revenue, dataset, ChartFrame::new(800.0, 750.0));
        assert!(s.point_visuals().all(|p| !p.is_interactive()));
    }

    #[test]
    fn test_hover_uses_current_position() {
        let mut s = session(&RATINGS);
        let before = s.point_visual(3).unwrap();

        s.dispatch(ChartEvent::ZoomAt {
            anchor_x: 160.0,
            factor: 1.5,
        });
        let after = s.point_visual(3).unwrap();
        assert_ne!(before.cx, after.cx);

        s.dispatch(ChartEvent::Hover(Pos::new(after.cx, after.cy)));
        assert_eq!(s.hovered(), Some(3));

        let tip = s.tooltip().unwrap();
        assert_eq!(tip.anchor.x, after.cx);
        assert_eq!(tip.fill, after.fill);
        assert_eq!(tip.content.rows[0].1, "Film 3");

        s.dispatch(ChartEvent::Leave);
        assert!(s.tooltip().is_none());
    }

    #[test]
    fn test_hidden_points_ignore_hover() {
        let mut s = session(&RATINGS);
        let p = s.point_visual(0).unwrap();
        s.dispatch(ChartEvent::Hover(Pos::new(p.cx, p.cy)));
        assert_eq!(s.hovered(), Some(0));

        // pinning another bucket hides the hovered point and its tooltip
        s.dispatch(ChartEvent::ToggleBucket(ColorBucketId(9)));
        assert!(s.tooltip().is_none());

        s.dispatch(ChartEvent::Hover(Pos::new(p.cx, p.cy)));
        assert_eq!(s.hovered(), None);
    }

    #[test]
    fn test_topmost_point_wins() {
        let dataset = Arc::new(
            [
                Film::new("Below", "Drama", "", 120.0, 100.0, 20.0),
                Film::new("Above", "Drama", "", 120.0, 100.0, 80.0),
            ]
            .into_iter()
            .collect::<Dataset>(),
        );
        let s = ChartSession::new(ChartVariant::Revenue, dataset, ChartFrame::new(800.0, 750.0));
        let p = s.point_visual(0).unwrap();
        assert_eq!(s.hit_test(Pos::new(p.cx, p.cy)), Some(1));
        assert_eq!(s.hit_test(Pos::new(p.cx + p.radius + 1.0, p.cy)), None);
    }
}
