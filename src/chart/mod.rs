//! Chart model
//!
//! Everything needed to draw one scatterplot, computed from the dataset and
//! the frame size without touching the GUI: scales, axes, legends and
//! tooltips. The `ui` module only converts these into paint calls.

pub mod axis;
pub mod gallery;
pub mod legend;
pub mod tooltip;

use serde::{Deserialize, Serialize};

use crate::constants::Margins;
use crate::constants::chart::{
    CATEGORIES, CLASSIC_MARGINS, CLASSIC_PALETTE, RADIUS_RANGE, RATING_DOMAIN,
    REVENUE_LINEAR_DOMAIN, REVENUE_LOG_DOMAIN, REVENUE_MARGINS, REVENUE_PALETTE, RUNTIME_DOMAIN,
    Y_GRID_OFFSET, Y_RANGE_INSET,
};
use crate::data::Dataset;
use crate::data::stats::extent;
use crate::format::NumberFormat;
use crate::scale::{
    ContinuousScale, Rgb, ScaleLinear, ScaleLog, ScalePoint, ScaleQuantile, parse_palette,
};

pub use axis::AxisModel;
pub use legend::{ColorLegend, SizeLegend};
pub use tooltip::{Tooltip, TooltipContent, TooltipDirection};

/// A point in frame coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in frame coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Pos,
    pub max: Pos,
}

impl Bounds {
    pub fn from_min_size(min: Pos, width: f64, height: f64) -> Self {
        Self {
            min,
            max: Pos::new(min.x + width, min.y + height),
        }
    }

    pub fn contains(&self, p: Pos) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Which of the two scatterplot pages a chart reproduces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartVariant {
    /// Log revenue axis, fixed rating and runtime domains
    #[default]
    Revenue,
    /// Linear revenue axis, domains taken from the data
    Classic,
}

impl ChartVariant {
    pub const ALL: [ChartVariant; 2] = [ChartVariant::Revenue, ChartVariant::Classic];

    pub fn label(self) -> &'static str {
        match self {
            ChartVariant::Revenue => "Revenue (log)",
            ChartVariant::Classic => "Classic",
        }
    }

    pub fn margins(self) -> Margins {
        match self {
            ChartVariant::Revenue => REVENUE_MARGINS,
            ChartVariant::Classic => CLASSIC_MARGINS,
        }
    }

    pub fn palette(self) -> Vec<Rgb> {
        match self {
            ChartVariant::Revenue => parse_palette(&REVENUE_PALETTE),
            ChartVariant::Classic => parse_palette(&CLASSIC_PALETTE),
        }
    }

    pub fn x_tick_count(self) -> usize {
        match self {
            ChartVariant::Revenue => 5,
            ChartVariant::Classic => 10,
        }
    }

    pub fn x_tick_format(self) -> NumberFormat {
        NumberFormat::Grouped
    }

    /// Colour legend label format
    pub fn legend_format(self) -> NumberFormat {
        match self {
            ChartVariant::Revenue => NumberFormat::GroupedInteger,
            ChartVariant::Classic => NumberFormat::Fixed(2),
        }
    }

    pub fn size_legend_format(self) -> NumberFormat {
        match self {
            ChartVariant::Revenue => NumberFormat::GroupedInteger,
            ChartVariant::Classic => NumberFormat::Fixed(1),
        }
    }

    /// Horizontal gap between the plot's right edge and the legends
    pub fn legend_gap(self) -> f64 {
        match self {
            ChartVariant::Revenue => 20.0,
            ChartVariant::Classic => 10.0,
        }
    }

    /// Top of the size legend, below the frame's top margin
    pub fn size_legend_top(self) -> f64 {
        match self {
            ChartVariant::Revenue => 292.0,
            ChartVariant::Classic => 262.0,
        }
    }

    /// Vertical shift of the category grid lines
    pub fn y_grid_offset(self) -> f64 {
        match self {
            ChartVariant::Revenue => Y_GRID_OFFSET,
            ChartVariant::Classic => 0.0,
        }
    }

    /// Outline drawn around every point
    pub fn point_stroke(self) -> Option<Rgb> {
        match self {
            ChartVariant::Revenue => None,
            ChartVariant::Classic => Some(Rgb::WHITE),
        }
    }

    /// Whether hovering a point shows the coloured tooltip box
    pub fn fancy_tooltip(self) -> bool {
        matches!(self, ChartVariant::Revenue)
    }
}

/// Size of the drawing area, captured once when a chart is set up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
}

impl ChartFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal pixel range of the x axis
    pub fn x_range(&self, margins: &Margins) -> (f64, f64) {
        (margins.left, self.width - margins.left)
    }

    /// Vertical pixel range of the category axis, first category at the bottom
    pub fn y_range(&self, margins: &Margins) -> (f64, f64) {
        (self.height - margins.bottom - Y_RANGE_INSET, margins.top)
    }

    /// Baseline of the x axis
    pub fn x_axis_y(&self, margins: &Margins) -> f64 {
        self.height - margins.bottom
    }
}

/// The instantiated scales of one chart
#[derive(Debug, Clone)]
pub struct ChartScales {
    /// Revenue to horizontal pixel, before any zoom
    pub x: ContinuousScale,
    /// Genre to vertical pixel
    pub y: ScalePoint,
    /// Runtime to radius
    pub radius: ScaleLinear,
    /// Rating to colour bucket
    pub fill: ScaleQuantile<Rgb>,
}

impl ChartScales {
    pub fn setup(variant: ChartVariant, frame: &ChartFrame, dataset: &Dataset) -> Self {
        profiling::scope!("setup_scales");

        let margins = variant.margins();
        let x_range = frame.x_range(&margins);
        let y = ScalePoint::new(CATEGORIES, frame.y_range(&margins));

        match variant {
            ChartVariant::Revenue => Self {
                x: ContinuousScale::Log(ScaleLog::new(REVENUE_LOG_DOMAIN, x_range).nice()),
                y,
                radius: ScaleLinear::new(RUNTIME_DOMAIN, RADIUS_RANGE),
                fill: ScaleQuantile::new([RATING_DOMAIN.0, RATING_DOMAIN.1], variant.palette()),
            },
            ChartVariant::Classic => {
                let runtime = extent(dataset.runtimes()).unwrap_or(RUNTIME_DOMAIN);
                let rating: Vec<f64> = extent(dataset.ratings())
                    .map(|(lo, hi)| vec![lo, hi])
                    .unwrap_or_default();
                Self {
                    x: ContinuousScale::Linear(ScaleLinear::new(REVENUE_LINEAR_DOMAIN, x_range)),
                    y,
                    radius: ScaleLinear::new(runtime, RADIUS_RANGE),
                    fill: ScaleQuantile::new(rating, variant.palette()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Film;

    fn dataset() -> Dataset {
        [
            Film::new("A", "Drama", "X", 90.0, 10.0, 40.0),
            Film::new("B", "Action", "Y", 150.0, 500.0, 80.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_palettes_parse() {
        assert_eq!(ChartVariant::Revenue.palette().len(), 10);
        assert_eq!(ChartVariant::Classic.palette().len(), 9);
    }

    #[test]
    fn test_revenue_scales() {
        let frame = ChartFrame::new(800.0, 750.0);
        let s = ChartScales::setup(ChartVariant::Revenue, &frame, &dataset());

        assert_eq!(s.x.range(), (160.0, 640.0));
        assert!((s.x.map(0.01) - 160.0).abs() < 1e-9);
        assert!((s.x.map(1000.0) - 640.0).abs() < 1e-9);

        assert_eq!(s.y.map("Thriller"), Some(620.0));
        assert_eq!(s.y.map("Action"), Some(40.0));
        assert_eq!(s.radius.map(60.0), 8.0);
        assert_eq!(s.radius.map(180.0), 20.0);
        assert_eq!(s.fill.quantiles().len(), 9);
        assert!((s.fill.quantiles()[0] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_classic_scales_use_data_extents() {
        let frame = ChartFrame::new(800.0, 750.0);
        let s = ChartScales::setup(ChartVariant::Classic, &frame, &dataset());

        assert_eq!(s.x.range(), (150.0, 650.0));
        assert_eq!(s.x.map(-10.0), 150.0);
        assert_eq!(s.radius.domain(), (90.0, 150.0));
        assert_eq!(s.fill.invert_extent(crate::scale::ColorBucketId(0)).unwrap().0, 40.0);
        assert_eq!(s.fill.range().len(), 9);
    }

    #[test]
    fn test_classic_scales_empty_dataset() {
        let frame = ChartFrame::new(800.0, 750.0);
        let s = ChartScales::setup(ChartVariant::Classic, &frame, &Dataset::default());
        assert_eq!(s.radius.domain(), RUNTIME_DOMAIN);
        assert_eq!(s.fill.bucket_of(50.0), None);
    }

    #[test]
    fn test_bounds() {
        let b = Bounds::from_min_size(Pos::new(10.0, 20.0), 15.0, 15.0);
        assert!(b.contains(Pos::new(10.0, 35.0)));
        assert!(!b.contains(Pos::new(26.0, 25.0)));
        assert_eq!(b.width(), 15.0);
    }
}
