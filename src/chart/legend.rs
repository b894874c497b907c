//! Colour and size legends
//!
//! Layout follows a vertical d3-legend: a title line, then one row per cell.
//! Positions are in frame coordinates so the same values drive painting and
//! click hit-testing.

use super::{Bounds, ChartFrame, ChartVariant, Pos};
use crate::constants::chart::{
    LEGEND_LABEL_OFFSET, LEGEND_TITLE_HEIGHT, SIZE_LEGEND_CELLS, SIZE_LEGEND_PADDING,
    SWATCH_ROW, SWATCH_SIZE,
};
use crate::format::NumberFormat;
use crate::scale::{ColorBucketId, Rgb, ScaleLinear, ScaleQuantile};

/// Clickable width to the right of a swatch, covering its label
const LABEL_HIT_WIDTH: f64 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSwatch {
    pub bucket: ColorBucketId,
    pub color: Rgb,
    pub label: String,
    /// The coloured square
    pub rect: Bounds,
    /// Where the label text starts (vertically centred on the square)
    pub label_pos: Pos,
}

impl LegendSwatch {
    /// Square plus label area
    pub fn hit_area(&self) -> Bounds {
        Bounds {
            min: self.rect.min,
            max: Pos::new(self.label_pos.x + LABEL_HIT_WIDTH, self.rect.max.y),
        }
    }
}

/// Quantile colour legend; clicking a swatch toggles its bucket
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLegend {
    pub title: &'static str,
    pub origin: Pos,
    pub swatches: Vec<LegendSwatch>,
}

impl ColorLegend {
    pub fn build(variant: ChartVariant, frame: &ChartFrame, fill: &ScaleQuantile<Rgb>) -> Self {
        let margins = variant.margins();
        let origin = Pos::new(
            frame.width - margins.left + variant.legend_gap(),
            margins.top + 12.0,
        );
        let format = variant.legend_format();

        let swatches = fill
            .buckets()
            .map(|(bucket, color)| {
                let top = origin.y + LEGEND_TITLE_HEIGHT + bucket.index() as f64 * SWATCH_ROW;
                let rect = Bounds::from_min_size(Pos::new(origin.x, top), SWATCH_SIZE, SWATCH_SIZE);
                let label = match fill.invert_extent(bucket) {
                    Some((lo, hi)) => extent_label(format, lo, hi),
                    None => String::new(),
                };
                LegendSwatch {
                    bucket,
                    color: *color,
                    label,
                    rect,
                    label_pos: Pos::new(
                        rect.max.x + LEGEND_LABEL_OFFSET,
                        top + SWATCH_SIZE / 2.0,
                    ),
                }
            })
            .collect();

        Self {
            title: "Average Rating",
            origin,
            swatches,
        }
    }

    /// Bucket whose swatch (or label) is under `pos`
    pub fn swatch_at(&self, pos: Pos) -> Option<ColorBucketId> {
        self.swatches
            .iter()
            .find(|s| s.hit_area().contains(pos))
            .map(|s| s.bucket)
    }
}

fn extent_label(format: NumberFormat, lo: f64, hi: f64) -> String {
    format!("{} to {}", format.format(lo), format.format(hi))
}

/// One circle of the size legend
#[derive(Debug, Clone, PartialEq)]
pub struct SizeCell {
    pub value: f64,
    pub radius: f64,
    pub center: Pos,
    pub label: String,
    pub label_pos: Pos,
}

/// Runtime size legend: evenly spaced runtimes drawn at their radii
#[derive(Debug, Clone, PartialEq)]
pub struct SizeLegend {
    pub title: &'static str,
    pub origin: Pos,
    pub cells: Vec<SizeCell>,
}

impl SizeLegend {
    pub fn build(variant: ChartVariant, frame: &ChartFrame, radius: &ScaleLinear) -> Self {
        let margins = variant.margins();
        let origin = Pos::new(
            frame.width - margins.left + variant.legend_gap(),
            margins.top + variant.size_legend_top(),
        );
        let format = variant.size_legend_format();

        let (d0, d1) = radius.domain();
        let steps = (SIZE_LEGEND_CELLS - 1).max(1) as f64;
        let values: Vec<f64> = (0..SIZE_LEGEND_CELLS)
            .map(|i| d0 + i as f64 * (d1 - d0) / steps)
            .collect();
        let radii: Vec<f64> = values.iter().map(|v| radius.map(*v)).collect();
        let max_radius = radii.iter().copied().fold(0.0, f64::max);

        let mut y = origin.y + LEGEND_TITLE_HEIGHT;
        let cells = values
            .into_iter()
            .zip(radii)
            .map(|(value, r)| {
                let center = Pos::new(origin.x + max_radius, y + r);
                y += 2.0 * r + SIZE_LEGEND_PADDING;
                SizeCell {
                    value,
                    radius: r,
                    center,
                    label: format.format(value),
                    label_pos: Pos::new(origin.x + 2.0 * max_radius + LEGEND_LABEL_OFFSET, center.y),
                }
            })
            .collect();

        Self {
            title: "Runtime (Min)",
            origin,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revenue_legend() -> ColorLegend {
        let frame = ChartFrame::new(800.0, 750.0);
        let fill = ScaleQuantile::new([0.0, 100.0], ChartVariant::Revenue.palette());
        ColorLegend::build(ChartVariant::Revenue, &frame, &fill)
    }

    #[test]
    fn test_color_legend_labels() {
        let legend = revenue_legend();
        assert_eq!(legend.swatches.len(), 10);
        assert_eq!(legend.swatches[0].label, "0 to 10");
        assert_eq!(legend.swatches[9].label, "90 to 100");
        assert_eq!(legend.origin, Pos::new(660.0, 52.0));
        assert_eq!(legend.swatches[1].rect.min.y - legend.swatches[0].rect.min.y, SWATCH_ROW);
    }

    #[test]
    fn test_classic_legend_uses_two_decimals() {
        let frame = ChartFrame::new(800.0, 750.0);
        let fill = ScaleQuantile::new([10.0, 40.0], vec![Rgb::BLACK, Rgb::WHITE, Rgb::BLACK]);
        let legend = ColorLegend::build(ChartVariant::Classic, &frame, &fill);
        assert_eq!(legend.swatches[0].label, "10.00 to 20.00");
        assert_eq!(legend.origin.x, 660.0);
    }

    #[test]
    fn test_swatch_hit_testing() {
        let legend = revenue_legend();
        let third = &legend.swatches[2];
        let inside = Pos::new(third.rect.min.x + 3.0, third.rect.min.y + 3.0);
        assert_eq!(legend.swatch_at(inside), Some(ColorBucketId(2)));

        let on_label = Pos::new(third.label_pos.x + 20.0, third.label_pos.y);
        assert_eq!(legend.swatch_at(on_label), Some(ColorBucketId(2)));

        assert_eq!(legend.swatch_at(Pos::new(10.0, 10.0)), None);
        // gap between rows
        let gap = Pos::new(third.rect.min.x + 3.0, third.rect.max.y + 1.0);
        assert_eq!(legend.swatch_at(gap), None);
    }

    #[test]
    fn test_size_legend_cells() {
        let frame = ChartFrame::new(800.0, 750.0);
        let radius = ScaleLinear::new((60.0, 180.0), (8.0, 20.0));
        let legend = SizeLegend::build(ChartVariant::Revenue, &frame, &radius);

        let values: Vec<f64> = legend.cells.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![60.0, 90.0, 120.0, 150.0, 180.0]);
        assert_eq!(legend.cells[0].radius, 8.0);
        assert_eq!(legend.cells[4].radius, 20.0);
        assert_eq!(legend.cells[2].label, "120");
        assert!(legend.cells.windows(2).all(|w| w[1].center.y > w[0].center.y));
        assert_eq!(legend.origin.y, 332.0);
    }
}
