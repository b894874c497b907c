//! Scale gallery: five small multiples over a 12-month sample
//!
//! Each panel shows one scale type. Marks are in panel pixel coordinates
//! (origin top-left, y down, `WIDTH` x `HEIGHT`).

use crate::constants::gallery::{DARK2, HEIGHT, MARGIN, PAD, RAMP_STEPS, WIDTH};
use crate::data::stats::max;
use peniko::color::palette::css;
use peniko::color::{AlphaColor, ColorSpaceTag, Srgb};

use crate::scale::{
    ColorRamp, Rgb, ScaleLinear, ScaleOrdinal, ScalePow, ScaleQuantize, parse_palette,
};

/// One month of the sample data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthSample {
    pub month: &'static str,
    pub point: (f64, f64),
    pub r: f64,
}

const fn sample(month: &'static str, x: f64, y: f64, r: f64) -> MonthSample {
    MonthSample {
        month,
        point: (x, y),
        r,
    }
}

pub const SAMPLE_DATA: [MonthSample; 12] = [
    sample("January", 5.0, 20.0, 10.0),
    sample("February", 480.0, 90.0, 1.0),
    sample("March", 250.0, 50.0, 3.0),
    sample("April", 100.0, 33.0, 3.0),
    sample("May", 330.0, 95.0, 4.0),
    sample("June", 300.0, 40.0, 8.0),
    sample("July", 410.0, 35.0, 6.0),
    sample("August", 475.0, 44.0, 4.0),
    sample("September", 25.0, 67.0, 1.0),
    sample("October", 85.0, 21.0, 5.0),
    sample("November", 220.0, 88.0, 10.0),
    sample("December", 400.0, 4.0, 7.0),
];

const CORAL: AlphaColor<Srgb> = css::CORAL;
pub const LABEL_COLOR: AlphaColor<Srgb> = css::TEAL;

/// A labelled circle
#[derive(Debug, Clone, PartialEq)]
pub struct DemoMark {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: Rgb,
    pub label: &'static str,
    /// Left edge of the label text
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoContent {
    Marks(Vec<DemoMark>),
    Swatches(Vec<Rgb>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoPanel {
    pub title: &'static str,
    pub content: DemoContent,
}

struct Positions {
    x: ScaleLinear,
    y: ScaleLinear,
}

impl Positions {
    fn new(data: &[MonthSample]) -> Self {
        let max_x = max(data.iter().map(|d| d.point.0)).unwrap_or(1.0);
        let max_y = max(data.iter().map(|d| d.point.1)).unwrap_or(1.0);
        Self {
            x: ScaleLinear::new((0.0, max_x), (MARGIN, WIDTH - MARGIN)),
            y: ScaleLinear::new((0.0, max_y), (MARGIN, HEIGHT - MARGIN)),
        }
    }

    fn mark(&self, d: &MonthSample, radius: f64, fill: Rgb, label_gap: f64) -> DemoMark {
        let x = self.x.map(d.point.0);
        DemoMark {
            x,
            y: self.y.map(d.point.1),
            radius,
            fill,
            label: d.month,
            label_x: x + label_gap,
        }
    }
}

fn size_scale(data: &[MonthSample]) -> ScalePow {
    let max_r = max(data.iter().map(|d| d.r)).unwrap_or(1.0);
    ScalePow::new((0.0, max_r), (5.0, 50.0), 2.0)
}

pub fn linear_panel(data: &[MonthSample]) -> DemoPanel {
    let pos = Positions::new(data);
    DemoPanel {
        title: "Linear scales",
        content: DemoContent::Marks(
            data.iter()
                .map(|d| pos.mark(d, 5.0, CORAL.into(), PAD))
                .collect(),
        ),
    }
}

pub fn power_panel(data: &[MonthSample]) -> DemoPanel {
    let pos = Positions::new(data);
    let size = size_scale(data);
    DemoPanel {
        title: "Power scale (radius)",
        content: DemoContent::Marks(
            data.iter()
                .map(|d| {
                    let r = size.map(d.r);
                    pos.mark(d, r, CORAL.into(), r + 2.0)
                })
                .collect(),
        ),
    }
}

pub fn ordinal_panel(data: &[MonthSample]) -> DemoPanel {
    let pos = Positions::new(data);
    let mut color = ScaleOrdinal::new(parse_palette(&DARK2));
    DemoPanel {
        title: "Ordinal scale (colour)",
        content: DemoContent::Marks(
            data.iter()
                .map(|d| {
                    let fill = color.map_or_insert(d.month).copied().unwrap_or_else(|| CORAL.into());
                    pos.mark(d, 10.0, fill, PAD * 1.5)
                })
                .collect(),
        ),
    }
}

pub fn quantize_panel(data: &[MonthSample]) -> DemoPanel {
    let pos = Positions::new(data);
    let size = size_scale(data);
    let max_r = max(data.iter().map(|d| d.r)).unwrap_or(1.0);
    let color = ScaleQuantize::new(
        (0.0, max_r),
        parse_palette(&["deeppink", "pink", "paleturquoise", "darkturquoise"]),
    );
    DemoPanel {
        title: "Quantize scale (colour)",
        content: DemoContent::Marks(
            data.iter()
                .map(|d| {
                    let r = size.map(d.r);
                    let fill = color.map(d.r).copied().unwrap_or_else(|| CORAL.into());
                    pos.mark(d, r, fill, r + PAD / 2.0)
                })
                .collect(),
        ),
    }
}

pub fn ramp_panel() -> DemoPanel {
    let ramp = ColorRamp::from_css(&[(0.0, "blue"), (100.0, "yellow")], ColorSpaceTag::Lch);
    DemoPanel {
        title: "HCL colour interpolation",
        content: DemoContent::Swatches(
            (0..RAMP_STEPS)
                .filter_map(|i| ramp.at(i as f64))
                .collect(),
        ),
    }
}

/// All five panels, top to bottom
pub fn panels() -> Vec<DemoPanel> {
    profiling::scope!("gallery_panels");
    vec![
        linear_panel(&SAMPLE_DATA),
        power_panel(&SAMPLE_DATA),
        ordinal_panel(&SAMPLE_DATA),
        quantize_panel(&SAMPLE_DATA),
        ramp_panel(),
    ]
}
