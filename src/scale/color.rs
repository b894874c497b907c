//! Colours and colour ramps
//!
//! Parsing and colour-space math come from `peniko::color`. `Rgb` is the
//! 8-bit view the UI paints with; ramps interpolate in any `color` space,
//! normally `Lch` (HCL).

use peniko::color::{AlphaColor, ColorSpaceTag, DynamicColor, HueDirection, Srgb, parse_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Any CSS colour: keyword, hex or functional notation
    pub fn parse(s: &str) -> Option<Self> {
        parse_color(s.trim()).ok().map(Self::from)
    }
}

impl From<AlphaColor<Srgb>> for Rgb {
    fn from(color: AlphaColor<Srgb>) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

impl From<DynamicColor> for Rgb {
    fn from(color: DynamicColor) -> Self {
        color.to_alpha_color::<Srgb>().into()
    }
}

/// Parse a list of colour strings, skipping any that are malformed
pub fn parse_palette(colors: &[&str]) -> Vec<Rgb> {
    colors
        .iter()
        .filter_map(|c| {
            let parsed = Rgb::parse(c);
            if parsed.is_none() {
                log::warn!("ignoring malformed colour '{}'", c);
            }
            parsed
        })
        .collect()
}

/// Piecewise colour interpolation between numeric stops
///
/// Inputs outside the stops clamp to the end colours.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    stops: Vec<(f64, DynamicColor)>,
    space: ColorSpaceTag,
}

impl ColorRamp {
    /// `stops` must be ascending in value
    pub fn new(stops: Vec<(f64, DynamicColor)>, space: ColorSpaceTag) -> Self {
        Self { stops, space }
    }

    /// Ramp through CSS colour strings, dropping stops that fail to parse
    pub fn from_css(stops: &[(f64, &str)], space: ColorSpaceTag) -> Self {
        let stops = stops
            .iter()
            .filter_map(|(v, c)| match parse_color(c) {
                Ok(color) => Some((*v, color)),
                Err(e) => {
                    log::warn!("ignoring ramp stop '{}': {}", c, e);
                    None
                }
            })
            .collect();
        Self::new(stops, space)
    }

    pub fn at(&self, x: f64) -> Option<Rgb> {
        let (first, last) = (self.stops.first()?, self.stops.last()?);
        if x.is_nan() {
            return None;
        }
        if self.stops.len() == 1 || x <= first.0 {
            return Some(first.1.into());
        }
        if x >= last.0 {
            return Some(last.1.into());
        }

        let i = self.stops.partition_point(|(v, _)| *v <= x).clamp(1, self.stops.len() - 1);
        let (x0, c0) = self.stops[i - 1];
        let (x1, c1) = self.stops[i];
        let t = if x1 == x0 { 0.0 } else { (x - x0) / (x1 - x0) };
        let mixed = c0.interpolate(c1, self.space, HueDirection::Shorter).eval(t as f32);
        Some(mixed.into())
    }
}
