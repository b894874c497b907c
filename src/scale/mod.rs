//! Scales mapping film values to pixels and colours
//!
//! These types provide the coordinate and colour mappings of the scatterplots
//! and the scale gallery: continuous (linear, log, power), discrete (point,
//! ordinal, quantile, quantize) and colour ramps.

mod color;
mod continuous;
mod discrete;

pub use color::{ColorRamp, Rgb, parse_palette};
pub use continuous::{ContinuousScale, ScaleLinear, ScaleLog, ScalePow};
pub use discrete::{ColorBucketId, ScaleOrdinal, ScalePoint, ScaleQuantile, ScaleQuantize};
