//! Application-wide constants and default values
//!
//! This module centralizes the magic numbers of the two scatterplot pages and the
//! scale gallery, making them easier to maintain and configure.

/// Chart margins, in points, around the plotting area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Scatterplot defaults shared by both chart variants
pub mod chart {
    use super::Margins;

    /// Margins of the revenue (log-scale) chart
    pub const REVENUE_MARGINS: Margins = Margins {
        top: 40.0,
        right: 10.0,
        bottom: 100.0,
        left: 160.0,
    };

    /// Margins of the classic (linear-scale) chart
    pub const CLASSIC_MARGINS: Margins = Margins {
        top: 40.0,
        right: 10.0,
        bottom: 100.0,
        left: 150.0,
    };

    /// Genre categories on the y axis, bottom to top
    pub const CATEGORIES: [&str; 12] = [
        "Thriller",
        "Mystery",
        "Sci-Fi",
        "Biography",
        "Horror",
        "Fantasy",
        "Drama",
        "Crime",
        "Comedy",
        "Animation",
        "Adventure",
        "Action",
    ];

    /// Ten-step rating palette of the revenue chart
    pub const REVENUE_PALETTE: [&str; 10] = [
        "#C3F5CD", "#AAEFC5", "#91E9C5", "#7AE3CA", "#63DBD6", "#4CC0D3", "#369ACB", "#2A5DAC",
        "#1F2B8C", "#25166B",
    ];

    /// Nine-step rating palette of the classic chart
    pub const CLASSIC_PALETTE: [&str; 9] = [
        "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8", "#253494",
        "#081d58",
    ];

    /// Revenue axis domain before "nicing" (revenue chart)
    pub const REVENUE_LOG_DOMAIN: (f64, f64) = (1e-2, 950.0);

    /// Revenue axis domain (classic chart)
    pub const REVENUE_LINEAR_DOMAIN: (f64, f64) = (-10.0, 950.0);

    /// Fixed runtime domain of the revenue chart's size scale
    pub const RUNTIME_DOMAIN: (f64, f64) = (60.0, 180.0);

    /// Fixed rating domain of the revenue chart's colour scale
    pub const RATING_DOMAIN: (f64, f64) = (0.0, 100.0);

    /// Circle radius range, in points
    pub const RADIUS_RANGE: (f64, f64) = (8.0, 20.0);

    /// Extra gap between the lowest category and the x axis
    pub const Y_RANGE_INSET: f64 = 30.0;

    /// Vertical shift of the horizontal grid lines on the revenue chart
    pub const Y_GRID_OFFSET: f64 = -26.25;

    /// Frame used before the first layout pass reports a real size
    pub const DEFAULT_WIDTH: f64 = 800.0;
    pub const DEFAULT_HEIGHT: f64 = 750.0;

    /// Number of cells in the runtime size legend
    pub const SIZE_LEGEND_CELLS: usize = 5;

    /// Colour legend swatch edge and row spacing
    pub const SWATCH_SIZE: f64 = 15.0;
    pub const SWATCH_ROW: f64 = 17.0;

    /// Gap between a swatch and its label
    pub const LEGEND_LABEL_OFFSET: f64 = 10.0;

    /// Vertical space reserved for a legend title
    pub const LEGEND_TITLE_HEIGHT: f64 = 20.0;

    /// Vertical gap between size legend circles
    pub const SIZE_LEGEND_PADDING: f64 = 15.0;
}

/// Tooltip placement
pub mod tooltip {
    /// Gap between a point and its tooltip
    pub const Y_OFFSET: f64 = 20.0;

    /// Shift applied when the tooltip flips below the point
    pub const FLIP_SHIFT: f64 = 40.0;

    /// Tooltips flip once the anchor is above this share of the frame height
    pub const FLIP_FRACTION: f64 = 0.25;
}

/// Pan/zoom behaviour
pub mod zoom {
    /// Smallest allowed x scale factor
    pub const MIN_SCALE: f64 = 1.0;

    /// Largest allowed x scale factor
    pub const MAX_SCALE: f64 = 40.0;

    /// Wheel delta (points) to zoom factor exponent, base 2
    pub const WHEEL_SENSITIVITY: f64 = 0.002;
}

/// Scale gallery defaults
pub mod gallery {
    pub const WIDTH: f64 = 1000.0;
    pub const HEIGHT: f64 = 300.0;
    pub const PAD: f64 = 10.0;
    pub const MARGIN: f64 = 50.0;

    /// Number of swatches in the colour ramp panel
    pub const RAMP_STEPS: usize = 100;

    /// Categorical scheme for the ordinal panel (Dark2)
    pub const DARK2: [&str; 8] = [
        "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
    ];
}

/// Configuration file paths
pub mod config {
    /// Configuration file name, looked up in the working directory
    pub const CONFIG_FILE: &str = "film-scatter.json";

    /// Dataset loaded at start-up when no configuration overrides it
    pub const DEFAULT_DATASET: &str = "IMDB_dataset_processed.csv";
}
