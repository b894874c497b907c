mod gallery;
mod help_dialog;
mod scatter;
mod toolbar;

pub use gallery::render_gallery;
pub use help_dialog::render_help_dialog;
pub use scatter::render_chart;
pub use toolbar::{render_status_bar, render_toolbar};

use egui::Color32;

use crate::scale::Rgb;

/// Convert a chart colour for painting
pub(crate) fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}
