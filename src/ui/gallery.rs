use egui::{self, Align2, RichText, Stroke};
use egui_plot::{Bar, BarChart, Plot, PlotBounds, PlotPoint, Points, Text};

use super::color32;
use crate::chart::gallery::{self, DemoContent, DemoMark, DemoPanel, LABEL_COLOR};
use crate::constants::gallery::{HEIGHT, WIDTH};

const SWATCH_STRIP_HEIGHT: f32 = 40.0;

/// Render the five scale panels stacked vertically
pub fn render_gallery(ui: &mut egui::Ui) {
    profiling::scope!("render_gallery");

    egui::ScrollArea::vertical().show(ui, |ui| {
        for panel in gallery::panels() {
            ui.heading(panel.title);
            render_panel(ui, &panel);
            ui.add_space(12.0);
        }
    });
}

fn fixed_plot(id: &str) -> Plot<'static> {
    Plot::new(id)
        .show_axes([false, false])
        .show_grid([false, false])
        .allow_zoom([false, false])
        .allow_drag([false, false])
        .allow_scroll([false, false])
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
}

fn render_panel(ui: &mut egui::Ui, panel: &DemoPanel) {
    match &panel.content {
        DemoContent::Marks(marks) => {
            // mark radii are in panel pixels; egui_plot radii are in screen points
            let px = ui.available_width() / WIDTH as f32;
            fixed_plot(panel.title)
                .width(WIDTH as f32 * px)
                .height(HEIGHT as f32 * px)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [WIDTH, HEIGHT]));
                    for mark in marks {
                        draw_mark(plot_ui, mark, px);
                    }
                });
        }
        DemoContent::Swatches(colors) => {
            let bars = colors
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    Bar::new(i as f64 + 0.5, 1.0)
                        .width(1.0)
                        .fill(color32(*c))
                        .stroke(Stroke::NONE)
                })
                .collect();
            let steps = colors.len().max(1) as f64;
            fixed_plot(panel.title)
                .height(SWATCH_STRIP_HEIGHT)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max([0.0, 0.0], [steps, 1.0]));
                    plot_ui.bar_chart(BarChart::new(panel.title, bars));
                });
        }
    }
}

/// Panel y runs down the screen, plot y runs up
fn draw_mark(plot_ui: &mut egui_plot::PlotUi, mark: &DemoMark, px: f32) {
    let y = HEIGHT - mark.y;
    plot_ui.points(
        Points::new(mark.label, vec![[mark.x, y]])
            .radius(mark.radius as f32 * px)
            .color(color32(mark.fill)),
    );
    plot_ui.text(
        Text::new(
            mark.label,
            PlotPoint::new(mark.label_x, y),
            RichText::new(mark.label).color(color32(LABEL_COLOR.into())),
        )
        .anchor(Align2::LEFT_CENTER),
    );
}
