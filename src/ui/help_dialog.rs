use crate::app::FilmScatter;

pub fn render_help_dialog(app: &mut FilmScatter, ctx: &eframe::egui::Context) {
    if app.state.view.show_help {
        eframe::egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.heading("Keyboard");
                ui.label("R - Reset zoom");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle colour legend");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Mouse Controls");
                ui.label("Scroll over the plot - Zoom the revenue axis around the cursor");
                ui.label("Drag - Pan the revenue axis");
                ui.label("Double-click - Reset zoom");
                ui.label("Hover a circle - Show film details");

                ui.separator();
                ui.heading("Colour Legend");
                ui.label("Click a swatch - Show only that rating bucket");
                ui.label("Click more swatches - Add them to the shown buckets");
                ui.label("Click a shown swatch again - Remove it; none left shows all");
                ui.label("Hiding the legend (L) shows all buckets again");

                ui.separator();
                if ui.button("Close").clicked() {
                    app.state.view.show_help = false;
                }
            });
    }
}
