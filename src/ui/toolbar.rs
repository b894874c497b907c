use eframe::egui;

use crate::app::FilmScatter;
use crate::chart::ChartVariant;
use crate::format::NumberFormat;
use crate::state::ActivePage;

/// Render the toolbar: file, page tabs and display toggles
pub fn render_toolbar(app: &mut FilmScatter, ctx: &egui::Context, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("📂").on_hover_text("Open Data File").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Data Files", &["csv"])
                .pick_file()
            {
                app.load_file(ctx, path);
            }
        }

        if let Some(file) = app.state.current_file.as_ref() {
            ui.label(format!(
                "📄 {}",
                file.file_name().and_then(|n| n.to_str()).unwrap_or("Unknown")
            ))
            .on_hover_text(file.display().to_string());
        }

        ui.separator();

        for variant in ChartVariant::ALL {
            ui.selectable_value(
                &mut app.state.ui.active_page,
                ActivePage::Chart(variant),
                variant.label(),
            );
        }
        ui.selectable_value(&mut app.state.ui.active_page, ActivePage::Gallery, "Scale Gallery");

        ui.separator();

        ui.toggle_value(&mut app.state.view.show_grid, "⊞").on_hover_text("Grid (G)");
        ui.toggle_value(&mut app.state.view.show_legend, "🏷").on_hover_text("Legend (L)");
        ui.toggle_value(&mut app.state.view.show_size_legend, "⭕")
            .on_hover_text("Size legend");
        if ui.button("🔄").on_hover_text("Reset zoom (R)").clicked() {
            app.reset_view();
        }

        ui.separator();

        let theme_icon = if app.state.view.dark_mode { "🌙" } else { "☀" };
        if ui.button(theme_icon).on_hover_text("Toggle theme (T)").clicked() {
            app.state.view.toggle_dark_mode();
        }
        if ui.button("⚙").on_hover_text("Save Settings").clicked() {
            app.save_settings();
        }
        if ui.button("❓").on_hover_text("Help (F1)").clicked() {
            app.state.view.show_help = !app.state.view.show_help;
        }
    });

    // Handle drag and drop
    let dropped = ctx.input(|i| {
        i.raw
            .dropped_files
            .first()
            .and_then(|f| f.path.clone())
    });
    if let Some(path) = dropped {
        app.load_file(ctx, path);
    }
}

/// Status line: loading progress, errors and counts for the visible chart
pub fn render_status_bar(app: &FilmScatter, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if let Some(status) = &app.state.ui.status {
            if app.is_loading() {
                ui.spinner();
            }
            ui.label(status);
            ui.separator();
        }

        if let Some(error) = &app.state.ui.error_message {
            let color = ui.visuals().error_fg_color;
            ui.colored_label(color, format!("⚠ {}", error));
            ui.separator();
        }

        if app.state.has_data() {
            ui.label(format!("Films: {}", app.state.row_count()));
        }

        let session = app
            .state
            .ui
            .active_variant()
            .and_then(|v| app.state.sessions.get(&v));
        if let Some(session) = session {
            if !session.selection().is_empty() {
                ui.separator();
                ui.label(format!(
                    "Pinned buckets: {} of {}",
                    session.selection().len(),
                    session.buckets_present().len()
                ));
            }
            if !session.transform().is_identity() {
                ui.separator();
                let transform = session.transform();
                let (lo, hi) = session.current_x().domain();
                ui.label(format!(
                    "Zoom: {:.1}× (offset {:.0} px, revenue ${}M to ${}M)",
                    transform.scale(),
                    transform.offset(),
                    NumberFormat::Fixed(1).format(lo),
                    NumberFormat::Fixed(1).format(hi)
                ));
            }
        }
    });
}
