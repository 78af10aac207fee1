use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use label_hue::data::loader;
use label_hue::example_dataset;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – category toggles
// ---------------------------------------------------------------------------

/// Render the left category panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading(&state.dataset.title);
    ui.separator();

    let legend = state.color_map.legend_entries();
    if legend.is_empty() {
        ui.label("Dataset has no categories.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    let mut toggled = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (category, color) in &legend {
                ui.horizontal(|ui: &mut Ui| {
                    swatch(ui, *color);
                    let mut checked = state.filter.contains(category);
                    if ui
                        .checkbox(&mut checked, category.as_str())
                        .on_hover_text(state.color_map.hsla_for(category).to_string())
                        .changed()
                    {
                        toggled = Some(category.clone());
                    }
                });
            }
        });

    if let Some(category) = toggled {
        state.toggle_category(&category);
    }
}

fn swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}

// ---------------------------------------------------------------------------
// Bottom bar – CSS colours of the visible categories
// ---------------------------------------------------------------------------

/// List each visible category with the `hsla()` string a web front-end
/// would use for it; clicking copies the string.
pub fn css_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.strong("CSS");
        for category in &state.visible {
            let hsla = state.color_map.hsla_for(category);
            swatch(ui, hsla.to_color32());
            let css = hsla.to_string();
            if ui
                .small_button(format!("{category}: {css}"))
                .on_hover_text("Copy to clipboard")
                .clicked()
            {
                ui.ctx().copy_text(css);
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reset to example").clicked() {
                state.set_dataset(example_dataset().clone());
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} rows, {} of {} categories shown",
            state.dataset.len(),
            state.visible.len(),
            state.color_map.len()
        ));

        ui.separator();

        if ui.selectable_label(state.stacked, "Stacked").clicked() {
            state.stacked = !state.stacked;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded '{}' with {} rows and categories {:?}",
                    dataset.title,
                    dataset.len(),
                    dataset.categories()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
