use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct LabelHueApp {
    pub state: AppState,
    /// Title last sent to the window, so it is only updated on change.
    shown_title: String,
}

impl LabelHueApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            shown_title: String::new(),
        }
    }
}

impl eframe::App for LabelHueApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let title = self.state.window_title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: CSS colour strings ----
        egui::TopBottomPanel::bottom("css_bar").show(ctx, |ui| {
            panels::css_bar(ui, &self.state);
        });

        // ---- Left side panel: categories ----
        egui::SidePanel::left("category_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::bar_chart(ui, &self.state);
        });
    }
}
