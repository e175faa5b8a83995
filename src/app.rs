use eframe::egui;

use crate::state::AppState;
use crate::ui::{list, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LinkshelfApp {
    pub state: AppState,
}

impl LinkshelfApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LinkshelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: header, filters, resource list ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui: &mut egui::Ui| {
                ui.heading("Linkshelf");
                ui.label("a collection of resources gathered and simplified");
            });
            ui.add_space(8.0);

            panels::filter_row(ui, &mut self.state);
            ui.add_space(8.0);

            list::resource_list(ui, &self.state);
        });
    }
}
