use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{AgeFilter, PriceFilter};
use crate::state::AppState;

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
        });

        ui.separator();

        ui.label(format!(
            "{} resources, {} shown",
            state.catalog.len(),
            state.visible.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Filter row – search box, selectors, clear button
// ---------------------------------------------------------------------------

/// Render the search box, the two categorical selectors and the Clear
/// button. Any change recomputes the visible list synchronously.
pub fn filter_row(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let mut search = state.filters.search.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("everything…")
                .desired_width(260.0),
        );
        if response.changed() {
            state.set_search(search);
        }

        age_select(ui, state);
        price_select(ui, state);

        let clear = egui::Button::new("Clear");
        if ui
            .add_enabled(state.filters.any_categorical(), clear)
            .clicked()
        {
            state.clear_categorical();
        }
    });
}

fn age_select(ui: &mut Ui, state: &mut AppState) {
    let current = state.filters.age;
    egui::ComboBox::from_id_salt("age_filter")
        .selected_text(current.label())
        .width(80.0)
        .show_ui(ui, |ui: &mut Ui| {
            for option in [AgeFilter::UnderEighteen, AgeFilter::EighteenPlus] {
                if ui
                    .selectable_label(current == option, option.label())
                    .clicked()
                {
                    state.set_age(option);
                }
            }
        });
}

fn price_select(ui: &mut Ui, state: &mut AppState) {
    let current = state.filters.price;
    egui::ComboBox::from_id_salt("price_filter")
        .selected_text(current.label())
        .width(80.0)
        .show_ui(ui, |ui: &mut Ui| {
            for option in [PriceFilter::Free, PriceFilter::Paid] {
                if ui
                    .selectable_label(current == option, option.label())
                    .clicked()
                {
                    state.set_price(option);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open resource catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} resources with tags {:?}",
                    catalog.len(),
                    catalog.tags
                );
                state.replace_catalog(catalog);
            }
            Err(e) => {
                // Keep the previous catalog; there is no partial fallback.
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
