use chrono::Utc;
use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{AgeFilter, FilterState, PriceFilter};
use crate::season;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Resource list (central panel)
// ---------------------------------------------------------------------------

/// Render the central panel: seasonal banner, notes, and the filtered
/// resource list (or the empty state).
pub fn resource_list(ui: &mut Ui, state: &AppState) {
    if let Some(banner) = season::advent_banner(Utc::now()) {
        banner_alert(ui, &banner);
        ui.add_space(8.0);
    }

    if state.filters.price == PriceFilter::Paid {
        ui.label(
            RichText::new(
                "resources with both free and paid tags may have something behind a paywall",
            )
            .italics()
            .small(),
        );
        ui.add_space(4.0);
    }

    if state.visible.is_empty() {
        empty_state(ui, &state.filters);
        return;
    }

    let now_ms = Utc::now().timestamp_millis();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for &idx in &state.visible {
                let res = &state.catalog.resources[idx];

                ui.horizontal(|ui: &mut Ui| {
                    ui.hyperlink_to(RichText::new(&res.title).strong(), &res.url);
                    if res.is_new(now_ms) {
                        ui.label(
                            RichText::new(" NEW ")
                                .small()
                                .color(Color32::WHITE)
                                .background_color(Color32::from_rgb(220, 38, 38)),
                        );
                    }
                });

                if !res.description.is_empty() {
                    ui.label(&res.description);
                }

                ui.horizontal_wrapped(|ui: &mut Ui| {
                    for tag in &res.tags {
                        ui.label(
                            RichText::new(tag)
                                .small()
                                .color(state.tag_colors.color_for(tag)),
                        );
                    }
                });

                ui.add_space(12.0);
            }
        });
}

fn banner_alert(ui: &mut Ui, banner: &season::AdventBanner) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.strong("Advent of Code");
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label(format!(
                "Day {} of the Advent of Code is live! ({} days left)",
                banner.day, banner.days_left
            ));
            ui.hyperlink_to("Check it out here", &banner.url);
        });
    });
}

// ---------------------------------------------------------------------------
// Empty state
// ---------------------------------------------------------------------------

fn empty_state(ui: &mut Ui, filters: &FilterState) {
    ui.label(RichText::new(
        "no resources match your filters yet, new resources are being added",
    ));
    ui.horizontal(|ui: &mut Ui| {
        ui.label("can't wait? ask for more:");
        ui.hyperlink_to("#linkshelf", suggestion_url(filters));
    });
}

/// Pre-filled post intent naming the filter values that came up empty.
fn suggestion_url(filters: &FilterState) -> String {
    let age = match filters.age {
        AgeFilter::Any => "",
        AgeFilter::UnderEighteen => "18-",
        // '+' is reserved in query strings
        AgeFilter::EighteenPlus => "18%2B",
    };
    let price = match filters.price {
        PriceFilter::Any => "",
        PriceFilter::Free => "free",
        PriceFilter::Paid => "paid",
    };
    format!(
        "https://twitter.com/intent/post?text=add%20more%20resources%20to%20{age}%20and%20{price}%20%0A%23linkshelf"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_url_encodes_the_active_filters() {
        let filters = FilterState {
            age: AgeFilter::EighteenPlus,
            price: PriceFilter::Paid,
            ..FilterState::default()
        };
        let url = suggestion_url(&filters);
        assert!(url.contains("18%2B"));
        assert!(url.contains("paid"));
        assert!(url.starts_with("https://twitter.com/intent/post?text="));
    }
}
