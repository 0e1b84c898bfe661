use eframe::egui::{self, Frame, RichText, ScrollArea, Ui};

use crate::analysis::predict::predict;
use crate::data::filter::view_countries;
use crate::state::{AppState, MAX_PREDICTION_YEAR};

// ---------------------------------------------------------------------------
// Future prediction page
// ---------------------------------------------------------------------------

const CARDS_PER_ROW: usize = 3;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Future SDG Index Prediction");
    ui.label("Select a future year to see predicted SDG index scores for the selected countries.");
    ui.separator();

    let Some(last_available_year) = state.dataset.last_year() else {
        ui.weak("The dataset is empty.");
        return;
    };

    // ---- Target year selector ----
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Predict until");
        egui::ComboBox::from_id_salt("target_year")
            .selected_text(state.target_year.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for year in (last_available_year + 1)..=MAX_PREDICTION_YEAR {
                    if ui
                        .selectable_label(state.target_year == year, year.to_string())
                        .clicked()
                    {
                        state.target_year = year;
                    }
                }
            });
    });
    ui.separator();

    // Predictions cover the countries in the current view, but each fit uses
    // that country's full history, not the filtered window.
    let countries = view_countries(&state.dataset, &state.visible_indices);
    if countries.is_empty() {
        ui.weak("Select at least one country and a year range with data.");
        return;
    }

    ui.strong(format!("Predictions for {}", state.target_year));
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for chunk in countries.chunks(CARDS_PER_ROW) {
                ui.columns(CARDS_PER_ROW, |cols| {
                    for (col, country) in cols.iter_mut().zip(chunk) {
                        match predict(&state.dataset, country, state.target_year) {
                            Ok(result) => prediction_card(
                                col,
                                country,
                                result.last_observed_year,
                                result.target_year,
                                result.predicted_score,
                            ),
                            // A failed country is skipped, not fatal; the
                            // remaining cards still render.
                            Err(e) => skipped_card(col, country, &e.to_string()),
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });
}

fn prediction_card(ui: &mut Ui, country: &str, last_year: i32, target_year: i32, score: f64) {
    Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.strong(country);
            ui.weak(format!("Prediction from {last_year} → {target_year}"));
            ui.heading(RichText::new(format!("{score:.2}")).strong());
            ui.weak("Predicted SDG Index Score");
        });
    });
}

fn skipped_card(ui: &mut Ui, country: &str, reason: &str) {
    Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.strong(country);
            ui.weak(format!("Skipped: {reason}"));
        });
    });
}
