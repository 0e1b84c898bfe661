use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::YEAR_BUCKETS;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Top bar – page navigation and status
// ---------------------------------------------------------------------------

/// Render the top navigation bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.heading("SDG Explorer");
        ui.separator();

        for (page, label) in [
            (Page::Home, "Home"),
            (Page::Goals, "Goal Descriptions"),
            (Page::Prediction, "Future Predictions"),
        ] {
            if ui.selectable_label(state.page == page, label).clicked() {
                state.page = page;
            }
        }

        ui.separator();
        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: country multi-select and year-range bucket.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Year range bucket ----
    ui.strong("Year range");
    let current = state.selection.year_range;
    egui::ComboBox::from_id_salt("year_range")
        .selected_text(bucket_label(current))
        .show_ui(ui, |ui: &mut Ui| {
            for bucket in YEAR_BUCKETS {
                if ui
                    .selectable_label(current == bucket, bucket_label(bucket))
                    .clicked()
                {
                    state.set_year_range(bucket);
                }
            }
        });
    ui.separator();

    // ---- Country multi-select ----
    let n_selected = state.selection.countries.len();
    let n_total = state.dataset.countries.len();
    ui.strong(format!("Countries  ({n_selected}/{n_total})"));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all_countries();
        }
        if ui.small_button("None").clicked() {
            state.select_no_countries();
        }
    });

    let countries = state.dataset.countries.clone();
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for country in &countries {
                let is_selected = state.selection.countries.contains(country);
                let text =
                    RichText::new(country).color(state.color_map.color_for(country));

                let mut checked = is_selected;
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_country(country);
                }
            }
        });
}

fn bucket_label((start, end): (i32, i32)) -> String {
    format!("{start} – {end}")
}
