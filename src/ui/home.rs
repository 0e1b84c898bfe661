use eframe::egui::{ScrollArea, Ui};

use crate::analysis::aggregate::{average_by_goal, correlation_matrix};
use crate::state::AppState;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Home page: filtered table, trend plot, goal averages, correlations
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading("SDG Index Dashboard");
    ui.label("Explore Sustainable Development Goal (SDG) scores from 2000 to 2022.");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Filtered table ----
            ui.strong("Filtered data");
            if state.visible_indices.is_empty() {
                no_data(ui);
            } else {
                table::data_table(ui, state);
            }
            ui.separator();

            // ---- Time series ----
            ui.strong("SDG index trend over time");
            if state.visible_indices.is_empty() {
                no_data(ui);
            } else {
                plot::time_series(ui, state);
            }
            ui.separator();

            // ---- Goal averages ----
            ui.strong("Goal-wise average scores (selected range)");
            match average_by_goal(&state.dataset, &state.visible_indices) {
                Some(averages) => plot::goal_bar_chart(ui, &averages),
                None => no_data(ui),
            }
            ui.separator();

            // ---- Correlations ----
            ui.strong("Correlation between goals");
            match correlation_matrix(&state.dataset, &state.visible_indices) {
                Some(matrix) => table::correlation_grid(ui, &matrix),
                None => {
                    ui.weak("Insufficient data: correlations need at least 2 rows.");
                }
            }
        });
}

fn no_data(ui: &mut Ui) {
    ui.weak("No data available for the selected filters.");
}
