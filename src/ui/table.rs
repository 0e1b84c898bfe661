use eframe::egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::aggregate::CorrelationMatrix;
use crate::data::model::goal_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered data table
// ---------------------------------------------------------------------------

/// Render the filtered rows: country, year, index score, then one column per
/// goal.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;
    let n_goals = dataset.goal_columns.len();

    TableBuilder::new(ui)
        .id_salt("filtered_rows")
        .striped(true)
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(70.0))
        .columns(Column::auto().at_least(50.0), n_goals)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Country");
            });
            header.col(|ui| {
                ui.strong("Year");
            });
            header.col(|ui| {
                ui.strong("Index");
            });
            for col in &dataset.goal_columns {
                let label = goal_label(col);
                header.col(|ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let record = &dataset.records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&record.country);
                });
                row.col(|ui| {
                    ui.label(record.year.to_string());
                });
                row.col(|ui| {
                    ui.label(format_score(record.sdg_index_score));
                });
                for &score in &record.goal_scores {
                    row.col(|ui| {
                        ui.label(format_score(score));
                    });
                }
            });
        });
}

fn format_score(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.1}")
    } else {
        "–".to_string()
    }
}

// ---------------------------------------------------------------------------
// Correlation matrix grid
// ---------------------------------------------------------------------------

/// Render the goal×goal correlation matrix with colour-graded cells.
pub fn correlation_grid(ui: &mut Ui, matrix: &CorrelationMatrix) {
    TableBuilder::new(ui)
        .id_salt("goal_correlations")
        .striped(true)
        .column(Column::auto().at_least(60.0))
        .columns(Column::auto().at_least(50.0), matrix.len())
        .header(20.0, |mut header| {
            header.col(|_ui| {});
            for goal in &matrix.goals {
                let label = goal_label(goal);
                header.col(|ui| {
                    ui.strong(label);
                });
            }
        })
        .body(|mut body| {
            for row_idx in 0..matrix.len() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.strong(goal_label(&matrix.goals[row_idx]));
                    });
                    for col_idx in 0..matrix.len() {
                        let r = matrix.get(row_idx, col_idx);
                        row.col(|ui| {
                            if r.is_finite() {
                                ui.label(
                                    RichText::new(format!("{r:.2}")).color(correlation_color(r)),
                                );
                            } else {
                                ui.label("–");
                            }
                        });
                    }
                });
            }
        });
}

/// Blue gradient over [-1, 1], brighter for stronger positive correlation.
fn correlation_color(r: f64) -> Color32 {
    let t = ((r + 1.0) / 2.0).clamp(0.0, 1.0) as f32;
    let low = Color32::from_rgb(140, 140, 140);
    let high = Color32::from_rgb(90, 170, 255);
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color32::from_rgb(
        lerp(low.r(), high.r()),
        lerp(low.g(), high.g()),
        lerp(low.b(), high.b()),
    )
}
