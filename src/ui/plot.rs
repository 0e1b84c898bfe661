use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::analysis::aggregate::GoalAverage;
use crate::data::filter::view_countries;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Time-series plot: SDG index score over the selected years, per country
// ---------------------------------------------------------------------------

/// Render one line (with markers) per country in the current filtered view.
pub fn time_series(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;

    Plot::new("sdg_trend")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Year")
        .y_axis_label("SDG Index Score")
        .height(280.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for country in view_countries(dataset, &state.visible_indices) {
                let series: Vec<[f64; 2]> = state
                    .visible_indices
                    .iter()
                    .map(|&i| &dataset.records[i])
                    .filter(|r| r.country == country && r.sdg_index_score.is_finite())
                    .map(|r| [f64::from(r.year), r.sdg_index_score])
                    .collect();

                let color = state.color_map.color_for(&country);

                let line_points: PlotPoints = series.iter().copied().collect();
                plot_ui.line(Line::new(line_points).name(&country).color(color).width(1.5));

                let marker_points: PlotPoints = series.into_iter().collect();
                plot_ui.points(Points::new(marker_points).name(&country).color(color).radius(3.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Goal-average bar chart
// ---------------------------------------------------------------------------

/// Render one bar per goal column from precomputed averages.
pub fn goal_bar_chart(ui: &mut Ui, averages: &[GoalAverage]) {
    let bars: Vec<Bar> = averages
        .iter()
        .enumerate()
        .filter(|(_, avg)| avg.mean.is_finite())
        .map(|(i, avg)| Bar::new(i as f64, avg.mean).name(&avg.label).width(0.6))
        .collect();

    let labels: Vec<String> = averages.iter().map(|a| a.label.clone()).collect();

    Plot::new("goal_averages")
        .y_axis_label("Average Score")
        .height(240.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round() as i64;
            if (mark.value - i as f64).abs() > 1e-6 {
                return String::new();
            }
            usize::try_from(i)
                .ok()
                .and_then(|i| labels.get(i))
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
