use std::collections::BTreeSet;

use crate::color::CountryColorMap;
use crate::data::filter::{filtered_indices, FilterSelection, YEAR_BUCKETS};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page the central panel shows. Pure presentation state; the core
/// computations never depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Goals,
    Prediction,
}

/// Country pre-selected on startup when present in the dataset.
const DEFAULT_COUNTRY: &str = "India";

/// Predictions are offered up to this year.
pub const MAX_PREDICTION_YEAR: i32 = 2050;

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; read-only for the rest of the process.
    pub dataset: Dataset,

    /// Current page.
    pub page: Page,

    /// Active country / year-range selection.
    pub selection: FilterSelection,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Target year on the prediction page.
    pub target_year: i32,

    /// Stable per-country colours for the time-series plot.
    pub color_map: CountryColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state around a freshly loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        let mut countries = BTreeSet::new();
        if dataset.countries.iter().any(|c| c == DEFAULT_COUNTRY) {
            countries.insert(DEFAULT_COUNTRY.to_string());
        }
        let selection = FilterSelection {
            countries,
            year_range: YEAR_BUCKETS[YEAR_BUCKETS.len() - 1],
        };

        // Third option of the prediction range, as far as it exists.
        let target_year = dataset
            .last_year()
            .map(|last| (last + 3).min(MAX_PREDICTION_YEAR))
            .unwrap_or(MAX_PREDICTION_YEAR);

        let color_map = CountryColorMap::new(&dataset.countries);
        let visible_indices = filtered_indices(&dataset, &selection);

        AppState {
            dataset,
            page: Page::Home,
            selection,
            visible_indices,
            target_year,
            color_map,
            status_message: None,
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.selection);
    }

    /// Toggle a single country in the selection.
    pub fn toggle_country(&mut self, country: &str) {
        if !self.selection.countries.remove(country) {
            self.selection.countries.insert(country.to_string());
        }
        self.refilter();
    }

    /// Select every country in the dataset.
    pub fn select_all_countries(&mut self) {
        self.selection.countries = self.dataset.countries.iter().cloned().collect();
        self.refilter();
    }

    /// Clear the country selection.
    pub fn select_no_countries(&mut self) {
        self.selection.countries.clear();
        self.refilter();
    }

    /// Switch to a year bucket.
    pub fn set_year_range(&mut self, range: (i32, i32)) {
        self.selection.year_range = range;
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(country: &str, year: i32) -> Record {
        Record {
            country: country.to_string(),
            year,
            sdg_index_score: 50.0,
            goal_scores: vec![],
        }
    }

    fn state() -> AppState {
        AppState::new(Dataset::from_records(
            vec![
                record("India", 2021),
                record("India", 2022),
                record("Norway", 2022),
            ],
            vec![],
        ))
    }

    #[test]
    fn startup_defaults() {
        let state = state();
        assert_eq!(state.page, Page::Home);
        assert_eq!(state.selection.year_range, (2021, 2022));
        assert!(state.selection.countries.contains("India"));
        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.target_year, 2025);
    }

    #[test]
    fn toggling_a_country_refilters() {
        let mut state = state();
        state.toggle_country("Norway");
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        state.toggle_country("India");
        assert_eq!(state.visible_indices, vec![2]);
    }

    #[test]
    fn select_all_and_none() {
        let mut state = state();
        state.select_no_countries();
        assert!(state.visible_indices.is_empty());
        state.select_all_countries();
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn changing_the_year_bucket_refilters() {
        let mut state = state();
        state.set_year_range((2016, 2020));
        assert!(state.visible_indices.is_empty());
    }
}
