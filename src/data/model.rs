use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Record – one (country, year) observation
// ---------------------------------------------------------------------------

/// A single row of the source table.
///
/// `goal_scores` is parallel to [`Dataset::goal_columns`]; cells that could
/// not be parsed as numbers are stored as NaN and skipped downstream.
#[derive(Debug, Clone)]
pub struct Record {
    pub country: String,
    pub year: i32,
    /// Overall SDG index score (distinct from the per-goal scores).
    pub sdg_index_score: f64,
    /// One value per goal column, in `Dataset::goal_columns` order.
    pub goal_scores: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once at startup and never mutated;
/// duplicate (country, year) pairs are accepted as-is.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All observations, in source-file order.
    pub records: Vec<Record>,
    /// Goal column names in header order (any column containing `goal_`).
    pub goal_columns: Vec<String>,
    /// Sorted unique country names.
    pub countries: Vec<String>,
}

impl Dataset {
    /// Build the country index from loaded records.
    pub fn from_records(records: Vec<Record>, goal_columns: Vec<String>) -> Self {
        let country_set: BTreeSet<&str> =
            records.iter().map(|r| r.country.as_str()).collect();
        let countries = country_set.into_iter().map(String::from).collect();
        Dataset {
            records,
            goal_columns,
            countries,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Latest year present anywhere in the dataset.
    pub fn last_year(&self) -> Option<i32> {
        self.records.iter().map(|r| r.year).max()
    }

    /// Full (year, sdg_index_score) history for one country, in source order,
    /// excluding observations whose score failed to parse.
    pub fn country_history(&self, country: &str) -> Vec<(i32, f64)> {
        self.records
            .iter()
            .filter(|r| r.country == country && r.sdg_index_score.is_finite())
            .map(|r| (r.year, r.sdg_index_score))
            .collect()
    }
}

/// Whether a header names a goal-score column (as opposed to country, year,
/// or the overall index score).
pub fn is_goal_column(header: &str) -> bool {
    header.contains("goal_")
}

/// Display label for a goal column: `goal_7_score` → `Goal 7`.
pub fn goal_label(column: &str) -> String {
    column.replace("_score", "").replace("goal_", "Goal ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, year: i32, score: f64) -> Record {
        Record {
            country: country.to_string(),
            year,
            sdg_index_score: score,
            goal_scores: vec![],
        }
    }

    #[test]
    fn goal_column_convention() {
        assert!(is_goal_column("goal_1_score"));
        assert!(is_goal_column("goal_17_score"));
        assert!(!is_goal_column("sdg_index_score"));
        assert!(!is_goal_column("country"));
        assert!(!is_goal_column("year"));
    }

    #[test]
    fn goal_labels() {
        assert_eq!(goal_label("goal_1_score"), "Goal 1");
        assert_eq!(goal_label("goal_17_score"), "Goal 17");
    }

    #[test]
    fn country_index_is_sorted_and_unique() {
        let ds = Dataset::from_records(
            vec![
                record("Norway", 2020, 80.0),
                record("India", 2020, 60.0),
                record("Norway", 2021, 81.0),
            ],
            vec![],
        );
        assert_eq!(ds.countries, vec!["India", "Norway"]);
        assert_eq!(ds.last_year(), Some(2021));
    }

    #[test]
    fn history_skips_unparsed_scores() {
        let ds = Dataset::from_records(
            vec![
                record("India", 2019, 58.0),
                record("India", 2020, f64::NAN),
                record("India", 2021, 60.0),
            ],
            vec![],
        );
        assert_eq!(ds.country_history("India"), vec![(2019, 58.0), (2021, 60.0)]);
        assert!(ds.country_history("Atlantis").is_empty());
    }
}
