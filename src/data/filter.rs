use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Filter selection: which countries and which year range
// ---------------------------------------------------------------------------

/// The five fixed year-range buckets offered in the sidebar, inclusive on
/// both ends.
pub const YEAR_BUCKETS: [(i32, i32); 5] = [
    (2000, 2005),
    (2006, 2010),
    (2011, 2015),
    (2016, 2020),
    (2021, 2022),
];

/// The active filter: a set of country names plus an inclusive year range.
/// An empty country set matches nothing; there is no implicit "all countries"
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub countries: BTreeSet<String>,
    /// Inclusive (start, end); start ≤ end.
    pub year_range: (i32, i32),
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection {
            countries: BTreeSet::new(),
            year_range: YEAR_BUCKETS[YEAR_BUCKETS.len() - 1],
        }
    }
}

/// Return indices of records matching the selection, in original order.
///
/// A record matches when its country is in the selected set AND its year lies
/// within the inclusive range. Unknown countries in the set simply match no
/// records.
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    let (start, end) = selection.year_range;
    debug_assert!(start <= end);

    if selection.countries.is_empty() {
        return Vec::new();
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            selection.countries.contains(&r.country) && r.year >= start && r.year <= end
        })
        .map(|(i, _)| i)
        .collect()
}

/// Sorted unique country names present in a filtered view.
pub fn view_countries(dataset: &Dataset, view: &[usize]) -> Vec<String> {
    let set: BTreeSet<&str> = view
        .iter()
        .map(|&i| dataset.records[i].country.as_str())
        .collect();
    set.into_iter().map(String::from).collect()
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

    fn dataset() -> Dataset {
        Dataset::from_records(
            vec![
                record("India", 2019),
                record("India", 2020),
                record("Norway", 2021),
                record("India", 2021),
                record("India", 2022),
                record("Norway", 2022),
            ],
            vec![],
        )
    }

    fn selection(countries: &[&str], range: (i32, i32)) -> FilterSelection {
        FilterSelection {
            countries: countries.iter().map(|c| c.to_string()).collect(),
            year_range: range,
        }
    }

    #[test]
    fn matches_country_and_year_in_original_order() {
        let ds = dataset();
        let view = filtered_indices(&ds, &selection(&["India"], (2021, 2022)));
        assert_eq!(view, vec![3, 4]);
        for &i in &view {
            let r = &ds.records[i];
            assert_eq!(r.country, "India");
            assert!((2021..=2022).contains(&r.year));
        }
    }

    #[test]
    fn empty_country_set_matches_nothing() {
        let ds = dataset();
        assert!(filtered_indices(&ds, &selection(&[], (2000, 2022))).is_empty());
    }

    #[test]
    fn unknown_country_matches_nothing() {
        let ds = dataset();
        assert!(filtered_indices(&ds, &selection(&["Atlantis"], (2000, 2022))).is_empty());
    }

    #[test]
    fn year_range_is_inclusive() {
        let ds = dataset();
        let view = filtered_indices(&ds, &selection(&["India", "Norway"], (2020, 2021)));
        assert_eq!(view, vec![1, 2, 3]);
    }

    #[test]
    fn buckets_cover_expected_ranges() {
        assert_eq!(YEAR_BUCKETS[0], (2000, 2005));
        assert_eq!(YEAR_BUCKETS[4], (2021, 2022));
        for (start, end) in YEAR_BUCKETS {
            assert!(start <= end);
        }
    }

    #[test]
    fn view_countries_sorted_unique() {
        let ds = dataset();
        let view = filtered_indices(&ds, &selection(&["India", "Norway"], (2021, 2022)));
        assert_eq!(view_countries(&ds, &view), vec!["India", "Norway"]);
    }
}
