use thiserror::Error;

use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Trend prediction: least-squares fit over a country's full history
// ---------------------------------------------------------------------------

/// One extrapolated score for one country. Computed on demand and discarded
/// after rendering; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub country: String,
    pub last_observed_year: i32,
    pub target_year: i32,
    /// Fitted line evaluated at `target_year`, rounded to 2 decimal places.
    /// Not clamped: linear extrapolation may leave the 0–100 score range.
    pub predicted_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    /// Fitting a line needs at least two observations.
    #[error("{country}: needs at least 2 observations, found {found}")]
    InsufficientHistory { country: String, found: usize },

    /// Predictions go into the future only.
    #[error("target year {target_year} is not after the last observed year {last_observed_year}")]
    InvalidTargetYear {
        target_year: i32,
        last_observed_year: i32,
    },
}

/// Fit `score = a*year + b` over the country's FULL history and evaluate at
/// `target_year`.
///
/// The history deliberately ignores any active year-range filter:
/// extrapolation wants the longest available series, not the viewed window.
/// Pure and idempotent; repeated calls recompute from scratch.
pub fn predict(
    dataset: &Dataset,
    country: &str,
    target_year: i32,
) -> Result<PredictionResult, PredictError> {
    let history = dataset.country_history(country);

    if history.len() < 2 {
        return Err(PredictError::InsufficientHistory {
            country: country.to_string(),
            found: history.len(),
        });
    }

    // len >= 2 so max() exists.
    let last_observed_year = history.iter().map(|&(year, _)| year).max().unwrap_or(0);
    if target_year <= last_observed_year {
        return Err(PredictError::InvalidTargetYear {
            target_year,
            last_observed_year,
        });
    }

    let (slope, intercept) = fit_line(&history);
    let raw = slope * f64::from(target_year) + intercept;

    Ok(PredictionResult {
        country: country.to_string(),
        last_observed_year,
        target_year,
        predicted_score: round2(raw),
    })
}

/// Ordinary least squares over (year, score) pairs. When every observation
/// shares one year (possible with duplicate rows) the minimum-norm solution
/// applies: slope 0, intercept = mean score.
fn fit_line(history: &[(i32, f64)]) -> (f64, f64) {
    let n = history.len() as f64;
    let mean_x = history.iter().map(|&(x, _)| f64::from(x)).sum::<f64>() / n;
    let mean_y = history.iter().map(|&(_, y)| y).sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for &(x, y) in history {
        let dx = f64::from(x) - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }

    if sxx == 0.0 {
        return (0.0, mean_y);
    }
    let slope = sxy / sxx;
    (slope, mean_y - slope * mean_x)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset(rows: &[(&str, i32, f64)]) -> Dataset {
        let records = rows
            .iter()
            .map(|&(country, year, score)| Record {
                country: country.to_string(),
                year,
                sdg_index_score: score,
                goal_scores: vec![],
            })
            .collect();
        Dataset::from_records(records, vec![])
    }

    #[test]
    fn extrapolates_along_the_fitted_line() {
        let ds = dataset(&[("X", 2010, 50.0), ("X", 2020, 70.0)]);
        let r = predict(&ds, "X", 2030).unwrap();
        assert_eq!(r.country, "X");
        assert_eq!(r.last_observed_year, 2020);
        assert_eq!(r.target_year, 2030);
        // slope 2 per year, so 70 + 10*2.
        assert_eq!(r.predicted_score, 90.0);
    }

    #[test]
    fn uses_full_history_regardless_of_filters() {
        // The caller's view never reaches predict; only the dataset does.
        let ds = dataset(&[("X", 2000, 30.0), ("X", 2010, 50.0), ("X", 2020, 70.0)]);
        let r = predict(&ds, "X", 2025).unwrap();
        assert_eq!(r.predicted_score, 80.0);
    }

    #[test]
    fn single_observation_is_insufficient() {
        let ds = dataset(&[("Y", 2020, 60.0)]);
        assert_eq!(
            predict(&ds, "Y", 2030),
            Err(PredictError::InsufficientHistory {
                country: "Y".to_string(),
                found: 1,
            })
        );
    }

    #[test]
    fn unknown_country_is_insufficient() {
        let ds = dataset(&[("X", 2010, 50.0), ("X", 2020, 70.0)]);
        assert_eq!(
            predict(&ds, "Atlantis", 2030),
            Err(PredictError::InsufficientHistory {
                country: "Atlantis".to_string(),
                found: 0,
            })
        );
    }

    #[test]
    fn target_year_must_be_in_the_future() {
        let ds = dataset(&[("X", 2010, 50.0), ("X", 2020, 70.0)]);
        assert_eq!(
            predict(&ds, "X", 2015),
            Err(PredictError::InvalidTargetYear {
                target_year: 2015,
                last_observed_year: 2020,
            })
        );
        assert_eq!(
            predict(&ds, "X", 2020),
            Err(PredictError::InvalidTargetYear {
                target_year: 2020,
                last_observed_year: 2020,
            })
        );
    }

    #[test]
    fn idempotent_across_calls() {
        let ds = dataset(&[("X", 2010, 50.0), ("X", 2015, 57.5), ("X", 2020, 70.0)]);
        let first = predict(&ds, "X", 2040).unwrap();
        let second = predict(&ds, "X", 2040).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_years_fall_back_to_mean() {
        let ds = dataset(&[("X", 2020, 60.0), ("X", 2020, 70.0)]);
        let r = predict(&ds, "X", 2030).unwrap();
        assert_eq!(r.predicted_score, 65.0);
    }

    #[test]
    fn nan_scores_are_excluded_from_history() {
        let ds = dataset(&[("X", 2010, 50.0), ("X", 2015, f64::NAN), ("X", 2020, 70.0)]);
        let r = predict(&ds, "X", 2030).unwrap();
        assert_eq!(r.predicted_score, 90.0);
    }

    #[test]
    fn result_is_rounded_not_clamped() {
        let ds = dataset(&[("X", 2010, 10.0), ("X", 2020, 5.0)]);
        let r = predict(&ds, "X", 2050).unwrap();
        // Declining trend runs below zero; that is accepted, not clamped.
        assert_eq!(r.predicted_score, -10.0);

        let ds = dataset(&[("Z", 2010, 50.0), ("Z", 2013, 51.0)]);
        let r = predict(&ds, "Z", 2030).unwrap();
        // 50 + (1/3)*20 = 56.666... → two decimal places.
        assert_eq!(r.predicted_score, 56.67);
    }
}
