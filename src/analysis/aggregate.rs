use crate::data::model::{goal_label, Dataset};

// ---------------------------------------------------------------------------
// Per-goal averages
// ---------------------------------------------------------------------------

/// Mean score of one goal column over a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalAverage {
    /// Raw column name, e.g. `goal_7_score`.
    pub column: String,
    /// Display label, e.g. `Goal 7`.
    pub label: String,
    pub mean: f64,
}

/// Arithmetic mean per goal column over the view, skipping NaN cells.
///
/// Returns `None` for an empty view; callers render "no data" instead of
/// computing on zero rows. A column with no finite cells yields a NaN mean.
pub fn average_by_goal(dataset: &Dataset, view: &[usize]) -> Option<Vec<GoalAverage>> {
    if view.is_empty() {
        return None;
    }

    let averages = dataset
        .goal_columns
        .iter()
        .enumerate()
        .map(|(g, column)| {
            let mut sum = 0.0;
            let mut n = 0usize;
            for &i in view {
                let v = dataset.records[i].goal_scores[g];
                if v.is_finite() {
                    sum += v;
                    n += 1;
                }
            }
            let mean = if n > 0 { sum / n as f64 } else { f64::NAN };
            GoalAverage {
                column: column.clone(),
                label: goal_label(column),
                mean,
            }
        })
        .collect();

    Some(averages)
}

// ---------------------------------------------------------------------------
// Goal correlation matrix
// ---------------------------------------------------------------------------

/// Symmetric goal×goal Pearson correlation matrix. Cells that cannot be
/// computed (under 2 complete rows, or zero variance) hold NaN.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    /// Goal column names, in `Dataset::goal_columns` order.
    pub goals: Vec<String>,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.goals.len() + col]
    }
}

/// Pairwise Pearson correlation between every pair of goal columns over the
/// view. Diagonal is exactly 1.0 and the matrix is symmetric.
///
/// Returns `None` when the view has fewer than 2 rows; callers surface
/// "insufficient data" instead of a numeric result. Each pair is computed
/// over the rows where both cells are finite.
pub fn correlation_matrix(dataset: &Dataset, view: &[usize]) -> Option<CorrelationMatrix> {
    if view.len() < 2 {
        return None;
    }

    let n = dataset.goal_columns.len();
    let mut values = vec![f64::NAN; n * n];

    for a in 0..n {
        values[a * n + a] = 1.0;
        for b in (a + 1)..n {
            let r = pearson(dataset, view, a, b);
            values[a * n + b] = r;
            values[b * n + a] = r;
        }
    }

    Some(CorrelationMatrix {
        goals: dataset.goal_columns.clone(),
        values,
    })
}

fn pearson(dataset: &Dataset, view: &[usize], a: usize, b: usize) -> f64 {
    let pairs: Vec<(f64, f64)> = view
        .iter()
        .map(|&i| {
            let r = &dataset.records[i];
            (r.goal_scores[a], r.goal_scores[b])
        })
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset(rows: Vec<Vec<f64>>) -> Dataset {
        let goal_columns = vec!["goal_1_score".to_string(), "goal_2_score".to_string()];
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, goal_scores)| Record {
                country: "X".to_string(),
                year: 2000 + i as i32,
                sdg_index_score: 50.0,
                goal_scores,
            })
            .collect();
        Dataset::from_records(records, goal_columns)
    }

    #[test]
    fn empty_view_has_no_averages() {
        let ds = dataset(vec![vec![1.0, 2.0]]);
        assert!(average_by_goal(&ds, &[]).is_none());
    }

    #[test]
    fn averages_per_goal_column() {
        let ds = dataset(vec![vec![10.0, 30.0], vec![20.0, 50.0]]);
        let avgs = average_by_goal(&ds, &[0, 1]).unwrap();
        assert_eq!(avgs[0].label, "Goal 1");
        assert_eq!(avgs[0].mean, 15.0);
        assert_eq!(avgs[1].mean, 40.0);
    }

    #[test]
    fn averages_skip_nan_cells() {
        let ds = dataset(vec![vec![10.0, f64::NAN], vec![20.0, 40.0]]);
        let avgs = average_by_goal(&ds, &[0, 1]).unwrap();
        assert_eq!(avgs[0].mean, 15.0);
        assert_eq!(avgs[1].mean, 40.0);
    }

    #[test]
    fn correlation_needs_two_rows() {
        let ds = dataset(vec![vec![1.0, 2.0]]);
        assert!(correlation_matrix(&ds, &[0]).is_none());
        assert!(correlation_matrix(&ds, &[]).is_none());
    }

    #[test]
    fn correlation_diagonal_is_one_and_symmetric() {
        let ds = dataset(vec![
            vec![10.0, 35.0],
            vec![20.0, 25.0],
            vec![30.0, 15.0],
        ]);
        let m = correlation_matrix(&ds, &[0, 1, 2]).unwrap();
        for g in 0..m.len() {
            assert_eq!(m.get(g, g), 1.0);
        }
        assert_eq!(m.get(0, 1), m.get(1, 0));
        // Perfectly anti-correlated columns.
        assert!((m.get(0, 1) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfectly_correlated_columns() {
        let ds = dataset(vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]]);
        let m = correlation_matrix(&ds, &[0, 1, 2]).unwrap();
        assert!((m.get(0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_column_yields_nan() {
        let ds = dataset(vec![vec![5.0, 1.0], vec![5.0, 2.0]]);
        let m = correlation_matrix(&ds, &[0, 1]).unwrap();
        assert!(m.get(0, 1).is_nan());
        assert_eq!(m.get(0, 0), 1.0);
    }
}
