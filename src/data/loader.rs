use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{is_goal_column, Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the SDG dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with `country`, `year`, `sdg_index_score` and
///                any number of `goal_<N>_score` columns (primary format)
/// * `.parquet` – same columns as flat Arrow arrays
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening {}", path.display()))?;
            load_csv(file)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(input: impl Read) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let country_idx = headers
        .iter()
        .position(|h| h == "country")
        .context("CSV missing 'country' column")?;
    let year_idx = headers
        .iter()
        .position(|h| h == "year")
        .context("CSV missing 'year' column")?;
    let score_idx = headers
        .iter()
        .position(|h| h == "sdg_index_score")
        .context("CSV missing 'sdg_index_score' column")?;

    // Goal columns in header order.
    let goal_indices: Vec<usize> = (0..headers.len())
        .filter(|&i| is_goal_column(&headers[i]))
        .collect();
    let goal_columns: Vec<String> = goal_indices.iter().map(|&i| headers[i].clone()).collect();

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let country = row.get(country_idx).unwrap_or("").trim().to_string();
        if country.is_empty() {
            bail!("CSV row {row_no}: empty country");
        }

        let year: i32 = row
            .get(year_idx)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("CSV row {row_no}: invalid year"))?;

        let sdg_index_score = parse_score(row.get(score_idx).unwrap_or(""));
        let goal_scores: Vec<f64> = goal_indices
            .iter()
            .map(|&i| parse_score(row.get(i).unwrap_or("")))
            .collect();

        records.push(Record {
            country,
            year,
            sdg_index_score,
            goal_scores,
        });
    }

    Ok(Dataset::from_records(records, goal_columns))
}

/// Score cells that fail to parse become NaN and are skipped by the
/// aggregation and prediction layers.
fn parse_score(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    let mut goal_columns: Vec<String> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let country_idx = schema
            .index_of("country")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'country' column"))?;
        let year_idx = schema
            .index_of("year")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'year' column"))?;
        let score_idx = schema
            .index_of("sdg_index_score")
            .map_err(|_| anyhow::anyhow!("Parquet file missing 'sdg_index_score' column"))?;

        let goal_cols: Vec<(usize, String)> = schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, f)| is_goal_column(f.name()))
            .map(|(i, f)| (i, f.name().clone()))
            .collect();
        if goal_columns.is_empty() {
            goal_columns = goal_cols.iter().map(|(_, name)| name.clone()).collect();
        }

        let country_col = batch.column(country_idx);
        let year_col = batch.column(year_idx);
        let score_col = batch.column(score_idx);

        for row in 0..batch.num_rows() {
            let country = extract_string(country_col, row)
                .with_context(|| format!("Row {row}: failed to read 'country'"))?;
            if country.is_empty() {
                bail!("Row {row}: empty country");
            }
            let year = extract_year(year_col, row)
                .with_context(|| format!("Row {row}: failed to read 'year'"))?;
            let sdg_index_score = extract_score(score_col, row);
            let goal_scores: Vec<f64> = goal_cols
                .iter()
                .map(|(i, _)| extract_score(batch.column(*i), row))
                .collect();

            records.push(Record {
                country,
                year,
                sdg_index_score,
                goal_scores,
            });
        }
    }

    Ok(Dataset::from_records(records, goal_columns))
}

// -- Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    let arr = col
        .as_any()
        .downcast_ref::<StringArray>()
        .context("expected Utf8 column")?;
    Ok(arr.value(row).to_string())
}

fn extract_year(col: &Arc<dyn Array>, row: usize) -> Result<i32> {
    if col.is_null(row) {
        bail!("null value in year column");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row))
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row) as i32)
        }
        other => bail!("year column has type {other:?}, expected Int32 or Int64"),
    }
}

fn extract_score(col: &Arc<dyn Array>, row: usize) -> f64 {
    if col.is_null(row) {
        return f64::NAN;
    }
    match col.data_type() {
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row))
            .unwrap_or(f64::NAN),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| a.value(row) as f64)
            .unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
country,year,sdg_index_score,goal_1_score,goal_2_score
India,2021,60.1,40.0,50.5
India,2022,60.9,41.2,51.0
Norway,2022,82.0,99.0,70.3
";

    #[test]
    fn parses_csv_and_discovers_goal_columns() {
        let ds = load_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.goal_columns, vec!["goal_1_score", "goal_2_score"]);
        assert_eq!(ds.countries, vec!["India", "Norway"]);

        let first = &ds.records[0];
        assert_eq!(first.country, "India");
        assert_eq!(first.year, 2021);
        assert_eq!(first.sdg_index_score, 60.1);
        assert_eq!(first.goal_scores, vec![40.0, 50.5]);
    }

    #[test]
    fn unparseable_score_becomes_nan() {
        let csv = "country,year,sdg_index_score,goal_1_score\nIndia,2021,n/a,\n";
        let ds = load_csv(csv.as_bytes()).unwrap();
        assert!(ds.records[0].sdg_index_score.is_nan());
        assert!(ds.records[0].goal_scores[0].is_nan());
    }

    #[test]
    fn invalid_year_is_an_error() {
        let csv = "country,year,sdg_index_score\nIndia,soon,60.0\n";
        assert!(load_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn empty_country_is_an_error() {
        let csv = "country,year,sdg_index_score\n,2021,60.0\n";
        assert!(load_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "country,sdg_index_score\nIndia,60.0\n";
        assert!(load_csv(csv.as_bytes()).is_err());
    }
}
