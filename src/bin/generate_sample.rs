use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const GOALS: usize = 17;
const FIRST_YEAR: i32 = 2000;
const LAST_YEAR: i32 = 2022;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct Row {
    country: String,
    year: i64,
    sdg_index_score: f64,
    goal_scores: [f64; GOALS],
}

fn generate_rows(rng: &mut SimpleRng) -> Vec<Row> {
    // (country, score in 2000, annual trend)
    let profiles: [(&str, f64, f64); 8] = [
        ("India", 48.0, 0.55),
        ("Norway", 74.0, 0.35),
        ("Brazil", 60.0, 0.40),
        ("Kenya", 42.0, 0.60),
        ("Japan", 70.0, 0.30),
        ("Germany", 72.0, 0.32),
        ("Mexico", 58.0, 0.38),
        ("Vietnam", 50.0, 0.65),
    ];

    let mut rows = Vec::new();
    for (country, base, trend) in profiles {
        for year in FIRST_YEAR..=LAST_YEAR {
            let t = f64::from(year - FIRST_YEAR);
            let sdg_index_score = base + trend * t + rng.gauss(0.0, 0.6);

            let mut goal_scores = [0.0; GOALS];
            for (g, score) in goal_scores.iter_mut().enumerate() {
                // Each goal drifts around the overall index with its own offset.
                let offset = (g as f64 - GOALS as f64 / 2.0) * 2.5;
                *score = (sdg_index_score + offset + rng.gauss(0.0, 3.0)).clamp(0.0, 100.0);
            }

            rows.push(Row {
                country: country.to_string(),
                year: i64::from(year),
                sdg_index_score,
                goal_scores,
            });
        }
    }
    rows
}

fn goal_column(g: usize) -> String {
    format!("goal_{}_score", g + 1)
}

fn write_csv(rows: &[Row], path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create output file");

    let mut header = vec!["country".to_string(), "year".to_string(), "sdg_index_score".to_string()];
    header.extend((0..GOALS).map(goal_column));
    writer.write_record(&header).expect("Failed to write header");

    for row in rows {
        let mut record = vec![
            row.country.clone(),
            row.year.to_string(),
            format!("{:.2}", row.sdg_index_score),
        ];
        record.extend(row.goal_scores.iter().map(|s| format!("{s:.2}")));
        writer.write_record(&record).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush CSV");
}

fn write_parquet(rows: &[Row], path: &str) {
    let mut fields = vec![
        Field::new("country", DataType::Utf8, false),
        Field::new("year", DataType::Int64, false),
        Field::new("sdg_index_score", DataType::Float64, false),
    ];
    fields.extend((0..GOALS).map(|g| Field::new(goal_column(g), DataType::Float64, false)));
    let schema = Arc::new(Schema::new(fields));

    let country_array = StringArray::from(
        rows.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
    );
    let year_array = Int64Array::from(rows.iter().map(|r| r.year).collect::<Vec<_>>());
    let score_array =
        Float64Array::from(rows.iter().map(|r| r.sdg_index_score).collect::<Vec<_>>());

    let mut columns: Vec<Arc<dyn arrow::array::Array>> = vec![
        Arc::new(country_array),
        Arc::new(year_array),
        Arc::new(score_array),
    ];
    for g in 0..GOALS {
        columns.push(Arc::new(Float64Array::from(
            rows.iter().map(|r| r.goal_scores[g]).collect::<Vec<_>>(),
        )));
    }

    let batch =
        RecordBatch::try_new(schema.clone(), columns).expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng);

    let parquet = std::env::args().any(|a| a == "--parquet");
    let output_path = if parquet {
        "sample_sdg_index.parquet"
    } else {
        "sample_sdg_index.csv"
    };

    if parquet {
        write_parquet(&rows, output_path);
    } else {
        write_csv(&rows, output_path);
    }

    println!(
        "Wrote {} rows ({} countries, years {FIRST_YEAR}–{LAST_YEAR}) to {output_path}",
        rows.len(),
        rows.len() / (LAST_YEAR - FIRST_YEAR + 1) as usize
    );
}
