/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, goal columns, country index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply country/year selection → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
