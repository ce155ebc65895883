/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///     .csv
///       │
///       ▼
///  ┌──────────┐
///  │  loader   │  parse file → ExoDataset
///  └──────────┘
///       │
///       ▼
///  ┌────────────┐
///  │ ExoDataset  │  Vec<Planet>
///  └────────────┘
///       │
///       ▼
///  ┌────────────┐
///  │ aggregate   │  group / classify / bin → buckets per chart
///  └────────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
