/// Data layer: core types, the example fixture, loading, and filtering.
///
/// Architecture:
/// ```text
///  .json / .csv          example_dataset()
///        │                      │
///        ▼                      │
///   ┌──────────┐                │
///   │  loader   │  parse file → Dataset
///   └──────────┘                │
///        │                      │
///        ▼                      ▼
///   ┌──────────────────────────────┐
///   │ Dataset  title + Vec<Row>     │
///   └──────────────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selected categories → visible series
///   └──────────┘
/// ```

pub mod example;
pub mod filter;
pub mod loader;
pub mod model;
