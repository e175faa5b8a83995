/// Data layer: core types, loading, search, and filtering.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<Resource>, tag vocabulary
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   ┌──────────┐
///   │  search   │ → │  filter   │  fuzzy index + filter pipeline → visible indices
///   └──────────┘   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod search;
