/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///  spacex_launch_dash.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, payload bounds, site list
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  selector + payload range → pie slices / scatter indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
