/// Data layer: core types, loading, filtering and chart aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (once, at startup)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │                         │
///        ▼                         ▼
///   ┌───────────┐            ┌──────────┐
///   │ aggregate  │ site only  │  scatter  │ site + payload range
///   └───────────┘            └──────────┘
///                                  │
///                            ┌──────────┐
///                            │  filter   │
///                            └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod scatter;
