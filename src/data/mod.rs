//! Data layer: export parsing, exclusion rules and column projection.
//!
//! Architecture:
//! ```text
//!  order-status export (.csv)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + validate header → Vec<SourceRecord>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  drop cancelled / Canada resale sub-lines
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ transform  │  project through a ColumnLayout → ProjectedTable
//!   └───────────┘
//! ```

pub mod filter;
pub mod layout;
pub mod loader;
pub mod model;
pub mod transform;
