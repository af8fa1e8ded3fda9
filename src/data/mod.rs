//! Data layer: discovery, loading, and series extraction.
//!
//! Architecture:
//! ```text
//!  scatter*.xlsx
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ discover  │  glob the input directory → workbook paths
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  open workbook → RawSheet per requested sheet
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ extract   │  title cell + header row → SeriesSet (T1, T2, T3)
//!   └──────────┘
//! ```
//!
//! `writer` produces workbooks in the same layout (sample data, fixtures).

pub mod discover;
pub mod extract;
pub mod loader;
pub mod model;
pub mod writer;
