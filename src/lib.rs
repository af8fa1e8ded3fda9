//! Treatment scatter plots from pre-formatted Excel workbooks.
//!
//! Every `scatter*.xlsx` workbook in a directory is read, its `Day 14` and
//! `Day 28` sheets are reduced to three measurement series (`T1`, `T2`,
//! `T3`), and each sheet becomes a PNG scatter plot with dashed group
//! averages under `scatters/`.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod plot;

pub use app::{run, RunSummary};
pub use config::RunConfig;
pub use error::{ErrorKind, Result, ScatterError};
