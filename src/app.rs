use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::config::{RunConfig, IMAGE_EXTENSION};
use crate::data::discover::discover_inputs;
use crate::data::extract::extract_series;
use crate::data::loader::load_sheets;
use crate::error::{Result, ScatterError};
use crate::plot::render_scatter;

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// What a run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of input workbooks processed.
    pub files: usize,
    /// Every image written, in processing order.
    pub images: Vec<PathBuf>,
}

/// Render every configured sheet of every matching workbook.
///
/// The output directory is created first (no error if it exists), so it is
/// present even when nothing matches. The first failure aborts the run.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    fs::create_dir_all(&config.output_dir).map_err(|source| ScatterError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let files = discover_inputs(&config.input_dir, &config.pattern)?;
    if files.is_empty() {
        warn!(
            "No files matching {} in {}",
            config.pattern,
            config.input_dir.display()
        );
    } else {
        info!("Found {} input file(s)", files.len());
    }

    let mut summary = RunSummary::default();
    for path in &files {
        let images = process_file(path, config)?;
        summary.files += 1;
        summary.images.extend(images);
    }
    Ok(summary)
}

/// Render the configured sheets of a single workbook.
pub fn process_file(path: &Path, config: &RunConfig) -> Result<Vec<PathBuf>> {
    let sheets = load_sheets(path, &config.sheet_names)?;
    let base = base_name(path);

    let mut images = Vec::with_capacity(sheets.len());
    for sheet in &sheets {
        let set = extract_series(sheet)?;
        let out_path = config.output_dir.join(output_file_name(&base, &sheet.name));
        render_scatter(&set.title, &set, &out_path)?;
        images.push(out_path);
    }
    Ok(images)
}

/// `<base>_<sheet with spaces as underscores>.png`
pub fn output_file_name(base: &str, sheet_name: &str) -> String {
    format!("{base}_{}.{IMAGE_EXTENSION}", sheet_name.replace(' ', "_"))
}

/// File name without directory or extension.
fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
