use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Fixed run parameters
// ---------------------------------------------------------------------------

/// Glob matched against file names in the input directory.
pub const INPUT_PATTERN: &str = "scatter*.xlsx";

/// Directory receiving the rendered images.
pub const OUTPUT_DIR: &str = "scatters";

/// Sheets read from every workbook, in processing order.
pub const SHEET_NAMES: [&str; 2] = ["Day 14", "Day 28"];

/// The only extension the loader accepts (compared case-insensitively).
pub const WORKBOOK_EXTENSION: &str = "xlsx";

pub const IMAGE_EXTENSION: &str = "png";

pub const X_AXIS_LABEL: &str = "Treatment";
pub const Y_AXIS_LABEL: &str = "Fold Change";

/// Half the width of an average marker, in x-axis units.
pub const AVERAGE_HALF_WIDTH: f64 = 0.2;

/// Output image size in pixels.
pub const FIGURE_SIZE: (u32, u32) = (640, 480);

// ---------------------------------------------------------------------------
// RunConfig
// ---------------------------------------------------------------------------

/// Where to look for workbooks and where to put the plots.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub pattern: String,
    pub output_dir: PathBuf,
    pub sheet_names: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            pattern: INPUT_PATTERN.to_string(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            sheet_names: SHEET_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RunConfig {
    /// Production layout rooted at `dir` instead of the working directory.
    pub fn rooted_at(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            output_dir: dir.join(OUTPUT_DIR),
            input_dir: dir,
            ..Self::default()
        }
    }
}
