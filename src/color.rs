use palette::{named, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Series style table
// ---------------------------------------------------------------------------

/// How one treatment group is placed and coloured on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub name: &'static str,
    /// Categorical x-position.
    pub position: f64,
    pub color: Srgb<u8>,
}

impl SeriesStyle {
    /// The colour as a plotters style colour.
    pub fn rgb(&self) -> RGBColor {
        RGBColor(self.color.red, self.color.green, self.color.blue)
    }
}

/// The three treatment groups, in plotting order.
pub const SERIES_STYLES: [SeriesStyle; 3] = [
    SeriesStyle {
        name: "T1",
        position: 1.0,
        color: named::BLACK,
    },
    SeriesStyle {
        name: "T2",
        position: 2.0,
        color: named::BLUE,
    },
    SeriesStyle {
        name: "T3",
        position: 3.0,
        color: named::RED,
    },
];

/// Look up the style for a series name.
pub fn style_for(name: &str) -> Option<&'static SeriesStyle> {
    SERIES_STYLES.iter().find(|s| s.name == name)
}

/// Series name at an x-axis tick, empty between categories.
pub fn label_at(x: f64) -> String {
    SERIES_STYLES
        .iter()
        .find(|s| (s.position - x).abs() < 1e-9)
        .map(|s| s.name.to_string())
        .unwrap_or_default()
}
