use std::error::Error;
use std::path::Path;

use log::{info, warn};
use plotters::prelude::*;

use crate::color::{label_at, SERIES_STYLES};
use crate::config::{AVERAGE_HALF_WIDTH, FIGURE_SIZE, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::data::model::SeriesSet;
use crate::error::{Result, ScatterError};

// ---------------------------------------------------------------------------
// Treatment scatter plot
// ---------------------------------------------------------------------------

/// Render `set` as a categorical scatter plot with dashed average markers
/// and write it to `out_path`. The image format follows the extension.
///
/// A series without values contributes only its legend entry.
pub fn render_scatter(title: &str, set: &SeriesSet, out_path: &Path) -> Result<()> {
    for series in set.series.iter().filter(|s| s.is_empty()) {
        warn!(
            "Series {} has no values; '{}' will have no average marker for it",
            series.name,
            out_path.display()
        );
    }

    draw_chart(title, set, out_path).map_err(|e| ScatterError::Render {
        path: out_path.to_path_buf(),
        message: e.to_string(),
    })?;

    info!("Wrote {}", out_path.display());
    Ok(())
}

fn draw_chart(
    title: &str,
    set: &SeriesSet,
    out_path: &Path,
) -> std::result::Result<(), Box<dyn Error>> {
    let (y_min, y_max) = y_bounds(set);
    let x_min = SERIES_STYLES[0].position - 0.5;
    let x_max = SERIES_STYLES[SERIES_STYLES.len() - 1].position + 0.5;

    let root = BitMapBackend::new(out_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        // one tick per category at 1, 2, 3
        .x_labels(SERIES_STYLES.len())
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_label_formatter(&|x: &f64| label_at(*x))
        .draw()?;

    for style in &SERIES_STYLES {
        let Some(series) = set.get(style.name) else {
            continue;
        };
        let x = style.position;
        let color = style.rgb();
        let point_style = color.mix(0.5).filled();

        chart
            .draw_series(
                series
                    .values
                    .iter()
                    .map(|&v| Circle::new((x, v), 4, point_style)),
            )?
            .label(style.name)
            .legend(move |(lx, ly)| Circle::new((lx + 10, ly), 4, color.mix(0.5).filled()));

        if let Some(mean) = series.mean() {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x - AVERAGE_HALF_WIDTH, mean), (x + AVERAGE_HALF_WIDTH, mean)],
                    6,
                    4,
                    color.stroke_width(2),
                ))?
                .label(format!("{} avg", style.name))
                .legend(move |(lx, ly)| {
                    PathElement::new(vec![(lx, ly), (lx + 20, ly)], color.stroke_width(2))
                });
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Y-axis range covering every value and mean, padded by 5%.
pub fn y_bounds(set: &SeriesSet) -> (f64, f64) {
    let (lo, hi) = set
        .series
        .iter()
        .flat_map(|s| s.values.iter().copied().chain(s.mean()))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}
