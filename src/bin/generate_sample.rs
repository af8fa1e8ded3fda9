use std::path::Path;

use anyhow::{Context, Result};

use assay_scatter::color::SERIES_STYLES;
use assay_scatter::config::SHEET_NAMES;
use assay_scatter::data::model::CellValue;
use assay_scatter::data::writer::{write_workbook, SheetLayout};

/// SplitMix64 stream; the same seed always writes the same workbook.
struct SampleRng(u64);

impl SampleRng {
    /// Uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// One replicate around `mean`: a sum of four uniforms is bell-shaped
    /// enough for a plate reading and stays within two units of spread.
    fn replicate(&mut self, mean: f64, spread: f64) -> f64 {
        let jitter: f64 = (0..4).map(|_| self.next_unit()).sum::<f64>() - 2.0;
        mean + spread * jitter
    }
}

const REPLICATES: usize = 8;

/// Share of wells left blank, so the output shows uneven group sizes.
const DROPOUT: f64 = 0.15;

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SampleRng(42);

    // Mean fold change per treatment at each time point.
    let effects: [(&str, [f64; 3]); 2] = [
        (SHEET_NAMES[0], [1.0, 1.8, 2.6]),
        (SHEET_NAMES[1], [1.1, 2.4, 3.9]),
    ];

    let sheets: Vec<SheetLayout> = effects
        .iter()
        .map(|(sheet, means)| {
            let mut layout =
                SheetLayout::new(*sheet, format!("Relative expression, {}", sheet.to_lowercase()));
            for (style, &mean) in SERIES_STYLES.iter().zip(means) {
                let cells: Vec<CellValue> = (0..REPLICATES)
                    .map(|_| {
                        if rng.next_unit() < DROPOUT {
                            CellValue::Null
                        } else {
                            let v = rng.replicate(mean, 0.25 * mean).max(0.0);
                            CellValue::Float((v * 1000.0).round() / 1000.0)
                        }
                    })
                    .collect();
                layout = layout.column(style.name, cells);
            }
            layout
        })
        .collect();

    let output_path = Path::new("scatterSample.xlsx");
    write_workbook(output_path, &sheets)
        .with_context(|| format!("writing {}", output_path.display()))?;

    println!(
        "Wrote {} sheets ({} replicates per treatment) to {}",
        sheets.len(),
        REPLICATES,
        output_path.display()
    );
    Ok(())
}
