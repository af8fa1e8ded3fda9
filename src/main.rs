use anyhow::{Context, Result};

use assay_scatter::RunConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = RunConfig::default();
    let summary = assay_scatter::run(&config).with_context(|| {
        format!(
            "rendering scatter plots into {}",
            config.output_dir.display()
        )
    })?;

    log::info!(
        "Rendered {} plot(s) from {} file(s)",
        summary.images.len(),
        summary.files
    );
    Ok(())
}
