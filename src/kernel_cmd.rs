//! Kernel command: write the sampled transit-time distribution of each model.

use std::fs;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use transep_io::{Series, write_series};

use crate::cli::KernelArgs;
use crate::config;
use crate::convert;

/// Sample every configured kernel on lags `1..=n` and write one file each.
pub fn run(args: KernelArgs) -> Result<()> {
    let _cmd = info_span!("kernel").entered();
    if args.lags == 0 {
        bail!("number of lags must be at least 1");
    }
    let config = config::load(&args.config)?;

    let output_dir = args
        .output
        .as_ref()
        .or(config.io.output_dir.as_ref())
        .ok_or_else(|| anyhow!("no output directory: set [io].output_dir or use --output"))?;
    let writer_cfg = convert::build_writer_config(&config.io)?;
    let models = convert::build_models(&config.models)?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    for (name, kernel) in &models {
        let samples = kernel.sample_n(args.lags);
        let mass: f64 = samples.iter().sum();
        let series = Series::from_steps(kernel.family().as_str(), samples);

        let path = output_dir.join(format!("kernel_{name}.csv"));
        write_series(&path, &series, &writer_cfg)
            .with_context(|| format!("failed to write kernel: {}", path.display()))?;
        info!(model = %name, family = %kernel.family(), mass, path = %path.display(), "wrote kernel");
    }

    Ok(())
}
