//! Simulate command: convolve the input series with every configured model.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use rayon::prelude::*;
use tracing::{Span, debug_span, info, info_span};

use transep_io::{read_series, write_series};

use crate::cli::SimulateArgs;
use crate::config;
use crate::convert;

/// Per-model span, parented explicitly since rayon workers do not inherit
/// the caller's current span.
fn model_span(cmd: &Span, name: &str) -> Span {
    debug_span!(parent: cmd, "model", name = %name)
}

/// Run the simulation pipeline.
pub fn run(args: SimulateArgs) -> Result<()> {
    let cmd = info_span!("simulate");
    let _cmd = cmd.enter();
    let config = config::load(&args.config)?;

    // Resolve paths; CLI overrides config
    let input = config
        .io
        .input
        .as_ref()
        .ok_or_else(|| anyhow!("no input path: set [io].input in config"))?;
    let output_dir = args
        .output
        .as_ref()
        .or(config.io.output_dir.as_ref())
        .ok_or_else(|| anyhow!("no output directory: set [io].output_dir or use --output"))?;

    let reader_cfg = convert::build_reader_config(&config.io)?;
    let writer_cfg = convert::build_writer_config(&config.io)?;
    let sim_cfg =
        convert::build_simulation_config(&config.simulation, config.loss.as_ref(), args.engine)?;
    let models = convert::build_models(&config.models)?;
    let factor = config.simulation.output_factor;

    info!(path = %input.display(), "reading input series");
    let series = read_series(input, &reader_cfg)
        .with_context(|| format!("failed to read input: {}", input.display()))?;
    if series.is_empty() {
        bail!("input series {} has no rows", input.display());
    }
    if series.missing() > 0 {
        bail!(
            "input series has {} missing values after filling; set [io].fill to \"zero\" or \"backward_forward\"",
            series.missing()
        );
    }
    info!(rows = series.len(), column = %series.name(), "input loaded");

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir: {}", output_dir.display()))?;

    let written: Vec<PathBuf> = models
        .par_iter()
        .map(|(name, kernel)| -> Result<PathBuf> {
            let _model = model_span(&cmd, name).entered();
            let result = transep_simulate::run(series.values(), kernel, &sim_cfg)
                .with_context(|| format!("simulation failed for model {name:?}"))?;

            let values: Vec<f64> = result.output().iter().map(|v| v * factor).collect();
            let mut out = series.with_values(series.name(), values)?;
            if let Some(unit) = config.io.unit.as_deref() {
                out = out.with_unit(unit);
            }

            let path = output_dir.join(format!("time_series_{name}.csv"));
            write_series(&path, &out, &writer_cfg)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(model = %name, path = %path.display(), "wrote simulated series");
            Ok(path)
        })
        .collect::<Result<_>>()?;

    info!(n_models = written.len(), "simulation complete");
    Ok(())
}
