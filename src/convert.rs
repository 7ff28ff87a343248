//! Pure conversion functions: TOML config structs -> crate API config types.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};

use transep_io::{FillPolicy, ReaderConfig, WriterConfig};
use transep_simulate::{Engine, LinearMethod, LossParams, SimulationConfig, TransferFunction};

use crate::cli::EngineArg;
use crate::config::{IoToml, KernelToml, LossToml, ModelToml, SimulationToml};

/// Parses a convolution engine name into the corresponding enum variant.
pub fn parse_engine(s: &str) -> Result<Engine> {
    match s.to_lowercase().as_str() {
        "fast" => Ok(Engine::Fast),
        "explicit" => Ok(Engine::Explicit),
        other => bail!("unknown engine: {other:?}"),
    }
}

/// Parses a linear convolution backend name into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<LinearMethod> {
    match s.to_lowercase().as_str() {
        "fft" => Ok(LinearMethod::Fft),
        "direct" => Ok(LinearMethod::Direct),
        other => bail!("unknown convolution method: {other:?}"),
    }
}

/// Parses a missing-value fill policy name into the corresponding enum variant.
pub fn parse_fill(s: &str) -> Result<FillPolicy> {
    match s.to_lowercase().as_str() {
        "none" => Ok(FillPolicy::None),
        "zero" => Ok(FillPolicy::Zero),
        "backward_forward" | "bfill_ffill" => Ok(FillPolicy::BackwardForward),
        other => bail!("unknown fill policy: {other:?}"),
    }
}

/// Parses a delimiter string, which must hold exactly one character.
pub fn parse_delimiter(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("delimiter must be a single character, got {s:?}"),
    }
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Fast => Engine::Fast,
            EngineArg::Explicit => Engine::Explicit,
        }
    }
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoToml) -> Result<ReaderConfig> {
    let cfg = ReaderConfig::default()
        .with_delimiter(parse_delimiter(&io.delimiter)?)
        .with_column(io.column.as_deref())
        .with_na_value(io.na_value)
        .with_fill(parse_fill(&io.fill)?)
        .with_skip_rows(io.skip_rows);
    cfg.validate().context("invalid [io] reader settings")?;
    Ok(cfg)
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml) -> Result<WriterConfig> {
    let cfg = WriterConfig::default()
        .with_delimiter(parse_delimiter(&io.output_delimiter)?)
        .with_precision(io.precision);
    cfg.validate().context("invalid [io] writer settings")?;
    Ok(cfg)
}

/// Builds a [`SimulationConfig`] from the TOML simulation and loss sections.
///
/// An engine given on the command line takes precedence over the file.
pub fn build_simulation_config(
    sim: &SimulationToml,
    loss: Option<&LossToml>,
    engine_override: Option<EngineArg>,
) -> Result<SimulationConfig> {
    let engine = match engine_override {
        Some(arg) => arg.into(),
        None => parse_engine(&sim.engine)?,
    };
    let mut cfg = SimulationConfig::new()
        .with_engine(engine)
        .with_method(parse_method(&sim.method)?)
        .with_dtau(sim.dtau)
        .with_scale_explicit(sim.scale_explicit);
    if let Some(l) = loss {
        let params = LossParams::new(l.b1, l.b2, l.b3).context("invalid [loss] section")?;
        cfg = cfg.with_loss(params);
    }
    cfg.validate().context("invalid [simulation] section")?;
    if !sim.output_factor.is_finite() {
        bail!("output_factor must be finite, got {}", sim.output_factor);
    }
    Ok(cfg)
}

/// Builds a [`TransferFunction`] from a TOML kernel table.
pub fn build_transfer_function(kernel: &KernelToml) -> Result<TransferFunction> {
    let tf = match *kernel {
        KernelToml::Dispersion { p_d, mtt } => TransferFunction::dispersion(p_d, mtt)?,
        KernelToml::LinearReservoir { mtt } => TransferFunction::linear_reservoir(mtt)?,
        KernelToml::ParallelLinearReservoir {
            mtt_slow,
            mtt_fast,
            frac_fast,
        } => TransferFunction::parallel_linear_reservoir(mtt_slow, mtt_fast, frac_fast)?,
        KernelToml::ExponentialPiston { mtt, eta } => {
            TransferFunction::exponential_piston(mtt, eta)?
        }
        KernelToml::Gamma { alpha, beta } => TransferFunction::gamma(alpha, beta)?,
    };
    Ok(tf)
}

/// Builds the named transfer functions of all `[[model]]` entries.
///
/// Names must be non-empty, unique and usable as part of a file name.
pub fn build_models(models: &[ModelToml]) -> Result<Vec<(String, TransferFunction)>> {
    if models.is_empty() {
        bail!("no models configured: add at least one [[model]] entry");
    }
    let mut seen = BTreeSet::new();
    models
        .iter()
        .map(|m| {
            let name = m.name.trim();
            if name.is_empty() || name.contains(['/', '\\']) {
                bail!("invalid model name {:?}", m.name);
            }
            if !seen.insert(name.to_string()) {
                bail!("duplicate model name {name:?}");
            }
            let tf = build_transfer_function(&m.kernel)
                .with_context(|| format!("invalid kernel for model {name:?}"))?;
            Ok((name.to_string(), tf))
        })
        .collect()
}
