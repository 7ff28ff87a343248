use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Reads and parses a TRANSEP TOML configuration file.
pub fn load(path: &Path) -> Result<TransepConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Top-level TRANSEP configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransepConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Convolution settings.
    #[serde(default)]
    pub simulation: SimulationToml,

    /// Optional loss filter applied to the input.
    #[serde(default)]
    pub loss: Option<LossToml>,

    /// Models to run, one output file each.
    #[serde(default, rename = "model")]
    pub models: Vec<ModelToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default = "default_na_value")]
    pub na_value: f64,
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default)]
    pub skip_rows: usize,
    #[serde(default = "default_output_delimiter")]
    pub output_delimiter: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub precision: Option<usize>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            input: None,
            output_dir: None,
            delimiter: default_delimiter(),
            column: None,
            na_value: default_na_value(),
            fill: default_fill(),
            skip_rows: 0,
            output_delimiter: default_output_delimiter(),
            unit: None,
            precision: None,
        }
    }
}

fn default_delimiter() -> String {
    "\t".to_string()
}
fn default_na_value() -> f64 {
    -9999.0
}
fn default_fill() -> String {
    "backward_forward".to_string()
}
fn default_output_delimiter() -> String {
    ";".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationToml {
    #[serde(default = "default_dtau")]
    pub dtau: f64,
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub scale_explicit: bool,
    #[serde(default = "default_output_factor")]
    pub output_factor: f64,
}

impl Default for SimulationToml {
    fn default() -> Self {
        Self {
            dtau: default_dtau(),
            engine: default_engine(),
            method: default_method(),
            scale_explicit: false,
            output_factor: default_output_factor(),
        }
    }
}

fn default_dtau() -> f64 {
    1.0
}
fn default_engine() -> String {
    "fast".to_string()
}
fn default_method() -> String {
    "direct".to_string()
}
fn default_output_factor() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LossToml {
    pub b1: f64,
    pub b2: f64,
    #[serde(default)]
    pub b3: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    pub name: String,
    pub kernel: KernelToml,
}

/// Transfer-function parameters, selected by the `family` key.
#[derive(Debug, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case", deny_unknown_fields)]
pub enum KernelToml {
    Dispersion {
        p_d: f64,
        mtt: f64,
    },
    LinearReservoir {
        mtt: f64,
    },
    ParallelLinearReservoir {
        mtt_slow: f64,
        mtt_fast: f64,
        frac_fast: f64,
    },
    ExponentialPiston {
        mtt: f64,
        eta: f64,
    },
    Gamma {
        alpha: f64,
        beta: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[io]
input = "input/d18O_in_mod.csv"
output_dir = "output"
column = "d18O"
unit = "per mille"

[simulation]
dtau = 1.0
engine = "explicit"
output_factor = 0.012515

[loss]
b1 = 0.02
b2 = 10.0

[[model]]
name = "dispersion"
[model.kernel]
family = "dispersion"
p_d = 0.1
mtt = 100.0

[[model]]
name = "plr"
[model.kernel]
family = "parallel_linear_reservoir"
mtt_slow = 100.0
mtt_fast = 10.0
frac_fast = 0.1
"#;

    #[test]
    fn parses_full_config() {
        let cfg: TransepConfig = toml::from_str(FULL).unwrap();
        assert_eq!(cfg.io.input, Some(PathBuf::from("input/d18O_in_mod.csv")));
        assert_eq!(cfg.io.delimiter, "\t");
        assert_eq!(cfg.io.column.as_deref(), Some("d18O"));
        assert_eq!(cfg.simulation.engine, "explicit");
        assert_eq!(cfg.simulation.method, "direct");
        let loss = cfg.loss.unwrap();
        assert_eq!(loss.b3, 0.0);
        assert_eq!(cfg.models.len(), 2);
        assert_eq!(cfg.models[1].name, "plr");
        assert!(matches!(
            cfg.models[1].kernel,
            KernelToml::ParallelLinearReservoir { frac_fast, .. } if frac_fast == 0.1
        ));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: TransepConfig = toml::from_str("").unwrap();
        assert!(cfg.io.input.is_none());
        assert_eq!(cfg.io.na_value, -9999.0);
        assert_eq!(cfg.io.fill, "backward_forward");
        assert_eq!(cfg.io.output_delimiter, ";");
        assert_eq!(cfg.simulation.dtau, 1.0);
        assert_eq!(cfg.simulation.output_factor, 1.0);
        assert!(!cfg.simulation.scale_explicit);
        assert!(cfg.loss.is_none());
        assert!(cfg.models.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<TransepConfig>("[simulation]\nsteps = 3\n").is_err());
    }

    #[test]
    fn rejects_unknown_family() {
        let text = "[[model]]\nname = \"x\"\n[model.kernel]\nfamily = \"weibull\"\nk = 1.0\n";
        assert!(toml::from_str::<TransepConfig>(text).is_err());
    }

    #[test]
    fn rejects_missing_kernel_parameter() {
        let text = "[[model]]\nname = \"x\"\n[model.kernel]\nfamily = \"gamma\"\nalpha = 1.0\n";
        assert!(toml::from_str::<TransepConfig>(text).is_err());
    }
}
