use std::f64::consts::{PI, TAU};
use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Ramsey configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RamseyConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Signal model and spectral estimation settings.
    #[serde(default)]
    pub signal: SignalToml,

    /// Frequency jitter ensemble settings.
    #[serde(default)]
    pub noise: NoiseToml,

    /// Parameter grid settings.
    #[serde(default)]
    pub grid: GridToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalToml {
    /// True atomic transition frequency (rad per unit time).
    #[serde(default = "default_base_omega")]
    pub base_omega: f64,
    /// Signal periods spanned by the sampling record.
    #[serde(default = "default_n_periods")]
    pub n_periods: f64,
    /// Number of time-domain samples.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Zero-padded FFT length (even, >= sample_count).
    #[serde(default = "default_pad_len")]
    pub pad_len: usize,
}

impl Default for SignalToml {
    fn default() -> Self {
        Self {
            base_omega: default_base_omega(),
            n_periods: default_n_periods(),
            sample_count: default_sample_count(),
            pad_len: default_pad_len(),
        }
    }
}

fn default_base_omega() -> f64 {
    1.0
}
fn default_n_periods() -> f64 {
    4.0
}
fn default_sample_count() -> usize {
    512
}
fn default_pad_len() -> usize {
    8192
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoiseToml {
    /// Jitter standard deviation as a fraction of the base frequency.
    #[serde(default = "default_sigma_frac")]
    pub sigma_frac: f64,
    /// Number of noisy spectrum draws per combination.
    #[serde(default = "default_n_draws")]
    pub n_draws: usize,
}

impl Default for NoiseToml {
    fn default() -> Self {
        Self {
            sigma_frac: default_sigma_frac(),
            n_draws: default_n_draws(),
        }
    }
}

fn default_sigma_frac() -> f64 {
    0.03
}
fn default_n_draws() -> usize {
    1000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridToml {
    /// Collective spin sizes J to sweep.
    #[serde(default = "default_spin_sizes")]
    pub spin_sizes: Vec<u32>,
    /// Squeezing strengths chi to sweep; 0 is the unsqueezed baseline.
    #[serde(default = "default_squeezings")]
    pub squeezings: Vec<f64>,
    /// Lower bound of the alpha axis (radians).
    #[serde(default)]
    pub alpha_min: f64,
    /// Upper bound of the alpha axis (radians).
    #[serde(default = "default_alpha_max")]
    pub alpha_max: f64,
    /// Number of evenly spaced alpha values.
    #[serde(default = "default_n_angles")]
    pub n_alpha: usize,
    /// Lower bound of the beta axis (radians).
    #[serde(default)]
    pub beta_min: f64,
    /// Upper bound of the beta axis (radians).
    #[serde(default = "default_beta_max")]
    pub beta_max: f64,
    /// Number of evenly spaced beta values.
    #[serde(default = "default_n_angles")]
    pub n_beta: usize,
}

impl Default for GridToml {
    fn default() -> Self {
        Self {
            spin_sizes: default_spin_sizes(),
            squeezings: default_squeezings(),
            alpha_min: 0.0,
            alpha_max: default_alpha_max(),
            n_alpha: default_n_angles(),
            beta_min: 0.0,
            beta_max: default_beta_max(),
            n_beta: default_n_angles(),
        }
    }
}

fn default_spin_sizes() -> Vec<u32> {
    vec![10, 100, 1000]
}
fn default_squeezings() -> Vec<f64> {
    vec![0.0, 0.1, 0.2, 0.3, 0.3999]
}
fn default_alpha_max() -> f64 {
    TAU
}
fn default_beta_max() -> f64 {
    PI
}
fn default_n_angles() -> usize {
    8
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Path for the selection report JSON.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("pareto.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: RamseyConfig = toml::from_str("").unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.signal.sample_count, 512);
        assert_eq!(config.signal.pad_len, 8192);
        assert_eq!(config.noise.n_draws, 1000);
        assert_eq!(config.grid.spin_sizes, vec![10, 100, 1000]);
        assert_eq!(config.grid.n_alpha, 8);
        assert_eq!(config.output.path, PathBuf::from("pareto.json"));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let toml_str = r#"
            seed = 42

            [noise]
            sigma_frac = 0.05
        "#;
        let config: RamseyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.noise.sigma_frac, 0.05);
        assert_eq!(config.noise.n_draws, 1000);
        assert_eq!(config.signal.base_omega, 1.0);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml_str = r#"
            [signal]
            base_omega = 2.0
            frequency = 1.0
        "#;
        assert!(toml::from_str::<RamseyConfig>(toml_str).is_err());
    }

    #[test]
    fn full_grid_section_parses() {
        let toml_str = r#"
            [grid]
            spin_sizes = [5, 50]
            squeezings = [0.0, 0.25]
            alpha_min = 0.0
            alpha_max = 3.14
            n_alpha = 4
            beta_min = 0.5
            beta_max = 2.5
            n_beta = 3
        "#;
        let config: RamseyConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.grid.spin_sizes, vec![5, 50]);
        assert_eq!(config.grid.n_beta, 3);
        assert_eq!(config.grid.beta_min, 0.5);
    }
}
