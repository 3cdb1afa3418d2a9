//! Pure conversion functions: TOML config structs -> crate API config types.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ramsey_ensemble::NoiseConfig;
use ramsey_signal::SpectrumConfig;
use ramsey_sweep::{linspace, GridConfig, SweepConfig};

use crate::config::{GridToml, NoiseToml, SignalToml};

/// Builds a [`SpectrumConfig`] from the TOML signal configuration.
///
/// The estimated frequency used to size the sampling window is the
/// configured base frequency.
pub fn build_spectrum_config(signal: &SignalToml) -> SpectrumConfig {
    SpectrumConfig::new(signal.base_omega)
        .with_n_periods(signal.n_periods)
        .with_sample_count(signal.sample_count)
        .with_pad_len(signal.pad_len)
}

/// Builds a [`NoiseConfig`] from the TOML noise configuration.
pub fn build_noise_config(noise: &NoiseToml) -> NoiseConfig {
    NoiseConfig::new()
        .with_sigma_frac(noise.sigma_frac)
        .with_n_draws(noise.n_draws)
}

/// Builds a [`GridConfig`] from the TOML grid configuration.
///
/// Angle axes are materialised as inclusive linspaces over the configured
/// bounds.
pub fn build_grid_config(grid: &GridToml) -> GridConfig {
    GridConfig::new(
        grid.spin_sizes.clone(),
        grid.squeezings.clone(),
        linspace(grid.alpha_min, grid.alpha_max, grid.n_alpha),
        linspace(grid.beta_min, grid.beta_max, grid.n_beta),
    )
}

/// Builds a [`SweepConfig`] from the TOML configuration and a resolved seed.
pub fn build_sweep_config(signal: &SignalToml, noise: &NoiseToml, seed: u64) -> SweepConfig {
    SweepConfig::new(signal.base_omega)
        .with_spectrum(build_spectrum_config(signal))
        .with_noise(build_noise_config(noise))
        .with_seed(seed)
}

/// Resolves the global RNG seed: CLI override, then config file, then a
/// fresh OS-entropy seed.
pub fn resolve_seed(cli_seed: Option<u64>, config_seed: Option<u64>) -> u64 {
    cli_seed
        .or(config_seed)
        .unwrap_or_else(|| StdRng::from_os_rng().random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RamseyConfig;

    #[test]
    fn default_toml_builds_valid_configs() {
        let config: RamseyConfig = toml::from_str("").unwrap();
        let grid = build_grid_config(&config.grid);
        assert!(grid.validate().is_ok());
        assert_eq!(grid.n_combinations(), 3 * 5 * 8 * 8);

        let sweep = build_sweep_config(&config.signal, &config.noise, 7);
        assert!(sweep.validate().is_ok());
        assert_eq!(sweep.seed(), 7);
    }

    #[test]
    fn seed_resolution_precedence() {
        assert_eq!(resolve_seed(Some(1), Some(2)), 1);
        assert_eq!(resolve_seed(None, Some(2)), 2);
        // With neither source set the seed comes from OS entropy.
        let _ = resolve_seed(None, None);
    }
}
