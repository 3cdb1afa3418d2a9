//! Spectrum command: ensemble spectrum diagnostics for one combination.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, info_span};

use ramsey_ensemble::evaluate_ensemble;
use ramsey_signal::PhysicalParams;
use ramsey_stats::{argmax, column_mean_std};

use crate::cli::SpectrumArgs;
use crate::config::RamseyConfig;
use crate::convert;

/// Per-bin ensemble spectrum for a single parameter combination.
#[derive(Debug, Serialize)]
struct SpectrumOutput {
    spin_size: u32,
    squeezing: f64,
    alpha: f64,
    beta: f64,
    n_draws: usize,
    freqs: Vec<f64>,
    mean: Vec<f64>,
    std: Vec<f64>,
}

/// Run the single-combination spectrum diagnostic.
pub fn run(args: SpectrumArgs) -> Result<()> {
    let _cmd = info_span!("spectrum").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: RamseyConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Build configs and the seeded RNG
    let seed = convert::resolve_seed(args.seed, config.seed);
    let spectrum_cfg = convert::build_spectrum_config(&config.signal);
    let noise_cfg = convert::build_noise_config(&config.noise);
    let mut rng = StdRng::seed_from_u64(seed);

    let params = PhysicalParams::new(args.spin_size, args.squeezing, args.alpha, args.beta);
    info!(
        spin_size = params.spin_size,
        squeezing = params.squeezing,
        alpha = params.alpha,
        beta = params.beta,
        seed,
        "computing ensemble spectrum"
    );

    // 3. Evaluate the noise ensemble and aggregate per bin
    let ensemble = evaluate_ensemble(
        &params,
        config.signal.base_omega,
        &spectrum_cfg,
        &noise_cfg,
        &mut rng,
    )
    .context("ensemble evaluation failed")?;
    let (mean, std) = column_mean_std(ensemble.draws());

    // 4. Report the mean-spectrum peak on the console
    if let Some(peak_bin) = argmax(&mean) {
        println!(
            "Mean-spectrum peak: bin {} of {}, frequency {:.6} (base {:.6})",
            peak_bin,
            mean.len(),
            ensemble.freqs()[peak_bin],
            config.signal.base_omega
        );
    }

    // 5. Write the spectrum JSON
    let output = args.output.unwrap_or_else(|| "spectrum.json".into());
    let spectrum = SpectrumOutput {
        spin_size: params.spin_size,
        squeezing: params.squeezing,
        alpha: params.alpha,
        beta: params.beta,
        n_draws: ensemble.n_draws(),
        freqs: ensemble.freqs().to_vec(),
        mean,
        std,
    };
    let json = serde_json::to_string_pretty(&spectrum).context("failed to serialise spectrum")?;
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write spectrum: {}", output.display()))?;
    info!(path = %output.display(), "spectrum written");

    Ok(())
}
