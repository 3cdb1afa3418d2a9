//! Sweep command: evaluate the parameter grid and select dominant points.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ramsey_pareto::select_pareto;
use ramsey_sweep::evaluate_grid;

use crate::cli::SweepArgs;
use crate::config::RamseyConfig;
use crate::convert;
use crate::report::{ConfigSummary, GridSummary, SelectionSummary, SweepReport};

/// Run the full sweep pipeline.
pub fn run(args: SweepArgs) -> Result<()> {
    let _cmd = info_span!("sweep").entered();

    // 1. Load project TOML
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: RamseyConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    // 2. Build configs from TOML
    let seed = convert::resolve_seed(args.seed, config.seed);
    let grid = convert::build_grid_config(&config.grid);
    let sweep_cfg = convert::build_sweep_config(&config.signal, &config.noise, seed);

    info!(
        seed,
        n_combinations = grid.n_combinations(),
        n_draws = config.noise.n_draws,
        "starting sweep"
    );

    // 3. Evaluate the grid
    let result = evaluate_grid(&grid, &sweep_cfg).context("grid evaluation failed")?;

    // 4. Baseline-dominance selection
    let selected = select_pareto(result.records());

    // 5. Assemble and write the report
    let report = SweepReport {
        config: ConfigSummary {
            base_omega: config.signal.base_omega,
            sample_count: config.signal.sample_count,
            pad_len: config.signal.pad_len,
            sigma_frac: config.noise.sigma_frac,
            n_draws: config.noise.n_draws,
            seed,
        },
        grid: GridSummary {
            n_combinations: grid.n_combinations(),
            n_evaluated: result.n_records(),
            n_failed: result.n_failed(),
            n_selected: selected.len(),
        },
        summary: SelectionSummary::from_records(&selected),
        selected,
    };

    if report.should_export() {
        let output = args.output.unwrap_or_else(|| config.output.path.clone());
        let json = serde_json::to_string_pretty(&report).context("failed to serialise report")?;
        std::fs::write(&output, json)
            .with_context(|| format!("failed to write report: {}", output.display()))?;
        info!(path = %output.display(), "report written");
    } else {
        info!("empty selection, no report file written");
    }

    crate::report::print_summary(&report);

    Ok(())
}
