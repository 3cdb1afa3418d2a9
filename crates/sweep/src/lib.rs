//! Parallel parameter-grid evaluation for the squeezing metrology sweep.
//!
//! One combination of (spin size, squeezing, alpha, beta) is evaluated by
//! the pipeline:
//!
//! ```text
//! process_combination()
//!   ├─ evaluate_ensemble()     (ramsey-ensemble)  noisy spectra
//!   ├─ column_mean_std()       (ramsey-stats)     per-bin aggregation
//!   ├─ CubicSpline / refine_peak()  (spline.rs, peak.rs)  sub-bin peak
//!   └─ SNR + relative frequency error -> ResultRecord
//! ```
//!
//! [`evaluate_grid`] maps this over the Cartesian product of the four
//! parameter axes with rayon, derives a reproducible RNG stream per cell,
//! and collects successes and failures separately: a pathological
//! combination is logged and dropped, never fatal to the sweep.

pub mod config;
pub mod error;
pub mod grid;
pub mod processor;
pub mod record;

pub(crate) mod peak;
pub(crate) mod spline;

pub use config::{linspace, GridConfig, SweepConfig};
pub use error::SweepError;
pub use grid::evaluate_grid;
pub use processor::process_combination;
pub use record::{FailedCombination, ResultRecord, SweepResult};
