//! Noiseless expectation-value signal for a squeezed collective spin.

/// Physical parameters identifying one point of the sweep grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParams {
    /// Collective spin size J.
    pub spin_size: u32,
    /// Squeezing strength chi, in `[0, pi/2)`.
    pub squeezing: f64,
    /// First phase angle, in `[0, 2*pi]`.
    pub alpha: f64,
    /// Second phase angle, in `[0, pi]`.
    pub beta: f64,
}

impl PhysicalParams {
    /// Creates a parameter tuple.
    pub fn new(spin_size: u32, squeezing: f64, alpha: f64, beta: f64) -> Self {
        Self {
            spin_size,
            squeezing,
            alpha,
            beta,
        }
    }
}

/// Time-domain expectation value of the transverse spin component:
///
/// `J * sin(beta) * cos(chi)^(2J-1) * cos(alpha - omega*t)`
///
/// The squeezing contrast `cos(chi)^(2J-1)` is evaluated with `powi`, which
/// underflows gracefully to 0 for large spin sizes. An underflowed contrast
/// is a legitimate zero contribution, not an error.
pub fn expectation(params: &PhysicalParams, omega: f64, t: f64) -> f64 {
    let j = params.spin_size as f64;
    let exponent = 2 * params.spin_size as i32 - 1;
    let contrast = params.squeezing.cos().powi(exponent);
    j * params.beta.sin() * contrast * (params.alpha - omega * t).cos()
}
