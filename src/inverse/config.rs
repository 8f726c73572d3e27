use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Solver configuration for the LMTD inversion.
///
/// The search variable is `ln(Δt_unknown / Δt_known)`, so its tolerances are
/// relative to the known terminal difference.
#[derive(Debug, Clone, Copy)]
pub struct InversionConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the log-ratio search variable.
    pub log_ratio_abs_tol: f64,

    /// Relative tolerance on the log-ratio search variable.
    pub log_ratio_rel_tol: f64,

    /// Absolute tolerance for the LMTD residual (achieved - target).
    pub lmtd_tol: TemperatureInterval,

    /// Relative tolerance on the LMTD recomputed from the completed
    /// temperature set.
    ///
    /// The check passes within `max(lmtd_tol, lmtd_rel_tol * |lmtd|)`.
    pub lmtd_rel_tol: f64,
}

impl Default for InversionConfig {
    fn default() -> Self {
        Self {
            max_iters: 200,
            log_ratio_abs_tol: 1e-12,
            log_ratio_rel_tol: 1e-14,
            lmtd_tol: TemperatureInterval::new::<delta_kelvin>(1e-10),
            lmtd_rel_tol: 1e-6,
        }
    }
}

impl InversionConfig {
    /// Whether a recomputed LMTD is close enough to the target.
    pub(super) fn accepts(
        &self,
        target: TemperatureInterval,
        achieved: TemperatureInterval,
    ) -> bool {
        let target = target.get::<delta_kelvin>();
        let allowed = self
            .lmtd_tol
            .get::<delta_kelvin>()
            .max(self.lmtd_rel_tol * target.abs());
        (achieved.get::<delta_kelvin>() - target).abs() <= allowed
    }

    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.log_ratio_abs_tol,
            x_rel_tol: self.log_ratio_rel_tol,
            residual_tol: self.lmtd_tol.get::<delta_kelvin>(),
        }
    }
}
