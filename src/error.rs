use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Ratio, TemperatureInterval, ThermalConductance, ThermodynamicTemperature};

use crate::support::{constraint::ConstraintError, hx::Port};

/// The single failure kind raised by every rating, inversion, and sweep entry point.
///
/// Each variant names the input that made the computation impossible.
/// Nothing is retried or partially returned.
#[derive(Debug, Error)]
pub enum InvalidInput {
    /// A value violated a sign or range constraint.
    #[error("input out of range: {0}")]
    Constraint(#[from] ConstraintError),

    /// Heat would flow against the temperature gradient of a stream.
    #[error(
        "non-physical exchanger temperatures: hot {hot_in:?} -> {hot_out:?}, cold {cold_in:?} -> {cold_out:?}"
    )]
    NonPhysicalTemperatures {
        hot_in: ThermodynamicTemperature,
        hot_out: ThermodynamicTemperature,
        cold_in: ThermodynamicTemperature,
        cold_out: ThermodynamicTemperature,
    },

    /// A terminal temperature difference is exactly zero.
    #[error("terminal temperature difference between {hot:?} and {cold:?} is zero")]
    ZeroTemperatureDifference { hot: Port, cold: Port },

    /// The two terminal differences have opposite signs.
    #[error("terminal temperature differences cross: {first:?} and {second:?}")]
    TemperatureCross {
        first: TemperatureInterval,
        second: TemperatureInterval,
    },

    /// A temperature fed to a heat-rate formula lies below absolute zero.
    #[error("temperature {0:?} is below absolute zero")]
    BelowAbsoluteZero(ThermodynamicTemperature),

    /// A conductance fed to a heat-rate formula is negative.
    #[error("conductance {0:?} is negative")]
    NegativeConductance(ThermalConductance),

    /// The capacitance rate labelled minimum exceeds the one labelled maximum.
    #[error("capacity ratio c_min / c_max exceeds one")]
    CapacityRatioAboveOne,

    /// No finite conductance reaches the requested effectiveness.
    #[error("effectiveness {effectiveness:?} is not below the arrangement limit {limit:?}")]
    UnreachableEffectiveness { effectiveness: Ratio, limit: Ratio },

    /// A flow arrangement name is not one of the supported arrangements.
    #[error("unknown flow arrangement `{0}`")]
    UnknownArrangement(String),

    /// The arrangement has no log-mean temperature difference form.
    #[error("arrangement `{0}` has no LMTD terminal definition")]
    UnsupportedArrangement(&'static str),

    /// A solve target name is not one of the supported targets.
    #[error("unknown solve target `{0}`")]
    UnknownTarget(String),

    /// The LMTD equation has no root for the supplied target and known difference.
    #[error("no root: target LMTD {lmtd:?} with known terminal difference {known:?}")]
    NoPositiveRoot {
        lmtd: TemperatureInterval,
        known: TemperatureInterval,
    },

    /// A required configuration key is absent.
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),

    /// A design-search axis has no candidate values.
    #[error("candidate list for `{0}` is empty")]
    EmptyCandidates(&'static str),

    /// The bisection solver rejected the bracket or failed to evaluate.
    #[error("bisection solver error: {0}")]
    Bisection(#[from] bisection::Error),

    /// The bisection solver reached its iteration limit.
    #[error("LMTD inversion hit iteration limit: residual={residual:?}")]
    NotConverged {
        /// Best LMTD residual achieved.
        residual: TemperatureInterval,

        /// Iteration count performed by the solver.
        iters: usize,
    },

    /// The solved temperature does not reproduce the target LMTD.
    ///
    /// Happens when the unknown terminal difference is too small to survive
    /// being added to an absolute temperature.
    #[error("solved temperature reproduces LMTD {achieved:?} instead of {lmtd:?}")]
    InexactRoot {
        lmtd: TemperatureInterval,
        achieved: TemperatureInterval,
    },

    /// The configuration document is malformed.
    #[error("malformed configuration")]
    Parse(#[from] serde_yaml::Error),
}
