//! Problem formulation for the LMTD inversion.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::{
    rating::log_mean_kelvin,
    support::constraint::{ConstraintError, NonZero},
};

/// Evaluates the forward LMTD for a candidate unknown terminal difference.
///
/// All magnitudes are positive; the sign is restored by the caller.
pub(super) struct LmtdModel {
    known: TemperatureInterval,
}

impl LmtdModel {
    pub(super) fn new(known: TemperatureInterval) -> Self {
        Self { known }
    }
}

impl Model for LmtdModel {
    type Input = TemperatureInterval;
    type Output = TemperatureInterval;
    type Error = ConstraintError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        // A candidate that underflows to zero has no logarithm.
        let candidate = NonZero::new(input.get::<delta_kelvin>())?.into_inner();
        Ok(TemperatureInterval::new::<delta_kelvin>(log_mean_kelvin(
            candidate,
            self.known.get::<delta_kelvin>(),
        )))
    }
}

/// Maps the log-ratio `x = ln(Δt_unknown / Δt_known)` to a candidate and
/// computes the residual `achieved_lmtd - target_lmtd`.
pub(super) struct LmtdProblem {
    known: TemperatureInterval,
    target: TemperatureInterval,
}

impl LmtdProblem {
    pub(super) fn new(known: TemperatureInterval, target: TemperatureInterval) -> Self {
        Self { known, target }
    }
}

impl EquationProblem<1> for LmtdProblem {
    type Input = TemperatureInterval;
    type Output = TemperatureInterval;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(self.known * x[0].exp())
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.get::<delta_kelvin>() - self.target.get::<delta_kelvin>()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn residual_is_zero_at_the_forward_value() {
        let known = TemperatureInterval::new::<delta_kelvin>(55.0);
        let unknown = TemperatureInterval::new::<delta_kelvin>(45.0);
        let model = LmtdModel::new(known);

        let lmtd = model.call(&unknown).unwrap();
        let problem = LmtdProblem::new(known, lmtd);

        let x = [(45.0_f64 / 55.0).ln()];
        let input = problem.input(&x).unwrap();
        let output = model.call(&input).unwrap();

        assert_relative_eq!(input.get::<delta_kelvin>(), 45.0, epsilon = 1e-12);
        assert_relative_eq!(problem.residuals(&input, &output).unwrap()[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn underflowed_candidate_is_an_error() {
        let model = LmtdModel::new(TemperatureInterval::new::<delta_kelvin>(10.0));

        assert_eq!(
            model.call(&TemperatureInterval::new::<delta_kelvin>(0.0)),
            Err(ConstraintError::Zero)
        );
    }
}
