use log::debug;
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        f64::{Area, HeatTransfer, Power, TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
    },
};

use crate::{
    InvalidInput,
    rating::{log_mean_temp_diff, terminal_difference},
    support::{
        constraint::StrictlyPositive,
        hx::{Arrangement, Port, StreamTemperatures},
    },
};

use super::{
    InversionConfig,
    problem::{LmtdModel, LmtdProblem},
};

/// `exp` underflows to zero below this log-ratio.
const MIN_LOG_RATIO: f64 = -750.0;

/// LMTD that carries heat rate `q` through conductance `U · A`.
///
/// # Errors
///
/// Returns [`InvalidInput::Constraint`] if `u` or `area` is not strictly
/// positive.
pub fn lmtd_from_heat_rate(
    q: Power,
    u: HeatTransfer,
    area: Area,
) -> Result<TemperatureInterval, InvalidInput> {
    let u = StrictlyPositive::new(u)?.into_inner();
    let area = StrictlyPositive::new(area)?.into_inner();
    Ok(q / (u * area))
}

/// Temperature at `target` that gives the exchanger the requested LMTD.
///
/// The three other temperatures are read from `temps`; the value stored at
/// `target` is ignored. The terminal not containing `target` fixes the known
/// difference `Δt_b`, and the unknown difference `Δt_a` is the single root of
/// `(Δt_a − Δt_b) / ln(Δt_a / Δt_b) = lmtd` with the same sign as `Δt_b`.
///
/// # Errors
///
/// - [`InvalidInput::UnsupportedArrangement`] for shell-and-tube.
/// - [`InvalidInput::ZeroTemperatureDifference`] if the known difference is zero.
/// - [`InvalidInput::NoPositiveRoot`] if `lmtd` is zero or its sign differs
///   from the known difference.
/// - [`InvalidInput::NotConverged`] or [`InvalidInput::Bisection`] if the
///   solver fails.
/// - [`InvalidInput::NonPhysicalTemperatures`] if the completed temperature
///   set fails the direction check.
/// - [`InvalidInput::InexactRoot`] if the completed temperature set does not
///   reproduce `lmtd` within the configured tolerances.
pub fn temp_from_lmtd(
    lmtd: TemperatureInterval,
    arrangement: Arrangement,
    temps: &StreamTemperatures,
    target: Port,
    config: &InversionConfig,
) -> Result<ThermodynamicTemperature, InvalidInput> {
    let [first, second] = arrangement.terminals()?;
    let (unknown, known) = if first.contains(target) {
        (first, second)
    } else {
        (second, first)
    };

    let known_dt = terminal_difference(known, temps)?.into_inner();

    let (target_k, known_k) = (lmtd.get::<delta_kelvin>(), known_dt.get::<delta_kelvin>());
    if target_k == 0.0 || target_k.signum() != known_k.signum() {
        return Err(InvalidInput::NoPositiveRoot {
            lmtd,
            known: known_dt,
        });
    }

    let magnitude = solve_unknown_difference(
        TemperatureInterval::new::<delta_kelvin>(target_k.abs()),
        TemperatureInterval::new::<delta_kelvin>(known_k.abs()),
        config,
    )?;
    let unknown_dt = magnitude * known_k.signum();

    let partner = temps.get(unknown.partner(target));
    let solved = if target.is_hot() {
        partner + unknown_dt
    } else {
        partner - unknown_dt
    };

    let achieved = match log_mean_temp_diff(arrangement, &temps.with(target, solved)) {
        Ok(achieved) => achieved,
        Err(InvalidInput::ZeroTemperatureDifference { .. }) => TemperatureInterval::ZERO,
        Err(err) => return Err(err),
    };
    if !config.accepts(lmtd, achieved) {
        return Err(InvalidInput::InexactRoot { lmtd, achieved });
    }

    Ok(solved)
}

/// Positive root `Δt_a` of `LMTD(Δt_a, known) = target` for positive inputs.
fn solve_unknown_difference(
    target: TemperatureInterval,
    known: TemperatureInterval,
    config: &InversionConfig,
) -> Result<TemperatureInterval, InvalidInput> {
    let r = target.get::<delta_kelvin>() / known.get::<delta_kelvin>();
    if r == 1.0 {
        return Ok(known);
    }

    // Brackets on x = ln(Δt_a / Δt_b). For r > 1 the LMTD lies between the
    // geometric mean and the larger difference. For r < 1 it is bounded by
    // Δt_b / ln(Δt_b / Δt_a), about half the target at x = -2/r.
    let bracket = if r > 1.0 {
        [r.ln(), 2.0 * r.ln()]
    } else {
        [(-2.0 / r).max(MIN_LOG_RATIO), r.ln()]
    };

    let model = LmtdModel::new(known);
    let problem = LmtdProblem::new(known, target);

    let solution = bisection::solve(
        &model,
        &problem,
        bracket,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A candidate that underflows to zero sits below every root.
            if event.result().is_err() {
                return Some(bisection::Action::assume_negative());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(InvalidInput::NotConverged {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    debug!(
        "LMTD inversion converged in {} iterations (residual {:e} K)",
        solution.iters, solution.residual
    );

    Ok(known * solution.x.exp())
}
