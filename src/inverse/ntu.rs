use uom::si::{
    f64::{Power, Ratio, ThermalConductance, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::{
    InvalidInput,
    support::{
        constraint::StrictlyPositive,
        hx::{Arrangement, CapacitanceRate, CapacityRatio, Effectiveness, NtuRelation, Side},
    },
};

/// Inlet temperature on `solve_for` that makes `ε · C_min · (T_hot_in − T_cold_in)`
/// equal `q`, given the other inlet.
///
/// # Errors
///
/// Returns [`InvalidInput::Constraint`] if `effectiveness` is not strictly
/// positive.
pub fn temp_from_ntu_heat_rate(
    q: Power,
    effectiveness: Ratio,
    c_min: CapacitanceRate,
    known_inlet: ThermodynamicTemperature,
    solve_for: Side,
) -> Result<ThermodynamicTemperature, InvalidInput> {
    let effectiveness = StrictlyPositive::new(effectiveness)?.into_inner();
    let inlet_difference = q / *c_min / effectiveness.get::<ratio>();

    Ok(match solve_for {
        Side::Hot => known_inlet + inlet_difference,
        Side::Cold => known_inlet - inlet_difference,
    })
}

/// Conductance `UA = NTU · C_min` needed for `arrangement` to reach
/// `effectiveness`.
///
/// # Errors
///
/// - [`InvalidInput::CapacityRatioAboveOne`] if `c_min` exceeds `c_max`.
/// - [`InvalidInput::UnreachableEffectiveness`] if `effectiveness` is at or
///   above what the arrangement approaches as NTU grows without bound.
pub fn required_conductance(
    arrangement: Arrangement,
    effectiveness: Effectiveness,
    c_min: CapacitanceRate,
    c_max: CapacitanceRate,
) -> Result<ThermalConductance, InvalidInput> {
    let cr = CapacityRatio::from_min_and_max(c_min, c_max)
        .map_err(|_| InvalidInput::CapacityRatioAboveOne)?
        .get::<ratio>();

    let limit = effectiveness_limit(arrangement, cr);
    let unreachable = || InvalidInput::UnreachableEffectiveness {
        effectiveness: *effectiveness,
        limit: Ratio::new::<ratio>(limit),
    };
    if effectiveness.get::<ratio>() >= limit {
        return Err(unreachable());
    }

    let ntu = arrangement
        .ntu(effectiveness, [c_min, c_max])
        .map_err(|_| unreachable())?;
    Ok(ntu.conductance(c_min))
}

/// Effectiveness as NTU tends to infinity.
fn effectiveness_limit(arrangement: Arrangement, cr: f64) -> f64 {
    match arrangement {
        Arrangement::ParallelFlow => 1. / (1. + cr),
        Arrangement::CounterFlow => 1.,
        Arrangement::ShellAndTube => 2. / (1. + cr + (1. + cr.powi(2)).sqrt()),
    }
}
