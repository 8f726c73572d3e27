use uom::si::{
    f64::{MassRate, Power, Ratio, SpecificHeatCapacity, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::{
    InvalidInput,
    support::{
        constraint::NonNegative,
        hx::{Arrangement, CapacitanceRate, Effectiveness, EffectivenessRelation, Ntu},
        units::TemperatureDifference,
    },
};

fn capacity_rates(
    mass_rate_hot: MassRate,
    specific_heat_hot: SpecificHeatCapacity,
    mass_rate_cold: MassRate,
    specific_heat_cold: SpecificHeatCapacity,
) -> Result<[CapacitanceRate; 2], InvalidInput> {
    let hot = CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate_hot, specific_heat_hot)?;
    let cold =
        CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate_cold, specific_heat_cold)?;
    Ok(CapacitanceRate::ordered(hot, cold))
}

/// The smaller of the hot and cold capacity rates `ṁ · c_p`.
///
/// # Errors
///
/// Returns [`InvalidInput::Constraint`] if either product is not strictly
/// positive.
pub fn capacity_rate_min(
    mass_rate_hot: MassRate,
    specific_heat_hot: SpecificHeatCapacity,
    mass_rate_cold: MassRate,
    specific_heat_cold: SpecificHeatCapacity,
) -> Result<CapacitanceRate, InvalidInput> {
    let [c_min, _] = capacity_rates(
        mass_rate_hot,
        specific_heat_hot,
        mass_rate_cold,
        specific_heat_cold,
    )?;
    Ok(c_min)
}

/// The larger of the hot and cold capacity rates `ṁ · c_p`.
///
/// # Errors
///
/// Returns [`InvalidInput::Constraint`] if either product is not strictly
/// positive.
pub fn capacity_rate_max(
    mass_rate_hot: MassRate,
    specific_heat_hot: SpecificHeatCapacity,
    mass_rate_cold: MassRate,
    specific_heat_cold: SpecificHeatCapacity,
) -> Result<CapacitanceRate, InvalidInput> {
    let [_, c_max] = capacity_rates(
        mass_rate_hot,
        specific_heat_hot,
        mass_rate_cold,
        specific_heat_cold,
    )?;
    Ok(c_max)
}

/// Largest heat rate the inlets allow, `C_min · (T_hot_in − T_cold_in)`.
#[must_use]
pub fn ntu_max_heat_rate(
    c_min: CapacitanceRate,
    hot_in: ThermodynamicTemperature,
    cold_in: ThermodynamicTemperature,
) -> Power {
    *c_min * hot_in.minus(cold_in)
}

/// Effectiveness of `arrangement` at the given NTU and capacity rates.
///
/// # Errors
///
/// Returns [`InvalidInput::CapacityRatioAboveOne`] if `c_min` exceeds `c_max`.
pub fn ntu_effectiveness(
    ntu: Ntu,
    c_min: CapacitanceRate,
    c_max: CapacitanceRate,
    arrangement: Arrangement,
) -> Result<Effectiveness, InvalidInput> {
    if *c_min > *c_max {
        return Err(InvalidInput::CapacityRatioAboveOne);
    }
    Ok(arrangement.effectiveness(ntu, [c_min, c_max])?)
}

/// Heat rate `ε · C_min · (T_hot_in − T_cold_in)`.
///
/// The factor `effectiveness` is only required to be non-negative so that
/// scaled forms of the relation can be evaluated too.
///
/// # Errors
///
/// Returns [`InvalidInput::Constraint`] if `effectiveness` is negative.
pub fn ntu_heat_rate(
    effectiveness: Ratio,
    c_min: CapacitanceRate,
    hot_in: ThermodynamicTemperature,
    cold_in: ThermodynamicTemperature,
) -> Result<Power, InvalidInput> {
    let effectiveness = NonNegative::new(effectiveness)?.into_inner();
    Ok(ntu_max_heat_rate(c_min, hot_in, cold_in) * effectiveness.get::<ratio>())
}
