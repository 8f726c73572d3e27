use uom::si::{
    f64::{Power, TemperatureInterval, ThermalConductance},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::{
    InvalidInput,
    support::{
        constraint::{Constrained, ConstraintError, NonNegative, NonZero},
        hx::{Arrangement, Port, StreamTemperatures, Terminal},
        units::TemperatureDifference,
    },
};

/// Log-mean temperature difference for a parallel or counter flow exchanger.
///
/// With terminal differences `Δt₁` and `Δt₂` (see
/// [`Arrangement::terminals`]), the result is `(Δt₁ − Δt₂) / ln(Δt₁ / Δt₂)`,
/// or the common value when `Δt₁ == Δt₂`.
///
/// # Errors
///
/// - [`InvalidInput::NonPhysicalTemperatures`] if the hot stream warms or the
///   cold stream cools.
/// - [`InvalidInput::ZeroTemperatureDifference`] if either terminal difference
///   is zero.
/// - [`InvalidInput::TemperatureCross`] if the terminal differences have
///   opposite signs.
/// - [`InvalidInput::UnsupportedArrangement`] for shell-and-tube.
pub fn log_mean_temp_diff(
    arrangement: Arrangement,
    temps: &StreamTemperatures,
) -> Result<TemperatureInterval, InvalidInput> {
    temps.check_direction()?;

    let [first, second] = arrangement.terminals()?;
    let first = terminal_difference(first, temps)?.into_inner();
    let second = terminal_difference(second, temps)?.into_inner();

    let (a, b) = (first.get::<delta_kelvin>(), second.get::<delta_kelvin>());
    if a.signum() != b.signum() {
        return Err(InvalidInput::TemperatureCross { first, second });
    }

    Ok(TemperatureInterval::new::<delta_kelvin>(log_mean_kelvin(a, b)))
}

/// Heat rate `UA · LMTD`.
///
/// # Errors
///
/// - [`InvalidInput::NegativeConductance`] if `ua` is negative.
/// - [`InvalidInput::BelowAbsoluteZero`] if any temperature is below 0 K.
/// - Any error from [`log_mean_temp_diff`].
pub fn heat_rate_lmtd(
    ua: ThermalConductance,
    arrangement: Arrangement,
    temps: &StreamTemperatures,
) -> Result<Power, InvalidInput> {
    let ua = NonNegative::new(ua)
        .map_err(|err| match err {
            ConstraintError::Negative => InvalidInput::NegativeConductance(ua),
            other => other.into(),
        })?
        .into_inner();

    if let Some(port) = Port::ALL
        .into_iter()
        .find(|port| temps.get(*port).is_below_absolute_zero())
    {
        return Err(InvalidInput::BelowAbsoluteZero(temps.get(port)));
    }

    Ok(ua * log_mean_temp_diff(arrangement, temps)?)
}

/// Heat rates for an ordered sequence of conductances sharing one set of
/// temperatures.
///
/// Each conductance is validated on its own; the first failure is returned.
///
/// # Errors
///
/// Any error from [`heat_rate_lmtd`].
pub fn heat_rates_lmtd(
    uas: impl IntoIterator<Item = ThermalConductance>,
    arrangement: Arrangement,
    temps: &StreamTemperatures,
) -> Result<Vec<Power>, InvalidInput> {
    uas.into_iter()
        .map(|ua| heat_rate_lmtd(ua, arrangement, temps))
        .collect()
}

/// Signed difference `T(hot) − T(cold)` at one terminal.
pub(crate) fn terminal_difference(
    terminal: Terminal,
    temps: &StreamTemperatures,
) -> Result<Constrained<TemperatureInterval, NonZero>, InvalidInput> {
    let dt = temps.get(terminal.hot).minus(temps.get(terminal.cold));
    NonZero::new(dt).map_err(|err| match err {
        ConstraintError::Zero => InvalidInput::ZeroTemperatureDifference {
            hot: terminal.hot,
            cold: terminal.cold,
        },
        other => other.into(),
    })
}

/// Log mean of two same-signed, non-zero differences in kelvin.
pub(crate) fn log_mean_kelvin(a: f64, b: f64) -> f64 {
    if a == b {
        return a;
    }
    (a - b) / (a / b).ln()
}
