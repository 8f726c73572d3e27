use std::ops::Deref;

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, NonNegative, UnitInterval,
};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::{CapacitanceRate, CapacityRatio};

/// Effectiveness as a function of NTU for one flow arrangement.
pub trait EffectivenessRelation {
    /// Calculate the effectiveness given the [NTU](Ntu) and the two stream
    /// [capacitance rates](CapacitanceRate), in either order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the correlation does not yield a value in [0, 1].
    fn effectiveness(
        &self,
        ntu: Ntu,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Effectiveness>;
}

/// NTU as a function of effectiveness, the inverse of [`EffectivenessRelation`].
pub trait NtuRelation {
    /// Calculate the [NTU](Ntu) given the [effectiveness](Effectiveness) and
    /// the two stream [capacitance rates](CapacitanceRate), in either order.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::AboveMaximum`] if the effectiveness is at or
    /// beyond what the arrangement reaches as NTU grows without bound.
    fn ntu(
        &self,
        effectiveness: Effectiveness,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Ntu>;
}

/// Heat exchanger effectiveness, `q / q_max`.
///
/// Must be in the interval [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Number of transfer units, `UA / C_min`.
///
/// The dimensionless thermal size of an exchanger. Must be finite and >= 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative or not finite.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative or not finite.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        let ntu = NonNegative::new(quantity)?;
        if !quantity.is_finite() {
            return Err(ConstraintError::NotFinite);
        }
        Ok(Self(ntu))
    }

    /// Create an [`Ntu`] from an overall conductance and the minimum
    /// capacitance rate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `ua` is negative.
    pub fn from_conductance(ua: ThermalConductance, c_min: CapacitanceRate) -> ConstraintResult<Self> {
        Self::from_quantity(ua / *c_min)
    }

    /// The overall conductance this NTU corresponds to, `NTU · C_min`.
    #[must_use]
    pub fn conductance(self, c_min: CapacitanceRate) -> ThermalConductance {
        *c_min * self.get::<ratio>()
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Evaluates a raw `(ntu, cr) -> effectiveness` correlation.
///
/// With `cr == 0` every arrangement reduces to `1 - exp(-ntu)`, so that case is
/// handled here and `fn_raw` only ever sees `0 < cr <= 1`.
#[inline]
pub(crate) fn effectiveness_via(
    ntu: Ntu,
    capacitance_rates: [CapacitanceRate; 2],
    fn_raw: impl Fn(f64, f64) -> f64,
) -> ConstraintResult<Effectiveness> {
    let cr = CapacityRatio::from_capacitance_rates(capacitance_rates)?.get::<ratio>();
    let ntu = ntu.get::<ratio>();
    let eff = if cr == 0.0 {
        1. - (-ntu).exp()
    } else {
        fn_raw(ntu, cr)
    };
    Effectiveness::new(eff)
}

/// Evaluates a raw `(effectiveness, cr) -> ntu` correlation.
///
/// Zero effectiveness is zero NTU for every arrangement. Past the reachable
/// effectiveness the correlations diverge or leave the reals, which is
/// reported as [`ConstraintError::AboveMaximum`].
#[inline]
pub(crate) fn ntu_via(
    effectiveness: Effectiveness,
    capacitance_rates: [CapacitanceRate; 2],
    fn_raw: impl Fn(f64, f64) -> f64,
) -> ConstraintResult<Ntu> {
    let cr = CapacityRatio::from_capacitance_rates(capacitance_rates)?.get::<ratio>();
    let eff = effectiveness.get::<ratio>();
    if eff == 0.0 {
        return Ntu::new(0.);
    }

    let ntu = if cr == 0.0 {
        -(1. - eff).ln()
    } else {
        fn_raw(eff, cr)
    };
    if !ntu.is_finite() {
        return Err(ConstraintError::AboveMaximum);
    }
    Ntu::new(ntu)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::thermal_conductance::watt_per_kelvin;

    use super::*;

    #[test]
    fn ntu_from_conductance() -> ConstraintResult<()> {
        let ua = ThermalConductance::new::<watt_per_kelvin>(10.);
        let c_min = CapacitanceRate::new::<watt_per_kelvin>(2.5)?;

        let ntu = Ntu::from_conductance(ua, c_min)?;

        assert_relative_eq!(ntu.get::<ratio>(), 4.);
        assert_relative_eq!(ntu.conductance(c_min).get::<watt_per_kelvin>(), 10.);
        Ok(())
    }

    #[test]
    fn negative_conductance_is_rejected() -> ConstraintResult<()> {
        let ua = ThermalConductance::new::<watt_per_kelvin>(-1.);
        let c_min = CapacitanceRate::new::<watt_per_kelvin>(1.)?;

        assert!(Ntu::from_conductance(ua, c_min).is_err());
        Ok(())
    }

    #[test]
    fn ntu_must_be_finite() {
        assert_eq!(Ntu::new(f64::INFINITY), Err(ConstraintError::NotFinite));
        assert_eq!(Ntu::new(f64::NAN), Err(ConstraintError::NotANumber));
        assert!(Ntu::new(1e300).is_ok());
    }

    #[test]
    fn zero_effectiveness_needs_no_transfer_units() -> ConstraintResult<()> {
        let rates = [
            CapacitanceRate::new::<watt_per_kelvin>(1.)?,
            CapacitanceRate::new::<watt_per_kelvin>(2.)?,
        ];

        let ntu = ntu_via(Effectiveness::new(0.)?, rates, |_, _| f64::NAN)?;

        assert_eq!(ntu.get::<ratio>(), 0.);
        Ok(())
    }

    #[test]
    fn diverging_correlation_is_above_maximum() -> ConstraintResult<()> {
        let rates = [
            CapacitanceRate::new::<watt_per_kelvin>(1.)?,
            CapacitanceRate::new::<watt_per_kelvin>(1.)?,
        ];
        let eff = Effectiveness::new(0.5)?;

        assert_eq!(
            ntu_via(eff, rates, |_, _| f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            ntu_via(eff, rates, |_, _| f64::NAN),
            Err(ConstraintError::AboveMaximum)
        );
        Ok(())
    }

    #[test]
    fn effectiveness_outside_unit_interval() {
        assert!(Effectiveness::new(1.5).is_err());
        assert!(Effectiveness::new(-0.1).is_err());
        assert!(Effectiveness::new(0.0).is_ok());
    }
}
