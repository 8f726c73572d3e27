use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

/// Capacitance rate (`m_dot` * `c_p`) of one stream.
///
/// The value must be strictly positive and finite. A stream with zero
/// capacity rate cannot exchange heat.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive or not finite.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = ThermalConductance::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive or not finite.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        let rate = StrictlyPositive::new(quantity)?;
        if !quantity.is_finite() {
            return Err(ConstraintError::NotFinite);
        }
        Ok(Self(rate))
    }

    /// Create a [`CapacitanceRate`] from a mass rate and specific heat
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        CapacitanceRate::from_quantity(mass_rate * specific_heat)
    }

    /// The smaller and larger of two capacitance rates, in that order.
    #[must_use]
    pub fn ordered(first: Self, second: Self) -> [Self; 2] {
        if *first <= *second {
            [first, second]
        } else {
            [second, first]
        }
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
