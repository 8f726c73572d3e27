use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are greater than zero.
///
/// Capacitance rates, convective coefficients, and fin dimensions all divide
/// somewhere downstream, so zero is rejected alongside negative values.
///
/// ```
/// use hx_rating::support::constraint::{ConstraintError, StrictlyPositive};
///
/// assert!(StrictlyPositive::new(0.25).is_ok());
/// assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
/// assert_eq!(StrictlyPositive::new(-3).unwrap_err(), ConstraintError::Negative);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin};

    #[test]
    fn convective_coefficients() {
        let h = |value| HeatTransfer::new::<watt_per_square_meter_kelvin>(value);

        assert!(StrictlyPositive::new(h(150.0)).is_ok());
        assert_eq!(StrictlyPositive::new(h(0.0)), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(h(-10.0)), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(h(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
