use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the endpoints 0 and 1 for [`UnitInterval`].
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker for values in the closed unit interval `0 ≤ x ≤ 1`.
///
/// Effectiveness and the capacity ratio `C_min / C_max` both live here.
///
/// ```
/// use hx_rating::support::constraint::{ConstraintError, UnitInterval};
///
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert_eq!(UnitInterval::new(1.01).unwrap_err(), ConstraintError::AboveMaximum);
/// assert_eq!(UnitInterval::new(-0.01).unwrap_err(), ConstraintError::BelowMinimum);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a [`Constrained<T, UnitInterval>`] if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::ratio::percent;

    #[test]
    fn effectiveness_bounds() {
        let eff = UnitInterval::new(Ratio::new::<percent>(85.0)).unwrap();
        assert!((eff.into_inner().get::<ratio>() - 0.85).abs() < 1e-15);

        assert!(UnitInterval::new(Ratio::new::<ratio>(0.0)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<ratio>(1.0)).is_ok());
        assert_eq!(
            UnitInterval::new(Ratio::new::<ratio>(1.000_001)),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitInterval::new(Ratio::new::<ratio>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }
}
