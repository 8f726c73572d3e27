use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are not zero (either sign is allowed).
///
/// A terminal temperature difference may be negative when both ends are
/// reversed, but a zero difference puts the logarithm in the LMTD at a
/// singularity.
///
/// ```
/// use hx_rating::support::constraint::NonZero;
///
/// assert!(NonZero::new(-12.5).is_ok());
/// assert!(NonZero::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

    #[test]
    fn terminal_differences() {
        let dt = |value| TemperatureInterval::new::<kelvin>(value);

        assert!(NonZero::new(dt(45.0)).is_ok());
        assert!(NonZero::new(dt(-45.0)).is_ok());
        assert_eq!(NonZero::new(dt(0.0)), Err(ConstraintError::Zero));
        assert_eq!(NonZero::new(dt(f64::NAN)), Err(ConstraintError::NotANumber));
    }
}
