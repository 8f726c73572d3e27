//! Type-level numeric constraints.
//!
//! Exchanger inputs carry sign and range requirements: capacitance rates must
//! be strictly positive, NTU must be non-negative, effectiveness lives in
//! `[0, 1]`, and a terminal temperature difference must not vanish. Wrapping a
//! value in [`Constrained<T, C>`] checks the requirement once, at
//! construction, so downstream formulas can rely on it without re-checking.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`NonZero`]: Not equal to zero
//! - [`UnitInterval`]: Closed unit interval `0 ≤ x ≤ 1`
//!
//! Each marker works with any `T: PartialOrd + Zero` (or [`UnitBounds`] for
//! the unit interval), which covers `f64` and every `uom` quantity.
//!
//! # Example
//!
//! ```
//! use hx_rating::support::constraint::{ConstraintError, StrictlyPositive};
//! use uom::si::{f64::ThermalConductance, thermal_conductance::watt_per_kelvin};
//!
//! let ua = StrictlyPositive::new(ThermalConductance::new::<watt_per_kelvin>(250.0)).unwrap();
//! assert_eq!(ua.into_inner().get::<watt_per_kelvin>(), 250.0);
//!
//! let none = StrictlyPositive::new(ThermalConductance::new::<watt_per_kelvin>(0.0));
//! assert_eq!(none.unwrap_err(), ConstraintError::Zero);
//! ```

mod non_negative;
mod non_zero;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric requirement checked when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violated bound.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The bound a value failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
