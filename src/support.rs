//! Supporting utilities shared by the rating, inversion, and sweep modules.
//!
//! - [`constraint`]: type-level numeric invariants (`Constrained<T, C>`).
//! - [`units`]: extensions to [`uom`] needed for temperature arithmetic.
//! - [`hx`]: heat exchanger value types and effectiveness-NTU correlations.

pub mod constraint;
pub mod hx;
pub mod units;
