//! Forward formulas solved for one unknown.
//!
//! Each function holds every input but one fixed and recovers the missing
//! scalar from a known heat rate or LMTD, using the same equation as the
//! forward path in [`rating`](crate::rating):
//!
//! - [`temp_from_ntu_heat_rate`]: an inlet temperature from `q = ε · C_min · ΔT_max`.
//! - [`lmtd_from_heat_rate`]: the LMTD from `q = U · A · LMTD`.
//! - [`temp_from_lmtd`]: any one of the four terminal temperatures from a
//!   target LMTD. The LMTD is transcendental in the unknown terminal
//!   difference, so this one is solved iteratively by bisection.
//! - [`required_conductance`]: the UA an arrangement needs to reach a given
//!   effectiveness.

mod config;
mod lmtd;
mod ntu;
mod problem;

pub use config::InversionConfig;
pub use lmtd::{lmtd_from_heat_rate, temp_from_lmtd};
pub use ntu::{required_conductance, temp_from_ntu_heat_rate};
