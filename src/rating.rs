//! Forward rating formulas.
//!
//! Two independent routes lead to a heat rate:
//!
//! - **LMTD**: `q = UA · LMTD`, from the four terminal temperatures
//!   ([`log_mean_temp_diff`], [`heat_rate_lmtd`]).
//! - **Effectiveness-NTU**: `q = ε · C_min · (T_hot_in − T_cold_in)`, from the
//!   inlets and stream capacity rates ([`ntu_effectiveness`], [`ntu_heat_rate`]).
//!
//! All functions are pure and validate their inputs before computing.

mod lmtd;
mod ntu;

pub use lmtd::{heat_rate_lmtd, heat_rates_lmtd, log_mean_temp_diff};
pub use ntu::{
    capacity_rate_max, capacity_rate_min, ntu_effectiveness, ntu_heat_rate, ntu_max_heat_rate,
};

pub(crate) use lmtd::{log_mean_kelvin, terminal_difference};
