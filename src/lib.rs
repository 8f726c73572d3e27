//! # HX Rating
//!
//! Steady-state rating of two-stream heat exchangers with the log-mean
//! temperature difference (LMTD) and effectiveness-NTU methods, plus the
//! extended-surface conductance model and design sweep built on them.
//!
//! ## Crate layout
//!
//! - [`rating`]: Forward formulas (LMTD, heat rate, capacity rates, effectiveness).
//! - [`surface`]: Overall conductance (UA) of plain, finned, and tubed walls.
//! - [`inverse`]: Each forward formula solved for one unknown temperature or LMTD.
//! - [`sweep`]: Exhaustive search over candidate fin or tube geometries.
//! - [`config`]: YAML case files feeding the functions above.
//! - [`support`]: Units, numeric constraints, and shared exchanger types.
//!
//! Every fallible entry point returns [`InvalidInput`].
//!
//! ## Example
//!
//! ```
//! use hx_rating::{
//!     InvalidInput,
//!     rating::log_mean_temp_diff,
//!     support::hx::{Arrangement, StreamTemperatures},
//! };
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! fn main() -> Result<(), InvalidInput> {
//!     let t = ThermodynamicTemperature::new::<degree_celsius>;
//!     let temps = StreamTemperatures::new(t(100.0), t(85.0), t(30.0), t(55.0));
//!
//!     let lmtd = log_mean_temp_diff(Arrangement::CounterFlow, &temps)?;
//!     assert!((lmtd.get::<delta_kelvin>() - 49.83).abs() < 0.01);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
mod error;
pub mod inverse;
pub mod rating;
pub mod support;
pub mod surface;
pub mod sweep;

pub use error::InvalidInput;
