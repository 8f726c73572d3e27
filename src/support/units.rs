//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] quantity, so the caller
//! chooses units at construction and the formulas never convert between unit
//! systems. The one gap is absolute-temperature subtraction, covered by
//! [`TemperatureDifference`]:
//!
//! ```
//! use hx_rating::support::units::TemperatureDifference;
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let hot_in = ThermodynamicTemperature::new::<degree_celsius>(100.0);
//! let cold_out = ThermodynamicTemperature::new::<degree_celsius>(55.0);
//! let dt = hot_in.minus(cold_out);
//! assert!((dt.get::<delta_kelvin>() - 45.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
