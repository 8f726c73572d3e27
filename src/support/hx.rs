//! Two-stream heat exchanger building blocks.
//!
//! This module holds the types shared by the rating formulas, the inverse
//! solvers, and the design sweep:
//!
//! - **Stream state**: [`StreamTemperatures`], addressed by [`Port`]
//! - **Core types**: [`CapacitanceRate`], [`CapacityRatio`], [`Effectiveness`], [`Ntu`]
//! - **Flow arrangements**: [`CounterFlow`], [`ParallelFlow`], [`ShellAndTube`],
//!   and the runtime choice [`Arrangement`]
//!
//! # Example
//!
//! ```
//! use hx_rating::support::constraint::ConstraintResult;
//! use hx_rating::support::hx::{
//!     CapacitanceRate, CounterFlow, EffectivenessRelation, Ntu,
//! };
//! use uom::si::{ratio::ratio, thermal_conductance::kilowatt_per_kelvin};
//!
//! fn main() -> ConstraintResult<()> {
//!     let rates = [
//!         CapacitanceRate::new::<kilowatt_per_kelvin>(3.0)?,
//!         CapacitanceRate::new::<kilowatt_per_kelvin>(6.0)?,
//!     ];
//!
//!     let eff = CounterFlow.effectiveness(Ntu::new(1.0)?, rates)?;
//!     assert!(eff.get::<ratio>() > 0.5 && eff.get::<ratio>() < 1.0);
//!
//!     Ok(())
//! }
//! ```

pub mod arrangement;
mod capacitance_rate;
mod capacity_ratio;
mod effectiveness_ntu;
mod temperatures;

pub use arrangement::{Arrangement, CounterFlow, ParallelFlow, ShellAndTube, Terminal};
pub use capacitance_rate::CapacitanceRate;
pub use capacity_ratio::CapacityRatio;
pub use effectiveness_ntu::{Effectiveness, EffectivenessRelation, Ntu, NtuRelation};
pub use temperatures::{Port, Side, StreamTemperatures};
