//! Overall conductance (UA) of the wall between the two streams.
//!
//! A [`Surface`] turns the convective coefficient and base area of each side
//! ([`ConvectiveSides`]) into one series conductance:
//!
//! ```text
//! 1 / UA = 1 / G_hot + R_wall + 1 / G_cold
//! ```
//!
//! Three surfaces are provided:
//!
//! - [`PlateWall`]: a flat wall with no extended surface.
//! - [`FinnedPlate`]: a flat wall carrying a [`FinArray`] on both sides.
//! - [`TubeBundle`]: parallel tubes whose outer and inner surfaces add to the
//!   hot and cold base areas.
//!
//! # Example
//!
//! ```
//! use hx_rating::surface::{ConvectiveSide, ConvectiveSides, PlateWall, Surface};
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, HeatTransfer, Length, ThermalConductivity},
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     thermal_conductance::watt_per_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//! };
//!
//! let h = HeatTransfer::new::<watt_per_square_meter_kelvin>;
//! let a = Area::new::<square_meter>;
//!
//! let sides = ConvectiveSides {
//!     hot: ConvectiveSide::new(h(1.0), a(2.0)),
//!     cold: ConvectiveSide::new(h(1.0), a(2.0)),
//! };
//! let wall = PlateWall::new(
//!     Length::new::<meter>(0.0),
//!     ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
//!     a(2.0),
//! );
//!
//! let ua = wall.conductance(&sides).unwrap();
//! assert!((ua.get::<watt_per_kelvin>() - 1.0).abs() < 1e-12);
//! ```

mod fin;
mod tube;

use num_traits::Zero;
use uom::si::f64::{
    Area, HeatTransfer, Length, ThermalConductance, ThermalConductivity, ThermalResistance,
};

pub use fin::{FinArray, FinnedPlate};
pub use tube::TubeBundle;

use crate::{
    InvalidInput,
    support::constraint::{NonNegative, StrictlyPositive},
};

/// A wall geometry with a computable overall conductance.
pub trait Surface {
    /// Overall conductance between the two streams.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if a coefficient, area, or dimension violates
    /// its sign requirement.
    fn conductance(&self, sides: &ConvectiveSides) -> Result<ThermalConductance, InvalidInput>;
}

/// Convective coefficient and base (unfinned) area on one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvectiveSide {
    pub coefficient: HeatTransfer,
    pub area: Area,
}

impl ConvectiveSide {
    #[must_use]
    pub fn new(coefficient: HeatTransfer, area: Area) -> Self {
        Self { coefficient, area }
    }

    /// Coefficient, checked strictly positive.
    fn h(&self) -> Result<HeatTransfer, InvalidInput> {
        positive(self.coefficient)
    }

    /// Base area, checked non-negative.
    fn base_area(&self) -> Result<Area, InvalidInput> {
        non_negative(self.area)
    }
}

/// The hot and cold convective sides of the exchanger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvectiveSides {
    pub hot: ConvectiveSide,
    pub cold: ConvectiveSide,
}

/// A flat conducting wall of uniform thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateWall {
    pub thickness: Length,
    pub conductivity: ThermalConductivity,
    pub area: Area,
}

impl PlateWall {
    #[must_use]
    pub fn new(thickness: Length, conductivity: ThermalConductivity, area: Area) -> Self {
        Self {
            thickness,
            conductivity,
            area,
        }
    }

    /// Conduction resistance `t / (k · A)`.
    fn resistance(&self) -> Result<ThermalResistance, InvalidInput> {
        let t = non_negative(self.thickness)?;
        let k = positive(self.conductivity)?;
        let area = positive(self.area)?;
        Ok(t / (k * area))
    }
}

impl Surface for PlateWall {
    fn conductance(&self, sides: &ConvectiveSides) -> Result<ThermalConductance, InvalidInput> {
        let hot = sides.hot.h()? * sides.hot.base_area()?;
        let cold = sides.cold.h()? * sides.cold.base_area()?;
        series(hot, self.resistance()?, cold)
    }
}

/// Series conductance of two convective films and a wall.
///
/// A side with zero film conductance blocks all heat flow.
fn series(
    hot: ThermalConductance,
    wall: ThermalResistance,
    cold: ThermalConductance,
) -> Result<ThermalConductance, InvalidInput> {
    let hot = positive(hot)?;
    let cold = positive(cold)?;
    let total: ThermalResistance = hot.recip() + wall + cold.recip();
    Ok(total.recip())
}

fn positive<T: PartialOrd + Zero>(value: T) -> Result<T, InvalidInput> {
    Ok(StrictlyPositive::new(value)?.into_inner())
}

fn non_negative<T: PartialOrd + Zero>(value: T) -> Result<T, InvalidInput> {
    Ok(NonNegative::new(value)?.into_inner())
}
