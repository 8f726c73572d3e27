use uom::si::{
    f64::{Area, Length, Ratio, ThermalConductance, ThermalConductivity},
    ratio::ratio,
};

use crate::InvalidInput;

use super::{ConvectiveSide, ConvectiveSides, PlateWall, Surface, non_negative, positive, series};

/// Identical straight rectangular fins on a plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinArray {
    pub count: u32,
    pub length: Length,
    pub width: Length,
    pub thickness: Length,
    pub conductivity: ThermalConductivity,
}

impl FinArray {
    /// Efficiency of a single fin, `tanh(m·L/2) / (m·L/2)` with
    /// `m = √(h·(2t + 2w) / (k·t·w))`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Constraint`] if the coefficient, thickness,
    /// width, or conductivity is not strictly positive, or the length is
    /// negative.
    pub fn efficiency(&self, side: &ConvectiveSide) -> Result<Ratio, InvalidInput> {
        let h = side.h()?;
        let length = non_negative(self.length)?;
        let width = positive(self.width)?;
        let thickness = positive(self.thickness)?;
        let k = positive(self.conductivity)?;

        let m_squared = h * (thickness + width) * 2.0 / (k * thickness * width);
        let half_length: Ratio = m_squared.sqrt() * length / 2.0;
        let x = half_length.get::<ratio>();
        let efficiency = if x == 0.0 { 1.0 } else { x.tanh() / x };

        Ok(Ratio::new::<ratio>(efficiency))
    }

    /// Total fin area `N · L · w`.
    fn area(&self) -> Area {
        self.length * self.width * f64::from(self.count)
    }

    /// Film conductance `η₀ · h · (A_base + A_fin)` of one finned side.
    ///
    /// A side without fins reduces to `h · A_base`, whatever the fin
    /// dimensions.
    fn side_conductance(&self, side: &ConvectiveSide) -> Result<ThermalConductance, InvalidInput> {
        let h = side.h()?;
        let base = side.base_area()?;
        if self.count == 0 {
            return Ok(h * base);
        }

        let fin_area = self.area();
        let total_area = base + fin_area;
        let fin_fraction = (fin_area / total_area).get::<ratio>();
        let fin_efficiency = self.efficiency(side)?.get::<ratio>();
        let surface_effectiveness = 1.0 - fin_fraction * (1.0 - fin_efficiency);

        Ok(h * total_area * surface_effectiveness)
    }
}

/// A [`PlateWall`] with the same [`FinArray`] on both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinnedPlate {
    pub fins: FinArray,
    pub wall: PlateWall,
}

impl Surface for FinnedPlate {
    fn conductance(&self, sides: &ConvectiveSides) -> Result<ThermalConductance, InvalidInput> {
        let hot = self.fins.side_conductance(&sides.hot)?;
        let cold = self.fins.side_conductance(&sides.cold)?;
        series(hot, self.wall.resistance()?, cold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, length::meter, thermal_conductance::watt_per_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::surface::tests::sides;

    fn fins(count: u32, length: f64, width: f64, thickness: f64) -> FinArray {
        FinArray {
            count,
            length: Length::new::<meter>(length),
            width: Length::new::<meter>(width),
            thickness: Length::new::<meter>(thickness),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
        }
    }

    fn plate(thickness: f64, area: f64) -> PlateWall {
        PlateWall::new(
            Length::new::<meter>(thickness),
            ThermalConductivity::new::<watt_per_meter_kelvin>(200.0),
            Area::new::<square_meter>(area),
        )
    }

    #[test]
    fn single_fin_efficiency() {
        let side = sides(10.0, 1.0, 10.0, 1.0).hot;

        let eff = fins(1, 0.02, 0.05, 0.001).efficiency(&side).unwrap();

        // m = √(10 · 0.102 / (200 · 0.001 · 0.05)) = √102
        let x = 102.0_f64.sqrt() * 0.01;
        assert_relative_eq!(eff.get::<ratio>(), x.tanh() / x, epsilon = 1e-12);
        assert!(eff.get::<ratio>() < 1.0);
    }

    #[test]
    fn zero_length_fin_is_fully_effective() {
        let side = sides(10.0, 1.0, 10.0, 1.0).hot;

        let eff = fins(3, 0.0, 0.05, 0.001).efficiency(&side).unwrap();

        assert_relative_eq!(eff.get::<ratio>(), 1.0);
    }

    #[test]
    fn no_fins_matches_the_plain_wall() {
        let sides = sides(10.0, 0.001, 150.0, 2.75);
        let wall = plate(0.002, 2.75);

        let finned = FinnedPlate {
            fins: fins(0, 0.0, 0.0, 0.0),
            wall,
        };

        assert_relative_eq!(
            finned.conductance(&sides).unwrap().get::<watt_per_kelvin>(),
            wall.conductance(&sides).unwrap().get::<watt_per_kelvin>()
        );
    }

    #[test]
    fn fin_area_supplements_the_base() {
        let sides = sides(10.0, 0.5, 150.0, 0.5);
        let array = fins(20, 0.02, 0.05, 0.001);

        let side = array
            .side_conductance(&sides.cold)
            .unwrap()
            .get::<watt_per_kelvin>();
        let eff = array.efficiency(&sides.cold).unwrap().get::<ratio>();

        // η₀·h·(A_b + A_f) == h·(A_b + η_f·A_f)
        assert_relative_eq!(side, 10.0 * (0.5 + eff * 20.0 * 0.02 * 0.05), epsilon = 1e-12);
        assert!(side > 10.0 * 0.5);
    }

    #[test]
    fn more_fins_raise_conductance() {
        let sides = sides(10.0, 0.5, 150.0, 0.5);
        let wall = plate(0.002, 0.5);

        let few = FinnedPlate {
            fins: fins(5, 0.02, 0.05, 0.001),
            wall,
        };
        let many = FinnedPlate {
            fins: fins(50, 0.02, 0.05, 0.001),
            wall,
        };

        assert!(
            many.conductance(&sides).unwrap().get::<watt_per_kelvin>()
                > few.conductance(&sides).unwrap().get::<watt_per_kelvin>()
        );
    }

    #[test]
    fn degenerate_fin_dimensions_are_rejected() {
        let sides = sides(10.0, 0.5, 150.0, 0.5);

        let finned = FinnedPlate {
            fins: fins(5, 0.02, 0.05, 0.0),
            wall: plate(0.002, 0.5),
        };

        assert!(matches!(
            finned.conductance(&sides),
            Err(InvalidInput::Constraint(_))
        ));
    }
}
