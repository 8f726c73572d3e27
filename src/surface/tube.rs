use std::f64::consts::PI;

use uom::si::{
    f64::{Length, ThermalConductance, ThermalConductivity, ThermalResistance},
    ratio::ratio,
};

use crate::InvalidInput;

use super::{ConvectiveSides, Surface, non_negative, positive, series};

/// Parallel tubes carrying the cold stream through the hot stream.
///
/// The outer tube surface adds to the hot-side area and the inner surface to
/// the cold-side area. The tube walls conduct in parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeBundle {
    pub count: u32,
    pub length: Length,
    pub outer_diameter: Length,
    pub thickness: Length,
    pub conductivity: ThermalConductivity,
}

impl TubeBundle {
    /// Inner diameter `D_o − 2t`.
    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.outer_diameter - self.thickness * 2.0
    }
}

impl Surface for TubeBundle {
    fn conductance(&self, sides: &ConvectiveSides) -> Result<ThermalConductance, InvalidInput> {
        let count = f64::from(positive(self.count)?);
        let outer = positive(self.outer_diameter)?;
        non_negative(self.thickness)?;
        let inner = positive(self.inner_diameter())?;
        let k = positive(self.conductivity)?;
        let tube_length = positive(self.length)? * count;

        let hot_area = sides.hot.base_area()? + tube_length * outer * PI;
        let cold_area = sides.cold.base_area()? + tube_length * inner * PI;

        let hot = sides.hot.h()? * hot_area;
        let cold = sides.cold.h()? * cold_area;
        let wall: ThermalResistance =
            (k * tube_length * (2.0 * PI)).recip() * (outer / inner).get::<ratio>().ln();

        series(hot, wall, cold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, thermal_conductance::watt_per_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::surface::tests::sides;

    fn tubes(count: u32, length: f64, outer_diameter: f64, thickness: f64) -> TubeBundle {
        TubeBundle {
            count,
            length: Length::new::<meter>(length),
            outer_diameter: Length::new::<meter>(outer_diameter),
            thickness: Length::new::<meter>(thickness),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(15.0),
        }
    }

    #[test]
    fn thin_walled_tube() {
        let ua = tubes(1, 1.0, 0.1, 0.0)
            .conductance(&sides(10.0, 0.0, 150.0, 0.0))
            .unwrap();

        let area = PI * 0.1;
        let expected = 1.0 / (1.0 / (150.0 * area) + 1.0 / (10.0 * area));
        assert_relative_eq!(ua.get::<watt_per_kelvin>(), expected, epsilon = 1e-12);
    }

    #[test]
    fn thick_walled_tubes() {
        let ua = tubes(4, 2.0, 0.05, 0.005)
            .conductance(&sides(10.0, 0.001, 150.0, 2.75))
            .unwrap();

        let hot = 150.0 * (2.75 + 4.0 * 2.0 * PI * 0.05);
        let cold = 10.0 * (0.001 + 4.0 * 2.0 * PI * 0.04);
        let wall = (0.05_f64 / 0.04).ln() / (2.0 * PI * 15.0 * 4.0 * 2.0);
        let expected = 1.0 / (1.0 / hot + wall + 1.0 / cold);
        assert_relative_eq!(ua.get::<watt_per_kelvin>(), expected, epsilon = 1e-12);
    }

    #[test]
    fn inner_diameter() {
        assert_relative_eq!(tubes(1, 1.0, 0.05, 0.005).inner_diameter().get::<meter>(), 0.04);
    }

    #[test]
    fn degenerate_bundles_are_rejected() {
        let sides = sides(10.0, 0.001, 150.0, 2.75);

        assert!(tubes(0, 1.0, 0.05, 0.005).conductance(&sides).is_err());
        assert!(tubes(1, 0.0, 0.05, 0.005).conductance(&sides).is_err());
        assert!(tubes(1, 1.0, 0.05, 0.025).conductance(&sides).is_err());
        assert!(tubes(1, 1.0, 0.05, -0.001).conductance(&sides).is_err());
    }
}
