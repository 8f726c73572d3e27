use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtraction of absolute temperatures.
///
/// [`uom`] does not implement `ThermodynamicTemperature - ThermodynamicTemperature`
/// (see [uom#380](https://github.com/iliekturtles/uom/issues/380)), yet every
/// terminal temperature difference in an exchanger is exactly that.
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;

    /// Returns true if the temperature lies below absolute zero.
    fn is_below_absolute_zero(&self) -> bool;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }

    fn is_below_absolute_zero(&self) -> bool {
        self.get::<abs_kelvin>() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn terminal_difference_is_an_interval() {
        let hot_out = ThermodynamicTemperature::new::<abs_kelvin>(358.15);
        let cold_in = ThermodynamicTemperature::new::<abs_kelvin>(303.15);

        assert_relative_eq!(hot_out.minus(cold_in).get::<delta_kelvin>(), 55.0, epsilon = 1e-9);
        assert_relative_eq!(cold_in.minus(hot_out).get::<delta_celsius>(), -55.0, epsilon = 1e-9);
    }

    #[test]
    fn mixed_units_agree() {
        let t_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let t_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(t_f.minus(t_c).get::<delta_kelvin>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn absolute_zero() {
        assert!(!ThermodynamicTemperature::new::<abs_kelvin>(0.0).is_below_absolute_zero());
        assert!(!ThermodynamicTemperature::new::<degree_celsius>(-40.0).is_below_absolute_zero());
        assert!(ThermodynamicTemperature::new::<abs_kelvin>(-1.0).is_below_absolute_zero());
    }
}
