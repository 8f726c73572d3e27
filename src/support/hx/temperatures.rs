use std::str::FromStr;

use uom::si::f64::ThermodynamicTemperature;

use crate::InvalidInput;

/// One of the four stream connections of a two-stream exchanger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Port {
    HotIn,
    HotOut,
    ColdIn,
    ColdOut,
}

impl Port {
    /// All ports, in `hot_in`, `hot_out`, `cold_in`, `cold_out` order.
    pub const ALL: [Port; 4] = [Port::HotIn, Port::HotOut, Port::ColdIn, Port::ColdOut];

    /// Returns true for the two hot-stream ports.
    #[must_use]
    pub fn is_hot(self) -> bool {
        matches!(self, Port::HotIn | Port::HotOut)
    }
}

impl FromStr for Port {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot_in" => Ok(Port::HotIn),
            "hot_out" => Ok(Port::HotOut),
            "cold_in" => Ok(Port::ColdIn),
            "cold_out" => Ok(Port::ColdOut),
            other => Err(InvalidInput::UnknownTarget(other.to_owned())),
        }
    }
}

/// Hot or cold stream, used to pick the unknown inlet in NTU inversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Hot,
    Cold,
}

impl FromStr for Side {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(Side::Hot),
            "cold" => Ok(Side::Cold),
            other => Err(InvalidInput::UnknownTarget(other.to_owned())),
        }
    }
}

/// Inlet and outlet temperatures of both streams.
///
/// Construction does not validate anything; use
/// [`check_direction`](Self::check_direction) before treating a set as a
/// physical operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamTemperatures {
    pub hot_in: ThermodynamicTemperature,
    pub hot_out: ThermodynamicTemperature,
    pub cold_in: ThermodynamicTemperature,
    pub cold_out: ThermodynamicTemperature,
}

impl StreamTemperatures {
    #[must_use]
    pub fn new(
        hot_in: ThermodynamicTemperature,
        hot_out: ThermodynamicTemperature,
        cold_in: ThermodynamicTemperature,
        cold_out: ThermodynamicTemperature,
    ) -> Self {
        Self {
            hot_in,
            hot_out,
            cold_in,
            cold_out,
        }
    }

    /// Temperature at `port`.
    #[must_use]
    pub fn get(&self, port: Port) -> ThermodynamicTemperature {
        match port {
            Port::HotIn => self.hot_in,
            Port::HotOut => self.hot_out,
            Port::ColdIn => self.cold_in,
            Port::ColdOut => self.cold_out,
        }
    }

    /// Copy of `self` with the temperature at `port` replaced.
    #[must_use]
    pub fn with(mut self, port: Port, temperature: ThermodynamicTemperature) -> Self {
        match port {
            Port::HotIn => self.hot_in = temperature,
            Port::HotOut => self.hot_out = temperature,
            Port::ColdIn => self.cold_in = temperature,
            Port::ColdOut => self.cold_out = temperature,
        }
        self
    }

    /// Checks that the hot stream cools and the cold stream warms.
    ///
    /// Equal inlet and outlet temperatures are accepted for either stream.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::NonPhysicalTemperatures`] if `hot_in < hot_out`
    /// or `cold_in > cold_out`, or if any temperature is `NaN`.
    pub fn check_direction(&self) -> Result<(), InvalidInput> {
        if self.hot_in >= self.hot_out && self.cold_in <= self.cold_out {
            Ok(())
        } else {
            Err(InvalidInput::NonPhysicalTemperatures {
                hot_in: self.hot_in,
                hot_out: self.hot_out,
                cold_in: self.cold_in,
                cold_out: self.cold_out,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(hot_in: f64, hot_out: f64, cold_in: f64, cold_out: f64) -> StreamTemperatures {
        let t = ThermodynamicTemperature::new::<degree_celsius>;
        StreamTemperatures::new(t(hot_in), t(hot_out), t(cold_in), t(cold_out))
    }

    #[test]
    fn get_and_with_address_the_same_slot() {
        let temps = celsius(100.0, 85.0, 30.0, 55.0);
        let replacement = ThermodynamicTemperature::new::<degree_celsius>(42.0);

        for port in Port::ALL {
            let updated = temps.with(port, replacement);
            assert_eq!(updated.get(port), replacement);
            for other in Port::ALL.into_iter().filter(|p| *p != port) {
                assert_eq!(updated.get(other), temps.get(other));
            }
        }
    }

    #[test]
    fn direction_check() {
        assert!(celsius(100.0, 85.0, 30.0, 55.0).check_direction().is_ok());
        assert!(celsius(10.0, 10.0, 10.0, 10.0).check_direction().is_ok());
        assert!(matches!(
            celsius(10.0, 100.0, 10.0, 100.0).check_direction(),
            Err(InvalidInput::NonPhysicalTemperatures { .. })
        ));
        assert!(celsius(100.0, 10.0, 100.0, 10.0).check_direction().is_err());
    }

    #[test]
    fn parses_targets() {
        assert_eq!("cold_out".parse::<Port>().unwrap(), Port::ColdOut);
        assert_eq!("hot".parse::<Side>().unwrap(), Side::Hot);
        assert!(matches!(
            "cold12_out".parse::<Port>(),
            Err(InvalidInput::UnknownTarget(name)) if name == "cold12_out"
        ));
        assert!(matches!(
            "hout".parse::<Side>(),
            Err(InvalidInput::UnknownTarget(_))
        ));
    }
}
