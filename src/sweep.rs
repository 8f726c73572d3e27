//! Exhaustive design search over fin or tube geometries.
//!
//! A [`SweepAxes`] holds candidate lists for the four geometric parameters.
//! [`sweep`] evaluates every combination of them, with the count varying
//! slowest and the thickness fastest, and returns the heat rates alongside
//! the combinations that produced them.

mod candidates;
mod results;

use log::debug;
use uom::si::f64::{Length, TemperatureInterval};

pub use candidates::Candidates;
pub use results::SweepResults;

use crate::{
    InvalidInput,
    surface::{ConvectiveSides, Surface},
};

/// One point of the design space.
///
/// For tube bundles `width` is the outer diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    pub count: u32,
    pub length: Length,
    pub width: Length,
    pub thickness: Length,
}

/// Candidate values for each geometric parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepAxes {
    pub counts: Candidates<u32>,
    pub lengths: Candidates<Length>,
    pub widths: Candidates<Length>,
    pub thicknesses: Candidates<Length>,
}

impl SweepAxes {
    /// Number of combinations, the product of the axis lengths.
    #[must_use]
    pub fn size(&self) -> usize {
        self.counts.len() * self.lengths.len() * self.widths.len() * self.thicknesses.len()
    }

    /// Every combination, count outermost and thickness innermost.
    pub fn combinations(&self) -> impl Iterator<Item = Combination> + '_ {
        self.counts.iter().flat_map(move |&count| {
            self.lengths.iter().flat_map(move |&length| {
                self.widths.iter().flat_map(move |&width| {
                    self.thicknesses.iter().map(move |&thickness| Combination {
                        count,
                        length,
                        width,
                        thickness,
                    })
                })
            })
        })
    }
}

/// Evaluates `UA · lmtd` for every combination of `axes`.
///
/// `surface_for` builds the surface for one combination; the convective
/// sides and the LMTD are shared by all of them.
///
/// # Errors
///
/// Returns the first [`InvalidInput`] raised while computing a conductance.
pub fn sweep<S, F>(
    axes: &SweepAxes,
    sides: &ConvectiveSides,
    lmtd: TemperatureInterval,
    surface_for: F,
) -> Result<SweepResults, InvalidInput>
where
    S: Surface,
    F: Fn(&Combination) -> S,
{
    debug!("sweeping {} geometry combinations", axes.size());

    let mut results = SweepResults {
        heat_rates: Vec::with_capacity(axes.size()),
        combinations: Vec::with_capacity(axes.size()),
    };

    for combination in axes.combinations() {
        let ua = surface_for(&combination).conductance(sides)?;
        results.heat_rates.push(ua * lmtd);
        results.combinations.push(combination);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, ThermalConductance, ThermalConductivity},
        heat_transfer::watt_per_square_meter_kelvin,
        length::millimeter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermal_conductance::watt_per_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::surface::{ConvectiveSide, TubeBundle};

    /// Conductance equal to the fin count, in W/K.
    struct ByCount(u32);

    impl Surface for ByCount {
        fn conductance(&self, _sides: &ConvectiveSides) -> Result<ThermalConductance, InvalidInput> {
            Ok(ThermalConductance::new::<watt_per_kelvin>(f64::from(self.0)))
        }
    }

    fn mm(values: &[f64]) -> Vec<Length> {
        values.iter().map(|v| Length::new::<millimeter>(*v)).collect()
    }

    fn axes() -> SweepAxes {
        SweepAxes {
            counts: Candidates::new("num_fins", vec![10, 20]).unwrap(),
            lengths: Candidates::new("fin_length", mm(&[10.0, 20.0])).unwrap(),
            widths: Candidates::new("fin_width", mm(&[30.0, 40.0])).unwrap(),
            thicknesses: Candidates::new("fin_thickness", mm(&[1.0, 2.0])).unwrap(),
        }
    }

    fn sides() -> ConvectiveSides {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>;
        let a = Area::new::<square_meter>;
        ConvectiveSides {
            hot: ConvectiveSide::new(h(150.0), a(2.75)),
            cold: ConvectiveSide::new(h(10.0), a(0.001)),
        }
    }

    #[test]
    fn nested_order() {
        let axes = axes();
        let combinations: Vec<_> = axes.combinations().collect();

        assert_eq!(combinations.len(), 16);
        assert_eq!(axes.size(), 16);

        for (i, c) in combinations.iter().enumerate() {
            assert_eq!(c.count, axes.counts[i / 8]);
            assert_eq!(c.length, axes.lengths[(i / 4) % 2]);
            assert_eq!(c.width, axes.widths[(i / 2) % 2]);
            assert_eq!(c.thickness, axes.thicknesses[i % 2]);
        }
    }

    #[test]
    fn heat_rates_line_up_with_combinations() {
        let lmtd = TemperatureInterval::new::<delta_kelvin>(50.0);

        let results = sweep(&axes(), &sides(), lmtd, |c| ByCount(c.count)).unwrap();

        assert_eq!(results.len(), 16);
        for (q, c) in results.iter() {
            assert_relative_eq!(q.get::<watt>(), f64::from(c.count) * 50.0);
        }

        let best = results.maximizers();
        assert_eq!(best.len(), 8);
        assert!(best.iter().all(|(_, c)| c.count == 20));
    }

    #[test]
    fn surface_errors_stop_the_sweep() {
        let lmtd = TemperatureInterval::new::<delta_kelvin>(50.0);

        let bad_sides = ConvectiveSides {
            cold: ConvectiveSide::new(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
                Area::new::<square_meter>(1.0),
            ),
            ..sides()
        };

        let result = sweep(&axes(), &bad_sides, lmtd, |c| TubeBundle {
            count: c.count,
            length: c.length,
            outer_diameter: c.width,
            thickness: c.thickness,
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(15.0),
        });

        assert!(matches!(result, Err(InvalidInput::Constraint(_))));
    }
}
