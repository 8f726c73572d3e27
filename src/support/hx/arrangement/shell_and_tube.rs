//! Shell-and-tube effectiveness-NTU relationships.

use crate::support::{
    constraint::ConstraintResult,
    hx::{
        CapacitanceRate, Effectiveness, Ntu,
        effectiveness_ntu::{EffectivenessRelation, NtuRelation, effectiveness_via, ntu_via},
    },
};

/// Shell-and-tube heat exchanger with one shell pass and any even number of
/// tube passes.
///
/// The relation does not depend on the tube pass count once it is even, so
/// the arrangement carries no configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellAndTube;

impl EffectivenessRelation for ShellAndTube {
    fn effectiveness(
        &self,
        ntu: Ntu,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Effectiveness> {
        effectiveness_via(ntu, capacitance_rates, |ntu, cr| {
            let root = (1. + cr.powi(2)).sqrt();
            let decay = (-ntu * root).exp();
            2. / (1. + cr + root * (1. + decay) / (1. - decay))
        })
    }
}

impl NtuRelation for ShellAndTube {
    fn ntu(
        &self,
        effectiveness: Effectiveness,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Ntu> {
        ntu_via(effectiveness, capacitance_rates, |eff, cr| {
            let root = (1. + cr.powi(2)).sqrt();
            let e = (2. - eff * (1. + cr)) / (eff * root);
            ((e + 1.) / (e - 1.)).ln() / root
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{ratio::ratio, thermal_conductance::watt_per_kelvin};

    use super::*;

    #[test]
    fn known_value() -> ConstraintResult<()> {
        // cr = 0.5, NTU = 1
        let rates = [
            CapacitanceRate::new::<watt_per_kelvin>(1.)?,
            CapacitanceRate::new::<watt_per_kelvin>(2.)?,
        ];

        let eff = ShellAndTube.effectiveness(Ntu::new(1.)?, rates)?;

        let root = 1.25_f64.sqrt();
        let decay = (-root).exp();
        let expected = 2. / (1.5 + root * (1. + decay) / (1. - decay));
        assert_relative_eq!(eff.get::<ratio>(), expected);
        assert_relative_eq!(eff.get::<ratio>(), 0.5399, max_relative = 1e-3);
        Ok(())
    }

    #[test]
    fn roundtrip() -> ConstraintResult<()> {
        let ntus = [0.1, 0.5, 1., 5.];
        let capacitance_rates = [[1., 1.], [1., 2.], [2., 1.], [1., 4.]];

        for ntu in ntus {
            for pair in capacitance_rates {
                let rates = [
                    CapacitanceRate::new::<watt_per_kelvin>(pair[0])?,
                    CapacitanceRate::new::<watt_per_kelvin>(pair[1])?,
                ];

                let eff = ShellAndTube.effectiveness(Ntu::new(ntu)?, rates)?;
                let back = ShellAndTube.ntu(eff, rates)?;

                assert_relative_eq!(back.get::<ratio>(), ntu, max_relative = 1e-12);
            }
        }

        Ok(())
    }
}
