//! Counter-flow effectiveness-NTU relationships.

use crate::support::{
    constraint::ConstraintResult,
    hx::{
        CapacitanceRate, Effectiveness, Ntu, Port,
        effectiveness_ntu::{EffectivenessRelation, NtuRelation, effectiveness_via, ntu_via},
    },
};

use super::Terminal;

/// Counter-flow heat exchanger arrangement.
///
/// The streams enter at opposite ends, so the hot inlet faces the cold outlet.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterFlow;

impl CounterFlow {
    /// `Δt₁ = T_hot_in − T_cold_out`, `Δt₂ = T_hot_out − T_cold_in`.
    pub const TERMINALS: [Terminal; 2] = [
        Terminal {
            hot: Port::HotIn,
            cold: Port::ColdOut,
        },
        Terminal {
            hot: Port::HotOut,
            cold: Port::ColdIn,
        },
    ];
}

impl EffectivenessRelation for CounterFlow {
    fn effectiveness(
        &self,
        ntu: Ntu,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Effectiveness> {
        effectiveness_via(ntu, capacitance_rates, |ntu, cr| {
            if cr < 1. {
                (1. - (-ntu * (1. - cr)).exp()) / (1. - cr * (-ntu * (1. - cr)).exp())
            } else {
                // cr == 1
                ntu / (1. + ntu)
            }
        })
    }
}

impl NtuRelation for CounterFlow {
    fn ntu(
        &self,
        effectiveness: Effectiveness,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Ntu> {
        ntu_via(effectiveness, capacitance_rates, |eff, cr| {
            if cr < 1. {
                (((1. - eff * cr) / (1. - eff)).ln()) / (1. - cr)
            } else {
                // cr == 1
                eff / (1. - eff)
            }
        })
    }
}
