//! Parallel-flow effectiveness-NTU relationships.

use crate::support::{
    constraint::ConstraintResult,
    hx::{
        CapacitanceRate, Effectiveness, Ntu, Port,
        effectiveness_ntu::{EffectivenessRelation, NtuRelation, effectiveness_via, ntu_via},
    },
};

use super::Terminal;

/// Parallel-flow heat exchanger arrangement.
///
/// Both streams enter at the same end.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelFlow;

impl ParallelFlow {
    /// `Δt₁ = T_hot_in − T_cold_in`, `Δt₂ = T_hot_out − T_cold_out`.
    pub const TERMINALS: [Terminal; 2] = [
        Terminal {
            hot: Port::HotIn,
            cold: Port::ColdIn,
        },
        Terminal {
            hot: Port::HotOut,
            cold: Port::ColdOut,
        },
    ];
}

impl EffectivenessRelation for ParallelFlow {
    fn effectiveness(
        &self,
        ntu: Ntu,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Effectiveness> {
        effectiveness_via(ntu, capacitance_rates, |ntu, cr| {
            (1. - (-ntu * (1. + cr)).exp()) / (1. + cr)
        })
    }
}

impl NtuRelation for ParallelFlow {
    fn ntu(
        &self,
        effectiveness: Effectiveness,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Ntu> {
        ntu_via(effectiveness, capacitance_rates, |eff, cr| {
            -(1. - eff * (1. + cr)).ln() / (1. + cr)
        })
    }
}
