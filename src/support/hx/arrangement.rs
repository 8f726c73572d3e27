//! Flow arrangements supported by the heat exchanger utilities.
//!
//! Each arrangement is a zero-sized type implementing the effectiveness-NTU
//! relations. Parallel and counter flow also define the two terminals
//! (hot port, cold port) whose temperature differences enter the LMTD.
//!
//! [`Arrangement`] is the closed runtime choice among them, parsed from the
//! names used in configuration files.

mod counter_flow;
mod parallel_flow;
mod shell_and_tube;

use std::str::FromStr;

pub use counter_flow::CounterFlow;
pub use parallel_flow::ParallelFlow;
pub use shell_and_tube::ShellAndTube;

use crate::{InvalidInput, support::constraint::ConstraintResult};

use super::{
    CapacitanceRate, Effectiveness, Ntu, Port,
    effectiveness_ntu::{EffectivenessRelation, NtuRelation},
};

/// An exchanger end, named by the hot and cold ports that meet there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminal {
    pub hot: Port,
    pub cold: Port,
}

impl Terminal {
    /// Returns true if `port` is one of the two ports at this end.
    #[must_use]
    pub fn contains(&self, port: Port) -> bool {
        self.hot == port || self.cold == port
    }

    /// The port sharing this end with `port`.
    ///
    /// Only meaningful when [`contains`](Self::contains) is true.
    #[must_use]
    pub fn partner(&self, port: Port) -> Port {
        if self.hot == port { self.cold } else { self.hot }
    }
}

/// A flow arrangement chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    ParallelFlow,
    CounterFlow,
    /// One shell pass with two or more (even) tube passes.
    ShellAndTube,
}

impl Arrangement {
    /// Name used in configuration files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Arrangement::ParallelFlow => "parallel",
            Arrangement::CounterFlow => "counter",
            Arrangement::ShellAndTube => "shell_and_tube",
        }
    }

    /// The two terminals whose temperature differences define the LMTD.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::UnsupportedArrangement`] for shell-and-tube,
    /// which has no plain LMTD form.
    pub fn terminals(self) -> Result<[Terminal; 2], InvalidInput> {
        match self {
            Arrangement::ParallelFlow => Ok(ParallelFlow::TERMINALS),
            Arrangement::CounterFlow => Ok(CounterFlow::TERMINALS),
            Arrangement::ShellAndTube => Err(InvalidInput::UnsupportedArrangement(self.name())),
        }
    }
}

impl FromStr for Arrangement {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parallel" => Ok(Arrangement::ParallelFlow),
            "counter" => Ok(Arrangement::CounterFlow),
            "shell_and_tube" => Ok(Arrangement::ShellAndTube),
            other => Err(InvalidInput::UnknownArrangement(other.to_owned())),
        }
    }
}

impl EffectivenessRelation for Arrangement {
    fn effectiveness(
        &self,
        ntu: Ntu,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Effectiveness> {
        match self {
            Arrangement::ParallelFlow => ParallelFlow.effectiveness(ntu, capacitance_rates),
            Arrangement::CounterFlow => CounterFlow.effectiveness(ntu, capacitance_rates),
            Arrangement::ShellAndTube => ShellAndTube.effectiveness(ntu, capacitance_rates),
        }
    }
}

impl NtuRelation for Arrangement {
    fn ntu(
        &self,
        effectiveness: Effectiveness,
        capacitance_rates: [CapacitanceRate; 2],
    ) -> ConstraintResult<Ntu> {
        match self {
            Arrangement::ParallelFlow => ParallelFlow.ntu(effectiveness, capacitance_rates),
            Arrangement::CounterFlow => CounterFlow.ntu(effectiveness, capacitance_rates),
            Arrangement::ShellAndTube => ShellAndTube.ntu(effectiveness, capacitance_rates),
        }
    }
}
