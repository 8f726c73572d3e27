use serde::Deserialize;

use crate::{InvalidInput, sweep::Candidates};

/// A geometry field written either as a scalar or as a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Converts into candidates, applying `f` to every value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyCandidates`] for an empty list.
    pub fn into_candidates<U>(
        self,
        axis: &'static str,
        f: impl FnMut(T) -> U,
    ) -> Result<Candidates<U>, InvalidInput> {
        let candidates = match self {
            OneOrMany::One(value) => Candidates::one(value),
            OneOrMany::Many(values) => Candidates::new(axis, values)?,
        };
        Ok(candidates.map(f))
    }
}
