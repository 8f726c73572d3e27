use std::ops::Deref;

use crate::InvalidInput;

/// A non-empty, ordered list of candidate values for one design axis.
///
/// A fixed value is a list of one.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidates<T>(Vec<T>);

impl<T> Candidates<T> {
    /// Wraps `values`, naming the axis in the error if the list is empty.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyCandidates`] if `values` is empty.
    pub fn new(axis: &'static str, values: Vec<T>) -> Result<Self, InvalidInput> {
        if values.is_empty() {
            return Err(InvalidInput::EmptyCandidates(axis));
        }
        Ok(Self(values))
    }

    /// A single fixed value.
    #[must_use]
    pub fn one(value: T) -> Self {
        Self(vec![value])
    }

    /// Applies `f` to every candidate, keeping the order.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Candidates<U> {
        Candidates(self.0.into_iter().map(f).collect())
    }
}

impl<T> Deref for Candidates<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_names_the_axis() {
        assert!(matches!(
            Candidates::<u32>::new("num_fins", Vec::new()),
            Err(InvalidInput::EmptyCandidates("num_fins"))
        ));
    }

    #[test]
    fn keeps_order() {
        let counts = Candidates::new("num_fins", vec![3, 1, 2]).unwrap();

        assert_eq!(&*counts, &[3, 1, 2]);
        assert_eq!(&*counts.map(|n| n * 10), &[30, 10, 20]);
        assert_eq!(Candidates::one(7).len(), 1);
    }
}
