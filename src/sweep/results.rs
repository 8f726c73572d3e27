use uom::si::f64::Power;

use super::Combination;

/// Heat rate of every combination, in sweep order.
///
/// `heat_rates[i]` belongs to `combinations[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResults {
    pub heat_rates: Vec<Power>,
    pub combinations: Vec<Combination>,
}

impl SweepResults {
    /// Number of evaluated combinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heat_rates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heat_rates.is_empty()
    }

    /// Pairs each heat rate with its combination.
    pub fn iter(&self) -> impl Iterator<Item = (Power, Combination)> + '_ {
        self.heat_rates
            .iter()
            .copied()
            .zip(self.combinations.iter().copied())
    }

    /// Every combination achieving the largest heat rate, in sweep order.
    ///
    /// Ties are all reported.
    #[must_use]
    pub fn maximizers(&self) -> Vec<(Power, Combination)> {
        let Some(best) = self
            .heat_rates
            .iter()
            .copied()
            .reduce(|best, q| if q > best { q } else { best })
        else {
            return Vec::new();
        };

        self.iter().filter(|(q, _)| *q == best).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter, power::watt};

    fn combination(count: u32) -> Combination {
        let mm = Length::new::<millimeter>;
        Combination {
            count,
            length: mm(20.0),
            width: mm(50.0),
            thickness: mm(1.0),
        }
    }

    #[test]
    fn reports_every_tie() {
        let results = SweepResults {
            heat_rates: [4.0, 9.0, 1.0, 9.0].map(Power::new::<watt>).to_vec(),
            combinations: (1..=4).map(combination).collect(),
        };

        let best = results.maximizers();

        assert_eq!(best.len(), 2);
        assert_eq!(best[0].1.count, 2);
        assert_eq!(best[1].1.count, 4);
        assert_eq!(best[0].0, Power::new::<watt>(9.0));
    }

    #[test]
    fn empty_results_have_no_maximizer() {
        let results = SweepResults {
            heat_rates: Vec::new(),
            combinations: Vec::new(),
        };

        assert!(results.is_empty());
        assert!(results.maximizers().is_empty());
    }
}
