/// A dense, non-empty sequence of sampled values.
///
/// Index `i` holds the `i`-th distinct value recorded by the sampler. Index 0
/// always exists and holds the value at the start of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    values: Vec<f64>,
}

impl Samples {
    /// Wraps values recorded by the sampler, which always records at least one.
    pub(super) fn from_recorded(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty(), "a run records at least one sample");
        Self { values }
    }

    /// Builds samples from arbitrary values, or `None` if `values` is empty.
    #[must_use]
    pub fn from_values(values: Vec<f64>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self { values })
        }
    }

    /// Returns the number of samples, which is always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; provided for API symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the sample at `index`, or `None` past the last sample.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Returns the first sample.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Returns the last sample.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl<'a> IntoIterator for &'a Samples {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_values() {
        assert!(Samples::from_values(Vec::new()).is_none());
    }

    #[test]
    fn lookups_past_the_end_are_absent() {
        let samples = Samples::from_values(vec![1.0, 2.0, 3.0]).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(samples.first(), 1.0);
        assert_eq!(samples.last(), 3.0);
        assert_eq!(samples.get(2), Some(3.0));
        assert_eq!(samples.get(3), None);
        assert_eq!(samples.get(usize::MAX), None);
    }
}
