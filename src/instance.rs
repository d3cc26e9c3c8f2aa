//! Problem instances: item values, integer weights, and a weight capacity.
//!
//! All boundary validation lives here. Once a [`KnapsackInstance`] exists,
//! solving it is total: the solver never allocates before validation has
//! passed and never fails after it.

use crate::error::InvalidInput;

/// A validated 0/1 knapsack instance.
///
/// Items are identified by position: item `i` has value `values()[i]` and
/// weight `weights()[i]`. Values are finite and non-negative, weights are
/// strictly positive, and the capacity is strictly positive.
#[derive(Clone, Debug)]
pub struct KnapsackInstance {
    values: Vec<f64>,
    weights: Vec<u32>,
    capacity: u32,
}

impl KnapsackInstance {
    /// Validate and build an instance from parallel value/weight vectors.
    pub fn new(values: Vec<f64>, weights: Vec<u32>, capacity: u32) -> Result<Self, InvalidInput> {
        if values.len() != weights.len() {
            return Err(InvalidInput::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        if values.is_empty() {
            return Err(InvalidInput::NoItems);
        }
        if capacity == 0 {
            return Err(InvalidInput::ZeroCapacity);
        }
        if let Some(index) = weights.iter().position(|&w| w == 0) {
            return Err(InvalidInput::ZeroWeight { index });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(InvalidInput::BadValue { index });
        }
        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    /// Validate and build an instance from `(value, weight)` pairs.
    pub fn from_items<I>(items: I, capacity: u32) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let (values, weights) = items.into_iter().unzip();
        Self::new(values, weights, capacity)
    }

    /// Number of items N.
    pub fn num_items(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Sum of all item values; an upper bound on any achievable solution.
    pub fn value_sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        let instance = KnapsackInstance::new(vec![1.5, 2.0], vec![3, 4], 10).unwrap();
        assert_eq!(instance.num_items(), 2);
        assert_eq!(instance.capacity(), 10);
        assert_eq!(instance.value_sum(), 3.5);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = KnapsackInstance::new(vec![1.0], vec![2, 3], 10).unwrap_err();
        assert_eq!(
            err,
            InvalidInput::LengthMismatch {
                values: 1,
                weights: 2
            }
        );
    }

    #[test]
    fn rejects_empty_item_set() {
        let err = KnapsackInstance::new(vec![], vec![], 10).unwrap_err();
        assert_eq!(err, InvalidInput::NoItems);
    }

    #[test]
    fn rejects_zero_weight() {
        let err = KnapsackInstance::new(vec![1.0, 2.0], vec![3, 0], 10).unwrap_err();
        assert_eq!(err, InvalidInput::ZeroWeight { index: 1 });
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = KnapsackInstance::new(vec![1.0], vec![1], 0).unwrap_err();
        assert_eq!(err, InvalidInput::ZeroCapacity);
    }

    #[test]
    fn rejects_negative_and_non_finite_values() {
        let err = KnapsackInstance::new(vec![1.0, -0.5], vec![1, 1], 10).unwrap_err();
        assert_eq!(err, InvalidInput::BadValue { index: 1 });

        let err = KnapsackInstance::new(vec![f64::NAN], vec![1], 10).unwrap_err();
        assert_eq!(err, InvalidInput::BadValue { index: 0 });

        let err = KnapsackInstance::new(vec![f64::INFINITY], vec![1], 10).unwrap_err();
        assert_eq!(err, InvalidInput::BadValue { index: 0 });
    }

    #[test]
    fn from_items_matches_new() {
        let a = KnapsackInstance::from_items([(1.0, 2), (3.0, 4)], 9).unwrap();
        let b = KnapsackInstance::new(vec![1.0, 3.0], vec![2, 4], 9).unwrap();
        assert_eq!(a.values(), b.values());
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.capacity(), b.capacity());
    }
}
