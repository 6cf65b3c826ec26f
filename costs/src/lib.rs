#![deny(missing_docs)]
//! Hash-call accounting for Merkle tree construction.
//!
//! Every tree operation returns its value wrapped in a [`CostContext`] that
//! records how much hashing work was done to produce it, so callers can
//! budget or meter tree builds without re-deriving the shape of the tree.

/// The [`CostContext`] wrapper and helpers for accumulating costs.
pub mod context;

use std::ops::AddAssign;

pub use context::{CostContext, CostResult, CostsExt};

/// Hashing work performed by an operation.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times raw input bytes were hashed (one per leaf).
    pub hash_byte_calls: u64,
    /// How many times two child digests were hashed into a parent.
    pub hash_node_calls: u64,
}

impl OperationCost {
    /// `true` if no hashing was done at all.
    pub fn is_nothing(&self) -> bool {
        self == &Self::default()
    }

    /// Cost with only `hash_byte_calls` set.
    pub fn with_hash_byte_calls(hash_byte_calls: u64) -> Self {
        OperationCost {
            hash_byte_calls,
            ..Default::default()
        }
    }

    /// Cost with only `hash_node_calls` set.
    pub fn with_hash_node_calls(hash_node_calls: u64) -> Self {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.hash_byte_calls += rhs.hash_byte_calls;
        self.hash_node_calls += rhs.hash_node_calls;
    }
}

/// Like `?` for a `CostContext<Result<..>>`: adds the wrapped cost to the
/// accumulator, then either yields the `Ok` value or returns the error
/// wrapped with everything accumulated so far.
#[macro_export]
macro_rules! cost_return_on_error {
    ( &mut $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result_with_cost = { $($body)+ };
            let result = result_with_cost.unwrap_add_cost(&mut $cost);
            match result {
                Ok(x) => x,
                Err(e) => return Err(e.into()).wrap_with_cost($cost),
            }
        }
    };
}

/// Like [`cost_return_on_error!`] but for a plain `Result`: nothing is added,
/// the early return carries the cost accumulated before the failure.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( &$cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e.into()).wrap_with_cost($cost),
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_double(x: u64) -> CostResult<u64, &'static str> {
        x.checked_mul(2)
            .ok_or("overflow")
            .wrap_with_cost(OperationCost::with_hash_node_calls(1))
    }

    fn double_twice(x: u64) -> CostResult<u64, &'static str> {
        let mut cost = OperationCost::with_hash_byte_calls(1);
        let once = cost_return_on_error!(&mut cost, checked_double(x));
        let twice = cost_return_on_error!(&mut cost, checked_double(once));
        Ok(twice).wrap_with_cost(cost)
    }

    fn parse_then_hash(input: &str) -> CostResult<u64, std::num::ParseIntError> {
        let cost = OperationCost::with_hash_byte_calls(3);
        let parsed: u64 = cost_return_on_error_no_add!(&cost, input.parse::<u64>());
        Ok(parsed).wrap_with_cost(cost)
    }

    #[test]
    fn test_default_is_nothing() {
        assert!(OperationCost::default().is_nothing());
        assert!(!OperationCost::with_hash_node_calls(1).is_nothing());
    }

    #[test]
    fn test_add_assign_sums_each_counter() {
        let mut acc = OperationCost::with_hash_byte_calls(3);
        acc += OperationCost {
            hash_byte_calls: 4,
            hash_node_calls: 5,
        };
        assert_eq!(
            acc,
            OperationCost {
                hash_byte_calls: 7,
                hash_node_calls: 5,
            }
        );
    }

    #[test]
    fn test_cost_return_on_error_accumulates_on_success() {
        let ctx = double_twice(5);
        assert_eq!(ctx.value, Ok(20));
        assert_eq!(
            ctx.cost,
            OperationCost {
                hash_byte_calls: 1,
                hash_node_calls: 2,
            }
        );
    }

    #[test]
    fn test_cost_return_on_error_keeps_cost_on_failure() {
        let ctx = double_twice(u64::MAX / 2 + 1);
        assert_eq!(ctx.value, Err("overflow"));
        // First call failed, its cost is still counted.
        assert_eq!(ctx.cost.hash_node_calls, 1);
        assert_eq!(ctx.cost.hash_byte_calls, 1);
    }

    #[test]
    fn test_cost_return_on_error_no_add() {
        let ok = parse_then_hash("42");
        assert_eq!(ok.value, Ok(42));
        assert_eq!(ok.cost.hash_byte_calls, 3);

        let err = parse_then_hash("nope");
        assert!(err.value.is_err());
        assert_eq!(err.cost, OperationCost::with_hash_byte_calls(3));
    }
}
