use crate::ops::arithmetic::mul::mul_values;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;

/// Negates a scalar: `-a`, built as `a * -1`.
///
/// The result is a multiplication node whose second operand is a fresh `-1` leaf, so
/// `a` receives `-grad` through the multiplication rule.
pub fn neg_op<T: ScalarNumeric>(a: &Value<T>) -> Value<T> {
    let minus_one = a.graph().value(-T::one());
    mul_values(a, &minus_one)
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
