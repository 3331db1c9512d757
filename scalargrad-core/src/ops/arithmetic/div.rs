use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_values;
use crate::ops::arithmetic::pow::pow_op;
use crate::ops::traits::ScalarNumeric;
use crate::ops::{coerce, Operand};
use crate::value::Value;

/// Divides two scalars: `a / b`, built as `a * b ** -1`.
///
/// # Domain Considerations
/// A divisor holding exactly zero produces `inf` or `NaN` through the power rule; it is
/// not reported as an error.
///
/// # Errors
/// [`ScalarGradError::GraphMismatch`] if `b` is a node of a different graph.
pub fn div_op<'b, T: ScalarNumeric>(
    a: &Value<T>,
    b: impl Into<Operand<'b, T>>,
) -> Result<Value<T>, ScalarGradError> {
    let b = coerce(a, b, "div_op")?;
    Ok(mul_values(a, &pow_op(&b, -T::one())))
}

/// Divides a raw number by a scalar: `other / a`, built as `a ** -1 * other`.
pub fn rdiv_op<T: ScalarNumeric>(other: T, a: &Value<T>) -> Value<T> {
    let reciprocal = pow_op(a, -T::one());
    let other = a.graph().value(other);
    mul_values(&reciprocal, &other)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
