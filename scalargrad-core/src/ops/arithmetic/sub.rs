use crate::error::ScalarGradError;
use crate::ops::arithmetic::add::add_values;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::traits::ScalarNumeric;
use crate::ops::{coerce, Operand};
use crate::value::Value;

/// Subtracts two scalars: `a - b`, built as `a + (-b)`.
///
/// # Errors
/// [`ScalarGradError::GraphMismatch`] if `b` is a node of a different graph.
pub fn sub_op<'b, T: ScalarNumeric>(
    a: &Value<T>,
    b: impl Into<Operand<'b, T>>,
) -> Result<Value<T>, ScalarGradError> {
    let b = coerce(a, b, "sub_op")?;
    Ok(add_values(a, &neg_op(&b)))
}

/// Subtracts a scalar from a raw number: `other - a`, built as `(-a) + other`.
pub fn rsub_op<T: ScalarNumeric>(other: T, a: &Value<T>) -> Value<T> {
    let negated = neg_op(a);
    let other = a.graph().value(other);
    add_values(&negated, &other)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
