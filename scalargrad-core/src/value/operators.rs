// src/value/operators.rs
//
// `std::ops` overloads and method forms layered over the `*_op` functions.

use crate::error::ScalarGradError;
use crate::ops::activation::relu_op;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, rdiv_op, rsub_op, sub_op};
use crate::ops::math_elem::{exp_op, ln_op, tanh_op};
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Operator traits cannot return `Result`; structural misuse becomes a panic here.
fn or_panic<T: ScalarNumeric>(result: Result<Value<T>, ScalarGradError>) -> Value<T> {
    result.unwrap_or_else(|err| panic!("{}", err))
}

/// Implements a binary operator for every owned/borrowed combination of two values.
///
/// # Panics
/// The generated impls panic if the operands belong to different graphs; use the
/// corresponding `*_op` function to get a [`ScalarGradError::GraphMismatch`] instead.
macro_rules! impl_value_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b, T: ScalarNumeric> $trait<&'b Value<T>> for &'a Value<T> {
            type Output = Value<T>;

            fn $method(self, other: &'b Value<T>) -> Value<T> {
                or_panic($op_fn(self, other))
            }
        }

        impl<T: ScalarNumeric> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;

            fn $method(self, other: Value<T>) -> Value<T> {
                or_panic($op_fn(&self, &other))
            }
        }

        impl<'b, T: ScalarNumeric> $trait<&'b Value<T>> for Value<T> {
            type Output = Value<T>;

            fn $method(self, other: &'b Value<T>) -> Value<T> {
                or_panic($op_fn(&self, other))
            }
        }

        impl<'a, T: ScalarNumeric> $trait<Value<T>> for &'a Value<T> {
            type Output = Value<T>;

            fn $method(self, other: Value<T>) -> Value<T> {
                or_panic($op_fn(self, &other))
            }
        }
    };
}

impl_value_binary_op!(Add, add, add_op);
impl_value_binary_op!(Sub, sub, sub_op);
impl_value_binary_op!(Mul, mul, mul_op);
impl_value_binary_op!(Div, div, div_op);

/// Implements `value op number` and the reflected `number op value` for concrete floats.
///
/// `$reflected` receives `(number, &value)` and must compute `number op value`.
macro_rules! impl_scalar_binary_op {
    ($t:ty, $trait:ident, $method:ident, $op_fn:ident, $reflected:expr) => {
        impl<'a> $trait<$t> for &'a Value<$t> {
            type Output = Value<$t>;

            fn $method(self, other: $t) -> Value<$t> {
                or_panic($op_fn(self, other))
            }
        }

        impl $trait<$t> for Value<$t> {
            type Output = Value<$t>;

            fn $method(self, other: $t) -> Value<$t> {
                or_panic($op_fn(&self, other))
            }
        }

        impl<'a> $trait<&'a Value<$t>> for $t {
            type Output = Value<$t>;

            fn $method(self, other: &'a Value<$t>) -> Value<$t> {
                ($reflected)(self, other)
            }
        }

        impl $trait<Value<$t>> for $t {
            type Output = Value<$t>;

            fn $method(self, other: Value<$t>) -> Value<$t> {
                ($reflected)(self, &other)
            }
        }
    };
}

macro_rules! impl_scalar_ops_for {
    ($($t:ty),*) => {
        $(
            // Addition and multiplication commute, so the number can go on the right.
            impl_scalar_binary_op!($t, Add, add, add_op, |n: $t, v: &Value<$t>| or_panic(add_op(v, n)));
            impl_scalar_binary_op!($t, Mul, mul, mul_op, |n: $t, v: &Value<$t>| or_panic(mul_op(v, n)));
            impl_scalar_binary_op!($t, Sub, sub, sub_op, |n: $t, v: &Value<$t>| rsub_op(n, v));
            impl_scalar_binary_op!($t, Div, div, div_op, |n: $t, v: &Value<$t>| rdiv_op(n, v));
        )*
    };
}

impl_scalar_ops_for!(f32, f64);

impl<'a, T: ScalarNumeric> Neg for &'a Value<T> {
    type Output = Value<T>;

    fn neg(self) -> Value<T> {
        neg_op(self)
    }
}

impl<T: ScalarNumeric> Neg for Value<T> {
    type Output = Value<T>;

    fn neg(self) -> Value<T> {
        neg_op(&self)
    }
}

impl<T: ScalarNumeric> Value<T> {
    /// `self ** exponent` for a constant real exponent. See [`pow_op`].
    pub fn pow(&self, exponent: T) -> Value<T> {
        pow_op(self, exponent)
    }

    /// `max(self, 0)`. See [`relu_op`].
    pub fn relu(&self) -> Value<T> {
        relu_op(self)
    }

    pub fn exp(&self) -> Value<T> {
        exp_op(self)
    }

    /// Natural logarithm. Non-positive inputs give `NaN` or `-inf`.
    pub fn ln(&self) -> Value<T> {
        ln_op(self)
    }

    pub fn tanh(&self) -> Value<T> {
        tanh_op(self)
    }
}
