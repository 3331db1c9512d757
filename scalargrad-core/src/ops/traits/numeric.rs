use num_traits::{Float, NumAssignOps};
use std::fmt::{Debug, Display};

/// Floating-point types a [`Graph`](crate::Graph) can hold.
///
/// Implemented for `f32` and `f64`; `f64` is the default element type of
/// [`Graph`](crate::Graph) and [`Value`](crate::Value).
pub trait ScalarNumeric:
    Float // Num + Copy + NumCast + PartialOrd + powf/exp/ln/tanh
    + NumAssignOps // `grad += contribution`
    + Debug
    + Display
    + 'static
{
}

impl ScalarNumeric for f32 {}
impl ScalarNumeric for f64 {}
