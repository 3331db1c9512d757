use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::ops::traits::ScalarNumeric;
use crate::value::Value;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon {0:?} is not representable in the graph's scalar type")]
    InvalidEpsilon(f64),

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Step size and tolerances for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Finite-difference step.
    pub epsilon: f64,
    pub abs_tolerance: f64,
    /// Scaled by `|numerical_grad|`.
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds the expression under test from leaves holding `inputs` (in order). It
/// is called once for the analytical pass, then twice per input on fresh graphs with
/// that input shifted by `±epsilon`:
///
/// \\[ \frac{\partial f}{\partial x_i} \approx \frac{f(x_i + \epsilon) - f(x_i - \epsilon)}{2\epsilon} \\]
///
/// An input passes when `|analytical - numerical| <= abs_tolerance + rel_tolerance * |numerical|`.
///
/// Keep inputs away from non-differentiable points (ReLU at 0) and domain edges.
pub fn check_grad<T, F>(func: F, inputs: &[T], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    T: ScalarNumeric,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarGradError>,
{
    let epsilon = T::from(config.epsilon).ok_or(GradCheckError::InvalidEpsilon(config.epsilon))?;
    let two = T::one() + T::one();

    // --- Analytical gradients ---
    let graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<Value<T>> = inputs.iter().map(|&x| graph.value(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward();

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = to_f64(leaf.grad());
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        // --- Numerical gradient ---
        let loss_plus = evaluate(&func, inputs, i, inputs[i] + epsilon)?;
        let loss_minus = evaluate(&func, inputs, i, inputs[i] - epsilon)?;
        let numerical = to_f64((loss_plus - loss_minus) / (two * epsilon));
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus: to_f64(loss_plus),
                loss_minus: to_f64(loss_minus),
            });
        }

        let difference = (analytical - numerical).abs();
        debug!(
            "check_grad input {}: analytical={} numerical={} diff={}",
            i, analytical, numerical, difference
        );
        if difference > config.abs_tolerance + config.rel_tolerance * numerical.abs() {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference,
            });
        }
    }

    Ok(())
}

/// Forward value of `func` on a fresh graph with `inputs[index]` replaced by `shifted`.
fn evaluate<T, F>(func: &F, inputs: &[T], index: usize, shifted: T) -> Result<T, GradCheckError>
where
    T: ScalarNumeric,
    F: Fn(&[Value<T>]) -> Result<Value<T>, ScalarGradError>,
{
    let graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<Value<T>> = inputs
        .iter()
        .enumerate()
        .map(|(j, &x)| graph.value(if j == index { shifted } else { x }))
        .collect();
    Ok(func(&leaves)?.data())
}

fn to_f64<T: ScalarNumeric>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
