use crate::error::MinigradError;
use num_traits::Float;
use thiserror::Error;

/// Step used by [`central_difference`] when callers have no better choice.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for argument {arg}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        arg: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for argument {arg}")]
    NumericalGradNaNOrInfinite { arg: usize },

    #[error("Expected one analytical gradient per value: got {analytical} gradients for {values} values")]
    ArityMismatch { values: usize, analytical: usize },

    #[error(transparent)]
    Engine(#[from] MinigradError),
}

/// Approximates the partial derivative of `f` with respect to its `arg`-th argument.
///
/// Computes `(f(.., x + epsilon, ..) - f(.., x - epsilon, ..)) / (2 * epsilon)`
/// where `x = values[arg]`. The truncation error is `O(epsilon^2)`.
///
/// # Errors
/// * `ZeroEpsilon` if `epsilon` is zero.
/// * `ArgumentOutOfRange` if `arg` does not index into `values`.
pub fn central_difference<T, F>(
    f: F,
    values: &[T],
    arg: usize,
    epsilon: T,
) -> Result<T, MinigradError>
where
    T: Float,
    F: Fn(&[T]) -> T,
{
    if epsilon.is_zero() {
        return Err(MinigradError::ZeroEpsilon);
    }
    if arg >= values.len() {
        return Err(MinigradError::ArgumentOutOfRange {
            arg,
            len: values.len(),
        });
    }

    let mut plus = values.to_vec();
    let mut minus = values.to_vec();
    plus[arg] = plus[arg] + epsilon;
    minus[arg] = minus[arg] - epsilon;

    let two = T::one() + T::one();
    Ok((f(&plus) - f(&minus)) / (two * epsilon))
}

/// Checks an analytic gradient against central differences, one argument at a time.
///
/// `analytical[i]` must hold the derivative of `f` with respect to `values[i]`.
/// Fails on the first argument whose absolute difference exceeds `tolerance`.
pub fn check_grad<F>(
    f: F,
    values: &[f64],
    analytical: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[f64]) -> f64,
{
    if values.len() != analytical.len() {
        return Err(GradCheckError::ArityMismatch {
            values: values.len(),
            analytical: analytical.len(),
        });
    }

    for (arg, &analytical_grad) in analytical.iter().enumerate() {
        let numerical_grad = central_difference(&f, values, arg, epsilon)?;
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite { arg });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        // Negated comparison so a NaN analytical gradient is reported too.
        if !(difference <= tolerance) {
            return Err(GradCheckError::GradientMismatch {
                arg,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
