use approx::abs_diff_eq;
use num_traits::Float;

/// Largest absolute difference [`is_close`] still accepts (inclusive).
pub const CLOSE_TOLERANCE: f64 = 1e-2;

// --- Arithmetic ---

pub fn mul<T: Float>(x: T, y: T) -> T {
    x * y
}

pub fn id<T: Float>(x: T) -> T {
    x
}

pub fn add<T: Float>(x: T, y: T) -> T {
    x + y
}

pub fn neg<T: Float>(x: T) -> T {
    -x
}

/// Returns the larger of `x` and `y`; `y` when they compare equal.
pub fn max<T: Float>(x: T, y: T) -> T {
    if x > y {
        x
    } else {
        y
    }
}

pub fn inv<T: Float>(x: T) -> T {
    x.recip()
}

// --- Comparison ---

/// `1.0` if `x < y`, else `0.0`.
pub fn lt<T: Float>(x: T, y: T) -> T {
    if x < y {
        T::one()
    } else {
        T::zero()
    }
}

/// `1.0` if `x == y`, else `0.0`.
pub fn eq<T: Float>(x: T, y: T) -> T {
    if x == y {
        T::one()
    } else {
        T::zero()
    }
}

/// True when `|x - y| <= CLOSE_TOLERANCE`.
pub fn is_close(x: f64, y: f64) -> bool {
    abs_diff_eq!(x, y, epsilon = CLOSE_TOLERANCE)
}

// --- Activations and transcendental functions ---

/// Logistic sigmoid `1 / (1 + e^-x)`.
///
/// Evaluated as `e^x / (1 + e^x)` for negative inputs so that large negative
/// values do not overflow `e^-x`.
pub fn sigmoid<T: Float>(x: T) -> T {
    if x >= T::zero() {
        T::one() / (T::one() + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::one() + e)
    }
}

pub fn relu<T: Float>(x: T) -> T {
    max(T::zero(), x)
}

pub fn log<T: Float>(x: T) -> T {
    x.ln()
}

pub fn exp<T: Float>(x: T) -> T {
    x.exp()
}

// --- Derivative rules ---
// Each `*_back(x, d)` returns `d * f'(x)`, where `d` is the incoming derivative.

pub fn log_back<T: Float>(x: T, d: T) -> T {
    d / x
}

pub fn inv_back<T: Float>(x: T, d: T) -> T {
    -d / (x * x)
}

/// Passes `d` through unless `x` is negative. At `x == 0` the derivative is taken as 1.
pub fn relu_back<T: Float>(x: T, d: T) -> T {
    if x < T::zero() {
        T::zero()
    } else {
        d
    }
}

pub fn sigmoid_back<T: Float>(x: T, d: T) -> T {
    let s = sigmoid(x);
    d * s * (T::one() - s)
}

pub fn exp_back<T: Float>(x: T, d: T) -> T {
    d * x.exp()
}

#[cfg(test)]
#[path = "scalar_test.rs"]
mod tests;
