//! Newton-Raphson root finding.
//!
//! A [`RootFinder`] is built once from a function, an optional analytic
//! derivative, a starting point, a tolerance, and an iteration cap.  It is
//! immutable afterwards; [`RootFinder::find_root`] can be called any number
//! of times and always returns the same result for pure functions.

use crate::convergence::{DeltaX, IsConverged};
use crate::wrap::{RealDfEval, RealFnAndFirst, RealFnEval, RealFnForwardDiff};
use thiserror::Error;

/// Default starting point for the iteration.
pub const DEFAULT_START_POINT: f64 = 0.0;

/// Default convergence tolerance, also used as the finite-difference step.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Configuration errors reported at construction time.
///
/// Runtime non-convergence is not an error; it is reported as a NaN
/// sentinel by [`RootFinder::find_root`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Tolerance must be finite and strictly positive.  It doubles as the
    /// forward-difference step, so zero would poison every derivative.
    #[error("tolerance must be finite and > 0, got {got}")]
    InvalidTolerance { got: f64 },

    /// A zero iteration cap leaves no budget for even one Newton step.
    #[error("max_iterations must be > 0")]
    ZeroMaxIterations,

    /// Starting point must be finite.
    #[error("start point must be finite, got {got}")]
    NonFiniteStart { got: f64 },
}

fn validate(start: f64, tolerance: f64, max_iterations: usize) -> Result<(), ConfigError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(ConfigError::InvalidTolerance { got: tolerance });
    }
    if max_iterations == 0 {
        return Err(ConfigError::ZeroMaxIterations);
    }
    if !start.is_finite() {
        return Err(ConfigError::NonFiniteStart { got: start });
    }
    Ok(())
}

/// Immutable Newton-Raphson configuration.
///
/// The user function is kept compatible with the iteration using the trait
/// bounds defined in the `wrap` module.  Whether the derivative is analytic
/// or finite-difference is decided once, at construction, by the choice of
/// wrapper type.
pub struct RootFinder<F>
where
    F: RealFnEval + RealDfEval,
{
    f: F,
    start: f64,
    conv: DeltaX,
    max_iterations: usize,
}

impl<F> RootFinder<F>
where
    F: RealFnEval + RealDfEval,
{
    /// Builds a finder from anything already implementing the evaluation
    /// traits.  Most callers want [`RootFinder::new`] or
    /// [`RootFinder::with_derivative`] instead.
    pub fn from_parts(
        f: F,
        start: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<RootFinder<F>, ConfigError> {
        validate(start, tolerance, max_iterations)?;
        Ok(RootFinder {
            f,
            start,
            conv: DeltaX::new(tolerance),
            max_iterations,
        })
    }

    pub fn start_point(&self) -> f64 {
        self.start
    }

    pub fn tolerance(&self) -> f64 {
        self.conv.epsilon_abs()
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Runs the Newton iteration from the configured starting point.
    ///
    /// Returns the first iterate within tolerance of its predecessor, or
    /// `f64::NAN` if the iteration cap is exhausted first.  A zero
    /// derivative is deliberately not intercepted: the division yields a
    /// non-finite iterate, which can never pass the convergence test and so
    /// ends up in the NaN path.
    pub fn find_root(&self) -> f64 {
        let mut x_pre = self.start;

        // seed guarantees the first convergence check fails, so the cap
        // bounds the number of Newton steps actually taken
        let mut x_cur = x_pre + 2.0 * self.conv.epsilon_abs();

        for k in 0..self.max_iterations {
            if self.conv.is_converged(x_pre, x_cur) {
                log::debug!("converged after {} iterations: x={}", k, x_cur);
                return x_cur;
            }

            x_pre = x_cur;
            x_cur = x_pre - self.f.eval_f(x_pre) / self.f.eval_df(x_pre);
            log::trace!("iteration {}: x={}", k, x_cur);
        }

        log::debug!(
            "iteration limit {} reached without convergence",
            self.max_iterations
        );
        f64::NAN
    }
}

impl<'a, F1, F2> RootFinder<RealFnAndFirst<'a, F1, F2>>
where
    F1: Fn(f64) -> f64,
    F2: Fn(f64) -> f64,
{
    /// Builds a finder with an analytic first derivative.
    pub fn with_derivative(
        f: &'a F1,
        df: &'a F2,
        start: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<RootFinder<RealFnAndFirst<'a, F1, F2>>, ConfigError> {
        RootFinder::from_parts(RealFnAndFirst::new(f, df), start, tolerance, max_iterations)
    }
}

impl<'a, F> RootFinder<RealFnForwardDiff<'a, F>>
where
    F: Fn(f64) -> f64,
{
    /// Builds a finder from just the function, using [`DEFAULT_START_POINT`],
    /// [`DEFAULT_TOLERANCE`], and [`DEFAULT_MAX_ITERATIONS`].  Cannot fail:
    /// the defaults always validate.
    pub fn with_defaults(f: &'a F) -> RootFinder<RealFnForwardDiff<'a, F>> {
        RootFinder {
            f: RealFnForwardDiff::new(f, DEFAULT_TOLERANCE),
            start: DEFAULT_START_POINT,
            conv: DeltaX::new(DEFAULT_TOLERANCE),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Builds a finder without an analytic derivative.  The derivative is
    /// approximated by a forward finite difference using `tolerance` as the
    /// step.
    pub fn new(
        f: &'a F,
        start: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<RootFinder<RealFnForwardDiff<'a, F>>, ConfigError> {
        validate(start, tolerance, max_iterations)?;
        RootFinder::from_parts(
            RealFnForwardDiff::new(f, tolerance),
            start,
            tolerance,
            max_iterations,
        )
    }
}
