//! Newton-Raphson root finding for scalar functions.
//!
//! A [`solver::RootFinder`] is an immutable configuration holding the target
//! function, its derivative (analytic, or approximated by a forward finite
//! difference), a starting point, a convergence tolerance, and an iteration
//! cap.  Functions are wrapped before use; see the `wrap` module for how
//! this works.
//!
//! # Examples
//!
//! With an analytic derivative:
//!
//! ```
//! use newtonfind::solver::RootFinder;
//!
//! let in_f = |x: f64| -x * x + 2.0 * x + 1.0;
//! let in_df = |x: f64| -2.0 * x + 2.0;
//!
//! let finder = RootFinder::with_derivative(&in_f, &in_df, 3.0, 1e-9, 20)
//!     .expect("valid configuration");
//! let root = finder.find_root();
//!
//! // root at x=1+sqrt(2)
//! assert!((root - 2.41421356237).abs() < 1e-9);
//! ```
//!
//! Without a derivative, a forward finite difference fills in:
//!
//! ```
//! use newtonfind::solver::RootFinder;
//!
//! let in_f = |x: f64| x.cos();
//!
//! let finder = RootFinder::new(&in_f, 1.0, 1e-6, 100).expect("valid configuration");
//! let root = finder.find_root();
//!
//! // root at x=pi/2
//! assert!((root - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
//! ```
//!
//! Non-convergence is reported as `f64::NAN` rather than an error.  Callers
//! must check the result with `is_nan()`.

pub mod convergence;
pub mod solver;
pub mod wrap;
