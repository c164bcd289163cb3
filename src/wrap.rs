//! Wrappers binding user closures to the evaluation traits.
//!
//! The solver is written against the `RealFnEval` and `RealDfEval` traits.
//! Use [`RealFnAndFirst`] when an analytic first derivative is available and
//! [`RealFnForwardDiff`] when it is not.

/// Trait evaluating: f(x) with x in R^1.
pub trait RealFnEval {
    fn eval_f(&self, x: f64) -> f64;
}

/// Trait evaluating the derivative: df(x) with x in R^1.
pub trait RealDfEval {
    fn eval_df(&self, x: f64) -> f64;
}

/// Wraps functions to implement RealFnEval and RealDfEval.
pub struct RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub f: &'a F1,
    pub df: &'a F2,
}

impl<'a, F1, F2> RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F1, df: &'a F2) -> RealFnAndFirst<'a, F1, F2> {
        RealFnAndFirst { f, df }
    }
}

impl<'a, F1, F2> RealFnEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<'a, F1, F2> RealDfEval for RealFnAndFirst<'a, F1, F2>
where
    F1: 'a + Fn(f64) -> f64,
    F2: 'a + Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        (self.df)(x)
    }
}

/// Wraps a function to implement RealFnEval and RealDfEval, approximating
/// the derivative by a forward finite difference with fixed step:
/// df(x) = (f(x+step) - f(x)) / step.
pub struct RealFnForwardDiff<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub f: &'a F,
    step: f64,
}

impl<'a, F> RealFnForwardDiff<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    pub fn new(f: &'a F, step: f64) -> RealFnForwardDiff<'a, F> {
        assert!(step > 0.0);
        assert!(step.is_finite());
        RealFnForwardDiff { f, step }
    }
}

impl<'a, F> RealFnEval for RealFnForwardDiff<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_f(&self, x: f64) -> f64 {
        (self.f)(x)
    }
}

impl<'a, F> RealDfEval for RealFnForwardDiff<'a, F>
where
    F: 'a + Fn(f64) -> f64,
{
    fn eval_df(&self, x: f64) -> f64 {
        ((self.f)(x + self.step) - (self.f)(x)) / self.step
    }
}
