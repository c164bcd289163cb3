//! Convergence criteria for iterative root finders.

pub trait IsConverged {
    fn is_converged(&self, x_pre: f64, x_cur: f64) -> bool;
}

/// Converged once successive iterates are within an absolute epsilon.
///
/// The bound is inclusive, so an iterate landing exactly epsilon away from
/// its predecessor counts as converged.  A NaN iterate never converges.
pub struct DeltaX {
    epsilon_abs: f64,
}

impl DeltaX {
    pub fn new(epsilon_abs: f64) -> DeltaX {
        assert!(epsilon_abs > 0.0);
        assert!(epsilon_abs.is_finite());
        DeltaX { epsilon_abs }
    }

    pub fn epsilon_abs(&self) -> f64 {
        self.epsilon_abs
    }
}

impl IsConverged for DeltaX {
    fn is_converged(&self, x_pre: f64, x_cur: f64) -> bool {
        (x_pre - x_cur).abs() <= self.epsilon_abs
    }
}
