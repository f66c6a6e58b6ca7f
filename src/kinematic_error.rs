//! Error taxonomy of the kinematic core.

use crate::kinematic_traits::ArmId;

/// A computation that cannot proceed for the given input. Never
/// process-fatal: the owning control loop decides what to do with the
/// cycle (hold the last valid force, flag a fault, skip). Retrying with
/// the same input fails identically, so the core never retries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicError {
    /// The requested Cartesian position is outside the reachable set of
    /// this arm: an arccos argument left [-1, 1], or the quadratic for the
    /// shoulder angle has no real root.
    UnreachablePosition { arm: ArmId },

    /// A denominator the closed-form equations require to be non-zero is
    /// zero or within numerical tolerance of it.
    DegenerateEquation { arm: ArmId },

    /// The manipulator is at or near a kinematic singularity: a leg-angle
    /// Jacobian entry or the combined Jacobian determinant is within
    /// tolerance of zero, so the velocity/force mapping is undefined.
    SingularConfiguration,

    /// The iterative forward solve did not reach the angle tolerance
    /// within its iteration budget.
    NotConverged { iterations: usize },

    /// The solved angles violate the configured joint limits.
    ConstraintViolation,
}

impl std::fmt::Display for KinematicError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicError::UnreachablePosition { arm } => {
                write!(f, "Position not reachable by arm {:?}", arm)
            }
            KinematicError::DegenerateEquation { arm } => {
                write!(f, "Degenerate kinematic equation for arm {:?}", arm)
            }
            KinematicError::SingularConfiguration => {
                write!(f, "Singular configuration, Jacobian not invertible")
            }
            KinematicError::NotConverged { iterations } => {
                write!(f, "Forward solve did not converge in {} iterations", iterations)
            }
            KinematicError::ConstraintViolation => {
                write!(f, "Solution violates the configured joint limits")
            }
        }
    }
}

impl std::error::Error for KinematicError {}
