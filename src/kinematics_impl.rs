//! Implements the closed-form inverse and the iterative forward solver
//! for the three-armed parallel manipulator, following R.E. Stamper's
//! analysis of this mechanism.

use crate::constraints::Constraints;
use crate::geometry::GeometryConstants;
use crate::jacobian::Jacobian;
use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{ArmAngles, ArmId, JointAngles, Kinematics, Position};
use nalgebra::Vector3;

/// Tolerance below which a required denominator counts as zero.
const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// Convergence tolerance of the forward solve, in radians.
const FORWARD_TOLERANCE: f64 = 1e-10;

/// Iteration budget of the forward solve. Near the workspace center
/// convergence takes under five Newton steps; exhausting this budget means
/// the measured angles do not correspond to any position near the seed.
const FORWARD_MAX_ITERATIONS: usize = 50;

/// Kinematic solver for one manipulator instance. Owns the immutable
/// geometry and nothing else; all operations are pure functions of their
/// inputs, so a single instance can be shared freely between threads.
pub struct StamperKinematics {
    geometry: GeometryConstants,
    constraints: Option<Constraints>,
}

impl StamperKinematics {
    /// Creates a solver for the given manipulator dimensions.
    pub fn new(geometry: GeometryConstants) -> Self {
        StamperKinematics {
            geometry,
            constraints: None,
        }
    }

    /// Creates a solver that additionally rejects inverse solutions whose
    /// shoulder angles fall outside the given limits (physical joint
    /// stops).
    pub fn new_with_constraints(geometry: GeometryConstants, constraints: Constraints) -> Self {
        StamperKinematics {
            geometry,
            constraints: Some(constraints),
        }
    }

    /// The geometry this solver was built with, as needed for
    /// [`Jacobian::new`].
    pub fn geometry(&self) -> &GeometryConstants {
        &self.geometry
    }

    /// Solves one arm in its own local plane. The three arms are fully
    /// independent; the whole call fails if any single arm does.
    fn solve_arm(&self, arm: ArmId, position: &Position) -> Result<(f64, f64, f64), KinematicError> {
        let g = &self.geometry;
        let (sin_phi, cos_phi) = g.phi[arm.index()].sin_cos();

        // Rotate the position into the arm's plane, offset by the base
        // and platform radii. pw is the unchanged z.
        let pu = -g.r + cos_phi * position.x + sin_phi * position.y;
        let pv = -(g.s - cos_phi * position.y + sin_phi * position.x);
        let pw = position.z;

        // The knee angle follows directly from the out-of-plane equation.
        let theta3 = checked_acos((pv + g.f) / g.b, arm)?;

        // Effective length of the distal chain once the knee is known.
        let reach = g.b * theta3.sin() + g.d + g.e;

        // Tangent half-angle substitution turns the remaining planar
        // two-link equation into a quadratic in tan(theta1 / 2).
        let l0 = pw * pw + (pu + g.c - g.a).powi(2) - reach * reach;
        let l1 = -4.0 * g.a * pw;
        let l2 = pw * pw + (pu + g.c + g.a).powi(2) - reach * reach;

        let discriminant = l1 * l1 - 4.0 * l2 * l0;
        if discriminant < 0.0 {
            // No real root: the shoulder cannot fold far enough.
            return Err(KinematicError::UnreachablePosition { arm });
        }
        if l2.abs() < DEGENERACY_TOLERANCE {
            return Err(KinematicError::DegenerateEquation { arm });
        }
        let theta1 = 2.0 * ((-l1 - discriminant.sqrt()) / (2.0 * l2)).atan();

        if reach.abs() < DEGENERACY_TOLERANCE {
            return Err(KinematicError::DegenerateEquation { arm });
        }
        let theta2 = checked_acos(-(g.a * theta1.cos() - g.c - pu) / reach, arm)?;

        Ok((theta1, theta2, theta3))
    }

    /// All three arms, without the joint-limit check. The forward solver
    /// iterates through here so that configured limits cannot reject an
    /// intermediate Newton estimate.
    fn solve_all(&self, position: &Position) -> Result<JointAngles, KinematicError> {
        let mut angles = JointAngles::default();
        for arm in ArmId::ALL {
            let (theta1, theta2, theta3) = self.solve_arm(arm, position)?;
            let i = arm.index();
            angles.theta1[i] = theta1;
            angles.theta2[i] = theta2;
            angles.theta3[i] = theta3;
        }
        Ok(angles)
    }
}

/// Fails with [`KinematicError::UnreachablePosition`] instead of producing
/// NaN when the argument leaves [-1, 1]. Arguments of exactly ±1 are valid
/// (the arm is at its workspace boundary).
fn checked_acos(argument: f64, arm: ArmId) -> Result<f64, KinematicError> {
    if !(-1.0..=1.0).contains(&argument) {
        return Err(KinematicError::UnreachablePosition { arm });
    }
    Ok(argument.acos())
}

impl Kinematics for StamperKinematics {
    fn inverse(&self, position: &Position) -> Result<JointAngles, KinematicError> {
        let angles = self.solve_all(position)?;
        if let Some(constraints) = &self.constraints {
            if !constraints.compliant(&angles.theta1) {
                return Err(KinematicError::ConstraintViolation);
            }
        }
        Ok(angles)
    }

    fn forward_continuing(
        &self,
        theta1: &ArmAngles,
        previous: &Position,
    ) -> Result<Position, KinematicError> {
        let mut position = *previous;
        for _ in 0..FORWARD_MAX_ITERATIONS {
            let angles = self.solve_all(&position)?;
            let residual = Vector3::new(
                theta1[0] - angles.theta1[0],
                theta1[1] - angles.theta1[1],
                theta1[2] - angles.theta1[2],
            );
            if residual.amax() < FORWARD_TOLERANCE {
                return Ok(position);
            }
            // Newton step: the combined Jacobian maps Cartesian deltas to
            // shoulder-angle deltas, so the correction goes through its
            // inverse.
            let jacobian = Jacobian::new(&self.geometry, &angles)?;
            position += jacobian.apply_inverse(&residual)?;
        }
        Err(KinematicError::NotConverged {
            iterations: FORWARD_MAX_ITERATIONS,
        })
    }
}
