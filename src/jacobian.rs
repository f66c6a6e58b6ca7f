//! The combined Jacobian of the parallel manipulator: the 3x3 linear map
//! between joint-space and Cartesian-space velocity/force vectors at one
//! fixed joint-angle set.

extern crate nalgebra as na;

use crate::geometry::GeometryConstants;
use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{ArmId, JointAngles, Position};
use na::{Matrix3, RowVector3};

/// Leg-angle entries and determinants below this magnitude count as
/// singular.
pub const SINGULARITY_TOLERANCE: f64 = 1e-9;

/// The combined Jacobian `J = JI⁻¹ · JF` built from one [`JointAngles`]
/// set. Valid only for the angle set it was derived from; the control loop
/// rebuilds it every cycle, since the device moves continuously.
pub struct Jacobian {
    matrix: Matrix3<f64>,
}

impl Jacobian {
    /// Builds the combined Jacobian from the two-matrix decomposition: JF
    /// (one row per arm, relating the Cartesian and joint velocities) and
    /// the diagonal JI (relating leg-angle and joint velocities). JI being
    /// diagonal, the combination is a per-arm scalar division; an entry
    /// within [`SINGULARITY_TOLERANCE`] of zero is a singular
    /// configuration and fails the build.
    pub fn new(geometry: &GeometryConstants, angles: &JointAngles) -> Result<Self, KinematicError> {
        let mut matrix = Matrix3::zeros();
        for arm in ArmId::ALL {
            let leg_entry = leg_angle_entry(geometry, angles, arm);
            if leg_entry.abs() < SINGULARITY_TOLERANCE {
                return Err(KinematicError::SingularConfiguration);
            }
            matrix.set_row(
                arm.index(),
                &(joint_frame_row(geometry, angles, arm) / leg_entry),
            );
        }
        Ok(Jacobian { matrix })
    }

    /// The underlying matrix, for diagnostics.
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Multiplies the combined Jacobian by a vector: the velocity mapping
    /// between the two spaces at this configuration.
    pub fn apply(&self, vector: &Position) -> Position {
        self.matrix * vector
    }

    /// Multiplies the inverse of the combined Jacobian by a vector; the
    /// force-feedback loop runs this every cycle to exchange a desired
    /// Cartesian force against per-arm actuator torques. Fails with
    /// [`KinematicError::SingularConfiguration`] instead of returning a
    /// numerically meaningless result when the matrix is not invertible.
    pub fn apply_inverse(&self, vector: &Position) -> Result<Position, KinematicError> {
        if self.matrix.determinant().abs() < SINGULARITY_TOLERANCE {
            return Err(KinematicError::SingularConfiguration);
        }
        let inverse = self
            .matrix
            .try_inverse()
            .ok_or(KinematicError::SingularConfiguration)?;
        Ok(inverse * vector)
    }
}

/// One row of JF for the given arm: the world-frame direction of the arm's
/// distal link at the current angles.
fn joint_frame_row(geometry: &GeometryConstants, angles: &JointAngles, arm: ArmId) -> RowVector3<f64> {
    let (_, theta2, theta3) = angles.arm(arm);
    let (sin_phi, cos_phi) = geometry.phi[arm.index()].sin_cos();
    let (sin2, cos2) = theta2.sin_cos();
    let (sin3, cos3) = theta3.sin_cos();
    RowVector3::new(
        cos2 * sin3 * cos_phi - cos3 * sin_phi,
        cos3 * cos_phi + cos2 * sin3 * sin_phi,
        sin2 * sin3,
    )
}

/// The diagonal JI entry of the given arm. Zero when the elbow aligns with
/// the shoulder (theta2 == theta1) or the knee folds flat (theta3 == 0).
fn leg_angle_entry(geometry: &GeometryConstants, angles: &JointAngles, arm: ArmId) -> f64 {
    let (theta1, theta2, theta3) = angles.arm(arm);
    geometry.a * (theta2 - theta1).sin() * theta3.sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn unit_geometry() -> GeometryConstants {
        GeometryConstants {
            a: 1.0,
            b: 1.0,
            phi: [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0],
            ..GeometryConstants::new()
        }
    }

    /// The symmetric pose the unit geometry takes at (0, 0, sqrt(2)).
    fn neutral_angles() -> JointAngles {
        JointAngles {
            theta1: [FRAC_PI_4; 3],
            theta2: [3.0 * FRAC_PI_4; 3],
            theta3: [FRAC_PI_2; 3],
        }
    }

    #[test]
    fn builds_expected_rows_at_neutral() {
        let jacobian = Jacobian::new(&unit_geometry(), &neutral_angles()).expect("non-singular");
        let half_sqrt2 = 0.5_f64.sqrt();
        // Arm 1 sits at phi = 0 with the knee square: its JI entry is
        // exactly a, and its JF row reduces to (cos(theta2), 0, sin(theta2)).
        let row = jacobian.matrix().row(0);
        assert!((row[0] + half_sqrt2).abs() < 1e-12);
        assert!(row[1].abs() < 1e-12);
        assert!((row[2] - half_sqrt2).abs() < 1e-12);
    }

    #[test]
    fn determinant_matches_closed_form() {
        let jacobian = Jacobian::new(&unit_geometry(), &neutral_angles()).expect("non-singular");
        // det J = (sqrt(2)/2)^3 * 3 * sqrt(3) / 2 at this pose.
        let expected = 0.5_f64.sqrt().powi(3) * 3.0 * 3.0_f64.sqrt() / 2.0;
        assert!((jacobian.matrix().determinant() - expected).abs() < 1e-9);
    }

    #[test]
    fn inverse_undoes_forward() {
        let jacobian = Jacobian::new(&unit_geometry(), &neutral_angles()).expect("non-singular");
        let vector = Vector3::new(0.25, -0.4, 0.3);
        let recovered = jacobian
            .apply_inverse(&jacobian.apply(&vector))
            .expect("invertible");
        assert!((recovered - vector).amax() < 1e-10);
    }

    #[test]
    fn flat_knee_is_singular() {
        let mut angles = neutral_angles();
        angles.theta3 = [0.0; 3];
        let result = Jacobian::new(&unit_geometry(), &angles);
        assert!(matches!(result, Err(KinematicError::SingularConfiguration)));
    }

    #[test]
    fn aligned_shoulder_and_elbow_is_singular() {
        let mut angles = neutral_angles();
        angles.theta2 = angles.theta1;
        let result = Jacobian::new(&unit_geometry(), &angles);
        assert!(matches!(result, Err(KinematicError::SingularConfiguration)));
    }

    #[test]
    fn singular_combined_matrix_fails_inversion() {
        // All three JF rows collapse onto the z-axis while every JI entry
        // stays at a full 1.0, so the build succeeds but the combined
        // matrix has no inverse.
        let angles = JointAngles {
            theta1: [0.0; 3],
            theta2: [FRAC_PI_2; 3],
            theta3: [FRAC_PI_2; 3],
        };
        let jacobian = Jacobian::new(&unit_geometry(), &angles).expect("JI is regular here");
        let result = jacobian.apply_inverse(&Vector3::new(0.0, 0.0, 1.0));
        assert!(matches!(result, Err(KinematicError::SingularConfiguration)));
    }
}
