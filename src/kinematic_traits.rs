//! Core types and the solver trait shared by the kinematic components.

extern crate nalgebra as na;

use crate::kinematic_error::KinematicError;
use na::Vector3;

/// A point, velocity or force in the device's Cartesian workspace.
/// There is no inherent unit; the interpretation depends on the call site.
pub type Position = Vector3<f64>;

/// One scalar per arm, in the fixed [`ArmId`] order. Used for the measured
/// shoulder angles coming from the encoders and for torque commands going
/// back to the actuators.
pub type ArmAngles = [f64; 3];

/// Identifies one of the three kinematic chains connecting the base to the
/// moving platform. The order is fixed and matches the order of the
/// azimuthal offsets in [`crate::geometry::GeometryConstants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmId {
    Arm1,
    Arm2,
    Arm3,
}

impl ArmId {
    /// All arms in index order, for per-arm loops.
    pub const ALL: [ArmId; 3] = [ArmId::Arm1, ArmId::Arm2, ArmId::Arm3];

    /// Index into per-arm `[f64; 3]` arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The joint angles of all three arms, as produced by one inverse
/// kinematics call. The three arms are mutually consistent only when they
/// come from the same call; never mix angles from different cycles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    /// Shoulder angle of each arm (the joint the actuators drive).
    pub theta1: [f64; 3],
    /// Elbow angle of each arm.
    pub theta2: [f64; 3],
    /// Out-of-plane knee angle of each arm.
    pub theta3: [f64; 3],
}

impl JointAngles {
    /// The `(theta1, theta2, theta3)` triple of one arm.
    #[inline]
    pub fn arm(&self, arm: ArmId) -> (f64, f64, f64) {
        let i = arm.index();
        (self.theta1[i], self.theta2[i], self.theta3[i])
    }
}

/// Both solve directions of the manipulator. Implementations are pure
/// functions of their inputs and the immutable geometry; they may be called
/// from multiple threads without synchronization.
pub trait Kinematics {
    /// Closed-form inverse kinematics: Cartesian position to the joint
    /// angles of all three arms. Fails if any arm cannot reach the
    /// position.
    fn inverse(&self, position: &Position) -> Result<JointAngles, KinematicError>;

    /// Iterative forward kinematics: measured shoulder angles to the
    /// Cartesian position, continuing from the previous cycle's position.
    /// The control loop always has last cycle's position at hand, which
    /// keeps the iteration short (a handful of Newton steps near the
    /// workspace center).
    fn forward_continuing(
        &self,
        theta1: &ArmAngles,
        previous: &Position,
    ) -> Result<Position, KinematicError>;
}
