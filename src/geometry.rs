//! Defines the geometry constant data structure

/// Fixed dimensions of one manipulator instance, following the naming of
/// R.E. Stamper's thesis on the three-armed parallel manipulator. All
/// lengths share one unit (the reference device uses meters); angles are
/// in radians.
///
/// Constructed once at driver start-up and shared read-only by both
/// solvers; the solver code never hard-codes any of these values, so the
/// same solvers serve differently-dimensioned manipulators. See
/// [geometry_devices.rs](crate::geometry_devices) for concrete devices.
#[derive(Debug, Clone, Copy)]
pub struct GeometryConstants {
    /// Length of the driven (shoulder to elbow) link of each arm.
    pub a: f64,

    /// Length of the distal (elbow to platform) link of each arm.
    pub b: f64,

    /// In-plane offset from the shoulder axis to the arm frame origin.
    pub c: f64,

    /// Knee offset on the base side of the distal link.
    pub d: f64,

    /// Knee offset on the platform side of the distal link.
    /// Equal to `d` on symmetric designs, kept separate as configuration.
    pub e: f64,

    /// Out-of-plane offset between the platform attachment and the arm
    /// plane.
    pub f: f64,

    /// Base offset: distance from the fixed frame origin to each arm's
    /// shoulder axis.
    pub r: f64,

    /// Platform offset: distance from the platform center to each arm's
    /// attachment point.
    pub s: f64,

    /// Azimuthal offset of each arm around the base's central axis, in
    /// [`ArmId`](crate::kinematic_traits::ArmId) order. Conventionally
    /// spaced 120 degrees apart, but treated as data, not assumed.
    pub phi: [f64; 3],
}
