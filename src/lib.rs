//! Rust implementation of the kinematic core for three-armed parallel-link
//! haptic devices (desktop force-feedback controllers).
//!
//! This work builds upon R.E. Stamper's PhD thesis _A Three Degree of
//! Freedom Parallel Manipulator with Only Translational Degrees of Freedom_
//! (University of Maryland, 1997), which derives both the closed-form
//! inverse kinematics and the two-matrix Jacobian decomposition used here.
//!
//! # Features
//!
//! - Closed-form inverse kinematics: no iteration, no initial guess, exact
//!   for any reachable input. Every failure (unreachable position,
//!   degenerate equation, singular configuration) is a typed error; NaN is
//!   never allowed to leak into a force command.
//! - The combined Jacobian `J = JI⁻¹ · JF`, rebuilt per control cycle, with
//!   forward and checked-inverse application for velocity and force/torque
//!   mapping.
//! - An iterative forward solver (measured shoulder angles to Cartesian
//!   position), continuing from the previous cycle's position.
//! - Joint angles can be checked against constraints, rejecting solutions
//!   beyond the physical stops.
//! - Pure, allocation-free hot path, fit for a 1 kHz control loop; all
//!   state is immutable geometry, so solvers are freely shared between
//!   threads.
//!
//! # Parameters
//!
//! The manipulator is described by eight scalar dimensions (_a, b, c, d, e,
//! f, r, s_, following the thesis) plus three azimuthal arm offsets. Fill
//! out a [`geometry::GeometryConstants`] or start from a named device in
//! [`geometry_devices`].

pub mod geometry;
pub mod geometry_devices;

pub mod kinematic_traits;
pub mod kinematic_error;
pub mod kinematics_impl;

pub mod constraints;

pub mod jacobian;

pub mod utils;
