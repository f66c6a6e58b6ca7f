//! Hardcoded geometry constants for known devices

use crate::geometry::GeometryConstants;
use std::f64::consts::PI;

#[allow(dead_code)]
impl GeometryConstants {
    /// Provides a zeroed template; fill every field before use.
    pub fn new() -> Self {
        GeometryConstants {
            a: 0.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 0.0,
            f: 0.0,
            r: 0.0,
            s: 0.0,
            phi: [0.0; 3],
        }
    }

    /// The desktop force-feedback controller this crate was written for:
    /// three arms spaced 120 degrees apart, first arm offset 15 degrees
    /// from the x-axis, dimensions in meters. Its usable workspace is
    /// roughly a 10 cm cube centered around z = 0.125 m.
    pub fn desktop_haptic_device() -> Self {
        GeometryConstants {
            a: 0.0603,
            b: 0.10422,
            c: 0.0111,
            d: 0.011345,
            e: 0.011345,
            f: 0.0252,
            r: 0.036621,
            s: 0.027331,
            phi: [PI / 12.0, PI / 12.0 + 2.0 * PI / 3.0, PI / 12.0 + 4.0 * PI / 3.0],
        }
    }
}
