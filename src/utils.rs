//! Helper functions

use crate::kinematic_traits::{ArmAngles, JointAngles};

/// Checks if all angles in the set are finite. All solver results already
/// satisfy this; the check exists for values assembled by hand or read
/// from hardware.
pub fn is_valid(angles: &JointAngles) -> bool {
    angles
        .theta1
        .iter()
        .chain(angles.theta2.iter())
        .chain(angles.theta3.iter())
        .all(|q| q.is_finite())
}

/// Print a solved angle set, one row per joint, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_angles(angles: &JointAngles) {
    for (name, row) in [
        ("theta1", &angles.theta1),
        ("theta2", &angles.theta2),
        ("theta3", &angles.theta3),
    ] {
        let mut row_str = String::new();
        for value in row {
            row_str.push_str(&format!("{:7.2} ", value.to_degrees()));
        }
        println!("{}: [{}]", name, row_str.trim_end());
    }
}

/// Print per-arm values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_arm_angles(values: &ArmAngles) {
    let mut row_str = String::new();
    for value in values {
        row_str.push_str(&format!("{:7.2} ", value.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Allows to specify per-arm values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 3]) -> ArmAngles {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}
