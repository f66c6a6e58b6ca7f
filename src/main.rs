use anyhow::Result;
use nalgebra::Vector3;
use rs_stamper_kinematics::geometry::GeometryConstants;
use rs_stamper_kinematics::jacobian::Jacobian;
use rs_stamper_kinematics::kinematic_traits::{Kinematics, Position};
use rs_stamper_kinematics::kinematics_impl::StamperKinematics;
use rs_stamper_kinematics::utils::dump_angles;

/// Usage example.
fn main() -> Result<()> {
    let device = StamperKinematics::new(GeometryConstants::desktop_haptic_device());

    // One control cycle, spelled out: position in, joint angles and
    // per-arm torques out.
    let position: Position = Vector3::new(0.0, 0.0, 0.125);
    println!("Joint angles at the workspace center (0, 0, 0.125):");
    let angles = device.inverse(&position)?;
    dump_angles(&angles);

    let jacobian = Jacobian::new(device.geometry(), &angles)?;
    let force = Vector3::new(0.0, 0.0, 1.0);
    let torques = jacobian.apply_inverse(&force)?;
    println!(
        "Mapping a 1 N force along +z: [{:.4}, {:.4}, {:.4}]",
        torques.x, torques.y, torques.z
    );

    // The forward direction: feed the measured shoulder angles back,
    // seeding with a deliberately offset previous position.
    let recovered = device.forward_continuing(&angles.theta1, &Vector3::new(0.01, -0.01, 0.11))?;
    println!(
        "Position recovered from shoulder angles: ({:.6}, {:.6}, {:.6})",
        recovered.x, recovered.y, recovered.z
    );

    Ok(())
}
