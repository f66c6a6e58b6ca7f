use std::f64::consts::PI;

/// Physical joint stops of the three arms, one range per arm in
/// [`ArmId`](crate::kinematic_traits::ArmId) order.
#[derive(Clone)]
pub struct Constraints {
    /// Normalized lower limit. If more than upper limit, the range wraps-around through 0
    pub from: [f64; 3],

    /// Normalized upper limit. If less than lower limit, the range wraps-around through 0
    pub to: [f64; 3],
}

impl Constraints {
    pub fn new(from: [f64; 3], to: [f64; 3]) -> Self {
        let two_pi = 2.0 * PI;
        let from_normalized: [f64; 3] = from.map(|f| ((f % two_pi) + two_pi) % two_pi);
        let to_normalized: [f64; 3] = to.map(|t| ((t % two_pi) + two_pi) % two_pi);

        Constraints {
            from: from_normalized,
            to: to_normalized,
        }
    }

    pub fn compliant(&self, angles: &[f64; 3]) -> bool {
        let two_pi = 2.0 * PI;
        for i in 0..3 {
            if self.from[i] == self.to[i] {
                continue; // Arm without constraints, from == to
            }
            let angle = ((angles[i] % two_pi) + two_pi) % two_pi;
            if self.from[i] <= self.to[i] {
                if !(angle >= self.from[i] && angle <= self.to[i]) {
                    return false;
                }
            } else {
                if !(angle >= self.from[i] || angle <= self.to[i]) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_wrap_around() {
        let angles = [0.1 * PI, 0.2 * PI, 0.3 * PI];
        let from = [0.0, 0.15 * PI, 0.25 * PI];
        let to = [0.2 * PI, 0.3 * PI, 0.4 * PI];
        let limits = Constraints::new(from, to);
        assert!(limits.compliant(&angles));
    }

    #[test]
    fn test_with_wrap_around() {
        let angles = [0.9 * PI, 1.9 * PI, 0.05 * PI];
        let from = [0.8 * PI, 1.8 * PI, 1.9 * PI];
        let to = [0.1 * PI, 1.1 * PI, 0.2 * PI];
        let limits = Constraints::new(from, to);
        assert!(limits.compliant(&angles));
    }

    #[test]
    fn test_full_circle() {
        let angles = [0.0, 1.0 * PI, 0.5 * PI];
        let from = [0.0; 3];
        let to = [2.0 * PI; 3];
        let limits = Constraints::new(from, to);
        assert!(limits.compliant(&angles));
    }

    #[test]
    fn test_invalid_angles_no_wrap_around() {
        let angles = [0.15 * PI, 0.25 * PI, 0.55 * PI];
        let from = [0.2 * PI, 0.3 * PI, 0.6 * PI];
        let to = [0.1 * PI, 0.2 * PI, 0.5 * PI];
        let limits = Constraints::new(from, to);
        assert!(!limits.compliant(&angles));
    }

    #[test]
    fn test_negative_angle_normalizes() {
        // -10 degrees and 350 degrees are the same arm position.
        let angles = [(-10.0_f64).to_radians(), 0.0, 0.0];
        let from = [340.0_f64.to_radians(), 0.0, 0.0];
        let to = [355.0_f64.to_radians(), 0.0, 0.0];
        let limits = Constraints::new(from, to);
        assert!(limits.compliant(&angles));
    }
}
