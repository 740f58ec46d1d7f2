use crate::kinematic_traits::kinematics_traits::{Kinematics, Pose, Position, RotationMatrix};
use crate::kinematics_error::KinematicsError;
use crate::parameters::dh_kinematics::DhTable;
use nalgebra::Matrix4;

/// Serial manipulator defined by a Denavit-Hartenberg parameter table.
/// The single owner of the chain composition; both the analysis layer and
/// any presentation code consume poses through this type.
pub struct DhKinematics {
    table: DhTable,
}

impl DhKinematics {
    /// Creates a new `DhKinematics` instance for the given DH table.
    pub fn new(table: DhTable) -> Self {
        DhKinematics { table }
    }

    pub fn table(&self) -> &DhTable {
        &self.table
    }
}

/// Homogeneous transform of a single joint from its DH parameters.
/// Total for all real inputs.
pub fn dh_transform(a: f64, alpha: f64, d: f64, theta: f64) -> Pose {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_alpha, cos_alpha) = alpha.sin_cos();

    Matrix4::new(
        cos_theta, -sin_theta * cos_alpha, sin_theta * sin_alpha, a * cos_theta,
        sin_theta, cos_theta * cos_alpha, -cos_theta * sin_alpha, a * sin_theta,
        0.0, sin_alpha, cos_alpha, d,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Splits a pose into its translation vector and rotation block.
/// Both are copied out, so the pose may be dropped or overwritten afterwards.
pub fn extract_position_and_orientation(pose: &Pose) -> (Position, RotationMatrix) {
    let position = pose.fixed_view::<3, 1>(0, 3).into_owned();
    let rotation = pose.fixed_view::<3, 3>(0, 0).into_owned();
    (position, rotation)
}

impl Kinematics for DhKinematics {
    fn dof(&self) -> usize {
        self.table.dof()
    }

    fn forward(&self, joints: &[f64]) -> Result<Pose, KinematicsError> {
        if joints.len() != self.table.dof() {
            return Err(KinematicsError::JointCountMismatch {
                expected: self.table.dof(),
                found: joints.len(),
            });
        }

        let mut accumulated: Pose = Matrix4::identity();
        for (link, joint_angle) in self.table.links().iter().zip(joints) {
            let theta_total = link.theta_offset + joint_angle;
            // Parent-to-child chain, the order of multiplication matters
            accumulated *= dh_transform(link.a, link.alpha, link.d, theta_total);
        }
        Ok(accumulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::dh_kinematics::DhLink;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

    const TOLERANCE: f64 = 1e-9;

    fn reference_arm() -> DhKinematics {
        DhKinematics::new(DhTable::articulated_5dof())
    }

    #[test]
    fn test_zero_configuration_golden_position() {
        let robot = reference_arm();
        let pose = robot.forward(&[0.0; 5]).unwrap();
        let (position, _) = extract_position_and_orientation(&pose);

        // At zero all link lengths stack along X and all offsets along Z:
        // (0+5+10+2+1, 0, 10), composable by hand from the chain.
        assert!((position - Vector3::new(18.0, 0.0, 10.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_zero_configuration_golden_rotation() {
        let robot = reference_arm();
        let pose = robot.forward(&[0.0; 5]).unwrap();
        let (_, rotation) = extract_position_and_orientation(&pose);

        // Two alpha = pi/2 twists compose into a rotation flipping Y and Z.
        let expected = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, -1.0, 0.0,
            0.0, 0.0, -1.0,
        );
        assert!((rotation - expected).norm() < TOLERANCE);
    }

    #[test]
    fn test_rotation_block_is_orthogonal_with_unit_determinant() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};
        use std::f64::consts::PI;

        let robot = reference_arm();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let joints: Vec<f64> = (0..5).map(|_| rng.gen_range(-PI..PI)).collect();
            let pose = robot.forward(&joints).unwrap();
            let (_, rotation) = extract_position_and_orientation(&pose);

            let gram = rotation.transpose() * rotation;
            assert!((gram - Matrix3::identity()).norm() < TOLERANCE);
            assert!((rotation.determinant() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_bottom_row_stays_homogeneous() {
        let robot = reference_arm();
        let pose = robot
            .forward(&[FRAC_PI_6, FRAC_PI_4, FRAC_PI_3, FRAC_PI_2, FRAC_PI_4])
            .unwrap();
        assert_eq!(pose[(3, 0)], 0.0);
        assert_eq!(pose[(3, 1)], 0.0);
        assert_eq!(pose[(3, 2)], 0.0);
        assert_eq!(pose[(3, 3)], 1.0);
    }

    #[test]
    fn test_joint_count_mismatch_fails_fast() {
        let robot = reference_arm();
        for wrong_length in [0, 1, 4, 6, 9] {
            let joints = vec![0.0; wrong_length];
            match robot.forward(&joints) {
                Err(KinematicsError::JointCountMismatch { expected, found }) => {
                    assert_eq!(expected, 5);
                    assert_eq!(found, wrong_length);
                }
                Ok(_) => panic!("accepted {} joint angles for a 5 joint arm", wrong_length),
            }
        }
    }

    #[test]
    fn test_joint_order_is_not_commutative() {
        let table = DhTable::articulated_5dof();
        let mut swapped_links: Vec<DhLink> = table.links().to_vec();
        swapped_links.swap(1, 3); // two non-identity links
        let swapped = DhTable::new(swapped_links);

        let robot = DhKinematics::new(table);
        let permuted = DhKinematics::new(swapped);

        let mut joints = [FRAC_PI_6, FRAC_PI_4, FRAC_PI_3, FRAC_PI_6, FRAC_PI_4];
        let pose = robot.forward(&joints).unwrap();
        joints.swap(1, 3);
        let permuted_pose = permuted.forward(&joints).unwrap();

        assert!((pose - permuted_pose).norm() > 1e-6);
    }

    #[test]
    fn test_second_joint_rotated_differs_from_zero_pose() {
        let robot = reference_arm();
        let (zero_position, _) =
            extract_position_and_orientation(&robot.forward(&[0.0; 5]).unwrap());
        let (raised_position, _) = extract_position_and_orientation(
            &robot.forward(&[0.0, FRAC_PI_2, 0.0, 0.0, 0.0]).unwrap(),
        );
        assert!((zero_position - raised_position).norm() > 1.0);
    }

    #[test]
    fn test_theta_offset_adds_to_actuation_angle() {
        // A single joint with theta_offset pi/2 at zero actuation must match
        // the same joint with zero offset actuated by pi/2.
        let offset_arm =
            DhKinematics::new(DhTable::from_rows(&[[1.0, 0.0, 0.0, FRAC_PI_2]]));
        let plain_arm = DhKinematics::new(DhTable::single_revolute());

        let with_offset = offset_arm.forward(&[0.0]).unwrap();
        let actuated = plain_arm.forward(&[FRAC_PI_2]).unwrap();
        assert!((with_offset - actuated).norm() < TOLERANCE);
    }

    #[test]
    fn test_extracted_values_survive_pose_mutation() {
        let robot = reference_arm();
        let mut pose = robot.forward(&[0.0; 5]).unwrap();
        let (position, rotation) = extract_position_and_orientation(&pose);
        pose.fill(0.0);
        assert!((position - Vector3::new(18.0, 0.0, 10.0)).norm() < TOLERANCE);
        assert!((rotation[(0, 0)] - 1.0).abs() < TOLERANCE);
    }
}
