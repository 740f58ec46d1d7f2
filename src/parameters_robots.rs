//! Hardcoded DH tables for a few arms

pub mod dh_kinematics {
    use crate::parameters::dh_kinematics::DhTable;
    use std::f64::consts::FRAC_PI_2;

    #[allow(dead_code)]
    impl DhTable {
        /// Reference 5-DOF articulated arm, dimensions in millimeters.
        /// Base column of 10 mm, two in-plane links of 5 and 10 mm, a twisted
        /// 2 mm wrist link and a 1 mm end-effector link.
        pub fn articulated_5dof() -> Self {
            DhTable::from_rows(&[
                [0.0, FRAC_PI_2, 10.0, 0.0],
                [5.0, 0.0, 0.0, 0.0],
                [10.0, 0.0, 0.0, 0.0],
                [2.0, FRAC_PI_2, 0.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
            ])
        }

        /// Planar arm with all joint axes parallel to Z; every reachable point
        /// stays in the XY plane. Link lengths 2, 1.5 and 1.
        pub fn planar_3dof() -> Self {
            DhTable::from_rows(&[
                [2.0, 0.0, 0.0, 0.0],
                [1.5, 0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0, 0.0],
            ])
        }

        /// Single revolute joint with a unit-length link; the end-effector
        /// traces the unit circle in the XY plane.
        pub fn single_revolute() -> Self {
            DhTable::from_rows(&[[1.0, 0.0, 0.0, 0.0]])
        }
    }
}
