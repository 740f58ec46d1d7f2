extern crate nalgebra as na;

pub mod kinematics_traits {
    use super::*;
    use crate::kinematics_error::KinematicsError;
    use na::{Matrix3, Matrix4, Vector3};

    /// Pose of a link frame or of the end-effector: a 4x4 homogeneous transform.
    /// The top-left 3x3 block is the rotation, the top three entries of the last
    /// column are the translation, the bottom row is [0, 0, 0, 1].
    /// ```
    /// extern crate nalgebra as na;
    /// use na::Matrix4;
    ///
    /// type Pose = Matrix4<f64>;
    ///
    /// let identity_pose: Pose = Matrix4::identity();
    /// ```
    pub type Pose = Matrix4<f64>;

    /// Cartesian position of the end-effector, extracted from a [`Pose`].
    pub type Position = Vector3<f64>;

    /// Orientation of the end-effector as a 3x3 rotation matrix, extracted
    /// from a [`Pose`].
    pub type RotationMatrix = Matrix3<f64>;

    pub trait Kinematics {
        /// Number of actuated joints of this manipulator.
        fn dof(&self) -> usize;

        /// End-effector pose for the given joint angles (radians).
        /// The slice length must equal `dof()`.
        fn forward(&self, joints: &[f64]) -> Result<Pose, KinematicsError>;
    }
}
