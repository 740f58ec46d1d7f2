extern crate nalgebra as na;
use crate::kinematic_traits::kinematics_traits::{Kinematics, Position};
use crate::kinematics_error::KinematicsError;
use crate::kinematics_impl::extract_position_and_orientation;
use na::linalg::SVD;
use na::Matrix3xX;
use rayon::prelude::*;

/// Finite difference step in radians used when the caller does not supply one.
/// Small enough for accurate differencing, large enough to stay clear of
/// floating point cancellation.
pub const DEFAULT_DELTA: f64 = 0.001;

/// Condition numbers above this default are treated as "near a singularity"
/// by [`Jacobian::is_near_singular`]. A heuristic cut-off, configurable.
pub const DEFAULT_SINGULARITY_THRESHOLD: f64 = 100.0;

/// Struct representing the positional Jacobian matrix
pub struct Jacobian {
    /// A 3xN matrix, N being the joint count of the manipulator.
    ///
    /// The Jacobian matrix maps joint angle perturbations to displacements of
    /// the end-effector position. Each column corresponds to a joint, each row
    /// to a Cartesian axis.
    matrix: Matrix3xX<f64>,
}

impl Jacobian {
    /// Constructs a new Jacobian struct by estimating the Jacobian matrix for
    /// the given manipulator and joint configuration via central differences.
    ///
    /// # Arguments
    ///
    /// * `robot` - A reference to the manipulator implementing the Kinematics trait
    /// * `joints` - The joint configuration, one angle per joint in radians
    /// * `delta` - Finite difference step ([`DEFAULT_DELTA`] is the validated default)
    ///
    /// # Returns
    ///
    /// A new instance of `Jacobian`, or `KinematicsError` when the joint
    /// vector length does not match the manipulator.
    pub fn new(
        robot: &(impl Kinematics + Sync),
        joints: &[f64],
        delta: f64,
    ) -> Result<Self, KinematicsError> {
        let matrix = compute_jacobian(robot, joints, delta)?;
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix3xX<f64> {
        &self.matrix
    }

    /// Ratio of the largest to the smallest singular value of the Jacobian.
    ///
    /// Large values mean the configuration is close to a kinematic
    /// singularity. When the smallest singular value is zero to working
    /// precision the ratio is undefined; infinity is reported instead so the
    /// caller can branch on the value without error handling.
    pub fn condition_number(&self) -> f64 {
        let svd = SVD::new(self.matrix.clone(), false, false);
        let singular_values = &svd.singular_values;
        if singular_values.is_empty() {
            return f64::INFINITY;
        }
        let largest = singular_values.max();
        let smallest = singular_values.min();
        let ratio = largest / smallest;
        if smallest > 0.0 && ratio.is_finite() {
            ratio
        } else {
            f64::INFINITY
        }
    }

    /// Manipulability measure `sqrt(det(J * J^T))`, generalized for the
    /// non-square Jacobian. Near zero signals loss of rank, that is a
    /// singular configuration.
    ///
    /// A determinant that is negative or not finite due to numerical
    /// degeneracy reports 0.0, mirroring the infinity sentinel of
    /// [`Jacobian::condition_number`].
    pub fn manipulability(&self) -> f64 {
        let gram = &self.matrix * self.matrix.transpose();
        let determinant = gram.determinant();
        if determinant.is_finite() && determinant > 0.0 {
            determinant.sqrt()
        } else {
            0.0
        }
    }

    /// True when the condition number exceeds the given threshold
    /// (see [`DEFAULT_SINGULARITY_THRESHOLD`]).
    pub fn is_near_singular(&self, threshold: f64) -> bool {
        self.condition_number() > threshold
    }
}

/// Function to estimate the positional Jacobian for a given manipulator and
/// joint configuration.
///
/// Column i is the central difference `(pos(q_i + delta) - pos(q_i - delta))
/// / (2 * delta)` with all other joints held fixed. Columns are independent
/// and computed in parallel.
pub fn compute_jacobian(
    robot: &(impl Kinematics + Sync),
    joints: &[f64],
    delta: f64,
) -> Result<Matrix3xX<f64>, KinematicsError> {
    if joints.len() != robot.dof() {
        return Err(KinematicsError::JointCountMismatch {
            expected: robot.dof(),
            found: joints.len(),
        });
    }

    let columns: Vec<Position> = (0..joints.len())
        .into_par_iter()
        .map(|i| -> Result<Position, KinematicsError> {
            let mut perturbed = joints.to_vec();

            perturbed[i] = joints[i] + delta;
            let (position_plus, _) =
                extract_position_and_orientation(&robot.forward(&perturbed)?);

            perturbed[i] = joints[i] - delta;
            let (position_minus, _) =
                extract_position_and_orientation(&robot.forward(&perturbed)?);

            Ok((position_plus - position_minus) / (2.0 * delta))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut jacobian = Matrix3xX::zeros(joints.len());
    for (i, column) in columns.iter().enumerate() {
        jacobian.set_column(i, column);
    }
    Ok(jacobian)
}
