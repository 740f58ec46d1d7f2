//! Error handling for the kinematic chain evaluator

/// Reported when the caller hands over input the chain evaluator cannot accept.
/// Validation happens before any matrix computation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicsError {
    /// The joint angle vector length does not match the number of joints
    /// in the DH table.
    JointCountMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::JointCountMismatch { expected, found } =>
                write!(f, "Joint count mismatch: the DH table defines {} joints, \
                    but {} joint angles were given", expected, found),
        }
    }
}

impl std::error::Error for KinematicsError {}
