//! Helper functions

use crate::kinematic_traits::kinematics_traits::{Pose, Position};

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &[f64]) {
    let mut row_str = String::new();
    for joint in joints {
        row_str.push_str(&format!("{:7.2} ", joint.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print a position vector with fixed precision.
#[allow(dead_code)]
pub fn dump_position(position: &Position) {
    println!("[{:8.2}, {:8.2}, {:8.2}]", position.x, position.y, position.z);
}

/// Print a homogeneous transform row by row.
#[allow(dead_code)]
pub fn dump_pose(pose: &Pose) {
    for i in 0..4 {
        let mut row_str = String::new();
        for j in 0..4 {
            row_str.push_str(&format!("{:9.4} ", pose[(i, j)]));
        }
        println!("[{}]", row_str.trim_end());
    }
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians<const N: usize>(degrees: [i32; N]) -> [f64; N] {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Angle formatting for the DH table dump
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.2})", x.to_degrees())
}
