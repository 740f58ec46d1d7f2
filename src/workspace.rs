extern crate nalgebra as na;
use crate::kinematic_traits::kinematics_traits::{Kinematics, Position};
use crate::kinematics_error::KinematicsError;
use crate::kinematics_impl::extract_position_and_orientation;
use na::Vector3;
use rand::Rng;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Aggregate statistics over a batch of sampled end-effector positions.
/// A Monte Carlo approximation of the reachable workspace; more samples give
/// a better estimate, the exact boundary is never computed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceStatistics {
    /// Smallest and largest sampled coordinate per axis.
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    pub z_range: [f64; 2],

    /// Largest Euclidean distance of a sampled position from the base.
    pub max_reach: f64,

    /// Smallest Euclidean distance of a sampled position from the base.
    pub min_reach: f64,

    /// Per-axis mean of the sampled positions.
    pub center: Vector3<f64>,

    /// Per-axis standard deviation of the sampled positions.
    pub std_dev: Vector3<f64>,
}

/// Samples `num_samples` random joint configurations, each joint angle
/// independently uniform in [-pi, pi), and returns the end-effector position
/// of every sample together with the aggregate statistics.
///
/// The generator is supplied by the caller; seed it for reproducible runs.
/// Sampling is sequential so a seeded generator always produces the same
/// configurations; the forward kinematics of the batch runs in parallel.
pub fn workspace_analysis(
    robot: &(impl Kinematics + Sync),
    num_samples: usize,
    rng: &mut impl Rng,
) -> Result<(Vec<Position>, WorkspaceStatistics), KinematicsError> {
    let dof = robot.dof();
    let samples: Vec<Vec<f64>> = (0..num_samples)
        .map(|_| (0..dof).map(|_| rng.gen_range(-PI..PI)).collect())
        .collect();

    let points: Vec<Position> = samples
        .par_iter()
        .map(|joints| -> Result<Position, KinematicsError> {
            let (position, _) = extract_position_and_orientation(&robot.forward(joints)?);
            Ok(position)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let statistics = collect_statistics(&points);
    Ok((points, statistics))
}

// Order-independent reductions over the sampled positions.
fn collect_statistics(points: &[Position]) -> WorkspaceStatistics {
    let mut x_range = [f64::INFINITY, f64::NEG_INFINITY];
    let mut y_range = [f64::INFINITY, f64::NEG_INFINITY];
    let mut z_range = [f64::INFINITY, f64::NEG_INFINITY];
    let mut max_reach = f64::NEG_INFINITY;
    let mut min_reach = f64::INFINITY;
    let mut sum = Vector3::zeros();

    for point in points {
        x_range = [x_range[0].min(point.x), x_range[1].max(point.x)];
        y_range = [y_range[0].min(point.y), y_range[1].max(point.y)];
        z_range = [z_range[0].min(point.z), z_range[1].max(point.z)];

        let reach = point.norm();
        max_reach = max_reach.max(reach);
        min_reach = min_reach.min(reach);
        sum += point;
    }

    let count = points.len().max(1) as f64;
    let center = sum / count;
    let squared_deviations: Vector3<f64> = points
        .iter()
        .map(|point| (point - center).map(|component| component * component))
        .sum();
    let std_dev = (squared_deviations / count).map(f64::sqrt);

    WorkspaceStatistics {
        x_range,
        y_range,
        z_range,
        max_reach,
        min_reach,
        center,
        std_dev,
    }
}
