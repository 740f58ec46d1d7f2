//! Rust implementation of forward kinematics and numerical analysis for serial
//! manipulators described by Denavit-Hartenberg (DH) parameters.
//!
//! The chain evaluator composes per-joint homogeneous transforms from a DH
//! parameter table into the end-effector pose. On top of it sits a numerical
//! analysis layer: Monte Carlo sampling of the reachable workspace and a
//! central-difference estimate of the positional Jacobian, with
//! condition-number based detection of near-singular configurations.
//!
//! # Features
//!
//! - Works for any joint count; the DH table is an explicit value passed to
//!   every entry point, never process-wide state.
//! - The end-effector pose is returned as a plain 4x4 homogeneous matrix, with
//!   helpers to split it into position and rotation.
//! - Workspace sampling takes a caller-supplied random generator, so seeded
//!   runs are fully reproducible.
//! - Near-singularity detection degrades gracefully: numerically undefined
//!   condition numbers report infinity and undefined manipulability reports
//!   zero, never a panic or an error.
//!
//! # Parameters
//!
//! Each joint carries the four classic DH values: link length _a_, link twist
//! _alpha_, link offset _d_ and the joint angle offset _theta_offset_ (angles
//! in radians). Fill out a `parameters::dh_kinematics::DhTable`, or start from
//! one of the predefined arms in `parameters_robots.rs`.

pub mod parameters;
pub mod parameters_robots;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_error;
pub mod kinematics_impl;

pub mod jacobian;

pub mod workspace;
