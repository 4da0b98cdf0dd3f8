//! Angle-based similarity - joint-angle error mapped onto 0-100
//!
//! Compares the eight classifier angles instead of joint positions, so it
//! tolerates a tilted camera that would throw off the positional matcher.
//! Mean absolute angle error is turned into a score with a Gaussian falloff.

use super::angles::JointAngles;
use super::skeleton::Skeleton;

/// Default spread of the falloff (degrees)
pub const DEFAULT_ANGLE_SIGMA: f32 = 25.0;

/// Scores below this floor are reported as 0
const SCORE_FLOOR: f32 = 1.0;

/// Shortest distance between two angles in degrees, in [0, 180]
pub fn shortest_angle_distance(a: f32, b: f32) -> f32 {
    ((b - a + 180.0).rem_euclid(360.0) - 180.0).abs()
}

/// Mean absolute angular error across the eight joint angles
pub fn mean_angle_error(user: &JointAngles, reference: &JointAngles) -> f32 {
    let errors = user
        .as_array()
        .iter()
        .zip(reference.as_array())
        .map(|(&u, r)| shortest_angle_distance(u, r))
        .collect::<Vec<_>>();
    errors.iter().sum::<f32>() / errors.len() as f32
}

/// `100 · exp(-mae² / 2σ²)`, with anything under 1 collapsed to 0
pub fn error_to_score(mae: f32, sigma: f32) -> f32 {
    let score = 100.0 * (-(mae * mae) / (2.0 * sigma * sigma)).exp();
    if score < SCORE_FLOOR {
        0.0
    } else {
        score
    }
}

pub fn angle_score(user: &Skeleton, reference: &Skeleton, sigma: f32) -> f32 {
    let mae = mean_angle_error(
        &JointAngles::from_skeleton(user),
        &JointAngles::from_skeleton(reference),
    );
    error_to_score(mae, sigma)
}
