//! Similarity matching - 0-100 score between a live skeleton and a reference
//!
//! Both skeletons are normalized, then the key joints are compared point by
//! point in the image plane. The mean joint distance maps linearly onto a
//! percentage: 0 distance is 100%, `zero_match_distance` or more is 0%.

use super::normalize::normalize;
use super::skeleton::{Skeleton, KEY_JOINTS};

/// Default distance at which a match reads 0%
pub const DEFAULT_ZERO_MATCH_DISTANCE: f32 = 0.5;

/// Mean image-plane distance between normalized key joints
pub fn average_joint_distance(user: &Skeleton, reference: &Skeleton) -> f32 {
    let user = normalize(user);
    let reference = normalize(reference);

    let total: f32 = KEY_JOINTS
        .iter()
        .map(|&i| (user[i].xy() - reference[i].xy()).norm())
        .sum();

    total / KEY_JOINTS.len() as f32
}

/// Map a mean joint distance onto 0-100 (rounded).
///
/// Non-increasing in `distance`. A NaN distance (garbage input) scores 0.
pub fn distance_to_score(distance: f32, zero_match_distance: f32) -> u8 {
    let percent = (1.0 - distance / zero_match_distance) * 100.0;
    if percent.is_nan() {
        return 0;
    }
    percent.clamp(0.0, 100.0).round() as u8
}

pub fn score_with(user: &Skeleton, reference: &Skeleton, zero_match_distance: f32) -> u8 {
    distance_to_score(average_joint_distance(user, reference), zero_match_distance)
}

/// Match percentage of `user` against `reference`
pub fn score(user: &Skeleton, reference: &Skeleton) -> u8 {
    score_with(user, reference, DEFAULT_ZERO_MATCH_DISTANCE)
}

/// Per-frame entry: no skeleton scores 0
pub fn score_frame(frame: Option<&Skeleton>, reference: &Skeleton, zero_match_distance: f32) -> u8 {
    frame
        .map(|user| score_with(user, reference, zero_match_distance))
        .unwrap_or(0)
}
