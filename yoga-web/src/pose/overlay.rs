//! Overlay filtering - which bones and joints are safe to draw
//!
//! Landmarks at or below the visibility threshold are dropped from the
//! overlay so occluded limbs do not flicker across the video. Classification
//! and matching do not filter; they trust whatever coordinates arrive.

use super::skeleton::*;

/// Default minimum visibility for drawing
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Skeleton connections for rendering (pairs of landmark indices)
pub const POSE_CONNECTIONS: [(usize, usize); 22] = [
    // Torso
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_HIP), (RIGHT_SHOULDER, RIGHT_HIP),
    (LEFT_HIP, RIGHT_HIP),
    // Arms
    (LEFT_SHOULDER, LEFT_ELBOW), (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW), (RIGHT_ELBOW, RIGHT_WRIST),
    // Legs
    (LEFT_HIP, LEFT_KNEE), (LEFT_KNEE, LEFT_ANKLE),
    (RIGHT_HIP, RIGHT_KNEE), (RIGHT_KNEE, RIGHT_ANKLE),
    // Hands
    (LEFT_WRIST, LEFT_PINKY), (LEFT_WRIST, LEFT_INDEX), (LEFT_WRIST, LEFT_THUMB),
    (RIGHT_WRIST, RIGHT_PINKY), (RIGHT_WRIST, RIGHT_INDEX), (RIGHT_WRIST, RIGHT_THUMB),
    // Feet
    (LEFT_ANKLE, LEFT_HEEL), (LEFT_ANKLE, LEFT_FOOT_INDEX),
    (RIGHT_ANKLE, RIGHT_HEEL), (RIGHT_ANKLE, RIGHT_FOOT_INDEX),
];

/// Connections whose endpoints are both visible
pub fn visible_bones(skeleton: &Skeleton, threshold: f32) -> Vec<(usize, usize)> {
    POSE_CONNECTIONS
        .iter()
        .copied()
        .filter(|&(a, b)| skeleton[a].is_visible(threshold) && skeleton[b].is_visible(threshold))
        .collect()
}

/// Indices of visible landmarks
pub fn visible_joints(skeleton: &Skeleton, threshold: f32) -> Vec<usize> {
    skeleton
        .keypoints()
        .iter()
        .enumerate()
        .filter(|(_, kp)| kp.is_visible(threshold))
        .map(|(i, _)| i)
        .collect()
}
