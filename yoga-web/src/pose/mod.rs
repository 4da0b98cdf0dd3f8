//! Pose module - classification and reference matching
//!
//! Re-exports only. All logic in submodules. Everything here is pure and
//! stateless per frame except `SequenceTracker`, which its owner mutates.

mod skeleton;
mod angles;
mod normalize;
mod classifier;
mod similarity;
mod best_match;
mod angle_score;
mod sequence;
mod summary;
mod overlay;

#[cfg(test)]
pub(crate) mod fixtures;

pub use skeleton::*;
pub use angles::{calculate_angle, JointAngles};
pub use normalize::{normalize, torso_size};
pub use classifier::{
    classify, classify_features, classify_frame, PoseFeatures, PoseLabel, PoseRule, POSE_RULES,
    is_warrior2, is_warrior1, is_tree, is_triangle, is_mountain, is_plank,
};
pub use similarity::{
    average_joint_distance, distance_to_score, score, score_frame, score_with,
    DEFAULT_ZERO_MATCH_DISTANCE,
};
pub use best_match::{
    best_match_frame, classify_by_similarity, match_against_target, PoseMatchResult, UNKNOWN_POSE_ID, UNKNOWN_POSE_LABEL,
};
pub use angle_score::{
    angle_score, error_to_score, mean_angle_error, shortest_angle_distance, DEFAULT_ANGLE_SIGMA,
};
pub use sequence::{SequenceStep, SequenceTracker};
pub use summary::{ScoreSummary, ScoreTrack};
pub use overlay::{visible_bones, visible_joints, DEFAULT_VISIBILITY_THRESHOLD, POSE_CONNECTIONS};
