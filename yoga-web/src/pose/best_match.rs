//! Best-match selection across the reference library

use serde::Serialize;

use super::similarity::score_with;
use super::skeleton::Skeleton;
use crate::config::MatchConfig;
use crate::reference::ReferenceLibrary;

pub const UNKNOWN_POSE_ID: &str = "unknown";
pub const UNKNOWN_POSE_LABEL: &str = "Unknown";

/// Outcome of scanning the library for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PoseMatchResult {
    /// Library id, or "unknown" below the confidence gate
    pub pose: String,
    pub label: String,
    /// Best score found (0-100), reported even when gated
    pub confidence: f32,
}

impl PoseMatchResult {
    pub fn unknown(confidence: f32) -> Self {
        Self {
            pose: UNKNOWN_POSE_ID.to_string(),
            label: UNKNOWN_POSE_LABEL.to_string(),
            confidence,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.pose == UNKNOWN_POSE_ID
    }
}

/// Score `user` against every reference and keep the strictly best one.
///
/// Ties go to the entry met first in library order. A best score under
/// `config.confidence_gate` comes back as "unknown" with that score.
pub fn classify_by_similarity(
    user: &Skeleton,
    library: &ReferenceLibrary,
    config: &MatchConfig,
) -> PoseMatchResult {
    let mut best: Option<(&str, &str, u8)> = None;

    for reference in library.iter() {
        let confidence = score_with(user, &reference.landmarks, config.zero_match_distance);
        if best.map_or(true, |(_, _, top)| confidence > top) {
            best = Some((&reference.id, &reference.label, confidence));
        }
    }

    match best {
        Some((pose, label, confidence)) if f32::from(confidence) >= config.confidence_gate => {
            PoseMatchResult {
                pose: pose.to_string(),
                label: label.to_string(),
                confidence: f32::from(confidence),
            }
        }
        Some((_, _, confidence)) => PoseMatchResult::unknown(f32::from(confidence)),
        None => PoseMatchResult::unknown(0.0),
    }
}

/// Score against one library pose; unknown id or no skeleton scores 0
pub fn match_against_target(
    frame: Option<&Skeleton>,
    pose_id: &str,
    library: &ReferenceLibrary,
    config: &MatchConfig,
) -> u8 {
    match (frame, library.get(pose_id)) {
        (Some(user), Some(reference)) => {
            score_with(user, &reference.landmarks, config.zero_match_distance)
        }
        _ => 0,
    }
}

/// Per-frame entry: no skeleton is "unknown" at 0%
pub fn best_match_frame(
    frame: Option<&Skeleton>,
    library: &ReferenceLibrary,
    config: &MatchConfig,
) -> PoseMatchResult {
    match frame {
        Some(user) => classify_by_similarity(user, library, config),
        None => PoseMatchResult::unknown(0.0),
    }
}
