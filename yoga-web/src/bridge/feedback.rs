//! Per-frame feedback for the UI
//!
//! Classification label, target-pose match, and best library match for the
//! skeleton currently in the landmark store. All calls are synchronous and
//! fall back to the idle result ("Unknown", 0) when no skeleton is stored.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use super::landmarks::current_skeleton;
use crate::config::MatchConfig;
use crate::pose::{self, PoseMatchResult};
use crate::reference::ReferenceLibrary;

thread_local! {
    static MATCH_CONFIG: RefCell<MatchConfig> = RefCell::new(MatchConfig::default());
}

/// Best-match result handed to JS
#[wasm_bindgen]
pub struct MatchReport {
    pose: String,
    label: String,
    confidence: f32,
}

#[wasm_bindgen]
impl MatchReport {
    #[wasm_bindgen(getter)]
    pub fn pose(&self) -> String {
        self.pose.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.label.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    #[wasm_bindgen(getter, js_name = isUnknown)]
    pub fn is_unknown(&self) -> bool {
        self.pose == pose::UNKNOWN_POSE_ID
    }
}

impl From<PoseMatchResult> for MatchReport {
    fn from(result: PoseMatchResult) -> Self {
        Self {
            pose: result.pose,
            label: result.label,
            confidence: result.confidence,
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Replace calibration constants from a (partial) JSON document
#[wasm_bindgen]
pub fn set_match_config(json: &str) -> Result<(), JsValue> {
    let config = MatchConfig::from_json(json)?;
    log::info!("match config updated: {}", config.to_json());
    MATCH_CONFIG.with(|cell| *cell.borrow_mut() = config);
    Ok(())
}

/// Active calibration as JSON
#[wasm_bindgen]
pub fn get_match_config() -> String {
    match_config().to_json()
}

/// Active calibration (for other bridge modules)
pub fn match_config() -> MatchConfig {
    MATCH_CONFIG.with(|cell| cell.borrow().clone())
}

// ============================================================================
// POSE CATALOGUE
// ============================================================================

/// Ids of the bundled reference poses, in library order
#[wasm_bindgen]
pub fn pose_ids() -> js_sys::Array {
    ReferenceLibrary::builtin()
        .ids()
        .map(JsValue::from_str)
        .collect()
}

#[wasm_bindgen]
pub fn pose_label(pose_id: &str) -> Option<String> {
    ReferenceLibrary::builtin()
        .get(pose_id)
        .map(|pose| pose.label.clone())
}

// ============================================================================
// PER-FRAME FEEDBACK
// ============================================================================

/// Rule-based label for the current frame
#[wasm_bindgen]
pub fn classify_current_pose() -> String {
    pose::classify_frame(current_skeleton().as_ref()).name().to_string()
}

/// 0-100 match of the current frame against one reference pose.
/// Unknown ids and empty frames score 0.
#[wasm_bindgen]
pub fn match_current_against(pose_id: &str) -> u8 {
    target_score(pose_id)
}

/// Angle-based 0-100 match against one reference pose
#[wasm_bindgen]
pub fn angle_match_current_against(pose_id: &str) -> f32 {
    let Some(reference) = ReferenceLibrary::builtin().get(pose_id) else {
        return 0.0;
    };
    let sigma = match_config().angle_sigma;
    current_skeleton()
        .map(|user| pose::angle_score(&user, &reference.landmarks, sigma))
        .unwrap_or(0.0)
}

/// Highest-scoring library pose for the current frame (gated)
#[wasm_bindgen]
pub fn best_match_current() -> MatchReport {
    let config = match_config();
    pose::best_match_frame(current_skeleton().as_ref(), ReferenceLibrary::builtin(), &config).into()
}

// ============================================================================
// INTERNAL API
// ============================================================================

/// Score of the stored frame against `pose_id` (0 when either is missing)
pub fn target_score(pose_id: &str) -> u8 {
    pose::match_against_target(
        current_skeleton().as_ref(),
        pose_id,
        ReferenceLibrary::builtin(),
        &match_config(),
    )
}
