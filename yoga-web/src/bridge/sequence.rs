//! Guided sequence and clip scoring objects for JS
//!
//! Unlike the landmark store these are owned values: the page creates one
//! `SequenceSession` per guided session and one `ScoreRecorder` per
//! analysed clip, and drops them when done.

use wasm_bindgen::prelude::*;

use super::feedback::{match_config, target_score};
use crate::error::Result;
use crate::pose::{ScoreTrack, SequenceTracker};
use crate::reference::ReferenceLibrary;

// ============================================================================
// SEQUENCE SESSION
// ============================================================================

#[wasm_bindgen]
pub struct SequenceSession {
    tracker: SequenceTracker,
}

impl SequenceSession {
    /// Every id must exist in the bundled library
    pub fn from_ids(pose_ids: Vec<String>) -> Result<Self> {
        let library = ReferenceLibrary::builtin();
        for id in &pose_ids {
            library.require(id)?;
        }
        let tracker = SequenceTracker::new(pose_ids, &match_config())?;
        log::info!("sequence session started with {} poses", tracker.len());
        Ok(Self { tracker })
    }

    pub fn tracker(&self) -> &SequenceTracker {
        &self.tracker
    }
}

#[wasm_bindgen]
impl SequenceSession {
    /// `pose_ids`: array of library ids, in practice order
    #[wasm_bindgen(constructor)]
    pub fn new(pose_ids: js_sys::Array) -> std::result::Result<SequenceSession, JsValue> {
        let ids = pose_ids
            .iter()
            .map(|value| value.as_string().unwrap_or_default())
            .collect();
        Ok(Self::from_ids(ids)?)
    }

    /// Feed an externally computed 0-100 score for the current pose (either
    /// matcher's output). Returns true when the cursor moved.
    pub fn observe(&mut self, score: f32, now_ms: f64) -> bool {
        self.tracker
            .observe(clamp_score(score), now_ms)
            .advanced_to
            .is_some()
    }

    /// Score the stored frame against the current pose and feed it.
    /// Returns the score used.
    #[wasm_bindgen(js_name = observeCurrent)]
    pub fn observe_current(&mut self, now_ms: f64) -> u8 {
        let score = target_score(self.tracker.current_pose());
        self.tracker.observe(score, now_ms);
        score
    }

    /// Apply a due advance without a new score. Returns true when the cursor moved.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.tracker.tick(now_ms).is_some()
    }

    pub fn select(&mut self, index: usize) -> std::result::Result<(), JsValue> {
        Ok(self.tracker.select(index)?)
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
    }

    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> usize {
        self.tracker.current_index()
    }

    #[wasm_bindgen(getter, js_name = currentPose)]
    pub fn current_pose(&self) -> String {
        self.tracker.current_pose().to_string()
    }

    #[wasm_bindgen(getter, js_name = completedIndices)]
    pub fn completed_indices(&self) -> Vec<u32> {
        self.tracker.completed().iter().map(|&i| i as u32).collect()
    }

    #[wasm_bindgen(getter, js_name = isComplete)]
    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.tracker.len()
    }
}

/// Round a JS number into 0-100; NaN reads 0
fn clamp_score(score: f32) -> u8 {
    if score.is_nan() {
        0
    } else {
        score.clamp(0.0, 100.0).round() as u8
    }
}

// ============================================================================
// CLIP SCORING
// ============================================================================

/// Per-frame scores of a recorded clip against one target pose
#[wasm_bindgen]
pub struct ScoreRecorder {
    pose_id: String,
    track: ScoreTrack,
}

impl ScoreRecorder {
    pub fn for_pose(pose_id: &str) -> Result<Self> {
        ReferenceLibrary::builtin().require(pose_id)?;
        Ok(Self {
            pose_id: pose_id.to_string(),
            track: ScoreTrack::new(),
        })
    }

    pub fn track(&self) -> &ScoreTrack {
        &self.track
    }
}

#[wasm_bindgen]
impl ScoreRecorder {
    #[wasm_bindgen(constructor)]
    pub fn new(pose_id: &str) -> std::result::Result<ScoreRecorder, JsValue> {
        Ok(Self::for_pose(pose_id)?)
    }

    /// Score the stored frame (0 when nobody was detected) and record it
    #[wasm_bindgen(js_name = recordCurrent)]
    pub fn record_current(&mut self) -> u8 {
        let score = target_score(&self.pose_id);
        self.track.push(f32::from(score));
        score
    }

    pub fn push(&mut self, score: f32) {
        self.track.push(score);
    }

    /// `{ total_frames, avg, min, max, duration_secs }` as JSON
    #[wasm_bindgen(js_name = summaryJson)]
    pub fn summary_json(&self, fps: f32) -> String {
        let summary = self.track.summary();
        serde_json::json!({
            "pose": self.pose_id,
            "total_frames": summary.total_frames,
            "avg": summary.avg,
            "min": summary.min,
            "max": summary.max,
            "duration_secs": self.track.duration_secs(fps),
        })
        .to_string()
    }

    pub fn clear(&mut self) {
        self.track.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> usize {
        self.track.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::landmarks::{clear_landmarks, update_landmarks};
    use crate::error::PoseError;
    use crate::pose::{fixtures, Skeleton};

    fn push_frame(skeleton: &Skeleton) {
        let flat: Vec<f32> = skeleton
            .keypoints()
            .iter()
            .flat_map(|kp| [kp.x, kp.y, kp.z, kp.visibility])
            .collect();
        assert!(update_landmarks(&flat));
    }

    fn session(ids: &[&str]) -> SequenceSession {
        SequenceSession::from_ids(ids.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_unknown_pose_rejected() {
        let err = SequenceSession::from_ids(vec!["tree".into(), "lotus".into()])
            .err()
            .unwrap();
        assert!(matches!(err, PoseError::UnknownPose(ref id) if id == "lotus"));

        let err = SequenceSession::from_ids(Vec::new()).err().unwrap();
        assert!(matches!(err, PoseError::EmptySequence));
    }

    #[test]
    fn test_session_follows_stored_frames() {
        let mut session = session(&["tree", "plank"]);

        push_frame(&fixtures::tree());
        assert_eq!(session.observe_current(0.0), 100);
        assert_eq!(session.completed_indices(), vec![0]);
        assert_eq!(session.current_index(), 0);

        assert!(!session.tick(1000.0));
        assert!(session.tick(1500.0));
        assert_eq!(session.current_pose(), "plank");

        // Still holding tree: plank is not completed
        session.observe_current(2000.0);
        assert!(!session.is_complete());

        push_frame(&fixtures::plank());
        session.observe_current(2100.0);
        assert!(session.is_complete());
        assert_eq!(session.length(), 2);
    }

    #[test]
    fn test_session_select_and_reset() {
        let mut session = session(&["mountain", "warrior1", "warrior2"]);
        assert!(!session.observe(90.0, 0.0));
        session.select(2).unwrap();
        assert!(!session.tick(5000.0));
        assert_eq!(session.current_index(), 2);

        session.reset();
        assert_eq!(session.current_index(), 0);
        assert!(session.completed_indices().is_empty());
        assert!(session.tracker().poses().len() == 3);
    }

    #[test]
    fn test_recorder_summary() {
        let mut recorder = ScoreRecorder::for_pose("warrior2").unwrap();
        push_frame(&fixtures::warrior2());
        assert_eq!(recorder.record_current(), 100);
        clear_landmarks();
        assert_eq!(recorder.record_current(), 0);
        assert_eq!(recorder.frames(), 2);

        let summary: serde_json::Value =
            serde_json::from_str(&recorder.summary_json(2.0)).unwrap();
        assert_eq!(summary["pose"], "warrior2");
        assert_eq!(summary["total_frames"], 2);
        assert_eq!(summary["avg"].as_f64(), Some(50.0));
        assert_eq!(summary["duration_secs"].as_f64(), Some(1.0));
    }

    #[test]
    fn test_recorder_rejects_unknown_pose() {
        assert!(ScoreRecorder::for_pose("lotus").is_err());
        assert!(ScoreRecorder::for_pose("tree").unwrap().track().is_empty());
    }

    #[test]
    fn test_scores_clamped_at_the_boundary() {
        assert_eq!(clamp_score(84.6), 85);
        assert_eq!(clamp_score(300.0), 100);
        assert_eq!(clamp_score(-5.0), 0);
        assert_eq!(clamp_score(f32::NAN), 0);

        // 256 must not wrap around to 0 and 84.4 must not reach the threshold
        let mut session = session(&["tree", "plank"]);
        session.observe(84.4, 0.0);
        assert!(session.completed_indices().is_empty());
        session.observe(256.0, 10.0);
        assert_eq!(session.completed_indices(), vec![0]);
    }
}
