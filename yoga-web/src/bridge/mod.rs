//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod feedback;
mod overlay;
mod sequence;

pub use landmarks::{
    update_landmarks,
    clear_landmarks,
    has_landmarks,
};

pub use feedback::{
    set_match_config,
    get_match_config,
    pose_ids,
    pose_label,
    classify_current_pose,
    match_current_against,
    angle_match_current_against,
    best_match_current,
    MatchReport,
};

pub use overlay::{visible_bone_indices, visible_joint_indices};

pub use sequence::{ScoreRecorder, SequenceSession};
