//! Yoga Web - in-browser yoga pose classification and matching
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod config;
pub mod error;
pub mod pose;
pub mod reference;

mod bridge;
mod logging;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    angle_match_current_against, best_match_current, classify_current_pose, clear_landmarks,
    get_match_config, has_landmarks, match_current_against, pose_ids, pose_label,
    set_match_config, update_landmarks, visible_bone_indices, visible_joint_indices, MatchReport,
    ScoreRecorder, SequenceSession,
};
pub use config::MatchConfig;
pub use error::{PoseError, Result};
pub use reference::{ReferenceLibrary, ReferencePose};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    // Parse the bundled poses up front instead of on the first frame
    let library = ReferenceLibrary::builtin();
    log::info!("yoga-web ready: {} reference poses", library.len());
}
