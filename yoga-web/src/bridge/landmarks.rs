//! Landmark storage and JS bridge
//!
//! Receives MediaPipe Pose landmarks from JavaScript once per video frame
//! and keeps the latest skeleton for the classification and matching calls.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::pose::{Skeleton, LANDMARK_COUNT};

/// Latest frame, `None` while nobody is in view
#[derive(Default)]
struct LandmarkStore {
    skeleton: Option<Skeleton>,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array.
///
/// 132 values (33 landmarks × x, y, z, visibility) or 99 values without
/// visibility. Anything else clears the store so feedback drops to idle
/// instead of showing a stale pose. Returns whether the frame was accepted.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> bool {
    let skeleton = Skeleton::from_flat(data);
    if skeleton.is_none() {
        log::warn!(
            "invalid landmark data length: {} (expected {} or {})",
            data.len(),
            LANDMARK_COUNT * 4,
            LANDMARK_COUNT * 3
        );
    }

    let accepted = skeleton.is_some();
    LANDMARKS.with(|store_cell| store_cell.borrow_mut().skeleton = skeleton);
    accepted
}

/// Called when the detector reports no person in frame
#[wasm_bindgen]
pub fn clear_landmarks() {
    LANDMARKS.with(|store_cell| store_cell.borrow_mut().skeleton = None);
}

#[wasm_bindgen]
pub fn has_landmarks() -> bool {
    LANDMARKS.with(|store_cell| store_cell.borrow().skeleton.is_some())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Current skeleton (for classification/matching)
pub fn current_skeleton() -> Option<Skeleton> {
    LANDMARKS.with(|store_cell| store_cell.borrow().skeleton.clone())
}
