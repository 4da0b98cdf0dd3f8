//! Overlay data for the skeleton drawn over the video
//!
//! JS draws; Rust only decides which landmarks are trustworthy enough.

use wasm_bindgen::prelude::*;

use super::feedback::match_config;
use super::landmarks::current_skeleton;
use crate::pose::{visible_bones, visible_joints};

/// Visible connections as flat index pairs `[a0, b0, a1, b1, ...]`
#[wasm_bindgen]
pub fn visible_bone_indices() -> Vec<u32> {
    let threshold = match_config().visibility_threshold;
    current_skeleton()
        .map(|skeleton| {
            visible_bones(&skeleton, threshold)
                .into_iter()
                .flat_map(|(a, b)| [a as u32, b as u32])
                .collect()
        })
        .unwrap_or_default()
}

/// Indices of landmarks worth drawing a dot for
#[wasm_bindgen]
pub fn visible_joint_indices() -> Vec<u32> {
    let threshold = match_config().visibility_threshold;
    current_skeleton()
        .map(|skeleton| {
            visible_joints(&skeleton, threshold)
                .into_iter()
                .map(|i| i as u32)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::landmarks::{clear_landmarks, update_landmarks};
    use crate::pose::{LEFT_ELBOW, LEFT_SHOULDER};

    #[test]
    fn test_flat_pairs() {
        let mut frame = vec![0.9_f32; 132];
        frame[LEFT_ELBOW * 4 + 3] = 0.1;
        assert!(update_landmarks(&frame));

        let bones = visible_bone_indices();
        assert_eq!(bones.len(), 20 * 2);
        assert_eq!(&bones[..2], &[LEFT_SHOULDER as u32, 12]);
        assert_eq!(visible_joint_indices().len(), 32);
    }

    #[test]
    fn test_empty_without_frame() {
        clear_landmarks();
        assert!(visible_bone_indices().is_empty());
        assert!(visible_joint_indices().is_empty());
    }
}
