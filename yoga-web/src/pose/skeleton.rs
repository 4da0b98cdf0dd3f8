//! Skeleton model - one frame of MediaPipe Pose landmarks
//!
//! A skeleton is always exactly 33 keypoints in MediaPipe index order. The
//! classifier, normalizer, and matcher address joints by these indices.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

pub const NOSE: usize = 0;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_PINKY: usize = 17;
pub const RIGHT_PINKY: usize = 18;
pub const LEFT_INDEX: usize = 19;
pub const RIGHT_INDEX: usize = 20;
pub const LEFT_THUMB: usize = 21;
pub const RIGHT_THUMB: usize = 22;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_HEEL: usize = 29;
pub const RIGHT_HEEL: usize = 30;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

/// Limb and torso joints used for similarity scoring (no face, hands, feet)
pub const KEY_JOINTS: [usize; 12] = [
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
];

// ============================================================================
// KEYPOINT
// ============================================================================

/// A single landmark: normalized image position plus detection confidence
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,  // 0-1 across frame width
    pub y: f32,  // 0-1 down frame height
    pub z: f32,  // Relative depth
    #[serde(default = "full_visibility")]
    pub visibility: f32,
}

fn full_visibility() -> f32 {
    1.0
}

impl Default for Keypoint {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0, visibility: 1.0 }
    }
}

impl Keypoint {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// Image-plane position
    pub fn xy(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    pub fn is_visible(&self, threshold: f32) -> bool {
        self.visibility > threshold
    }
}

// ============================================================================
// SKELETON
// ============================================================================

/// One frame of keypoints. Immutable once built; transforms return a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Skeleton {
    keypoints: [Keypoint; LANDMARK_COUNT],
}

impl Skeleton {
    pub fn new(keypoints: [Keypoint; LANDMARK_COUNT]) -> Self {
        Self { keypoints }
    }

    /// Build from a slice; `None` unless it holds exactly 33 keypoints
    pub fn from_keypoints(keypoints: &[Keypoint]) -> Option<Self> {
        let keypoints: [Keypoint; LANDMARK_COUNT] = keypoints.try_into().ok()?;
        Some(Self { keypoints })
    }

    /// Parse a flat JS buffer.
    ///
    /// Accepts 132 values (x, y, z, visibility per landmark) or 99 values
    /// (x, y, z; visibility defaults to 1.0). Any other length is rejected.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        let stride = match data.len() {
            n if n == LANDMARK_COUNT * 4 => 4,
            n if n == LANDMARK_COUNT * 3 => 3,
            _ => return None,
        };

        let mut keypoints = [Keypoint::default(); LANDMARK_COUNT];
        for (keypoint, chunk) in keypoints.iter_mut().zip(data.chunks_exact(stride)) {
            *keypoint = Keypoint {
                x: chunk[0],
                y: chunk[1],
                z: chunk[2],
                visibility: if stride == 4 { chunk[3] } else { 1.0 },
            };
        }
        Some(Self { keypoints })
    }

    pub fn keypoints(&self) -> &[Keypoint; LANDMARK_COUNT] {
        &self.keypoints
    }

    /// Image-plane midpoint of two landmarks
    pub fn midpoint(&self, a: usize, b: usize) -> Vector2<f32> {
        (self.keypoints[a].xy() + self.keypoints[b].xy()) * 0.5
    }

    /// New skeleton with `f` applied to every keypoint (index layout kept)
    pub fn map(&self, f: impl Fn(&Keypoint) -> Keypoint) -> Self {
        let mut keypoints = self.keypoints;
        for keypoint in keypoints.iter_mut() {
            *keypoint = f(keypoint);
        }
        Self { keypoints }
    }
}

impl std::ops::Index<usize> for Skeleton {
    type Output = Keypoint;

    fn index(&self, index: usize) -> &Keypoint {
        &self.keypoints[index]
    }
}
