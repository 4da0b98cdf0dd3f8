//! Joint angle calculation
//!
//! Angle at a vertex joint from the directions toward its two neighbours,
//! measured in the image plane. Depth (z) is ignored.

use super::skeleton::*;

/// Interior angle at `b` in degrees, always in [0, 180]
///
/// - 180° = straight (a, b, c collinear)
/// - 90° = right angle at the vertex
///
/// Never fails; coincident points give 0°. Callers decide whether the
/// landmarks are visible enough to trust the result.
pub fn calculate_angle(a: Keypoint, b: Keypoint, c: Keypoint) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();

    // Reflex angles fold back into [0, 180]
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// The eight angles the pose rules are written against
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JointAngles {
    /// shoulder-elbow-wrist
    pub left_arm: f32,
    pub right_arm: f32,
    /// hip-knee-ankle
    pub left_leg: f32,
    pub right_leg: f32,
    /// hip-shoulder-wrist (arm elevation)
    pub left_shoulder: f32,
    pub right_shoulder: f32,
    /// shoulder-hip-knee (torso bend)
    pub left_body: f32,
    pub right_body: f32,
}

impl JointAngles {
    pub fn from_skeleton(s: &Skeleton) -> Self {
        Self {
            left_arm: calculate_angle(s[LEFT_SHOULDER], s[LEFT_ELBOW], s[LEFT_WRIST]),
            right_arm: calculate_angle(s[RIGHT_SHOULDER], s[RIGHT_ELBOW], s[RIGHT_WRIST]),
            left_leg: calculate_angle(s[LEFT_HIP], s[LEFT_KNEE], s[LEFT_ANKLE]),
            right_leg: calculate_angle(s[RIGHT_HIP], s[RIGHT_KNEE], s[RIGHT_ANKLE]),
            left_shoulder: calculate_angle(s[LEFT_HIP], s[LEFT_SHOULDER], s[LEFT_WRIST]),
            right_shoulder: calculate_angle(s[RIGHT_HIP], s[RIGHT_SHOULDER], s[RIGHT_WRIST]),
            left_body: calculate_angle(s[LEFT_SHOULDER], s[LEFT_HIP], s[LEFT_KNEE]),
            right_body: calculate_angle(s[RIGHT_SHOULDER], s[RIGHT_HIP], s[RIGHT_KNEE]),
        }
    }

    pub fn as_array(&self) -> [f32; 8] {
        [
            self.left_arm,
            self.right_arm,
            self.left_leg,
            self.right_leg,
            self.left_shoulder,
            self.right_shoulder,
            self.left_body,
            self.right_body,
        ]
    }
}
