//! Rule-based yoga pose classification
//!
//! Eight joint angles are checked against fixed anatomical predicates. The
//! rules run in priority order and the first match names the pose, since
//! transitional positions can satisfy more than one rule at once.
//!
//! Works on raw (un-normalized) image coordinates: angles do not care about
//! scale, and the tree/plank rules compare y values directly.

use std::fmt;

use super::angles::JointAngles;
use super::skeleton::*;

/// Closed set of poses the classifier can name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoseLabel {
    Warrior2,
    Warrior1,
    Tree,
    Triangle,
    Mountain,
    Plank,
    Unknown,
}

impl PoseLabel {
    pub fn name(&self) -> &'static str {
        match self {
            PoseLabel::Warrior2 => "Warrior 2",
            PoseLabel::Warrior1 => "Warrior 1",
            PoseLabel::Tree => "Tree Pose",
            PoseLabel::Triangle => "Triangle Pose",
            PoseLabel::Mountain => "Mountain Pose",
            PoseLabel::Plank => "Plank Pose",
            PoseLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PoseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the rules look at for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseFeatures {
    pub angles: JointAngles,
    pub left_shoulder: Keypoint,
    pub right_shoulder: Keypoint,
    pub left_knee: Keypoint,
    pub right_knee: Keypoint,
    pub left_ankle: Keypoint,
    pub right_ankle: Keypoint,
}

impl PoseFeatures {
    pub fn from_skeleton(s: &Skeleton) -> Self {
        Self {
            angles: JointAngles::from_skeleton(s),
            left_shoulder: s[LEFT_SHOULDER],
            right_shoulder: s[RIGHT_SHOULDER],
            left_knee: s[LEFT_KNEE],
            right_knee: s[RIGHT_KNEE],
            left_ankle: s[LEFT_ANKLE],
            right_ankle: s[RIGHT_ANKLE],
        }
    }
}

pub type PoseRule = fn(&PoseFeatures) -> bool;

/// Evaluated top to bottom; order is part of the contract
pub const POSE_RULES: [(PoseLabel, PoseRule); 6] = [
    (PoseLabel::Warrior2, is_warrior2),
    (PoseLabel::Warrior1, is_warrior1),
    (PoseLabel::Tree, is_tree),
    (PoseLabel::Triangle, is_triangle),
    (PoseLabel::Mountain, is_mountain),
    (PoseLabel::Plank, is_plank),
];

/// Open interval test used by every threshold below
fn within(angle: f32, min: f32, max: f32) -> bool {
    angle > min && angle < max
}

/// "Near straight" band for limbs
fn straight(angle: f32) -> bool {
    within(angle, 160.0, 200.0)
}

// ============================================================================
// POSE RULES
// ============================================================================

/// Both arms straight, one knee at roughly a right angle, other leg straight
pub fn is_warrior2(f: &PoseFeatures) -> bool {
    let a = &f.angles;
    let arms = straight(a.left_arm) && straight(a.right_arm);
    let left_bent = within(a.left_leg, 80.0, 110.0) && straight(a.right_leg);
    let right_bent = within(a.right_leg, 80.0, 110.0) && straight(a.left_leg);
    arms && (left_bent || right_bent)
}

/// Arms straight and raised overhead, one knee bent, other leg straight
pub fn is_warrior1(f: &PoseFeatures) -> bool {
    let a = &f.angles;
    let arms_straight = a.left_arm > 150.0 && a.right_arm > 150.0;
    let arms_up = a.left_shoulder > 140.0 && a.right_shoulder > 140.0;
    let left_bent = within(a.left_leg, 80.0, 120.0) && a.right_leg > 160.0;
    let right_bent = within(a.right_leg, 80.0, 120.0) && a.left_leg > 160.0;
    arms_straight && arms_up && (left_bent || right_bent)
}

/// One standing leg; the other folded with its foot above the standing knee
pub fn is_tree(f: &PoseFeatures) -> bool {
    let a = &f.angles;
    // Smaller y is higher in the frame
    let left_standing =
        straight(a.left_leg) && a.right_leg < 100.0 && f.right_ankle.y < f.left_knee.y;
    let right_standing =
        straight(a.right_leg) && a.left_leg < 100.0 && f.left_ankle.y < f.right_knee.y;
    left_standing || right_standing
}

/// Straight legs, straight arms spread away from the body, torso tipped sideways
pub fn is_triangle(f: &PoseFeatures) -> bool {
    let a = &f.angles;
    let legs = a.left_leg > 160.0 && a.right_leg > 160.0;
    let arms = a.left_arm > 150.0 && a.right_arm > 150.0;
    let arms_out = a.left_shoulder > 60.0 && a.right_shoulder > 60.0;
    let torso_bent = a.left_body < 165.0 || a.right_body < 165.0;
    legs && arms && arms_out && torso_bent
}

/// Standing tall with straight arms held down at the sides
pub fn is_mountain(f: &PoseFeatures) -> bool {
    let a = &f.angles;
    let legs = a.left_leg > 170.0 && a.right_leg > 170.0;
    let arms = a.left_arm > 160.0 && a.right_arm > 160.0;
    let arms_down = a.left_shoulder < 30.0 && a.right_shoulder < 30.0;
    legs && arms && arms_down
}

/// Straight limbs with a shoulder-to-ankle line closer to horizontal than
/// vertical on either side (side-on view)
pub fn is_plank(f: &PoseFeatures) -> bool {
    let a = &f.angles;
    let legs = a.left_leg > 160.0 && a.right_leg > 160.0;
    let arms = a.left_arm > 160.0 && a.right_arm > 160.0;
    let flat = |shoulder: &Keypoint, ankle: &Keypoint| {
        (shoulder.y - ankle.y).abs() < (shoulder.x - ankle.x).abs()
    };
    let horizontal = flat(&f.left_shoulder, &f.left_ankle) || flat(&f.right_shoulder, &f.right_ankle);
    legs && arms && horizontal
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

pub fn classify_features(features: &PoseFeatures) -> PoseLabel {
    POSE_RULES
        .iter()
        .find(|(_, rule)| rule(features))
        .map(|(label, _)| *label)
        .unwrap_or(PoseLabel::Unknown)
}

/// Name the pose a skeleton currently resembles
pub fn classify(skeleton: &Skeleton) -> PoseLabel {
    classify_features(&PoseFeatures::from_skeleton(skeleton))
}

/// Per-frame entry: no skeleton means "Unknown"
pub fn classify_frame(frame: Option<&Skeleton>) -> PoseLabel {
    frame.map(classify).unwrap_or(PoseLabel::Unknown)
}
