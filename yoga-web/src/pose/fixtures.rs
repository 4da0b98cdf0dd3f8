//! Synthetic skeletons shared by the unit tests
//!
//! Coordinates are image-relative (y grows downward) with the subject facing
//! the camera, so the subject's left side sits at larger x. Only the twelve
//! limb/torso joints are placed; everything else sits at the hip centre.

use super::skeleton::*;

type Joints = [(usize, f32, f32)];

pub fn skeleton_with(joints: &Joints) -> Skeleton {
    let mut keypoints = [Keypoint::new(0.5, 0.56, 0.0, 1.0); LANDMARK_COUNT];
    for &(index, x, y) in joints {
        keypoints[index] = Keypoint::new(x, y, 0.0, 1.0);
    }
    Skeleton::new(keypoints)
}

pub fn translated(skeleton: &Skeleton, dx: f32, dy: f32) -> Skeleton {
    skeleton.map(|kp| Keypoint { x: kp.x + dx, y: kp.y + dy, ..*kp })
}

pub fn scaled(skeleton: &Skeleton, factor: f32) -> Skeleton {
    skeleton.map(|kp| Keypoint {
        x: kp.x * factor,
        y: kp.y * factor,
        z: kp.z * factor,
        ..*kp
    })
}

/// Straight legs, straight arms hanging 10° out from the torso
pub fn mountain_scenario() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.56, 0.30), (RIGHT_SHOULDER, 0.44, 0.30),
        (LEFT_ELBOW, 0.5808, 0.4182), (RIGHT_ELBOW, 0.4192, 0.4182),
        (LEFT_WRIST, 0.6017, 0.5364), (RIGHT_WRIST, 0.3983, 0.5364),
        (LEFT_HIP, 0.56, 0.55), (RIGHT_HIP, 0.44, 0.55),
        (LEFT_KNEE, 0.56, 0.72), (RIGHT_KNEE, 0.44, 0.72),
        (LEFT_ANKLE, 0.56, 0.89), (RIGHT_ANKLE, 0.44, 0.89),
    ])
}

/// Left leg straight, right knee bent to 70° with the foot above the left knee
pub fn tree_scenario() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.56, 0.32), (RIGHT_SHOULDER, 0.44, 0.32),
        (LEFT_ELBOW, 0.57, 0.45), (RIGHT_ELBOW, 0.43, 0.45),
        (LEFT_WRIST, 0.58, 0.57), (RIGHT_WRIST, 0.42, 0.57),
        (LEFT_HIP, 0.54, 0.58), (RIGHT_HIP, 0.46, 0.58),
        (LEFT_KNEE, 0.54, 0.74), (RIGHT_KNEE, 0.36, 0.70),
        (LEFT_ANKLE, 0.54, 0.90), (RIGHT_ANKLE, 0.2795, 0.5617),
    ])
}

// ============================================================================
// LIVE CAPTURES OF THE LIBRARY POSES (un-normalized)
// ============================================================================

pub fn mountain() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.58, 0.30), (RIGHT_SHOULDER, 0.42, 0.30),
        (LEFT_ELBOW, 0.59, 0.43), (RIGHT_ELBOW, 0.41, 0.43),
        (LEFT_WRIST, 0.60, 0.55), (RIGHT_WRIST, 0.40, 0.55),
        (LEFT_HIP, 0.54, 0.55), (RIGHT_HIP, 0.46, 0.55),
        (LEFT_KNEE, 0.535, 0.72), (RIGHT_KNEE, 0.465, 0.72),
        (LEFT_ANKLE, 0.53, 0.89), (RIGHT_ANKLE, 0.47, 0.89),
    ])
}

pub fn warrior1() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.56, 0.35), (RIGHT_SHOULDER, 0.44, 0.35),
        (LEFT_ELBOW, 0.57, 0.22), (RIGHT_ELBOW, 0.43, 0.22),
        (LEFT_WRIST, 0.58, 0.09), (RIGHT_WRIST, 0.42, 0.09),
        (LEFT_HIP, 0.54, 0.58), (RIGHT_HIP, 0.46, 0.58),
        (LEFT_KNEE, 0.63, 0.71), (RIGHT_KNEE, 0.36, 0.68),
        (LEFT_ANKLE, 0.72, 0.84), (RIGHT_ANKLE, 0.4147, 0.8304),
    ])
}

pub fn warrior2() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.56, 0.35), (RIGHT_SHOULDER, 0.44, 0.35),
        (LEFT_ELBOW, 0.68, 0.35), (RIGHT_ELBOW, 0.32, 0.35),
        (LEFT_WRIST, 0.80, 0.35), (RIGHT_WRIST, 0.20, 0.35),
        (LEFT_HIP, 0.55, 0.58), (RIGHT_HIP, 0.45, 0.58),
        (LEFT_KNEE, 0.65, 0.70), (RIGHT_KNEE, 0.30, 0.60),
        (LEFT_ANKLE, 0.75, 0.82), (RIGHT_ANKLE, 0.30, 0.80),
    ])
}

pub fn tree() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.56, 0.32), (RIGHT_SHOULDER, 0.44, 0.32),
        (LEFT_ELBOW, 0.60, 0.44), (RIGHT_ELBOW, 0.40, 0.44),
        (LEFT_WRIST, 0.51, 0.40), (RIGHT_WRIST, 0.49, 0.40),
        (LEFT_HIP, 0.54, 0.58), (RIGHT_HIP, 0.46, 0.58),
        (LEFT_KNEE, 0.54, 0.74), (RIGHT_KNEE, 0.36, 0.70),
        (LEFT_ANKLE, 0.54, 0.90), (RIGHT_ANKLE, 0.52, 0.66),
    ])
}

pub fn triangle() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.29, 0.40), (RIGHT_SHOULDER, 0.26, 0.50),
        (LEFT_ELBOW, 0.29, 0.27), (RIGHT_ELBOW, 0.26, 0.63),
        (LEFT_WRIST, 0.29, 0.14), (RIGHT_WRIST, 0.26, 0.76),
        (LEFT_HIP, 0.52, 0.55), (RIGHT_HIP, 0.46, 0.57),
        (LEFT_KNEE, 0.62, 0.72), (RIGHT_KNEE, 0.36, 0.73),
        (LEFT_ANKLE, 0.72, 0.89), (RIGHT_ANKLE, 0.26, 0.89),
    ])
}

/// Side view, head toward the left of the frame
pub fn plank() -> Skeleton {
    skeleton_with(&[
        (LEFT_SHOULDER, 0.30, 0.50), (RIGHT_SHOULDER, 0.31, 0.51),
        (LEFT_ELBOW, 0.30, 0.60), (RIGHT_ELBOW, 0.31, 0.61),
        (LEFT_WRIST, 0.30, 0.70), (RIGHT_WRIST, 0.31, 0.71),
        (LEFT_HIP, 0.55, 0.53), (RIGHT_HIP, 0.56, 0.54),
        (LEFT_KNEE, 0.70, 0.56), (RIGHT_KNEE, 0.71, 0.57),
        (LEFT_ANKLE, 0.85, 0.59), (RIGHT_ANKLE, 0.86, 0.60),
    ])
}

/// Library id paired with its live capture
pub fn library_captures() -> Vec<(&'static str, Skeleton)> {
    vec![
        ("mountain", mountain()),
        ("warrior1", warrior1()),
        ("warrior2", warrior2()),
        ("tree", tree()),
        ("triangle", triangle()),
        ("plank", plank()),
    ]
}
