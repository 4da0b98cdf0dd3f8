//! Landmark normalization - hip-centred, torso-scaled coordinates
//!
//! Removes the subject's position in the frame and distance from the camera
//! so skeletons can be compared point by point. Camera roll and left/right
//! mirroring are NOT removed.

use super::skeleton::*;

/// Distance from the hip midpoint to the shoulder midpoint (image plane)
pub fn torso_size(skeleton: &Skeleton) -> f32 {
    let hips = skeleton.midpoint(LEFT_HIP, RIGHT_HIP);
    let shoulders = skeleton.midpoint(LEFT_SHOULDER, RIGHT_SHOULDER);
    (shoulders - hips).norm()
}

/// Centre on the hip midpoint and scale so the torso has length 1.
///
/// x and y are translated; z is already hip-relative in MediaPipe output
/// and is only scaled. Visibility is carried through untouched. A zero
/// (or non-finite) torso keeps scale 1.
pub fn normalize(skeleton: &Skeleton) -> Skeleton {
    let center = skeleton.midpoint(LEFT_HIP, RIGHT_HIP);
    let torso = torso_size(skeleton);
    let scale = if torso > 0.0 && torso.is_finite() { 1.0 / torso } else { 1.0 };

    skeleton.map(|kp| Keypoint {
        x: (kp.x - center.x) * scale,
        y: (kp.y - center.y) * scale,
        z: kp.z * scale,
        visibility: kp.visibility,
    })
}
