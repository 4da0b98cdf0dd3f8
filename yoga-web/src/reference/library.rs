//! Reference pose library
//!
//! Canonical skeletons captured offline, one per supported pose. Built once
//! and shared read-only by every matching call; nothing mutates it after
//! construction.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::{PoseError, Result};
use crate::pose::{normalize, Keypoint, Skeleton, LANDMARK_COUNT};

/// Bundled captures (already hip-centred and torso-scaled)
const BUILTIN_DATA: &str = include_str!("reference_poses.json");

static BUILTIN: OnceLock<ReferenceLibrary> = OnceLock::new();

#[derive(Deserialize)]
struct ReferenceFile {
    poses: Vec<ReferenceEntry>,
}

#[derive(Deserialize)]
struct ReferenceEntry {
    id: String,
    label: String,
    landmarks: Vec<Keypoint>,
}

/// A named canonical skeleton
#[derive(Clone, Debug, PartialEq)]
pub struct ReferencePose {
    pub id: String,
    pub label: String,
    /// Stored normalized
    pub landmarks: Skeleton,
}

impl ReferencePose {
    pub fn new(id: impl Into<String>, label: impl Into<String>, landmarks: &Skeleton) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            landmarks: normalize(landmarks),
        }
    }
}

/// Ordered, immutable set of reference poses keyed by id
#[derive(Clone, Debug, Default)]
pub struct ReferenceLibrary {
    poses: Vec<ReferencePose>,
}

impl ReferenceLibrary {
    /// Ids must be unique; order is kept and decides best-match ties
    pub fn new(poses: Vec<ReferencePose>) -> Result<Self> {
        let mut seen = HashSet::new();
        for pose in &poses {
            if !seen.insert(pose.id.as_str()) {
                return Err(PoseError::DuplicatePose(pose.id.clone()));
            }
        }
        Ok(Self { poses })
    }

    /// Parse `{ "poses": [{ "id", "label", "landmarks": [33 keypoints] }] }`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ReferenceFile = serde_json::from_str(json).map_err(PoseError::ReferenceData)?;

        let poses = file
            .poses
            .into_iter()
            .map(|entry| -> Result<ReferencePose> {
                let skeleton = Skeleton::from_keypoints(&entry.landmarks).ok_or_else(|| {
                    PoseError::LandmarkCount {
                        id: entry.id.clone(),
                        len: entry.landmarks.len(),
                        expected: LANDMARK_COUNT,
                    }
                })?;
                Ok(ReferencePose::new(entry.id, entry.label, &skeleton))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(poses)
    }

    /// The bundled library, parsed on first use.
    ///
    /// A corrupt bundle degrades to an empty library (every match reads
    /// "unknown") rather than taking the page down.
    pub fn builtin() -> &'static ReferenceLibrary {
        BUILTIN.get_or_init(|| match Self::from_json(BUILTIN_DATA) {
            Ok(library) => {
                log::info!("loaded {} reference poses", library.len());
                library
            }
            Err(err) => {
                log::error!("bundled reference poses unusable: {err}");
                Self::default()
            }
        })
    }

    pub fn get(&self, id: &str) -> Option<&ReferencePose> {
        self.poses.iter().find(|pose| pose.id == id)
    }

    /// Like `get`, but an unknown id is an error
    pub fn require(&self, id: &str) -> Result<&ReferencePose> {
        self.get(id).ok_or_else(|| PoseError::UnknownPose(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferencePose> {
        self.poses.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.poses.iter().map(|pose| pose.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}
