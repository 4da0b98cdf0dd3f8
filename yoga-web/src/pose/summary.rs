//! Score track - per-frame match scores over a whole clip
//!
//! Batch analysis of a recorded video pushes one score per decoded frame
//! and reads back the aggregate. Frames where no person was detected count
//! as 0 so the track stays aligned with the video timeline.

use serde::Serialize;

/// Aggregate over every recorded frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub total_frames: usize,
    pub avg: f32,
    pub min: f32,
    pub max: f32,
}

/// Growing list of frame scores in display order
#[derive(Clone, Debug, Default)]
pub struct ScoreTrack {
    scores: Vec<f32>,
}

impl ScoreTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, score: f32) {
        self.scores.push(score);
    }

    /// `None` = no skeleton in this frame
    pub fn push_frame(&mut self, score: Option<f32>) {
        self.push(score.unwrap_or(0.0));
    }

    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Zeros across the board for an empty track
    pub fn summary(&self) -> ScoreSummary {
        if self.scores.is_empty() {
            return ScoreSummary::default();
        }

        let sum: f32 = self.scores.iter().sum();
        ScoreSummary {
            total_frames: self.scores.len(),
            avg: sum / self.scores.len() as f32,
            min: self.scores.iter().copied().fold(f32::INFINITY, f32::min),
            max: self.scores.iter().copied().fold(f32::NEG_INFINITY, f32::max),
        }
    }

    /// Clip length in seconds at the given frame rate (0 for a bad rate)
    pub fn duration_secs(&self, fps: f32) -> f32 {
        if fps > 0.0 {
            self.scores.len() as f32 / fps
        } else {
            0.0
        }
    }

    pub fn clear(&mut self) {
        self.scores.clear();
    }
}
