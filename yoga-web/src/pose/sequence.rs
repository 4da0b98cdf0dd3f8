//! Sequence progress tracking for guided multi-pose sessions
//!
//! Walks an ordered list of reference poses. Holding the current pose at or
//! above the advance threshold marks it completed and schedules a move to
//! the next pose once a settle delay has passed, so one lucky frame cannot
//! skip two poses. Time is supplied by the caller (milliseconds), which keeps
//! the tracker deterministic and free of timers.
//!
//! Completion is sticky: a pose stays completed however badly it is done
//! afterwards. Manual jumps move the cursor without touching completion.

use std::collections::BTreeSet;

use crate::config::MatchConfig;
use crate::error::{PoseError, Result};

/// A transition waiting for its settle delay
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingAdvance {
    to: usize,
    due_ms: f64,
}

/// What one observation changed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceStep {
    /// Index newly added to the completed set
    pub completed: Option<usize>,
    /// Index the cursor moved to
    pub advanced_to: Option<usize>,
}

impl SequenceStep {
    pub fn is_noop(&self) -> bool {
        self.completed.is_none() && self.advanced_to.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct SequenceTracker {
    poses: Vec<String>,
    current_index: usize,
    completed: BTreeSet<usize>,
    pending: Option<PendingAdvance>,
    advance_threshold: u8,
    settle_delay_ms: f64,
}

impl SequenceTracker {
    pub fn new(poses: Vec<String>, config: &MatchConfig) -> Result<Self> {
        if poses.is_empty() {
            return Err(PoseError::EmptySequence);
        }
        Ok(Self {
            poses,
            current_index: 0,
            completed: BTreeSet::new(),
            pending: None,
            advance_threshold: config.advance_threshold,
            settle_delay_ms: config.settle_delay_ms,
        })
    }

    /// Feed the score measured against `current_pose()` at time `now_ms`.
    /// Observations with a non-finite clock are ignored.
    pub fn observe(&mut self, score: u8, now_ms: f64) -> SequenceStep {
        let mut step = SequenceStep::default();
        if !now_ms.is_finite() {
            log::warn!("ignoring observation with non-finite clock {now_ms}");
            return step;
        }
        let index = self.current_index;

        if score >= self.advance_threshold && self.completed.insert(index) {
            log::info!("pose {} ({}) completed with {score}%", index, self.poses[index]);
            step.completed = Some(index);

            if index + 1 < self.poses.len() {
                self.pending = Some(PendingAdvance {
                    to: index + 1,
                    due_ms: now_ms + self.settle_delay_ms,
                });
            } else if self.is_complete() {
                log::info!("sequence complete");
            }
        }

        step.advanced_to = self.tick(now_ms);
        step
    }

    /// Apply a scheduled advance whose delay has elapsed
    pub fn tick(&mut self, now_ms: f64) -> Option<usize> {
        match self.pending {
            Some(pending) if now_ms.is_finite() && now_ms >= pending.due_ms => {
                self.pending = None;
                self.current_index = pending.to;
                log::debug!("advanced to pose {} ({})", pending.to, self.poses[pending.to]);
                Some(pending.to)
            }
            _ => None,
        }
    }

    /// Jump straight to `index`. Cancels any scheduled advance.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.poses.len() {
            return Err(PoseError::IndexOutOfRange {
                index,
                len: self.poses.len(),
            });
        }
        self.current_index = index;
        self.pending = None;
        Ok(())
    }

    /// Back to the first pose with nothing completed
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.completed.clear();
        self.pending = None;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_pose(&self) -> &str {
        &self.poses[self.current_index]
    }

    pub fn poses(&self) -> &[String] {
        &self.poses
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending.is_some()
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Every pose completed at least once, in any order
    pub fn is_complete(&self) -> bool {
        self.completed.len() == self.poses.len()
    }
}
