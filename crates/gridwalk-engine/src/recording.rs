#![forbid(unsafe_code)]

//! The replayable product of one traversal run.

use gridwalk_grid::Cell;

use crate::request::AlgorithmKind;
use crate::step::Step;

/// An ordered, finite sequence of [`Step`]s produced by exactly one
/// [`crate::TraversalRequest`]. Immutable once produced; a changed input
/// yields a whole new recording, never a patch.
///
/// Every recording has at least two steps: the initialization step and a
/// terminal step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recording {
    algorithm: AlgorithmKind,
    steps: Vec<Step>,
    revision: u64,
}

impl Recording {
    pub(crate) fn new(algorithm: AlgorithmKind, steps: Vec<Step>, revision: u64) -> Self {
        debug_assert!(steps.len() >= 2, "recording must have init + terminal");
        debug_assert!(
            steps.iter().enumerate().all(|(i, s)| s.index == i),
            "step indices must be contiguous from 0"
        );
        debug_assert!(
            steps.iter().rev().skip(1).all(|s| !s.terminal),
            "only the last step may be terminal"
        );
        debug_assert!(steps.last().is_some_and(|s| s.terminal));
        Self {
            algorithm,
            steps,
            revision,
        }
    }

    /// The strategy that produced this recording.
    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Grid-model revision the source request was snapshotted at.
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of steps. Always at least 2.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Recordings are never empty; present for container-API symmetry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the terminal step.
    #[inline]
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// The step at `index`, or `None` past the end.
    #[must_use]
    pub fn step_at(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// All steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The terminal step.
    #[must_use]
    pub fn terminal(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// Whether the goal was reached.
    #[must_use]
    pub fn found(&self) -> bool {
        self.terminal().is_success()
    }

    /// The start-to-goal path, when the goal was reached.
    #[must_use]
    pub fn path(&self) -> Option<&[Cell]> {
        self.terminal().path.as_deref()
    }
}
