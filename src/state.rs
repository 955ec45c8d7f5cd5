//! Step lifecycle state, owned and assigned by the parent stepper.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a single step.
///
/// The parent stepper decides which state each step is in as the user
/// advances; the widget only reads it per render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    /// The user has not reached this step yet.
    #[default]
    Inactive,
    /// The step the user is currently on.
    InProgress,
    /// The user has moved past this step.
    Completed,
}

impl StepState {
    /// Whether the completed-icon wrapper should be mounted for this state.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}
