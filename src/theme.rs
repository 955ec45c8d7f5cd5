//! Styling for step widgets.
//!
//! The theme resolves semantic class names into concrete ratatui styles so
//! render code never builds styles inline.

use ratatui::style::{Color, Modifier, Style};

use crate::size::{resolve_icon_size, StepSize};
use crate::state::StepState;

/// Color palette for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTheme {
    /// Accent for in-progress and completed steps.
    pub accent: Color,
    /// Dimmed color for inactive content and descriptions.
    pub muted: Color,
    /// Primary text color.
    pub text: Color,
}

impl Default for StepTheme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }
}

/// Resolved styles for each semantic region of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepClasses {
    pub step: Style,
    pub inactive: Style,
    pub in_progress: Style,
    pub completed: Style,
    pub step_icon: Style,
    pub step_completed_icon: Style,
    pub step_body: Style,
    pub step_label: Style,
    pub step_description: Style,
}

impl StepTheme {
    /// Resolve the full class mapping for this theme.
    pub fn classes(&self) -> StepClasses {
        StepClasses {
            step: Style::default().fg(self.text),
            inactive: Style::default().fg(self.muted),
            in_progress: Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            completed: Style::default().fg(self.accent),
            step_icon: Style::default().fg(self.text),
            step_completed_icon: Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            step_body: Style::default().fg(self.text),
            step_label: Style::default()
                .fg(self.text)
                .add_modifier(Modifier::BOLD),
            step_description: Style::default().fg(self.muted),
        }
    }

    /// Container style variant for a lifecycle state.
    pub fn state_style(&self, state: StepState) -> Style {
        let classes = self.classes();
        match state {
            StepState::Inactive => classes.inactive,
            StepState::InProgress => classes.in_progress,
            StepState::Completed => classes.completed,
        }
    }

    /// Size lookup helper; same table as [`crate::size::resolve_icon_size`].
    pub fn icon_px(&self, size: StepSize, override_px: Option<u16>) -> u16 {
        resolve_icon_size(size, override_px)
    }
}
