//! stepline - step indicator widget for ratatui progress flows.
//!
//! A [`Step`] renders one entry of a multi-step progress control. It is
//! fully controlled: the parent stepper owns each step's lifecycle state
//! and pushes changes in; the widget resolves state, size token, and
//! optional custom icons into an icon region and a text region, animating
//! the completed checkmark in and out with a fixed 200 ms pop.
//!
//! The crate also ships a small demo host (`stepline-demo`) that plays the
//! parent-stepper role.

pub mod config;
pub mod icon;
pub mod logging;
pub mod size;
pub mod state;
pub mod step;
pub mod terminal_guard;
pub mod theme;
pub mod transition;

pub use icon::{resolve_icon, CheckIcon, IconSet, StepIcon, CHECK_GLYPH};
pub use size::{resolve_icon_size, ParseSizeError, StepSize};
pub use state::StepState;
pub use step::{Step, StepConfig, StepEvent, StepView};
pub use theme::{StepClasses, StepTheme};
pub use transition::{
    Transition, TransitionEvent, TransitionKind, TransitionPhase, TransitionStyle, POP_DURATION,
};
