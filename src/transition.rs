//! Entrance/exit animation for the completed-icon wrapper.
//!
//! The controller holds only timestamps; the host's redraw tick drives
//! sampling via [`Transition::style_at`]. There is no timer thread.

use std::time::{Duration, Instant};

/// Fixed duration of the pop animation.
pub const POP_DURATION: Duration = Duration::from_millis(200);

/// Animation kind. Closed set: the completed icon always pops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Pop,
}

/// Where the wrapper currently is in its mount cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Fully hidden, no layout impact.
    Unmounted,
    /// Entrance animation in flight.
    Entering,
    /// Fully shown.
    Mounted,
    /// Exit animation in flight.
    Exiting,
}

/// Emitted once when a transition starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEvent {
    /// `Entering` or `Exiting`.
    pub phase: TransitionPhase,
    pub kind: TransitionKind,
    pub duration: Duration,
}

/// Interpolated style values for one frame of the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    /// 0.0 collapsed, 1.0 full size; may overshoot slightly while entering.
    pub scale: f32,
    /// 0.0 invisible, 1.0 opaque.
    pub opacity: f32,
}

/// Two-state (mounted/unmounted) animation driver for one step instance.
///
/// Retargeting while a transition is in flight restarts the interpolation
/// from the current value toward the new target, so rapid toggling never
/// jumps.
#[derive(Debug, Clone)]
pub struct Transition {
    mounted: bool,
    /// Interpolation start value, captured at the last retarget.
    from: f32,
    /// `None` while settled; set while a transition runs.
    started: Option<Instant>,
}

impl Transition {
    /// Construct in the settled phase for `mounted`. The initial render
    /// never animates.
    pub fn settled(mounted: bool) -> Self {
        Self {
            mounted,
            from: if mounted { 1.0 } else { 0.0 },
            started: None,
        }
    }

    /// Retarget the wrapper. Returns the started transition, or `None` when
    /// the target is unchanged.
    pub fn set_mounted(&mut self, mounted: bool, now: Instant) -> Option<TransitionEvent> {
        if mounted == self.mounted {
            return None;
        }
        self.from = self.value_at(now);
        self.mounted = mounted;
        self.started = Some(now);
        Some(TransitionEvent {
            phase: if mounted {
                TransitionPhase::Entering
            } else {
                TransitionPhase::Exiting
            },
            kind: TransitionKind::Pop,
            duration: POP_DURATION,
        })
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn target(&self) -> f32 {
        if self.mounted {
            1.0
        } else {
            0.0
        }
    }

    fn progress_at(&self, now: Instant) -> f32 {
        match self.started {
            None => 1.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / POP_DURATION.as_secs_f32()).min(1.0)
            }
        }
    }

    /// Eased visibility value, 0.0 hidden to 1.0 shown.
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress_at(now);
        if t >= 1.0 {
            self.target()
        } else {
            self.from + (self.target() - self.from) * ease_out_cubic(t)
        }
    }

    /// Phase is total for any state sequence, including rapid toggling.
    pub fn phase_at(&self, now: Instant) -> TransitionPhase {
        let settled = self.progress_at(now) >= 1.0;
        match (self.mounted, settled) {
            (true, true) => TransitionPhase::Mounted,
            (true, false) => TransitionPhase::Entering,
            (false, true) => TransitionPhase::Unmounted,
            (false, false) => TransitionPhase::Exiting,
        }
    }

    /// Frame style for the wrapper; `None` once fully unmounted, at which
    /// point the wrapper is absent from layout.
    pub fn style_at(&self, now: Instant) -> Option<TransitionStyle> {
        if self.phase_at(now) == TransitionPhase::Unmounted {
            return None;
        }
        let value = self.value_at(now);
        let scale = if self.mounted {
            pop_overshoot(value)
        } else {
            value
        };
        Some(TransitionStyle {
            scale,
            opacity: value,
        })
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Back-out easing applied to the entrance scale so the checkmark pops
/// slightly past full size before settling.
fn pop_overshoot(value: f32) -> f32 {
    const C1: f32 = 1.701_58;
    const C3: f32 = C1 + 1.0;
    let shifted = value - 1.0;
    1.0 + C3 * shifted * shifted * shifted + C1 * shifted * shifted
}
