//! A single step indicator inside a stepper.
//!
//! The widget is fully controlled: the parent stepper owns the lifecycle
//! state and pushes changes through [`Step::set_state`]. Each render pass
//! resolves state, size, and icons into a [`StepView`] and draws it.

use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::icon::{resolve_icon, CheckIcon, IconSet, StepIcon};
use crate::size::{resolve_icon_size, StepSize};
use crate::state::StepState;
use crate::theme::{StepClasses, StepTheme};
use crate::transition::{Transition, TransitionEvent, TransitionPhase, TransitionStyle};

/// Construction options for [`Step`].
///
/// Unset fields fall back to documented defaults when the step is built:
/// `with_icon` defaults to `true`, `size` to [`StepSize::Md`], `theme` to
/// [`StepTheme::default`]. `icon_size` is a verbatim pixel override and may
/// be zero.
#[derive(Debug, Clone, Default)]
pub struct StepConfig {
    pub state: StepState,
    pub icons: IconSet,
    pub label: Option<String>,
    pub description: Option<String>,
    pub with_icon: Option<bool>,
    pub size: Option<StepSize>,
    pub icon_size: Option<u16>,
    pub theme: Option<StepTheme>,
    /// Patched over the state-dependent container style, the caller's
    /// class-name override.
    pub style_override: Option<Style>,
}

/// Result of step input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The step was activated (Enter or Space).
    Activated,
}

/// Resolved presentation for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView<'a> {
    pub state: StepState,
    /// Icon for the normal (non-completed) slot.
    pub icon: Option<&'a StepIcon>,
    /// Resolved icon dimension in pixels.
    pub icon_px: u16,
    /// Caller-supplied completed icon; `None` means the built-in check.
    pub completed_icon: Option<&'a StepIcon>,
    /// Frame style for the completed-icon wrapper; `None` while unmounted.
    pub completed_style: Option<TransitionStyle>,
    pub phase: TransitionPhase,
    pub label: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// A single step indicator.
#[derive(Debug, Clone)]
pub struct Step {
    state: StepState,
    icons: IconSet,
    label: Option<String>,
    description: Option<String>,
    with_icon: bool,
    size: StepSize,
    icon_size: Option<u16>,
    theme: StepTheme,
    style_override: Option<Style>,
    transition: Transition,
}

impl Step {
    /// Build a step, normalizing defaults once. The transition starts
    /// settled: the initial state never animates.
    pub fn new(config: StepConfig) -> Self {
        let state = config.state;
        Self {
            state,
            icons: config.icons,
            label: config.label,
            description: config.description,
            with_icon: config.with_icon.unwrap_or(true),
            size: config.size.unwrap_or_default(),
            icon_size: config.icon_size,
            theme: config.theme.unwrap_or_default(),
            style_override: config.style_override,
            transition: Transition::settled(state.is_completed()),
        }
    }

    pub fn state(&self) -> StepState {
        self.state
    }

    /// Parent stepper pushes a new lifecycle state. Returns the transition
    /// started for the completed-icon wrapper, if any.
    pub fn set_state(&mut self, state: StepState, now: Instant) -> Option<TransitionEvent> {
        self.state = state;
        self.transition.set_mounted(state.is_completed(), now)
    }

    /// Resolve state, icons, and size into a renderable view.
    ///
    /// When icons are disabled the icon slots resolve to nothing and the
    /// transition has no effect on output.
    pub fn resolve_at(&self, now: Instant) -> StepView<'_> {
        let icon_px = resolve_icon_size(self.size, self.icon_size);
        let (icon, completed_icon, completed_style, phase) = if self.with_icon {
            (
                resolve_icon(self.state, &self.icons),
                self.icons.completed_icon.as_ref(),
                self.transition.style_at(now),
                self.transition.phase_at(now),
            )
        } else {
            (None, None, None, TransitionPhase::Unmounted)
        };
        StepView {
            state: self.state,
            icon,
            icon_px,
            completed_icon,
            completed_style,
            phase,
            label: self.label.as_deref(),
            description: self.description.as_deref(),
        }
    }

    /// Handle key input for the interactive container. Enter and Space
    /// activate the step; everything else is ignored.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<StepEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => Some(StepEvent::Activated),
            _ => None,
        }
    }

    /// Render at the current wall clock.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        self.render_at(frame, area, Instant::now());
    }

    /// Render with an explicit clock so hosts and tests control animation
    /// sampling.
    pub fn render_at(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let view = self.resolve_at(now);
        let classes = self.theme.classes();
        let mut container = self.theme.state_style(self.state);
        if let Some(style) = self.style_override {
            container = container.patch(style);
        }

        if !self.with_icon {
            self.render_body(frame, area, &view, &classes, container);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(icon_region_width(view.icon_px)),
                Constraint::Min(0),
            ])
            .split(area);

        self.render_icon_region(frame, chunks[0], &view, &classes, container);
        self.render_body(frame, chunks[1], &view, &classes, container);
    }

    /// Icon region: completed-icon transition wrapper first, then the
    /// resolved normal-slot icon.
    fn render_icon_region(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &StepView,
        classes: &StepClasses,
        container: Style,
    ) {
        let mut spans: Vec<Span> = Vec::new();
        if let Some(span) = self.completed_span(view, classes) {
            spans.push(span);
        }
        if let Some(icon) = view.icon {
            spans.push(icon.as_span(classes.step_icon));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .style(container)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    /// Completed-icon wrapper content for the current animation frame.
    ///
    /// While the pop animation grows the icon, the glyph steps through a
    /// small-to-full ramp; low opacity renders in the muted color.
    fn completed_span<'a>(
        &self,
        view: &StepView<'a>,
        classes: &StepClasses,
    ) -> Option<Span<'a>> {
        let frame_style = view.completed_style?;

        if frame_style.scale >= 0.8 {
            if let Some(icon) = view.completed_icon {
                return Some(icon.as_span(classes.step_completed_icon));
            }
        }

        let glyph = if frame_style.scale < 0.4 {
            "·"
        } else if frame_style.scale < 0.8 {
            "•"
        } else {
            CheckIcon::new(view.icon_px).glyph()
        };
        let style = if frame_style.opacity < 0.6 {
            Style::default().fg(self.theme.muted)
        } else {
            classes.step_completed_icon
        };
        Some(Span::styled(glyph, style))
    }

    /// Text region: label, then description in the muted style.
    fn render_body(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &StepView,
        classes: &StepClasses,
        container: Style,
    ) {
        let mut lines: Vec<Line> = Vec::new();
        if let Some(label) = view.label {
            lines.push(Line::from(Span::styled(label, classes.step_label)));
        }
        if let Some(description) = view.description {
            lines.push(Line::from(Span::styled(
                description,
                classes.step_description,
            )));
        }
        if lines.is_empty() {
            return;
        }

        let paragraph = Paragraph::new(lines).style(container.patch(classes.step_body));
        frame.render_widget(paragraph, area);
    }
}

/// Width of the icon region in terminal cells, at roughly 4 px per cell.
fn icon_region_width(px: u16) -> u16 {
    (px / 4).max(1)
}
