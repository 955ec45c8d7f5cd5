//! Icon content for the step icon region.

use ratatui::style::Style;
use ratatui::text::Span;

use crate::state::StepState;

/// Glyph drawn by the built-in completed-step fallback.
pub const CHECK_GLYPH: &str = "✓";

/// A small glyph rendered inside a step's icon region.
///
/// Icons are short strings (a symbol, a digit for the step index, a spinner
/// frame) with an optional style override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIcon {
    glyph: String,
    style: Option<Style>,
}

impl StepIcon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            style: None,
        }
    }

    pub fn styled(glyph: impl Into<String>, style: Style) -> Self {
        Self {
            glyph: glyph.into(),
            style: Some(style),
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Span for this icon, falling back to the region style when the icon
    /// carries no style of its own.
    pub(crate) fn as_span(&self, region_style: Style) -> Span<'_> {
        Span::styled(self.glyph.as_str(), self.style.unwrap_or(region_style))
    }
}

/// Optional per-state icons supplied by the caller.
///
/// Any subset may be set; a missing icon degrades silently to an empty slot
/// (see [`resolve_icon`]), except for the completed state which falls back to
/// the built-in [`CheckIcon`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    /// Icon for the inactive/default state.
    pub icon: Option<StepIcon>,
    /// Icon shown while the step is in progress.
    pub progress_icon: Option<StepIcon>,
    /// Icon shown once the step is completed, replacing the built-in check.
    pub completed_icon: Option<StepIcon>,
}

/// Built-in checkmark primitive used when no completed icon is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckIcon {
    pub width: u16,
    pub height: u16,
}

impl CheckIcon {
    /// Square checkmark at the given pixel dimension.
    pub fn new(px: u16) -> Self {
        Self {
            width: px,
            height: px,
        }
    }

    pub fn glyph(self) -> &'static str {
        CHECK_GLYPH
    }
}

/// Pick the icon for the normal (non-completed) slot.
///
/// Precedence:
/// 1. `Completed` suppresses this slot entirely; the completed icon is owned
///    by the transition wrapper, not this slot.
/// 2. `InProgress` shows `progress_icon` if supplied. There is deliberately
///    no fallback to `icon` here.
/// 3. `Inactive` shows `icon` if supplied.
///
/// Missing icons are never an error: the slot is simply empty.
pub fn resolve_icon(state: StepState, icons: &IconSet) -> Option<&StepIcon> {
    match state {
        StepState::Completed => None,
        StepState::InProgress => icons.progress_icon.as_ref(),
        StepState::Inactive => icons.icon.as_ref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(icon: bool, progress: bool, completed: bool) -> IconSet {
        IconSet {
            icon: icon.then(|| StepIcon::new("I")),
            progress_icon: progress.then(|| StepIcon::new("P")),
            completed_icon: completed.then(|| StepIcon::new("C")),
        }
    }

    #[test]
    fn test_completed_always_suppresses_normal_slot() {
        // All 8 presence combinations: the slot is empty while completed
        for icon in [false, true] {
            for progress in [false, true] {
                for completed in [false, true] {
                    let set = icons(icon, progress, completed);
                    assert_eq!(resolve_icon(StepState::Completed, &set), None);
                }
            }
        }
    }

    #[test]
    fn test_in_progress_uses_progress_icon_only() {
        for icon in [false, true] {
            for completed in [false, true] {
                let with_progress = icons(icon, true, completed);
                assert_eq!(
                    resolve_icon(StepState::InProgress, &with_progress)
                        .map(StepIcon::glyph),
                    Some("P")
                );
            }
        }
    }

    #[test]
    fn test_in_progress_without_progress_icon_is_empty() {
        // Documented edge case: no fallback to the default icon while in
        // progress, even when one is supplied.
        for icon in [false, true] {
            for completed in [false, true] {
                let set = icons(icon, false, completed);
                assert_eq!(resolve_icon(StepState::InProgress, &set), None);
            }
        }
    }

    #[test]
    fn test_inactive_uses_default_icon() {
        for progress in [false, true] {
            for completed in [false, true] {
                let with_icon = icons(true, progress, completed);
                assert_eq!(
                    resolve_icon(StepState::Inactive, &with_icon).map(StepIcon::glyph),
                    Some("I")
                );

                let without_icon = icons(false, progress, completed);
                assert_eq!(resolve_icon(StepState::Inactive, &without_icon), None);
            }
        }
    }

    #[test]
    fn test_check_icon_is_square() {
        let check = CheckIcon::new(20);
        assert_eq!(check.width, 20);
        assert_eq!(check.height, 20);
        assert_eq!(check.glyph(), "✓");
    }

    #[test]
    fn test_icon_span_prefers_own_style() {
        use ratatui::style::{Color, Style};

        let own = Style::default().fg(Color::Green);
        let region = Style::default().fg(Color::White);

        let styled = StepIcon::styled("x", own);
        assert_eq!(styled.as_span(region).style, own);

        let plain = StepIcon::new("x");
        assert_eq!(plain.as_span(region).style, region);
    }
}
