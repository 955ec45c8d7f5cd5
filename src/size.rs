//! Size tokens and icon size resolution.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named size category for a step, mapped to a canonical icon dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl StepSize {
    /// Canonical icon dimension in pixels for this token.
    ///
    /// The table is closed: exactly five entries, no interpolation.
    pub fn icon_px(self) -> u16 {
        match self {
            Self::Xs => 16,
            Self::Sm => 18,
            Self::Md => 20,
            Self::Lg => 22,
            Self::Xl => 24,
        }
    }
}

/// Error for size tokens outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size token '{0}', expected one of xs, sm, md, lg, xl")]
pub struct ParseSizeError(String);

impl FromStr for StepSize {
    type Err = ParseSizeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "xs" => Ok(Self::Xs),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}

/// Resolve the icon dimension for a step.
///
/// An explicit override wins verbatim, including zero; otherwise the token's
/// table value is used.
pub fn resolve_icon_size(size: StepSize, override_px: Option<u16>) -> u16 {
    override_px.unwrap_or_else(|| size.icon_px())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_table_values() {
        assert_eq!(resolve_icon_size(StepSize::Xs, None), 16);
        assert_eq!(resolve_icon_size(StepSize::Sm, None), 18);
        assert_eq!(resolve_icon_size(StepSize::Md, None), 20);
        assert_eq!(resolve_icon_size(StepSize::Lg, None), 22);
        assert_eq!(resolve_icon_size(StepSize::Xl, None), 24);
    }

    #[test]
    fn test_default_token_resolves_to_20() {
        assert_eq!(resolve_icon_size(StepSize::default(), None), 20);
    }

    #[test]
    fn test_override_wins_verbatim() {
        assert_eq!(resolve_icon_size(StepSize::Xl, Some(7)), 7);
        assert_eq!(resolve_icon_size(StepSize::Xs, Some(48)), 48);
    }

    #[test]
    fn test_zero_override_is_respected() {
        // Zero is an explicit value, not "unset"
        assert_eq!(resolve_icon_size(StepSize::Md, Some(0)), 0);
    }

    #[test]
    fn test_parse_size_tokens() {
        assert_eq!("xs".parse::<StepSize>(), Ok(StepSize::Xs));
        assert_eq!("md".parse::<StepSize>(), Ok(StepSize::Md));
        assert!("huge".parse::<StepSize>().is_err());
    }

    #[test]
    fn test_size_deserializes_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            size: StepSize,
        }

        let parsed: Wrapper = toml::from_str(r#"size = "xl""#).unwrap();
        assert_eq!(parsed.size, StepSize::Xl);
    }
}
