//! Responsive breakpoint definitions for the portfolio UI.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Named minimum-width threshold, ordered from narrowest to widest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Small phones; the unprefixed base layer.
    Xs,
    /// Large phones.
    Sm,
    /// Tablets.
    Md,
    /// Laptops.
    Lg,
    /// Desktops.
    Xl,
    /// Large desktops (`2xl`).
    Xxl,
}

impl Breakpoint {
    /// Every breakpoint in ascending width order.
    pub const ALL: [Self; 6] = [Self::Xs, Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Name used in utility class prefixes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Selector prefix prepended to fragments; empty for the base layer.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Xs => "",
            Self::Sm => "sm:",
            Self::Md => "md:",
            Self::Lg => "lg:",
            Self::Xl => "xl:",
            Self::Xxl => "2xl:",
        }
    }

    /// Inclusive minimum viewport width in CSS pixels.
    #[must_use]
    pub const fn min_width(self) -> u16 {
        match self {
            Self::Xs => 320,
            Self::Sm => 640,
            Self::Md => 768,
            Self::Lg => 1024,
            Self::Xl => 1280,
            Self::Xxl => 1536,
        }
    }

    /// Next wider breakpoint, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Xs => Some(Self::Sm),
            Self::Sm => Some(Self::Md),
            Self::Md => Some(Self::Lg),
            Self::Lg => Some(Self::Xl),
            Self::Xl => Some(Self::Xxl),
            Self::Xxl => None,
        }
    }

    /// Widest breakpoint whose threshold the width reaches.
    ///
    /// Widths narrower than the `xs` threshold still resolve to [`Self::Xs`].
    #[must_use]
    pub fn for_width(width: u16) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Self::Xs)
    }
}

impl Display for Breakpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a breakpoint name is outside the known set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown breakpoint")]
pub struct BreakpointParseError {
    /// Name supplied by the caller.
    pub value: String,
}

impl FromStr for Breakpoint {
    type Err = BreakpointParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|bp| bp.name() == value)
            .ok_or_else(|| BreakpointParseError {
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Breakpoint;

    #[test]
    fn breakpoint_selection_matches_ranges() {
        assert_eq!(Breakpoint::for_width(0), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(639), Breakpoint::Xs);
        assert_eq!(Breakpoint::for_width(640), Breakpoint::Sm);
        assert_eq!(Breakpoint::for_width(1024), Breakpoint::Lg);
        assert_eq!(Breakpoint::for_width(1535), Breakpoint::Xl);
        assert_eq!(Breakpoint::for_width(2000), Breakpoint::Xxl);
    }

    #[test]
    fn prefixes_are_empty_only_for_base() {
        for bp in Breakpoint::ALL {
            if bp == Breakpoint::Xs {
                assert_eq!(bp.prefix(), "");
            } else {
                assert_eq!(bp.prefix(), format!("{}:", bp.name()));
            }
        }
    }

    #[test]
    fn ordering_follows_width() {
        let mut widths = Breakpoint::ALL.map(Breakpoint::min_width).to_vec();
        widths.sort_unstable();
        assert_eq!(widths, Breakpoint::ALL.map(Breakpoint::min_width).to_vec());
        assert!(Breakpoint::Sm < Breakpoint::Xxl);
        assert_eq!(Breakpoint::Xl.next(), Some(Breakpoint::Xxl));
        assert_eq!(Breakpoint::Xxl.next(), None);
    }

    #[test]
    fn parses_known_names_only() {
        assert_eq!("2xl".parse::<Breakpoint>(), Ok(Breakpoint::Xxl));
        assert_eq!("md".parse::<Breakpoint>(), Ok(Breakpoint::Md));
        let err = "3xl".parse::<Breakpoint>().expect_err("unknown name");
        assert_eq!(err.value, "3xl");
    }
}
