//! Breakpoint table for the responsive grid.
//!
//! Five fixed viewport tiers, each with a minimum width in pixels and a
//! column count. The three wide tiers pack widgets two per row, the two
//! narrow tiers one per row.

use std::fmt;
use std::str::FromStr;

/// Height of one widget in grid rows (400px at [`ROW_HEIGHT_PX`]).
pub const ROW_HEIGHT: u32 = 20;

/// Pixel height of a single grid row.
pub const ROW_HEIGHT_PX: u32 = 20;

/// A named viewport-width tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Large desktop (>= 1200px, 60 columns).
    Lg,
    /// Desktop (>= 1000px, 50 columns).
    Md,
    /// Tablet (>= 760px, 38 columns).
    Sm,
    /// Large phone (>= 480px, 24 columns).
    Xs,
    /// Everything narrower (16 columns).
    Xxs,
}

impl Breakpoint {
    /// All breakpoints, widest first.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Lg,
        Breakpoint::Md,
        Breakpoint::Sm,
        Breakpoint::Xs,
        Breakpoint::Xxs,
    ];

    /// Key used for this breakpoint in a persisted layout set.
    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Lg => "lg",
            Breakpoint::Md => "md",
            Breakpoint::Sm => "sm",
            Breakpoint::Xs => "xs",
            Breakpoint::Xxs => "xxs",
        }
    }

    /// Minimum viewport width in pixels at which this breakpoint applies.
    pub fn min_width(self) -> u32 {
        match self {
            Breakpoint::Lg => 1200,
            Breakpoint::Md => 1000,
            Breakpoint::Sm => 760,
            Breakpoint::Xs => 480,
            Breakpoint::Xxs => 0,
        }
    }

    /// Number of grid columns at this breakpoint.
    pub fn columns(self) -> u32 {
        match self {
            Breakpoint::Lg => 60,
            Breakpoint::Md => 50,
            Breakpoint::Sm => 38,
            Breakpoint::Xs => 24,
            Breakpoint::Xxs => 16,
        }
    }

    /// Returns `true` if widgets are packed two per row at this breakpoint.
    pub fn is_wide(self) -> bool {
        matches!(self, Breakpoint::Lg | Breakpoint::Md | Breakpoint::Sm)
    }

    /// Picks the widest breakpoint whose minimum width fits `width_px`.
    pub fn for_width(width_px: u32) -> Breakpoint {
        Self::ALL
            .into_iter()
            .find(|bp| width_px >= bp.min_width())
            .unwrap_or(Breakpoint::Xxs)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBreakpointError(pub String);

impl fmt::Display for ParseBreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid breakpoint: {} (expected lg, md, sm, xs or xxs)",
            self.0
        )
    }
}

impl std::error::Error for ParseBreakpointError {}

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseBreakpointError(s.to_string()))
    }
}
