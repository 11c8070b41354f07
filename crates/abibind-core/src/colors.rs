//! ANSI color codes for terminal reports.
//!
//! - Bold: section headings
//! - Blue: member and contract names
//! - Green: ABI types
//! - Yellow: state mutability
//! - Dim: numbering, punctuation, labels

/// ANSI color palette for report output.
///
/// Standard 16-color codes only, so output reads on light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub bold: &'static str,
    pub blue: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        bold: "\x1b[1m",
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        bold: "",
        blue: "",
        green: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
