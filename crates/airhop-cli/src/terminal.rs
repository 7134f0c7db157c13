//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for the text output.
//! Everything falls back to plain text when colors are disabled.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for airport codes.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements (separators, footers).
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for flight legs.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for ground transfers.
    pub const GREEN: &str = "\x1b[32m";
    /// Orange (256-color) for warnings such as "no route".
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub code: &'static str,
    pub muted: &'static str,
    pub flight: &'static str,
    pub ground: &'static str,
    pub warning: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            code: colors::WHITE_BOLD,
            muted: colors::GRAY,
            flight: colors::CYAN,
            ground: colors::GREEN,
            warning: colors::ORANGE,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            code: "",
            muted: "",
            flight: "",
            ground: "",
            warning: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a number with thousand separators (commas).
///
/// # Examples
///
/// ```
/// # use airhop_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    if n < 1000 {
        return n.to_string();
    }
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a distance in kilometres, rounded to the nearest whole km.
#[must_use]
pub fn format_distance_km(km: f64) -> String {
    format!("{} km", format_with_separators(km.max(0.0).round() as u64))
}
