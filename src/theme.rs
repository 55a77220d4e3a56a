//! Color palette definitions for platter's TUI.
//!
//! This module exposes a small, opinionated theme used throughout the user
//! interface. Colors are grouped into neutrals (base/mantle/surfaces),
//! overlays/subtexts, and accents for highlighting and semantic states.

use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings.
    pub mauve: Color,
    /// Accent used for prices and positive emphasis.
    pub green: Color,
    /// Accent used for badges and attention.
    pub peach: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
///
/// This is a small helper to keep the palette definition concise.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: hex((30, 30, 46)),
        mantle: hex((24, 24, 37)),
        surface1: hex((69, 71, 90)),
        overlay1: hex((127, 132, 156)),
        overlay2: hex((147, 153, 178)),
        text: hex((205, 214, 244)),
        subtext0: hex((166, 173, 200)),
        sapphire: hex((116, 199, 236)),
        mauve: hex((203, 166, 247)),
        green: hex((166, 227, 161)),
        peach: hex((250, 179, 135)),
        lavender: hex((180, 190, 254)),
    }
}
