//! Style types for tagged text
//!
//! This module provides the display directives a token kind maps to:
//! a foreground color and/or a font variant.

use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color, written as `#RRGGBB` in theme files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or the short `#RGB` form
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            3 => {
                // #abc expands to #aabbcc
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Self::rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or(())
    }
}

/// Font variants a tag may switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontVariant {
    Italic,
    Bold,
    /// First-level heading font
    Heading,
    /// Second-level heading font
    Subheading,
}

impl FontVariant {
    /// Get a human-readable name for this variant
    pub fn name(&self) -> &'static str {
        match self {
            FontVariant::Italic => "italic",
            FontVariant::Bold => "bold",
            FontVariant::Heading => "heading",
            FontVariant::Subheading => "subheading",
        }
    }
}

/// Display directive attached to a tag
///
/// Both fields are optional: a directive only overrides what it sets,
/// so several tags on one range combine additively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleDirective {
    /// Foreground color
    pub foreground: Option<Color>,
    /// Font variant
    pub font: Option<FontVariant>,
}

impl StyleDirective {
    /// Create a directive with just a foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            foreground: Some(color),
            ..Default::default()
        }
    }

    /// Create a directive with just a font variant
    pub fn font(font: FontVariant) -> Self {
        Self {
            font: Some(font),
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Builder: set font variant
    pub fn with_font(mut self, font: FontVariant) -> Self {
        self.font = Some(font);
        self
    }

    /// Check if this directive changes nothing
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.font.is_none()
    }

    /// Layer `over` on top of this directive
    pub fn merged_with(self, over: StyleDirective) -> Self {
        Self {
            foreground: over.foreground.or(self.foreground),
            font: over.font.or(self.font),
        }
    }
}
