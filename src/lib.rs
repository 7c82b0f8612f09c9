//! tinted - incremental syntax tagging for editor display surfaces
//!
//! Lexes buffer text with a per-language tokenizer, maps the tokens to
//! buffer positions, and keeps style tags on a display surface in step
//! with edits, language switches and theme switches.

pub mod error;
pub mod highlight;
pub mod render;
pub mod settings;
pub mod surface;
pub mod syntax;
pub mod theme;

pub use error::{ConfigError, Error, Result};
pub use highlight::{
    EditScope, HighlightController, HighlightState, HighlighterConfig, Host, NullHost, PassMode, PassReport,
};
pub use settings::{FileSettingsStore, MemorySettingsStore, Settings, SettingsStore};
pub use surface::{DisplaySurface, TagRange, TextSurface};
pub use theme::{Appearance, ThemeConfig, ThemeSource, ThemeStore};
