//! Theme configuration
//!
//! A theme file is a flat TOML table of `#RRGGBB` colors:
//!
//! ```text
//! comment_color = "#6A737D"
//! string_color = "#98C379"
//! keyword_color = "#C678DD"
//! # ... every key in ThemeConfig::REQUIRED_KEYS
//! ```
//!
//! Every required key must be present; extra keys are ignored.

use std::fs;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::syntax::Color;

/// Named color roles a theme provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Comment,
    String,
    Number,
    Keyword,
    Operator,
    Function,
    ClassSelf,
    Namespace,
    Object,
    /// Default text color
    Font,
    Selection,
    Background,
    MenuBgActive,
    MenuFgActive,
}

impl Role {
    /// Every role, in theme file order
    pub const ALL: [Role; 14] = [
        Role::Comment,
        Role::String,
        Role::Number,
        Role::Keyword,
        Role::Operator,
        Role::Function,
        Role::ClassSelf,
        Role::Namespace,
        Role::Object,
        Role::Font,
        Role::Selection,
        Role::Background,
        Role::MenuBgActive,
        Role::MenuFgActive,
    ];

    /// Key of this role in theme files
    pub fn key(&self) -> &'static str {
        match self {
            Role::Comment => "comment_color",
            Role::String => "string_color",
            Role::Number => "number_color",
            Role::Keyword => "keyword_color",
            Role::Operator => "operator_color",
            Role::Function => "function_color",
            Role::ClassSelf => "class_self_color",
            Role::Namespace => "namespace_color",
            Role::Object => "object_color",
            Role::Font => "font_color",
            Role::Selection => "selection_color",
            Role::Background => "bg_color",
            Role::MenuBgActive => "menu_bg_active",
            Role::MenuFgActive => "menu_fg_active",
        }
    }
}

/// Where a theme is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// A theme file on disk
    File(PathBuf),
    /// Theme text held in memory
    Inline(String),
}

impl From<PathBuf> for ThemeSource {
    fn from(path: PathBuf) -> Self {
        ThemeSource::File(path)
    }
}

/// A complete set of theme colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub comment: Color,
    pub string: Color,
    pub number: Color,
    pub keyword: Color,
    pub operator: Color,
    pub function: Color,
    pub class_self: Color,
    pub namespace: Color,
    pub object: Color,
    pub font: Color,
    pub selection: Color,
    pub background: Color,
    pub menu_bg_active: Color,
    pub menu_fg_active: Color,
}

impl ThemeConfig {
    /// Keys every theme must define
    pub const REQUIRED_KEYS: [&'static str; 14] = [
        "comment_color",
        "string_color",
        "number_color",
        "keyword_color",
        "operator_color",
        "function_color",
        "class_self_color",
        "namespace_color",
        "object_color",
        "font_color",
        "selection_color",
        "bg_color",
        "menu_bg_active",
        "menu_fg_active",
    ];

    /// Load a theme from a file or inline text
    pub fn load(source: &ThemeSource) -> Result<Self, ConfigError> {
        match source {
            ThemeSource::File(path) => Self::parse(&fs::read_to_string(path)?),
            ThemeSource::Inline(text) => Self::parse(text),
        }
    }

    /// Parse theme file contents
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(contents)?;
        Self::from_lookup(|key| {
            table.get(key).map(|value| match value {
                toml::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
        })
    }

    /// Build a theme from stored settings, if they hold every role
    pub fn from_settings(settings: &crate::settings::Settings) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| settings.get(key).map(str::to_string))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let color = |role: Role| -> Result<Color, ConfigError> {
            let key = role.key();
            let value = lookup(key).ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
            Color::from_hex(&value).ok_or_else(|| ConfigError::InvalidColor {
                key: key.to_string(),
                value,
            })
        };

        Ok(Self {
            comment: color(Role::Comment)?,
            string: color(Role::String)?,
            number: color(Role::Number)?,
            keyword: color(Role::Keyword)?,
            operator: color(Role::Operator)?,
            function: color(Role::Function)?,
            class_self: color(Role::ClassSelf)?,
            namespace: color(Role::Namespace)?,
            object: color(Role::Object)?,
            font: color(Role::Font)?,
            selection: color(Role::Selection)?,
            background: color(Role::Background)?,
            menu_bg_active: color(Role::MenuBgActive)?,
            menu_fg_active: color(Role::MenuFgActive)?,
        })
    }

    /// Color assigned to a role
    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::Comment => self.comment,
            Role::String => self.string,
            Role::Number => self.number,
            Role::Keyword => self.keyword,
            Role::Operator => self.operator,
            Role::Function => self.function,
            Role::ClassSelf => self.class_self,
            Role::Namespace => self.namespace,
            Role::Object => self.object,
            Role::Font => self.font,
            Role::Selection => self.selection,
            Role::Background => self.background,
            Role::MenuBgActive => self.menu_bg_active,
            Role::MenuFgActive => self.menu_fg_active,
        }
    }

    /// Theme keys and `#RRGGBB` values
    pub fn to_entries(&self) -> Vec<(&'static str, String)> {
        Role::ALL
            .iter()
            .map(|role| (role.key(), self.color(*role).to_string()))
            .collect()
    }
}

impl Default for ThemeConfig {
    /// The built-in dark theme
    fn default() -> Self {
        Self {
            comment: Color::rgb(0x6A, 0x73, 0x7D),
            string: Color::rgb(0x98, 0xC3, 0x79),
            number: Color::rgb(0xD1, 0x9A, 0x66),
            keyword: Color::rgb(0xC6, 0x78, 0xDD),
            operator: Color::rgb(0x56, 0xB6, 0xC2),
            function: Color::rgb(0x61, 0xAF, 0xEF),
            class_self: Color::rgb(0xE5, 0xC0, 0x7B),
            namespace: Color::rgb(0xE0, 0x6C, 0x75),
            object: Color::rgb(0x61, 0xAF, 0xEF),
            font: Color::rgb(0xAB, 0xB2, 0xBF),
            selection: Color::rgb(0x3E, 0x44, 0x51),
            background: Color::rgb(0x28, 0x2C, 0x34),
            menu_bg_active: Color::rgb(0x3E, 0x44, 0x51),
            menu_fg_active: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// UI-wide appearance derived from a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub text_selection_bg: Color,
    pub insertion_color: Color,
    pub menu_fg: Color,
    pub menu_bg: Color,
    pub font_color: Color,
    pub textarea_background_color: Color,
    pub menubar_active_bg: Color,
    pub menubar_active_fg: Color,
    pub menu_active_bg: Color,
    pub menu_active_fg: Color,
}

impl Appearance {
    /// Derive window-level colors from a theme
    pub fn derive(theme: &ThemeConfig) -> Self {
        Self {
            text_selection_bg: theme.selection,
            insertion_color: theme.font,
            menu_fg: theme.comment,
            menu_bg: theme.background,
            font_color: theme.font,
            textarea_background_color: theme.background,
            menubar_active_bg: theme.menu_bg_active,
            menubar_active_fg: theme.menu_fg_active,
            menu_active_bg: theme.menu_bg_active,
            menu_active_fg: theme.menu_fg_active,
        }
    }

    /// Settings keys and `#RRGGBB` values
    pub fn to_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("text_selection_bg", self.text_selection_bg.to_string()),
            ("insertion_color", self.insertion_color.to_string()),
            ("menu_fg", self.menu_fg.to_string()),
            ("menu_bg", self.menu_bg.to_string()),
            ("font_color", self.font_color.to_string()),
            ("textarea_background_color", self.textarea_background_color.to_string()),
            ("menubar_active_bg", self.menubar_active_bg.to_string()),
            ("menubar_active_fg", self.menubar_active_fg.to_string()),
            ("menu_active_bg", self.menu_active_bg.to_string()),
            ("menu_active_fg", self.menu_active_fg.to_string()),
        ]
    }
}
