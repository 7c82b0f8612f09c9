//! Theme store
//!
//! Holds the active theme and resolves token kinds to display
//! directives through the style tag table.

mod config;
mod table;

pub use config::{Appearance, Role, ThemeConfig, ThemeSource};
pub use table::{StyleRow, StyleTable};

use crate::syntax::{StyleDirective, TokenKind};

/// How a token kind found its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The kind itself is registered
    Exact(StyleDirective),
    /// The nearest registered ancestor supplied the style
    Inherited {
        ancestor: &'static str,
        directive: StyleDirective,
    },
    /// Nothing registered on the chain; the surface's default text style applies
    Unstyled,
}

impl Resolution {
    /// The resolved directive, if any
    pub fn directive(&self) -> Option<StyleDirective> {
        match self {
            Resolution::Exact(directive) | Resolution::Inherited { directive, .. } => Some(*directive),
            Resolution::Unstyled => None,
        }
    }
}

/// Active theme plus the tag table it is applied through
#[derive(Debug, Clone)]
pub struct ThemeStore {
    theme: ThemeConfig,
    table: StyleTable,
}

impl ThemeStore {
    /// Create a store for a theme using the built-in table
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            theme,
            table: StyleTable::builtin(),
        }
    }

    /// The active theme
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// The tag table
    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    /// Replace the active theme wholesale
    pub fn replace(&mut self, theme: ThemeConfig) -> ThemeConfig {
        std::mem::replace(&mut self.theme, theme)
    }

    /// Resolve a kind: exact entry, then the nearest registered
    /// ancestor, else unstyled
    pub fn resolve(&self, kind: &TokenKind) -> Resolution {
        if let Some(row) = self.table.lookup(kind.name()) {
            return Resolution::Exact(row.directive(&self.theme));
        }
        kind.ancestors()
            .find_map(|name| self.table.lookup(name))
            .map_or(Resolution::Unstyled, |row| Resolution::Inherited {
                ancestor: row.kind,
                directive: row.directive(&self.theme),
            })
    }

    /// Directive for a kind, following the fallback chain
    pub fn directive(&self, kind: &TokenKind) -> Option<StyleDirective> {
        self.resolve(kind).directive()
    }

    /// UI-wide colors derived from the active theme
    pub fn appearance(&self) -> Appearance {
        Appearance::derive(&self.theme)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}
