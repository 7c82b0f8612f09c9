//! Style tag table
//!
//! The static registration of recognized token kinds to theme roles
//! and font variants.

use super::config::{Role, ThemeConfig};
use crate::syntax::{FontVariant, StyleDirective};

/// One registered token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleRow {
    /// Token kind, also the tag name
    pub kind: &'static str,
    /// Theme role providing the foreground color
    pub role: Option<Role>,
    /// Font variant to switch to
    pub font: Option<FontVariant>,
}

impl StyleRow {
    const fn color(kind: &'static str, role: Role) -> Self {
        Self { kind, role: Some(role), font: None }
    }

    const fn font(kind: &'static str, font: FontVariant) -> Self {
        Self { kind, role: None, font: Some(font) }
    }

    const fn plain(kind: &'static str) -> Self {
        Self { kind, role: None, font: None }
    }

    /// The directive this row produces under a theme
    pub fn directive(&self, theme: &ThemeConfig) -> StyleDirective {
        StyleDirective {
            foreground: self.role.map(|role| theme.color(role)),
            font: self.font,
        }
    }
}

/// Every token kind the editor styles
static ROWS: &[StyleRow] = &[
    StyleRow::color("Comment", Role::Comment),
    StyleRow::color("Comment.Single", Role::Comment),
    StyleRow::color("Comment.Multiline", Role::Comment),
    StyleRow::color("Comment.Preproc", Role::Comment),
    StyleRow::color("Comment.PreprocFile", Role::Comment),
    StyleRow::color("Literal.String", Role::String),
    StyleRow::color("Literal.String.Char", Role::String),
    StyleRow::color("Literal.String.Single", Role::String),
    StyleRow::color("Literal.String.Double", Role::String),
    StyleRow::color("Literal.String.Interpol", Role::String),
    StyleRow::color("Literal.String.Affix", Role::Function),
    StyleRow::color("Literal.Number", Role::Number),
    StyleRow::color("Literal.Number.Integer", Role::Number),
    StyleRow::color("Literal.Number.Float", Role::Number),
    StyleRow::color("Literal.Number.Oct", Role::Number),
    StyleRow::color("Literal.Scalar.Plain", Role::Number),
    StyleRow::color("Keyword", Role::Keyword),
    StyleRow::color("Keyword.Type", Role::Keyword),
    StyleRow::color("Keyword.Declaration", Role::Keyword),
    StyleRow::color("Keyword.Reserved", Role::Keyword),
    StyleRow::color("Keyword.Namespace", Role::Namespace),
    StyleRow::color("Keyword.Constant", Role::Number),
    StyleRow::color("Operator", Role::Operator),
    StyleRow::color("Operator.Word", Role::Operator),
    StyleRow::color("Punctuation.Indicator", Role::Function),
    StyleRow::color("Name.Class", Role::Object),
    StyleRow::color("Name.Function", Role::Object),
    StyleRow::color("Name.Function.Magic", Role::Function),
    StyleRow::color("Name.Builtin", Role::Function),
    StyleRow::color("Name.Builtin.Pseudo", Role::ClassSelf),
    StyleRow::color("Name.Attribute", Role::Function),
    StyleRow::color("Name.Decorator", Role::Number),
    StyleRow::color("Name.Tag", Role::Namespace),
    StyleRow::color("Name.Label", Role::ClassSelf),
    StyleRow::font("Generic.Emph", FontVariant::Italic),
    StyleRow::font("Generic.Strong", FontVariant::Bold),
    StyleRow::font("Generic.Heading", FontVariant::Heading),
    StyleRow::font("Generic.Subheading", FontVariant::Subheading),
    StyleRow::plain("Text.Whitespace"),
];

/// Lookup over the registered rows
#[derive(Debug, Clone, Copy)]
pub struct StyleTable {
    rows: &'static [StyleRow],
}

impl StyleTable {
    /// The editor's built-in table
    pub fn builtin() -> Self {
        Self { rows: ROWS }
    }

    /// Registered row for an exact kind name
    pub fn lookup(&self, kind: &str) -> Option<&'static StyleRow> {
        self.rows.iter().find(|row| row.kind == kind)
    }

    /// All registered rows
    pub fn rows(&self) -> &'static [StyleRow] {
        self.rows
    }

    /// Every (kind, directive) binding under a theme
    pub fn directives<'t>(&self, theme: &'t ThemeConfig) -> impl Iterator<Item = (&'static str, StyleDirective)> + 't {
        self.rows.iter().map(move |row| (row.kind, row.directive(theme)))
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
