//! Incremental highlight controller
//!
//! Keeps the tags on a display surface in step with its text. Edits
//! re-lex only the lines they touched; language and theme switches
//! rebuild every tag from scratch.

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::sync::Arc;

use log::{debug, info};

use crate::error::Result;
use crate::settings::{Settings, SettingsStore};
use crate::surface::DisplaySurface;
use crate::syntax::{mapper, Position, Span, TokenKind, Tokenizer, TokenizerRegistry, PLAIN_TEXT};
use crate::theme::{Appearance, ThemeConfig, ThemeSource, ThemeStore};

/// Whether a pass is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightState {
    Idle,
    Highlighting,
}

/// How far an edit's re-lex reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditScope {
    /// Every line that differs from the last snapshot, plus the cursor line
    #[default]
    AffectedLines,
    /// Only the line holding the cursor
    CursorLine,
}

/// Controller construction options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlighterConfig {
    /// Initial language id
    pub language: String,
    pub edit_scope: EditScope,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            language: PLAIN_TEXT.to_string(),
            edit_scope: EditScope::default(),
        }
    }
}

impl HighlighterConfig {
    /// Config for a language with the default edit scope
    pub fn for_language(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Default::default()
        }
    }
}

/// Kind of pass that ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    /// Content matched the snapshot; nothing was touched
    Skipped,
    /// Only some lines were re-lexed
    Incremental,
    /// All tags were rebuilt
    Full,
}

/// Summary of one highlighting pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub mode: PassMode,
    /// Lines whose tags were rebuilt
    pub lines: RangeInclusive<usize>,
    /// Number of spans applied
    pub spans: usize,
    /// False if the tokenizer failed to cover its input
    pub complete: bool,
}

/// Window-level collaborator told about theme changes
pub trait Host {
    /// Apply UI-wide colors derived from a new theme
    fn reconfigure(&mut self, appearance: &Appearance);
}

/// Host that ignores theme changes
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl Host for NullHost {
    fn reconfigure(&mut self, _appearance: &Appearance) {}
}

/// Drives tokenizer, mapper and theme against one display surface
pub struct HighlightController<S: DisplaySurface> {
    surface: S,
    registry: TokenizerRegistry,
    tokenizer: Arc<dyn Tokenizer>,
    language: String,
    themes: ThemeStore,
    settings: Settings,
    store: Box<dyn SettingsStore>,
    host: Box<dyn Host>,
    edit_scope: EditScope,
    /// Buffer contents as of the last complete pass
    snapshot: String,
    state: HighlightState,
    /// Tags whose style has been resolved since the last full pass
    configured: HashSet<String>,
}

impl<S: DisplaySurface> HighlightController<S> {
    /// Create a controller over `surface`
    ///
    /// The theme comes from the stored settings when they hold every
    /// theme key, otherwise the built-in default is used. No tags are
    /// applied until [`initial_highlight`](Self::initial_highlight).
    pub fn new(
        surface: S,
        registry: TokenizerRegistry,
        store: impl SettingsStore + 'static,
        config: HighlighterConfig,
    ) -> Result<Self> {
        let settings = store.load()?;
        let theme = match ThemeConfig::from_settings(&settings) {
            Ok(theme) => theme,
            Err(e) => {
                debug!("using default theme: {}", e);
                ThemeConfig::default()
            }
        };
        let tokenizer = registry.select(&config.language)?;
        let snapshot = surface.content();

        Ok(Self {
            surface,
            registry,
            tokenizer,
            language: config.language.to_lowercase(),
            themes: ThemeStore::new(theme),
            settings,
            store: Box::new(store),
            host: Box::new(NullHost),
            edit_scope: config.edit_scope,
            snapshot,
            state: HighlightState::Idle,
            configured: HashSet::new(),
        })
    }

    /// Install the host notified on theme switches
    pub fn with_host(mut self, host: impl Host + 'static) -> Self {
        self.host = Box::new(host);
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access for editing; call [`on_edit`](Self::on_edit) afterwards
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn theme(&self) -> &ThemeConfig {
        self.themes.theme()
    }

    pub fn theme_store(&self) -> &ThemeStore {
        &self.themes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Active language id
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn tokenizer(&self) -> &dyn Tokenizer {
        self.tokenizer.as_ref()
    }

    pub fn registry(&self) -> &TokenizerRegistry {
        &self.registry
    }

    /// Buffer contents as of the last complete pass
    ///
    /// Empty after a full pass whose tokenizer failed to cover the buffer.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn state(&self) -> HighlightState {
        self.state
    }

    pub fn edit_scope(&self) -> EditScope {
        self.edit_scope
    }

    pub fn set_edit_scope(&mut self, scope: EditScope) {
        self.edit_scope = scope;
    }

    /// First pass after loading a buffer
    pub fn initial_highlight(&mut self) -> PassReport {
        self.full_rehighlight()
    }

    /// Re-highlight after the buffer changed
    ///
    /// Does nothing when the content matches the snapshot. Otherwise
    /// the tags on the affected lines are cleared and rebuilt from a
    /// fresh lex of those lines.
    pub fn on_edit(&mut self, cursor: Position) -> PassReport {
        let content = self.surface.content();
        if content == self.snapshot {
            return PassReport {
                mode: PassMode::Skipped,
                lines: cursor.line..=cursor.line,
                spans: 0,
                complete: true,
            };
        }

        let line_count = self.surface.line_count();
        let cursor_line = cursor.line.clamp(1, line_count);
        let (first, last) = match self.edit_scope {
            EditScope::CursorLine => (cursor_line, cursor_line),
            EditScope::AffectedLines => {
                let (first, last) = changed_lines(&self.snapshot, &content);
                (first.min(cursor_line), last.max(cursor_line))
            }
        };

        self.state = HighlightState::Highlighting;
        let start = Position::line_start(first);
        let end = self.surface.line_end(last);
        for tag in self.surface.tag_names() {
            self.surface.tag_remove(&tag, start, end);
        }

        let text = self.surface.text(start, end);
        let tokenizer = Arc::clone(&self.tokenizer);
        let mapping = mapper::map_checked(tokenizer.lex(&text), start, &text);
        self.apply(&mapping.spans);

        // An incomplete pass keeps the old snapshot so the same lines are retried
        if mapping.complete {
            self.snapshot = content;
        }
        self.state = HighlightState::Idle;
        debug!(
            "re-highlighted lines {}..={} ({} spans)",
            first,
            last,
            mapping.spans.len()
        );
        PassReport {
            mode: PassMode::Incremental,
            lines: first..=last,
            spans: mapping.spans.len(),
            complete: mapping.complete,
        }
    }

    /// Drop every tag and highlight the whole buffer again
    pub fn full_rehighlight(&mut self) -> PassReport {
        self.state = HighlightState::Highlighting;
        for tag in self.surface.tag_names() {
            self.surface.tag_delete(&tag);
        }

        self.configured.clear();
        let table = *self.themes.table();
        for (kind, directive) in table.directives(self.themes.theme()) {
            self.surface.tag_configure(kind, &directive);
            self.configured.insert(kind.to_string());
        }

        let content = self.surface.content();
        let tokenizer = Arc::clone(&self.tokenizer);
        let mapping = mapper::map_checked(tokenizer.lex(&content), Position::START, &content);
        self.apply(&mapping.spans);

        // An incomplete pass invalidates the snapshot so the next edit re-lexes
        if mapping.complete {
            self.snapshot = content;
        } else {
            self.snapshot.clear();
        }
        self.state = HighlightState::Idle;
        let lines = self.surface.line_count();
        debug!(
            "highlighted {} lines as {} ({} spans)",
            lines,
            self.tokenizer.name(),
            mapping.spans.len()
        );
        PassReport {
            mode: PassMode::Full,
            lines: 1..=lines,
            spans: mapping.spans.len(),
            complete: mapping.complete,
        }
    }

    /// Switch the active language and re-highlight
    ///
    /// An unknown id is an error and leaves the current tokenizer and
    /// tags in place.
    pub fn switch_language(&mut self, id: &str) -> Result<PassReport> {
        let tokenizer = self.registry.select(id)?;
        info!("switching language to {}", tokenizer.name());
        self.tokenizer = tokenizer;
        self.language = id.to_lowercase();
        Ok(self.full_rehighlight())
    }

    /// Load a theme, persist it, and re-highlight with it
    ///
    /// A theme that fails to load leaves the current theme, settings
    /// and tags untouched.
    pub fn switch_theme(&mut self, source: &ThemeSource) -> Result<PassReport> {
        let theme = ThemeConfig::load(source)?;
        let settings = self.settings.merged_with_theme(&theme);
        self.store.save(&settings)?;
        info!("switched theme");

        self.settings = settings;
        self.themes.replace(theme);
        self.host.reconfigure(&self.themes.appearance());
        Ok(self.full_rehighlight())
    }

    fn apply(&mut self, spans: &[Span]) {
        for span in spans {
            self.ensure_configured(&span.kind);
            self.surface.tag_add(span.kind.name(), span.start, span.end);
        }
    }

    /// Resolve a kind's style the first time it shows up
    fn ensure_configured(&mut self, kind: &TokenKind) {
        if self.configured.contains(kind.name()) {
            return;
        }
        if let Some(directive) = self.themes.directive(kind) {
            self.surface.tag_configure(kind.name(), &directive);
        }
        self.configured.insert(kind.name().to_string());
    }
}

/// Lines of `new` that differ from `old`, as an inclusive 1-based range
///
/// Lines shared at the start and at the end of both texts are skipped.
/// When lines were only removed, the range is the single line where
/// the removal happened.
fn changed_lines(old: &str, new: &str) -> (usize, usize) {
    let old: Vec<&str> = old.split('\n').collect();
    let new: Vec<&str> = new.split('\n').collect();

    let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
    let max_suffix = old.len().min(new.len()) - prefix;
    let suffix = old
        .iter()
        .rev()
        .zip(new.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let first = (prefix + 1).min(new.len());
    let last = (new.len() - suffix).max(first);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;
    use crate::surface::TextSurface;
    use crate::syntax::{Token, Tokens};

    /// Drops the last character of its input
    struct Truncating;

    impl Tokenizer for Truncating {
        fn name(&self) -> &str {
            "Truncating"
        }

        fn lex<'a>(&'a self, text: &'a str) -> Tokens<'a> {
            let end = text.char_indices().last().map_or(0, |(idx, _)| idx);
            Box::new(std::iter::once(Token::new(TokenKind::TEXT, &text[..end])))
        }
    }

    fn truncating_controller(content: &str) -> HighlightController<TextSurface> {
        let mut registry = TokenizerRegistry::new();
        registry.register("truncating", Arc::new(Truncating), &[]);
        HighlightController::new(
            TextSurface::with_content(content),
            registry,
            MemorySettingsStore::default(),
            HighlighterConfig::for_language("truncating"),
        )
        .unwrap()
    }

    fn controller(content: &str, language: &str) -> HighlightController<TextSurface> {
        HighlightController::new(
            TextSurface::with_content(content),
            TokenizerRegistry::with_builtins(),
            MemorySettingsStore::default(),
            HighlighterConfig::for_language(language),
        )
        .unwrap()
    }

    #[test]
    fn test_changed_lines() {
        assert_eq!(changed_lines("a\nb\nc", "a\nB\nc"), (2, 2));
        assert_eq!(changed_lines("a\nb\nc", "a\nb\nx\ny\nc"), (3, 4));
        // Line removed: range collapses onto the join point
        assert_eq!(changed_lines("a\nb\nc", "a\nc"), (2, 2));
        assert_eq!(changed_lines("a", "a\n"), (2, 2));
        assert_eq!(changed_lines("", "x"), (1, 1));
    }

    #[test]
    fn test_new_uses_default_theme_without_settings() {
        let controller = controller("x = 1\n", "python");
        assert_eq!(controller.theme(), &ThemeConfig::default());
        assert_eq!(controller.language(), "python");
        assert_eq!(controller.snapshot(), "x = 1\n");
        assert_eq!(controller.state(), HighlightState::Idle);
    }

    #[test]
    fn test_new_rejects_unknown_language() {
        let result = HighlightController::new(
            TextSurface::new(),
            TokenizerRegistry::with_builtins(),
            MemorySettingsStore::default(),
            HighlighterConfig::for_language("cobol"),
        );
        assert!(matches!(result, Err(crate::error::Error::UnknownLanguage(_))));
    }

    #[test]
    fn test_full_pass_reports_all_lines() {
        let mut controller = controller("def f():\n    return 1\n", "python");
        let report = controller.initial_highlight();
        assert_eq!(report.mode, PassMode::Full);
        assert_eq!(report.lines, 1..=3);
        assert!(report.complete);
        assert!(report.spans > 0);
        assert_eq!(controller.state(), HighlightState::Idle);
    }

    #[test]
    fn test_cursor_line_scope() {
        let mut controller = controller("a = 1\nb = 2\n", "python");
        controller.set_edit_scope(EditScope::CursorLine);
        controller.initial_highlight();

        // Paste spanning two lines; only the cursor line is rebuilt
        controller.surface_mut().insert(Position::new(1, 5), "\nc = 3");
        let report = controller.on_edit(Position::new(2, 5));
        assert_eq!(report.mode, PassMode::Incremental);
        assert_eq!(report.lines, 2..=2);
    }

    #[test]
    fn test_affected_lines_scope_covers_paste() {
        let mut controller = controller("a = 1\nb = 2\n", "python");
        controller.initial_highlight();

        controller.surface_mut().insert(Position::new(1, 5), "\nc = 3\nd = 4");
        let report = controller.on_edit(Position::new(3, 5));
        // Line 1 kept its text; the pasted lines are rebuilt
        assert_eq!(report.lines, 2..=3);
    }

    #[test]
    fn test_unstyled_kinds_get_unconfigured_tags() {
        let mut controller = controller("value\n", "python");
        controller.initial_highlight();
        let surface = controller.surface();
        assert_eq!(surface.tag_ranges("Name").len(), 1);
        assert_eq!(surface.tag_style("Name"), None);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "does not cover its input"))]
    fn test_incomplete_edit_pass_is_retried() {
        let mut controller = truncating_controller("a = 1\nb = 2\n");

        controller.surface_mut().insert(Position::new(2, 5), "0");
        let report = controller.on_edit(Position::new(2, 6));
        assert!(!report.complete);
        assert_eq!(controller.snapshot(), "a = 1\nb = 2\n");

        // Same content again: the failed line is lexed again
        let retry = controller.on_edit(Position::new(2, 6));
        assert_eq!(retry.mode, PassMode::Incremental);
        assert_eq!(retry.lines, 2..=2);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "does not cover its input"))]
    fn test_incomplete_full_pass_invalidates_snapshot() {
        let mut controller = truncating_controller("a = 1\nb = 2\n");

        let report = controller.initial_highlight();
        assert!(!report.complete);
        assert_eq!(controller.snapshot(), "");

        let retry = controller.on_edit(Position::new(1, 0));
        assert_eq!(retry.mode, PassMode::Incremental);
    }
}
