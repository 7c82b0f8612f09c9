//! Tokenizer registry
//!
//! This module maps language ids to tokenizers and detects a buffer's
//! language from its file name.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use log::debug;

use super::builtin;
use super::language::{PlainText, Tokenizer};
use crate::error::{Error, Result};

/// Id under which the plain-text tokenizer is always registered
pub const PLAIN_TEXT: &str = "text";

/// Registered tokenizers keyed by language id
pub struct TokenizerRegistry {
    /// Language id -> tokenizer
    tokenizers: HashMap<String, Arc<dyn Tokenizer>>,
    /// Extension -> language id
    extension_map: HashMap<String, String>,
    /// Exact file name -> language id
    file_name_map: HashMap<String, String>,
}

impl TokenizerRegistry {
    /// Create a registry holding only the plain-text tokenizer
    pub fn new() -> Self {
        let mut registry = Self {
            tokenizers: HashMap::new(),
            extension_map: HashMap::new(),
            file_name_map: HashMap::new(),
        };
        registry.register(PLAIN_TEXT, Arc::new(PlainText), &["txt"]);
        registry
    }

    /// Create a registry with every built-in grammar
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        for lang in builtin::all_languages() {
            registry.register(lang.id, Arc::new((lang.build)()), lang.extensions);
            for file_name in lang.file_names {
                registry.file_name_map.insert(file_name.to_string(), lang.id.to_string());
            }
        }

        registry
    }

    /// Register a tokenizer, replacing any previous one with the same id
    pub fn register(&mut self, id: &str, tokenizer: Arc<dyn Tokenizer>, extensions: &[&str]) {
        let id = id.to_lowercase();
        for ext in extensions {
            self.extension_map.insert(ext.to_lowercase(), id.clone());
        }
        debug!("registered tokenizer `{}` ({})", id, tokenizer.name());
        self.tokenizers.insert(id, tokenizer);
    }

    /// Look up the tokenizer for a language id (case-insensitive)
    pub fn select(&self, id: &str) -> Result<Arc<dyn Tokenizer>> {
        self.tokenizers
            .get(&id.to_lowercase())
            .cloned()
            .ok_or_else(|| Error::UnknownLanguage(id.to_string()))
    }

    /// Check whether a language id is registered
    pub fn contains(&self, id: &str) -> bool {
        self.tokenizers.contains_key(&id.to_lowercase())
    }

    /// Detect language id from a file name
    pub fn detect_language(&self, path: &Path) -> Option<&str> {
        if let Some(id) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.file_name_map.get(name))
        {
            return Some(id.as_str());
        }
        let ext = path.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// List registered language ids
    pub fn languages(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.tokenizers.keys().map(|s| s.as_str()).collect();
        ids.sort();
        ids
    }
}

impl Default for TokenizerRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        let registry = TokenizerRegistry::with_builtins();

        assert_eq!(registry.detect_language(Path::new("main.rs")), Some("rust"));
        assert_eq!(registry.detect_language(Path::new("test.PY")), Some("python"));
        assert_eq!(registry.detect_language(Path::new("config.yml")), Some("yaml"));
        assert_eq!(registry.detect_language(Path::new("README.md")), Some("markdown"));
        assert_eq!(registry.detect_language(Path::new("templates/index.htm")), Some("html"));
        assert_eq!(registry.detect_language(Path::new("src/Dockerfile")), Some("docker"));
        assert_eq!(registry.detect_language(Path::new("notes.txt")), Some("text"));
        assert_eq!(registry.detect_language(Path::new("no_extension")), None);
    }

    #[test]
    fn test_select_is_case_insensitive() {
        let registry = TokenizerRegistry::with_builtins();
        assert_eq!(registry.select("Python").unwrap().name(), "Python");
        assert_eq!(registry.select("cpp").unwrap().name(), "C++");
    }

    #[test]
    fn test_unknown_language_fails_fast() {
        let registry = TokenizerRegistry::with_builtins();
        match registry.select("cobol") {
            Err(Error::UnknownLanguage(id)) => assert_eq!(id, "cobol"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("cobol should not be registered"),
        }
    }

    #[test]
    fn test_list_languages() {
        let registry = TokenizerRegistry::with_builtins();
        let languages = registry.languages();
        assert!(languages.contains(&"python"));
        assert!(languages.contains(&"text"));
        assert!(languages.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(TokenizerRegistry::new().languages(), vec!["text"]);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = TokenizerRegistry::new();
        registry.register("Python", Arc::new(PlainText), &["py"]);
        assert!(registry.contains("python"));
        assert_eq!(registry.select("python").unwrap().name(), "Plain Text");
    }
}
