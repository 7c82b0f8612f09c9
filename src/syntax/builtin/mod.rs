//! Built-in tokenizers
//!
//! This module provides grammars for the languages the editor offers
//! out of the box.

mod c;
mod css;
mod docker;
mod go;
mod html;
mod java;
mod javascript;
mod markdown;
mod python;
mod rust;
mod yaml;

use super::language::RegexTokenizer;

/// A built-in grammar and how the registry should find it
pub struct Builtin {
    /// Registry id (lowercase)
    pub id: &'static str,
    /// File extensions, without the dot
    pub extensions: &'static [&'static str],
    /// Exact file names (e.g. `Dockerfile`)
    pub file_names: &'static [&'static str],
    /// Grammar constructor
    pub build: fn() -> RegexTokenizer,
}

/// Get all built-in grammars
pub fn all_languages() -> Vec<Builtin> {
    vec![
        Builtin { id: "python", extensions: &["py", "pyw", "pyi"], file_names: &[], build: python::python_language },
        Builtin { id: "rust", extensions: &["rs"], file_names: &[], build: rust::rust_language },
        Builtin { id: "c", extensions: &["c", "h"], file_names: &[], build: c::c_language },
        Builtin { id: "cpp", extensions: &["cpp", "cc", "cxx", "hpp", "hh"], file_names: &[], build: c::cpp_language },
        Builtin { id: "java", extensions: &["java"], file_names: &[], build: java::java_language },
        Builtin { id: "javascript", extensions: &["js", "mjs", "cjs"], file_names: &[], build: javascript::javascript_language },
        Builtin { id: "go", extensions: &["go"], file_names: &[], build: go::go_language },
        Builtin { id: "css", extensions: &["css"], file_names: &[], build: css::css_language },
        Builtin { id: "html", extensions: &["html", "htm"], file_names: &[], build: html::html_language },
        Builtin { id: "yaml", extensions: &["yaml", "yml"], file_names: &[], build: yaml::yaml_language },
        Builtin { id: "markdown", extensions: &["md", "markdown"], file_names: &[], build: markdown::markdown_language },
        Builtin { id: "docker", extensions: &["dockerfile"], file_names: &["Dockerfile", "Containerfile"], build: docker::docker_language },
    ]
}

/// Rules shared by the C-family grammars: numbers, operators,
/// punctuation, identifiers and whitespace.
fn add_common_rules(lang: &mut RegexTokenizer) {
    lang.pattern("hex", r"\b0[xX][0-9a-fA-F_]+[uUlL]*\b", "Literal.Number.Hex", 65)
        .pattern("binary", r"\b0[bB][01_]+[uUlL]*\b", "Literal.Number.Bin", 65)
        .pattern("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?[fFdD]?\b", "Literal.Number.Float", 64)
        .pattern("integer", r"\b\d[\d_]*[uUlL]*\b", "Literal.Number.Integer", 63)
        .pattern("operator", r"[+\-*/%&|^!<>=~?]+", "Operator", 40)
        .pattern("punctuation", r"[()\[\]{},;:.]", "Punctuation", 30)
        .pattern("name", r"[\p{L}_][\p{L}\p{N}_]*", "Name", 10)
        .pattern("whitespace", r"\s+", "Text.Whitespace", 5);
}
