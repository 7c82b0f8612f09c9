//! C and C++ language definitions

use crate::syntax::language::RegexTokenizer;

use super::add_common_rules;

const C_KEYWORDS: &str = r"\b(break|case|continue|default|do|else|for|goto|if|return|sizeof|switch|while|typedef|extern|static|register|volatile|inline|restrict)\b";
const C_TYPES: &str = r"\b(auto|char|const|double|enum|float|int|long|short|signed|struct|union|unsigned|void|size_t|ssize_t|bool|int8_t|int16_t|int32_t|int64_t|uint8_t|uint16_t|uint32_t|uint64_t)\b";

fn c_family(name: &str) -> RegexTokenizer {
    let mut lang = RegexTokenizer::new(name);

    lang.region("block_comment", r"/\*", r"\*/", "Comment.Multiline")
        .string("string", r#"""#, "Literal.String.Double");

    lang.pattern("include_file", r#"#\s*include\s*<[^>\n]*>"#, "Comment.PreprocFile", 105)
        .pattern("preprocessor", r"#\s*\w+", "Comment.Preproc", 100)
        .pattern("line_comment", r"//.*", "Comment.Single", 100)
        .pattern("char", r"'(?:\\.|[^'\\])'", "Literal.String.Char", 90)
        .pattern("constant", r"\b(NULL|true|false)\b", "Keyword.Constant", 85)
        .pattern("keyword", C_KEYWORDS, "Keyword", 80)
        .pattern("type", C_TYPES, "Keyword.Type", 78);

    add_common_rules(&mut lang);
    lang
}

/// Create C tokenizer
pub fn c_language() -> RegexTokenizer {
    c_family("C")
}

/// Create C++ tokenizer
pub fn cpp_language() -> RegexTokenizer {
    let mut lang = c_family("C++");
    lang.pattern("namespace", r"\b(namespace|using)\b", "Keyword.Namespace", 86)
        .pattern(
            "cpp_keyword",
            r"\b(class|public|private|protected|virtual|override|final|template|typename|new|delete|try|catch|throw|operator|friend|explicit|mutable|constexpr|noexcept|static_cast|dynamic_cast|reinterpret_cast|const_cast|decltype)\b",
            "Keyword",
            81,
        )
        .pattern("this", r"\bthis\b", "Name.Builtin.Pseudo", 79)
        .pattern("cpp_constant", r"\bnullptr\b", "Keyword.Constant", 85)
        .pattern("cpp_type", r"\b(std::\w+|string|vector|map|auto)\b", "Keyword.Type", 78);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::language::Tokenizer;

    fn kinds(lang: &RegexTokenizer, text: &str) -> Vec<(String, String)> {
        lang.lex(text).map(|t| (t.kind.to_string(), t.text.to_string())).collect()
    }

    #[test]
    fn test_c_preprocessor() {
        let lang = c_language();
        let tokens = kinds(&lang, "#include <stdio.h>\n#define N 4");
        assert_eq!(tokens[0], ("Comment.PreprocFile".to_string(), "#include <stdio.h>".to_string()));
        assert!(tokens.contains(&("Comment.Preproc".to_string(), "#define".to_string())));
    }

    #[test]
    fn test_c_types_and_keywords() {
        let lang = c_language();
        let tokens = kinds(&lang, "int main(void) { return 0; }");
        assert_eq!(tokens[0].0, "Keyword.Type");
        assert!(tokens.contains(&("Keyword".to_string(), "return".to_string())));
        assert!(tokens.contains(&("Literal.Number.Integer".to_string(), "0".to_string())));
    }

    #[test]
    fn test_cpp_extends_c() {
        let lang = cpp_language();
        let tokens = kinds(&lang, "class A { int *p = nullptr; };");
        assert_eq!(tokens[0], ("Keyword".to_string(), "class".to_string()));
        assert!(tokens.contains(&("Keyword.Constant".to_string(), "nullptr".to_string())));
        // Plain C does not know `class`
        let c_tokens = kinds(&c_language(), "class");
        assert_eq!(c_tokens[0].0, "Name");
    }
}
