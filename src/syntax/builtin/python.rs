//! Python language definition

use crate::syntax::language::RegexTokenizer;

/// Create Python tokenizer
pub fn python_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("Python");

    // Triple-quoted strings (docstrings) before the single-quoted forms;
    // prefixed strings (f"", rb'') keep their prefix inside the token
    lang.region("prefixed_triple_double", r#"\b[fFrRbBuU]{1,2}""""#, r#"""""#, "Literal.String.Doc")
        .region("prefixed_triple_single", r"\b[fFrRbBuU]{1,2}'''", r"'''", "Literal.String.Doc")
        .region("triple_double", r#"""""#, r#"""""#, "Literal.String.Doc")
        .region("triple_single", r"'''", r"'''", "Literal.String.Doc")
        .string("prefixed_double", r#"\b[fFrRbBuU]{1,2}""#, "Literal.String.Double")
        .string("prefixed_single", r"\b[fFrRbBuU]{1,2}'", "Literal.String.Single")
        .string("double_string", r#"""#, "Literal.String.Double")
        .string("single_string", r"'", "Literal.String.Single");

    lang.pattern("comment", r"#.*", "Comment.Single", 100)
        .pattern("decorator", r"@[\w.]+", "Name.Decorator", 95);

    lang.pattern("constant", r"\b(True|False|None)\b", "Keyword.Constant", 85)
        .pattern("namespace", r"\b(import|from)\b", "Keyword.Namespace", 84)
        .pattern("operator_word", r"\b(and|or|not|in|is)\b", "Operator.Word", 83)
        .pattern(
            "keyword",
            r"\b(as|assert|async|await|break|class|continue|def|del|elif|else|except|finally|for|global|if|lambda|nonlocal|pass|raise|return|try|while|with|yield|match|case)\b",
            "Keyword",
            80,
        )
        .pattern("self", r"\b(self|cls)\b", "Name.Builtin.Pseudo", 77)
        .pattern("magic", r"\b__\w+__\b", "Name.Function.Magic", 76)
        .pattern(
            "builtin",
            r"\b(abs|all|any|ascii|bin|bool|bytearray|bytes|callable|chr|classmethod|compile|complex|delattr|dict|dir|divmod|enumerate|eval|exec|filter|float|format|frozenset|getattr|globals|hasattr|hash|help|hex|id|input|int|isinstance|issubclass|iter|len|list|locals|map|max|memoryview|min|next|object|oct|open|ord|pow|print|property|range|repr|reversed|round|set|setattr|slice|sorted|staticmethod|str|sum|super|tuple|type|vars|zip)\b",
            "Name.Builtin",
            75,
        )
        .pattern("hex", r"\b0[xX][0-9a-fA-F_]+\b", "Literal.Number.Hex", 65)
        .pattern("binary", r"\b0[bB][01_]+\b", "Literal.Number.Bin", 65)
        .pattern("octal", r"\b0[oO][0-7_]+\b", "Literal.Number.Oct", 65)
        .pattern("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?j?\b", "Literal.Number.Float", 64)
        .pattern("integer", r"\b\d[\d_]*j?\b", "Literal.Number.Integer", 63)
        .pattern("operator", r"[+\-*/%&|^!<>=@~]+", "Operator", 40)
        .pattern("punctuation", r"[()\[\]{},;:.]", "Punctuation", 30)
        .pattern("name", r"[\p{L}_][\p{L}\p{N}_]*", "Name", 10)
        .pattern("whitespace", r"\s+", "Text.Whitespace", 5);

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::language::Tokenizer;

    fn kinds(text: &str) -> Vec<(String, String)> {
        python_language()
            .lex(text)
            .map(|t| (t.kind.to_string(), t.text.to_string()))
            .collect()
    }

    #[test]
    fn test_python_keywords() {
        let tokens = kinds("def f():");
        assert_eq!(tokens[0], ("Keyword".to_string(), "def".to_string()));
        assert_eq!(tokens[2], ("Name".to_string(), "f".to_string()));
    }

    #[test]
    fn test_python_strings() {
        let tokens = kinds(r#"x = 'a' + "b""#);
        assert!(tokens.contains(&("Literal.String.Single".to_string(), "'a'".to_string())));
        assert!(tokens.contains(&("Literal.String.Double".to_string(), "\"b\"".to_string())));
    }

    #[test]
    fn test_python_docstring_spans_lines() {
        let tokens = kinds("\"\"\"doc\nmore\"\"\"\nx");
        assert_eq!(tokens[0], ("Literal.String.Doc".to_string(), "\"\"\"doc\nmore\"\"\"".to_string()));
    }

    #[test]
    fn test_python_comment_and_self() {
        let tokens = kinds("self.x = 1  # it's fine");
        assert_eq!(tokens[0].0, "Name.Builtin.Pseudo");
        assert_eq!(tokens.last().unwrap(), &("Comment.Single".to_string(), "# it's fine".to_string()));
    }

    #[test]
    fn test_python_numbers() {
        let tokens = kinds("0x1F 3.5 42 0o17");
        let numbers: Vec<_> = tokens.iter().filter(|(k, _)| k.starts_with("Literal.Number")).collect();
        assert_eq!(numbers.len(), 4);
        assert_eq!(numbers[1].0, "Literal.Number.Float");
    }
}
