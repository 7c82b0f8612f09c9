//! JavaScript language definition

use crate::syntax::language::RegexTokenizer;
use crate::syntax::rules::RegionRule;
use crate::syntax::tokens::TokenKind;

use super::add_common_rules;

/// Create JavaScript tokenizer
pub fn javascript_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("JavaScript");

    lang.region("block_comment", r"/\*", r"\*/", "Comment.Multiline")
        .string("double_string", r#"""#, "Literal.String.Double")
        .string("single_string", r"'", "Literal.String.Single");
    // Template literals span lines
    if let Some(rule) = RegionRule::new("template", r"`", r"`", TokenKind::from_static("Literal.String.Backtick")) {
        lang.add_region(rule.with_escape('\\'));
    }

    lang.pattern("line_comment", r"//.*", "Comment.Single", 100)
        .pattern("namespace", r"\b(import|export|from)\b", "Keyword.Namespace", 86)
        .pattern("constant", r"\b(true|false|null|undefined|NaN|Infinity)\b", "Keyword.Constant", 85)
        .pattern("declaration", r"\b(var|let|const|function|class|extends|static|get|set)\b", "Keyword.Declaration", 81)
        .pattern(
            "keyword",
            r"\b(async|await|break|case|catch|continue|debugger|default|delete|do|else|finally|for|if|in|instanceof|new|of|return|switch|throw|try|typeof|void|while|with|yield)\b",
            "Keyword",
            80,
        )
        .pattern("this", r"\b(this|super)\b", "Name.Builtin.Pseudo", 79)
        .pattern(
            "builtin",
            r"\b(Array|Boolean|Date|Error|JSON|Map|Math|Number|Object|Promise|RegExp|Set|String|Symbol|console|document|window|require|module)\b",
            "Name.Builtin",
            75,
        )
        .pattern("arrow", r"=>", "Operator", 41);

    add_common_rules(&mut lang);
    lang
}
