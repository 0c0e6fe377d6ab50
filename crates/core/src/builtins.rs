//! Builtin grammars and the default registry they seed.
//!
//! These are the grammars every site build starts from. The TypeScript table
//! is not a complete lexer for the language; it is a flat rule set that
//! classifies realistic snippets well enough for highlighting, in the same
//! spirit as regex-driven highlighter grammars.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::grammar::{Grammar, Rule};
use crate::registry::GrammarRegistry;
use crate::token::TokenKind;

fn rule(kind: TokenKind, pattern: &str) -> Rule {
    Rule::new(kind, pattern).expect("builtin grammar pattern compiles")
}

const TS_KEYWORDS: &str = "abstract|any|as|async|await|boolean|break|case|catch|class|const|\
continue|debugger|declare|default|delete|do|else|enum|export|extends|false|finally|for|from|\
function|get|if|implements|import|in|instanceof|interface|is|keyof|let|namespace|never|new|\
null|number|object|of|private|protected|public|readonly|return|set|static|string|super|\
switch|symbol|this|throw|true|try|type|typeof|undefined|unknown|var|void|while|with|yield";

/// Compiled once and shared by every TypeScript-derived grammar instance.
static TS_RULES: Lazy<Arc<[Rule]>> = Lazy::new(|| {
    vec![
        rule(TokenKind::Whitespace, r"\s+"),
        rule(TokenKind::Comment, r"//[^\n]*"),
        rule(TokenKind::Comment, r"(?s)/\*.*?\*/"),
        rule(TokenKind::String, r#""(?:[^"\\]|\\.)*""#),
        rule(TokenKind::String, r"'(?:[^'\\]|\\.)*'"),
        rule(TokenKind::String, r"`(?:[^`\\]|\\.)*`"),
        rule(
            TokenKind::Number,
            r"0[xX][0-9a-fA-F]+|[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?",
        ),
        rule(TokenKind::Keyword, &format!(r"\b(?:{TS_KEYWORDS})\b")),
        rule(TokenKind::Identifier, r"[A-Za-z_$][A-Za-z0-9_$]*"),
        rule(TokenKind::Punctuation, r"[{}()\[\];,.:?<>=+\-*/%&|^!~@#]+"),
    ]
    .into()
});

/// The builtin TypeScript grammar (aliases `typescript`, `ts`).
pub fn typescript() -> Grammar {
    Grammar::with_shared_rules("TypeScript", ["typescript", "ts"], Arc::clone(&TS_RULES))
}

/// The builtin plain-text grammar (alias `text`): no rules, everything is
/// unclassified text.
pub fn plain_text() -> Grammar {
    Grammar::new("Plain Text", ["text"], Vec::new())
}

/// A registry pre-populated with the builtin grammars.
pub fn default_registry() -> GrammarRegistry {
    let mut registry = GrammarRegistry::new();
    registry.register(typescript());
    registry.register(plain_text());
    registry
}
