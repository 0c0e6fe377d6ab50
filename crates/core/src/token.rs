//! Token kinds and token streams produced by tokenization.

/// Classification assigned to a run of source text for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word of the language.
    Keyword,
    /// Identifier (names not recognized as keywords).
    Identifier,
    /// Numeric literal.
    Number,
    /// String literal, including its quotes.
    String,
    /// Line or block comment, including its delimiters.
    Comment,
    /// Operators and punctuation.
    Punctuation,
    /// Whitespace between tokens.
    Whitespace,
    /// Unclassified text (fallback when no rule matches).
    Text,
}

impl TokenKind {
    /// CSS class suffix used when rendering this kind to HTML.
    ///
    /// `Whitespace` and `Text` render without a wrapping span, so they
    /// have no class.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword => Some("hl-keyword"),
            TokenKind::Identifier => Some("hl-identifier"),
            TokenKind::Number => Some("hl-number"),
            TokenKind::String => Some("hl-string"),
            TokenKind::Comment => Some("hl-comment"),
            TokenKind::Punctuation => Some("hl-punctuation"),
            TokenKind::Whitespace | TokenKind::Text => None,
        }
    }
}

/// A classified slice of the tokenized input.
///
/// Token streams are lossless: concatenating the `text` of every token in
/// order reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of this slice.
    pub kind: TokenKind,
    /// The matched source text.
    pub text: String,
}

impl Token {
    /// Create a token from a kind and a source slice.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
