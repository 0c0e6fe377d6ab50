//! Grammar values and tokenization.
//!
//! A [`Grammar`] is a flat, ordered table of regex rules shared behind an
//! `Arc`, plus display metadata (title and selector aliases). Aliased
//! grammars are built by composition: [`Grammar::alias_of`] clones the rule
//! table handle and carries new metadata, so the derived grammar tokenizes
//! byte-for-byte like its base.

use std::sync::Arc;

use regex::Regex;

use crate::token::{Token, TokenKind};

/// A single tokenization rule: a kind and an anchored pattern.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: TokenKind,
    pattern: Regex,
}

impl Rule {
    /// Compile a rule from a regex pattern.
    ///
    /// The pattern is anchored to the current scan position; it does not
    /// need to carry its own `\A`.
    pub fn new(kind: TokenKind, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"\A(?:{pattern})"))?;
        Ok(Self { kind, pattern })
    }

    /// Kind assigned to text matched by this rule.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}

/// A named grammar: display title, selector aliases, and a shared rule table.
#[derive(Debug, Clone)]
pub struct Grammar {
    title: String,
    aliases: Vec<String>,
    rules: Arc<[Rule]>,
}

impl Grammar {
    /// Create a grammar from a title, its selector aliases, and rules.
    ///
    /// Rules are tried in order at each scan position; the first match wins.
    pub fn new(
        title: impl Into<String>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
        rules: Vec<Rule>,
    ) -> Self {
        Self::with_shared_rules(title, aliases, rules.into())
    }

    /// Create a grammar over an already-shared rule table.
    ///
    /// Lets callers reuse one compiled table across grammar instances, as
    /// the builtins do.
    pub fn with_shared_rules(
        title: impl Into<String>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
        rules: Arc<[Rule]>,
    ) -> Self {
        Self {
            title: title.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
            rules,
        }
    }

    /// Derive a grammar that shares `base`'s rule table under new metadata.
    ///
    /// The derived grammar holds the same `Arc` as the base, so its
    /// tokenization output is identical to the base's for every input; the
    /// only observable difference is the title and alias set.
    pub fn alias_of(
        base: &Grammar,
        title: impl Into<String>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
            rules: Arc::clone(&base.rules),
        }
    }

    /// Display title of this grammar.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Selector aliases under which this grammar is registered.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether this grammar shares its rule table with `other`.
    pub fn shares_rules_with(&self, other: &Grammar) -> bool {
        Arc::ptr_eq(&self.rules, &other.rules)
    }

    /// Tokenize `input` into a lossless token stream.
    ///
    /// At each position the rules are tried in table order and the first
    /// non-empty match is emitted. Positions no rule matches are accumulated
    /// into `Text` tokens, so concatenating the stream always reproduces the
    /// input.
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut text_start: Option<usize> = None;

        while pos < input.len() {
            match self.match_at(input, pos) {
                Some((kind, len)) => {
                    if let Some(start) = text_start.take() {
                        tokens.push(Token::new(TokenKind::Text, &input[start..pos]));
                    }
                    tokens.push(Token::new(kind, &input[pos..pos + len]));
                    pos += len;
                }
                None => {
                    if text_start.is_none() {
                        text_start = Some(pos);
                    }
                    // Advance one full character to stay on a UTF-8 boundary.
                    pos += input[pos..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                }
            }
        }

        if let Some(start) = text_start {
            tokens.push(Token::new(TokenKind::Text, &input[start..]));
        }

        tokens
    }

    fn match_at(&self, input: &str, pos: usize) -> Option<(TokenKind, usize)> {
        for rule in self.rules.iter() {
            if let Some(m) = rule.pattern.find(&input[pos..])
                && !m.is_empty()
            {
                return Some((rule.kind, m.len()));
            }
        }
        None
    }
}
