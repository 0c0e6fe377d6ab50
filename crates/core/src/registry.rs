//! Alias-to-grammar registry.
//!
//! The registry is a flat map from selector alias to grammar, held as
//! explicit state by whoever owns the build (never a process global). It is
//! written during the pre-render phase and only read afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::grammar::Grammar;

/// Flat mapping from selector aliases to registered grammars.
///
/// Several aliases may point at the same grammar; registering a grammar
/// inserts it under every alias it declares.
#[derive(Debug, Default)]
pub struct GrammarRegistry {
    grammars: HashMap<String, Arc<Grammar>>,
}

impl GrammarRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a grammar under each of its declared aliases.
    ///
    /// A duplicate alias overwrites the previous mapping; the last
    /// registration wins, matching the re-registration semantics of
    /// class-based highlighter libraries. Overwrites are logged.
    pub fn register(&mut self, grammar: Grammar) {
        let grammar = Arc::new(grammar);
        for alias in grammar.aliases() {
            if let Some(previous) = self.grammars.insert(alias.clone(), Arc::clone(&grammar)) {
                log::warn!(
                    "alias '{}' re-registered: '{}' replaces '{}'",
                    alias,
                    grammar.title(),
                    previous.title()
                );
            }
        }
    }

    /// Register a new alias set for an existing grammar.
    ///
    /// Looks up `base_grammar_id`, derives a grammar that shares the base's
    /// rule table under `new_title`, and registers it under `new_aliases`.
    /// The derived grammar's tokenization is identical to the base's; only
    /// the reported title differs.
    ///
    /// Fails with [`RegistryError::MissingBaseGrammar`] when the base is not
    /// registered, leaving the registry unchanged. An empty alias set is
    /// still validated against the base but registers nothing.
    pub fn register_alias(
        &mut self,
        base_grammar_id: &str,
        new_title: &str,
        new_aliases: &[&str],
    ) -> Result<(), RegistryError> {
        let base = self
            .grammars
            .get(base_grammar_id)
            .ok_or_else(|| RegistryError::MissingBaseGrammar {
                base: base_grammar_id.to_string(),
            })?;

        log::debug!(
            "aliasing '{}' as '{}' under {:?}",
            base.title(),
            new_title,
            new_aliases
        );

        let derived = Grammar::alias_of(base.as_ref(), new_title, new_aliases.iter().copied());
        self.register(derived);
        Ok(())
    }

    /// Resolve an alias to its registered grammar, if any.
    pub fn resolve(&self, alias: &str) -> Option<&Arc<Grammar>> {
        self.grammars.get(alias)
    }

    /// Number of registered aliases (not distinct grammars).
    pub fn len(&self) -> usize {
        self.grammars.len()
    }

    /// Whether no aliases are registered.
    pub fn is_empty(&self) -> bool {
        self.grammars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{default_registry, plain_text, typescript};

    #[test]
    fn alias_resolves_to_base_behavior() {
        let mut registry = default_registry();
        registry
            .register_alias("typescript", "PureScript", &["ps"])
            .unwrap();

        let base = registry.resolve("typescript").unwrap();
        let aliased = registry.resolve("ps").unwrap();
        let input = "const x: number = 1;";
        assert_eq!(aliased.tokenize(input), base.tokenize(input));
        assert!(aliased.shares_rules_with(base));
    }

    #[test]
    fn aliased_grammar_reports_new_title() {
        let mut registry = default_registry();
        registry
            .register_alias("typescript", "PureScript", &["ps"])
            .unwrap();

        assert_eq!(registry.resolve("ps").unwrap().title(), "PureScript");
        assert_eq!(
            registry.resolve("typescript").unwrap().title(),
            "TypeScript"
        );
    }

    #[test]
    fn missing_base_fails_and_leaves_registry_unchanged() {
        let mut registry = default_registry();
        let before = registry.len();

        let err = registry
            .register_alias("purescript", "PureScript", &["ps"])
            .unwrap_err();

        assert!(matches!(
            err,
            RegistryError::MissingBaseGrammar { ref base } if base == "purescript"
        ));
        assert_eq!(registry.len(), before);
        assert!(registry.resolve("ps").is_none());
    }

    #[test]
    fn overwrites_existing_alias_and_keeps_latest() {
        let mut registry = GrammarRegistry::new();
        registry.register(typescript());
        registry.register(plain_text());

        // `ts` currently points at TypeScript; re-point it at Plain Text.
        registry
            .register_alias("text", "Terse Script", &["ts"])
            .unwrap();

        assert_eq!(registry.resolve("ts").unwrap().title(), "Terse Script");
        // The canonical alias is untouched.
        assert_eq!(
            registry.resolve("typescript").unwrap().title(),
            "TypeScript"
        );
    }

    #[test]
    fn empty_alias_set_is_validated_but_registers_nothing() {
        let mut registry = default_registry();
        let before = registry.len();

        registry.register_alias("typescript", "Unlisted", &[]).unwrap();
        assert_eq!(registry.len(), before);

        assert!(registry.register_alias("nope", "Unlisted", &[]).is_err());
    }

    #[test]
    fn alias_of_alias_still_matches_base() {
        let mut registry = default_registry();
        registry
            .register_alias("typescript", "PureScript", &["ps"])
            .unwrap();
        registry
            .register_alias("ps", "PureScript Markdown", &["psmd"])
            .unwrap();

        let base = registry.resolve("typescript").unwrap();
        let nested = registry.resolve("psmd").unwrap();
        assert!(nested.shares_rules_with(base));
        assert_eq!(nested.title(), "PureScript Markdown");
    }
}
