#![deny(missing_docs)]
//! Glint core: grammar model, tokenizer, and the alias registry.

/// Builtin grammars and the default registry they seed.
pub mod builtins;
/// Registry error types.
pub mod error;
/// Grammar values and tokenization.
pub mod grammar;
/// Alias-to-grammar registry.
pub mod registry;
/// Token kinds and token streams.
pub mod token;

pub use builtins::{default_registry, plain_text, typescript};
pub use error::RegistryError;
pub use grammar::{Grammar, Rule};
pub use registry::GrammarRegistry;
pub use token::{Token, TokenKind};
