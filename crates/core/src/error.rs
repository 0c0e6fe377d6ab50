//! Registry error types.

use thiserror::Error;

/// Errors emitted by grammar registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The grammar being aliased is not present in the registry.
    #[error("cannot alias unknown grammar '{base}': no grammar is registered under that id")]
    MissingBaseGrammar {
        /// The alias or id that failed to resolve to a base grammar.
        base: String,
    },
}
