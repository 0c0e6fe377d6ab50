#![deny(missing_docs)]
//! Glint build engine: build context, lifecycle hooks, fence scanning, and
//! page highlighting.

/// Site configuration loaded from YAML.
pub mod config;
/// Build context and the pre-render hook pipeline.
pub mod context;
/// Fenced code block scanning.
pub mod fence;
/// Registry-driven page highlighting.
pub mod highlight;
/// The shipped PureScript alias hook.
pub mod purescript;

pub use config::{AliasEntry, ConfigError, SiteConfig, config_hook};
pub use context::{BuildContext, BuildPipeline, PreRenderHook};
pub use fence::{FencedBlock, PageSegment, scan_segments};
pub use highlight::highlight_page;
pub use purescript::purescript_alias_hook;
