//! Build context and the pre-render hook pipeline.
//!
//! The grammar registry is explicit per-build state owned by a
//! [`BuildContext`], never a process global. Hooks run to completion, in
//! registration order, before any page is rendered; the first hook error
//! aborts the build with nothing rendered.

use glint_core::{GrammarRegistry, RegistryError, default_registry};

use crate::config::SiteConfig;
use crate::highlight::highlight_page;

/// Per-build state: the grammar registry and the site configuration.
///
/// Constructed once at build start and dropped when the build ends; there is
/// no concurrent writer, so no locking.
#[derive(Debug)]
pub struct BuildContext {
    registry: GrammarRegistry,
    config: SiteConfig,
}

impl BuildContext {
    /// Create a context seeded with the builtin grammars.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            registry: default_registry(),
            config,
        }
    }

    /// Create a context with an explicit starting registry.
    pub fn with_registry(config: SiteConfig, registry: GrammarRegistry) -> Self {
        Self { registry, config }
    }

    /// The grammar registry.
    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for pre-render hooks.
    pub fn registry_mut(&mut self) -> &mut GrammarRegistry {
        &mut self.registry
    }

    /// The site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// A callback invoked once, before any page is rendered.
///
/// Hooks mutate the build context (typically its registry). Errors are not
/// caught or retried; they propagate to the pipeline and abort the build.
pub trait PreRenderHook {
    /// Run the hook against the build context.
    fn run(&self, ctx: &mut BuildContext) -> Result<(), RegistryError>;
}

impl<F> PreRenderHook for F
where
    F: Fn(&mut BuildContext) -> Result<(), RegistryError>,
{
    fn run(&self, ctx: &mut BuildContext) -> Result<(), RegistryError> {
        (self)(ctx)
    }
}

/// Ordered pre-render hooks plus the render step that consumes them.
#[derive(Default)]
pub struct BuildPipeline {
    pre_render_hooks: Vec<Box<dyn PreRenderHook>>,
}

impl BuildPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pre-render hook. Hooks run in registration order.
    pub fn add_pre_render_hook<H: PreRenderHook + 'static>(&mut self, hook: H) {
        self.pre_render_hooks.push(Box::new(hook));
    }

    /// Run every pre-render hook, then render the given pages.
    ///
    /// All hooks complete before the first page is tokenized, so grammars
    /// registered by any hook are visible to every page. A failing hook
    /// returns its error and renders nothing.
    pub fn render(
        &self,
        ctx: &mut BuildContext,
        pages: &[&str],
    ) -> Result<Vec<String>, RegistryError> {
        for hook in &self.pre_render_hooks {
            hook.run(ctx)?;
        }

        Ok(pages.iter().map(|page| highlight_page(ctx, page)).collect())
    }
}
