//! The shipped PureScript alias hook.
//!
//! PureScript snippets read well enough under TypeScript's grammar, so pages
//! can tag fences `ps` without a dedicated PureScript grammar: the alias
//! resolves to TypeScript's rule table under the PureScript title.

use glint_core::RegistryError;

use crate::context::{BuildContext, PreRenderHook};

/// Pre-render hook that aliases the TypeScript grammar as PureScript (`ps`).
pub fn purescript_alias_hook() -> impl PreRenderHook {
    |ctx: &mut BuildContext| -> Result<(), RegistryError> {
        log::info!("Adding more PureScript Markdown aliases...");
        ctx.registry_mut()
            .register_alias("typescript", "PureScript", &["ps"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::context::BuildPipeline;

    #[test]
    fn registers_ps_alias_against_typescript() {
        let mut ctx = BuildContext::new(SiteConfig::default());
        purescript_alias_hook().run(&mut ctx).unwrap();

        let base = ctx.registry().resolve("typescript").unwrap();
        let aliased = ctx.registry().resolve("ps").unwrap();
        assert_eq!(aliased.title(), "PureScript");
        assert!(aliased.shares_rules_with(base));
    }

    #[test]
    fn ps_fence_tokenizes_like_typescript() {
        let mut ctx = BuildContext::new(SiteConfig::default());
        purescript_alias_hook().run(&mut ctx).unwrap();

        let input = "const x: number = 1;";
        let via_ps = ctx.registry().resolve("ps").unwrap().tokenize(input);
        let via_ts = ctx
            .registry()
            .resolve("typescript")
            .unwrap()
            .tokenize(input);
        assert_eq!(via_ps, via_ts);
    }

    #[test]
    fn end_to_end_build_highlights_ps_fences() {
        let mut ctx = BuildContext::new(SiteConfig::default());
        let mut pipeline = BuildPipeline::new();
        pipeline.add_pre_render_hook(purescript_alias_hook());

        let pages = pipeline
            .render(&mut ctx, &["```ps\nconst x: number = 1;\n```\n"])
            .unwrap();
        assert!(pages[0].contains(r#"data-grammar="PureScript""#));
        assert!(pages[0].contains(r#"<span class="hl-keyword">const</span>"#));
    }
}
