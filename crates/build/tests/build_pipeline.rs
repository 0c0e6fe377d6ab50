//! End-to-end build tests: hooks, config, and page rendering together.

use glint_build::{
    BuildContext, BuildPipeline, PreRenderHook, SiteConfig, config_hook, highlight_page,
    purescript_alias_hook,
};
use glint_core::RegistryError;

#[test]
fn ps_page_renders_with_purescript_grammar() {
    let mut ctx = BuildContext::new(SiteConfig::default());
    let mut pipeline = BuildPipeline::new();
    pipeline.add_pre_render_hook(purescript_alias_hook());

    let pages = pipeline
        .render(&mut ctx, &["# Demo\n\n```ps\nconst x: number = 1;\n```\nDone.\n"])
        .unwrap();

    insta::assert_snapshot!(&pages[0], @r###"
    # Demo

    <pre class="glint"><code class="language-ps" data-grammar="PureScript"><span class="hl-keyword">const</span> <span class="hl-identifier">x</span><span class="hl-punctuation">:</span> <span class="hl-keyword">number</span> <span class="hl-punctuation">=</span> <span class="hl-number">1</span><span class="hl-punctuation">;</span>
    </code></pre>
    Done.
    "###);
}

#[test]
fn config_declared_aliases_reach_the_page() {
    let config = SiteConfig::from_yaml(
        "title: Blog\n\
         extraAliases:\n\
         - base: typescript\n\
         \x20 title: PureScript\n\
         \x20 aliases: [ps]\n",
    )
    .unwrap();

    let mut ctx = BuildContext::new(config.clone());
    let mut pipeline = BuildPipeline::new();
    pipeline.add_pre_render_hook(config_hook(config.extra_aliases));

    let pages = pipeline
        .render(&mut ctx, &["```ps\nlet n = 0x2a;\n```\n"])
        .unwrap();
    assert!(pages[0].contains(r#"data-grammar="PureScript""#));
    assert!(pages[0].contains(r#"<span class="hl-number">0x2a</span>"#));
}

#[test]
fn alias_and_base_produce_identical_token_markup() {
    let mut ctx = BuildContext::new(SiteConfig::default());
    purescript_alias_hook().run(&mut ctx).unwrap();

    let source = "```ps\nconst x: number = 1;\n```\n";
    let rendered = highlight_page(&ctx, source);
    let direct = highlight_page(&ctx, &source.replace("```ps", "```typescript"));

    // Strip the metadata attributes; the token spans must be identical.
    let spans = |html: &str| {
        let start = html.find('>').unwrap();
        html[start..].to_string()
    };
    let spans_rendered = spans(rendered.split_once("<code").unwrap().1);
    let spans_direct = spans(direct.split_once("<code").unwrap().1);
    assert_eq!(spans_rendered, spans_direct);
}

#[test]
fn missing_base_grammar_fails_the_whole_build() {
    let mut ctx = BuildContext::new(SiteConfig::default());
    let mut pipeline = BuildPipeline::new();
    pipeline.add_pre_render_hook(|ctx: &mut BuildContext| {
        ctx.registry_mut()
            .register_alias("rouge", "Rouge", &["rg"])
    });

    let result = pipeline.render(&mut ctx, &["```ts\n1\n```\n"]);
    assert!(matches!(
        result,
        Err(RegistryError::MissingBaseGrammar { ref base }) if base == "rouge"
    ));
    // Nothing registered, nothing rendered.
    assert!(ctx.registry().resolve("rg").is_none());
}
