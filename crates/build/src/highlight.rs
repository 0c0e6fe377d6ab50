//! Registry-driven page highlighting.
//!
//! Renders a page's fenced code blocks through the build context's grammar
//! registry. Blocks whose alias does not resolve fall back to escaped plain
//! text rather than failing the build.

use std::fmt::Write as _;

use glint_core::Grammar;

use crate::context::BuildContext;
use crate::fence::{FencedBlock, PageSegment, scan_segments};

/// Render a markdown page, highlighting its fenced code blocks.
///
/// Prose passes through HTML-escaped. Each fenced block is tokenized with
/// the grammar its info-string alias resolves to; a missing or unknown alias
/// falls back to escaped plain text.
pub fn highlight_page(ctx: &BuildContext, markdown: &str) -> String {
    let mut out = String::new();
    for segment in scan_segments(markdown) {
        match segment {
            PageSegment::Prose(text) => {
                out.push_str(&html_escape::encode_text(&text));
            }
            PageSegment::Code(block) => render_block(ctx, &block, &mut out),
        }
    }
    out
}

fn render_block(ctx: &BuildContext, block: &FencedBlock, out: &mut String) {
    if let Some(alias) = block.lang.as_deref() {
        if let Some(grammar) = ctx.registry().resolve(alias) {
            render_highlighted(grammar, alias, &block.code, out);
            return;
        }
        log::debug!("no grammar registered for alias '{alias}'; emitting plain text");
    }

    out.push_str("<pre class=\"glint\"><code>");
    out.push_str(&html_escape::encode_text(&block.code));
    out.push_str("</code></pre>\n");
}

fn render_highlighted(grammar: &Grammar, alias: &str, code: &str, out: &mut String) {
    write!(
        out,
        "<pre class=\"glint\"><code class=\"language-{}\" data-grammar=\"{}\">",
        html_escape::encode_double_quoted_attribute(alias),
        html_escape::encode_double_quoted_attribute(grammar.title())
    )
    .ok();

    for token in grammar.tokenize(code) {
        let escaped = html_escape::encode_text(&token.text);
        match token.kind.css_class() {
            Some(class) => {
                write!(out, "<span class=\"{}\">{}</span>", class, escaped).ok();
            }
            None => out.push_str(&escaped),
        }
    }

    out.push_str("</code></pre>\n");
}
