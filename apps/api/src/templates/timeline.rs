//! Timeline: every block hangs off a vertical rule with a marker dot.

use crate::models::template_config::{BulletStyle, HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_block, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::{el, Node};
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "timeline";

const DOT_SIZE: u16 = 10;

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Open Sans",
        "Open Sans",
        ["#334155", "#64748b", "#0ea5e9", "#0f172a"],
    );
    config.design.header_style = HeaderStyle::LeftAligned;
    config.design.bullet_style = BulletStyle::Dash;
    config
}

fn timeline_entry(ctx: &RenderContext<'_>, content: Node) -> Node {
    let offset = DOT_SIZE / 2 + 1;
    el("div")
        .class("timeline-entry")
        .style("position", "relative")
        .style("padding-left", "20px")
        .style("border-left", format!("2px solid {}", ctx.accent()))
        .child(
            el("span")
                .class("timeline-dot")
                .style("position", "absolute")
                .style("left", format!("-{offset}px"))
                .style("top", "4px")
                .style("width", format!("{DOT_SIZE}px"))
                .style("height", format!("{DOT_SIZE}px"))
                .style("border-radius", "50%")
                .style("background", ctx.accent()),
        )
        .child(content)
        .into()
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let header = HeaderOptions::from_config(ctx);
    let sections = SectionStyle::new(TitleStyle::Plain).accent();

    let entries = ctx
        .blocks()
        .iter()
        .filter_map(|block| render_block(ctx, block, Some("Summary"), &sections))
        .map(|node| timeline_entry(ctx, node))
        .collect::<Vec<_>>();

    page_shell(ctx, ID)
        .child(render_header(ctx, &header))
        .child(el("div").class("timeline").children(entries))
        .into()
}
