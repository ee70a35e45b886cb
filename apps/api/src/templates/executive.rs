//! Executive: upper-case name, letter-spaced headings, square bullets.

use crate::models::template_config::{BulletStyle, HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_flow, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "executive";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Garamond",
        "Merriweather",
        ["#1e293b", "#64748b", "#b45309", "#0f172a"],
    );
    config.design.header_style = HeaderStyle::Centered;
    config.design.bullet_style = BulletStyle::Square;
    config.typography.line_height = 1.45;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let mut header = HeaderOptions::from_config(ctx);
    header.uppercase_name = true;
    header.separator = "  /  ";
    let sections = SectionStyle::new(TitleStyle::Uppercase);

    page_shell(ctx, ID)
        .child(render_header(ctx, &header))
        .children(render_flow(ctx, Some("Executive Profile"), &sections))
        .into()
}
