//! Minimal: no rules, dash bullets, generous whitespace.

use crate::models::template_config::{BulletStyle, HeaderStyle, SpacingPreset, TemplateConfig};
use crate::render::blocks::{render_flow, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "minimal";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Helvetica",
        "Helvetica",
        ["#111827", "#6b7280", "#111827", "#1f2937"],
    );
    config.layout.spacing = SpacingPreset::Spacious;
    config.design.header_style = HeaderStyle::LeftAligned;
    config.design.bullet_style = BulletStyle::Dash;
    config.design.dividers = false;
    config.typography.font_size.h1 = 24.0;
    config.typography.font_size.h2 = 13.0;
    config.typography.font_weight.heading = 600;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let mut header = HeaderOptions::from_config(ctx);
    header.separator = "  ·  ";
    let sections = SectionStyle::new(TitleStyle::Plain);

    page_shell(ctx, ID)
        .child(render_header(ctx, &header))
        .children(render_flow(ctx, None, &sections))
        .into()
}
