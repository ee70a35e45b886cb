//! Classic: serif type, centred header, ruled section titles. Always one column.

use crate::models::template_config::{BulletStyle, HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_flow, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "classic";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Georgia",
        "Georgia",
        ["#111827", "#4b5563", "#1f2937", "#111827"],
    );
    config.design.header_style = HeaderStyle::Centered;
    config.design.bullet_style = BulletStyle::Circle;
    config.typography.font_size.h1 = 30.0;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let header = HeaderOptions::from_config(ctx);
    let sections = SectionStyle::new(TitleStyle::Underlined);

    page_shell(ctx, ID)
        .child(render_header(ctx, &header))
        .children(render_flow(ctx, Some("Summary"), &sections))
        .into()
}
