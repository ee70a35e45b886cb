//! Vibrant: filled heading bars on a banner header.

use crate::models::template_config::{BulletStyle, HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_columns, render_flow, ColumnsStyle, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "vibrant";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Montserrat",
        "Lato",
        ["#7c3aed", "#4b5563", "#f59e0b", "#111827"],
    );
    config.design.header_style = HeaderStyle::Banner;
    config.design.bullet_style = BulletStyle::Square;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let mut header = HeaderOptions::from_config(ctx);
    if header.background.is_some() {
        header.background = Some(ctx.primary().to_string());
        header.detail_color = "#fef3c7".to_string();
    }
    let sections = SectionStyle::new(TitleStyle::Filled);
    let page = page_shell(ctx, ID).child(render_header(ctx, &header));

    if ctx.is_multi_column() {
        let columns = ColumnsStyle {
            left: sections,
            right: sections,
            left_background: None,
            summary_heading: Some("Summary"),
        };
        page.child(render_columns(ctx, &columns)).into()
    } else {
        page.children(render_flow(ctx, Some("Summary"), &sections))
            .into()
    }
}
