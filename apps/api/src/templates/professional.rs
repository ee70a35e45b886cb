//! Professional: conservative business layout in one or two columns.

use crate::models::template_config::{HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_columns, render_flow, ColumnsStyle, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "professional";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Source Sans Pro",
        "Source Sans Pro",
        ["#1f2937", "#4b5563", "#0e7490", "#111827"],
    );
    config.design.header_style = HeaderStyle::LeftAligned;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let header = HeaderOptions::from_config(ctx);
    let sections = SectionStyle::new(TitleStyle::Underlined);
    let page = page_shell(ctx, ID).child(render_header(ctx, &header));

    if !ctx.is_multi_column() {
        return page
            .children(render_flow(ctx, Some("Summary"), &sections))
            .into();
    }
    let columns = ColumnsStyle {
        left: sections,
        right: sections,
        left_background: None,
        summary_heading: Some("Summary"),
    };
    page.child(render_columns(ctx, &columns)).into()
}
