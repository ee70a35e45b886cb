//! Creative: banner header, pill headings, tinted sidebar when in columns.

use crate::models::template_config::{ColumnMode, HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_columns, render_flow, ColumnsStyle, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "creative";

const SIDEBAR_TINT: &str = "#fdf2f8";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Poppins",
        "Open Sans",
        ["#9d174d", "#6b7280", "#db2777", "#1f2937"],
    );
    config.layout.columns = ColumnMode::TwoColumn;
    config.design.header_style = HeaderStyle::Banner;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let header = HeaderOptions::from_config(ctx);
    let page = page_shell(ctx, ID).child(render_header(ctx, &header));

    if ctx.is_multi_column() {
        let columns = ColumnsStyle {
            left: SectionStyle::new(TitleStyle::Pill),
            right: SectionStyle::new(TitleStyle::Underlined).accent(),
            left_background: Some(SIDEBAR_TINT.to_string()),
            summary_heading: Some("About Me"),
        };
        page.child(render_columns(ctx, &columns)).into()
    } else {
        page.children(render_flow(
            ctx,
            Some("About Me"),
            &SectionStyle::new(TitleStyle::Pill),
        ))
        .into()
    }
}
