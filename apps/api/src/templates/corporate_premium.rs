//! Corporate premium: narrow credentials sidebar, accent headings.

use crate::models::template_config::{
    BulletStyle, ColumnMode, HeaderStyle, SpacingPreset, TemplateConfig,
};
use crate::render::blocks::{render_columns, render_flow, ColumnsStyle, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "corporate-premium";

const SIDEBAR_TINT: &str = "#f1f5f9";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Merriweather",
        "Lato",
        ["#0c4a6e", "#475569", "#0369a1", "#0f172a"],
    );
    config.layout.columns = ColumnMode::Asymmetric;
    config.layout.spacing = SpacingPreset::Compact;
    config.design.header_style = HeaderStyle::LeftAligned;
    config.design.bullet_style = BulletStyle::Square;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let mut header = HeaderOptions::from_config(ctx);
    header.separator = "  |  ";
    let titles = SectionStyle::new(TitleStyle::Uppercase).accent();
    let page = page_shell(ctx, ID).child(render_header(ctx, &header));

    if ctx.is_multi_column() {
        let columns = ColumnsStyle {
            left: SectionStyle::new(TitleStyle::Plain)
                .accent()
                .bullets(BulletStyle::None),
            right: titles,
            left_background: Some(SIDEBAR_TINT.to_string()),
            summary_heading: Some("Profile"),
        };
        page.child(render_columns(ctx, &columns)).into()
    } else {
        page.children(render_flow(ctx, Some("Profile"), &titles))
            .into()
    }
}
