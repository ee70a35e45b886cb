//! ATS friendly: one column, labelled contacts, plain headings, no fills.
//!
//! Header style and column settings are ignored so that the output stays
//! machine-readable whatever the user picked.

use crate::models::template_config::{BulletStyle, HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_flow, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "ats-friendly";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Arial",
        "Arial",
        ["#000000", "#333333", "#000000", "#000000"],
    );
    config.design.header_style = HeaderStyle::LeftAligned;
    config.design.bullet_style = BulletStyle::Circle;
    config.typography.font_size.h1 = 22.0;
    config.typography.font_size.h2 = 13.0;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let mut header = HeaderOptions::from_config(ctx);
    header.align = HeaderStyle::LeftAligned;
    header.background = None;
    header.name_color = ctx.text_color().to_string();
    header.detail_color = ctx.text_color().to_string();
    header.labels = true;
    header.divider = false;

    let sections = SectionStyle::new(TitleStyle::Uppercase);

    page_shell(ctx, ID)
        .child(render_header(ctx, &header))
        .children(render_flow(ctx, Some("Professional Summary"), &sections))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template_config::ColumnMode;
    use crate::render::helpers::Replacements;
    use crate::templates::fixtures::make_resume;

    #[test]
    fn test_ignores_columns_and_banner() {
        let data = make_resume();
        let mut config = default_config();
        config.layout.columns = ColumnMode::TwoColumn;
        config.design.header_style = HeaderStyle::Banner;
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render(&ctx);

        assert!(node.find_by_class("columns").is_none());
        let header = node.find_by_class("resume-header").unwrap();
        assert!(header.style_value("background").is_none());
        assert!(node.text_content().contains("Email: ada@example.com"));
    }
}
