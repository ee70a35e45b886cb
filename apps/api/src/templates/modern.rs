//! Modern: sans-serif with accent bars. Follows `layout.columns`.

use crate::models::template_config::{HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_columns, render_flow, ColumnsStyle, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "modern";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Inter",
        "Inter",
        ["#1e3a8a", "#475569", "#2563eb", "#0f172a"],
    );
    config.design.header_style = HeaderStyle::LeftAligned;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let header = HeaderOptions::from_config(ctx);
    let sections = SectionStyle::new(TitleStyle::AccentBar);
    let page = page_shell(ctx, ID).child(render_header(ctx, &header));

    if ctx.is_multi_column() {
        let columns = ColumnsStyle {
            left: sections,
            right: sections,
            left_background: None,
            summary_heading: Some("Profile"),
        };
        page.child(render_columns(ctx, &columns)).into()
    } else {
        page.children(render_flow(ctx, Some("Profile"), &sections))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template_config::ColumnMode;
    use crate::render::helpers::Replacements;
    use crate::templates::fixtures::make_resume;

    #[test]
    fn test_switches_layout_with_column_mode() {
        let data = make_resume();
        let replacements = Replacements::new();
        let mut config = default_config();

        let ctx = RenderContext::new(&data, &config, &replacements);
        assert!(render(&ctx).find_by_class("columns").is_none());

        config.layout.columns = ColumnMode::Asymmetric;
        config.layout.column_width = 40.0;
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render(&ctx);
        let left = node.find_by_class("column-left").unwrap();
        assert_eq!(left.style_value("width"), Some("30%"));
    }
}
