//! Gradient: header band shaded from primary to accent.

use crate::models::template_config::{HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_columns, render_flow, ColumnsStyle, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "gradient";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Raleway",
        "Inter",
        ["#0f766e", "#475569", "#6366f1", "#0f172a"],
    );
    config.design.header_style = HeaderStyle::Banner;
    config
}

fn header_band(ctx: &RenderContext<'_>) -> String {
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        ctx.primary(),
        ctx.accent()
    )
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    // The band is drawn for every header style; only alignment follows config.
    let mut header = HeaderOptions::from_config(ctx);
    header.background = Some(header_band(ctx));
    header.name_color = "#ffffff".to_string();
    header.detail_color = "#f1f5f9".to_string();
    header.divider = false;

    let sections = SectionStyle::new(TitleStyle::AccentBar).accent();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::helpers::Replacements;
    use crate::templates::fixtures::make_resume;

    #[test]
    fn test_band_uses_configured_colors() {
        let data = make_resume();
        let mut config = default_config();
        config.design.header_style = HeaderStyle::LeftAligned;
        config.design.colors.primary = "#000000".into();
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render(&ctx);
        let header = node.find_by_class("resume-header").unwrap();
        assert_eq!(
            header.style_value("background"),
            Some("linear-gradient(135deg, #000000 0%, #6366f1 100%)")
        );
        assert_eq!(header.style_value("text-align"), Some("left"));
    }
}
