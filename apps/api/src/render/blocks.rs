//! Section, summary and column building blocks.

use crate::models::resume::Section;
use crate::models::template_config::BulletStyle;
use crate::render::helpers::render_bullet_points;
use crate::render::layout::{column_widths, Block};
use crate::render::node::{el, Element, Node};
use crate::render::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    Plain,
    /// Rule under the title when dividers are on.
    Underlined,
    /// Upper-case, letter-spaced, rule when dividers are on.
    Uppercase,
    /// Title on a filled primary-colour bar.
    Filled,
    /// Accent bar on the left edge.
    AccentBar,
    /// Accent-coloured pill.
    Pill,
}

#[derive(Debug, Clone, Copy)]
pub struct SectionStyle {
    pub title: TitleStyle,
    pub bullet_style: Option<BulletStyle>,
    /// Titles in the accent colour instead of primary.
    pub accent_titles: bool,
    /// Text colour override for sections on a dark background.
    pub on_dark: bool,
}

impl SectionStyle {
    pub const fn new(title: TitleStyle) -> Self {
        Self {
            title,
            bullet_style: None,
            accent_titles: false,
            on_dark: false,
        }
    }

    pub fn bullets(mut self, style: BulletStyle) -> Self {
        self.bullet_style = Some(style);
        self
    }

    pub fn accent(mut self) -> Self {
        self.accent_titles = true;
        self
    }

    pub fn on_dark(mut self) -> Self {
        self.on_dark = true;
        self
    }
}

pub fn section_title(ctx: &RenderContext<'_>, title: &str, style: &SectionStyle) -> Element {
    let typography = &ctx.config.typography;
    let dividers = ctx.config.design.dividers;
    let color = if style.on_dark {
        "#ffffff"
    } else if style.accent_titles {
        ctx.accent()
    } else {
        ctx.primary()
    };

    let heading = el("h2")
        .class("section-title")
        .style("margin", format!("0 0 {}px 0", ctx.spacing.item_gap))
        .style("font-family", ctx.heading_font)
        .style("font-size", format!("{}px", typography.font_size.h2))
        .style("font-weight", typography.font_weight.heading)
        .style("color", color);

    let heading = match style.title {
        TitleStyle::Plain => heading,
        TitleStyle::Underlined => heading
            .style_if(dividers, "border-bottom", format!("1px solid {}", ctx.secondary()))
            .style_if(dividers, "padding-bottom", "2px"),
        TitleStyle::Uppercase => heading
            .style("text-transform", "uppercase")
            .style("letter-spacing", "0.08em")
            .style_if(dividers, "border-bottom", format!("2px solid {color}"))
            .style_if(dividers, "padding-bottom", "2px"),
        TitleStyle::Filled => heading
            .style("background", ctx.primary())
            .style("color", "#ffffff")
            .style("padding", "4px 8px"),
        TitleStyle::AccentBar => heading
            .style("border-left", format!("4px solid {}", ctx.accent()))
            .style("padding-left", "8px"),
        TitleStyle::Pill => heading
            .style("display", "inline-block")
            .style("background", ctx.accent())
            .style("color", "#ffffff")
            .style("border-radius", "999px")
            .style("padding", "2px 12px"),
    };
    heading.text(ctx.text(title))
}

/// One resume section, or `None` when it is empty and the config hides empty
/// sections. With the default config the title renders even with no bullets.
pub fn render_section(
    ctx: &RenderContext<'_>,
    section: &Section,
    style: &SectionStyle,
) -> Option<Node> {
    let bullets = render_bullet_points(
        &section.bullets,
        ctx.config,
        ctx.replacements,
        style.bullet_style,
    );
    if bullets.is_none() && ctx.config.design.hide_empty_sections {
        return None;
    }

    Some(
        el("section")
            .class("resume-section")
            .attr("data-section-id", section.id.as_str())
            .style("margin-bottom", format!("{}px", ctx.spacing.section_gap))
            .child(section_title(ctx, &section.title, style))
            .maybe_child(bullets)
            .into(),
    )
}

pub fn render_summary(
    ctx: &RenderContext<'_>,
    heading: Option<&str>,
    style: &SectionStyle,
) -> Option<Node> {
    if !ctx.show_summary() {
        return None;
    }
    let mut block = el("section")
        .class("resume-summary")
        .style("margin-bottom", format!("{}px", ctx.spacing.section_gap));
    if let Some(heading) = heading {
        block = block.child(section_title(ctx, heading, style));
    }
    Some(
        block
            .child(
                el("p")
                    .class("summary-text")
                    .style("margin", "0")
                    .style_if(style.on_dark, "color", "#ffffff")
                    .text(ctx.text(&ctx.data.summary)),
            )
            .into(),
    )
}

pub fn render_block(
    ctx: &RenderContext<'_>,
    block: &Block<'_>,
    summary_heading: Option<&str>,
    style: &SectionStyle,
) -> Option<Node> {
    match block {
        Block::Summary => render_summary(ctx, summary_heading, style),
        Block::Section(section) => render_section(ctx, section, style),
    }
}

/// Summary and sections in single-column display order.
pub fn render_flow(
    ctx: &RenderContext<'_>,
    summary_heading: Option<&str>,
    style: &SectionStyle,
) -> Vec<Node> {
    ctx.blocks()
        .iter()
        .filter_map(|block| render_block(ctx, block, summary_heading, style))
        .collect()
}

#[derive(Debug, Clone)]
pub struct ColumnsStyle {
    pub left: SectionStyle,
    pub right: SectionStyle,
    pub left_background: Option<String>,
    pub summary_heading: Option<&'static str>,
}

/// Two columns split by the configured assignment and width.
pub fn render_columns(ctx: &RenderContext<'_>, style: &ColumnsStyle) -> Node {
    render_columns_with(ctx, style, |block, section_style| {
        render_block(ctx, block, style.summary_heading, section_style)
    })
}

/// [`render_columns`] with a custom renderer for each block.
pub fn render_columns_with<F>(ctx: &RenderContext<'_>, style: &ColumnsStyle, render: F) -> Node
where
    F: Fn(&Block<'_>, &SectionStyle) -> Option<Node>,
{
    let split = ctx.columns();
    let (left_width, right_width) = column_widths(&ctx.config.layout);
    let gap = ctx.spacing.section_gap;

    let mut left = el("div")
        .class("column-left")
        .style("box-sizing", "border-box")
        .style("width", format!("{left_width}%"))
        .style("padding-right", format!("{}px", gap / 2));
    if let Some(background) = &style.left_background {
        left = left
            .style("background", background)
            .style("padding", format!("{}px", ctx.spacing.item_gap * 2));
    }
    left = left
        .style_if(style.left.on_dark, "color", "#ffffff")
        .children(split.left.iter().filter_map(|b| render(b, &style.left)));

    let right = el("div")
        .class("column-right")
        .style("box-sizing", "border-box")
        .style("width", format!("{right_width}%"))
        .style("padding-left", format!("{}px", gap / 2))
        .children(split.right.iter().filter_map(|b| render(b, &style.right)));

    el("div")
        .class("columns")
        .style("display", "flex")
        .style("align-items", "flex-start")
        .child(left)
        .child(right)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Bullet, ItemParams, ResumeData};
    use crate::models::template_config::TemplateConfig;
    use crate::render::helpers::Replacements;

    fn make_data() -> ResumeData {
        ResumeData {
            name: "Ada".into(),
            summary: "Summary text".into(),
            sections: vec![Section {
                id: "exp".into(),
                title: "Experience".into(),
                bullets: vec![Bullet {
                    id: "b".into(),
                    text: "Hidden work".into(),
                    params: Some(ItemParams {
                        visible: Some(false),
                        ..ItemParams::default()
                    }),
                }],
                params: None,
            }],
            ..ResumeData::default()
        }
    }

    #[test]
    fn test_empty_section_keeps_title_by_default() {
        let data = make_data();
        let config = TemplateConfig::default();
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render_section(&ctx, &data.sections[0], &SectionStyle::new(TitleStyle::Plain))
            .unwrap();
        assert_eq!(node.text_content(), "Experience");
        assert!(node.find_by_class("bullet-points").is_none());
    }

    #[test]
    fn test_empty_section_hidden_when_configured() {
        let data = make_data();
        let mut config = TemplateConfig::default();
        config.design.hide_empty_sections = true;
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        assert!(render_section(&ctx, &data.sections[0], &SectionStyle::new(TitleStyle::Plain))
            .is_none());
    }

    #[test]
    fn test_divider_styles_follow_config() {
        let data = make_data();
        let mut config = TemplateConfig::default();
        let replacements = Replacements::new();
        let style = SectionStyle::new(TitleStyle::Underlined);

        config.design.dividers = true;
        let ctx = RenderContext::new(&data, &config, &replacements);
        assert!(section_title(&ctx, "X", &style).style_value("border-bottom").is_some());

        config.design.dividers = false;
        let ctx = RenderContext::new(&data, &config, &replacements);
        assert!(section_title(&ctx, "X", &style).style_value("border-bottom").is_none());
    }

    #[test]
    fn test_flow_puts_summary_first() {
        let data = make_data();
        let config = TemplateConfig::default();
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let nodes = render_flow(&ctx, Some("Summary"), &SectionStyle::new(TitleStyle::Plain));
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].find_by_class("resume-summary").is_some());
    }
}
