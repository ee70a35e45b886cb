//! Infographic: dark sidebar, skill-like sections rendered as chips.

use crate::models::resume::{is_sub_header_text, Section};
use crate::models::template_config::{ColumnMode, HeaderStyle, TemplateConfig};
use crate::render::blocks::{
    render_block, render_columns_with, render_section, section_title, ColumnsStyle, SectionStyle,
    TitleStyle,
};
use crate::render::header::{render_header, ContactLayout, HeaderOptions};
use crate::render::helpers::{filter_visible_bullets, format_bullet_text};
use crate::render::layout::{is_left_column_title, Block};
use crate::render::node::{el, Node};
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "infographic";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Roboto",
        "Roboto",
        ["#1e293b", "#64748b", "#14b8a6", "#0f172a"],
    );
    config.layout.columns = ColumnMode::TwoColumn;
    config.design.header_style = HeaderStyle::LeftAligned;
    config
}

/// Chips for a skill-like section. Sub-headers are dropped; `None` when no
/// chip survives, so the caller can fall back to the regular section.
fn skill_chips(ctx: &RenderContext<'_>, section: &Section, style: &SectionStyle) -> Option<Node> {
    let chips: Vec<Node> = filter_visible_bullets(&section.bullets)
        .into_iter()
        .map(|b| ctx.text(&b.text))
        .filter(|t| !is_sub_header_text(t))
        .map(|t| format_bullet_text(&t))
        .filter(|inline| !inline.is_empty())
        .map(|inline| {
            el("span")
                .class("skill-chip")
                .style("display", "inline-block")
                .style("margin", "0 6px 6px 0")
                .style("padding", "2px 10px")
                .style("border-radius", "999px")
                .style("background", ctx.accent())
                .style("color", "#ffffff")
                .children(inline)
                .into()
        })
        .collect();
    if chips.is_empty() {
        return None;
    }

    Some(
        el("section")
            .class("resume-section")
            .attr("data-section-id", section.id.as_str())
            .style("margin-bottom", format!("{}px", ctx.spacing.section_gap))
            .child(section_title(ctx, &section.title, style))
            .child(el("div").class("skill-chips").children(chips))
            .into(),
    )
}

fn render_skill_aware(
    ctx: &RenderContext<'_>,
    block: &Block<'_>,
    style: &SectionStyle,
) -> Option<Node> {
    match block {
        Block::Section(section) if is_left_column_title(&section.title) => {
            skill_chips(ctx, section, style).or_else(|| render_section(ctx, section, style))
        }
        other => render_block(ctx, other, Some("About"), style),
    }
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let mut header = HeaderOptions::from_config(ctx);
    header.contacts = ContactLayout::Stacked;
    let page = page_shell(ctx, ID).child(render_header(ctx, &header));

    if ctx.is_multi_column() {
        let columns = ColumnsStyle {
            left: SectionStyle::new(TitleStyle::Uppercase).on_dark(),
            right: SectionStyle::new(TitleStyle::AccentBar),
            left_background: Some(ctx.primary().to_string()),
            summary_heading: Some("About"),
        };
        return page
            .child(render_columns_with(ctx, &columns, |block, style| {
                render_skill_aware(ctx, block, style)
            }))
            .into();
    }

    let style = SectionStyle::new(TitleStyle::Filled);
    let blocks: Vec<Node> = ctx
        .blocks()
        .iter()
        .filter_map(|block| render_skill_aware(ctx, block, &style))
        .collect();
    page.children(blocks).into()
}
