// Rendering pipeline shared by all templates.
// A template is a pure function of (resume, config, replacements) -> Node.

pub mod blocks;
pub mod fonts;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod node;

use crate::models::resume::{ResumeData, Section};
use crate::models::template_config::{ColumnMode, SpacingValues, TemplateConfig};
use crate::render::fonts::font_stack;
use crate::render::helpers::{
    apply_replacements, filter_visible_sections, should_show_field, Replacements,
};
use crate::render::layout::{order_sections, ordered_blocks, split_columns, Block, ColumnSplit};
use crate::render::node::{el, escape_html, Element, Node};

/// Everything a template needs, resolved once per render.
pub struct RenderContext<'a> {
    pub data: &'a ResumeData,
    pub config: &'a TemplateConfig,
    pub replacements: &'a Replacements,
    pub spacing: SpacingValues,
    pub heading_font: &'static str,
    pub body_font: &'static str,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        data: &'a ResumeData,
        config: &'a TemplateConfig,
        replacements: &'a Replacements,
    ) -> Self {
        Self {
            data,
            config,
            replacements,
            spacing: config.effective_spacing(),
            heading_font: font_stack(&config.typography.font_family.heading),
            body_font: font_stack(&config.typography.font_family.body),
        }
    }

    /// Text with placeholders substituted.
    pub fn text(&self, raw: &str) -> String {
        apply_replacements(raw, self.replacements)
    }

    pub fn show(&self, field: &str) -> bool {
        should_show_field(&self.data.fields_visible, field)
    }

    pub fn show_summary(&self) -> bool {
        self.data.has_summary() && self.show("summary")
    }

    /// Sections in display order, hidden ones removed.
    pub fn visible_sections(&self) -> Vec<&'a Section> {
        filter_visible_sections(order_sections(
            &self.data.sections,
            &self.config.layout.section_order,
        ))
    }

    pub fn blocks(&self) -> Vec<Block<'a>> {
        ordered_blocks(
            &self.visible_sections(),
            self.show_summary(),
            &self.config.layout.section_order,
        )
    }

    pub fn columns(&self) -> ColumnSplit<'a> {
        split_columns(
            &self.visible_sections(),
            self.show_summary(),
            &self.config.layout,
        )
    }

    pub fn is_multi_column(&self) -> bool {
        self.config.layout.columns != ColumnMode::Single
    }

    pub fn primary(&self) -> &str {
        &self.config.design.colors.primary
    }

    pub fn secondary(&self) -> &str {
        &self.config.design.colors.secondary
    }

    pub fn accent(&self) -> &str {
        &self.config.design.colors.accent
    }

    pub fn text_color(&self) -> &str {
        &self.config.design.colors.text
    }
}

/// Outer page element carrying the body typography and page margin.
pub fn page_shell(ctx: &RenderContext<'_>, template_id: &str) -> Element {
    let typography = &ctx.config.typography;
    el("div")
        .class("resume")
        .class(format!("template-{template_id}"))
        .style("box-sizing", "border-box")
        .style("max-width", "816px")
        .style("margin", "0 auto")
        .style("background", "#ffffff")
        .style("padding", format!("{}px", ctx.spacing.page_margin))
        .style("font-family", ctx.body_font)
        .style("font-size", format!("{}px", typography.font_size.body))
        .style("font-weight", typography.font_weight.body)
        .style("line-height", typography.line_height)
        .style_if(
            typography.letter_spacing != 0.0,
            "letter-spacing",
            format!("{}px", typography.letter_spacing),
        )
        .style("color", ctx.text_color())
}

/// Wraps a rendered template in a standalone HTML document.
pub fn render_document(title: &str, body: &Node) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{}</title></head><body style=\"margin: 0; background: #f3f4f6\">{}</body></html>",
        escape_html(title),
        body.to_html()
    )
}
