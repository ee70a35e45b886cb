//! Resume header shared by all templates: name, title line and contact items.

use crate::models::resume::ContactField;
use crate::models::template_config::HeaderStyle;
use crate::render::node::{el, Element, Node};
use crate::render::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLayout {
    /// One line, items joined by a separator.
    Inline,
    /// One item per line.
    Stacked,
}

/// Style flags for [`render_header`]. Start from [`HeaderOptions::from_config`]
/// and override what the template fixes.
#[derive(Debug, Clone)]
pub struct HeaderOptions {
    pub align: HeaderStyle,
    /// Filled background behind the whole header.
    pub background: Option<String>,
    pub name_color: String,
    pub detail_color: String,
    pub uppercase_name: bool,
    pub separator: &'static str,
    pub contacts: ContactLayout,
    /// Prefix each contact with its label ("Email: ...").
    pub labels: bool,
    /// Rule under the header when dividers are enabled.
    pub divider: bool,
}

impl HeaderOptions {
    pub fn from_config(ctx: &RenderContext<'_>) -> Self {
        let align = ctx.config.design.header_style;
        let banner = align == HeaderStyle::Banner;
        Self {
            align,
            background: banner.then(|| ctx.primary().to_string()),
            name_color: if banner {
                "#ffffff".to_string()
            } else {
                ctx.primary().to_string()
            },
            detail_color: if banner {
                "#f9fafb".to_string()
            } else {
                ctx.secondary().to_string()
            },
            uppercase_name: false,
            separator: " | ",
            contacts: ContactLayout::Inline,
            labels: false,
            divider: ctx.config.design.dividers && !banner,
        }
    }
}

/// Visible contact items in the configured order, placeholders applied.
///
/// `layout.contact_order` is partial: fields it does not mention follow in
/// canonical order.
pub fn contact_items(ctx: &RenderContext<'_>) -> Vec<(ContactField, String)> {
    let configured = &ctx.config.layout.contact_order;
    let mut order: Vec<ContactField> = Vec::with_capacity(ContactField::ALL.len());
    for field in configured.iter().chain(ContactField::ALL.iter()) {
        if !order.contains(field) {
            order.push(*field);
        }
    }

    order
        .into_iter()
        .filter(|field| ctx.show(field.field_name()))
        .filter_map(|field| field.value(ctx.data).map(|v| (field, ctx.text(v))))
        .filter(|(_, v)| !v.trim().is_empty())
        .collect()
}

fn contact_list(ctx: &RenderContext<'_>, opts: &HeaderOptions) -> Option<Element> {
    let items = contact_items(ctx);
    if items.is_empty() {
        return None;
    }

    let mut list = el("div")
        .class("contact-list")
        .style("color", &opts.detail_color)
        .style("font-size", format!("{}px", ctx.config.typography.font_size.body));
    list = match opts.contacts {
        ContactLayout::Inline => list.style("display", "block"),
        ContactLayout::Stacked => list
            .style("display", "flex")
            .style("flex-direction", "column"),
    };

    for (index, (field, value)) in items.into_iter().enumerate() {
        if index > 0 && opts.contacts == ContactLayout::Inline {
            list = list.child(el("span").class("contact-separator").text(opts.separator));
        }
        let content = if opts.labels {
            format!("{}: {}", field.label(), value)
        } else {
            value
        };
        list = list.child(
            el("span")
                .class("contact-item")
                .attr("data-field", field.field_name())
                .text(content),
        );
    }
    Some(list)
}

pub fn render_header(ctx: &RenderContext<'_>, opts: &HeaderOptions) -> Node {
    let typography = &ctx.config.typography;
    let text_align = match opts.align {
        HeaderStyle::Centered | HeaderStyle::Banner => "center",
        HeaderStyle::LeftAligned => "left",
    };

    let name = ctx.text(&ctx.data.name);
    let name = if opts.uppercase_name {
        name.to_uppercase()
    } else {
        name
    };

    let mut header = el("header")
        .class("resume-header")
        .style("text-align", text_align)
        .style("margin-bottom", format!("{}px", ctx.spacing.section_gap))
        .child(
            el("h1")
                .class("name")
                .style("margin", "0")
                .style("font-family", ctx.heading_font)
                .style("font-size", format!("{}px", typography.font_size.h1))
                .style("font-weight", typography.font_weight.heading)
                .style("color", &opts.name_color)
                .text(name),
        );

    if let Some(background) = &opts.background {
        header = header
            .style("background", background)
            .style("padding", format!("{}px", ctx.spacing.page_margin));
    }

    let title = ctx.text(&ctx.data.title);
    if ctx.show("title") && !title.trim().is_empty() {
        header = header.child(
            el("div")
                .class("headline")
                .style("font-size", format!("{}px", typography.font_size.h2))
                .style("color", &opts.detail_color)
                .style("margin", "4px 0")
                .text(title),
        );
    }

    header = header.maybe_child(contact_list(ctx, opts));

    if opts.divider {
        header = header
            .style("padding-bottom", format!("{}px", ctx.spacing.item_gap))
            .style("border-bottom", format!("2px solid {}", ctx.primary()));
    }

    header.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ResumeData;
    use crate::models::template_config::TemplateConfig;
    use crate::render::helpers::Replacements;

    fn make_data() -> ResumeData {
        ResumeData {
            name: "{{first}} Lovelace".into(),
            title: "Analyst".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            location: "London".into(),
            github: Some("ada".into()),
            linkedin: Some("  ".into()),
            ..ResumeData::default()
        }
    }

    fn fields(items: &[(ContactField, String)]) -> Vec<ContactField> {
        items.iter().map(|(f, _)| *f).collect()
    }

    #[test]
    fn test_contact_items_follow_partial_order_and_visibility() {
        let mut data = make_data();
        data.fields_visible.insert("phone".into(), false);
        let mut config = TemplateConfig::default();
        config.layout.contact_order = vec![ContactField::Github, ContactField::Location];
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        assert_eq!(
            fields(&contact_items(&ctx)),
            vec![ContactField::Github, ContactField::Location, ContactField::Email]
        );
    }

    #[test]
    fn test_header_applies_replacements_and_hides_title() {
        let mut data = make_data();
        data.fields_visible.insert("title".into(), false);
        let config = TemplateConfig::default();
        let replacements: Replacements = [("{{first}}".to_string(), "Ada".to_string())].into();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let header = render_header(&ctx, &HeaderOptions::from_config(&ctx));
        assert_eq!(
            header.find_by_class("name").map(|e| Node::Element(e.clone()).text_content()),
            Some("Ada Lovelace".to_string())
        );
        assert!(header.find_by_class("headline").is_none());
        assert_eq!(header.find_all_by_class("contact-separator").len(), 3);
    }

    #[test]
    fn test_banner_header_fills_background() {
        let data = make_data();
        let mut config = TemplateConfig::default();
        config.design.header_style = HeaderStyle::Banner;
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let opts = HeaderOptions::from_config(&ctx);
        assert_eq!(opts.background.as_deref(), Some(config.design.colors.primary.as_str()));
        let header = render_header(&ctx, &opts);
        let element = header.as_element().unwrap();
        assert_eq!(element.style_value("text-align"), Some("center"));
        assert!(element.style_value("border-bottom").is_none());
    }
}
