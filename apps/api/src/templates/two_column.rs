//! Two column: always split, whatever `layout.columns` says.
//!
//! This is the template the column drag-and-drop editor targets; placement
//! comes from `twoColumnLeft`/`twoColumnRight` with the keyword heuristic as a
//! fallback.

use crate::models::template_config::{ColumnMode, HeaderStyle, TemplateConfig};
use crate::render::blocks::{render_columns, ColumnsStyle, SectionStyle, TitleStyle};
use crate::render::header::{render_header, HeaderOptions};
use crate::render::node::Node;
use crate::render::{page_shell, RenderContext};
use crate::templates::base_config;

pub const ID: &str = "two-column";

const SIDEBAR_TINT: &str = "#f3f4f6";

pub fn default_config() -> TemplateConfig {
    let mut config = base_config(
        "Inter",
        "Inter",
        ["#111827", "#4b5563", "#2563eb", "#111827"],
    );
    config.layout.columns = ColumnMode::TwoColumn;
    config.design.header_style = HeaderStyle::LeftAligned;
    config
}

pub fn render(ctx: &RenderContext<'_>) -> Node {
    let header = HeaderOptions::from_config(ctx);
    let columns = ColumnsStyle {
        left: SectionStyle::new(TitleStyle::Uppercase),
        right: SectionStyle::new(TitleStyle::Underlined),
        left_background: Some(SIDEBAR_TINT.to_string()),
        summary_heading: Some("Summary"),
    };

    page_shell(ctx, ID)
        .child(render_header(ctx, &header))
        .child(render_columns(ctx, &columns))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template_config::ColumnItem;
    use crate::render::helpers::Replacements;
    use crate::render::node::Element;
    use crate::templates::fixtures::make_resume;
    use serde_json::json;

    fn block_ids(column: &Element) -> Vec<String> {
        column
            .children
            .iter()
            .filter_map(Node::as_element)
            .map(|e| {
                if e.has_class("resume-summary") {
                    "__summary__".to_string()
                } else {
                    e.attrs
                        .iter()
                        .find(|(k, _)| k == "data-section-id")
                        .map(|(_, v)| v.clone())
                        .unwrap_or_default()
                }
            })
            .collect()
    }

    #[test]
    fn test_explicit_assignment() {
        let data = make_resume();
        let mut config = default_config();
        config.layout.two_column_left = Some(vec![ColumnItem::Summary, ColumnItem::section("S1")]);
        config.layout.two_column_right = Some(vec![ColumnItem::section("S2")]);
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render(&ctx);

        let left = node.find_by_class("column-left").unwrap();
        let right = node.find_by_class("column-right").unwrap();
        assert_eq!(block_ids(left), vec!["__summary__", "S1"]);
        assert_eq!(block_ids(right), vec!["S2"]);
    }

    #[test]
    fn test_heuristic_when_unassigned() {
        let data = make_resume();
        let config = default_config();
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render(&ctx);

        let left = node.find_by_class("column-left").unwrap();
        let right = node.find_by_class("column-right").unwrap();
        assert_eq!(block_ids(left), vec!["__summary__", "S2"]);
        assert_eq!(block_ids(right), vec!["S1"]);
    }

    #[test]
    fn test_ignores_single_column_setting_and_missing_width() {
        let data = make_resume();
        let config = TemplateConfig::from_value_lenient(
            &json!({"layout": {"columns": "single"}}),
            &default_config(),
        );
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render(&ctx);
        let left = node.find_by_class("column-left").unwrap();
        assert_eq!(left.style_value("width"), Some("40%"));
    }

    #[test]
    fn test_order_within_column_follows_section_order() {
        let data = make_resume();
        let mut config = default_config();
        config.layout.two_column_left = Some(vec![ColumnItem::section("S1"), ColumnItem::Summary]);
        config.layout.section_order = vec![ColumnItem::section("S1"), ColumnItem::Summary];
        let replacements = Replacements::new();
        let ctx = RenderContext::new(&data, &config, &replacements);
        let node = render(&ctx);
        let left = node.find_by_class("column-left").unwrap();
        assert_eq!(block_ids(left), vec!["S1", "__summary__"]);
    }
}
