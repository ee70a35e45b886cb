//! Static catalogue of templates.
//!
//! Lookups return `None` for unknown ids; substituting a fallback is the
//! caller's decision.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::resume::ResumeData;
use crate::models::template_config::TemplateConfig;
use crate::render::helpers::Replacements;
use crate::render::node::Node;
use crate::render::{render_document, RenderContext};
use crate::templates::{
    ats_friendly, classic, corporate_premium, creative, executive, gradient, infographic, minimal,
    modern, professional, timeline, two_column, vibrant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Professional,
    Modern,
    Creative,
    Minimal,
    Ats,
}

pub struct TemplateEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    /// Estimated parse-friendliness for applicant tracking systems, 0-100.
    pub ats_score: u8,
    /// Gallery thumbnail path.
    pub preview: &'static str,
    pub default_config: fn() -> TemplateConfig,
    pub render: fn(&RenderContext<'_>) -> Node,
}

impl TemplateEntry {
    /// Resolves any parseable JSON against this template's defaults.
    pub fn resolve_config(&self, raw: Option<&Value>) -> TemplateConfig {
        let defaults = (self.default_config)();
        match raw {
            Some(value) => TemplateConfig::from_value_lenient(value, &defaults),
            None => defaults,
        }
    }

    pub fn render_node(
        &self,
        data: &ResumeData,
        config: &TemplateConfig,
        replacements: &Replacements,
    ) -> Node {
        let ctx = RenderContext::new(data, config, replacements);
        (self.render)(&ctx)
    }

    /// Standalone HTML document for previews and exports.
    pub fn render_html(
        &self,
        data: &ResumeData,
        config: &TemplateConfig,
        replacements: &Replacements,
    ) -> String {
        let node = self.render_node(data, config, replacements);
        let title = if data.name.trim().is_empty() {
            format!("Resume - {}", self.name)
        } else {
            format!("{} - Resume", data.name.trim())
        };
        render_document(&title, &node)
    }
}

impl std::fmt::Debug for TemplateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEntry")
            .field("id", &self.id)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

static TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        id: classic::ID,
        name: "Classic",
        description: "Traditional serif layout with a centred header and ruled sections.",
        category: TemplateCategory::Professional,
        ats_score: 92,
        preview: "/previews/classic.png",
        default_config: classic::default_config,
        render: classic::render,
    },
    TemplateEntry {
        id: modern::ID,
        name: "Modern",
        description: "Clean sans-serif design with accent bars; supports two columns.",
        category: TemplateCategory::Modern,
        ats_score: 88,
        preview: "/previews/modern.png",
        default_config: modern::default_config,
        render: modern::render,
    },
    TemplateEntry {
        id: minimal::ID,
        name: "Minimal",
        description: "Generous whitespace, no rules, dash bullets.",
        category: TemplateCategory::Minimal,
        ats_score: 90,
        preview: "/previews/minimal.png",
        default_config: minimal::default_config,
        render: minimal::render,
    },
    TemplateEntry {
        id: ats_friendly::ID,
        name: "ATS Friendly",
        description: "Single column, plain headings and labelled contacts for tracking systems.",
        category: TemplateCategory::Ats,
        ats_score: 98,
        preview: "/previews/ats-friendly.png",
        default_config: ats_friendly::default_config,
        render: ats_friendly::render,
    },
    TemplateEntry {
        id: creative::ID,
        name: "Creative",
        description: "Banner header, pill headings and a tinted sidebar.",
        category: TemplateCategory::Creative,
        ats_score: 70,
        preview: "/previews/creative.png",
        default_config: creative::default_config,
        render: creative::render,
    },
    TemplateEntry {
        id: executive::ID,
        name: "Executive",
        description: "Understated serif typography for senior roles.",
        category: TemplateCategory::Professional,
        ats_score: 90,
        preview: "/previews/executive.png",
        default_config: executive::default_config,
        render: executive::render,
    },
    TemplateEntry {
        id: vibrant::ID,
        name: "Vibrant",
        description: "Bold colour blocks behind every heading.",
        category: TemplateCategory::Creative,
        ats_score: 72,
        preview: "/previews/vibrant.png",
        default_config: vibrant::default_config,
        render: vibrant::render,
    },
    TemplateEntry {
        id: gradient::ID,
        name: "Gradient",
        description: "Gradient header band with accent-barred sections.",
        category: TemplateCategory::Creative,
        ats_score: 75,
        preview: "/previews/gradient.png",
        default_config: gradient::default_config,
        render: gradient::render,
    },
    TemplateEntry {
        id: corporate_premium::ID,
        name: "Corporate Premium",
        description: "Structured layout with a narrow sidebar for credentials.",
        category: TemplateCategory::Professional,
        ats_score: 85,
        preview: "/previews/corporate-premium.png",
        default_config: corporate_premium::default_config,
        render: corporate_premium::render,
    },
    TemplateEntry {
        id: timeline::ID,
        name: "Timeline",
        description: "Experience drawn along a vertical timeline.",
        category: TemplateCategory::Modern,
        ats_score: 80,
        preview: "/previews/timeline.png",
        default_config: timeline::default_config,
        render: timeline::render,
    },
    TemplateEntry {
        id: infographic::ID,
        name: "Infographic",
        description: "Dark sidebar with skills rendered as chips.",
        category: TemplateCategory::Creative,
        ats_score: 65,
        preview: "/previews/infographic.png",
        default_config: infographic::default_config,
        render: infographic::render,
    },
    TemplateEntry {
        id: professional::ID,
        name: "Professional",
        description: "Balanced business layout; single or two columns.",
        category: TemplateCategory::Professional,
        ats_score: 90,
        preview: "/previews/professional.png",
        default_config: professional::default_config,
        render: professional::render,
    },
    TemplateEntry {
        id: two_column::ID,
        name: "Two Column",
        description: "Always two columns with drag-assignable sections.",
        category: TemplateCategory::Modern,
        ats_score: 78,
        preview: "/previews/two-column.png",
        default_config: two_column::default_config,
        render: two_column::render,
    },
];

pub fn list_templates() -> &'static [TemplateEntry] {
    TEMPLATES
}

pub fn get_template(id: &str) -> Option<&'static TemplateEntry> {
    TEMPLATES.iter().find(|t| t.id == id)
}

pub fn templates_in_category(category: TemplateCategory) -> Vec<&'static TemplateEntry> {
    TEMPLATES.iter().filter(|t| t.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template_config::ColumnMode;
    use crate::templates::fixtures::make_resume;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_thirteen_unique_templates() {
        let ids: HashSet<&str> = list_templates().iter().map(|t| t.id).collect();
        assert_eq!(list_templates().len(), 13);
        assert_eq!(ids.len(), 13);
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        assert_eq!(get_template("two-column").map(|t| t.id), Some("two-column"));
        assert!(get_template("does-not-exist").is_none());
        assert!(get_template("").is_none());
    }

    #[test]
    fn test_category_filter() {
        let ats = templates_in_category(TemplateCategory::Ats);
        assert_eq!(ats.len(), 1);
        assert_eq!(ats[0].id, "ats-friendly");
        assert!(templates_in_category(TemplateCategory::Creative).len() >= 3);
    }

    #[test]
    fn test_every_template_renders_with_partial_config() {
        let data = make_resume();
        let replacements = Replacements::new();
        for template in list_templates() {
            // Column width absent, columns forced on: must behave as 40%.
            let config = template.resolve_config(Some(&json!({
                "layout": {"columns": "two-column", "columnWidth": null},
                "typography": {"fontFamily": {"heading": "Unknown Display"}}
            })));
            assert_eq!(config.layout.column_width, 40.0, "{}", template.id);
            let node = template.render_node(&data, &config, &replacements);
            let text = node.text_content();
            assert!(
                text.to_lowercase().contains("ada lovelace"),
                "{} lost the name",
                template.id
            );
            assert!(!text.contains("Should never render"), "{} leaked hidden bullet", template.id);
            assert!(!text.contains('•') && !text.contains('●'), "{} kept a glyph", template.id);
            if let Some(left) = node.find_by_class("column-left") {
                assert_eq!(left.style_value("width"), Some("40%"), "{}", template.id);
            }
        }
    }

    #[test]
    fn test_every_template_renders_empty_resume() {
        let data = ResumeData::default();
        let replacements = Replacements::new();
        for template in list_templates() {
            let config = template.resolve_config(None);
            let html = template.render_html(&data, &config, &replacements);
            assert!(html.starts_with("<!DOCTYPE html>"), "{}", template.id);
        }
    }

    #[test]
    fn test_default_configs_are_stable() {
        for template in list_templates() {
            assert_eq!((template.default_config)(), (template.default_config)());
        }
        assert_eq!(
            get_template("two-column").map(|t| (t.default_config)().layout.columns),
            Some(ColumnMode::TwoColumn)
        );
    }
}
