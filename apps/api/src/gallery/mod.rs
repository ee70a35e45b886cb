//! Template gallery: listing, filtering and previews on a built-in sample.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::resume::{Bullet, ResumeData, Section};
use crate::models::template_config::TemplateConfig;
use crate::render::helpers::Replacements;
use crate::templates::registry::templates_in_category;
use crate::templates::{list_templates, TemplateCategory, TemplateEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GallerySort {
    /// Registry order.
    #[default]
    Default,
    /// Highest ATS score first; ties keep registry order.
    AtsScore,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryQuery {
    pub category: Option<TemplateCategory>,
    #[serde(default)]
    pub sort: GallerySort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub ats_score: u8,
    pub preview: &'static str,
}

impl From<&TemplateEntry> for TemplateSummary {
    fn from(entry: &TemplateEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            description: entry.description,
            category: entry.category,
            ats_score: entry.ats_score,
            preview: entry.preview,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDetail {
    #[serde(flatten)]
    pub summary: TemplateSummary,
    pub default_config: TemplateConfig,
}

impl From<&TemplateEntry> for TemplateDetail {
    fn from(entry: &TemplateEntry) -> Self {
        Self {
            summary: entry.into(),
            default_config: (entry.default_config)(),
        }
    }
}

pub fn gallery(query: &GalleryQuery) -> Vec<TemplateSummary> {
    let selected: Vec<&TemplateEntry> = match query.category {
        Some(category) => templates_in_category(category),
        None => list_templates().iter().collect(),
    };
    let mut entries: Vec<TemplateSummary> =
        selected.into_iter().map(TemplateSummary::from).collect();
    if query.sort == GallerySort::AtsScore {
        entries.sort_by(|a, b| b.ats_score.cmp(&a.ats_score));
    }
    entries
}

/// HTML preview of `template` rendered on [`sample_resume`] with its
/// default config.
pub fn preview_html(template: &TemplateEntry) -> String {
    let config = (template.default_config)();
    template.render_html(&sample_resume(), &config, &Replacements::new())
}

fn bullets(prefix: &str, texts: &[&str]) -> Vec<Bullet> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Bullet {
            id: format!("{prefix}-{i}"),
            text: text.to_string(),
            params: None,
        })
        .collect()
}

/// Resume shown in gallery previews.
pub fn sample_resume() -> ResumeData {
    ResumeData {
        name: "Jordan Rivera".into(),
        title: "Senior Software Engineer".into(),
        email: "jordan.rivera@example.com".into(),
        phone: "(555) 010-2030".into(),
        location: "Austin, TX".into(),
        linkedin: Some("linkedin.com/in/jordanrivera".into()),
        github: Some("github.com/jrivera".into()),
        summary: "Backend engineer with eight years of experience building reliable \
                  distributed systems and mentoring small teams."
            .into(),
        sections: vec![
            Section {
                id: "experience".into(),
                title: "Experience".into(),
                bullets: bullets(
                    "exp",
                    &[
                        "**Staff Engineer, Northwind Logistics** | 2021 - Present",
                        "Led the migration of order routing to an event-driven pipeline handling **40k events/s**",
                        "Cut p99 checkout latency from 900ms to 180ms",
                        "**Software Engineer, Contoso Health** | 2016 - 2021",
                        "Built the claims ingestion service used by 300 clinics",
                        "Introduced contract testing across 12 services",
                    ],
                ),
                params: None,
            },
            Section {
                id: "skills".into(),
                title: "Skills".into(),
                bullets: bullets(
                    "skills",
                    &[
                        "Rust, Go, TypeScript, SQL",
                        "PostgreSQL, Kafka, Redis",
                        "Kubernetes, Terraform, AWS",
                    ],
                ),
                params: None,
            },
            Section {
                id: "education".into(),
                title: "Education".into(),
                bullets: bullets(
                    "edu",
                    &["**B.S. Computer Science, University of Texas** | 2016"],
                ),
                params: None,
            },
        ],
        ..ResumeData::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::get_template;

    #[test]
    fn test_unfiltered_gallery_lists_everything_in_order() {
        let entries = gallery(&GalleryQuery::default());
        assert_eq!(entries.len(), list_templates().len());
        assert_eq!(entries[0].id, list_templates()[0].id);
    }

    #[test]
    fn test_category_filter() {
        let entries = gallery(&GalleryQuery {
            category: Some(TemplateCategory::Minimal),
            ..GalleryQuery::default()
        });
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.category == TemplateCategory::Minimal));
    }

    #[test]
    fn test_ats_sort() {
        let entries = gallery(&GalleryQuery {
            sort: GallerySort::AtsScore,
            ..GalleryQuery::default()
        });
        assert_eq!(entries[0].id, "ats-friendly");
        assert!(entries.windows(2).all(|w| w[0].ats_score >= w[1].ats_score));
    }

    #[test]
    fn test_preview_renders_sample() {
        let template = get_template("classic").unwrap();
        let html = preview_html(template);
        assert!(html.contains("Jordan Rivera"));
        assert!(html.contains("<strong>40k events/s</strong>"));
    }

    #[test]
    fn test_detail_serializes_flat() {
        let detail = TemplateDetail::from(get_template("modern").unwrap());
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["id"], "modern");
        assert_eq!(value["atsScore"], 88);
        assert!(value["defaultConfig"]["layout"].is_object());
    }
}
