// Resume templates. Each module exposes `default_config()` and `render(ctx)`;
// the registry ties them to ids and gallery metadata.

pub mod ats_friendly;
pub mod classic;
pub mod corporate_premium;
pub mod creative;
pub mod executive;
pub mod gradient;
pub mod infographic;
pub mod minimal;
pub mod modern;
pub mod professional;
pub mod registry;
pub mod timeline;
pub mod two_column;
pub mod vibrant;

pub use registry::{get_template, list_templates, TemplateCategory, TemplateEntry};

use crate::models::template_config::{Colors, FontFamilies, TemplateConfig};

/// Starting point for every template's default config.
pub(crate) fn base_config(heading: &str, body: &str, colors: [&str; 4]) -> TemplateConfig {
    let [primary, secondary, accent, text] = colors;
    let mut config = TemplateConfig::default();
    config.typography.font_family = FontFamilies {
        heading: heading.to_string(),
        body: body.to_string(),
    };
    config.design.colors = Colors {
        primary: primary.to_string(),
        secondary: secondary.to_string(),
        accent: accent.to_string(),
        text: text.to_string(),
    };
    config
}
