//! Presentation schema for resume templates.
//!
//! Two shapes live here:
//! - [`TemplateConfig`]: fully populated, what templates read.
//! - [`PartialTemplateConfig`]: what arrives over the wire or from the controls.
//!   Every leaf is optional and parsed leniently: a malformed value becomes `None`
//!   instead of rejecting the whole object.
//!
//! [`resolve_config`] is the single place where missing or malformed values are
//! replaced with defaults. Templates never apply their own fallbacks.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::models::resume::ContactField;

/// Wire form of [`ColumnItem::Summary`] inside order and column arrays.
pub const SUMMARY_SENTINEL: &str = "__summary__";

pub const DEFAULT_COLUMN_WIDTH: f32 = 40.0;
pub const MIN_COLUMN_WIDTH: f32 = 20.0;
pub const MAX_COLUMN_WIDTH: f32 = 80.0;

// ────────────────────────────────────────────────────────────────────────────
// Enumerations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnMode {
    #[default]
    Single,
    TwoColumn,
    Asymmetric,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingPreset {
    Compact,
    #[default]
    Balanced,
    Spacious,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletStyle {
    #[default]
    Circle,
    Square,
    Dash,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    Centered,
    #[default]
    LeftAligned,
    Banner,
}

/// An entry of `sectionOrder`, `twoColumnLeft` or `twoColumnRight`.
///
/// Serialised as a plain string so stored configs stay compatible: the summary
/// block is `"__summary__"`, anything else is a section id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnItem {
    Summary,
    Section(String),
}

impl ColumnItem {
    pub fn section(id: impl Into<String>) -> Self {
        ColumnItem::Section(id.into())
    }

    pub fn section_id(&self) -> Option<&str> {
        match self {
            ColumnItem::Summary => None,
            ColumnItem::Section(id) => Some(id),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            ColumnItem::Summary => SUMMARY_SENTINEL,
            ColumnItem::Section(id) => id,
        }
    }

    pub fn from_wire(raw: &str) -> Self {
        if raw == SUMMARY_SENTINEL {
            ColumnItem::Summary
        } else {
            ColumnItem::Section(raw.to_string())
        }
    }
}

impl Serialize for ColumnItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for ColumnItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ColumnItem::from_wire(&raw))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved config
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub columns: ColumnMode,
    pub section_order: Vec<ColumnItem>,
    pub spacing: SpacingPreset,
    /// Left column width in percent, clamped to 20..=80.
    pub column_width: f32,
    /// `None` until the column distribution has been seeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_column_left: Option<Vec<ColumnItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_column_right: Option<Vec<ColumnItem>>,
    pub contact_order: Vec<ContactField>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMode::Single,
            section_order: Vec::new(),
            spacing: SpacingPreset::Balanced,
            column_width: DEFAULT_COLUMN_WIDTH,
            two_column_left: None,
            two_column_right: None,
            contact_order: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub h1: f32,
    pub h2: f32,
    pub body: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontWeights {
    pub heading: u16,
    pub body: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub line_height: f32,
    /// In px.
    pub letter_spacing: f32,
    pub font_weight: FontWeights,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                heading: "Inter".to_string(),
                body: "Inter".to_string(),
            },
            font_size: FontSizes {
                h1: 28.0,
                h2: 16.0,
                body: 11.0,
            },
            line_height: 1.5,
            letter_spacing: 0.0,
            font_weight: FontWeights {
                heading: 700,
                body: 400,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConfig {
    pub colors: Colors,
    pub bullet_style: BulletStyle,
    pub dividers: bool,
    pub header_style: HeaderStyle,
    /// When set, sections whose bullets all filter away are not rendered at all.
    pub hide_empty_sections: bool,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            colors: Colors {
                primary: "#1f2937".to_string(),
                secondary: "#4b5563".to_string(),
                accent: "#2563eb".to_string(),
                text: "#111827".to_string(),
            },
            bullet_style: BulletStyle::Circle,
            dividers: true,
            header_style: HeaderStyle::LeftAligned,
            hide_empty_sections: false,
        }
    }
}

/// Concrete spacing values in px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingValues {
    pub section_gap: u16,
    pub item_gap: u16,
    pub page_margin: u16,
}

/// Explicit spacing set by the user; each value overrides the preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_gap: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_margin: Option<u16>,
}

impl SpacingOverrides {
    pub fn is_empty(&self) -> bool {
        self.section_gap.is_none() && self.item_gap.is_none() && self.page_margin.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub layout: LayoutConfig,
    pub typography: TypographyConfig,
    pub design: DesignConfig,
    #[serde(default, skip_serializing_if = "SpacingOverrides::is_empty")]
    pub spacing: SpacingOverrides,
}

impl TemplateConfig {
    /// Preset spacing with explicit values layered on top.
    pub fn effective_spacing(&self) -> SpacingValues {
        let preset = crate::render::helpers::get_spacing_preset(self.layout.spacing);
        SpacingValues {
            section_gap: self.spacing.section_gap.unwrap_or(preset.section_gap),
            item_gap: self.spacing.item_gap.unwrap_or(preset.item_gap),
            page_margin: self.spacing.page_margin.unwrap_or(preset.page_margin),
        }
    }

    /// Merges a patch over this config. Groups are merged field by field, so a
    /// patch carrying a complete group behaves like a shallow replace.
    pub fn merged(&self, patch: &PartialTemplateConfig) -> TemplateConfig {
        resolve_config(patch, self)
    }

    /// Parses any JSON value as a partial config and resolves it against `base`.
    /// Non-object values resolve to `base` unchanged.
    pub fn from_value_lenient(value: &Value, base: &TemplateConfig) -> TemplateConfig {
        let partial = PartialTemplateConfig::from_value_lenient(value);
        resolve_config(&partial, base)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Partial config
// ────────────────────────────────────────────────────────────────────────────

/// Deserializes a field to `Some(T)` or, if the value does not fit `T`, `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            debug!("Ignoring malformed config value: {err}");
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialLayout {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub columns: Option<ColumnMode>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub section_order: Option<Vec<ColumnItem>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingPreset>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub column_width: Option<f32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub two_column_left: Option<Vec<ColumnItem>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub two_column_right: Option<Vec<ColumnItem>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub contact_order: Option<Vec<ContactField>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialFontFamilies {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialFontSizes {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub h1: Option<f32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub h2: Option<f32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub body: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialFontWeights {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub heading: Option<u16>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub body: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTypography {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<PartialFontFamilies>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<PartialFontSizes>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<PartialFontWeights>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialColors {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialDesign {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub colors: Option<PartialColors>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub bullet_style: Option<BulletStyle>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dividers: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub header_style: Option<HeaderStyle>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hide_empty_sections: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSpacing {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub section_gap: Option<u16>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub item_gap: Option<u16>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub page_margin: Option<u16>,
}

/// A partially specified config: a wire payload, a stored config, or a patch
/// emitted by the customization controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialTemplateConfig {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub layout: Option<PartialLayout>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub typography: Option<PartialTypography>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub design: Option<PartialDesign>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub spacing: Option<PartialSpacing>,
}

/// Patches travel in the same shape as partial configs.
pub type ConfigPatch = PartialTemplateConfig;

impl PartialTemplateConfig {
    pub fn from_value_lenient(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_else(|err| {
            debug!("Config payload is not an object, using defaults: {err}");
            Self::default()
        })
    }

    pub fn layout(layout: PartialLayout) -> Self {
        Self {
            layout: Some(layout),
            ..Self::default()
        }
    }

    pub fn typography(typography: PartialTypography) -> Self {
        Self {
            typography: Some(typography),
            ..Self::default()
        }
    }

    pub fn design(design: PartialDesign) -> Self {
        Self {
            design: Some(design),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Returns a fully populated config: every value present and valid in `partial`
/// wins, everything else comes from `base`.
///
/// Numeric values must be finite and positive; `column_width` is clamped to
/// 20..=80; colour and font strings that are blank or could break out of an
/// inline style are ignored.
pub fn resolve_config(partial: &PartialTemplateConfig, base: &TemplateConfig) -> TemplateConfig {
    TemplateConfig {
        layout: resolve_layout(partial.layout.as_ref(), &base.layout),
        typography: resolve_typography(partial.typography.as_ref(), &base.typography),
        design: resolve_design(partial.design.as_ref(), &base.design),
        spacing: resolve_spacing(partial.spacing.as_ref(), &base.spacing),
    }
}

fn resolve_layout(partial: Option<&PartialLayout>, base: &LayoutConfig) -> LayoutConfig {
    let Some(p) = partial else {
        return base.clone();
    };
    LayoutConfig {
        columns: p.columns.unwrap_or(base.columns),
        section_order: p
            .section_order
            .clone()
            .unwrap_or_else(|| base.section_order.clone()),
        spacing: p.spacing.unwrap_or(base.spacing),
        column_width: p
            .column_width
            .filter(|w| w.is_finite())
            .map(|w| w.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
            .unwrap_or(base.column_width),
        two_column_left: p
            .two_column_left
            .clone()
            .or_else(|| base.two_column_left.clone()),
        two_column_right: p
            .two_column_right
            .clone()
            .or_else(|| base.two_column_right.clone()),
        contact_order: p
            .contact_order
            .clone()
            .unwrap_or_else(|| base.contact_order.clone()),
    }
}

fn resolve_typography(
    partial: Option<&PartialTypography>,
    base: &TypographyConfig,
) -> TypographyConfig {
    let Some(p) = partial else {
        return base.clone();
    };
    let families = p.font_family.as_ref();
    let sizes = p.font_size.as_ref();
    let weights = p.font_weight.as_ref();
    TypographyConfig {
        font_family: FontFamilies {
            heading: safe_str(families.and_then(|f| f.heading.as_deref()))
                .unwrap_or_else(|| base.font_family.heading.clone()),
            body: safe_str(families.and_then(|f| f.body.as_deref()))
                .unwrap_or_else(|| base.font_family.body.clone()),
        },
        font_size: FontSizes {
            h1: positive(sizes.and_then(|s| s.h1)).unwrap_or(base.font_size.h1),
            h2: positive(sizes.and_then(|s| s.h2)).unwrap_or(base.font_size.h2),
            body: positive(sizes.and_then(|s| s.body)).unwrap_or(base.font_size.body),
        },
        line_height: positive(p.line_height).unwrap_or(base.line_height),
        letter_spacing: p
            .letter_spacing
            .filter(|v| v.is_finite())
            .unwrap_or(base.letter_spacing),
        font_weight: FontWeights {
            heading: weight(weights.and_then(|w| w.heading)).unwrap_or(base.font_weight.heading),
            body: weight(weights.and_then(|w| w.body)).unwrap_or(base.font_weight.body),
        },
    }
}

fn resolve_design(partial: Option<&PartialDesign>, base: &DesignConfig) -> DesignConfig {
    let Some(p) = partial else {
        return base.clone();
    };
    let colors = p.colors.as_ref();
    DesignConfig {
        colors: Colors {
            primary: safe_str(colors.and_then(|c| c.primary.as_deref()))
                .unwrap_or_else(|| base.colors.primary.clone()),
            secondary: safe_str(colors.and_then(|c| c.secondary.as_deref()))
                .unwrap_or_else(|| base.colors.secondary.clone()),
            accent: safe_str(colors.and_then(|c| c.accent.as_deref()))
                .unwrap_or_else(|| base.colors.accent.clone()),
            text: safe_str(colors.and_then(|c| c.text.as_deref()))
                .unwrap_or_else(|| base.colors.text.clone()),
        },
        bullet_style: p.bullet_style.unwrap_or(base.bullet_style),
        dividers: p.dividers.unwrap_or(base.dividers),
        header_style: p.header_style.unwrap_or(base.header_style),
        hide_empty_sections: p.hide_empty_sections.unwrap_or(base.hide_empty_sections),
    }
}

fn resolve_spacing(partial: Option<&PartialSpacing>, base: &SpacingOverrides) -> SpacingOverrides {
    let Some(p) = partial else {
        return *base;
    };
    SpacingOverrides {
        section_gap: p.section_gap.or(base.section_gap),
        item_gap: p.item_gap.or(base.item_gap),
        page_margin: p.page_margin.or(base.page_margin),
    }
}

fn positive(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

fn weight(value: Option<u16>) -> Option<u16> {
    value.filter(|w| (100..=900).contains(w))
}

/// Values end up inside inline `style` attributes.
fn safe_str(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value.contains(|c| matches!(c, ';' | '"' | '<' | '>' | '{' | '}')) {
        return None;
    }
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_item_wire_format() {
        let items: Vec<ColumnItem> =
            serde_json::from_value(json!(["__summary__", "exp", "skills"])).unwrap();
        assert_eq!(
            items,
            vec![
                ColumnItem::Summary,
                ColumnItem::section("exp"),
                ColumnItem::section("skills")
            ]
        );
        assert_eq!(
            serde_json::to_value(&items).unwrap(),
            json!(["__summary__", "exp", "skills"])
        );
    }

    #[test]
    fn test_empty_payload_resolves_to_base() {
        let base = TemplateConfig::default();
        let resolved = TemplateConfig::from_value_lenient(&json!({}), &base);
        assert_eq!(resolved, base);
    }

    #[test]
    fn test_non_object_payload_resolves_to_base() {
        let base = TemplateConfig::default();
        assert_eq!(TemplateConfig::from_value_lenient(&json!([1, 2]), &base), base);
        assert_eq!(TemplateConfig::from_value_lenient(&Value::Null, &base), base);
    }

    #[test]
    fn test_malformed_fields_default_individually() {
        let base = TemplateConfig::default();
        let resolved = TemplateConfig::from_value_lenient(
            &json!({
                "layout": {"columns": "three-column", "columnWidth": "wide", "spacing": "compact"},
                "typography": {"fontSize": {"h1": -4, "body": 12}, "lineHeight": "tall"},
                "design": {"bulletStyle": "star", "dividers": false, "colors": {"accent": "red; background: url(x)"}}
            }),
            &base,
        );
        assert_eq!(resolved.layout.columns, ColumnMode::Single);
        assert_eq!(resolved.layout.column_width, DEFAULT_COLUMN_WIDTH);
        assert_eq!(resolved.layout.spacing, SpacingPreset::Compact);
        assert_eq!(resolved.typography.font_size.h1, base.typography.font_size.h1);
        assert_eq!(resolved.typography.font_size.body, 12.0);
        assert_eq!(resolved.typography.line_height, base.typography.line_height);
        assert_eq!(resolved.design.bullet_style, BulletStyle::Circle);
        assert!(!resolved.design.dividers);
        assert_eq!(resolved.design.colors.accent, base.design.colors.accent);
    }

    #[test]
    fn test_column_width_absent_defaults_to_forty() {
        let resolved = TemplateConfig::from_value_lenient(
            &json!({"layout": {"columns": "two-column"}}),
            &TemplateConfig::default(),
        );
        assert_eq!(resolved.layout.column_width, 40.0);
    }

    #[test]
    fn test_column_width_is_clamped() {
        let base = TemplateConfig::default();
        let wide = TemplateConfig::from_value_lenient(&json!({"layout": {"columnWidth": 95}}), &base);
        let narrow =
            TemplateConfig::from_value_lenient(&json!({"layout": {"columnWidth": 5}}), &base);
        assert_eq!(wide.layout.column_width, MAX_COLUMN_WIDTH);
        assert_eq!(narrow.layout.column_width, MIN_COLUMN_WIDTH);
    }

    #[test]
    fn test_explicit_spacing_overrides_preset() {
        let config = TemplateConfig::from_value_lenient(
            &json!({"layout": {"spacing": "compact"}, "spacing": {"itemGap": 10}}),
            &TemplateConfig::default(),
        );
        let spacing = config.effective_spacing();
        assert_eq!(spacing.section_gap, 12);
        assert_eq!(spacing.item_gap, 10);
        assert_eq!(spacing.page_margin, 16);
    }

    #[test]
    fn test_merge_keeps_unpatched_groups() {
        let mut base = TemplateConfig::default();
        base.design.dividers = false;
        let patch = PartialTemplateConfig::layout(PartialLayout {
            columns: Some(ColumnMode::TwoColumn),
            ..PartialLayout::default()
        });
        let merged = base.merged(&patch);
        assert_eq!(merged.layout.columns, ColumnMode::TwoColumn);
        assert!(!merged.design.dividers);
        assert_eq!(merged.typography, base.typography);
    }

    #[test]
    fn test_full_config_round_trips_through_partial() {
        let mut config = TemplateConfig::default();
        config.layout.two_column_left = Some(vec![ColumnItem::Summary]);
        config.layout.two_column_right = Some(vec![ColumnItem::section("exp")]);
        config.spacing.item_gap = Some(6);
        let json = serde_json::to_value(&config).unwrap();
        let restored = TemplateConfig::from_value_lenient(&json, &TemplateConfig::default());
        assert_eq!(restored, config);
    }

    #[test]
    fn test_empty_patch_detection() {
        assert!(PartialTemplateConfig::default().is_empty());
        assert!(!PartialTemplateConfig::design(PartialDesign {
            dividers: Some(true),
            ..PartialDesign::default()
        })
        .is_empty());
    }
}
