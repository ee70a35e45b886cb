//! Customization controls: one user interaction in, one config patch out.
//!
//! Every action is translated into a [`ConfigPatch`] for the host to merge.
//! An action whose patch would leave the config unchanged (out-of-range move,
//! invalid number, value already set) yields `None`.

use serde::Deserialize;
use tracing::debug;

use crate::customization::columns::{move_section, Column};
use crate::customization::legacy_store::LegacyColumnLayout;
use crate::customization::ordering::{
    contact_order_patch, derive_contact_order, derive_section_order, section_order_patch,
    OrderedList,
};
use crate::models::resume::ResumeData;
use crate::models::template_config::{
    BulletStyle, ColumnItem, ColumnMode, ConfigPatch, HeaderStyle, PartialColors, PartialDesign,
    PartialFontFamilies, PartialFontSizes, PartialFontWeights, PartialLayout, PartialSpacing,
    PartialTypography, SpacingPreset, TemplateConfig,
};
use crate::render::fonts::FontFamily;
use crate::render::helpers::get_spacing_preset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontTarget {
    Heading,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontSizeTarget {
    H1,
    H2,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpacingField {
    SectionGap,
    ItemGap,
    PageMargin,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ControlAction {
    SetFontFamily { target: FontTarget, family: String },
    SetFontSize { target: FontSizeTarget, size: f32 },
    SetFontWeight { target: FontTarget, weight: u16 },
    SetLineHeight { value: f32 },
    SetLetterSpacing { value: f32 },
    SetColor { role: ColorRole, value: String },
    SetBulletStyle { style: BulletStyle },
    SetDividers { enabled: bool },
    SetHeaderStyle { style: HeaderStyle },
    SetHideEmptySections { enabled: bool },
    SetColumns { mode: ColumnMode },
    SetColumnWidth { width: f32 },
    SetSpacingPreset { preset: SpacingPreset },
    SetSpacing { field: SpacingField, value: u16 },
    MoveSectionToColumn { item: ColumnItem, column: Column },
    MoveSectionUp { index: usize },
    MoveSectionDown { index: usize },
    ReorderSections { from: usize, to: usize },
    ReorderContacts { from: usize, to: usize },
}

impl ControlAction {
    /// Column moves are also written back to the legacy layout store.
    pub fn moves_columns(&self) -> bool {
        matches!(self, ControlAction::MoveSectionToColumn { .. })
    }
}

/// What the controls can see while handling an action.
pub struct Controls<'a> {
    pub data: &'a ResumeData,
    pub config: &'a TemplateConfig,
    /// Stored column layout for the current template, if any.
    pub legacy: Option<&'a LegacyColumnLayout>,
}

impl Controls<'_> {
    pub fn handle(&self, action: &ControlAction) -> Option<ConfigPatch> {
        let patch = self.translate(action)?;
        if self.config.merged(&patch) == *self.config {
            debug!("Control action {action:?} changes nothing");
            return None;
        }
        Some(patch)
    }

    fn translate(&self, action: &ControlAction) -> Option<ConfigPatch> {
        let patch = match action {
            ControlAction::SetFontFamily { target, family } => {
                // Store the canonical display name when the family is known.
                let family = FontFamily::from_name(family)
                    .map(|f| f.display_name().to_string())
                    .unwrap_or_else(|| family.trim().to_string());
                let families = match target {
                    FontTarget::Heading => PartialFontFamilies {
                        heading: Some(family),
                        ..PartialFontFamilies::default()
                    },
                    FontTarget::Body => PartialFontFamilies {
                        body: Some(family),
                        ..PartialFontFamilies::default()
                    },
                };
                ConfigPatch::typography(PartialTypography {
                    font_family: Some(families),
                    ..PartialTypography::default()
                })
            }
            ControlAction::SetFontSize { target, size } => {
                let size = Some(*size);
                let sizes = match target {
                    FontSizeTarget::H1 => PartialFontSizes {
                        h1: size,
                        ..PartialFontSizes::default()
                    },
                    FontSizeTarget::H2 => PartialFontSizes {
                        h2: size,
                        ..PartialFontSizes::default()
                    },
                    FontSizeTarget::Body => PartialFontSizes {
                        body: size,
                        ..PartialFontSizes::default()
                    },
                };
                ConfigPatch::typography(PartialTypography {
                    font_size: Some(sizes),
                    ..PartialTypography::default()
                })
            }
            ControlAction::SetFontWeight { target, weight } => {
                let weights = match target {
                    FontTarget::Heading => PartialFontWeights {
                        heading: Some(*weight),
                        ..PartialFontWeights::default()
                    },
                    FontTarget::Body => PartialFontWeights {
                        body: Some(*weight),
                        ..PartialFontWeights::default()
                    },
                };
                ConfigPatch::typography(PartialTypography {
                    font_weight: Some(weights),
                    ..PartialTypography::default()
                })
            }
            ControlAction::SetLineHeight { value } => ConfigPatch::typography(PartialTypography {
                line_height: Some(*value),
                ..PartialTypography::default()
            }),
            ControlAction::SetLetterSpacing { value } => {
                ConfigPatch::typography(PartialTypography {
                    letter_spacing: Some(*value),
                    ..PartialTypography::default()
                })
            }
            ControlAction::SetColor { role, value } => {
                let value = Some(value.clone());
                let colors = match role {
                    ColorRole::Primary => PartialColors {
                        primary: value,
                        ..PartialColors::default()
                    },
                    ColorRole::Secondary => PartialColors {
                        secondary: value,
                        ..PartialColors::default()
                    },
                    ColorRole::Accent => PartialColors {
                        accent: value,
                        ..PartialColors::default()
                    },
                    ColorRole::Text => PartialColors {
                        text: value,
                        ..PartialColors::default()
                    },
                };
                ConfigPatch::design(PartialDesign {
                    colors: Some(colors),
                    ..PartialDesign::default()
                })
            }
            ControlAction::SetBulletStyle { style } => ConfigPatch::design(PartialDesign {
                bullet_style: Some(*style),
                ..PartialDesign::default()
            }),
            ControlAction::SetDividers { enabled } => ConfigPatch::design(PartialDesign {
                dividers: Some(*enabled),
                ..PartialDesign::default()
            }),
            ControlAction::SetHeaderStyle { style } => ConfigPatch::design(PartialDesign {
                header_style: Some(*style),
                ..PartialDesign::default()
            }),
            ControlAction::SetHideEmptySections { enabled } => {
                ConfigPatch::design(PartialDesign {
                    hide_empty_sections: Some(*enabled),
                    ..PartialDesign::default()
                })
            }
            ControlAction::SetColumns { mode } => ConfigPatch::layout(PartialLayout {
                columns: Some(*mode),
                ..PartialLayout::default()
            }),
            ControlAction::SetColumnWidth { width } => ConfigPatch::layout(PartialLayout {
                column_width: Some(*width),
                ..PartialLayout::default()
            }),
            ControlAction::SetSpacingPreset { preset } => {
                // Patches only merge, so explicit spacing is overwritten with
                // the preset's values rather than removed.
                let values = get_spacing_preset(*preset);
                ConfigPatch {
                    layout: Some(PartialLayout {
                        spacing: Some(*preset),
                        ..PartialLayout::default()
                    }),
                    spacing: Some(PartialSpacing {
                        section_gap: Some(values.section_gap),
                        item_gap: Some(values.item_gap),
                        page_margin: Some(values.page_margin),
                    }),
                    ..ConfigPatch::default()
                }
            }
            ControlAction::SetSpacing { field, value } => {
                let current = self.config.effective_spacing();
                let mut spacing = PartialSpacing {
                    section_gap: Some(current.section_gap),
                    item_gap: Some(current.item_gap),
                    page_margin: Some(current.page_margin),
                };
                match field {
                    SpacingField::SectionGap => spacing.section_gap = Some(*value),
                    SpacingField::ItemGap => spacing.item_gap = Some(*value),
                    SpacingField::PageMargin => spacing.page_margin = Some(*value),
                }
                ConfigPatch {
                    spacing: Some(spacing),
                    ..ConfigPatch::default()
                }
            }
            ControlAction::MoveSectionToColumn { item, column } => {
                let (_, patch) =
                    move_section(self.data, &self.config.layout, self.legacy, item, *column)?;
                patch
            }
            ControlAction::MoveSectionUp { index } => {
                section_order_patch(self.section_order().moved_up(*index)?)
            }
            ControlAction::MoveSectionDown { index } => {
                section_order_patch(self.section_order().moved_down(*index)?)
            }
            ControlAction::ReorderSections { from, to } => {
                section_order_patch(self.section_order().moved(*from, *to)?)
            }
            ControlAction::ReorderContacts { from, to } => {
                let order = derive_contact_order(&self.config.layout.contact_order);
                contact_order_patch(order.moved(*from, *to)?)
            }
        };
        Some(patch)
    }

    pub fn section_order(&self) -> Vec<ColumnItem> {
        derive_section_order(self.data, &self.config.layout.section_order)
    }
}
