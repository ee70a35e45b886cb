//! Two-column section distribution.
//!
//! The distribution comes from, in order: the config's `twoColumnLeft/Right`,
//! the legacy layout store, then the title keyword heuristic. A move always
//! writes both lists, so after the first move the config is authoritative.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::customization::legacy_store::LegacyColumnLayout;
use crate::models::resume::ResumeData;
use crate::models::template_config::{
    ColumnItem, ConfigPatch, LayoutConfig, PartialLayout, TemplateConfig,
};
use crate::render::layout::default_column_distribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DistributionSource {
    Config,
    LegacyStore,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnState {
    pub left: Vec<ColumnItem>,
    pub right: Vec<ColumnItem>,
    pub source: DistributionSource,
}

impl ColumnState {
    pub fn column_of(&self, item: &ColumnItem) -> Option<Column> {
        if self.left.contains(item) {
            Some(Column::Left)
        } else if self.right.contains(item) {
            Some(Column::Right)
        } else {
            None
        }
    }

    /// Moves `item` into `to`, removing it from the other column.
    pub fn moved(&self, item: &ColumnItem, to: Column) -> ColumnState {
        let mut left: Vec<ColumnItem> = self.left.iter().filter(|i| *i != item).cloned().collect();
        let mut right: Vec<ColumnItem> =
            self.right.iter().filter(|i| *i != item).cloned().collect();
        match to {
            Column::Left => left.push(item.clone()),
            Column::Right => right.push(item.clone()),
        }
        ColumnState {
            left,
            right,
            source: DistributionSource::Config,
        }
    }

    pub fn to_patch(&self) -> ConfigPatch {
        ConfigPatch::layout(PartialLayout {
            two_column_left: Some(self.left.clone()),
            two_column_right: Some(self.right.clone()),
            ..PartialLayout::default()
        })
    }

    pub fn to_legacy(&self) -> LegacyColumnLayout {
        LegacyColumnLayout {
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

fn resolves(data: &ResumeData, item: &ColumnItem) -> bool {
    match item {
        ColumnItem::Summary => data.has_summary(),
        ColumnItem::Section(id) => data.section(id).is_some(),
    }
}

/// Drops unresolvable and repeated items. An item listed on both sides stays
/// on the left only.
fn sanitize(
    data: &ResumeData,
    left: &[ColumnItem],
    right: &[ColumnItem],
    source: DistributionSource,
) -> ColumnState {
    let mut clean_left: Vec<ColumnItem> = Vec::with_capacity(left.len());
    for item in left {
        if resolves(data, item) && !clean_left.contains(item) {
            clean_left.push(item.clone());
        }
    }
    let mut clean_right: Vec<ColumnItem> = Vec::with_capacity(right.len());
    for item in right {
        if resolves(data, item) && !clean_left.contains(item) && !clean_right.contains(item) {
            clean_right.push(item.clone());
        }
    }
    ColumnState {
        left: clean_left,
        right: clean_right,
        source,
    }
}

/// Whether the config leaves column placement to the legacy layout or the
/// heuristic.
pub fn needs_legacy(layout: &LayoutConfig) -> bool {
    layout.two_column_left.is_none() && layout.two_column_right.is_none()
}

/// Current distribution for the column editor. `legacy` is the stored layout
/// for the session's template, already loaded by the caller.
pub fn derive_distribution(
    data: &ResumeData,
    layout: &LayoutConfig,
    legacy: Option<&LegacyColumnLayout>,
) -> ColumnState {
    if !needs_legacy(layout) {
        return sanitize(
            data,
            layout.two_column_left.as_deref().unwrap_or_default(),
            layout.two_column_right.as_deref().unwrap_or_default(),
            DistributionSource::Config,
        );
    }

    if let Some(legacy) = legacy {
        debug!("Using legacy column layout");
        return sanitize(data, &legacy.left, &legacy.right, DistributionSource::LegacyStore);
    }

    let heuristic = default_column_distribution(&data.sections, data.has_summary());
    ColumnState {
        left: heuristic.left,
        right: heuristic.right,
        source: DistributionSource::Heuristic,
    }
}

/// Config as the preview renders it. Without an assignment of its own, the
/// legacy layout is written into `twoColumnLeft/Right` so the preview shows
/// the same columns as [`derive_distribution`].
pub fn config_for_render<'a>(
    data: &ResumeData,
    config: &'a TemplateConfig,
    legacy: Option<&LegacyColumnLayout>,
) -> Cow<'a, TemplateConfig> {
    if legacy.is_none() || !needs_legacy(&config.layout) {
        return Cow::Borrowed(config);
    }
    let columns = derive_distribution(data, &config.layout, legacy);
    let mut seeded = config.clone();
    seeded.layout.two_column_left = Some(columns.left);
    seeded.layout.two_column_right = Some(columns.right);
    Cow::Owned(seeded)
}

/// Moves one item between columns. Returns the new state and the patch that
/// records it in the config; writing the state back to the legacy store is up
/// to the caller. `None` when the item does not resolve or is already in `to`.
pub fn move_section(
    data: &ResumeData,
    layout: &LayoutConfig,
    legacy: Option<&LegacyColumnLayout>,
    item: &ColumnItem,
    to: Column,
) -> Option<(ColumnState, ConfigPatch)> {
    if !resolves(data, item) {
        debug!("Ignoring column move of unknown item {:?}", item.as_wire());
        return None;
    }
    let current = derive_distribution(data, layout, legacy);
    if current.column_of(item) == Some(to) && current.source == DistributionSource::Config {
        return None;
    }

    let next = current.moved(item, to);
    let patch = next.to_patch();
    Some((next, patch))
}
