//! Section ordering and two-column distribution.

use std::collections::HashSet;

use tracing::debug;

use crate::models::resume::Section;
use crate::models::template_config::{ColumnItem, ColumnMode, LayoutConfig};

/// Section titles containing any of these default to the left column.
const LEFT_COLUMN_KEYWORDS: &[&str] = &[
    "skill",
    "certif",
    "education",
    "language",
    "interest",
    "hobb",
    "award",
    "tool",
    "technolog",
    "competenc",
    "reference",
];

/// Orders sections by `order`, treating it as a partial order.
///
/// Ids that resolve come first, in `order`; duplicates and unknown ids are
/// skipped. Sections not mentioned are appended in their original order.
pub fn order_sections<'a>(sections: &'a [Section], order: &[ColumnItem]) -> Vec<&'a Section> {
    if order.is_empty() {
        return sections.iter().collect();
    }

    let mut placed: HashSet<&str> = HashSet::with_capacity(sections.len());
    let mut ordered = Vec::with_capacity(sections.len());

    for id in order.iter().filter_map(ColumnItem::section_id) {
        match sections.iter().find(|s| s.id == id) {
            Some(section) if placed.insert(section.id.as_str()) => ordered.push(section),
            Some(_) => {}
            None => debug!("Dropping unknown section id {id:?} from section order"),
        }
    }
    ordered.extend(sections.iter().filter(|s| !placed.contains(s.id.as_str())));
    ordered
}

/// A renderable unit inside a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Block<'a> {
    Summary,
    Section(&'a Section),
}

impl Block<'_> {
    pub fn item(&self) -> ColumnItem {
        match self {
            Block::Summary => ColumnItem::Summary,
            Block::Section(section) => ColumnItem::section(section.id.clone()),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ColumnSplit<'a> {
    pub left: Vec<Block<'a>>,
    pub right: Vec<Block<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDistribution {
    pub left: Vec<ColumnItem>,
    pub right: Vec<ColumnItem>,
}

pub fn is_left_column_title(title: &str) -> bool {
    let title = title.to_lowercase();
    LEFT_COLUMN_KEYWORDS.iter().any(|k| title.contains(k))
}

/// Keyword heuristic used before the user has placed anything: the summary
/// and skill-like sections go left, everything else right.
pub fn default_column_distribution<'a, I>(sections: I, has_summary: bool) -> ColumnDistribution
where
    I: IntoIterator<Item = &'a Section>,
{
    let mut left = Vec::new();
    let mut right = Vec::new();
    if has_summary {
        left.push(ColumnItem::Summary);
    }
    for section in sections {
        let item = ColumnItem::section(section.id.clone());
        if is_left_column_title(&section.title) {
            left.push(item);
        } else {
            right.push(item);
        }
    }
    ColumnDistribution { left, right }
}

/// Partitions visible blocks into columns.
///
/// Membership in `two_column_left` puts a block on the left; everything else,
/// assigned or not, goes right. If neither list has been seeded the keyword
/// heuristic decides. Within a column, blocks are ordered by their position in
/// `section_order`, unknown positions last, ties kept in display order.
pub fn split_columns<'a>(
    visible: &[&'a Section],
    include_summary: bool,
    layout: &LayoutConfig,
) -> ColumnSplit<'a> {
    let left_items: Vec<ColumnItem> = match (&layout.two_column_left, &layout.two_column_right) {
        (None, None) => {
            default_column_distribution(visible.iter().copied(), include_summary).left
        }
        (left, _) => left.clone().unwrap_or_default(),
    };

    let blocks = include_summary
        .then_some(Block::Summary)
        .into_iter()
        .chain(visible.iter().map(|s| Block::Section(*s)));

    let mut split = ColumnSplit::default();
    for block in blocks {
        if left_items.contains(&block.item()) {
            split.left.push(block);
        } else {
            split.right.push(block);
        }
    }

    let position = |block: &Block<'_>| {
        let item = block.item();
        layout
            .section_order
            .iter()
            .position(|o| *o == item)
            .unwrap_or(usize::MAX)
    };
    split.left.sort_by_key(position);
    split.right.sort_by_key(position);
    split
}

/// Single-column flow: the summary sits where `order` puts it, first if it is
/// not mentioned. `visible` is expected to be ordered already.
pub fn ordered_blocks<'a>(
    visible: &[&'a Section],
    include_summary: bool,
    order: &[ColumnItem],
) -> Vec<Block<'a>> {
    let mut blocks = Vec::with_capacity(visible.len() + 1);
    if include_summary && !order.contains(&ColumnItem::Summary) {
        blocks.push(Block::Summary);
    }
    let mut placed: HashSet<&str> = HashSet::new();
    for item in order {
        match item {
            ColumnItem::Summary if include_summary && !blocks.contains(&Block::Summary) => {
                blocks.push(Block::Summary)
            }
            ColumnItem::Summary => {}
            ColumnItem::Section(id) => {
                if let Some(section) = visible.iter().find(|s| s.id == *id) {
                    if placed.insert(section.id.as_str()) {
                        blocks.push(Block::Section(*section));
                    }
                }
            }
        }
    }
    blocks.extend(
        visible
            .iter()
            .filter(|s| !placed.contains(s.id.as_str()))
            .map(|s| Block::Section(*s)),
    );
    blocks
}

/// `(left, right)` widths in percent for a multi-column layout.
pub fn column_widths(layout: &LayoutConfig) -> (f32, f32) {
    let left = match layout.columns {
        ColumnMode::Asymmetric => (layout.column_width * 0.75).max(20.0),
        ColumnMode::Single | ColumnMode::TwoColumn => layout.column_width,
    };
    (left, 100.0 - left)
}
