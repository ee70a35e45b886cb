//! Section and contact ordering.
//!
//! Orders are replaced wholesale: every move produces a new list and the
//! caller emits it as a patch. Nothing here mutates the list being displayed.

use std::collections::HashSet;

use tracing::debug;

use crate::models::resume::{ContactField, ResumeData};
use crate::models::template_config::{ColumnItem, ConfigPatch, PartialLayout};

/// A list that can be reordered by index, independent of how the move was
/// initiated (pointer drag, keyboard, up/down buttons).
pub trait OrderedList {
    type Item: Clone + PartialEq;

    fn items(&self) -> &[Self::Item];

    fn index_of(&self, item: &Self::Item) -> Option<usize> {
        self.items().iter().position(|i| i == item)
    }

    /// The list with the item at `from` moved to `to`. `None` when either index
    /// is out of range or the move changes nothing.
    fn moved(&self, from: usize, to: usize) -> Option<Vec<Self::Item>> {
        let items = self.items();
        if from == to || from >= items.len() || to >= items.len() {
            return None;
        }
        let mut next = items.to_vec();
        let item = next.remove(from);
        next.insert(to, item);
        Some(next)
    }

    fn moved_up(&self, index: usize) -> Option<Vec<Self::Item>> {
        self.moved(index, index.checked_sub(1)?)
    }

    fn moved_down(&self, index: usize) -> Option<Vec<Self::Item>> {
        self.moved(index, index.checked_add(1)?)
    }
}

impl<T: Clone + PartialEq> OrderedList for Vec<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        self
    }
}

/// Full section order for the editor.
///
/// Known entries of `configured` keep their relative order; duplicates and ids
/// that no longer resolve are dropped. The summary is prepended if the resume
/// has one and it is not placed yet, and sections not yet ordered are
/// appended in resume order.
pub fn derive_section_order(data: &ResumeData, configured: &[ColumnItem]) -> Vec<ColumnItem> {
    let has_summary = data.has_summary();
    let mut seen: HashSet<&ColumnItem> = HashSet::new();
    let mut order: Vec<ColumnItem> = Vec::with_capacity(data.sections.len() + 1);

    for item in configured {
        let known = match item {
            ColumnItem::Summary => has_summary,
            ColumnItem::Section(id) => data.section(id).is_some(),
        };
        if !known {
            debug!("Dropping unresolvable order entry {:?}", item.as_wire());
            continue;
        }
        if seen.insert(item) {
            order.push(item.clone());
        }
    }

    if has_summary && !order.contains(&ColumnItem::Summary) {
        order.insert(0, ColumnItem::Summary);
    }
    for section in &data.sections {
        let item = ColumnItem::section(section.id.clone());
        if !order.contains(&item) {
            order.push(item);
        }
    }
    order
}

/// All contact fields, configured ones first.
pub fn derive_contact_order(configured: &[ContactField]) -> Vec<ContactField> {
    let mut order: Vec<ContactField> = Vec::with_capacity(ContactField::ALL.len());
    for field in configured.iter().chain(ContactField::ALL.iter()) {
        if !order.contains(field) {
            order.push(*field);
        }
    }
    order
}

pub fn section_order_patch(order: Vec<ColumnItem>) -> ConfigPatch {
    ConfigPatch::layout(PartialLayout {
        section_order: Some(order),
        ..PartialLayout::default()
    })
}

pub fn contact_order_patch(order: Vec<ContactField>) -> ConfigPatch {
    ConfigPatch::layout(PartialLayout {
        contact_order: Some(order),
        ..PartialLayout::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Section;

    fn make_data(ids: &[&str], summary: &str) -> ResumeData {
        ResumeData {
            summary: summary.to_string(),
            sections: ids
                .iter()
                .map(|id| Section {
                    id: id.to_string(),
                    title: id.to_uppercase(),
                    ..Section::default()
                })
                .collect(),
            ..ResumeData::default()
        }
    }

    fn items(ids: &[&str]) -> Vec<ColumnItem> {
        ids.iter().map(|id| ColumnItem::from_wire(id)).collect()
    }

    #[test]
    fn test_append_not_drop() {
        let data = make_data(&["A", "B", "C"], "");
        assert_eq!(derive_section_order(&data, &items(&["B"])), items(&["B", "A", "C"]));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let data = make_data(&["A", "B", "C"], "Hello");
        let configured = items(&["C", "__summary__", "A", "B"]);
        let once = derive_section_order(&data, &configured);
        let twice = derive_section_order(&data, &once);
        assert_eq!(once, configured);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_summary_merged_in_front_and_unknown_dropped() {
        let data = make_data(&["A", "B"], "Hello");
        assert_eq!(
            derive_section_order(&data, &items(&["B", "gone", "B"])),
            items(&["__summary__", "B", "A"])
        );
    }

    #[test]
    fn test_summary_dropped_without_summary_text() {
        let data = make_data(&["A"], "   ");
        assert_eq!(derive_section_order(&data, &items(&["__summary__", "A"])), items(&["A"]));
    }

    #[test]
    fn test_moves_are_pure_splices() {
        let order = items(&["A", "B", "C"]);
        assert_eq!(order.moved_up(1), Some(items(&["B", "A", "C"])));
        assert_eq!(order.moved_down(1), Some(items(&["A", "C", "B"])));
        assert_eq!(order.moved(0, 2), Some(items(&["B", "C", "A"])));
        assert_eq!(order, items(&["A", "B", "C"]));
    }

    #[test]
    fn test_out_of_range_moves_are_none() {
        let order = items(&["A", "B"]);
        assert_eq!(order.moved_up(0), None);
        assert_eq!(order.moved_down(1), None);
        assert_eq!(order.moved(1, 1), None);
        assert_eq!(order.moved(5, 0), None);
    }

    #[test]
    fn test_contact_order_fills_missing_fields() {
        let order = derive_contact_order(&[ContactField::Github, ContactField::Email]);
        assert_eq!(order.len(), ContactField::ALL.len());
        assert_eq!(&order[..3], &[ContactField::Github, ContactField::Email, ContactField::Phone]);
    }
}
