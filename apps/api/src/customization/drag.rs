//! Drag-to-reorder state machine.
//!
//! `Idle -> start -> Dragging -> over* -> end -> Idle`. Only `end` can change an
//! order, and only when it lands on a different item that is in the list.

use serde::Serialize;

use crate::customization::ordering::OrderedList;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState<T> {
    Idle,
    Dragging { id: T, label: String },
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<T: Clone + PartialEq> DragState<T> {
    /// Starting a drag replaces any drag already in progress.
    pub fn start(id: T, label: impl Into<String>) -> Self {
        DragState::Dragging {
            id,
            label: label.into(),
        }
    }

    /// Hovering never changes state or order.
    pub fn over(&self, _over: Option<&T>) {}

    /// Finishes the drag. Returns the reordered list, or `None` when nothing
    /// moves: no drag in progress, no drop target, dropped on itself, or either
    /// item missing from `list`. The state is `Idle` afterwards in every case.
    pub fn end<L>(&mut self, list: &L, over: Option<&T>) -> Option<Vec<T>>
    where
        L: OrderedList<Item = T> + ?Sized,
    {
        let state = std::mem::take(self);
        let DragState::Dragging { id: active, .. } = state else {
            return None;
        };
        let over = over?;
        if *over == active {
            return None;
        }
        let from = list.index_of(&active)?;
        let to = list.index_of(over)?;
        list.moved(from, to)
    }
}
