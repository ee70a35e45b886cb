// Customization: the interactions that turn into config patches.

pub mod columns;
pub mod controls;
pub mod drag;
pub mod legacy_store;
pub mod ordering;
