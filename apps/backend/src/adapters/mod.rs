//! Adapters for external dependencies.

pub mod todo_items_sea;
