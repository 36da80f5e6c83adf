//! DTOs for todo_items_sea adapter.

/// DTO for inserting a new to-do item.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoCreate {
    pub title: String,
    pub done: bool,
}

impl TodoCreate {
    pub fn new(title: impl Into<String>, done: bool) -> Self {
        Self {
            title: title.into(),
            done,
        }
    }
}

/// DTO for overwriting an existing item, addressed by its current title.
///
/// Both columns are always written, even when `title == current_title`.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoUpdate {
    pub current_title: String,
    pub title: String,
    pub done: bool,
}

impl TodoUpdate {
    pub fn new(current_title: impl Into<String>, title: impl Into<String>, done: bool) -> Self {
        Self {
            current_title: current_title.into(),
            title: title.into(),
            done,
        }
    }
}
