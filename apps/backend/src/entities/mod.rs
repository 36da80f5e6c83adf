pub mod todo_items;
