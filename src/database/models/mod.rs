pub mod todo;
pub mod user;

pub use todo::{TodoItem, TodoList};
pub use user::User;
