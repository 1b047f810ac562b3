pub mod task;
pub mod user;

pub use task::{Priority, Task, TaskStatus};
pub use user::User;
