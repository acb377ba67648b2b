pub mod board;
pub mod feed;
pub mod task;

pub use board::{TaskBoard, ToggleOutcome};
pub use feed::{TaskEvent, TaskFeed};
pub use task::Task;
