pub mod board;
pub mod config;
pub mod registry;
pub mod task;
pub mod transition;

pub use board::{
  Row,
  Stats,
  TaskBoard
};
pub use config::{
  Labels,
  Timings,
  WidgetConfig
};
pub use registry::{
  ElementRegistry,
  Lifecycle
};
pub use task::{
  Task,
  TaskId
};
pub use transition::Phase;

/// Tag under which the widget is registered.
pub const TASK_LIST_TAG: &str =
  "task-list";
