mod task_item;
mod task_stats;

pub use task_item::TaskItem;
pub use task_stats::TaskStats;
