use tracing::{debug, instrument};

use crate::task::{Task, TaskId};
use crate::transition::Phase;

/// Counter shown in the widget header as `done/total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub done: usize,
    pub total: usize,
}

impl Stats {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            done: tasks.iter().filter(|task| task.done).count(),
            total: tasks.len(),
        }
    }
}

/// One rendered list item. Rows of deleted tasks linger in `Leaving` until
/// their exit timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub task: Task,
    pub phase: Phase,
}

/// Authoritative task list plus the row projection the view renders.
///
/// `tasks` is the source of truth for every derived value. `rows` holds one
/// entry per live task in the same order, plus rows still playing their exit
/// transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    rows: Vec<Row>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.tasks)
    }

    #[instrument(skip(self, raw))]
    pub fn add(&mut self, raw: &str) -> Option<TaskId> {
        let Some(task) = Task::from_input(raw) else {
            debug!("ignoring blank task input");
            return None;
        };
        let id = task.id;
        self.insert(task).then_some(id)
    }

    /// Appends a task built elsewhere. Refuses blank text and ids that are
    /// already live or still on screen.
    #[instrument(skip(self, task), fields(id = %task.id))]
    pub fn insert(&mut self, task: Task) -> bool {
        if task.text.trim().is_empty() {
            debug!("refusing task with blank text");
            return false;
        }
        if self.rows.iter().any(|row| row.task.id == task.id) {
            debug!("refusing duplicate task id");
            return false;
        }
        debug!(total = self.tasks.len() + 1, "adding task");
        self.rows.push(Row {
            task: task.clone(),
            phase: Phase::Entering,
        });
        self.tasks.push(task);
        true
    }

    #[instrument(skip(self))]
    pub fn toggle(&mut self, id: TaskId, checked: bool) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("toggle for unknown task ignored");
            return false;
        };
        task.done = checked;
        if let Some(row) = self.rows.iter_mut().find(|row| row.task.id == id) {
            row.task.done = checked;
        }
        debug!(checked, "toggled task");
        true
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!("delete for unknown task ignored");
            return false;
        };
        self.tasks.remove(index);
        if let Some(row) = self.rows.iter_mut().find(|row| row.task.id == id)
            && let Some(next) = row.phase.leave()
        {
            row.phase = next;
        }
        debug!(total = self.tasks.len(), "deleted task");
        true
    }

    /// Ends the entry transition of a row. No-op unless the row is entering.
    #[instrument(skip(self))]
    pub fn settle(&mut self, id: TaskId) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.task.id == id) else {
            return false;
        };
        match row.phase.settle() {
            Some(next) => {
                row.phase = next;
                debug!("row settled");
                true
            }
            None => false,
        }
    }

    /// Finishes the exit transition of a leaving row and drops every row
    /// that is no longer visible.
    #[instrument(skip(self))]
    pub fn purge(&mut self, id: TaskId) -> bool {
        let Some(row) = self.rows.iter_mut().find(|row| row.task.id == id) else {
            return false;
        };
        let Some(next) = row.phase.finish() else {
            return false;
        };
        row.phase = next;
        self.rows.retain(|row| row.phase.is_visible());
        debug!(rows = self.rows.len(), "removed leaving row");
        true
    }
}
