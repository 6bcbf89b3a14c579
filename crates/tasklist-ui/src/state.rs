use std::rc::Rc;

use tasklist_core::{
  Task,
  TaskBoard,
  TaskId
};
use yew::Reducible;

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetAction {
  Insert(Task),
  Toggle(TaskId, bool),
  Delete(TaskId),
  Settle(TaskId),
  Purge(TaskId)
}

impl WidgetAction {
  pub fn as_key(&self) -> &'static str {
    match self {
      | WidgetAction::Insert(_) => {
        "insert"
      }
      | WidgetAction::Toggle(..) => {
        "toggle"
      }
      | WidgetAction::Delete(_) => {
        "delete"
      }
      | WidgetAction::Settle(_) => {
        "settle"
      }
      | WidgetAction::Purge(_) => "purge"
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetState {
  pub board: TaskBoard
}

impl Reducible for WidgetState {
  type Action = WidgetAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let key = action.as_key();
    let mut board = self.board.clone();
    let changed = match action {
      | WidgetAction::Insert(task) => {
        board.insert(task)
      }
      | WidgetAction::Toggle(
        id,
        checked
      ) => board.toggle(id, checked),
      | WidgetAction::Delete(id) => {
        board.delete(id)
      }
      | WidgetAction::Settle(id) => {
        board.settle(id)
      }
      | WidgetAction::Purge(id) => {
        board.purge(id)
      }
    };

    tracing::trace!(
      action = key,
      changed,
      total = board.len(),
      "reduced widget action"
    );

    if changed {
      Rc::new(Self {
        board
      })
    } else {
      self
    }
  }
}

#[cfg(test)]
mod tests {
  use tasklist_core::{
    Phase,
    Stats
  };

  use super::*;

  fn apply(
    state: Rc<WidgetState>,
    action: WidgetAction
  ) -> Rc<WidgetState> {
    state.reduce(action)
  }

  #[test]
  fn unchanged_actions_keep_the_same_state()
  {
    let state =
      Rc::new(WidgetState::default());
    let next = apply(
      state.clone(),
      WidgetAction::Delete(TaskId::new())
    );
    assert!(Rc::ptr_eq(&state, &next));
  }

  #[test]
  fn insert_toggle_delete_purge() {
    let task = Task::from_input(
      "Buy milk"
    )
    .expect("task");
    let id = task.id;

    let state = apply(
      Rc::new(WidgetState::default()),
      WidgetAction::Insert(task)
    );
    let state = apply(
      state,
      WidgetAction::Toggle(id, true)
    );
    assert_eq!(
      state.board.stats(),
      Stats {
        done:  1,
        total: 1
      }
    );

    let state = apply(
      state,
      WidgetAction::Delete(id)
    );
    assert!(state.board.is_empty());
    assert_eq!(
      state.board.rows()[0].phase,
      Phase::Leaving
    );

    let state = apply(
      state,
      WidgetAction::Purge(id)
    );
    assert!(
      state.board.rows().is_empty()
    );
  }
}
