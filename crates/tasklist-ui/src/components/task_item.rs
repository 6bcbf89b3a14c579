use tasklist_core::{
  Phase,
  Row
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
  pub row:           Row,
  pub delete_button: String,
  pub delete_title:  String
}

pub fn row_class(row: &Row) -> String {
  let mut class =
    String::from("task-item");
  match row.phase {
    | Phase::Entering => {
      class.push_str(" task-item_enter")
    }
    | Phase::Leaving => {
      class.push_str(
        " task-item_leaving"
      )
    }
    | Phase::Idle | Phase::Removed => {}
  }
  if row.task.done {
    class.push_str(" task-item_done");
  }
  class
}

/// One list entry. Clicks are handled by the list container, so the row
/// only carries markup and its `data-id`.
#[function_component(TaskItem)]
pub fn task_item(
  props: &TaskItemProps
) -> Html {
  let row = &props.row;

  html! {
      <li
          class={row_class(row)}
          data-id={row.task.id.to_string()}
          data-phase={row.phase.as_key()}
      >
          <label class="task-item__main">
              <input
                  type="checkbox"
                  class="task-item__checkbox"
                  checked={row.task.done}
              />
              <span class="task-item__text">{ row.task.text.clone() }</span>
          </label>
          <button
              class="task-item__delete"
              type="button"
              title={props.delete_title.clone()}
          >
              <span class="task-item__delete-icon">{ "✕" }</span>
              { props.delete_button.clone() }
          </button>
      </li>
  }
}

#[cfg(test)]
mod tests {
  use tasklist_core::Task;

  use super::*;

  fn row(
    phase: Phase,
    done: bool
  ) -> Row {
    let mut task =
      Task::from_input("row")
        .expect("task");
    task.done = done;
    Row {
      task,
      phase
    }
  }

  #[test]
  fn entering_row_carries_enter_class() {
    assert_eq!(
      row_class(&row(
        Phase::Entering,
        false
      )),
      "task-item task-item_enter"
    );
  }

  #[test]
  fn idle_done_row() {
    assert_eq!(
      row_class(&row(Phase::Idle, true)),
      "task-item task-item_done"
    );
  }

  #[test]
  fn leaving_row_keeps_done_class() {
    assert_eq!(
      row_class(&row(
        Phase::Leaving,
        true
      )),
      "task-item task-item_leaving \
       task-item_done"
    );
  }
}
