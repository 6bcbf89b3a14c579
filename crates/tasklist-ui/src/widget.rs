use gloo::timers::future::TimeoutFuture;
use tasklist_core::{
  Task,
  TaskId,
  WidgetConfig
};
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  HtmlInputElement
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_reducer
};
use yew::functional::UseReducerDispatcher;

use crate::components::{
  TaskItem,
  TaskStats
};
use crate::state::{
  WidgetAction,
  WidgetState
};
use crate::ui_debug;

#[derive(Properties, PartialEq)]
pub struct TaskWidgetProps {
  #[prop_or_default]
  pub config: WidgetConfig
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ListGesture {
  Toggle(TaskId, bool),
  Delete(TaskId)
}

/// What a click inside the list container landed on.
#[derive(Debug, Clone, Copy, Default)]
struct ClickTarget<'a> {
  row_id:    Option<&'a str>,
  checkbox:  Option<bool>,
  in_delete: bool
}

fn route_list_click(
  target: ClickTarget<'_>
) -> Option<ListGesture> {
  let id = target
    .row_id
    .and_then(TaskId::parse)?;
  if let Some(checked) = target.checkbox
  {
    return Some(ListGesture::Toggle(
      id, checked
    ));
  }
  target
    .in_delete
    .then_some(ListGesture::Delete(id))
}

/// Reads the clicked element and the row it belongs to.
fn classify_list_click(
  target: &Element
) -> Option<ListGesture> {
  let item = target
    .closest(".task-item")
    .ok()
    .flatten()?;
  let row_id =
    item.get_attribute("data-id");

  let checkbox = if target
    .class_list()
    .contains("task-item__checkbox")
  {
    Some(
      target
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::checked)?
    )
  } else {
    None
  };
  let in_delete = target
    .closest(".task-item__delete")
    .ok()
    .flatten()
    .is_some();

  route_list_click(ClickTarget {
    row_id: row_id.as_deref(),
    checkbox,
    in_delete
  })
}

fn schedule(
  dispatcher: UseReducerDispatcher<
    WidgetState
  >,
  delay_ms: u32,
  action: WidgetAction
) {
  wasm_bindgen_futures::spawn_local(
    async move {
      TimeoutFuture::new(delay_ms).await;
      dispatcher.dispatch(action);
    }
  );
}

trait TaskInput {
  fn current_value(&self) -> String;
  fn clear(&self);
  fn refocus(&self) -> Result<(), String>;
}

impl TaskInput for HtmlInputElement {
  fn current_value(&self) -> String {
    self.value()
  }

  fn clear(&self) {
    self.set_value("");
  }

  fn refocus(
    &self
  ) -> Result<(), String> {
    self
      .focus()
      .map_err(|e| format!("{e:?}"))
  }
}

/// Turns the field into a task. Blank input is left in place; a committed
/// task clears the field and returns focus to it.
fn commit_input(
  input: &impl TaskInput
) -> Option<Task> {
  let task = Task::from_input(
    &input.current_value()
  )?;
  input.clear();
  if let Err(err) = input.refocus() {
    tracing::warn!(
      error = %err,
      "failed to refocus task input"
    );
  }
  Some(task)
}

#[function_component(TaskWidget)]
pub fn task_widget(
  props: &TaskWidgetProps
) -> Html {
  let state =
    use_reducer(WidgetState::default);
  let input_ref = use_node_ref();
  let labels = &props.config.labels;
  let timings = props.config.timings;

  {
    use_effect_with((), move |_| {
      ui_debug(
        "widget.attached",
        "task list structure \
         materialized"
      );
      || ()
    });
  }

  let on_submit = {
    let dispatcher = state.dispatcher();
    let input_ref = input_ref.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        let Some(input) = input_ref
          .cast::<HtmlInputElement>()
        else {
          return;
        };
        let Some(task) =
          commit_input(&input)
        else {
          tracing::debug!(
            "blank task input ignored"
          );
          return;
        };
        let id = task.id;
        tracing::info!(%id, "adding task");
        dispatcher.dispatch(
          WidgetAction::Insert(task)
        );
        schedule(
          dispatcher.clone(),
          timings.enter_ms,
          WidgetAction::Settle(id)
        );
      }
    )
  };

  let on_list_click = {
    let dispatcher = state.dispatcher();
    Callback::from(
      move |e: MouseEvent| {
        let Some(target) =
          e.target_dyn_into::<Element>()
        else {
          return;
        };
        match classify_list_click(
          &target
        ) {
          | Some(ListGesture::Toggle(
            id,
            checked
          )) => {
            tracing::info!(%id, checked, "toggling task");
            dispatcher.dispatch(
              WidgetAction::Toggle(
                id, checked
              )
            );
          }
          | Some(ListGesture::Delete(
            id
          )) => {
            tracing::info!(%id, "deleting task");
            dispatcher.dispatch(
              WidgetAction::Delete(id)
            );
            schedule(
              dispatcher.clone(),
              timings.leave_ms,
              WidgetAction::Purge(id)
            );
          }
          | None => {}
        }
      }
    )
  };

  let board = &state.board;
  let empty_style = if board.is_empty()
  {
    "display:block"
  } else {
    "display:none"
  };

  html! {
      <div class="task-list">
          <div class="task-list__inner">
              <header class="task-list__header">
                  <div>
                      <h1 class="task-list__title">{ labels.title.clone() }</h1>
                  </div>
                  <TaskStats stats={board.stats()} caption={labels.stats_caption.clone()} />
              </header>

              <form id="task-form" class="task-form" autocomplete="off" onsubmit={on_submit}>
                  <input
                      ref={input_ref}
                      id="task-input"
                      class="task-form__input"
                      type="text"
                      placeholder={labels.placeholder.clone()}
                      required={true}
                  />
                  <button class="task-form__button" type="submit">
                      { labels.add_button.clone() }
                  </button>
              </form>

              <ul id="task-list-items" class="task-list__items" onclick={on_list_click}>
                  {
                      for board.rows().iter().filter(|row| row.phase.is_visible()).cloned().map(|row| html! {
                          <TaskItem
                              key={row.task.id.to_string()}
                              row={row.clone()}
                              delete_button={labels.delete_button.clone()}
                              delete_title={labels.delete_title.clone()}
                          />
                      })
                  }
              </ul>
              <div id="task-empty" class="task-empty" style={empty_style}>
                  { labels.empty_message.clone() }
              </div>
          </div>
      </div>
  }
}
