use tasklist_core::Stats;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskStatsProps {
  pub stats:   Stats,
  pub caption: String
}

#[function_component(TaskStats)]
pub fn task_stats(
  props: &TaskStatsProps
) -> Html {
  html! {
      <div class="task-stats">
          <span class="task-stats__value">
              <span id="task-done">{ props.stats.done.to_string() }</span>
              { "/" }
              <span id="task-total">{ props.stats.total.to_string() }</span>
          </span>
          <span>{ props.caption.clone() }</span>
      </div>
  }
}
