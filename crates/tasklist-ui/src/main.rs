mod components;
mod element;
mod state;
mod widget;

use gloo::console::log;
use tasklist_core::WidgetConfig;
use web_sys::Document;

const CONFIG_ELEMENT_ID: &str =
  "task-list-config";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting task list frontend"
  );

  let Some(document) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
  else {
    tracing::error!(
      "no document available; task \
       list not mounted"
    );
    return;
  };

  let config = load_config(&document);

  if let Err(err) =
    element::define_task_list()
  {
    tracing::error!(error = %err, "failed to define task list element");
    return;
  }

  match element::upgrade(
    &document, &config
  ) {
    | Ok(mounted) => {
      ui_debug(
        "app.mounted",
        &format!(
          "{mounted} task list \
           host(s) attached"
        )
      )
    }
    | Err(err) => {
      tracing::error!(error = %err, "failed to upgrade task list hosts")
    }
  }

  if let Err(err) =
    element::observe(&document, &config)
  {
    tracing::error!(error = %err, "failed to watch for inserted task list hosts");
  }
}

/// Reads the optional inline TOML block, falling back to defaults.
fn load_config(
  document: &Document
) -> WidgetConfig {
  let Some(raw) = document
    .get_element_by_id(
      CONFIG_ELEMENT_ID
    )
    .and_then(|node| node.text_content())
  else {
    tracing::debug!(
      "no inline widget config; using \
       defaults"
    );
    return WidgetConfig::default();
  };

  match WidgetConfig::from_toml_str(&raw)
  {
    | Ok(config) => config,
    | Err(err) => {
      tracing::warn!(error = %format!("{err:#}"), "invalid widget config; using defaults");
      WidgetConfig::default()
    }
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
