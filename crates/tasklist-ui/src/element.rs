use std::cell::RefCell;

use js_sys::Array;
use tasklist_core::{
  ElementRegistry,
  Lifecycle,
  TASK_LIST_TAG,
  WidgetConfig
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
  Document,
  Element,
  MutationObserver,
  MutationObserverInit,
  MutationRecord,
  NodeList
};

use crate::widget::{
  TaskWidget,
  TaskWidgetProps
};

pub type ElementFactory =
  fn(Element, &WidgetConfig);

thread_local! {
  static REGISTRY: RefCell<ElementRegistry<ElementFactory>> =
    RefCell::new(ElementRegistry::new());
}

fn mount_task_list(
  host: Element,
  config: &WidgetConfig
) {
  yew::Renderer::<TaskWidget>::with_root_and_props(
    host,
    TaskWidgetProps {
      config: config.clone()
    }
  )
  .render();
}

/// Registers the `task-list` element. Call once at startup.
pub fn define_task_list()
-> Result<(), String> {
  REGISTRY.with(|registry| {
    registry
      .borrow_mut()
      .define(
        TASK_LIST_TAG,
        mount_task_list as ElementFactory
      )
      .map_err(|e| format!("{e:#}"))
  })
}

/// Marks the host attached. Returns `false` when it already was.
fn attach(host: &Element) -> bool {
  let current = Lifecycle::from_attr(
    host
      .get_attribute(
        Lifecycle::ATTRIBUTE
      )
      .as_deref()
  );
  let Some(next) = current.attach()
  else {
    return false;
  };
  if let Err(err) = host.set_attribute(
    Lifecycle::ATTRIBUTE,
    next.as_attr()
  ) {
    tracing::warn!(
      error = ?err,
      "failed to mark widget host"
    );
    return false;
  }
  true
}

fn defined_factories()
-> Vec<(String, ElementFactory)> {
  REGISTRY.with(|registry| {
    let registry = registry.borrow();
    registry
      .tags()
      .filter_map(|tag| {
        registry
          .get(tag)
          .map(|factory| {
            (tag.to_string(), *factory)
          })
      })
      .collect()
  })
}

fn mount_hosts(
  tag: &str,
  factory: ElementFactory,
  hosts: &NodeList,
  config: &WidgetConfig
) -> usize {
  let mut mounted = 0;
  for index in 0..hosts.length() {
    let Some(host) = hosts
      .item(index)
      .and_then(|node| {
        node.dyn_into::<Element>().ok()
      })
    else {
      continue;
    };
    if !attach(&host) {
      tracing::debug!(
        tag,
        index,
        "host already attached"
      );
      continue;
    }
    factory(host, config);
    mounted += 1;
  }
  mounted
}

/// Mounts every defined element found in `document` that has not been
/// attached yet. Returns how many hosts were mounted.
pub fn upgrade(
  document: &Document,
  config: &WidgetConfig
) -> Result<usize, String> {
  let mut mounted = 0;
  for (tag, factory) in
    defined_factories()
  {
    let hosts = document
      .query_selector_all(&tag)
      .map_err(|e| {
        format!(
          "failed to query <{tag}> \
           hosts: {e:?}"
        )
      })?;
    mounted += mount_hosts(
      &tag, factory, &hosts, config
    );
    tracing::info!(
      tag = %tag,
      hosts = hosts.length(),
      "upgraded custom element hosts"
    );
  }

  Ok(mounted)
}

/// Mounts `root` itself when it is a defined element, then any defined
/// hosts below it.
fn upgrade_subtree(
  root: &Element,
  config: &WidgetConfig
) -> usize {
  let mut mounted = 0;

  let own = REGISTRY.with(|registry| {
    registry
      .borrow()
      .find_by_node_name(&root.tag_name())
      .map(|(tag, factory)| {
        (tag.to_string(), *factory)
      })
  });
  if let Some((tag, factory)) = own
    && attach(root)
  {
    tracing::debug!(tag = %tag, "mounting inserted host");
    factory(root.clone(), config);
    mounted += 1;
  }

  for (tag, factory) in
    defined_factories()
  {
    match root.query_selector_all(&tag)
    {
      | Ok(hosts) => {
        mounted += mount_hosts(
          &tag, factory, &hosts, config
        );
      }
      | Err(err) => {
        tracing::warn!(
          tag = %tag,
          error = ?err,
          "failed to query inserted subtree"
        );
      }
    }
  }

  mounted
}

/// Watches the document body so hosts inserted after startup are mounted
/// as soon as they are connected.
pub fn observe(
  document: &Document,
  config: &WidgetConfig
) -> Result<(), String> {
  let body = document.body().ok_or_else(|| {
    "document has no body to observe"
      .to_string()
  })?;

  let config = config.clone();
  let on_mutation = Closure::<
    dyn FnMut(Array, MutationObserver)
  >::new(
    move |records: Array,
          _observer: MutationObserver| {
      for record in records.iter() {
        let Ok(record) =
          record.dyn_into::<MutationRecord>()
        else {
          continue;
        };
        let added = record.added_nodes();
        for index in 0..added.length() {
          let Some(root) = added
            .item(index)
            .and_then(|node| {
              node.dyn_into::<Element>().ok()
            })
          else {
            continue;
          };
          let mounted =
            upgrade_subtree(&root, &config);
          if mounted > 0 {
            tracing::info!(
              mounted,
              "mounted inserted task list hosts"
            );
          }
        }
      }
    }
  );

  let observer = MutationObserver::new(
    on_mutation.as_ref().unchecked_ref()
  )
  .map_err(|e| {
    format!(
      "failed to create mutation \
       observer: {e:?}"
    )
  })?;
  let options = MutationObserverInit::new();
  options.set_child_list(true);
  options.set_subtree(true);
  observer
    .observe_with_options(&body, &options)
    .map_err(|e| {
      format!(
        "failed to observe document \
         body: {e:?}"
      )
    })?;

  // The observer holds the callback for the lifetime of the page.
  on_mutation.forget();
  Ok(())
}
