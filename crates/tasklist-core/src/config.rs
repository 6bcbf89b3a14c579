use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

pub const MAX_DELAY_MS: u32 = 5_000;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(default)]
pub struct WidgetConfig {
  pub labels:  Labels,
  pub timings: Timings
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct Labels {
  pub title:         String,
  pub stats_caption: String,
  pub placeholder:   String,
  pub add_button:    String,
  pub delete_button: String,
  pub delete_title:  String,
  pub empty_message: String
}

impl Default for Labels {
  fn default() -> Self {
    Self {
      title:         "Список задач"
        .to_string(),
      stats_caption: "выполнено"
        .to_string(),
      placeholder:   "Введите задачу и \
                      нажмите Enter…"
        .to_string(),
      add_button:    "Добавить"
        .to_string(),
      delete_button: "Удалить"
        .to_string(),
      delete_title:  "Удалить задачу"
        .to_string(),
      empty_message: "Пока нет задач. \
                      Добавьте первую ✨"
        .to_string()
    }
  }
}

/// Transition delays in milliseconds.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(default)]
pub struct Timings {
  pub enter_ms: u32,
  pub leave_ms: u32
}

impl Default for Timings {
  fn default() -> Self {
    Self {
      enter_ms: 230,
      leave_ms: 190
    }
  }
}

impl Timings {
  fn clamped(self) -> Self {
    Self {
      enter_ms: self
        .enter_ms
        .min(MAX_DELAY_MS),
      leave_ms: self
        .leave_ms
        .min(MAX_DELAY_MS)
    }
  }
}

impl WidgetConfig {
  #[tracing::instrument(skip_all)]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: WidgetConfig =
      toml::from_str(raw).context(
        "failed to parse widget \
         config"
      )?;
    cfg.timings = cfg.timings.clamped();
    debug!(
      enter_ms = cfg.timings.enter_ms,
      leave_ms = cfg.timings.leave_ms,
      "loaded widget config"
    );
    Ok(cfg)
  }
}
