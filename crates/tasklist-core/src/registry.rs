use std::collections::BTreeMap;

use anyhow::bail;
use tracing::info;

const RESERVED_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Checks a custom element tag name against the platform's naming rules.
pub fn validate_tag(tag: &str) -> anyhow::Result<()> {
    let Some(first) = tag.chars().next() else {
        bail!("custom element name must not be empty");
    };
    if !first.is_ascii_lowercase() {
        bail!("custom element name {tag:?} must start with a lowercase ASCII letter");
    }
    if !tag.contains('-') {
        bail!("custom element name {tag:?} must contain a hyphen");
    }
    if let Some(bad) = tag
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_')))
    {
        bail!("custom element name {tag:?} contains invalid character {bad:?}");
    }
    if RESERVED_NAMES.contains(&tag) {
        bail!("custom element name {tag:?} is reserved");
    }
    Ok(())
}

/// One-time association between tag names and element factories.
#[derive(Debug, Clone)]
pub struct ElementRegistry<F> {
    entries: BTreeMap<String, F>,
}

impl<F> Default for ElementRegistry<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F> ElementRegistry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    #[tracing::instrument(skip(self, factory))]
    pub fn define(&mut self, tag: &str, factory: F) -> anyhow::Result<()> {
        validate_tag(tag)?;
        if self.entries.contains_key(tag) {
            bail!("custom element {tag:?} has already been defined");
        }
        self.entries.insert(tag.to_string(), factory);
        info!(tag, defined = self.entries.len(), "defined custom element");
        Ok(())
    }

    pub fn get(&self, tag: &str) -> Option<&F> {
        self.entries.get(tag)
    }

    /// Looks up a node by its DOM `tagName`, which HTML documents report in
    /// upper case.
    pub fn find_by_node_name(&self, node_name: &str) -> Option<(&str, &F)> {
        let tag = node_name.to_ascii_lowercase();
        self.entries
            .get_key_value(tag.as_str())
            .map(|(tag, factory)| (tag.as_str(), factory))
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Attachment state of a widget host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Unattached,
    Attached,
}

impl Lifecycle {
    pub const ATTRIBUTE: &'static str = "data-widget-state";

    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            Some("attached") => Lifecycle::Attached,
            _ => Lifecycle::Unattached,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Lifecycle::Unattached => "unattached",
            Lifecycle::Attached => "attached",
        }
    }

    /// Moves to `Attached`. Returns `None` when already attached.
    pub fn attach(self) -> Option<Self> {
        match self {
            Lifecycle::Unattached => Some(Lifecycle::Attached),
            Lifecycle::Attached => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_platform_style_names() {
        for tag in ["task-list", "x-1", "my-el.v2", "a-b_c"] {
            validate_tag(tag).unwrap_or_else(|err| panic!("{tag} rejected: {err}"));
        }
    }

    #[test]
    fn rejects_invalid_names() {
        for tag in ["", "tasklist", "Task-list", "1-task", "task-List", "task list-x", "font-face"] {
            assert!(validate_tag(tag).is_err(), "{tag:?} should be rejected");
        }
    }

    #[test]
    fn duplicate_definition_is_refused() {
        let mut registry = ElementRegistry::new();
        registry.define("task-list", 1_u8).expect("first define");

        let err = registry.define("task-list", 2_u8).expect_err("duplicate define");
        assert!(err.to_string().contains("already been defined"));
        assert_eq!(registry.get("task-list"), Some(&1));
    }

    #[test]
    fn invalid_name_leaves_registry_empty() {
        let mut registry = ElementRegistry::new();
        assert!(registry.define("tasklist", ()).is_err());
        assert_eq!(registry.tags().count(), 0);
        assert!(!registry.is_defined("tasklist"));
    }

    #[test]
    fn node_names_match_case_insensitively() {
        let mut registry = ElementRegistry::new();
        registry.define("task-list", 7_u8).expect("define");

        assert_eq!(registry.find_by_node_name("TASK-LIST"), Some(("task-list", &7)));
        assert_eq!(registry.find_by_node_name("task-list"), Some(("task-list", &7)));
        assert_eq!(registry.find_by_node_name("DIV"), None);
        assert_eq!(registry.find_by_node_name("TASK-LIST-ITEM"), None);
    }

    #[test]
    fn lifecycle_attaches_once() {
        let state = Lifecycle::from_attr(None);
        let attached = state.attach().expect("first attach");
        assert_eq!(attached.as_attr(), "attached");
        assert_eq!(Lifecycle::from_attr(Some(attached.as_attr())).attach(), None);
    }
}
