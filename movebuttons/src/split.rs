//! Two side-by-side multi-selects: available choices on the left, chosen
//! choices on the right, with move buttons between them.

use formdom::{Document, DomError, ElementSpec, NodeId};

use crate::config::MoveButtonsConfig;

/// A selectable value and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for Choice {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// Builder for the split multi-select widget.
///
/// For a field named `tags` it mounts `select#id_tags_0` (available) and
/// `select#id_tags_1.select-all` (chosen), Add/Remove transfer buttons and,
/// with [`ordering`](Self::ordering), up/down buttons for the chosen list.
#[derive(Debug, Clone)]
pub struct SplitMultiSelect {
    name: String,
    choices: Vec<Choice>,
    value: Vec<String>,
    ordering: bool,
    size: u16,
    config: MoveButtonsConfig,
}

/// Nodes created by [`SplitMultiSelect::mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMultiSelectHandle {
    pub container: NodeId,
    pub available: NodeId,
    pub chosen: NodeId,
}

impl SplitMultiSelect {
    pub fn new<C: Into<Choice>>(name: impl Into<String>, choices: impl IntoIterator<Item = C>) -> Self {
        Self {
            name: name.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            value: Vec::new(),
            ordering: false,
            size: 8,
            config: MoveButtonsConfig::default(),
        }
    }

    /// Values that start out in the chosen list.
    pub fn value<S: Into<String>>(mut self, value: impl IntoIterator<Item = S>) -> Self {
        self.value = value.into_iter().map(Into::into).collect();
        self
    }

    /// Add up/down buttons for the chosen list. Enable only when the order
    /// of the chosen values matters.
    pub fn ordering(mut self, ordering: bool) -> Self {
        self.ordering = ordering;
        self
    }

    /// Visible rows of each list.
    pub fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    pub fn config(mut self, config: MoveButtonsConfig) -> Self {
        self.config = config;
        self
    }

    fn list_name(&self, index: u8) -> String {
        format!("{}_{index}", self.name)
    }

    fn list(&self, index: u8, chosen: bool) -> ElementSpec {
        let name = self.list_name(index);
        let options = self
            .choices
            .iter()
            .filter(|choice| self.value.contains(&choice.value) == chosen)
            .map(|choice| ElementSpec::option(&choice.value, &choice.label));

        let mut select = ElementSpec::select()
            .id(self.config.element_id(&name))
            .attr("name", name)
            .attr("size", self.size.to_string())
            .multiple()
            .children(options);
        if chosen {
            select = select.class("select-all");
        }
        select
    }

    fn transfer_button(&self, label: &str, source: &str, target: &str) -> ElementSpec {
        ElementSpec::button(label)
            .class("btn")
            .class(&self.config.transfer_class)
            .data("source", source)
            .data("target", target)
    }

    /// Build the widget under `parent`.
    ///
    /// Buttons are not wired here; run the initializer once the page is built.
    pub fn mount(&self, doc: &mut Document, parent: NodeId) -> Result<SplitMultiSelectHandle, DomError> {
        let available_name = self.list_name(0);
        let chosen_name = self.list_name(1);

        let mut buttons = ElementSpec::div()
            .class("split-multi-select-buttons")
            .child(self.transfer_button("Add", &available_name, &chosen_name))
            .child(self.transfer_button("Remove", &chosen_name, &available_name));
        if self.ordering {
            buttons = buttons
                .child(
                    ElementSpec::button("Move up")
                        .class("btn")
                        .class(&self.config.up_class)
                        .data("target", &chosen_name),
                )
                .child(
                    ElementSpec::button("Move down")
                        .class("btn")
                        .class(&self.config.down_class)
                        .data("target", &chosen_name),
                );
        }

        let container = doc.mount(
            parent,
            ElementSpec::div()
                .class("split-multi-select")
                .child(self.list(0, false))
                .child(buttons)
                .child(self.list(1, true)),
        )?;

        let available_id = self.config.element_id(&available_name);
        let chosen_id = self.config.element_id(&chosen_name);
        let find = |id: &str| {
            doc.descendants(container)
                .into_iter()
                .find(|&node| doc.attribute(node, "id") == Some(id))
        };
        let (Some(available), Some(chosen)) = (find(&available_id), find(&chosen_id)) else {
            return Err(DomError::NotFound(container));
        };

        Ok(SplitMultiSelectHandle {
            container,
            available,
            chosen,
        })
    }
}

/// Submitted value of the widget named `name` under the default markup
/// conventions.
pub fn value_from_document(doc: &Document, name: &str) -> Vec<String> {
    value_from_document_with(doc, name, &MoveButtonsConfig::default())
}

/// Submitted value of the widget named `name`: every option of the chosen
/// list, in its current order. Empty if the list is not in the document.
pub fn value_from_document_with(
    doc: &Document,
    name: &str,
    config: &MoveButtonsConfig,
) -> Vec<String> {
    let Some(chosen) = doc.get_element_by_id(&config.element_id(&format!("{name}_1"))) else {
        return Vec::new();
    };
    doc.options(chosen)
        .into_iter()
        .map(|option| doc.option_value(option))
        .collect()
}
