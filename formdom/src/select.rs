//! `<select>` and `<option>` state.

use crate::document::{Document, NodeId};
use crate::error::DomError;

impl Document {
    /// The select's options: its direct `option` children in document order.
    /// Returns an empty list for anything that is not a `select`.
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        if self.tag_name(select) != Some("select") {
            return Vec::new();
        }
        self.children(select)
            .iter()
            .copied()
            .filter(|&child| self.tag_name(child) == Some("option"))
            .collect()
    }

    pub fn selected_options(&self, select: NodeId) -> Vec<NodeId> {
        self.options(select)
            .into_iter()
            .filter(|&option| self.is_selected(option))
            .collect()
    }

    pub fn is_selected(&self, option: NodeId) -> bool {
        self.element(option).is_some_and(|data| data.selected)
    }

    /// Set an option's selectedness. Selecting an option inside a select
    /// without the `multiple` attribute deselects its siblings.
    pub fn set_selected(&mut self, option: NodeId, selected: bool) -> Result<(), DomError> {
        self.node(option)?;
        if self.tag_name(option) != Some("option") {
            return Ok(());
        }

        if selected {
            if let Some(select) = self.parent(option) {
                if self.tag_name(select) == Some("select") && !self.has_attribute(select, "multiple") {
                    for sibling in self.options(select) {
                        if let Some(data) = self.element_mut(sibling) {
                            data.selected = false;
                        }
                    }
                }
            }
        }

        if let Some(data) = self.element_mut(option) {
            data.selected = selected;
        }
        Ok(())
    }

    /// The option's `value` attribute, falling back to its text.
    pub fn option_value(&self, option: NodeId) -> String {
        match self.attribute(option, "value") {
            Some(value) => value.to_string(),
            None => self.option_label(option),
        }
    }

    /// The option's text with surrounding whitespace trimmed.
    pub fn option_label(&self, option: NodeId) -> String {
        self.text_content(option).trim().to_string()
    }
}
