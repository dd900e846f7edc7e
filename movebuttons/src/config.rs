//! Markup conventions the initializer looks for.

/// Trigger classes and the id prefix used to resolve `data-*` references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveButtonsConfig {
    /// Class of buttons that transfer selected options from source to target.
    pub transfer_class: String,

    /// Class of buttons that move selected options up within the target.
    pub up_class: String,

    /// Class of buttons that move selected options down within the target.
    pub down_class: String,

    /// Prepended to `data-source` / `data-target` values to form element ids.
    pub id_prefix: String,
}

impl Default for MoveButtonsConfig {
    fn default() -> Self {
        Self {
            transfer_class: "move-option".to_string(),
            up_class: "move-option-up".to_string(),
            down_class: "move-option-down".to_string(),
            id_prefix: "id_".to_string(),
        }
    }
}

impl MoveButtonsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transfer_class(mut self, class: impl Into<String>) -> Self {
        self.transfer_class = class.into();
        self
    }

    pub fn up_class(mut self, class: impl Into<String>) -> Self {
        self.up_class = class.into();
        self
    }

    pub fn down_class(mut self, class: impl Into<String>) -> Self {
        self.down_class = class.into();
        self
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Element id referenced by a `data-source` / `data-target` value.
    pub fn element_id(&self, reference: &str) -> String {
        format!("{}{reference}", self.id_prefix)
    }
}
