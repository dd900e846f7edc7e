//! Buttons that transfer and reorder `<option>`s between `<select>` lists.
//!
//! Buttons carry one of the trigger classes (`move-option`,
//! `move-option-up`, `move-option-down`) and `data-source` / `data-target`
//! attributes naming the select ids without their `id_` prefix.
//! [`init_move_buttons`] wires them once the document is built.

pub mod config;
pub mod init;
pub mod ops;
pub mod split;

pub use config::MoveButtonsConfig;
pub use init::{init_move_buttons, init_move_buttons_with, listener_key, Wiring, LISTENER_KEY};
pub use ops::{move_selected, move_selected_down, move_selected_up};
pub use split::{
    value_from_document, value_from_document_with, Choice, SplitMultiSelect, SplitMultiSelectHandle,
};
