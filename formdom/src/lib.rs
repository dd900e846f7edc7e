pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod select;
pub mod selector;

pub use document::{Document, NodeId};
pub use element::ElementSpec;
pub use error::DomError;
pub use event::ClickHandler;
pub use selector::SelectorList;
