use std::rc::Rc;

use crate::document::{Document, NodeId};
use crate::error::DomError;

/// Click callback. Receives the document so it can mutate the tree.
pub type ClickHandler = Rc<dyn Fn(&mut Document) -> Result<(), DomError>>;

#[derive(Clone)]
pub(crate) struct Listener {
    key: Option<String>,
    handler: ClickHandler,
}

impl Document {
    /// Attach a click listener. Listeners run in registration order.
    pub fn add_click_listener<F>(&mut self, node: NodeId, handler: F) -> Result<(), DomError>
    where
        F: Fn(&mut Document) -> Result<(), DomError> + 'static,
    {
        self.node(node)?;
        self.listeners.entry(node).or_default().push(Listener {
            key: None,
            handler: Rc::new(handler),
        });
        Ok(())
    }

    /// Attach a click listener identified by `key`, replacing any listener
    /// previously registered on this node under the same key.
    ///
    /// Returns true if an existing listener was replaced.
    pub fn set_click_listener<F>(
        &mut self,
        node: NodeId,
        key: &str,
        handler: F,
    ) -> Result<bool, DomError>
    where
        F: Fn(&mut Document) -> Result<(), DomError> + 'static,
    {
        self.node(node)?;
        let listeners = self.listeners.entry(node).or_default();
        let listener = Listener {
            key: Some(key.to_string()),
            handler: Rc::new(handler),
        };

        match listeners.iter_mut().find(|l| l.key.as_deref() == Some(key)) {
            Some(existing) => {
                *existing = listener;
                Ok(true)
            }
            None => {
                listeners.push(listener);
                Ok(false)
            }
        }
    }

    /// Remove the listener registered under `key`. Returns true if one existed.
    pub fn remove_click_listener(&mut self, node: NodeId, key: &str) -> bool {
        let Some(listeners) = self.listeners.get_mut(&node) else {
            return false;
        };
        let before = listeners.len();
        listeners.retain(|l| l.key.as_deref() != Some(key));
        before != listeners.len()
    }

    pub fn click_listener_count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, Vec::len)
    }

    /// Dispatch a click to the node's listeners.
    ///
    /// Elements with a `disabled` attribute receive no clicks. A listener
    /// error is logged and does not stop the remaining listeners. Returns
    /// the number of listeners that ran.
    pub fn click(&mut self, node: NodeId) -> Result<usize, DomError> {
        self.node(node)?;
        if self.has_attribute(node, "disabled") {
            log::trace!("click on disabled {node} ignored");
            return Ok(0);
        }

        // Snapshot so listeners may add or replace listeners while running.
        let handlers: Vec<ClickHandler> = self
            .listeners
            .get(&node)
            .map(|ls| ls.iter().map(|l| Rc::clone(&l.handler)).collect())
            .unwrap_or_default();

        for handler in &handlers {
            if let Err(e) = handler(self) {
                log::warn!("click listener on {node} failed: {e}");
            }
        }
        Ok(handlers.len())
    }
}
