use formdom::{Document, DomError, NodeId};

use crate::config::MoveButtonsConfig;
use crate::ops::{move_selected, move_selected_down, move_selected_up};

/// Prefix of the keys under which click listeners are registered.
///
/// Each trigger class gets its own key, so a button carrying two trigger
/// classes runs both handlers, and re-running the initializer replaces
/// listeners instead of stacking a second copy.
pub const LISTENER_KEY: &str = "move-buttons";

/// Listener key used for buttons matched by `class`.
pub fn listener_key(class: &str) -> String {
    format!("{LISTENER_KEY}:{class}")
}

/// Number of buttons wired per trigger class, plus those left unwired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wiring {
    /// Buttons wired to transfer options between two lists.
    pub transfer: usize,

    /// Buttons wired to move options up within a list.
    pub up: usize,

    /// Buttons wired to move options down within a list.
    pub down: usize,

    /// Buttons whose `data-*` references did not resolve.
    /// A button with two trigger classes counts once per class.
    pub skipped: usize,
}

impl Wiring {
    /// Total listeners attached across all trigger classes.
    pub fn wired(&self) -> usize {
        self.transfer + self.up + self.down
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Wire every move button in the document using the default markup conventions.
pub fn init_move_buttons(doc: &mut Document) -> Result<Wiring, DomError> {
    init_move_buttons_with(doc, &MoveButtonsConfig::default())
}

/// Wire every move button in the document.
///
/// Referenced selects are resolved once, here; the listeners capture them.
/// A button whose references do not resolve is left without a listener.
/// Fails only if a configured class name is not a valid selector.
pub fn init_move_buttons_with(
    doc: &mut Document,
    config: &MoveButtonsConfig,
) -> Result<Wiring, DomError> {
    let mut wiring = Wiring::default();

    // Move selected option(s) between lists
    let key = listener_key(&config.transfer_class);
    for button in doc.query_selector_all(&format!(".{}", config.transfer_class))? {
        let source = resolve(doc, config, button, "data-source");
        let target = resolve(doc, config, button, "data-target");
        match (source, target) {
            (Some(source), Some(target)) => {
                doc.set_click_listener(button, &key, move |doc| {
                    move_selected(doc, source, target).map(|_| ())
                })?;
                log::debug!("wired transfer button {button}: {source} -> {target}");
                wiring.transfer += 1;
            }
            _ => unwire(doc, button, &key, &mut wiring),
        }
    }

    // Move selected option(s) up or down in the current list
    for (class, direction) in [
        (&config.up_class, Direction::Up),
        (&config.down_class, Direction::Down),
    ] {
        let key = listener_key(class);
        for button in doc.query_selector_all(&format!(".{class}"))? {
            let Some(target) = resolve(doc, config, button, "data-target") else {
                unwire(doc, button, &key, &mut wiring);
                continue;
            };
            match direction {
                Direction::Up => {
                    doc.set_click_listener(button, &key, move |doc| {
                        move_selected_up(doc, target).map(|_| ())
                    })?;
                    wiring.up += 1;
                }
                Direction::Down => {
                    doc.set_click_listener(button, &key, move |doc| {
                        move_selected_down(doc, target).map(|_| ())
                    })?;
                    wiring.down += 1;
                }
            }
            log::debug!("wired {direction:?} button {button} for {target}");
        }
    }

    log::debug!(
        "move buttons initialized: {} wired, {} skipped",
        wiring.wired(),
        wiring.skipped
    );
    Ok(wiring)
}

fn resolve(
    doc: &Document,
    config: &MoveButtonsConfig,
    button: NodeId,
    attribute: &str,
) -> Option<NodeId> {
    let reference = doc.attribute(button, attribute)?;
    let id = config.element_id(reference);
    let found = doc.get_element_by_id(&id);
    if found.is_none() {
        log::debug!("button {button}: {attribute} references missing element #{id}");
    }
    found
}

fn unwire(doc: &mut Document, button: NodeId, key: &str, wiring: &mut Wiring) {
    // A previous initialization may have wired it against markup that has since changed.
    doc.remove_click_listener(button, key);
    wiring.skipped += 1;
}
