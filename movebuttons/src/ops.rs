//! The three option operations.
//!
//! Each one snapshots the option list before touching the tree and walks the
//! snapshot, so removals and insertions never shift the indices being scanned.

use formdom::{Document, DomError, NodeId};

/// Move every selected option of `source` to the end of `target`.
///
/// Options are deep-cloned into `target` and the originals removed from
/// `source`, in source order. Clones do not carry the selection over.
/// Returns the number of options moved.
pub fn move_selected(doc: &mut Document, source: NodeId, target: NodeId) -> Result<usize, DomError> {
    let mut moved = 0;

    for option in doc.options(source) {
        if !doc.is_selected(option) {
            continue;
        }
        let copy = doc.clone_node(option, true)?;
        doc.append_child(target, copy)?;
        doc.remove(option)?;
        moved += 1;
    }

    log::trace!("moved {moved} option(s) from {source} to {target}");
    Ok(moved)
}

/// Shift every selected option of `select` one slot toward the start.
///
/// Selected options already packed at the front have nowhere to go and stay
/// put; the option at index 0 never moves. Returns the number moved.
pub fn move_selected_up(doc: &mut Document, select: NodeId) -> Result<usize, DomError> {
    let options = doc.options(select);
    let selected: Vec<bool> = options.iter().map(|&o| doc.is_selected(o)).collect();

    // Index of the first slot not occupied by a pinned selected option.
    let mut floor = 0;
    let mut moved = 0;

    for (i, &option) in options.iter().enumerate() {
        if !selected[i] {
            continue;
        }
        if i == floor {
            floor += 1;
            continue;
        }

        let Some(&previous) = doc.options(select).get(i - 1) else {
            continue;
        };
        doc.remove_child(select, option)?;
        doc.insert_before(select, option, Some(previous))?;
        moved += 1;
    }

    log::trace!("moved {moved} option(s) up in {select}");
    Ok(moved)
}

/// Shift every selected option of `select` one slot toward the end.
///
/// Scans from the end so a selected block moves as a unit past its
/// unselected neighbour. Selected options already packed at the end stay
/// put; the last option never moves. Returns the number moved.
pub fn move_selected_down(doc: &mut Document, select: NodeId) -> Result<usize, DomError> {
    let options = doc.options(select);
    let selected: Vec<bool> = options.iter().map(|&o| doc.is_selected(o)).collect();

    // Options at or beyond this index are pinned to the end.
    let mut ceiling = options.len();
    let mut moved = 0;

    for (i, &option) in options.iter().enumerate().rev() {
        if !selected[i] {
            continue;
        }
        if i + 1 == ceiling {
            ceiling -= 1;
            continue;
        }

        let Some(&next) = doc.options(select).get(i + 1) else {
            continue;
        };
        let option = doc.remove_child(select, option)?;
        let next = doc.replace_child(select, option, next)?;
        doc.insert_before(select, next, Some(option))?;
        moved += 1;
    }

    log::trace!("moved {moved} option(s) down in {select}");
    Ok(moved)
}
