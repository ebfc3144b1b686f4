//! Pure reorder math for id lists.
//!
//! Every move on the board — pointer drop, keyboard commit, status change —
//! funnels through these functions, so the removal-shift index adjustment
//! lives in exactly one place.

/// Result of a cross-list move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedLists {
    pub source: Vec<String>,
    pub destination: Vec<String>,
}

/// Destination index for a same-list move, corrected for the left shift
/// caused by removing the source element first. Callers must apply this
/// exactly once.
pub fn adjusted_destination(from: usize, to: usize) -> usize {
    if from < to { to.saturating_sub(1) } else { to }
}

/// Move the element at `from` to `to` within one list.
///
/// `to` is interpreted pre-removal, so moving index 0 to index 3 of a
/// four-element list lands the element last. Returns `None` when the move is
/// out of range or lands the element back where it started, leaving the
/// caller free to skip a redundant re-render.
pub fn move_within(list: &[String], from: usize, to: usize) -> Option<Vec<String>> {
    if from >= list.len() {
        return None;
    }
    let dest = adjusted_destination(from, to).min(list.len() - 1);
    if dest == from {
        return None;
    }
    let mut next = list.to_vec();
    let id = next.remove(from);
    next.insert(dest, id);
    Some(next)
}

/// Move the element at `from` in `source` into `destination` at `to`.
///
/// `to` is clamped to `[0, destination.len()]`; `destination.len()` means
/// append. Returns `None` when `from` is out of range.
pub fn move_between(
    source: &[String],
    destination: &[String],
    from: usize,
    to: usize,
) -> Option<MovedLists> {
    if from >= source.len() {
        return None;
    }
    let mut new_source = source.to_vec();
    let id = new_source.remove(from);
    let mut new_destination = destination.to_vec();
    let dest = to.min(new_destination.len());
    new_destination.insert(dest, id);
    Some(MovedLists {
        source: new_source,
        destination: new_destination,
    })
}
