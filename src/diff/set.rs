use std::collections::{HashMap, HashSet};

use super::{SegmentKind, Unit};

/// Set-membership alignment kept for compatibility with the historical
/// notebook client.
///
/// Each distinct unit gets one decision: repeated units in the new text are
/// emitted once, and a unit moved elsewhere counts as unchanged. Removed
/// units follow the nearest shared unit that preceded them in the old text.
pub fn align<'a>(new: &[Unit<'a>], old: &[Unit<'a>]) -> Vec<(SegmentKind, Unit<'a>)> {
    let new_keys: HashSet<&str> = new.iter().filter(|u| !u.trivial).map(|u| u.key).collect();
    let old_keys: HashSet<&str> = old.iter().filter(|u| !u.trivial).map(|u| u.key).collect();

    let mut removed_after: HashMap<Option<&str>, Vec<Unit<'a>>> = HashMap::new();
    let mut removed_seen = HashSet::new();
    let mut anchor = None;
    for unit in old.iter().filter(|u| !u.trivial) {
        if new_keys.contains(unit.key) {
            anchor = Some(unit.key);
        } else if removed_seen.insert(unit.key) {
            removed_after.entry(anchor).or_default().push(*unit);
        }
    }

    let mut ops = Vec::with_capacity(new.len() + removed_seen.len());
    if let Some(leading) = removed_after.remove(&None) {
        ops.extend(leading.into_iter().map(|u| (SegmentKind::Removed, u)));
    }

    let mut emitted = HashSet::new();
    for unit in new {
        if unit.trivial {
            ops.push((SegmentKind::Unchanged, *unit));
            continue;
        }
        if !emitted.insert(unit.key) {
            continue;
        }

        if old_keys.contains(unit.key) {
            ops.push((SegmentKind::Unchanged, *unit));
            if let Some(following) = removed_after.remove(&Some(unit.key)) {
                ops.extend(following.into_iter().map(|u| (SegmentKind::Removed, u)));
            }
        } else {
            ops.push((SegmentKind::Added, *unit));
        }
    }

    ops
}
