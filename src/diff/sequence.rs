use similar::{capture_diff_slices, Algorithm, DiffTag};
use std::collections::HashMap;
use tracing::trace;

use super::{SegmentKind, Unit};

/// Align units with a Myers diff over their keys.
///
/// Matched units come out as `Unchanged` carrying the new document's text.
/// Within a gap between matches, removals precede additions. A unit that
/// only moved is reported once, as unchanged at its new position.
pub fn align<'a>(new: &[Unit<'a>], old: &[Unit<'a>]) -> Vec<(SegmentKind, Unit<'a>)> {
    let mut ops = align_units(new, old);
    reconcile_moves(&mut ops);
    ops
}

fn align_units<'a>(new: &[Unit<'a>], old: &[Unit<'a>]) -> Vec<(SegmentKind, Unit<'a>)> {
    let old_keys: Vec<&str> = old.iter().map(|u| u.key).collect();
    let new_keys: Vec<&str> = new.iter().map(|u| u.key).collect();

    let diff_ops = capture_diff_slices(Algorithm::Myers, &old_keys, &new_keys);
    trace!(old_units = old.len(), new_units = new.len(), ops = diff_ops.len(), "aligned units");

    let mut ops = Vec::with_capacity(new.len() + old.len());
    let mut added = Vec::new();
    for op in &diff_ops {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                ops.append(&mut added);
                ops.extend(new[new_range].iter().map(|u| (SegmentKind::Unchanged, *u)));
            }
            DiffTag::Delete => {
                ops.extend(old[old_range].iter().map(|u| (SegmentKind::Removed, *u)));
            }
            DiffTag::Insert => {
                added.extend(new[new_range].iter().map(|u| (SegmentKind::Added, *u)));
            }
            DiffTag::Replace => {
                ops.extend(old[old_range].iter().map(|u| (SegmentKind::Removed, *u)));
                added.extend(new[new_range].iter().map(|u| (SegmentKind::Added, *u)));
            }
        }
    }
    ops.append(&mut added);
    ops
}

/// Pair up added and removed occurrences of the same unit. The added side
/// becomes unchanged and the removed side is dropped, so no key is reported
/// as both added and removed.
fn reconcile_moves(ops: &mut Vec<(SegmentKind, Unit<'_>)>) {
    let mut added: HashMap<&str, usize> = HashMap::new();
    let mut removed: HashMap<&str, usize> = HashMap::new();
    for (kind, unit) in ops.iter().filter(|(_, u)| !u.trivial) {
        match kind {
            SegmentKind::Added => *added.entry(unit.key).or_default() += 1,
            SegmentKind::Removed => *removed.entry(unit.key).or_default() += 1,
            SegmentKind::Unchanged => {}
        }
    }

    let mut moved: HashMap<&str, usize> = added
        .into_iter()
        .filter_map(|(key, count)| {
            let pairs = count.min(removed.get(key).copied().unwrap_or(0));
            (pairs > 0).then_some((key, pairs))
        })
        .collect();
    if moved.is_empty() {
        return;
    }

    trace!(moved = moved.len(), "reconciling moved units");

    let mut to_drop = moved.clone();
    for (kind, unit) in ops.iter_mut() {
        if *kind != SegmentKind::Added {
            continue;
        }
        if let Some(left) = moved.get_mut(unit.key).filter(|left| **left > 0) {
            *left -= 1;
            *kind = SegmentKind::Unchanged;
        }
    }

    ops.retain(|(kind, unit)| {
        if *kind != SegmentKind::Removed {
            return true;
        }
        match to_drop.get_mut(unit.key) {
            Some(left) if *left > 0 => {
                *left -= 1;
                false
            }
            _ => true,
        }
    });
}
