use alloc::vec::Vec;

use crate::key::{DiffItem, KeySet};
use crate::types::RowEdit;

/// Computes the minimal edit script that transforms `old` into `new`.
///
/// The two sequences are aligned by item identity (a longest common subsequence over keys), then:
/// - old items outside the alignment become `Removed` edits, highest old position first
/// - new items outside the alignment become `Inserted` edits, lowest new position first
/// - aligned identities whose contents differ become `Changed` edits at their new position
/// - aligned identities with equal contents emit nothing, so untouched rows are never redrawn
///
/// An identity present in both lists but reordered relative to the alignment surfaces as a
/// paired removal + insertion. Applying the script in order (removals, then insertions, then
/// changes) to a row surface rendering `old` yields a surface rendering `new` exactly.
///
/// This is a pure function: no I/O, no shared state, deterministic for given inputs, callable
/// from any thread. It is total over well-formed inputs; duplicate keys within one sequence
/// violate the caller contract and are only caught by a `debug_assert!` in debug builds.
///
/// The alignment is quadratic in list length, which is intended for screen-sized lists.
pub fn compute_edit_script<T: DiffItem>(old: &[T], new: &[T]) -> Vec<RowEdit<T::Key>> {
    debug_assert_unique_keys(old);
    debug_assert_unique_keys(new);

    if old.is_empty() {
        return new
            .iter()
            .enumerate()
            .map(|(position, item)| RowEdit::Inserted {
                position,
                key: item.key(),
            })
            .collect();
    }
    if new.is_empty() {
        return old
            .iter()
            .enumerate()
            .rev()
            .map(|(position, item)| RowEdit::Removed {
                position,
                key: item.key(),
            })
            .collect();
    }

    // Fast path: the same identities in the same order. This is the common resubmit case
    // (content-only updates), and it skips the quadratic alignment entirely.
    if old.len() == new.len()
        && old
            .iter()
            .zip(new)
            .all(|(before, after)| before.key() == after.key())
    {
        let edits: Vec<_> = old
            .iter()
            .zip(new)
            .enumerate()
            .filter(|(_, (before, after))| !before.contents_eq(after))
            .map(|(position, (_, after))| RowEdit::Changed {
                position,
                key: after.key(),
            })
            .collect();
        ctrace!(
            len = old.len(),
            changed = edits.len(),
            "compute_edit_script: in-place"
        );
        return edits;
    }

    let aligned = align_by_key(old, new);

    let mut in_old = alloc::vec![false; old.len()];
    let mut in_new = alloc::vec![false; new.len()];
    for &(i, j) in &aligned {
        in_old[i] = true;
        in_new[j] = true;
    }

    let mut edits = Vec::new();
    for position in (0..old.len()).rev() {
        if !in_old[position] {
            edits.push(RowEdit::Removed {
                position,
                key: old[position].key(),
            });
        }
    }
    for (position, item) in new.iter().enumerate() {
        if !in_new[position] {
            edits.push(RowEdit::Inserted {
                position,
                key: item.key(),
            });
        }
    }
    for &(i, j) in &aligned {
        if !old[i].contents_eq(&new[j]) {
            edits.push(RowEdit::Changed {
                position: j,
                key: new[j].key(),
            });
        }
    }

    ctrace!(
        old_len = old.len(),
        new_len = new.len(),
        edits = edits.len(),
        "compute_edit_script"
    );
    edits
}

/// Longest common subsequence over item keys, as ascending `(old index, new index)` pairs.
///
/// The aligned pairs appear in the same relative order in both sequences, which is what lets
/// insertions be applied at their final positions after the removals.
fn align_by_key<T: DiffItem>(old: &[T], new: &[T]) -> Vec<(usize, usize)> {
    let n = old.len();
    let m = new.len();

    // `lengths[i * (m + 1) + j]` is the LCS length of `old[i..]` and `new[j..]`.
    let mut lengths = alloc::vec![0usize; (n + 1) * (m + 1)];
    for i in (0..n).rev() {
        let old_key = old[i].key();
        for j in (0..m).rev() {
            lengths[i * (m + 1) + j] = if old_key == new[j].key() {
                lengths[(i + 1) * (m + 1) + (j + 1)] + 1
            } else {
                core::cmp::max(lengths[(i + 1) * (m + 1) + j], lengths[i * (m + 1) + (j + 1)])
            };
        }
    }

    let mut aligned = Vec::with_capacity(lengths[0]);
    let (mut i, mut j) = (0usize, 0usize);
    while i < n && j < m {
        if old[i].key() == new[j].key() {
            aligned.push((i, j));
            i += 1;
            j += 1;
        } else if lengths[(i + 1) * (m + 1) + j] >= lengths[i * (m + 1) + (j + 1)] {
            i += 1;
        } else {
            j += 1;
        }
    }
    aligned
}

fn debug_assert_unique_keys<T: DiffItem>(items: &[T]) {
    if cfg!(debug_assertions) {
        let mut seen = KeySet::<T::Key>::new();
        for (index, item) in items.iter().enumerate() {
            if !seen.insert(item.key()) {
                cwarn!(index, "duplicate item identity in input sequence");
                debug_assert!(false, "duplicate item identity at index {index}");
            }
        }
    }
}
