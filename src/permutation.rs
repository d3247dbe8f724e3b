// we have a vector of values
// we have a permutation (destinations)   2 0 1 3 ....
// which means   v[i] -> v'[p[i]]
// and we want to apply this permutation by swap(), in place.

use crate::error::PermutationError;
#[allow(unused)]
use tracing::{debug, trace};

// While a cycle is being resolved its entries are "biased" by -n. The arithmetic wraps, so a
// biased entry is any value >= n; the distinction holds as long as n <= isize::MAX.
fn mark(entry: usize, n: usize) -> usize {
    entry.wrapping_sub(n)
}

fn unmark(entry: usize, n: usize) -> usize {
    entry.wrapping_add(n)
}

fn is_marked(entry: usize, n: usize) -> bool {
    entry >= n
}

/// Undoes the bias on every entry when dropped, so the permutation is handed back intact on
/// every way out of the borrowing scope, unwinding included.
///
/// Only valid once all entries are known to be `< n`: an out-of-range entry would look marked.
struct Unbias<'a> {
    permutation: &'a mut [usize],
}

impl Drop for Unbias<'_> {
    fn drop(&mut self) {
        let n = self.permutation.len();
        for entry in self.permutation.iter_mut() {
            if is_marked(*entry, n) {
                *entry = unmark(*entry, n);
            }
        }
    }
}

fn check_length(values: usize, permutation: usize) -> Result<(), PermutationError> {
    if values != permutation {
        return Err(PermutationError::LengthMismatch {
            values,
            permutation,
        });
    }
    Ok(())
}

fn check_range(permutation: &[usize]) -> Result<(), PermutationError> {
    let len = permutation.len();
    match permutation.iter().position(|&value| value >= len) {
        Some(index) => Err(PermutationError::OutOfRange {
            index,
            value: permutation[index],
            len,
        }),
        None => Ok(()),
    }
}

/// Duplicate detection without a side table: every destination hit is marked in place.
/// All entries must already be in range.
fn check_duplicates_in_place(permutation: &mut [usize]) -> Result<(), PermutationError> {
    let n = permutation.len();
    let mut guard = Unbias { permutation };

    for i in 0..n {
        let entry = guard.permutation[i];
        let destination = if is_marked(entry, n) { unmark(entry, n) } else { entry };

        if is_marked(guard.permutation[destination], n) {
            return Err(PermutationError::Duplicate { value: destination });
        }
        guard.permutation[destination] = mark(guard.permutation[destination], n);
    }
    Ok(())
}

/// Read-only validation: `permutation` must have `len` entries and be a bijection on `0..len`.
pub fn check_permutation(permutation: &[usize], len: usize) -> Result<(), PermutationError> {
    check_length(len, permutation.len())?;
    check_range(permutation)?;

    let mut seen = vec![false; len];
    for &value in permutation {
        if seen[value] {
            return Err(PermutationError::Duplicate { value });
        }
        seen[value] = true;
    }
    Ok(())
}

/// Moves `values[i]` to `values[permutation[i]]` for every `i`, using O(1) extra memory.
///
/// Each cycle of the permutation is rotated through `values[start]`; resolved entries of
/// `permutation` are biased by `-len` to mark them, and the bias is removed before returning.
/// The permutation is validated first, so on error neither slice has been modified.
///
/// ```
/// let mut values = ['a', 'b', 'c', 'd'];
/// let mut permutation = [2, 0, 1, 3];
/// algo_drills::permutation::apply_permutation(&mut values, &mut permutation).unwrap();
/// assert_eq!(values, ['b', 'c', 'a', 'd']);
/// assert_eq!(permutation, [2, 0, 1, 3]);
/// ```
pub fn apply_permutation<T>(
    values: &mut [T],
    permutation: &mut [usize],
) -> Result<(), PermutationError> {
    check_length(values.len(), permutation.len())?;
    let n = permutation.len();
    // a slice of usize is at most isize::MAX / 8 long, so the bias is unambiguous
    debug_assert!(n <= isize::MAX as usize);
    check_range(permutation)?;
    check_duplicates_in_place(permutation)?;

    let mut guard = Unbias { permutation };
    let p = &mut *guard.permutation;

    for start in 0..n {
        if is_marked(p[start], n) {
            continue;
        }

        let mut current = start;
        let mut length = 0;
        while !is_marked(p[current], n) {
            let destination = p[current];
            trace!("{} -> {}", current, destination);
            values.swap(start, destination);
            p[current] = mark(destination, n);
            current = destination;
            length += 1;
        }
        debug!("cycle from {}: length {}", start, length);
    }
    Ok(())
}

/// Same result as [`apply_permutation`], but the visited set is an explicit bitmap and the
/// permutation is only borrowed.
pub fn apply_permutation_tracked<T>(
    values: &mut [T],
    permutation: &[usize],
) -> Result<(), PermutationError> {
    check_permutation(permutation, values.len())?;

    let mut placed = vec![false; values.len()];
    for start in 0..values.len() {
        let mut current = start;
        while !placed[current] {
            let destination = permutation[current];
            values.swap(start, destination);
            placed[current] = true;
            current = destination;
        }
    }
    Ok(())
}

/// The plain O(n) space version: a fresh vector with `out[permutation[i]] = values[i]`.
pub fn permuted<T: Clone>(values: &[T], permutation: &[usize]) -> Result<Vec<T>, PermutationError> {
    check_permutation(permutation, values.len())?;

    let mut out = values.to_vec();
    for (value, &destination) in values.iter().zip(permutation) {
        out[destination] = value.clone();
    }
    Ok(out)
}

/// The inverse action: afterwards `values[i]` holds what was at `values[permutation[i]]`.
pub fn gather_by_permutation<T>(
    values: &mut [T],
    permutation: &[usize],
) -> Result<(), PermutationError> {
    check_permutation(permutation, values.len())?;

    let mut visited = vec![false; values.len()];

    for start in 0..values.len() {
        if visited[start] {
            continue;
        }

        // For each cycle, we need to rotate elements
        // If we have cycle a -> b -> c -> a, we do: swap(a,b), swap(b,c)
        let mut current = start;
        let mut next = permutation[current];

        while next != start {
            values.swap(current, next);
            visited[current] = true;
            current = next;
            next = permutation[current];
        }
        visited[current] = true;
    }
    Ok(())
}

pub fn inverse_permutation(permutation: &[usize]) -> Result<Vec<usize>, PermutationError> {
    check_permutation(permutation, permutation.len())?;

    let mut inverse = vec![0; permutation.len()];
    for (i, &destination) in permutation.iter().enumerate() {
        inverse[destination] = i;
    }
    Ok(inverse)
}

/// Rearranges `values` into the lexicographically next permutation.
///
/// Returns `false`, leaving `values` untouched, if it is already the last one (non-increasing).
pub fn next_permutation<T: Ord>(values: &mut [T]) -> bool {
    // the longest non-increasing suffix starts right after `pivot`
    let Some(pivot) = values.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };

    // smallest value in the suffix that is larger than the pivot: the suffix is
    // non-increasing, so it is the rightmost one
    let Some(successor) = values.iter().rposition(|v| *v > values[pivot]) else {
        return false;
    };

    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}
