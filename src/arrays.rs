pub mod digits;
pub mod stock;

use crate::error::InputError;
use std::cmp::Ordering;
#[allow(unused)]
use tracing::{debug, trace};

/// Dutch national flag: values smaller than `values[pivot_index]` first, then the equal ones,
/// then the larger ones. One pass, in place.
pub fn dutch_flag_partition<T: Ord + Clone>(
    values: &mut [T],
    pivot_index: usize,
) -> Result<(), InputError> {
    let pivot = values
        .get(pivot_index)
        .cloned()
        .ok_or(InputError::PivotOutOfRange {
            pivot: pivot_index,
            len: values.len(),
        })?;

    // [0, smaller) < pivot,  [smaller, equal) == pivot,  [larger, len) > pivot
    let mut smaller = 0;
    let mut equal = 0;
    let mut larger = values.len();

    while equal < larger {
        match values[equal].cmp(&pivot) {
            Ordering::Less => {
                values.swap(smaller, equal);
                smaller += 1;
                equal += 1;
            }
            Ordering::Equal => equal += 1,
            Ordering::Greater => {
                larger -= 1;
                values.swap(equal, larger);
            }
        }
    }
    debug!("partition: {} smaller, {} equal", smaller, equal - smaller);
    Ok(())
}

/// `steps[i]` is how far one may advance from `i`. Can the last index be reached from 0?
pub fn can_reach_end(steps: &[usize]) -> bool {
    let last = steps.len().saturating_sub(1);
    let mut furthest = 0;

    let mut i = 0;
    while i <= furthest && furthest < last {
        furthest = furthest.max(i.saturating_add(steps[i]));
        i += 1;
    }
    trace!("furthest reachable index {}", furthest);
    furthest >= last
}

/// Keeps the first of every run of equal values at the front, clears the rest to
/// `T::default()` and returns how many remain. `values` must be sorted.
pub fn dedup_sorted<T: PartialEq + Default>(values: &mut [T]) -> usize {
    if values.is_empty() {
        return 0;
    }

    let mut write = 1;
    for read in 1..values.len() {
        if values[read] != values[write - 1] {
            values.swap(write, read);
            write += 1;
        }
    }
    for value in &mut values[write..] {
        *value = T::default();
    }
    write
}

/// Each value is moved right after the last one not greater than it: an upper-bound search
/// followed by a rotation.
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for i in 1..values.len() {
        let position = values[..i].partition_point(|v| v <= &values[i]);
        values[position..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_partitioned(values: &[i32], pivot: i32) -> bool {
        let first_equal = values.iter().position(|&v| v >= pivot).unwrap_or(values.len());
        let first_larger = values.iter().position(|&v| v > pivot).unwrap_or(values.len());
        values[..first_equal].iter().all(|&v| v < pivot)
            && values[first_equal..first_larger].iter().all(|&v| v == pivot)
            && values[first_larger..].iter().all(|&v| v > pivot)
    }

    #[test]
    fn test_dutch_flag() {
        let mut values = vec![6, 2, 1, 5, 4, 3, 0, 3, 3];
        dutch_flag_partition(&mut values, 5).unwrap();
        assert!(is_partitioned(&values, 3));
        assert_eq!(values.iter().filter(|&&v| v == 3).count(), 3);

        let mut values = vec![1, 0, 3, 2];
        dutch_flag_partition(&mut values, 3).unwrap();
        assert!(is_partitioned(&values, 2));

        let mut single = vec![7];
        dutch_flag_partition(&mut single, 0).unwrap();
        assert_eq!(single, vec![7]);
    }

    #[test]
    fn test_dutch_flag_bad_pivot() {
        let mut values = vec![1, 2];
        assert_eq!(
            dutch_flag_partition(&mut values, 2),
            Err(InputError::PivotOutOfRange { pivot: 2, len: 2 })
        );
        let mut empty: Vec<i32> = vec![];
        assert!(dutch_flag_partition(&mut empty, 0).is_err());
    }

    #[test]
    fn test_can_reach_end() {
        assert!(can_reach_end(&[3, 3, 1, 0, 2, 0, 1]));
        assert!(!can_reach_end(&[3, 2, 0, 0, 2, 0, 1]));
        assert!(can_reach_end(&[0]));
        assert!(can_reach_end(&[]));
        assert!(!can_reach_end(&[0, 1]));
        assert!(can_reach_end(&[usize::MAX, 0, 0]));
    }

    #[test]
    fn test_dedup_sorted() {
        let mut values = [1, 1, 2, 3, 7, 7, 7];
        assert_eq!(dedup_sorted(&mut values), 4);
        assert_eq!(values, [1, 2, 3, 7, 0, 0, 0]);

        let mut values = [5, 5, 5];
        assert_eq!(dedup_sorted(&mut values), 1);
        assert_eq!(values, [5, 0, 0]);

        let mut empty: [u8; 0] = [];
        assert_eq!(dedup_sorted(&mut empty), 0);
    }

    #[test]
    fn test_insertion_sort() {
        let mut values = [5, 2, 9, 1, 5, 6, 0];
        insertion_sort(&mut values);
        assert_eq!(values, [0, 1, 2, 5, 5, 6, 9]);

        let mut words = ["pear", "apple", "fig"];
        insertion_sort(&mut words);
        assert_eq!(words, ["apple", "fig", "pear"]);
    }
}
