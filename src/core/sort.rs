//! Insertion sort over integer lists.

/// Sort `values` ascending, in place, with insertion sort.
///
/// Shifts only strictly-greater predecessors, so equal values keep their
/// relative order. Lengths 0 and 1 are no-ops.
pub fn insertion_sort(values: &mut [i64]) {
    for i in 1..values.len() {
        let current = values[i];
        let mut slot = i;
        while slot > 0 && values[slot - 1] > current {
            values[slot] = values[slot - 1];
            slot -= 1;
        }
        values[slot] = current;
    }
}

/// Sort each list independently, preserving the order of the lists.
pub fn sort_lists(mut lists: Vec<Vec<i64>>) -> Vec<Vec<i64>> {
    for list in &mut lists {
        insertion_sort(list);
    }
    lists
}
