//! Stable in-place merge sort over the nodes of a [`List`].
//!
//! Nodes are relinked, never moved in memory, so no element is cloned and no
//! temporary storage is allocated during merging.

use std::cmp::Ordering;
use std::ptr::NonNull;

use log::trace;

use crate::list::{connect, next_of, prev_of, Node};
use crate::List;

const INSERTION_SORT_THRESHOLD: usize = 8;

/// Sorts `list` so that `compare` never returns [`Ordering::Greater`] for two
/// adjacent elements. Elements comparing [`Ordering::Equal`] keep their
/// relative order.
pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut less = |a: &T, b: &T| compare(a, b) == Ordering::Less;
    let (start, end) = (list.front_node(), list.ghost_node());
    let len = list.len();
    if len < 2 {
        return;
    }
    // SAFETY: `start..end` covers all the `len >= 2` element nodes of the list.
    if len <= INSERTION_SORT_THRESHOLD {
        trace!("insertion sort of {} element(s)", len);
        unsafe { insertion_sort_range(start, end, &mut less) };
    } else {
        trace!("merge sort of {} element(s)", len);
        unsafe { merge_sort_range(start, end, &mut less) };
    }
}

/// Borrows the element of `node`.
///
/// It is unsafe because `node` must not be the ghost node.
#[inline]
unsafe fn element_of<'a, T>(node: NonNull<Node<T>>) -> &'a T {
    &(*node.as_ptr()).element
}

/// Returns the middle node of `start..end` and the length of the range.
unsafe fn mid_of_range<T>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
) -> (NonNull<Node<T>>, usize) {
    let mut mid = start;
    let mut len = 0;
    while start != end {
        len += 1;
        start = next_of(start);
        if start != end {
            len += 1;
            start = next_of(start);
            mid = next_of(mid);
        }
    }
    (mid, len)
}

/// Sorts `start..end` and returns its new front node. The nodes outside of the
/// range keep their links to the range boundaries.
unsafe fn merge_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut mid, len) = mid_of_range(start, end);
    if len <= INSERTION_SORT_THRESHOLD {
        return insertion_sort_range(start, end, less);
    }

    if start != mid && next_of(start) != mid {
        start = merge_sort_range(start, mid, less);
    }
    if mid != end && next_of(mid) != end {
        mid = merge_sort_range(mid, end, less);
    }

    if start != mid && mid != end {
        start = merge_range(start, mid, end, less);
    }
    start
}

/// Merges the sorted ranges `start..mid` and `mid..end`, and returns the new
/// front node of `start..end`.
unsafe fn merge_range<T, F>(
    mut start: NonNull<Node<T>>,
    mid: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    // `start..to_merge` is merged, `to_merge..end` is not. Runs of the
    // unmerged range are moved in front of the first merged node that is
    // strictly greater, which keeps equal elements in order.
    let (mut merged, merged_back, mut to_merge) = (start, prev_of(mid), mid);
    // Nothing to do once the front of the unmerged range is not less than the
    // back of the merged range.
    while to_merge != end && less(element_of(to_merge), element_of(merged_back)) {
        while merged != to_merge && !less(element_of(to_merge), element_of(merged)) {
            merged = next_of(merged);
        }
        if merged == to_merge {
            break;
        }

        // `to_merge..next_to_merge` are all less than `*merged`.
        let mut next_to_merge = next_of(to_merge);
        while next_to_merge != end && less(element_of(next_to_merge), element_of(merged)) {
            next_to_merge = next_of(next_to_merge);
        }
        if merged == start {
            start = to_merge;
        }
        move_nodes(to_merge, prev_of(next_to_merge), merged);
        to_merge = next_to_merge;
    }
    start
}

/// Sorts the non-empty range `start..end` by insertion and returns its new
/// front node.
unsafe fn insertion_sort_range<T, F>(
    mut start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut sorted_back, mut to_sort) = (start, next_of(start));
    loop {
        while to_sort != end && !less(element_of(to_sort), element_of(sorted_back)) {
            sorted_back = to_sort;
            to_sort = next_of(to_sort);
        }
        if to_sort == end {
            break;
        }
        // first sorted node strictly greater than `*to_sort`
        let mut sorted = start;
        while sorted != to_sort && !less(element_of(to_sort), element_of(sorted)) {
            sorted = next_of(sorted);
        }
        if sorted == start {
            start = to_sort;
        }
        let next = next_of(to_sort);
        move_node(std::mem::replace(&mut to_sort, next), sorted);
    }
    start
}

/// Moves the node `from` right before `to`.
unsafe fn move_node<T>(from: NonNull<Node<T>>, to: NonNull<Node<T>>) {
    move_nodes(from, from, to);
}

/// Moves the nodes `from_front..=from_back` right before `to`.
unsafe fn move_nodes<T>(
    from_front: NonNull<Node<T>>,
    from_back: NonNull<Node<T>>,
    to: NonNull<Node<T>>,
) {
    connect(prev_of(from_front), next_of(from_back));
    connect(prev_of(to), from_front);
    connect(from_back, to);
}
