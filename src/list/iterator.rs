//! Borrowing and owning iterators over a [`List`], and the conversions built
//! on them.

use crate::list::{next_of, prev_of, List, Node};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// `len` element nodes `start..end` still to be walked, from either end.
///
/// The walk stops on `len`, not on `start == end`, so a span may end at any
/// node, the ghost included.
struct Span<T> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    len: usize,
}

impl<T> Clone for Span<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Span<T> {}

impl<T> Span<T> {
    fn take_front(&mut self) -> Option<NonNull<Node<T>>> {
        if self.len == 0 {
            return None;
        }
        let node = self.start;
        // SAFETY: `len > 0`, so `start` is an element node with a successor.
        self.start = unsafe { next_of(node) };
        self.len -= 1;
        Some(node)
    }

    fn take_back(&mut self) -> Option<NonNull<Node<T>>> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so `end.prev` is an element node of the span.
        self.end = unsafe { prev_of(self.end) };
        self.len -= 1;
        Some(self.end)
    }
}

/// An iterator over the elements of a `List`, or over the tail of one when
/// built by [`Cursor::iter`](crate::list::cursor::Cursor::iter).
///
/// # Examples
///
/// The list cannot be changed while an `Iter` is alive.
/// ```compile_fail
/// use indexed_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
/// list.append_element(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self::from_range(list.front_node(), list.ghost_node(), list.len())
    }

    /// `start..end` must be `len` element nodes of a list borrowed for `'a`.
    pub(crate) fn from_range(start: NonNull<Node<T>>, end: NonNull<Node<T>>, len: usize) -> Self {
        Self {
            span: Span { start, end, len },
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            span: self.span,
            _marker: PhantomData,
        }
    }
}

/// An iterator over mutable references to the elements of a `List`.
///
/// # Examples
///
/// The list cannot be read while an `IterMut` is alive.
/// ```compile_fail
/// use indexed_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.element_at(1));
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    span: Span<T>,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        Self {
            span: Span {
                start: list.front_node(),
                end: list.ghost_node(),
                len: list.len(),
            },
            _marker: PhantomData,
        }
    }
}

/// Implements the iterator traits of a span walker, turning each taken node
/// into an item with `|$node| $item`.
macro_rules! span_iterator {
    ($Iter:ident => $Item:ty, |$node:ident| $item:expr) => {
        impl<'a, T: 'a> Iterator for $Iter<'a, T> {
            type Item = $Item;

            fn next(&mut self) -> Option<$Item> {
                // SAFETY: the span yields each element node once, and the list
                // is borrowed for `'a`.
                self.span.take_front().map(|$node| unsafe { $item })
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.span.len, Some(self.span.len))
            }
        }

        impl<'a, T: 'a> DoubleEndedIterator for $Iter<'a, T> {
            fn next_back(&mut self) -> Option<$Item> {
                // SAFETY: as in `next`.
                self.span.take_back().map(|$node| unsafe { $item })
            }
        }

        impl<'a, T: 'a> ExactSizeIterator for $Iter<'a, T> {}

        impl<'a, T: 'a> FusedIterator for $Iter<'a, T> {}
    };
}

span_iterator!(Iter => &'a T, |node| &(*node.as_ptr()).element);
span_iterator!(IterMut => &'a mut T, |node| &mut (*node.as_ptr()).element);

/// An owning iterator over the elements of a `List`, created by
/// [`List::into_iter`]. Elements not yet yielded are dropped with it.
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

/// Appends every element, as [`List::append_elements`] does.
impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        List::from_iter(array)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(vec: Vec<T>) -> Self {
        List::from_iter(vec)
    }
}

impl<T: Clone> From<&[T]> for List<T> {
    fn from(slice: &[T]) -> Self {
        List::from_elements(slice)
    }
}

impl<T> List<T> {
    /// Copies the elements into a new `Vec`, position 1 first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Moves the elements into a new `Vec`, position 1 first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.extend(self);
        vec
    }
}

// `Iter` behaves like `&T` and `IterMut` like `&mut T`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use super::{IntoIter, Iter, IterMut};
    use crate::List;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::iter::FusedIterator;
    use std::rc::Rc;

    static_assertions::assert_impl_all!(
        Iter<'static, i32>: Send, Sync, Clone, ExactSizeIterator, DoubleEndedIterator, FusedIterator
    );
    static_assertions::assert_impl_all!(
        IterMut<'static, i32>: Send, Sync, ExactSizeIterator, DoubleEndedIterator, FusedIterator
    );
    static_assertions::assert_impl_all!(IterMut<'static, Cell<i32>>: Send);
    static_assertions::assert_not_impl_any!(Iter<'static, Cell<i32>>: Send, Sync);
    static_assertions::assert_not_impl_any!(IterMut<'static, Cell<i32>>: Sync);
    static_assertions::assert_impl_all!(IntoIter<String>: Send, Sync, ExactSizeIterator);
    static_assertions::assert_not_impl_any!(IntoIter<Rc<i32>>: Send, Sync);

    #[test]
    fn cursor_tails_at_every_position() {
        for len in 0..8 {
            let list = List::from_iter(1..=len);
            for position in 1..=len + 1 {
                let cursor = list.cursor(position).unwrap();
                let tail = cursor.iter();
                assert_eq!(tail.len(), len + 1 - position);
                assert_eq!(tail.copied().collect::<Vec<_>>(), Vec::from_iter(position..=len));
                assert_eq!(
                    cursor.iter().rev().copied().collect::<Vec<_>>(),
                    Vec::from_iter((position..=len).rev())
                );
            }
        }
    }

    #[test]
    fn cursor_tail_outlives_the_cursor() {
        let list = List::from(['a', 'b', 'c', 'd']);
        let mut tail = {
            let mut cursor = list.cursor_end();
            cursor.move_prev();
            cursor.move_prev();
            cursor.iter()
        };
        assert_eq!(tail.next_back(), Some(&'d'));
        assert_eq!(tail.len(), 1);
        assert_eq!(tail.next(), Some(&'c'));
        assert_eq!((tail.next(), tail.next_back()), (None, None));
    }

    #[test]
    fn len_follows_bulk_edits() {
        let mut list = List::from_iter(0..10);
        list.insert_elements_before(&mut List::from([-1, -2, -3]), 4).unwrap();
        assert_eq!(list.iter().len(), 13);
        assert_eq!(list.iter_mut().len(), 13);
        assert_eq!(list.element_at(4), Ok(&-1));

        let removed = list.remove_elements_in_range(2, 6).unwrap();
        assert_eq!(removed.iter().len(), 5);
        assert_eq!(removed.to_vec(), vec![1, 2, -1, -2, -3]);
        assert_eq!(list.iter().len(), 8);
        assert_eq!(list.cursor(3).unwrap().iter().len(), 6);

        let mut iter = list.into_iter();
        assert_eq!(iter.len(), 8);
        iter.next_back();
        assert_eq!(iter.size_hint(), (7, Some(7)));
    }

    #[test]
    fn both_ends_meet_in_the_middle() {
        for len in 0..7 {
            let list = List::from_iter(0..len);
            let mut iter = list.iter();
            let (mut front, mut back) = (Vec::new(), Vec::new());
            for step in 0..len {
                let item = if step % 2 == 0 { iter.next() } else { iter.next_back() };
                match item {
                    Some(&value) if step % 2 == 0 => front.push(value),
                    Some(&value) => back.push(value),
                    None => unreachable!("yielded fewer than {} elements", len),
                }
                assert_eq!(iter.len(), len - step - 1);
            }
            assert_eq!((iter.next(), iter.next_back()), (None, None));
            assert_eq!(iter.next(), None);

            back.reverse();
            front.extend(back);
            assert_eq!(front, Vec::from_iter(0..len));
        }
    }

    #[test]
    fn iter_mut_edits_in_place() {
        let mut list = List::from_iter(1..=6);
        for (value, step) in list.iter_mut().rev().zip(0..) {
            *value += step * 10;
        }
        assert_eq!(list.to_vec(), vec![51, 42, 33, 24, 15, 6]);

        let mut iter = list.iter_mut();
        *iter.next().unwrap() = 0;
        *iter.next_back().unwrap() = 0;
        assert_eq!(iter.len(), 4);
        drop(iter);
        assert_eq!(list.to_vec(), vec![0, 42, 33, 24, 15, 0]);

        for value in &mut list {
            *value = -*value;
        }
        assert_eq!(list.iter().sum::<i32>(), -114);
    }

    #[test]
    fn cloned_iter_walks_independently() {
        let list = List::from([1, 2, 3]);
        let mut iter = list.iter();
        iter.next();
        let copy = iter.clone();
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(copy.copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn into_iter_drops_what_it_did_not_yield() {
        let counter = Rc::new(());
        let list = List::from_iter((0..5).map(|_| Rc::clone(&counter)));
        assert_eq!(Rc::strong_count(&counter), 6);

        let mut iter = list.into_iter();
        let first = iter.next();
        let last = iter.next_back();
        assert_eq!(iter.len(), 3);
        drop(iter);
        assert_eq!(Rc::strong_count(&counter), 3);
        drop((first, last));
        assert_eq!(Rc::strong_count(&counter), 1);
    }

    #[test]
    fn conversions() {
        let list = List::from(vec!['x', 'y']);
        assert_eq!(list.to_vec(), vec!['x', 'y']);
        let slice: &[char] = &['x', 'y'];
        assert_eq!(List::from(slice), list);
        assert_eq!(list.into_vec(), vec!['x', 'y']);

        let mut list = List::from([1]);
        list.extend(&[2, 3]);
        list.extend(vec![4]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
        assert_eq!((&list).into_iter().len(), 4);
        assert_eq!(List::<u8>::new().into_vec(), Vec::<u8>::new());
    }
}
