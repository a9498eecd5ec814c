use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod format;
mod position;

/// The `List` is an indexed sequence addressed by 1-based positions, backed by
/// a doubly-linked list with owned nodes, implemented as a cyclic list.
///
/// Appending, prepending and splicing a whole list take constant time. Reaching
/// a position walks from whichever end (or cursor) is nearest, so positional
/// operations take *O*(min(*p*, *n* - *p*)) time.
///
/// # Terms
///
/// - `position` counts from 1. Positions `1..=len` hold elements, and
///   `len + 1` is the ghost node, where insertions append.
/// - `front..=back` names a run of nodes including both ends.
/// - `start..end` names a run of nodes stopping before `end`, which is often
///   the ghost node.
pub struct List<T> {
    /// Payload-free sentinel; `ghost.next` is the first element and
    /// `ghost.prev` the last one.
    ghost: NonNull<Node<T>>,
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// `len` element nodes `front..=back` owned by no list. Only the links
/// inside the run are meaningful; `front.prev` and `back.next` are stale.
pub(crate) struct Run<T> {
    front: NonNull<Node<T>>,
    back: NonNull<Node<T>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Run<T> {
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

/// Reads `node.next`. The ghost node is accepted since only the links are
/// touched.
#[inline]
pub(crate) unsafe fn next_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).next
}

/// Reads `node.prev`. The ghost node is accepted since only the links are
/// touched.
#[inline]
pub(crate) unsafe fn prev_of<T>(node: NonNull<Node<T>>) -> NonNull<Node<T>> {
    (*node.as_ptr()).prev
}

/// Links `prev -> next` and `prev <- next`.
#[inline]
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    (*prev.as_ptr()).next = next;
    (*next.as_ptr()).prev = prev;
}

// node-level plumbing shared by cursors, splicing and sorting
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost
    }

    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: the ghost is always linked, to itself when the list is empty.
        unsafe { next_of(self.ghost) }
    }

    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: the ghost is always linked, to itself when the list is empty.
        unsafe { prev_of(self.ghost) }
    }

    /// Unlinks `front..=back` and hands the nodes over as a [`Run`].
    ///
    /// It is unsafe because `front..=back` must be `len > 0` element nodes of
    /// this list, in order.
    pub(crate) unsafe fn unlink_run(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
        len: usize,
    ) -> Run<T> {
        debug_assert!(len > 0 && len <= self.len, "unlinking {} of {}", len, self.len);
        connect(prev_of(front), next_of(back));
        self.len -= len;
        Run {
            front,
            back,
            len,
            _marker: PhantomData,
        }
    }

    /// Links every node of `run` right before `at`.
    ///
    /// It is unsafe because `at` must be a node of this list (the ghost node
    /// appends).
    pub(crate) unsafe fn link_run_before(&mut self, at: NonNull<Node<T>>, run: Run<T>) {
        connect(prev_of(at), run.front);
        connect(run.back, at);
        self.len += run.len;
    }

    /// Allocates a node for `element` and links it right before `at`.
    ///
    /// It is unsafe for the same reason as [`List::link_run_before`].
    pub(crate) unsafe fn link_element_before(&mut self, at: NonNull<Node<T>>, element: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })));
        let run = Run {
            front: node,
            back: node,
            len: 1,
            _marker: PhantomData,
        };
        self.link_run_before(at, run);
    }

    /// Unlinks `node`, frees it and returns its element.
    ///
    /// It is unsafe because `node` must be an element node of this list.
    pub(crate) unsafe fn unlink_element(&mut self, node: NonNull<Node<T>>) -> T {
        let run = self.unlink_run(node, node, 1);
        Box::from_raw(run.front.as_ptr()).element
    }

    /// Unlinks all the element nodes, leaving the list empty. `None` if it
    /// was already empty.
    pub(crate) fn take_run(&mut self) -> Option<Run<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: front..=back spans all `len` element nodes.
        unsafe { Some(self.unlink_run(self.front_node(), self.back_node(), self.len)) }
    }

    pub(crate) fn from_run(run: Run<T>) -> Self {
        let mut list = List::new();
        // SAFETY: the ghost belongs to `list`.
        unsafe { list.link_run_before(list.ghost_node(), run) };
        list
    }
}

impl<T> List<T> {
    /// An empty list. Only the ghost node is allocated.
    ///
    /// # Examples
    /// ```
    /// use indexed_list::List;
    /// let list = List::<u32>::new();
    /// assert_eq!((list.len(), list.to_string()), (0, "[]".to_string()));
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// A list holding a clone of every element of `source`, in order.
    ///
    /// The new list owns its own nodes; later changes to either side are
    /// not observed by the other.
    ///
    /// # Examples
    /// ```
    /// use indexed_list::List;
    ///
    /// let source = vec![1, 2, 3];
    /// let list = List::from_elements(&source);
    /// assert_eq!(list.to_vec(), source);
    /// ```
    pub fn from_elements(source: &[T]) -> Self
    where
        T: Clone,
    {
        source.iter().cloned().collect()
    }

    /// `true` when `len() == 0`, in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements, which is also the last element position. The
    /// count is stored, so this is *O*(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from(['b']);
    /// list.push_front('a');
    /// list.push_back('c');
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.element_at(list.len()), Ok(&'c'));
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements, front to back.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// The element at position 1, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().next()
    }

    /// The element at position `len`, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// if let Some(last) = list.back_mut() {
    ///     *last *= 10;
    /// }
    /// assert_eq!(list.element_at(2), Ok(&20));
    /// assert_eq!(List::<i32>::new().back_mut(), None);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.iter_mut().next_back()
    }

    /// Prepends `element` in *O*(1) time.
    pub fn push_front(&mut self, element: T) {
        // SAFETY: the front node belongs to the list.
        unsafe { self.link_element_before(self.front_node(), element) }
    }

    /// Removes the first element in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the front node of a non-empty list is an element node.
        unsafe { Some(self.unlink_element(self.front_node())) }
    }

    /// Appends `element` in *O*(1) time.
    pub fn push_back(&mut self, element: T) {
        // SAFETY: the ghost belongs to the list.
        unsafe { self.link_element_before(self.ghost, element) }
    }

    /// Removes the last element in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the back node of a non-empty list is an element node.
        unsafe { Some(self.unlink_element(self.back_node())) }
    }

    /// Provides a cursor at position 1, which is the ghost node if the list
    /// is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the ghost node (position `len + 1`).
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.ghost, self.len)
    }

    /// Like [`List::cursor_start`], with editing operations.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front, 0)
    }

    /// Like [`List::cursor_end`], with editing operations.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let (ghost, len) = (self.ghost, self.len);
        CursorMut::new(self, ghost, len)
    }

    /// Iterates from position 1 to `len`, or backwards with `rev()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let list = List::from([0, 1, 2]);
    /// assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&2, &1, &0]);
    /// assert_eq!(list.iter().len(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Like [`List::iter`], yielding `&mut T`.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Relinks every node of `other` after the last element in *O*(1) time,
    /// leaving `other` empty. Nothing is allocated or copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::List;
    ///
    /// let mut head = List::from(['a']);
    /// let mut rest = List::from(['b', 'c']);
    /// head.append(&mut rest);
    /// assert_eq!(head.to_vec(), vec!['a', 'b', 'c']);
    /// assert!(rest.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(run) = other.take_run() {
            // SAFETY: the ghost belongs to `self`.
            unsafe { self.link_run_before(self.ghost, run) }
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The ghost is allocated as a `Node<MaybeUninit<T>>`: its payload is never
/// initialized, read or dropped.
fn new_ghost<T>() -> NonNull<Node<T>> {
    let ghost: &mut Node<MaybeUninit<T>> = Box::leak(Box::new(Node {
        next: NonNull::dangling(),
        prev: NonNull::dangling(),
        element: MaybeUninit::uninit(),
    }));
    // `Node` is `#[repr(C)]` and `MaybeUninit<T>` is laid out like `T`.
    let ghost = NonNull::from(ghost).cast::<Node<T>>();
    // SAFETY: a freshly allocated ghost linked to itself is an empty list.
    unsafe { connect(ghost, ghost) };
    ghost
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        let ghost = self.ghost.cast::<Node<MaybeUninit<T>>>();
        // SAFETY: allocated by `new_ghost` with this very type.
        drop(unsafe { Box::from_raw(ghost.as_ptr()) });
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

#[allow(dead_code)]
fn covariant_in_element_type<'a>(
    list: List<&'static str>,
    iter: Iter<'a, &'static str>,
    into_iter: IntoIter<&'static str>,
) -> (List<&'a str>, Iter<'a, &'a str>, IntoIter<&'a str>) {
    (list, iter, into_iter)
}

#[cfg(test)]
mod tests {
    use crate::List;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    static_assertions::assert_impl_all!(List<i32>: Send, Sync, Default);
    static_assertions::assert_not_impl_any!(List<Rc<i32>>: Send, Sync);

    /// Records the order in which elements are dropped.
    struct Tracked<'a>(u8, &'a RefCell<Vec<u8>>);

    impl Drop for Tracked<'_> {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn elements_drop_front_to_back_exactly_once() {
        let log = RefCell::new(Vec::new());
        let mut list = List::new();
        for id in 1..=4 {
            list.append_element(Tracked(id, &log));
        }
        let removed = list.remove_element_at(2).unwrap();
        assert_eq!(*log.borrow(), Vec::<u8>::new());
        drop(removed);
        assert_eq!(*log.borrow(), vec![2]);

        let run = list.remove_elements_in_range(2, 3).unwrap();
        drop(list);
        assert_eq!(*log.borrow(), vec![2, 1]);
        drop(run);
        assert_eq!(*log.borrow(), vec![2, 1, 3, 4]);
    }

    #[test]
    fn ends_of_the_list() {
        let mut list = List::new();
        assert_eq!((list.front(), list.back()), (None, None));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert!(list.front_mut().is_none());

        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!((list.front(), list.back()), (Some(&1), Some(&3)));

        *list.front_mut().unwrap() *= 10;
        *list.back_mut().unwrap() *= 10;
        assert_eq!(list.element_at(1), Ok(&10));
        assert_eq!(list.element_at(3), Ok(&30));

        assert_eq!(list.pop_back(), Some(30));
        assert_eq!(list.pop_front(), Some(10));
        assert_eq!(list.pop_front(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.element_at(1).is_err(), true);
    }

    #[test]
    fn from_elements_copies_the_source() {
        let mut source = vec![1, 2, 3];
        let mut list = List::from_elements(&source);
        source[0] = 10;
        list.append_element(4);
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(source, vec![10, 2, 3]);

        let empty: List<i32> = List::from_elements(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty, List::default());
    }

    #[test]
    fn append_moves_every_node() {
        let mut list = List::from([1, 2]);
        let mut other = List::from([3, 4, 5]);
        list.append(&mut other);
        assert!(other.is_empty());
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);

        // appending an empty list is a no-op, and the drained list is reusable
        list.append(&mut other);
        other.append_element(6);
        list.append(&mut other);
        assert_eq!(list.len(), 6);
        assert_eq!(list.element_at(6), Ok(&6));

        let mut empty = List::new();
        empty.append(&mut list);
        assert_eq!(empty.len(), 6);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_then_reuse() {
        let mut list = List::from_iter(0..10);
        list.remove_all();
        assert_eq!(list.len(), 0);
        assert_eq!(list.to_string(), "[]");
        list.insert_element_before(7, 1).unwrap();
        assert_eq!(list.to_vec(), vec![7]);
    }
}
